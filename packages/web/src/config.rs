//! Static site configuration.
//!
//! Everything the page shows is fixed at build time and constructed once at
//! startup; there is no ambient global state. The Cognito values identify
//! the production user pool and app client.

use auth::CognitoConfig;
use ui::{GalleryConfig, SocialLink};

const COGNITO_DOMAIN: &str = "https://bndlawncare33511.auth.us-east-1.amazoncognito.com";
const COGNITO_CLIENT_ID: &str = "17k1bghjq8f110kp3lsj197lpn";
const SITE_URL: &str = "https://bndlawncare33511.com/";

const GALLERY_SIZE: usize = 6;

/// The immutable configuration the page renders from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    pub cognito: CognitoConfig,
    pub gallery: GalleryConfig,
    /// Header links shown while signed in (sign-out first).
    pub header_signed_in: Vec<SocialLink>,
    /// Header links shown while signed out (sign-in first).
    pub header_signed_out: Vec<SocialLink>,
    pub footer: Vec<SocialLink>,
}

/// Build the site configuration literals.
pub fn site_config() -> SiteConfig {
    let cognito = CognitoConfig::new(COGNITO_DOMAIN, COGNITO_CLIENT_ID, SITE_URL);

    let facebook = SocialLink::new(
        "https://www.facebook.com/b.dlawncare33511",
        "facebook",
        "Facebook",
    );
    let cashapp = SocialLink::new("https://cash.app/", "usd", "Cashapp");
    let square = SocialLink::new("https://squareup.com/us/en", "credit-card", "Square");
    let top = SocialLink::new("#top", "arrow-circle-up", "Top");
    let sign_in = SocialLink::new(cognito.login_url(), "sign-in", "Sign In");
    let sign_out = SocialLink::new(cognito.logout_url(), "sign-out", "Sign Out");

    SiteConfig {
        header_signed_in: vec![sign_out, facebook.clone()],
        header_signed_out: vec![sign_in, facebook.clone()],
        footer: vec![facebook, cashapp, square, top],
        gallery: GalleryConfig { size: GALLERY_SIZE },
        cognito,
    }
}
