//! Startup sequence: configuration, fragment parsing, token decode.
//!
//! Runs once before the first render and produces the immutable
//! [`SiteState`] snapshot every component reads from.

use auth::{decode_id_token, parse_fragment, IdentityClaims, ID_TOKEN_KEY};
use ui::{SocialLink, UserViewModel};

use crate::config::{site_config, SiteConfig};

/// The page's whole model: static configuration plus whatever identity the
/// login redirect carried.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteState {
    pub config: SiteConfig,
    pub user: Option<IdentityClaims>,
}

/// Build the page state from the current href.
///
/// A fragment without an `id_token`, or one whose token fails to decode,
/// degrades to signed-out; a decode fault is logged but never aborts the
/// remaining page regions.
pub fn init(href: &str) -> SiteState {
    let config = site_config();
    let params = parse_fragment(href);
    let user = params
        .get(ID_TOKEN_KEY)
        .and_then(|token| match decode_id_token(token) {
            Ok(claims) => Some(claims),
            Err(err) => {
                tracing::warn!("discarding id_token from URL fragment: {err}");
                None
            }
        });
    SiteState { config, user }
}

impl SiteState {
    pub fn signed_in(&self) -> bool {
        self.user.as_ref().is_some_and(IdentityClaims::has_name)
    }

    /// Icon set for the header slot; the footer set is unconditional.
    pub fn header_links(&self) -> &[SocialLink] {
        if self.signed_in() {
            &self.config.header_signed_in
        } else {
            &self.config.header_signed_out
        }
    }

    pub fn user_panel_model(&self) -> UserViewModel {
        UserViewModel {
            login_url: self.config.cognito.login_url(),
            user: self.user.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::engine::general_purpose::URL_SAFE_NO_PAD;
    use base64::Engine;
    use serde_json::json;

    fn href_with_token(payload: serde_json::Value) -> String {
        let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"RS256","typ":"JWT"}"#);
        let payload = URL_SAFE_NO_PAD.encode(payload.to_string());
        format!("https://bndlawncare33511.com/#id_token={header}.{payload}.sig&expires_in=3600")
    }

    #[test]
    fn bare_href_boots_signed_out() {
        let state = init("https://bndlawncare33511.com/");
        assert!(!state.signed_in());
        assert_eq!(state.header_links()[0].icon, "sign-in");
        let model = state.user_panel_model();
        assert!(model.user.is_none());
        assert!(model
            .login_url
            .contains("client_id=17k1bghjq8f110kp3lsj197lpn"));
        assert!(model.login_url.contains("response_type=token"));
    }

    #[test]
    fn redirect_with_named_token_boots_signed_in() {
        let href = href_with_token(json!({
            "name": "Jane Doe",
            "email": "jane@example.com",
            "phone_number": "+18135550100",
            "address": { "formatted": "123 Sod St" },
        }));
        let state = init(&href);
        assert!(state.signed_in());
        assert_eq!(state.header_links()[0].icon, "sign-out");
        let user = state.user.unwrap();
        assert_eq!(user.name.as_deref(), Some("Jane Doe"));
        assert_eq!(user.phone.as_deref(), Some("+18135550100"));
        assert_eq!(user.address.as_deref(), Some("123 Sod St"));
    }

    #[test]
    fn nameless_token_keeps_the_signed_out_header() {
        let href = href_with_token(json!({ "email": "jane@example.com" }));
        let state = init(&href);
        assert!(state.user.is_some());
        assert!(!state.signed_in());
        assert_eq!(state.header_links()[0].icon, "sign-in");
    }

    #[test]
    fn garbage_token_degrades_to_signed_out() {
        let state = init("https://bndlawncare33511.com/#id_token=garbage");
        assert!(state.user.is_none());
        assert!(!state.signed_in());
    }

    #[test]
    fn gallery_config_spans_twelve_entries() {
        let state = init("https://bndlawncare33511.com/");
        let entries = ui::photo_entries(state.config.gallery.size);
        assert_eq!(entries.len(), 12);
        assert_eq!(entries[0].path(), "images/before/1.jpg");
        assert_eq!(entries[6].path(), "images/after/1.jpg");
        assert_eq!(entries[11].path(), "images/after/6.jpg");
    }
}
