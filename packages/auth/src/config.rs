//! Cognito hosted-UI configuration.

/// Settings for the Cognito hosted login/logout pages.
///
/// The site never calls these endpoints itself; the derived URLs are only
/// rendered as link targets. After login Cognito redirects back to
/// `redirect_uri` with the tokens in the URL fragment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CognitoConfig {
    /// Hosted-UI origin, e.g. `https://<pool-domain>.auth.<region>.amazoncognito.com`.
    pub domain: String,
    /// App-client id registered with the user pool.
    pub client_id: String,
    /// Where the hosted UI sends the browser back to.
    pub redirect_uri: String,
}

/// Scopes requested from the hosted login page.
const LOGIN_SCOPE: &str = "email+openid+phone+profile";

impl CognitoConfig {
    pub fn new(
        domain: impl Into<String>,
        client_id: impl Into<String>,
        redirect_uri: impl Into<String>,
    ) -> Self {
        Self {
            domain: domain.into(),
            client_id: client_id.into(),
            redirect_uri: redirect_uri.into(),
        }
    }

    /// Hosted login URL using the implicit flow, so the id token comes back
    /// in the redirect fragment.
    pub fn login_url(&self) -> String {
        format!(
            "{}/login?client_id={}&redirect_uri={}&response_type=token&scope={}",
            self.domain, self.client_id, self.redirect_uri, LOGIN_SCOPE
        )
    }

    /// Hosted logout URL; sends the browser back to `redirect_uri` with no
    /// fragment, which the bootstrap reads as signed-out.
    pub fn logout_url(&self) -> String {
        format!(
            "{}/login?client_id={}&logout_uri={}",
            self.domain, self.client_id, self.redirect_uri
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> CognitoConfig {
        CognitoConfig::new(
            "https://pool.auth.us-east-1.amazoncognito.com",
            "client123",
            "https://example.com/",
        )
    }

    #[test]
    fn login_url_carries_client_and_scopes() {
        let url = config().login_url();
        assert!(url.starts_with("https://pool.auth.us-east-1.amazoncognito.com/login?"));
        assert!(url.contains("client_id=client123"));
        assert!(url.contains("redirect_uri=https://example.com/"));
        assert!(url.contains("response_type=token"));
        assert!(url.contains("scope=email+openid+phone+profile"));
    }

    #[test]
    fn logout_url_redirects_home() {
        let url = config().logout_url();
        assert!(url.contains("client_id=client123"));
        assert!(url.contains("logout_uri=https://example.com/"));
        assert!(!url.contains("response_type"));
    }
}
