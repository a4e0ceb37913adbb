//! Identity-token decoding.
//!
//! Cognito hands back a JWT in the redirect fragment. The site only needs the
//! profile claims from the payload segment, so the token is decoded without
//! signature or expiry verification — it is trusted as-is. Keeping the decode
//! behind [`decode_id_token`] means verification can be added here later
//! without touching any view component.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use serde::Deserialize;
use thiserror::Error;

/// Fragment parameter that carries the identity token.
pub const ID_TOKEN_KEY: &str = "id_token";

/// Profile fields extracted from a decoded identity token.
///
/// Every field is optional; the user panel treats a non-empty `name` as the
/// signed-in signal and renders the rest as plain text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IdentityClaims {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
}

impl IdentityClaims {
    /// Whether the claims carry a usable display name.
    pub fn has_name(&self) -> bool {
        self.name.as_deref().is_some_and(|name| !name.is_empty())
    }
}

/// Why an `id_token` value could not be decoded.
#[derive(Debug, Error)]
pub enum TokenError {
    #[error("token is not a three-segment JWT")]
    Malformed,
    #[error("token payload is not valid base64url: {0}")]
    Encoding(#[from] base64::DecodeError),
    #[error("token payload is not a valid claim set: {0}")]
    Claims(#[from] serde_json::Error),
}

/// Wire shape of the claims Cognito puts in the payload segment.
#[derive(Debug, Deserialize)]
struct RawClaims {
    name: Option<String>,
    email: Option<String>,
    phone_number: Option<String>,
    address: Option<RawAddress>,
}

/// The OIDC `address` claim is an object; only its formatted form is shown.
#[derive(Debug, Deserialize)]
struct RawAddress {
    formatted: Option<String>,
}

/// Decode the payload segment of `token` into [`IdentityClaims`].
///
/// Accepts exactly `header.payload.signature`; neither the header nor the
/// signature is inspected.
pub fn decode_id_token(token: &str) -> Result<IdentityClaims, TokenError> {
    let mut segments = token.split('.');
    let payload = match (segments.next(), segments.next(), segments.next()) {
        (Some(_header), Some(payload), Some(_signature)) => payload,
        _ => return Err(TokenError::Malformed),
    };
    if segments.next().is_some() {
        return Err(TokenError::Malformed);
    }

    let bytes = URL_SAFE_NO_PAD.decode(payload.trim_end_matches('='))?;
    let raw: RawClaims = serde_json::from_slice(&bytes)?;
    Ok(IdentityClaims {
        name: raw.name,
        email: raw.email,
        phone: raw.phone_number,
        address: raw.address.and_then(|address| address.formatted),
    })
}
