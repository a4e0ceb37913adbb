//! Hosted-login plumbing for the site: Cognito URL construction, URL-fragment
//! parsing, and identity-token decoding.
//!
//! Everything in this crate is renderer-free and runs on any target, so the
//! view crates stay free of auth details and the logic is testable natively.

mod config;
mod fragment;
mod token;

pub use config::CognitoConfig;
pub use fragment::parse_fragment;
pub use token::{decode_id_token, IdentityClaims, TokenError, ID_TOKEN_KEY};
