use anyhow::Context;
use std::env;

#[derive(Debug, Clone)]
pub struct AuthConfig {
    pub jwks_uri: String,
    pub audience: Option<String>,
}

impl AuthConfig {
    /// Environment variables:
    /// - AUTH_JWKS_URI: JWKS document with the token signing keys (required)
    /// - AUTH_AUDIENCE: expected `aud` claim (optional, unchecked when unset)
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            jwks_uri: env::var("AUTH_JWKS_URI").context("AUTH_JWKS_URI must be set")?,
            audience: env::var("AUTH_AUDIENCE").ok().filter(|a| !a.is_empty()),
        })
    }
}
