//! # grn-registry
//!
//! HTTP client for the conference identity registry.
//!
//! The registry is the authoritative directory of people involved in the
//! conference. Greenroom queries it to attach a registry identity (id,
//! name, optional email) to session chairs; chairs that resolve to no
//! registry user are flagged by the validation engine.

mod error;
mod users;

pub use error::RegistryError;

/// HTTP client for the identity registry.
pub struct RegistryClient {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl RegistryClient {
    /// Create a client for the registry at `base_url`.
    ///
    /// `token` is sent as a bearer credential when present; the lookup
    /// endpoints also answer anonymous requests at a lower rate limit.
    ///
    /// # Panics
    ///
    /// Panics if the underlying `reqwest::Client` fails to build.
    #[must_use]
    pub fn new(base_url: &str, token: Option<String>) -> Self {
        Self {
            http: reqwest::Client::builder()
                .user_agent("greenroom/0.1")
                .timeout(std::time::Duration::from_secs(10))
                .build()
                .expect("reqwest client should build"),
            base_url: base_url.trim_end_matches('/').to_string(),
            token,
        }
    }
}
