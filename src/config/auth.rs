//! Identity provider configuration.

use serde::Deserialize;

/// Settings for the third-party identity provider.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AuthConfig {
    /// Tenant domain prefix (e.g., "coffee-shop-lb.eu").
    pub domain_prefix: String,
    /// Audience of the protected API, checked during token validation.
    pub audience: String,
    /// Public client id of the registered application.
    pub client_id: String,
    /// URL the provider redirects the browser to after login.
    pub callback_url: String,
}
