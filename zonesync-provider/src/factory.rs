//! Provider factory function.

use std::sync::Arc;

use crate::error::Result;
use crate::traits::DnsProvider;
use crate::types::ProviderCredentials;

#[cfg(feature = "transip")]
use crate::providers::TransipProvider;

/// Creates a [`DnsProvider`] instance from the given credentials.
///
/// The concrete provider type is determined by the [`ProviderCredentials`] variant.
/// The returned provider is wrapped in `Arc<dyn DnsProvider>` for easy sharing
/// across async tasks.
///
/// # Examples
///
/// ```rust,no_run
/// use zonesync_provider::{create_provider, ProviderCredentials};
///
/// let provider = create_provider(ProviderCredentials::Transip {
///     login: "your-login".to_string(),
///     access_token: "your-token".to_string(),
/// }).unwrap();
/// ```
pub fn create_provider(credentials: ProviderCredentials) -> Result<Arc<dyn DnsProvider>> {
    match credentials {
        #[cfg(feature = "transip")]
        ProviderCredentials::Transip {
            login,
            access_token,
        } => Ok(Arc::new(TransipProvider::new(login, access_token)?)),
    }
}
