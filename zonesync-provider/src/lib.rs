//! # zonesync-provider
//!
//! Registrar-side DNS access for zonesync: list the domains an account owns,
//! read a domain's zone, and replace it wholesale.
//!
//! ## Supported Providers
//!
//! | Provider | Feature Flag | Auth Method |
//! |----------|-------------|-------------|
//! | [TransIP](https://www.transip.nl/) | `transip` | Bearer Token |
//!
//! ## Feature Flags
//!
//! ### Provider Selection
//!
//! - **`all-providers`** *(default)* — Enable all providers listed above.
//! - **`transip`** — Enable only the TransIP provider.
//!
//! ### TLS Backend
//!
//! - **`native-tls`** *(default)* — Use the platform's native TLS implementation.
//! - **`rustls`** — Use rustls. Recommended for cross-compilation.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use zonesync_provider::{create_provider, DnsProvider, ProviderCredentials};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let provider = create_provider(ProviderCredentials::Transip {
//!         login: "your-login".to_string(),
//!         access_token: "your-token".to_string(),
//!     })?;
//!
//!     provider.validate_credentials().await?;
//!
//!     for domain in provider.list_domains().await? {
//!         for entry in provider.list_records(&domain).await? {
//!             println!("{} {} {} {}", entry.name, entry.expire, entry.record_type, entry.content);
//!         }
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! All provider operations return [`Result<T, ProviderError>`](ProviderError).
//!
//! - [`ProviderError::InvalidCredentials`] — authentication failed
//! - [`ProviderError::DomainNotFound`] — domain is not in the account
//! - [`ProviderError::RateLimited`] — API rate limit exceeded (retryable)
//! - [`ProviderError::NetworkError`] — network connectivity issue (retryable)
//!
//! Transient errors (`NetworkError`, `Timeout`, `RateLimited`) are automatically
//! retried with exponential backoff. See [`ProviderError`] for the full list.

mod error;
mod factory;
mod http_client;
mod providers;
mod traits;
mod types;
mod utils;

// Re-export error types
pub use error::{ProviderError, Result};

// Re-export factory function
pub use factory::create_provider;

// Re-export core trait only (internal traits are not exported)
pub use traits::DnsProvider;

// Re-export types
pub use types::{ProviderCredentials, ProviderType, ZoneEntry};

// Re-export concrete providers (behind feature flags)
#[cfg(feature = "transip")]
pub use providers::TransipProvider;
