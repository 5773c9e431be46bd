//! Storage layer abstraction trait definition

mod baseline_store;
mod credential_store;
mod domain_selection;
mod local_dns_store;
mod ttl_override;

pub use baseline_store::BaselineStore;
pub use credential_store::CredentialStore;
pub use domain_selection::SyncedDomainSelection;
pub use local_dns_store::LocalDnsStore;
pub use ttl_override::TtlOverrideConfig;
