//! zonesync core library
//!
//! Keeps a hosting panel's DNS zones and a registrar's zones in step:
//! - record model and codec (`types`, `codec`)
//! - TTL resolution (`ttl`)
//! - three-way reconciliation (`reconcile`)
//! - sync orchestration and triggers (`services`)
//!
//! Storage is abstracted behind the traits in [`traits`]; the registrar side is
//! a [`zonesync_provider::DnsProvider`].

pub mod codec;
pub mod error;
pub mod reconcile;
pub mod services;
pub mod traits;
pub mod ttl;
pub mod types;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use error::{CoreError, CoreResult};
pub use reconcile::{reconcile, Reconciliation};
pub use services::{
    DomainSelectionEntry, ProviderFactory, SelectionService, ServiceContext, SyncService,
    TriggerService,
};
pub use traits::{
    BaselineStore, CredentialStore, LocalDnsStore, SyncedDomainSelection, TtlOverrideConfig,
};
