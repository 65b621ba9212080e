//! Personhood Client SDK
//!
//! Client side of the two-step proof-of-personhood verification: provider
//! boundaries for the attestation and uniqueness proof steps, an HTTP client
//! for the verification service, and a flow driver tying them to a session.

pub mod client;
pub mod config;
pub mod flow;
pub mod providers;

pub use client::{ClientError, HttpVerificationService, VerificationService};
pub use config::{ClientConfig, ConfigError};
pub use flow::{FlowError, VerificationFlow};
pub use providers::{
    IdentityAttestationProvider, ProviderError, StaticAttestationProvider, StaticProofProvider,
    UniquenessProofProvider, WidgetConfig,
};

pub use personhood_core as core;
