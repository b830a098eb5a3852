//! Credential resolution for the VCF in a Box homelab tooling.
//!
//! Deployment, fix and validation tools call [`load_config_with_secrets`] to
//! get a `vcf-config.yaml` with every password filled in, or use
//! [`SecretsManager`] directly for individual secrets.

pub mod commands;
pub mod config;
pub mod context;
pub mod output;
pub mod secrets;
pub mod traits;

pub use config::{ConfigError, VcfConfig, load_config_with_secrets};
pub use context::Context;
pub use secrets::{SecretSource, SecretsError, SecretsManager, WellKnownSecret};
