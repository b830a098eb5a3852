//! Layered credential resolution for the VCF tooling.
//!
//! Every tool that needs a password goes through [`SecretsManager`], which
//! checks the environment, the optional secrets file, the main config and,
//! as a last resort, an interactive prompt.

mod error;
mod info;
mod manager;
mod store;
mod well_known;

pub use error::SecretsError;
pub use info::{EnvVarStatus, SecretsInfo};
pub use manager::SecretsManager;
pub use well_known::{ResolvedSecret, SecretSource, WellKnownSecret, prompt_label};

/// Location of the secrets file relative to the project root
pub const SECRETS_FILE: &str = "config/vcf-secrets.yaml";

/// Location of the main configuration file relative to the project root
pub const CONFIG_FILE: &str = "config/vcf-config.yaml";
