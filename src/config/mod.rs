//! The main `vcf-config.yaml` document and how it is loaded.

pub mod document;
pub mod loader;
pub mod merge;

pub use document::VcfConfig;
pub use merge::{
    ConfigError, MergedConfig, PopulatedField, load_config_with_secrets,
    load_config_with_secrets_report, project_dir_for,
};
