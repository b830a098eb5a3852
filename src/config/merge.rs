//! Load `vcf-config.yaml` and fill in every credential field from the
//! secrets chain.

use super::document::VcfConfig;
use super::loader::{LoadError, LoadPolicy, load_yaml_file};
use crate::context::Context;
use crate::secrets::{SecretSource, SecretsError, SecretsManager, WellKnownSecret};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Fatal problems with the main configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Config file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Failed to read config {}: {reason}", path.display())]
    Read { path: PathBuf, reason: String },

    #[error("Failed to parse config {}: {reason}", path.display())]
    Parse { path: PathBuf, reason: String },

    #[error("Failed to resolve {field}")]
    Secret {
        field: &'static str,
        #[source]
        source: SecretsError,
    },
}

impl From<LoadError> for ConfigError {
    fn from(err: LoadError) -> Self {
        match err {
            LoadError::NotFound(path) => ConfigError::NotFound(path),
            LoadError::Read { path, reason } => ConfigError::Read { path, reason },
            LoadError::Parse { path, reason } => ConfigError::Parse {
                path,
                reason: reason.to_string(),
            },
            LoadError::Shape { path, reason } => ConfigError::Parse { path, reason },
        }
    }
}

/// One credential field that was filled in
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PopulatedField {
    /// Dotted path inside the document, e.g. `common.root_password`
    pub field: &'static str,
    pub secret: WellKnownSecret,
    pub source: SecretSource,
}

/// A configuration with all credentials resolved, plus where each came from
#[derive(Debug, Clone)]
pub struct MergedConfig {
    pub config: VcfConfig,
    pub populated: Vec<PopulatedField>,
}

/// Project root for a config file: the parent of the directory holding it.
///
/// `<project>/config/vcf-config.yaml` -> `<project>`.
pub fn project_dir_for(config_file: &Path) -> PathBuf {
    config_file
        .parent()
        .and_then(Path::parent)
        .map(Path::to_path_buf)
        .unwrap_or_default()
}

/// Load the main config and replace its credential fields with resolved
/// secrets.
///
/// Sections that are absent are skipped. Every credential field of every
/// present section is populated when this returns `Ok`.
pub fn load_config_with_secrets(
    ctx: &Context,
    config_file: &Path,
) -> Result<VcfConfig, ConfigError> {
    load_config_with_secrets_report(ctx, config_file).map(|merged| merged.config)
}

/// Like [`load_config_with_secrets`], also reporting the source of each field.
pub fn load_config_with_secrets_report(
    ctx: &Context,
    config_file: &Path,
) -> Result<MergedConfig, ConfigError> {
    let mut config: VcfConfig = load_yaml_file(
        &*ctx.fs,
        &*ctx.output,
        config_file,
        LoadPolicy::FailFast,
        "config file",
    )?
    .ok_or_else(|| ConfigError::NotFound(config_file.to_path_buf()))?;

    let project_dir = project_dir_for(config_file);
    tracing::debug!(
        config = %config_file.display(),
        project = %project_dir.display(),
        "resolving config credentials"
    );
    let mut secrets = SecretsManager::new(ctx, project_dir);
    let mut populated = Vec::new();

    if let Some(common) = config.common.as_mut() {
        fill(
            &mut secrets,
            &mut populated,
            "common.root_password",
            WellKnownSecret::EsxiRootPassword,
            &mut common.root_password,
        )?;
    }

    if let Some(installer) = config.vcf_installer.as_mut() {
        fill(
            &mut secrets,
            &mut populated,
            "vcf_installer.root_password",
            WellKnownSecret::InstallerRootPassword,
            &mut installer.root_password,
        )?;
        fill(
            &mut secrets,
            &mut populated,
            "vcf_installer.admin_password",
            WellKnownSecret::InstallerAdminPassword,
            &mut installer.admin_password,
        )?;
    }

    if let Some(vcenter) = config.vcenter.as_mut() {
        fill(
            &mut secrets,
            &mut populated,
            "vcenter.password",
            WellKnownSecret::VcenterPassword,
            &mut vcenter.password,
        )?;
    }

    Ok(MergedConfig { config, populated })
}

fn fill(
    secrets: &mut SecretsManager,
    populated: &mut Vec<PopulatedField>,
    field: &'static str,
    secret: WellKnownSecret,
    slot: &mut Option<String>,
) -> Result<(), ConfigError> {
    let resolved = secrets
        .resolve(secret, slot.as_deref())
        .map_err(|source| ConfigError::Secret { field, source })?;

    populated.push(PopulatedField {
        field,
        secret,
        source: resolved.source,
    });
    *slot = Some(resolved.into_value());
    Ok(())
}
