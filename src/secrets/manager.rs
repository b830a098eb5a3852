//! Secret resolution through the fixed precedence chain.
//!
//! Order, highest first: environment variable, secrets file, value from the
//! main config, interactive prompt. The order never changes per call.

use super::error::{Result, SecretsError};
use super::info::{EnvVarStatus, SecretsInfo};
use super::store::SecretsFileState;
use super::well_known::{ResolvedSecret, SecretSource, WellKnownSecret, prompt_label};
use super::SECRETS_FILE;
use crate::context::Context;
use crate::traits::{Environment, FileSystem, Output, UserInput};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Resolves named secrets for one tool invocation.
///
/// The secrets file is read at most once per instance. Nothing is ever
/// written back to disk.
pub struct SecretsManager {
    project_dir: PathBuf,
    secrets_file: PathBuf,
    cache: SecretsFileState,
    fs: Arc<dyn FileSystem>,
    env: Arc<dyn Environment>,
    input: Arc<dyn UserInput>,
    output: Arc<dyn Output>,
}

impl SecretsManager {
    pub fn new(ctx: &Context, project_dir: impl Into<PathBuf>) -> Self {
        let project_dir = project_dir.into();
        let secrets_file = project_dir.join(SECRETS_FILE);
        Self {
            project_dir,
            secrets_file,
            cache: SecretsFileState::default(),
            fs: Arc::clone(&ctx.fs),
            env: Arc::clone(&ctx.env),
            input: Arc::clone(&ctx.input),
            output: Arc::clone(&ctx.output),
        }
    }

    pub fn project_dir(&self) -> &Path {
        &self.project_dir
    }

    pub fn secrets_file_path(&self) -> &Path {
        &self.secrets_file
    }

    /// Get a secret value.
    ///
    /// Returns `Ok(None)` only when `required` is false and no source has a
    /// value. With `required` set the result is either a non-empty string or
    /// an error. An empty `key` is rejected before any source is consulted.
    pub fn get_secret(
        &mut self,
        key: &str,
        config_value: Option<&str>,
        env_var: Option<&str>,
        required: bool,
    ) -> Result<Option<String>> {
        if key.is_empty() {
            return Err(SecretsError::EmptyKey);
        }

        Ok(self
            .lookup(key, config_value, env_var, required)?
            .map(ResolvedSecret::into_value))
    }

    /// Resolve a well-known secret, reporting which source supplied it.
    pub fn resolve(
        &mut self,
        secret: WellKnownSecret,
        config_value: Option<&str>,
    ) -> Result<ResolvedSecret> {
        self.lookup(secret.key(), config_value, Some(secret.env_var()), true)?
            .ok_or_else(|| SecretsError::EmptyValue {
                key: secret.key().to_string(),
            })
    }

    pub fn get_esxi_root_password(&mut self, config_value: Option<&str>) -> Result<String> {
        self.resolve(WellKnownSecret::EsxiRootPassword, config_value)
            .map(ResolvedSecret::into_value)
    }

    pub fn get_vcf_installer_root_password(
        &mut self,
        config_value: Option<&str>,
    ) -> Result<String> {
        self.resolve(WellKnownSecret::InstallerRootPassword, config_value)
            .map(ResolvedSecret::into_value)
    }

    pub fn get_vcf_installer_admin_password(
        &mut self,
        config_value: Option<&str>,
    ) -> Result<String> {
        self.resolve(WellKnownSecret::InstallerAdminPassword, config_value)
            .map(ResolvedSecret::into_value)
    }

    pub fn get_vcenter_password(&mut self, config_value: Option<&str>) -> Result<String> {
        self.resolve(WellKnownSecret::VcenterPassword, config_value)
            .map(ResolvedSecret::into_value)
    }

    /// Whether the secrets file exists on disk. Does not parse it.
    pub fn has_secrets_file(&self) -> bool {
        self.fs.exists(&self.secrets_file)
    }

    /// Which sources are currently available
    pub fn secrets_info(&self) -> SecretsInfo {
        SecretsInfo {
            secrets_file: self.secrets_file.clone(),
            secrets_file_present: self.has_secrets_file(),
            env_vars: WellKnownSecret::ALL
                .into_iter()
                .map(|secret| EnvVarStatus {
                    secret,
                    is_set: self.env_value(secret.env_var()).is_some(),
                })
                .collect(),
        }
    }

    /// Human-readable report of [`Self::secrets_info`]
    pub fn get_secrets_info(&self) -> String {
        self.secrets_info().to_string()
    }

    fn lookup(
        &mut self,
        key: &str,
        config_value: Option<&str>,
        env_var: Option<&str>,
        required: bool,
    ) -> Result<Option<ResolvedSecret>> {
        if let Some(value) = env_var.and_then(|name| self.env_value(name)) {
            tracing::debug!(key, env_var, "secret resolved from environment");
            return Ok(Some(ResolvedSecret::new(value, SecretSource::Environment)));
        }

        if let Some(value) = self
            .cache
            .get_or_load(&*self.fs, &*self.output, &self.secrets_file)
            .and_then(|entries| entries.get(key))
        {
            tracing::debug!(key, "secret resolved from secrets file");
            return Ok(Some(ResolvedSecret::new(
                value.clone(),
                SecretSource::SecretsFile,
            )));
        }

        if let Some(value) = config_value.filter(|v| !v.is_empty()) {
            tracing::debug!(key, "secret resolved from config file");
            return Ok(Some(ResolvedSecret::new(value, SecretSource::Config)));
        }

        if !required {
            tracing::debug!(key, "optional secret not found in any source");
            return Ok(None);
        }

        self.prompt(key).map(Some)
    }

    fn prompt(&self, key: &str) -> Result<ResolvedSecret> {
        if !self.input.is_interactive() {
            return Err(SecretsError::NonInteractive {
                key: key.to_string(),
            });
        }

        tracing::debug!(key, "prompting for secret");
        let value = self
            .input
            .password(&prompt_label(key))
            .map_err(|e| SecretsError::Prompt {
                key: key.to_string(),
                reason: format!("{:#}", e),
            })?;

        if value.is_empty() {
            return Err(SecretsError::EmptyValue {
                key: key.to_string(),
            });
        }

        Ok(ResolvedSecret::new(value, SecretSource::Prompt))
    }

    fn env_value(&self, name: &str) -> Option<String> {
        self.env.var(name).filter(|v| !v.is_empty())
    }
}
