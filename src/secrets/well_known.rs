//! The fixed set of credentials the VCF tooling knows how to resolve.

use std::fmt;

/// A credential with a stable secrets-file key and an override variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WellKnownSecret {
    /// ESXi host root password (`common.root_password`)
    EsxiRootPassword,
    /// VCF Installer appliance root password (`vcf_installer.root_password`)
    InstallerRootPassword,
    /// VCF Installer admin password (`vcf_installer.admin_password`)
    InstallerAdminPassword,
    /// vCenter SSO password (`vcenter.password`)
    VcenterPassword,
}

impl WellKnownSecret {
    /// All well-known secrets, in report order
    pub const ALL: [WellKnownSecret; 4] = [
        WellKnownSecret::EsxiRootPassword,
        WellKnownSecret::InstallerRootPassword,
        WellKnownSecret::InstallerAdminPassword,
        WellKnownSecret::VcenterPassword,
    ];

    /// Key of this secret inside the secrets file
    pub fn key(self) -> &'static str {
        match self {
            WellKnownSecret::EsxiRootPassword => "esxi_root_password",
            WellKnownSecret::InstallerRootPassword => "vcf_installer_root_password",
            WellKnownSecret::InstallerAdminPassword => "vcf_installer_admin_password",
            WellKnownSecret::VcenterPassword => "vcenter_password",
        }
    }

    /// Environment variable that overrides every other source
    pub fn env_var(self) -> &'static str {
        match self {
            WellKnownSecret::EsxiRootPassword => "VCF_ESXI_ROOT_PASSWORD",
            WellKnownSecret::InstallerRootPassword => "VCF_INSTALLER_ROOT_PASSWORD",
            WellKnownSecret::InstallerAdminPassword => "VCF_INSTALLER_ADMIN_PASSWORD",
            WellKnownSecret::VcenterPassword => "VCF_VCENTER_PASSWORD",
        }
    }

    /// Text shown when asking for this secret interactively
    pub fn prompt_label(self) -> String {
        prompt_label(self.key())
    }
}

impl fmt::Display for WellKnownSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Where a resolved secret came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SecretSource {
    Environment,
    SecretsFile,
    Config,
    Prompt,
}

impl fmt::Display for SecretSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SecretSource::Environment => "environment variable",
            SecretSource::SecretsFile => "secrets file",
            SecretSource::Config => "config file",
            SecretSource::Prompt => "interactive prompt",
        };
        f.write_str(label)
    }
}

/// A secret value together with the source that produced it.
///
/// `Debug` never prints the value.
#[derive(Clone, PartialEq, Eq)]
pub struct ResolvedSecret {
    pub value: String,
    pub source: SecretSource,
}

impl ResolvedSecret {
    pub fn new(value: impl Into<String>, source: SecretSource) -> Self {
        Self {
            value: value.into(),
            source,
        }
    }

    pub fn into_value(self) -> String {
        self.value
    }
}

impl fmt::Debug for ResolvedSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResolvedSecret")
            .field("value", &"********")
            .field("source", &self.source)
            .finish()
    }
}

/// Prompt text for a secret key: `esxi_root_password` -> `Enter esxi root password: `
pub fn prompt_label(key: &str) -> String {
    format!("Enter {}: ", key.replace('_', " "))
}
