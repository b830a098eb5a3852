//! Typed view of `vcf-config.yaml`.
//!
//! Only the credential-bearing sections are modelled. Every other top-level
//! section, and every other field inside a modelled section, is kept verbatim
//! in an `other` mapping so the document round-trips for downstream tools.

use serde::{Deserialize, Serialize};
use serde_yaml::Mapping;

/// Placeholder shown instead of a credential in redacted output
pub const REDACTED: &str = "********";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VcfConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub common: Option<CommonSection>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vcf_installer: Option<InstallerSection>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vcenter: Option<VcenterSection>,

    #[serde(flatten)]
    pub other: Mapping,
}

/// Settings shared by every ESXi host
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CommonSection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub root_password: Option<String>,

    #[serde(flatten)]
    pub other: Mapping,
}

/// VCF Installer appliance settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InstallerSection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub root_password: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub admin_password: Option<String>,

    #[serde(flatten)]
    pub other: Mapping,
}

/// vCenter / SSO settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VcenterSection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,

    #[serde(flatten)]
    pub other: Mapping,
}

impl VcfConfig {
    /// Serialize the document back to YAML (in memory only)
    pub fn to_yaml(&self) -> Result<String, serde_yaml::Error> {
        serde_yaml::to_string(self)
    }

    /// Copy of the document with every credential field masked
    pub fn redacted(&self) -> Self {
        fn mask(field: &Option<String>) -> Option<String> {
            field.as_ref().map(|_| REDACTED.to_string())
        }

        let mut copy = self.clone();
        if let Some(common) = copy.common.as_mut() {
            common.root_password = mask(&common.root_password);
        }
        if let Some(installer) = copy.vcf_installer.as_mut() {
            installer.root_password = mask(&installer.root_password);
            installer.admin_password = mask(&installer.admin_password);
        }
        if let Some(vcenter) = copy.vcenter.as_mut() {
            vcenter.password = mask(&vcenter.password);
        }
        copy
    }
}
