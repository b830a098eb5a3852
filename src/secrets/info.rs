use super::well_known::WellKnownSecret;
use std::fmt;
use std::path::PathBuf;

/// Snapshot of which secret sources are available, without any values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecretsInfo {
    pub secrets_file: PathBuf,
    pub secrets_file_present: bool,
    pub env_vars: Vec<EnvVarStatus>,
}

/// Presence of one override variable. Only set/unset is recorded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvVarStatus {
    pub secret: WellKnownSecret,
    pub is_set: bool,
}

impl SecretsInfo {
    /// Path of the template a missing secrets file should be created from
    pub fn example_file(&self) -> PathBuf {
        let mut name = self.secrets_file.clone().into_os_string();
        name.push(".example");
        PathBuf::from(name)
    }
}

impl fmt::Display for SecretsInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Secrets Priority Order:")?;
        writeln!(f, "  1. Environment variables (VCF_*)")?;
        writeln!(f, "  2. Secrets file (config/vcf-secrets.yaml)")?;
        writeln!(f, "  3. Config file (config/vcf-config.yaml)")?;
        writeln!(f, "  4. Interactive prompt")?;
        writeln!(f)?;

        if self.secrets_file_present {
            writeln!(f, "✓ Secrets file found: {}", self.secrets_file.display())?;
        } else {
            writeln!(f, "⚠ Secrets file not found: {}", self.secrets_file.display())?;
            writeln!(f, "  Create from: {}", self.example_file().display())?;
        }

        writeln!(f)?;
        write!(f, "Environment variables:")?;
        for status in &self.env_vars {
            if status.is_set {
                write!(f, "\n  ✓ {} is set", status.secret.env_var())?;
            } else {
                write!(f, "\n    {} not set", status.secret.env_var())?;
            }
        }

        Ok(())
    }
}
