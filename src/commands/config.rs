use crate::config::{MergedConfig, load_config_with_secrets_report};
use crate::context::Context;
use crate::secrets::CONFIG_FILE;
use anyhow::{Context as AnyhowContext, Result};
use std::path::{Path, PathBuf};

/// How the merged configuration is shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ConfigFormat {
    /// Which credential fields were populated and from where
    Summary,
    /// The merged document with credentials masked, as YAML
    Yaml,
    /// The merged document with credentials masked, as JSON
    Json,
}

pub struct ConfigCommand;

impl ConfigCommand {
    /// Load the main config through the secrets chain and describe the result
    pub fn execute(
        ctx: &Context,
        project_dir: &Path,
        config_file: Option<&Path>,
        format: ConfigFormat,
    ) -> Result<()> {
        let config_file = Self::config_path(project_dir, config_file);
        let merged = load_config_with_secrets_report(ctx, &config_file)?;

        match format {
            ConfigFormat::Summary => Self::print_summary(ctx, &config_file, &merged),
            ConfigFormat::Yaml => {
                let yaml = merged
                    .config
                    .redacted()
                    .to_yaml()
                    .context("Failed to serialize config as YAML")?;
                ctx.output.plain(yaml.trim_end());
            }
            ConfigFormat::Json => {
                let json = serde_json::to_string_pretty(&merged.config.redacted())
                    .context("Failed to serialize config as JSON")?;
                ctx.output.plain(&json);
            }
        }

        Ok(())
    }

    fn config_path(project_dir: &Path, config_file: Option<&Path>) -> PathBuf {
        match config_file {
            Some(path) => path.to_path_buf(),
            None => project_dir.join(CONFIG_FILE),
        }
    }

    fn print_summary(ctx: &Context, config_file: &Path, merged: &MergedConfig) {
        ctx.output.section("VCF Configuration");
        ctx.output
            .key_value("Config file", &config_file.display().to_string());

        if merged.populated.is_empty() {
            ctx.output
                .info("No credential-bearing sections (common, vcf_installer, vcenter) found");
            return;
        }

        for field in &merged.populated {
            ctx.output.key_value(field.field, &field.source.to_string());
        }

        ctx.output.blank();
        ctx.output.success(&format!(
            "Resolved {} credential field(s)",
            merged.populated.len()
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigError;
    use crate::traits::{MockEnvironment, MockFileSystem, MockOutput, MockUserInput, OutputMessage};
    use std::sync::Arc;

    const CONFIG: &str = "/lab/config/vcf-config.yaml";

    fn setup(config: Option<&str>, vars: &[(&str, &str)]) -> (Context, Arc<MockOutput>) {
        let fs = Arc::new(MockFileSystem::new());
        if let Some(content) = config {
            fs.add_file(CONFIG, content);
        }
        let output = Arc::new(MockOutput::new());
        let ctx = Context::test_with(
            fs,
            Arc::new(MockEnvironment::with_vars(vars)),
            Arc::new(MockUserInput::non_interactive()),
            output.clone(),
        );
        (ctx, output)
    }

    #[test]
    fn test_summary_lists_sources() {
        let (ctx, output) = setup(
            Some("common:\n  root_password: \"\"\nvcenter:\n  password: vc-cfg\n"),
            &[("VCF_ESXI_ROOT_PASSWORD", "hunter2")],
        );

        ConfigCommand::execute(&ctx, Path::new("/lab"), None, ConfigFormat::Summary).unwrap();

        assert!(output.contains_message(&OutputMessage::KeyValue(
            "common.root_password".to_string(),
            "environment variable".to_string()
        )));
        assert!(output.contains_message(&OutputMessage::KeyValue(
            "vcenter.password".to_string(),
            "config file".to_string()
        )));
        let text = output.to_text();
        assert!(!text.contains("hunter2"));
        assert!(!text.contains("vc-cfg"));
    }

    #[test]
    fn test_yaml_output_is_redacted() {
        let (ctx, output) = setup(
            Some("common:\n  root_password: plain-text\n  esxi_iso_path: /iso\n"),
            &[],
        );

        ConfigCommand::execute(
            &ctx,
            Path::new("/elsewhere"),
            Some(Path::new(CONFIG)),
            ConfigFormat::Yaml,
        )
        .unwrap();

        let text = output.to_text();
        assert!(text.contains("esxi_iso_path: /iso"));
        assert!(text.contains("********"));
        assert!(!text.contains("plain-text"));
    }

    #[test]
    fn test_json_output_is_redacted() {
        let (ctx, output) = setup(Some("vcenter:\n  password: vc-secret\n"), &[]);

        ConfigCommand::execute(&ctx, Path::new("/lab"), None, ConfigFormat::Json).unwrap();

        let text = output.to_text();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["vcenter"]["password"], "********");
    }

    #[test]
    fn test_missing_config_is_an_error() {
        let (ctx, _output) = setup(None, &[]);

        let err =
            ConfigCommand::execute(&ctx, Path::new("/lab"), None, ConfigFormat::Summary).unwrap_err();

        assert!(matches!(
            err.downcast_ref::<ConfigError>(),
            Some(ConfigError::NotFound(_))
        ));
    }
}
