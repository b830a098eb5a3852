use crate::context::Context;
use crate::secrets::SecretsManager;
use anyhow::Result;
use std::path::Path;

pub struct CheckCommand;

impl CheckCommand {
    /// Print which secret sources are available. Never prints a value.
    pub fn execute(ctx: &Context, project_dir: &Path) -> Result<()> {
        let secrets = SecretsManager::new(ctx, project_dir);
        let banner = "=".repeat(60);

        ctx.output.blank();
        ctx.output.plain(&banner);
        ctx.output.plain("VCF Secrets Status");
        ctx.output.plain(&banner);
        ctx.output.blank();

        for line in secrets.get_secrets_info().lines() {
            ctx.output.plain(line);
        }

        ctx.output.blank();
        ctx.output.plain(&banner);
        ctx.output.blank();
        ctx.output
            .dimmed("For more information, see: SECRETS_MANAGEMENT.md");
        ctx.output.blank();

        Ok(())
    }
}
