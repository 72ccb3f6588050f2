use std::io::Write;

use async_trait::async_trait;
use clap::Parser;
use commitclock_core::use_cases::{PublishCommitReportInterface, PublishOutcome};
use shaku::HasComponent;

use crate::{
    commands::{Command, CommandContext},
    Result,
};

/// Generate the commit time report and publish it to the configured gist
#[derive(Parser)]
pub(crate) struct PublishCommand;

#[async_trait]
impl Command for PublishCommand {
    async fn execute(self, ctx: CommandContext) -> Result<()> {
        let core_ctx = ctx.as_core_context();
        let uc: &dyn PublishCommitReportInterface = ctx.core_module.resolve_ref();

        match uc.run(&core_ctx).await? {
            PublishOutcome::Published { filename, title } => {
                writeln!(
                    ctx.writer.write().await,
                    "Gist '{}' updated: '{}' is now '{}'.",
                    ctx.config.gist.id,
                    filename,
                    title
                )?;
            }
            PublishOutcome::NoActivity => {
                writeln!(
                    ctx.writer.write().await,
                    "No commit from morning to night, gist '{}' left untouched.",
                    ctx.config.gist.id
                )?;
            }
        }

        Ok(())
    }
}
