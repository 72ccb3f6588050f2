use std::io::Write;

use async_trait::async_trait;
use clap::Parser;
use commitclock_core::use_cases::{GenerateCommitReportInterface, GenerateReportOutcome};
use shaku::HasComponent;

use crate::{
    commands::{Command, CommandContext},
    Result,
};

/// Print the commit time report without publishing it
#[derive(Parser)]
pub(crate) struct ShowCommand;

#[async_trait]
impl Command for ShowCommand {
    async fn execute(self, ctx: CommandContext) -> Result<()> {
        let core_ctx = ctx.as_core_context();
        let uc: &dyn GenerateCommitReportInterface = ctx.core_module.resolve_ref();

        match uc.run(&core_ctx).await? {
            GenerateReportOutcome::Report(report) => {
                let mut writer = ctx.writer.write().await;
                writeln!(writer, "{}", report.title)?;
                writeln!(writer)?;
                writeln!(writer, "{}", report.content())?;
            }
            GenerateReportOutcome::NoActivity => {
                writeln!(
                    ctx.writer.write().await,
                    "No commit from morning to night, nothing to report."
                )?;
            }
        }

        Ok(())
    }
}
