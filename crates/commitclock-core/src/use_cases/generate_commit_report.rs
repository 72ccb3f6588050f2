use async_trait::async_trait;
use shaku::{Component, HasComponent, Interface};
use tracing::info;

use super::CollectCommitBucketsInterface;
use crate::{report::Report, CoreContext, Result};

#[derive(Debug, Clone, PartialEq)]
pub enum GenerateReportOutcome {
    /// No commit from morning to night, nothing to publish.
    NoActivity,
    Report(Report),
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GenerateCommitReportInterface: Interface {
    async fn run<'a>(&self, ctx: &CoreContext<'a>) -> Result<GenerateReportOutcome>;
}

#[derive(Component)]
#[shaku(interface = GenerateCommitReportInterface)]
pub(crate) struct GenerateCommitReport;

#[async_trait]
impl GenerateCommitReportInterface for GenerateCommitReport {
    #[tracing::instrument(skip(self, ctx))]
    async fn run<'a>(&self, ctx: &CoreContext<'a>) -> Result<GenerateReportOutcome> {
        let uc: &dyn CollectCommitBucketsInterface = ctx.core_module.resolve_ref();
        let counts = uc.run(ctx).await?;

        match Report::assemble(&counts) {
            Some(report) => Ok(GenerateReportOutcome::Report(report)),
            None => {
                info!(
                    total = counts.total(),
                    message = "No commit from morning to night, skipping report"
                );
                Ok(GenerateReportOutcome::NoActivity)
            }
        }
    }
}
