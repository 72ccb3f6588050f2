use async_trait::async_trait;
use shaku::{Component, HasComponent, Interface};

use super::{GenerateCommitReportInterface, GenerateReportOutcome, PublishReportInterface};
use crate::{report::ReportTitle, CoreContext, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PublishOutcome {
    NoActivity,
    Published {
        filename: String,
        title: ReportTitle,
    },
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PublishCommitReportInterface: Interface {
    async fn run<'a>(&self, ctx: &CoreContext<'a>) -> Result<PublishOutcome>;
}

#[derive(Component)]
#[shaku(interface = PublishCommitReportInterface)]
pub(crate) struct PublishCommitReport;

#[async_trait]
impl PublishCommitReportInterface for PublishCommitReport {
    #[tracing::instrument(skip(self, ctx), ret)]
    async fn run<'a>(&self, ctx: &CoreContext<'a>) -> Result<PublishOutcome> {
        let generate: &dyn GenerateCommitReportInterface = ctx.core_module.resolve_ref();
        let report = match generate.run(ctx).await? {
            GenerateReportOutcome::Report(report) => report,
            GenerateReportOutcome::NoActivity => return Ok(PublishOutcome::NoActivity),
        };

        let publish: &dyn PublishReportInterface = ctx.core_module.resolve_ref();
        let filename = publish.run(ctx, &report).await?;

        Ok(PublishOutcome::Published {
            filename,
            title: report.title,
        })
    }
}
