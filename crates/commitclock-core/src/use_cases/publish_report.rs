use async_trait::async_trait;
use shaku::{Component, Interface};
use tracing::{error, info};

use crate::{report::Report, CoreContext, DomainError, Result};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PublishReportInterface: Interface {
    /// Overwrite the first file of the configured gist, returning its previous name.
    async fn run<'a>(&self, ctx: &CoreContext<'a>, report: &Report) -> Result<String>;
}

#[derive(Component)]
#[shaku(interface = PublishReportInterface)]
pub(crate) struct PublishReport;

#[async_trait]
impl PublishReportInterface for PublishReport {
    #[tracing::instrument(skip(self, ctx, report), fields(gist_id = %ctx.config.gist.id))]
    async fn run<'a>(&self, ctx: &CoreContext<'a>, report: &Report) -> Result<String> {
        let gist_id = &ctx.config.gist.id;

        let gist = ctx.api_service.gists_get(gist_id).await.map_err(|e| {
            error!(gist_id = %gist_id, error = %e, message = "Unable to get gist");
            DomainError::PublishReadError {
                gist_id: gist_id.clone(),
                source: e,
            }
        })?;

        let filename = gist
            .first_filename()
            .ok_or_else(|| {
                error!(gist_id = %gist_id, message = "Gist has no file to update");
                DomainError::EmptyGist {
                    gist_id: gist_id.clone(),
                }
            })?
            .to_string();

        ctx.api_service
            .gists_update_file(gist_id, &filename, report.title.to_str(), &report.content())
            .await
            .map_err(|e| {
                error!(gist_id = %gist_id, error = %e, message = "Unable to update gist");
                DomainError::PublishWriteError {
                    gist_id: gist_id.clone(),
                    source: e,
                }
            })?;

        info!(
            gist_id = %gist_id,
            filename = %filename,
            title = %report.title,
            message = "Gist updated"
        );

        Ok(filename)
    }
}

#[cfg(test)]
mod tests {
    use commitclock_ghapi_interface::{
        types::{GhGist, GhGistFile},
        ApiError,
    };
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{buckets::BucketCounts, context::tests::CoreContextTest};

    fn arrange_report() -> Report {
        Report::assemble(&BucketCounts {
            evening: 4,
            night: 6,
            ..Default::default()
        })
        .unwrap()
    }

    fn arrange_gist(filenames: &[&str]) -> GhGist {
        GhGist {
            id: "gist".into(),
            files: filenames
                .iter()
                .map(|name| {
                    (
                        name.to_string(),
                        GhGistFile {
                            filename: name.to_string(),
                            content: Some("old".into()),
                        },
                    )
                })
                .collect(),
        }
    }

    #[tokio::test]
    async fn updates_first_file_only() -> Result<()> {
        let report = arrange_report();
        let expected_content = report.content();

        let mut ctx = CoreContextTest::new();
        ctx.api_service
            .expect_gists_get()
            .once()
            .withf(|gist_id| gist_id == "gist")
            .return_once(|_| Ok(arrange_gist(&["commit-clock.md", "other.md"])));

        ctx.api_service
            .expect_gists_update_file()
            .once()
            .withf(move |gist_id, filename, new_filename, content| {
                gist_id == "gist"
                    && filename == "commit-clock.md"
                    && new_filename == "I'm a night 🦉"
                    && content == expected_content
            })
            .return_once(|_, _, _, _| Ok(()));

        let filename = PublishReport.run(&ctx.as_context(), &report).await?;
        assert_eq!(filename, "commit-clock.md");

        Ok(())
    }

    #[tokio::test]
    async fn read_failure_skips_update() {
        let mut ctx = CoreContextTest::new();
        ctx.api_service
            .expect_gists_get()
            .once()
            .return_once(|_| {
                Err(ApiError::ImplementationError {
                    source: "404 Not Found".into(),
                })
            });
        ctx.api_service.expect_gists_update_file().never();

        let result = PublishReport.run(&ctx.as_context(), &arrange_report()).await;
        assert!(matches!(
            result,
            Err(DomainError::PublishReadError { gist_id, .. }) if gist_id == "gist"
        ));
    }

    #[tokio::test]
    async fn empty_gist_skips_update() {
        let mut ctx = CoreContextTest::new();
        ctx.api_service
            .expect_gists_get()
            .once()
            .return_once(|_| Ok(arrange_gist(&[])));
        ctx.api_service.expect_gists_update_file().never();

        let result = PublishReport.run(&ctx.as_context(), &arrange_report()).await;
        assert!(matches!(result, Err(DomainError::EmptyGist { .. })));
    }

    #[tokio::test]
    async fn write_failure_is_a_publish_error() {
        let mut ctx = CoreContextTest::new();
        ctx.api_service
            .expect_gists_get()
            .once()
            .return_once(|_| Ok(arrange_gist(&["commit-clock.md"])));
        ctx.api_service
            .expect_gists_update_file()
            .once()
            .return_once(|_, _, _, _| {
                Err(ApiError::ImplementationError {
                    source: "403 Forbidden".into(),
                })
            });

        let result = PublishReport.run(&ctx.as_context(), &arrange_report()).await;
        assert!(matches!(result, Err(DomainError::PublishWriteError { .. })));
    }
}
