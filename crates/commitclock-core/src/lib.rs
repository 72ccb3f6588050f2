//! Logic module.

#![warn(clippy::all)]
#![allow(clippy::new_without_default)]

pub mod buckets;
pub mod chart;
mod context;
pub mod errors;
pub mod report;
pub mod use_cases;

pub use context::CoreContext;
pub use errors::{DomainError, Result};
use shaku::module;
use use_cases::{
    collect_commit_buckets::CollectCommitBuckets, generate_commit_report::GenerateCommitReport,
    publish_commit_report::PublishCommitReport, publish_report::PublishReport,
};

module! {
    pub CoreModule {
        components = [
            CollectCommitBuckets, GenerateCommitReport,
            PublishReport, PublishCommitReport
        ],
        providers = []
    }
}
