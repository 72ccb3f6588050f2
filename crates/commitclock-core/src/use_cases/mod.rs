pub mod collect_commit_buckets;
pub mod generate_commit_report;
pub mod publish_commit_report;
pub mod publish_report;

pub use collect_commit_buckets::{CollectCommitBucketsInterface, RepositoryRef};
pub use generate_commit_report::{GenerateCommitReportInterface, GenerateReportOutcome};
pub use publish_commit_report::{PublishCommitReportInterface, PublishOutcome};
pub use publish_report::PublishReportInterface;
