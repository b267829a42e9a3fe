/// The two command pipelines: `audit-fill` and `audit-qna`.
pub mod fill;
pub mod report;
