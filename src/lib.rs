pub mod compare;
pub mod config;
pub mod error;
pub mod fight_filter;
pub mod format;
pub mod models;
pub mod report_service;
pub mod timeline;
pub mod zone_resolver;

pub use config::SplitsConfig;
pub use error::{FetchError, SplitError};
pub use models::{BestSegmentTable, ProcessedEncounter, ProcessedTimeline, RawReport};
pub use report_service::{process_report, Analysis, ReportFetcher, ReportService};
