use log::*;

#[cfg(test)]
use mockall::automock;

use crate::compare::{annotate_deltas, build_best_segments};
use crate::config::SplitsConfig;
use crate::error::{FetchError, SplitError};
use crate::fight_filter::filter_fights;
use crate::models::{BestSegmentTable, ProcessedTimeline, RawReport};
use crate::timeline::build_timeline;
use crate::zone_resolver::resolve_zone;

/// Boundary to the network: hands back a raw report or a typed fetch
/// failure. The core never does I/O itself.
#[cfg_attr(test, automock)]
pub trait ReportFetcher: Send + Sync + 'static {
    fn fetch(&self, report_id: &str) -> Result<RawReport, FetchError>;
}

/// Runs the full pipeline over one raw report.
pub fn process_report(
    report: &RawReport,
    config: &SplitsConfig,
) -> Result<ProcessedTimeline, SplitError> {
    let bounds = resolve_zone(report, config)?;
    let fights = filter_fights(report, &bounds, config)?;
    Ok(build_timeline(report, &bounds, &fights, config))
}

pub struct ReportOutcome {
    pub report_id: String,
    pub timeline: Result<ProcessedTimeline, SplitError>,
}

pub struct Analysis {
    pub reports: Vec<ReportOutcome>,
    pub best_segments: Option<BestSegmentTable>,
}

pub struct ReportService<F: ReportFetcher> {
    fetcher: F,
    config: SplitsConfig,
}

impl<F: ReportFetcher> ReportService<F> {
    pub fn new(fetcher: F, config: SplitsConfig) -> Self {
        Self { fetcher, config }
    }

    /// Fetches and processes each report independently. A failed report
    /// yields its own error entry and never aborts the request. With at
    /// least two successful timelines, the first is annotated with
    /// deltas against the second and a best-segment table covers all
    /// successful runs.
    pub fn analyze(&self, report_ids: &[String]) -> Analysis {
        let mut reports: Vec<ReportOutcome> = Vec::with_capacity(report_ids.len());
        for report_id in report_ids {
            let timeline = self.process_one(report_id);
            match &timeline {
                Ok(timeline) => info!(
                    "processed report {report_id}: {} fights in {}",
                    timeline.fights.len(),
                    timeline.zone
                ),
                Err(error) => warn!("report {report_id} failed: {error}"),
            }
            reports.push(ReportOutcome {
                report_id: report_id.clone(),
                timeline,
            });
        }

        let ok_indices: Vec<usize> = reports
            .iter()
            .enumerate()
            .filter(|(_, outcome)| outcome.timeline.is_ok())
            .map(|(index, _)| index)
            .collect();

        if let [base_index, comparison_index, ..] = ok_indices[..] {
            let comparison = reports[comparison_index].timeline.clone();
            if let (Ok(base), Ok(comparison)) =
                (reports[base_index].timeline.as_mut(), comparison)
            {
                annotate_deltas(base, &comparison);
            }
        }

        let best_segments = if ok_indices.len() >= 2 {
            let timelines: Vec<&ProcessedTimeline> = reports
                .iter()
                .filter_map(|outcome| outcome.timeline.as_ref().ok())
                .collect();
            Some(build_best_segments(&timelines))
        } else {
            None
        };

        Analysis {
            reports,
            best_segments,
        }
    }

    fn process_one(&self, report_id: &str) -> Result<ProcessedTimeline, SplitError> {
        let report = self.fetcher.fetch(report_id)?;
        process_report(&report, &self.config)
    }
}
