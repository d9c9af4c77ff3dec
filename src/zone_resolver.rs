use log::*;

use crate::config::SplitsConfig;
use crate::error::SplitError;
use crate::models::{RawFight, RawReport, ZoneBounds};

/// Marker name the log service emits for fights it could not classify.
const UNCLASSIFIED: &str = "Unknown";

/// Determines the primary raid zone of a report and its effective
/// start/end boundary.
///
/// Fights are grouped by recognized zone and the zone with the most
/// fights wins, ties going to the zone seen first. If no fight carries
/// a recognized zone id, the report-level zone is tried with the whole
/// fight list as the candidate group.
pub fn resolve_zone(report: &RawReport, config: &SplitsConfig) -> Result<ZoneBounds, SplitError> {
    if report.fights.is_empty() {
        return Err(SplitError::EmptyReport);
    }

    // Insertion-stable grouping so the tie-break is reproducible.
    let mut groups: Vec<(&str, Vec<&RawFight>)> = Vec::new();
    let mut unknown_zones: Vec<String> = Vec::new();
    for fight in &report.fights {
        match fight.zone_id.and_then(|id| config.zone_names.get(&id)) {
            Some(name) => match groups.iter_mut().find(|(n, _)| *n == name.as_str()) {
                Some((_, fights)) => fights.push(fight),
                None => groups.push((name.as_str(), vec![fight])),
            },
            None => {
                let seen = fight
                    .zone_name
                    .clone()
                    .or_else(|| fight.zone_id.map(|id| id.to_string()));
                if let Some(seen) = seen {
                    if !unknown_zones.contains(&seen) {
                        unknown_zones.push(seen);
                    }
                }
            }
        }
    }

    let mut winner: Option<(&str, Vec<&RawFight>)> = None;
    for (name, fights) in groups {
        let better = match &winner {
            Some((_, best)) => fights.len() > best.len(),
            None => true,
        };
        if better {
            winner = Some((name, fights));
        }
    }

    let (zone, candidates) = match winner {
        Some(group) => group,
        None => {
            // No per-fight zone recognized, fall back to the report-level one.
            match report.zone.and_then(|id| config.zone_names.get(&id)) {
                Some(name) => (name.as_str(), report.fights.iter().collect()),
                None => return Err(SplitError::NoBoundaryFound { unknown_zones }),
            }
        }
    };

    let surviving: Vec<&RawFight> = candidates
        .into_iter()
        .filter(|f| f.name != UNCLASSIFIED && f.duration() > config.min_fight_ms)
        .collect();
    if surviving.is_empty() {
        return Err(SplitError::NoBoundaryFound { unknown_zones });
    }

    let start = surviving.iter().map(|f| f.start_time).min().unwrap_or(0);
    let mut end = surviving.iter().map(|f| f.end_time).max().unwrap_or(0);

    // A recorded complete clear whose start lines up is authoritative
    // for the end of the raid.
    if let Some(raids) = &report.complete_raids {
        for raid in raids {
            if raid.start_time == start && raid.end_time != 0 && raid.end_time != end {
                debug!("overriding zone end {end} with complete raid end {}", raid.end_time);
                end = raid.end_time;
            }
        }
    }

    Ok(ZoneBounds {
        zone: zone.to_string(),
        start,
        end,
    })
}
