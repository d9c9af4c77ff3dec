use chrono::DateTime;
use hashbrown::HashMap;

use crate::config::SplitsConfig;
use crate::models::{ProcessedEncounter, ProcessedTimeline, RawFight, RawReport, ZoneBounds};

pub const TRASH_SUFFIX: &str = " (Trash)";

/// Strips the trash annotation so encounters compare by identity, not
/// by display label.
pub fn base_name(name: &str) -> &str {
    name.strip_suffix(TRASH_SUFFIX).unwrap_or(name)
}

/// Walks the filtered, start-sorted fights once and produces the
/// processed timeline: relative times, idle gaps, per-boss segment
/// times and wing clear times.
///
/// All arithmetic stays in integer milliseconds; rounding for display
/// is applied to already-computed deltas, never to each operand.
pub fn build_timeline(
    report: &RawReport,
    bounds: &ZoneBounds,
    fights: &[RawFight],
    config: &SplitsConfig,
) -> ProcessedTimeline {
    // Highest relative end recorded per wing, local to this pass.
    let mut wing_clears: HashMap<&str, i64> = config
        .wing_bosses
        .keys()
        .map(|wing| (wing.as_str(), 0))
        .collect();
    let mut prev_fight_end: Option<i64> = None;
    let mut prev_boss_end: i64 = 0;

    let mut encounters = Vec::with_capacity(fights.len());
    for fight in fights {
        let is_boss = fight.boss != 0 && fight.name != "Trash";
        let start_rel = fight.start_time - bounds.start;
        let end_rel = fight.end_time - bounds.start;
        let duration = fight.duration();

        let segment_time = is_boss.then(|| {
            let segment = end_rel - prev_boss_end;
            prev_boss_end = end_rel;
            segment
        });

        // Legacy idle formula, preserved bit-for-bit: absolute gap to
        // the previous fight, shifted by the zone start.
        let idle_time = prev_fight_end.map(|prev| fight.start_time - prev - bounds.start);

        let mut wing_time = None;
        if is_boss && fight.kill {
            let wing = config
                .wing_bosses
                .iter()
                .find(|(_, ids)| ids.contains(&fight.boss))
                .map(|(wing, _)| wing.as_str());
            if let Some(wing) = wing {
                // Time since the last of ANY wing's terminal boss died;
                // wings can be cleared in parallel by different groups.
                let last_clear = wing_clears.values().copied().max().unwrap_or(0);
                wing_time = Some(end_rel - last_clear);
                wing_clears.insert(wing, end_rel);
            }
        }

        encounters.push(ProcessedEncounter {
            name: if is_boss {
                fight.name.clone()
            } else {
                format!("{}{TRASH_SUFFIX}", fight.name)
            },
            is_boss,
            is_kill: fight.kill,
            start_rel,
            end_rel,
            duration,
            segment_time,
            idle_time,
            wing_time,
            delta: None,
        });

        prev_fight_end = Some(fight.end_time);
    }

    let date = DateTime::from_timestamp_millis(report.start)
        .map(|date| date.format("%B %d, %Y").to_string())
        .unwrap_or_default();

    ProcessedTimeline {
        title: report.title.clone(),
        zone: bounds.zone.clone(),
        date,
        total_duration: bounds.end - bounds.start,
        fights: encounters,
    }
}
