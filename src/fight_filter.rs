use crate::config::SplitsConfig;
use crate::error::SplitError;
use crate::models::{RawFight, RawReport, ZoneBounds};

/// Selects the fights that actually belong to the resolved zone window.
///
/// A fight is kept when its span overlaps the bounds, its duration is
/// above the noise threshold, and some recognized hostile opponent is
/// recorded for it. Accepted fights running past the zone end are
/// clamped before anything downstream reads them. Output is sorted by
/// start time.
pub fn filter_fights(
    report: &RawReport,
    bounds: &ZoneBounds,
    config: &SplitsConfig,
) -> Result<Vec<RawFight>, SplitError> {
    let mut valid: Vec<RawFight> = Vec::new();

    for fight in &report.fights {
        let overlaps = (fight.start_time <= bounds.start && fight.end_time >= bounds.start)
            || (fight.start_time <= bounds.end && fight.end_time >= bounds.end)
            || (fight.start_time >= bounds.start && fight.end_time <= bounds.end);
        if !overlaps || fight.duration() <= config.min_fight_ms {
            continue;
        }
        if !has_opponents(fight, report, config) {
            continue;
        }

        let mut fight = fight.clone();
        if fight.end_time > bounds.end {
            fight.end_time = bounds.end;
        }
        valid.push(fight);
    }

    valid.sort_by_key(|f| f.start_time);

    if valid.is_empty() {
        return Err(SplitError::NoValidFights {
            zone: bounds.zone.clone(),
        });
    }

    Ok(valid)
}

fn has_opponents(fight: &RawFight, report: &RawReport, config: &SplitsConfig) -> bool {
    match &report.enemies {
        Some(enemies) => enemies
            .iter()
            .filter(|enemy| enemy.kind == "NPC" || enemy.kind == "Boss")
            .any(|enemy| enemy.fights.iter().any(|r| r.id == fight.id)),
        // Missing opponent index, fall back to the boss flag or a
        // longer duration threshold.
        None => fight.boss != 0 || fight.duration() > config.boss_fallback_ms,
    }
}
