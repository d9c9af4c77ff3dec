use crate::models::{BestSegment, BestSegmentTable, ProcessedTimeline};
use crate::timeline::base_name;

/// Finds, per boss, the lowest segment time across all runs and sums
/// those minima into a theoretical best total.
///
/// The total is a sum of independently-best segments, not a time any
/// single run achieved. Ties keep the lowest run index. The cumulative
/// time recorded per entry comes from the winning run and is for
/// display only, it is never part of the total.
pub fn build_best_segments(timelines: &[&ProcessedTimeline]) -> BestSegmentTable {
    // Boss names in first-seen order, so the table is deterministic.
    let mut names: Vec<&str> = Vec::new();
    for timeline in timelines {
        for fight in timeline.fights.iter().filter(|f| f.is_boss) {
            let name = base_name(&fight.name);
            if !names.contains(&name) {
                names.push(name);
            }
        }
    }

    let mut segments: Vec<BestSegment> = Vec::new();
    let mut theoretical_best = 0;
    for name in names {
        let mut best: Option<BestSegment> = None;
        for (run_index, timeline) in timelines.iter().enumerate() {
            let found = timeline
                .fights
                .iter()
                .find(|f| f.is_boss && base_name(&f.name) == name);
            let Some(fight) = found else { continue };
            let Some(time) = fight.segment_time else { continue };
            // strict comparison keeps the earliest run on ties
            if best.as_ref().is_none_or(|b| time < b.time) {
                best = Some(BestSegment {
                    boss: name.to_string(),
                    time,
                    run_index,
                    cumulative: fight.end_rel,
                });
            }
        }
        if let Some(best) = best {
            theoretical_best += best.time;
            segments.push(best);
        }
    }

    BestSegmentTable {
        segments,
        theoretical_best,
    }
}

#[cfg(test)]
mod tests {
    use crate::models::ProcessedEncounter;

    use super::*;

    fn boss(name: &str, segment_time: i64, end_rel: i64) -> ProcessedEncounter {
        ProcessedEncounter {
            name: name.to_string(),
            is_boss: true,
            is_kill: true,
            start_rel: 0,
            end_rel,
            duration: 0,
            segment_time: Some(segment_time),
            idle_time: None,
            wing_time: None,
            delta: None,
        }
    }

    fn timeline(fights: Vec<ProcessedEncounter>) -> ProcessedTimeline {
        ProcessedTimeline {
            title: String::new(),
            zone: String::new(),
            date: String::new(),
            total_duration: 0,
            fights,
        }
    }

    #[test]
    fn should_pick_minimum_segment_and_record_source_run() {
        let runs = [
            timeline(vec![boss("A", 120000, 120000)]),
            timeline(vec![boss("A", 110000, 115000)]),
            timeline(vec![boss("A", 115000, 118000)]),
        ];
        let refs: Vec<&ProcessedTimeline> = runs.iter().collect();

        let table = build_best_segments(&refs);

        assert_eq!(table.segments.len(), 1);
        let best = &table.segments[0];
        assert_eq!(best.time, 110000);
        assert_eq!(best.run_index, 1);
        // cumulative comes from the same run as the minimum
        assert_eq!(best.cumulative, 115000);
    }

    #[test]
    fn should_sum_minima_into_theoretical_best() {
        let runs = [
            timeline(vec![boss("A", 120000, 120000), boss("B", 180000, 300000)]),
            timeline(vec![boss("A", 110000, 110000), boss("B", 190000, 300000)]),
        ];
        let refs: Vec<&ProcessedTimeline> = runs.iter().collect();

        let table = build_best_segments(&refs);

        assert_eq!(table.theoretical_best, 110000 + 180000);
    }

    #[test]
    fn should_keep_lowest_run_index_on_ties() {
        let runs = [
            timeline(vec![boss("A", 110000, 200000)]),
            timeline(vec![boss("A", 110000, 150000)]),
        ];
        let refs: Vec<&ProcessedTimeline> = runs.iter().collect();

        let table = build_best_segments(&refs);

        assert_eq!(table.segments[0].run_index, 0);
        assert_eq!(table.segments[0].cumulative, 200000);
    }

    #[test]
    fn should_skip_bosses_with_no_defined_segment_anywhere() {
        let mut undefined = boss("B", 0, 0);
        undefined.segment_time = None;
        let runs = [timeline(vec![boss("A", 120000, 120000), undefined])];
        let refs: Vec<&ProcessedTimeline> = runs.iter().collect();

        let table = build_best_segments(&refs);

        assert_eq!(table.segments.len(), 1);
        assert_eq!(table.segments[0].boss, "A");
        assert_eq!(table.theoretical_best, 120000);
    }

    #[test]
    fn should_list_bosses_in_first_seen_order() {
        let runs = [
            timeline(vec![boss("A", 100, 100)]),
            timeline(vec![boss("C", 300, 300), boss("B", 200, 200)]),
        ];
        let refs: Vec<&ProcessedTimeline> = runs.iter().collect();

        let table = build_best_segments(&refs);

        let order: Vec<&str> = table.segments.iter().map(|s| s.boss.as_str()).collect();
        assert_eq!(order, vec!["A", "C", "B"]);
    }
}
