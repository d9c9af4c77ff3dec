use serde::{Deserialize, Serialize};

/// One recorded combat segment as the log service reports it.
/// Timestamps are absolute milliseconds relative to the report start.
#[derive(Debug, Clone, Deserialize)]
pub struct RawFight {
    pub id: i32,
    pub name: String,
    #[serde(rename = "zoneID", default)]
    pub zone_id: Option<u32>,
    #[serde(rename = "zoneName", default)]
    pub zone_name: Option<String>,
    /// Boss identifier, 0 for trash pulls.
    #[serde(default)]
    pub boss: u32,
    #[serde(default)]
    pub kill: bool,
    pub start_time: i64,
    pub end_time: i64,
}

impl RawFight {
    pub fn duration(&self) -> i64 {
        self.end_time - self.start_time
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct EnemyFightRef {
    pub id: i32,
}

/// Entry in the report-level opponent index. `fights` lists which
/// fight ids this enemy actually appeared in.
#[derive(Debug, Clone, Deserialize)]
pub struct ReportEnemy {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub fights: Vec<EnemyFightRef>,
}

/// Authoritative full-clear record; its end time overrides the
/// computed boundary when the starts line up.
#[derive(Debug, Clone, Deserialize)]
pub struct CompleteRaid {
    pub start_time: i64,
    #[serde(default)]
    pub end_time: i64,
}

/// Raw report payload as returned by the fetch collaborator.
#[derive(Debug, Clone, Deserialize)]
pub struct RawReport {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub start: i64,
    #[serde(default)]
    pub zone: Option<u32>,
    #[serde(default)]
    pub fights: Vec<RawFight>,
    #[serde(default)]
    pub enemies: Option<Vec<ReportEnemy>>,
    #[serde(rename = "completeRaids", default)]
    pub complete_raids: Option<Vec<CompleteRaid>>,
}

/// Resolved primary zone and its effective start/end, absolute ms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZoneBounds {
    pub zone: String,
    pub start: i64,
    pub end: i64,
}

/// One fight after timeline processing. All times are milliseconds;
/// `start_rel`/`end_rel` are relative to the zone start. `delta` stays
/// empty until a cross-run comparison fills it in.
#[derive(Debug, Clone, Serialize)]
pub struct ProcessedEncounter {
    pub name: String,
    pub is_boss: bool,
    pub is_kill: bool,
    pub start_rel: i64,
    pub end_rel: i64,
    pub duration: i64,
    pub segment_time: Option<i64>,
    pub idle_time: Option<i64>,
    pub wing_time: Option<i64>,
    pub delta: Option<i64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProcessedTimeline {
    pub title: String,
    pub zone: String,
    pub date: String,
    pub total_duration: i64,
    pub fights: Vec<ProcessedEncounter>,
}

/// Best-ever segment for one boss across a set of runs. `cumulative`
/// is that run's relative end time for the boss and is display-only.
#[derive(Debug, Clone, Serialize)]
pub struct BestSegment {
    pub boss: String,
    pub time: i64,
    pub run_index: usize,
    pub cumulative: i64,
}

/// Per-boss best segments plus their sum. The total is a sum of
/// independently-best segments, not a time any single run achieved.
#[derive(Debug, Clone, Serialize)]
pub struct BestSegmentTable {
    pub segments: Vec<BestSegment>,
    pub theoretical_best: i64,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn should_deserialize_wcl_shaped_report() {
        let payload = json!({
            "title": "aq40 pump",
            "start": 1755500000000i64,
            "zone": 1005,
            "fights": [
                {
                    "id": 1,
                    "name": "The Prophet Skeram",
                    "zoneID": 1005,
                    "zoneName": "Temple of Ahn'Qiraj",
                    "boss": 709,
                    "kill": true,
                    "start_time": 120000,
                    "end_time": 175000
                },
                {
                    "id": 2,
                    "name": "Trash",
                    "start_time": 176000,
                    "end_time": 190000
                }
            ],
            "enemies": [
                { "name": "The Prophet Skeram", "type": "Boss", "fights": [{ "id": 1 }] }
            ],
            "completeRaids": [
                { "start_time": 120000, "end_time": 1703000 }
            ]
        });

        let report: RawReport = serde_json::from_value(payload).unwrap();

        assert_eq!(report.fights.len(), 2);
        assert_eq!(report.fights[0].zone_id, Some(1005));
        assert_eq!(report.fights[0].duration(), 55000);
        assert!(report.fights[0].kill);
        assert_eq!(report.fights[1].boss, 0);
        assert!(!report.fights[1].kill);
        assert_eq!(report.enemies.as_ref().unwrap()[0].kind, "Boss");
        assert_eq!(report.complete_raids.as_ref().unwrap()[0].end_time, 1703000);
    }
}
