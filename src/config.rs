use hashbrown::{HashMap, HashSet};

/// Injected lookup tables and thresholds. Built once by the caller and
/// passed into the pipeline, never read from process-wide state.
#[derive(Debug, Clone)]
pub struct SplitsConfig {
    /// Recognized zone ids across game releases, mapped to a canonical name.
    pub zone_names: HashMap<u32, String>,
    /// Terminal-boss ids per wing. Sets, because releases reuse different
    /// ids for logically the same encounter.
    pub wing_bosses: HashMap<String, HashSet<u32>>,
    /// Fights at or under this duration are noise.
    pub min_fight_ms: i64,
    /// Fallback threshold when the opponent index is missing: anything
    /// longer than this counts as a real pull even without a boss id.
    pub boss_fallback_ms: i64,
}

impl SplitsConfig {
    /// Known-good tables for the classic raid zones.
    pub fn classic() -> Self {
        let zone_names = [
            // Classic ids
            (1000, "Molten Core"),
            (1002, "Blackwing Lair"),
            (1005, "Temple of Ahn'Qiraj"),
            (1006, "Naxxramas"),
            // Season of Discovery / Fresh ids
            (1017, "Blackfathom Deeps"),
            (1032, "Gnomeregan"),
            (1034, "Blackwing Lair"),
            (1035, "Temple of Ahn'Qiraj"),
            (1036, "Naxxramas"),
            // Era ids
            (531, "Temple of Ahn'Qiraj"),
            (533, "Naxxramas"),
        ]
        .into_iter()
        .map(|(id, name)| (id, name.to_string()))
        .collect();

        let wing_bosses = [
            ("Spider", [15952, 51116]),       // Maexxna
            ("Plague", [15954, 51117]),       // Loatheb
            ("Abomination", [16028, 51118]),  // Thaddius
            ("Military", [16061, 51113]),     // The Four Horsemen
        ]
        .into_iter()
        .map(|(wing, ids)| (wing.to_string(), ids.into_iter().collect()))
        .collect();

        Self {
            zone_names,
            wing_bosses,
            min_fight_ms: 4000,
            boss_fallback_ms: 10000,
        }
    }
}
