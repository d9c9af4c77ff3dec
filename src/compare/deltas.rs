use hashbrown::HashMap;

use crate::models::{ProcessedEncounter, ProcessedTimeline};
use crate::timeline::base_name;

/// Annotates every boss encounter in `base` that also appears in
/// `comparison` with the signed difference of their relative end
/// times. Matching is by normalized encounter name; encounters with no
/// counterpart stay unannotated, that is expected rather than an error.
pub fn annotate_deltas(base: &mut ProcessedTimeline, comparison: &ProcessedTimeline) {
    let lookup: HashMap<&str, &ProcessedEncounter> = comparison
        .fights
        .iter()
        .filter(|f| f.is_boss)
        .map(|f| (base_name(&f.name), f))
        .collect();

    for fight in base.fights.iter_mut().filter(|f| f.is_boss) {
        if let Some(other) = lookup.get(base_name(&fight.name)) {
            fight.delta = Some(fight.end_rel - other.end_rel);
        }
    }
}
