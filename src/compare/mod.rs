mod best_segments;
mod deltas;

pub use best_segments::build_best_segments;
pub use deltas::annotate_deltas;
