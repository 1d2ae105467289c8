//! Core suggestion primitives.
//!
//! Everything here is synchronous and free of terminal or runtime concerns,
//! except the provider seam which is async so corpus retrieval can be swapped
//! for a slower source without touching the rest of the pipeline.

pub mod debounce;
pub mod engine;
pub mod provider;
pub mod query;
pub mod selection;

pub use debounce::{Debouncer, DEFAULT_DEBOUNCE};
pub use engine::{compute_suggestions, highlight_segments, Segment};
pub use provider::{CandidateProvider, FileCandidates, StaticCandidates, SAMPLE_CORPUS};
pub use query::QueryBuffer;
pub use selection::{KeyOutcome, Selection, SelectionController};
