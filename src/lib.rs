//! Sortrace records comparison sorts as flat, replayable step traces and
//! drives them with a scrubbing playback transport.
//!
//! - Trace engine: [`merge_sort_trace`], [`quick_sort_trace`],
//!   [`bubble_sort_trace`] — pure functions from an input array to an
//!   eagerly-built `Vec<Step<_>>`, each step snapshotting the working array
//!   and an explicit virtual call-stack.
//! - Playback: [`Player`], a total transport state machine over a step index
//!   (seek/next/prev/play/pause/reset, autoplay ticks, speed).
//! - Derived view: [`StepView`], presentation facts computed from adjacent
//!   steps without re-running the algorithm.
//! - [`Session`] ties one (algorithm, input) trace to a transport.
#![forbid(unsafe_code)]

pub mod bubble_sort;
pub mod core;
mod foundation;
pub mod merge_sort;
pub mod model;
pub mod player;
pub mod quick_sort;
pub mod registry;
pub mod session;
pub mod view;

pub use crate::foundation::error;

pub use crate::bubble_sort::bubble_sort_trace;
pub use crate::core::{FrameIds, Highlight, Span};
pub use crate::foundation::error::{SortraceError, SortraceResult};
pub use crate::merge_sort::merge_sort_trace;
pub use crate::model::{
    BubbleSortState, MergeFrame, MergeSortPhase, MergeSortState, QuickFrame, QuickSortPhase,
    QuickSortState, Step, VisualState, trace_to_json, validate_trace,
};
pub use crate::player::Player;
pub use crate::quick_sort::quick_sort_trace;
pub use crate::registry::{Algorithm, AlgorithmInfo, Category};
pub use crate::session::{DEMO_DATASET, Session};
pub use crate::view::{Layout, StepView};
