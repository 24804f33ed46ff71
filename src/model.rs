use crate::{
    core::{Highlight, Span},
    error::{SortraceError, SortraceResult},
};

/// One immutable snapshot of an algorithm run: the full working array, the
/// explicit call-stack at this instant, a human-readable label, and the
/// indices this operation touches.
///
/// A trace is produced eagerly, once per (algorithm, input) pair, and every
/// step in it is read-only thereafter. `description` is for display only;
/// no engine logic keys off it.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct Step<S> {
    pub state: S,
    pub description: String,
    pub highlight: Highlight,
}

// ===== merge sort =====

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MergeSortPhase {
    Start,
    Split,
    RecurseLeft,
    RecurseRight,
    Merge,
    Write,
    End,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct MergeFrame {
    pub id: u32,
    #[serde(flatten)]
    pub span: Span,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mid: Option<i64>,
    pub depth: u32,
    pub phase: MergeSortPhase,
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct MergeSortState {
    pub array: Vec<f64>,
    pub nodes: Vec<MergeFrame>,
}

// ===== quick sort =====

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum QuickSortPhase {
    Start,
    Partition,
    Compare,
    RecurseLeft,
    RecurseRight,
    Pivot,
    Swap,
    PivotPlace,
    SegmentSorted,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct QuickFrame {
    pub id: u32,
    #[serde(flatten)]
    pub span: Span,
    pub depth: u32,
    pub phase: QuickSortPhase,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pivot_index: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scan_index: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub boundary_index: Option<usize>,
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct QuickSortState {
    pub array: Vec<f64>,
    pub nodes: Vec<QuickFrame>,
}

// ===== bubble sort =====

/// Bubble sort carries no frame stack; its state is the bare array snapshot.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct BubbleSortState {
    pub array: Vec<f64>,
}

// ===== unified boundary state =====

/// Algorithm-specific payloads behind one type, for consumers that only need
/// the array and highlights (grid, transport, CLI).
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum VisualState {
    MergeSort(MergeSortState),
    QuickSort(QuickSortState),
    BubbleSort(BubbleSortState),
}

impl VisualState {
    pub fn array(&self) -> &[f64] {
        match self {
            Self::MergeSort(s) => &s.array,
            Self::QuickSort(s) => &s.array,
            Self::BubbleSort(s) => &s.array,
        }
    }

    /// Frame spans outer-to-inner, for stack-shape checks that do not care
    /// which algorithm produced the trace.
    fn stack_shape(&self) -> Vec<(u32, Span, u32)> {
        match self {
            Self::MergeSort(s) => s.nodes.iter().map(|n| (n.id, n.span, n.depth)).collect(),
            Self::QuickSort(s) => s.nodes.iter().map(|n| (n.id, n.span, n.depth)).collect(),
            Self::BubbleSort(_) => Vec::new(),
        }
    }
}

impl From<Step<MergeSortState>> for Step<VisualState> {
    fn from(step: Step<MergeSortState>) -> Self {
        Step {
            state: VisualState::MergeSort(step.state),
            description: step.description,
            highlight: step.highlight,
        }
    }
}

impl From<Step<QuickSortState>> for Step<VisualState> {
    fn from(step: Step<QuickSortState>) -> Self {
        Step {
            state: VisualState::QuickSort(step.state),
            description: step.description,
            highlight: step.highlight,
        }
    }
}

impl From<Step<BubbleSortState>> for Step<VisualState> {
    fn from(step: Step<BubbleSortState>) -> Self {
        Step {
            state: VisualState::BubbleSort(step.state),
            description: step.description,
            highlight: step.highlight,
        }
    }
}

// ===== structural validation =====

/// Checks the whole-trace invariants: constant array length, in-bounds
/// highlights, well-nested frame stacks, and frame ids that strictly
/// increase in first-push order across the run.
pub fn validate_trace(steps: &[Step<VisualState>]) -> SortraceResult<()> {
    let Some(first) = steps.first() else {
        return Err(SortraceError::validation(
            "trace must contain at least the initial step",
        ));
    };
    let array_len = first.state.array().len();
    let mut last_new_id = 0u32;
    let mut prev_ids: Vec<u32> = Vec::new();

    for (index, step) in steps.iter().enumerate() {
        if step.state.array().len() != array_len {
            return Err(SortraceError::validation(format!(
                "step {index}: array length changed mid-trace"
            )));
        }

        for &h in &step.highlight {
            if h >= array_len {
                return Err(SortraceError::validation(format!(
                    "step {index}: highlight index {h} out of bounds"
                )));
            }
        }

        let stack = step.state.stack_shape();
        for window in stack.windows(2) {
            let (_, parent_span, parent_depth) = window[0];
            let (_, child_span, child_depth) = window[1];
            if !parent_span.contains(child_span) {
                return Err(SortraceError::validation(format!(
                    "step {index}: child span escapes its parent"
                )));
            }
            if child_depth != parent_depth + 1 {
                return Err(SortraceError::validation(format!(
                    "step {index}: depth must increase by exactly 1 per level"
                )));
            }
        }
        if let Some(&(_, root_span, root_depth)) = stack.first() {
            if root_depth != 0 {
                return Err(SortraceError::validation(format!(
                    "step {index}: root frame depth must be 0"
                )));
            }
            root_span.validate(array_len)?;
        }

        // Ids strictly increase along the stack (later pushes sit deeper).
        // Any id not present in the previous step's stack is a fresh push and
        // must exceed every id ever pushed before it; ids are never reused.
        for window in stack.windows(2) {
            if window[1].0 <= window[0].0 {
                return Err(SortraceError::validation(format!(
                    "step {index}: frame ids must increase in push order"
                )));
            }
        }
        for &(id, _, _) in &stack {
            if prev_ids.contains(&id) {
                continue;
            }
            if id <= last_new_id {
                return Err(SortraceError::validation(format!(
                    "step {index}: frame id {id} was reused or pushed out of order"
                )));
            }
            last_new_id = id;
        }
        prev_ids = stack.iter().map(|&(id, _, _)| id).collect();
    }

    Ok(())
}

/// Serializes a unified trace as pretty JSON, the CLI dump format.
pub fn trace_to_json(steps: &[Step<VisualState>]) -> SortraceResult<String> {
    serde_json::to_string_pretty(steps).map_err(|e| SortraceError::serde(e.to_string()))
}
