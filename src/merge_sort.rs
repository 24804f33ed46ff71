use crate::{
    core::{FrameIds, Span},
    model::{MergeFrame, MergeSortPhase, MergeSortState, Step},
};

/// Records a top-down merge sort as a flat, replayable step sequence.
///
/// Every structural event (split, recursive entry/exit, each merge write)
/// emits one step carrying a full array snapshot and a clone of the explicit
/// call-stack. Base cases (`left >= right`) push no frame and emit nothing,
/// so step volume scales with internal nodes and writes, not with leaves.
///
/// The merge is stable: ties are taken from the left run.
#[tracing::instrument(skip(input), fields(len = input.len()))]
pub fn merge_sort_trace(input: &[f64]) -> Vec<Step<MergeSortState>> {
    let mut tracer = Tracer {
        arr: input.to_vec(),
        steps: Vec::new(),
        stack: Vec::new(),
        ids: FrameIds::new(),
    };

    let hi = input.len() as i64 - 1;
    tracer.push(Span::new(0, hi), None, MergeSortPhase::Start);
    tracer.record("Initial array", &[]);

    tracer.sort(0, hi);
    tracing::debug!(steps = tracer.steps.len(), "merge sort trace complete");
    tracer.steps
}

/// Per-run trace-building context: working array, accumulated steps, the
/// explicit frame stack mirroring the native recursion, and the id source.
struct Tracer {
    arr: Vec<f64>,
    steps: Vec<Step<MergeSortState>>,
    stack: Vec<MergeFrame>,
    ids: FrameIds,
}

impl Tracer {
    // Depth is the frame's position in the stack, so nesting checks can rely
    // on it stepping by exactly 1 per level.
    fn push(&mut self, span: Span, mid: Option<i64>, phase: MergeSortPhase) {
        self.stack.push(MergeFrame {
            id: self.ids.next(),
            span,
            mid,
            depth: self.stack.len() as u32,
            phase,
        });
    }

    fn record(&mut self, description: impl Into<String>, highlight: &[usize]) {
        self.steps.push(Step {
            state: MergeSortState {
                array: self.arr.clone(),
                nodes: self.stack.clone(),
            },
            description: description.into(),
            highlight: highlight.to_vec(),
        });
    }

    fn sort(&mut self, left: i64, right: i64) {
        if left >= right {
            return;
        }

        let mid = (left + right) / 2;

        self.push(Span::new(left, right), Some(mid), MergeSortPhase::Split);
        self.record(format!("Split [{left}, {right}]"), &[]);

        self.push(Span::new(left, mid), Some(mid), MergeSortPhase::RecurseLeft);
        self.record(format!("Recurse left: [{left}, {mid}]"), &[]);

        self.sort(left, mid);

        self.stack.pop();
        self.record("Return from left", &[]);

        self.push(
            Span::new(mid + 1, right),
            Some(mid),
            MergeSortPhase::RecurseRight,
        );
        self.record(format!("Recurse right: [{}, {}]", mid + 1, right), &[]);

        self.sort(mid + 1, right);

        self.stack.pop();
        self.record("Return from right", &[]);

        self.merge(left, mid, right);
    }

    /// Merges `[left, mid]` and `[mid+1, right]`, one step per write.
    /// The split frame is top-of-stack here; it takes the `write` phase for
    /// the duration and is popped once the merge completes.
    fn merge(&mut self, left: i64, mid: i64, right: i64) {
        let (l, m, r) = (left as usize, mid as usize, right as usize);
        let left_run = self.arr[l..=m].to_vec();
        let right_run = self.arr[m + 1..=r].to_vec();

        let mut i = 0;
        let mut j = 0;
        let mut k = l;

        while i < left_run.len() && j < right_run.len() {
            // Ties go left: this is what keeps the sort stable.
            self.arr[k] = if left_run[i].total_cmp(&right_run[j]).is_le() {
                i += 1;
                left_run[i - 1]
            } else {
                j += 1;
                right_run[j - 1]
            };

            self.mark_write();
            self.record(format!("Write {} at index {}", self.arr[k], k), &[k]);
            k += 1;
        }

        while i < left_run.len() {
            self.arr[k] = left_run[i];
            i += 1;
            self.mark_write();
            self.record(format!("Write leftover {} at index {}", self.arr[k], k), &[k]);
            k += 1;
        }

        while j < right_run.len() {
            self.arr[k] = right_run[j];
            j += 1;
            self.mark_write();
            self.record(format!("Write leftover {} at index {}", self.arr[k], k), &[k]);
            k += 1;
        }

        self.stack.pop();
        self.record(format!("Merge complete [{left}, {right}]"), &[]);
    }

    fn mark_write(&mut self) {
        if let Some(top) = self.stack.last_mut() {
            top.phase = MergeSortPhase::Write;
        }
    }
}
