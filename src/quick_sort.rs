use crate::{
    core::{FrameIds, Span},
    model::{QuickFrame, QuickSortPhase, QuickSortState, Step},
};

/// Records a quick sort (Lomuto partition, last element as pivot) as a flat,
/// replayable step sequence.
///
/// Partitioning emits one step per scan comparison and one per data movement.
/// When the scanned element stays in place (`i == j`) a step is still emitted
/// so the scrub cadence stays uniform, even though nothing moved. Elements
/// equal to the pivot go left of the boundary (`<=`), which is what makes
/// this the non-stable Lomuto scheme.
///
/// Sub-ranges of length 1 after the pivot is placed are already sorted and
/// are skipped outright: no frame, no recursive call.
#[tracing::instrument(skip(input), fields(len = input.len()))]
pub fn quick_sort_trace(input: &[f64]) -> Vec<Step<QuickSortState>> {
    let mut tracer = Tracer {
        arr: input.to_vec(),
        steps: Vec::new(),
        stack: Vec::new(),
        ids: FrameIds::new(),
    };

    let hi = input.len() as i64 - 1;
    tracer.push(Span::new(0, hi), QuickSortPhase::Start);
    tracer.record("Initial array", &[]);

    tracer.sort(0, hi);
    tracing::debug!(steps = tracer.steps.len(), "quick sort trace complete");
    tracer.steps
}

struct Tracer {
    arr: Vec<f64>,
    steps: Vec<Step<QuickSortState>>,
    stack: Vec<QuickFrame>,
    ids: FrameIds,
}

impl Tracer {
    // Depth is the frame's position in the stack, so nesting checks can rely
    // on it stepping by exactly 1 per level.
    fn push(&mut self, span: Span, phase: QuickSortPhase) {
        self.stack.push(QuickFrame {
            id: self.ids.next(),
            span,
            depth: self.stack.len() as u32,
            phase,
            pivot_index: None,
            scan_index: None,
            boundary_index: None,
        });
    }

    fn record(&mut self, description: impl Into<String>, highlight: &[usize]) {
        self.steps.push(Step {
            state: QuickSortState {
                array: self.arr.clone(),
                nodes: self.stack.clone(),
            },
            description: description.into(),
            highlight: highlight.to_vec(),
        });
    }

    fn with_top(&mut self, update: impl FnOnce(&mut QuickFrame)) {
        if let Some(top) = self.stack.last_mut() {
            update(top);
        }
    }

    fn sort(&mut self, left: i64, right: i64) {
        if left >= right {
            return;
        }

        self.push(Span::new(left, right), QuickSortPhase::Partition);
        self.record(format!("Partition range [{left}, {right}]"), &[]);

        let pivot_index = self.partition(left as usize, right as usize);

        self.with_top(|top| {
            top.phase = QuickSortPhase::PivotPlace;
            top.pivot_index = Some(pivot_index);
        });
        self.record(
            format!("Partition complete → pivot {}", self.arr[pivot_index]),
            &[pivot_index],
        );

        let p = pivot_index as i64;

        // Length-1 sub-ranges are skipped entirely, unlike merge sort whose
        // base case is reached through normal recursion bounds.
        if left < p - 1 {
            self.push(Span::new(left, p - 1), QuickSortPhase::RecurseLeft);
            self.record(format!("Recurse left: [{}, {}]", left, p - 1), &[]);

            self.sort(left, p - 1);

            self.stack.pop();
            self.record("Return from left partition", &[]);
        }

        if p + 1 < right {
            self.push(Span::new(p + 1, right), QuickSortPhase::RecurseRight);
            self.record(format!("Recurse right: [{}, {}]", p + 1, right), &[]);

            self.sort(p + 1, right);

            self.stack.pop();
            self.record("Return from right partition", &[]);
        }

        self.stack.pop();
        self.record(format!("Segment sorted [{left}, {right}]"), &[]);
    }

    /// Lomuto partition over `[left, right]` with `arr[right]` as the pivot.
    /// Returns the pivot's final index. The partition frame is top-of-stack
    /// for the whole scan and carries the pivot/scan/boundary markers.
    fn partition(&mut self, left: usize, right: usize) -> usize {
        let pivot = self.arr[right];
        let mut i = left;

        self.with_top(|top| {
            top.phase = QuickSortPhase::Pivot;
            top.pivot_index = Some(right);
            top.scan_index = None;
            top.boundary_index = Some(i);
        });
        self.record(format!("Choose pivot {pivot} → [{right}]"), &[right]);

        for j in left..right {
            let current = self.arr[j];
            let goes_left = current.total_cmp(&pivot).is_le();
            let relation = if goes_left { "<=" } else { ">" };

            self.with_top(|top| {
                top.phase = QuickSortPhase::Compare;
                top.scan_index = Some(j);
                top.boundary_index = Some(i);
            });
            self.record(
                format!("Compare {current} [{j}] {relation} pivot {pivot} [{right}]"),
                &[j, right],
            );

            if goes_left {
                if i != j {
                    let (low, high) = (self.arr[i], self.arr[j]);
                    self.arr.swap(i, j);

                    self.with_top(|top| {
                        top.phase = QuickSortPhase::Swap;
                        top.scan_index = Some(j);
                        top.boundary_index = Some(i);
                    });
                    self.record(
                        format!("Swap {low} [{i}] with {high} [{j}]"),
                        &[i, j, right],
                    );
                } else {
                    // No data moves, but the step is still emitted so every
                    // accepted element costs the same number of steps.
                    self.with_top(|top| {
                        top.phase = QuickSortPhase::Swap;
                        top.scan_index = Some(j);
                        top.boundary_index = Some(i);
                    });
                    self.record(format!("Keep {current} [{j}] on left side"), &[j, right]);
                }

                i += 1;
                self.with_top(|top| top.boundary_index = Some(i));
            }
        }

        if i != right {
            let pivot_val = self.arr[right];
            self.arr.swap(i, right);

            self.with_top(|top| {
                top.phase = QuickSortPhase::PivotPlace;
                top.pivot_index = Some(i);
                top.scan_index = None;
                top.boundary_index = Some(i);
            });
            self.record(format!("Place pivot {pivot_val} → [{i}]"), &[i]);
        } else {
            self.with_top(|top| {
                top.scan_index = None;
                top.boundary_index = Some(i);
            });
        }

        i
    }
}
