use crate::model::{BubbleSortState, Step};

/// Records a bubble sort as a replayable step sequence.
///
/// The degenerate case of the trace engine: no recursion, so no frame stack.
/// Each adjacent comparison emits a step; each swap emits a second one.
#[tracing::instrument(skip(input), fields(len = input.len()))]
pub fn bubble_sort_trace(input: &[f64]) -> Vec<Step<BubbleSortState>> {
    let mut arr = input.to_vec();
    let mut steps = Vec::new();

    fn record(
        steps: &mut Vec<Step<BubbleSortState>>,
        arr: &[f64],
        description: String,
        highlight: Vec<usize>,
    ) {
        steps.push(Step {
            state: BubbleSortState {
                array: arr.to_vec(),
            },
            description,
            highlight,
        });
    }

    record(&mut steps, &arr, "Initial array".to_string(), vec![]);

    let n = arr.len();
    for i in 0..n {
        for j in 0..n - i - 1 {
            record(
                &mut steps,
                &arr,
                format!("Compare indices {} and {}", j, j + 1),
                vec![j, j + 1],
            );

            if arr[j].total_cmp(&arr[j + 1]).is_gt() {
                arr.swap(j, j + 1);
                record(
                    &mut steps,
                    &arr,
                    format!("Swap indices {} and {}", j, j + 1),
                    vec![j, j + 1],
                );
            }
        }
    }

    record(&mut steps, &arr, "Sorted array".to_string(), vec![]);
    steps
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_yields_initial_and_sorted_steps() {
        let steps = bubble_sort_trace(&[]);
        assert_eq!(steps.len(), 2);
        assert_eq!(steps[0].description, "Initial array");
        assert_eq!(steps[1].description, "Sorted array");
    }

    #[test]
    fn sorts_and_snapshots_every_swap() {
        let steps = bubble_sort_trace(&[3.0, 1.0, 2.0]);
        assert_eq!(steps.last().unwrap().state.array, vec![1.0, 2.0, 3.0]);

        let swaps: Vec<_> = steps
            .iter()
            .filter(|s| s.description.starts_with("Swap"))
            .collect();
        assert_eq!(swaps.len(), 2);
        // The snapshot reflects the array after the swap.
        assert_eq!(swaps[0].state.array, vec![1.0, 3.0, 2.0]);
        assert_eq!(swaps[0].highlight, vec![0, 1]);
    }

    #[test]
    fn compare_steps_highlight_the_pair() {
        let steps = bubble_sort_trace(&[2.0, 1.0]);
        let compare = &steps[1];
        assert_eq!(compare.description, "Compare indices 0 and 1");
        assert_eq!(compare.highlight, vec![0, 1]);
    }
}
