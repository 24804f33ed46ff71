use crate::{
    bubble_sort::bubble_sort_trace,
    merge_sort::merge_sort_trace,
    model::{Step, VisualState},
    quick_sort::quick_sort_trace,
};

/// Key identifying which trace generator to run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Algorithm {
    MergeSort,
    QuickSort,
    BubbleSort,
}

impl Algorithm {
    pub const DEFAULT: Algorithm = Algorithm::MergeSort;
    pub const ALL: [Algorithm; 3] = [
        Algorithm::MergeSort,
        Algorithm::QuickSort,
        Algorithm::BubbleSort,
    ];

    /// Resolves a selection key. An unrecognized key falls back to the
    /// default algorithm; selection is never an error.
    pub fn from_key(key: &str) -> Self {
        match key {
            "merge-sort" => Algorithm::MergeSort,
            "quick-sort" => Algorithm::QuickSort,
            "bubble-sort" => Algorithm::BubbleSort,
            _ => Algorithm::DEFAULT,
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            Algorithm::MergeSort => "merge-sort",
            Algorithm::QuickSort => "quick-sort",
            Algorithm::BubbleSort => "bubble-sort",
        }
    }

    pub fn info(self) -> &'static AlgorithmInfo {
        match self {
            Algorithm::MergeSort => &MERGE_SORT_INFO,
            Algorithm::QuickSort => &QUICK_SORT_INFO,
            Algorithm::BubbleSort => &BUBBLE_SORT_INFO,
        }
    }

    /// Runs the selected trace generator, unifying the per-algorithm states
    /// behind [`VisualState`].
    pub fn trace(self, input: &[f64]) -> Vec<Step<VisualState>> {
        match self {
            Algorithm::MergeSort => merge_sort_trace(input)
                .into_iter()
                .map(Step::from)
                .collect(),
            Algorithm::QuickSort => quick_sort_trace(input)
                .into_iter()
                .map(Step::from)
                .collect(),
            Algorithm::BubbleSort => bubble_sort_trace(input)
                .into_iter()
                .map(Step::from)
                .collect(),
        }
    }
}

/// Display metadata for an algorithm entry. UI-only; no engine logic reads it.
#[derive(Debug)]
pub struct AlgorithmInfo {
    pub label: &'static str,
    pub category: Category,
    pub description: &'static str,
    pub bullets: &'static [&'static str],
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Category {
    Sorting,
}

const SHARED_BULLETS: &[&str] = &[
    "Step-by-step execution with playback controls",
    "Depth-aware visual overlays",
    "Designed for performance and clarity",
];

static MERGE_SORT_INFO: AlgorithmInfo = AlgorithmInfo {
    label: "Merge Sort",
    category: Category::Sorting,
    description: "Merge Sort recursively splits the array into halves, sorts each half, \
                  then merges them back together in order. It guarantees O(n log n) time \
                  complexity and is stable.",
    bullets: SHARED_BULLETS,
};

static QUICK_SORT_INFO: AlgorithmInfo = AlgorithmInfo {
    label: "Quick Sort",
    category: Category::Sorting,
    description: "Quick Sort selects a pivot and partitions the array so that elements \
                  smaller than the pivot come before it and larger ones after. It is \
                  extremely fast in practice but not stable.",
    bullets: SHARED_BULLETS,
};

static BUBBLE_SORT_INFO: AlgorithmInfo = AlgorithmInfo {
    label: "Bubble Sort",
    category: Category::Sorting,
    description: "Bubble Sort repeatedly steps through the array, swapping adjacent \
                  elements that are out of order until no swaps remain. Simple, stable, \
                  and O(n^2).",
    bullets: SHARED_BULLETS,
};
