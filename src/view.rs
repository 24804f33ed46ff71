use crate::model::{MergeFrame, Step};

pub const GRID_WIDTH: u32 = 26;
pub const GRID_HEIGHT: u32 = 18;
pub const CELL_SIZE: u32 = 24;

/// Presentation facts derived purely from the step at `cursor` and its
/// predecessor. This is the whole contract the rendering layer consumes;
/// nothing here re-runs the algorithm.
#[derive(Clone, Copy, Debug)]
pub struct StepView<'a> {
    pub description: &'a str,
    pub highlight: &'a [usize],
    pub prev_highlight: &'a [usize],
    pub is_write_step: bool,
    pub prev_is_write_step: bool,
}

impl<'a> StepView<'a> {
    /// Resolves the view at `cursor`, clamping into the trace. Returns
    /// `None` only for an empty slice; trace generators always emit at least
    /// the initial snapshot.
    pub fn at<S>(steps: &'a [Step<S>], cursor: usize) -> Option<Self> {
        if steps.is_empty() {
            return None;
        }
        let safe = cursor.min(steps.len() - 1);
        let step = &steps[safe];
        let prev_highlight: &[usize] = if safe == 0 {
            &[]
        } else {
            &steps[safe - 1].highlight
        };

        Some(Self {
            description: &step.description,
            highlight: &step.highlight,
            prev_highlight,
            // "Write-like" is defined as touching at least one cell.
            is_write_step: !step.highlight.is_empty(),
            prev_is_write_step: !prev_highlight.is_empty(),
        })
    }
}

/// Static grid geometry for one input size.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Layout {
    pub grid_width: u32,
    pub grid_height: u32,
    pub cell_size: u32,
    pub width: u32,
    pub height: u32,
    /// Column that centers the root range on the grid. Negative when the
    /// input is wider than the grid.
    pub col_offset: i64,
}

impl Layout {
    pub fn for_input_len(len: usize) -> Self {
        Self {
            grid_width: GRID_WIDTH,
            grid_height: GRID_HEIGHT,
            cell_size: CELL_SIZE,
            width: CELL_SIZE * GRID_WIDTH,
            height: CELL_SIZE * GRID_HEIGHT,
            col_offset: (i64::from(GRID_WIDTH) - len as i64).div_euclid(2),
        }
    }
}

/// Split point of a merge frame: the stored `mid` when the frame has one,
/// otherwise derived from its bounds.
pub fn frame_mid(frame: &MergeFrame) -> i64 {
    frame
        .mid
        .unwrap_or_else(|| (frame.span.lo + frame.span.hi).div_euclid(2))
}

/// Grid column for a cell of a merge frame, nudging the right half one cell
/// outward so the two halves read as separate runs.
pub fn shifted_column(global_index: usize, frame: &MergeFrame, col_offset: i64) -> i64 {
    let base = col_offset + global_index as i64;
    let Some(mid) = frame.mid else {
        return base;
    };
    if global_index as i64 - mid <= 0 {
        base
    } else {
        base + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Span;
    use crate::model::{BubbleSortState, MergeSortPhase};

    fn steps() -> Vec<Step<BubbleSortState>> {
        let step = |description: &str, highlight: Vec<usize>| Step {
            state: BubbleSortState {
                array: vec![2.0, 1.0],
            },
            description: description.to_string(),
            highlight,
        };
        vec![
            step("Initial array", vec![]),
            step("Compare indices 0 and 1", vec![0, 1]),
            step("Sorted array", vec![]),
        ]
    }

    #[test]
    fn view_of_first_step_has_no_trail() {
        let steps = steps();
        let view = StepView::at(&steps, 0).unwrap();
        assert_eq!(view.description, "Initial array");
        assert!(view.highlight.is_empty());
        assert!(view.prev_highlight.is_empty());
        assert!(!view.is_write_step);
        assert!(!view.prev_is_write_step);
    }

    #[test]
    fn trail_comes_from_the_previous_step() {
        let steps = steps();
        let view = StepView::at(&steps, 2).unwrap();
        assert!(!view.is_write_step);
        assert_eq!(view.prev_highlight, &[0, 1]);
        assert!(view.prev_is_write_step);
    }

    #[test]
    fn cursor_is_clamped_into_the_trace() {
        let steps = steps();
        let view = StepView::at(&steps, 999).unwrap();
        assert_eq!(view.description, "Sorted array");
    }

    #[test]
    fn empty_slice_has_no_view() {
        assert!(StepView::at::<BubbleSortState>(&[], 0).is_none());
    }

    #[test]
    fn layout_centers_small_inputs() {
        let layout = Layout::for_input_len(20);
        assert_eq!(layout.col_offset, 3);
        assert_eq!(layout.width, 624);
        assert_eq!(layout.height, 432);

        // Wider than the grid: offset goes negative, floor division.
        assert_eq!(Layout::for_input_len(29).col_offset, -2);
    }

    #[test]
    fn frame_mid_prefers_the_stored_split_point() {
        let mut frame = MergeFrame {
            id: 1,
            span: Span::new(0, 5),
            mid: Some(2),
            depth: 0,
            phase: MergeSortPhase::Split,
        };
        assert_eq!(frame_mid(&frame), 2);
        frame.mid = None;
        assert_eq!(frame_mid(&frame), 2);
        frame.span = Span::new(0, -1);
        assert_eq!(frame_mid(&frame), -1);
    }

    #[test]
    fn right_half_is_shifted_one_column() {
        let frame = MergeFrame {
            id: 1,
            span: Span::new(0, 3),
            mid: Some(1),
            depth: 0,
            phase: MergeSortPhase::Split,
        };
        assert_eq!(shifted_column(0, &frame, 3), 3);
        assert_eq!(shifted_column(1, &frame, 3), 4);
        assert_eq!(shifted_column(2, &frame, 3), 6);
        assert_eq!(shifted_column(3, &frame, 3), 7);
    }
}
