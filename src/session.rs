use crate::{
    model::{Step, VisualState},
    player::Player,
    registry::Algorithm,
    view::{Layout, StepView},
};

/// Demo dataset used when no input is supplied.
pub const DEMO_DATASET: [f64; 20] = [
    14.0, 3.0, 2.0, 13.0, 5.0, 1.0, 15.0, 12.0, 4.0, 8.0, 7.0, 9.0, 6.0, 11.0, 10.0, 20.0, 16.0,
    19.0, 17.0, 18.0,
];

/// Owns one (algorithm, input) trace and the transport driving it.
///
/// The trace is produced eagerly on construction and on every algorithm or
/// input change; a change discards the old trace and resets the transport,
/// which is also what cancels any in-flight autoplay (the caller's timer
/// loop observes `is_playing == false` and stops rescheduling).
///
/// Invariant: `steps` is never empty — every generator emits at least the
/// initial snapshot, even for an empty input.
#[derive(Debug)]
pub struct Session {
    algorithm: Algorithm,
    input: Vec<f64>,
    steps: Vec<Step<VisualState>>,
    player: Player,
}

impl Session {
    #[tracing::instrument(skip(input), fields(len = input.len()))]
    pub fn new(input: Vec<f64>, algorithm: Algorithm) -> Self {
        let steps = algorithm.trace(&input);
        let mut player = Player::new();
        player.set_steps_length(steps.len());
        Self {
            algorithm,
            input,
            steps,
            player,
        }
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub fn input(&self) -> &[f64] {
        &self.input
    }

    /// The full step sequence, read-only.
    pub fn steps(&self) -> &[Step<VisualState>] {
        &self.steps
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn player_mut(&mut self) -> &mut Player {
        &mut self.player
    }

    /// Switches algorithms. A no-op for the already-active key; otherwise
    /// rebuilds the trace and resets playback.
    pub fn set_algorithm(&mut self, algorithm: Algorithm) {
        if algorithm == self.algorithm {
            return;
        }
        self.algorithm = algorithm;
        self.rebuild();
    }

    /// Replaces the input sequence, rebuilding the trace and resetting
    /// playback.
    pub fn set_input(&mut self, input: Vec<f64>) {
        self.input = input;
        self.rebuild();
    }

    #[tracing::instrument(skip(self))]
    fn rebuild(&mut self) {
        self.steps = self.algorithm.trace(&self.input);
        self.player.set_steps_length(self.steps.len());
        self.player.reset();
        tracing::debug!(
            algorithm = self.algorithm.key(),
            steps = self.steps.len(),
            "trace rebuilt"
        );
    }

    /// Index of the presented step: the transport cursor clamped into the
    /// trace (the cursor can sit past the end briefly after a rebuild).
    pub fn current_index(&self) -> usize {
        self.player.current_step().min(self.steps.len() - 1)
    }

    /// The presented step; total because the trace is never empty.
    pub fn current(&self) -> &Step<VisualState> {
        &self.steps[self.current_index()]
    }

    /// The derived view at the cursor: highlight, trail, write flags.
    pub fn view(&self) -> StepView<'_> {
        match StepView::at(&self.steps, self.player.current_step()) {
            Some(view) => view,
            // Unreachable: generators always emit the initial snapshot.
            None => unreachable!("trace is never empty"),
        }
    }

    pub fn layout(&self) -> Layout {
        Layout::for_input_len(self.input.len())
    }
}
