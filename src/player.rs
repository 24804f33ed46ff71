use std::time::Duration;

/// LED segments on the coarse progress meter. Display-only.
pub const LED_COUNT: u32 = 10;

const DEFAULT_SPEED_MS: i64 = 800;
const BASE_DELAY_MS: i64 = 1000;

/// Transport state machine over an index into a step sequence.
///
/// The authoritative mutable state is exactly five fields; every query is a
/// stateless function of them. The effective transport state is one of
/// stopped / playing / paused even though it is stored as two flags: `play`
/// clears `paused`, `pause` clears `is_playing`, `reset` clears both and
/// seeks 0.
///
/// Every operation is total. Out-of-range cursors are clamped, never
/// rejected, and the engine accepts any speed value (the UI constrains the
/// useful range).
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct Player {
    steps_len: usize,
    current_step: usize,
    is_playing: bool,
    paused: bool,
    speed_ms: i64,
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}

impl Player {
    pub fn new() -> Self {
        Self {
            steps_len: 0,
            current_step: 0,
            is_playing: false,
            paused: false,
            speed_ms: DEFAULT_SPEED_MS,
        }
    }

    // ----- raw state -----

    pub fn steps_len(&self) -> usize {
        self.steps_len
    }

    pub fn current_step(&self) -> usize {
        self.current_step
    }

    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn speed_ms(&self) -> i64 {
        self.speed_ms
    }

    // ----- actions -----

    /// Called whenever the active trace changes. Does not move the cursor;
    /// the cursor is re-clamped lazily by the next set operation (and
    /// consumers index with [`Player::current_step`] clamped by the trace
    /// owner, so a shrink cannot read out of bounds).
    pub fn set_steps_length(&mut self, len: usize) {
        self.steps_len = len;
    }

    /// Clamped random access; accepts any integer and always succeeds.
    pub fn seek(&mut self, step: i64) {
        let max = self.steps_len.saturating_sub(1) as i64;
        self.current_step = step.clamp(0, max) as usize;
    }

    pub fn first(&mut self) {
        self.seek(0);
    }

    pub fn last(&mut self) {
        self.seek(i64::MAX);
    }

    /// Advances one step; no-op at the last step (no wraparound).
    pub fn next_step(&mut self) {
        if self.current_step + 1 < self.steps_len {
            self.current_step += 1;
        }
    }

    /// Retreats one step; no-op at the first step.
    pub fn prev_step(&mut self) {
        if self.current_step > 0 {
            self.current_step -= 1;
        }
    }

    /// Starts playback. Pressing play at the end restarts from step 0
    /// instead of refusing to play.
    pub fn play(&mut self) {
        if self.steps_len > 0 && self.current_step >= self.steps_len - 1 {
            self.current_step = 0;
        }
        self.is_playing = true;
        self.paused = false;
    }

    /// Stops autoplay advancement but keeps the cursor where it is.
    pub fn pause(&mut self) {
        self.is_playing = false;
        self.paused = true;
    }

    /// Back to the stopped state: cursor 0, no playback.
    pub fn reset(&mut self) {
        self.current_step = 0;
        self.is_playing = false;
        self.paused = false;
    }

    /// Any numeric value is accepted; higher means faster playback.
    pub fn set_speed(&mut self, speed_ms: i64) {
        self.speed_ms = speed_ms;
    }

    /// One autoplay advance. While playing, either moves the cursor one step
    /// forward or, when the cursor is already at the last step, halts
    /// playback instead of advancing. Returns whether playback continues.
    pub fn tick(&mut self) -> bool {
        if !self.is_playing {
            return false;
        }
        if self.at_last_step() {
            self.is_playing = false;
            return false;
        }
        self.current_step += 1;
        true
    }

    /// Wall-clock delay between autoplay ticks: `1000 - speed_ms`, floored
    /// at zero. Higher speed means less delay.
    pub fn step_delay(&self) -> Duration {
        let ms = (BASE_DELAY_MS - self.speed_ms).max(0);
        Duration::from_millis(ms as u64)
    }

    // ----- derived state -----

    pub fn at_first_step(&self) -> bool {
        self.current_step == 0
    }

    pub fn at_last_step(&self) -> bool {
        self.steps_len == 0 || self.current_step >= self.steps_len - 1
    }

    /// Playback progress in `[0, 1]`; 0 for traces of one step or fewer.
    pub fn progress(&self) -> f64 {
        if self.steps_len <= 1 {
            return 0.0;
        }
        (self.current_step + 1) as f64 / self.steps_len as f64
    }

    pub fn led_count(&self) -> u32 {
        LED_COUNT
    }

    pub fn active_leds(&self) -> u32 {
        (self.progress() * f64::from(self.led_count())).round() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player(len: usize) -> Player {
        let mut p = Player::new();
        p.set_steps_length(len);
        p
    }

    #[test]
    fn seek_clamps_any_integer() {
        let mut p = player(5);
        p.seek(-3);
        assert_eq!(p.current_step(), 0);
        p.seek(99);
        assert_eq!(p.current_step(), 4);
        p.seek(2);
        assert_eq!(p.current_step(), 2);
    }

    #[test]
    fn seek_on_empty_trace_stays_at_zero() {
        let mut p = player(0);
        p.seek(7);
        assert_eq!(p.current_step(), 0);
        p.seek(-7);
        assert_eq!(p.current_step(), 0);
    }

    #[test]
    fn next_and_prev_do_not_wrap() {
        let mut p = player(2);
        p.prev_step();
        assert_eq!(p.current_step(), 0);
        p.next_step();
        assert_eq!(p.current_step(), 1);
        p.next_step();
        assert_eq!(p.current_step(), 1);
    }

    #[test]
    fn play_at_end_restarts_from_zero() {
        let mut p = player(4);
        p.seek(3);
        assert!(p.at_last_step());
        p.play();
        assert_eq!(p.current_step(), 0);
        assert!(p.is_playing());
        assert!(!p.is_paused());
    }

    #[test]
    fn play_mid_trace_keeps_the_cursor() {
        let mut p = player(4);
        p.seek(1);
        p.play();
        assert_eq!(p.current_step(), 1);
        assert!(p.is_playing());
    }

    #[test]
    fn pause_keeps_cursor_and_reset_does_not() {
        let mut p = player(4);
        p.seek(2);
        p.play();
        p.pause();
        assert_eq!(p.current_step(), 2);
        assert!(!p.is_playing());
        assert!(p.is_paused());

        p.reset();
        assert_eq!(p.current_step(), 0);
        assert!(!p.is_playing());
        assert!(!p.is_paused());
    }

    #[test]
    fn play_clears_paused() {
        let mut p = player(4);
        p.pause();
        p.play();
        assert!(p.is_playing());
        assert!(!p.is_paused());
    }

    #[test]
    fn tick_advances_then_halts_at_the_end() {
        let mut p = player(3);
        p.play();
        assert!(p.tick());
        assert_eq!(p.current_step(), 1);
        assert!(p.tick());
        assert_eq!(p.current_step(), 2);
        // Cursor is at the last step: the next tick halts without advancing.
        assert!(!p.tick());
        assert_eq!(p.current_step(), 2);
        assert!(!p.is_playing());
    }

    #[test]
    fn tick_is_inert_while_not_playing() {
        let mut p = player(3);
        assert!(!p.tick());
        assert_eq!(p.current_step(), 0);
    }

    #[test]
    fn progress_is_zero_for_tiny_traces() {
        assert_eq!(player(0).progress(), 0.0);
        assert_eq!(player(1).progress(), 0.0);

        let mut p = player(4);
        assert_eq!(p.progress(), 0.25);
        p.last();
        assert_eq!(p.progress(), 1.0);
    }

    #[test]
    fn led_meter_tracks_progress() {
        let mut p = player(10);
        assert_eq!(p.active_leds(), 1);
        p.last();
        assert_eq!(p.active_leds(), 10);
    }

    #[test]
    fn speed_accepts_any_value() {
        let mut p = player(2);
        p.set_speed(800);
        assert_eq!(p.step_delay(), Duration::from_millis(200));
        p.set_speed(2000);
        assert_eq!(p.step_delay(), Duration::ZERO);
        p.set_speed(-500);
        assert_eq!(p.step_delay(), Duration::from_millis(1500));
    }
}
