use crate::error::{SortraceError, SortraceResult};

/// Array indices a step calls out as the focus of its operation.
pub type Highlight = Vec<usize>;

/// Inclusive index bounds `[lo, hi]` owned by one call-stack frame.
///
/// Bounds are signed: the root frame over an empty input is `[0, -1]`, and
/// quick sort's left sub-range upper bound (`pivot - 1`) can go negative
/// before the length guard rejects it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Span {
    pub lo: i64,
    pub hi: i64,
}

impl Span {
    pub fn new(lo: i64, hi: i64) -> Self {
        Self { lo, hi }
    }

    /// Number of elements covered; 0 when `hi < lo`.
    pub fn len(&self) -> u64 {
        if self.hi < self.lo {
            0
        } else {
            (self.hi - self.lo + 1) as u64
        }
    }

    pub fn is_empty(&self) -> bool {
        self.hi < self.lo
    }

    pub fn contains(&self, other: Span) -> bool {
        other.lo >= self.lo && other.hi <= self.hi
    }

    pub fn validate(&self, array_len: usize) -> SortraceResult<()> {
        if self.lo < 0 {
            return Err(SortraceError::validation("span lo must be >= 0"));
        }
        if self.hi >= array_len as i64 {
            return Err(SortraceError::validation(
                "span hi must be within the array",
            ));
        }
        Ok(())
    }
}

/// Strictly increasing frame-id source, scoped to one trace run.
///
/// Ids start at 1 and are never reused, even across sibling calls, so a
/// consumer can key animations on them across the whole trace.
#[derive(Debug)]
pub struct FrameIds(u32);

impl FrameIds {
    pub fn new() -> Self {
        Self(1)
    }

    pub fn next(&mut self) -> u32 {
        let id = self.0;
        self.0 += 1;
        id
    }
}

impl Default for FrameIds {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn span_len_handles_inverted_bounds() {
        assert_eq!(Span::new(0, -1).len(), 0);
        assert!(Span::new(0, -1).is_empty());
        assert_eq!(Span::new(2, 2).len(), 1);
        assert_eq!(Span::new(1, 4).len(), 4);
    }

    #[test]
    fn span_containment() {
        let outer = Span::new(0, 9);
        assert!(outer.contains(Span::new(0, 4)));
        assert!(outer.contains(Span::new(5, 9)));
        assert!(!outer.contains(Span::new(5, 10)));
    }

    #[test]
    fn frame_ids_start_at_one_and_increase() {
        let mut ids = FrameIds::new();
        assert_eq!(ids.next(), 1);
        assert_eq!(ids.next(), 2);
        assert_eq!(ids.next(), 3);
    }
}
