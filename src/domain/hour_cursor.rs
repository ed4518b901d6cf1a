/// Hours covered by a forecast-window visualization.
pub const FORECAST_WINDOW_HOURS: usize = 8;

/// Which slice of the hourly series drives a visualization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WindowMode {
    /// The single hour under the cursor.
    #[default]
    Current,
    /// The maximum over the next eight hours from the cursor.
    Forecast,
}

impl WindowMode {
    #[must_use]
    pub fn span(self) -> usize {
        match self {
            Self::Current => 1,
            Self::Forecast => FORECAST_WINDOW_HOURS,
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Current => Self::Forecast,
            Self::Forecast => Self::Current,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Current => "Now",
            Self::Forecast => "Next 8h",
        }
    }
}

/// Bounded offset into the hourly series.
///
/// The index stays within `[0, len - lookahead]` (saturating at zero), so a
/// window of `lookahead` hours starting at the cursor is always complete
/// when the series is long enough. Boundary moves are no-ops.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HourCursor {
    index: usize,
    len: usize,
    lookahead: usize,
}

impl Default for HourCursor {
    fn default() -> Self {
        Self {
            index: 0,
            len: 0,
            lookahead: 1,
        }
    }
}

impl HourCursor {
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self {
            len,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[must_use]
    pub fn lookahead(&self) -> usize {
        self.lookahead
    }

    #[must_use]
    pub fn max_index(&self) -> usize {
        self.len.saturating_sub(self.lookahead)
    }

    pub fn advance(&mut self) {
        self.index = (self.index + 1).min(self.max_index());
    }

    pub fn retreat(&mut self) {
        self.index = self.index.saturating_sub(1);
    }

    /// Back to the first hour of a freshly fetched series.
    pub fn reset(&mut self, len: usize) {
        self.len = len;
        self.index = 0;
    }

    pub fn set_lookahead(&mut self, lookahead: usize) {
        self.lookahead = lookahead.max(1);
        self.index = self.index.min(self.max_index());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn advance_stops_at_last_hour() {
        let mut cursor = HourCursor::new(3);
        for _ in 0..10 {
            cursor.advance();
        }
        assert_eq!(cursor.index(), 2);
    }

    #[test]
    fn forecast_lookahead_stops_eight_hours_before_end() {
        let mut cursor = HourCursor::new(24);
        cursor.set_lookahead(FORECAST_WINDOW_HOURS);
        for _ in 0..40 {
            cursor.advance();
        }
        assert_eq!(cursor.index(), 16);
    }

    #[test]
    fn enabling_lookahead_reclamps_index() {
        let mut cursor = HourCursor::new(24);
        for _ in 0..23 {
            cursor.advance();
        }
        assert_eq!(cursor.index(), 23);
        cursor.set_lookahead(FORECAST_WINDOW_HOURS);
        assert_eq!(cursor.index(), 16);
        cursor.set_lookahead(1);
        assert_eq!(cursor.index(), 16);
    }

    #[test]
    fn retreat_at_zero_is_noop() {
        let mut cursor = HourCursor::new(5);
        cursor.retreat();
        assert_eq!(cursor.index(), 0);
    }

    #[test]
    fn reset_returns_to_zero_with_new_length() {
        let mut cursor = HourCursor::new(48);
        cursor.advance();
        cursor.advance();
        cursor.reset(12);
        assert_eq!(cursor.index(), 0);
        assert_eq!(cursor.len(), 12);
    }

    #[test]
    fn short_or_empty_series_pin_cursor_at_zero() {
        let mut empty = HourCursor::default();
        empty.advance();
        assert_eq!(empty.index(), 0);

        let mut short = HourCursor::new(5);
        short.set_lookahead(FORECAST_WINDOW_HOURS);
        short.advance();
        assert_eq!(short.index(), 0);
    }

    #[test]
    fn window_mode_toggles_and_spans() {
        assert_eq!(WindowMode::Current.toggled(), WindowMode::Forecast);
        assert_eq!(WindowMode::Forecast.span(), FORECAST_WINDOW_HOURS);
        assert_eq!(WindowMode::Current.span(), 1);
    }

    proptest! {
        #[test]
        fn moves_never_leave_bounds(
            len in 1usize..96,
            windowed in any::<bool>(),
            moves in proptest::collection::vec(any::<bool>(), 0..200),
        ) {
            let mut cursor = HourCursor::new(len);
            if windowed {
                cursor.set_lookahead(FORECAST_WINDOW_HOURS);
            }
            let upper = if windowed {
                len.saturating_sub(FORECAST_WINDOW_HOURS)
            } else {
                len - 1
            };
            for forward in moves {
                if forward {
                    cursor.advance();
                } else {
                    cursor.retreat();
                }
                prop_assert!(cursor.index() <= upper);
                prop_assert!(cursor.index() < len);
            }
        }
    }
}
