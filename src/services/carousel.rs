//! Cyclic navigation over the generated candidate schedules.

use super::response_parser::{ClassEvent, ScheduleSet};

/// Tracks which of the generated schedules is displayed.
///
/// Navigation wraps around deliberately; there is no first/last boundary
/// stop. The index resets to 0 whenever new results arrive.
#[derive(Debug, Clone, Default)]
pub struct ScheduleCarousel {
    schedules: Vec<ScheduleSet>,
    index: usize,
}

impl ScheduleCarousel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the schedule list with freshly generated results.
    pub fn set_schedules(&mut self, schedules: Vec<ScheduleSet>) {
        self.schedules = schedules;
        self.index = 0;
    }

    /// Discard all schedules and reset the index.
    pub fn clear(&mut self) {
        self.schedules.clear();
        self.index = 0;
    }

    pub fn len(&self) -> usize {
        self.schedules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.schedules.is_empty()
    }

    /// Zero-based position of the displayed schedule.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Advance to the next schedule, wrapping past the end.
    pub fn next(&mut self) {
        if !self.schedules.is_empty() {
            self.index = (self.index + 1) % self.schedules.len();
        }
    }

    /// Step back to the previous schedule, wrapping past the start.
    pub fn previous(&mut self) {
        if !self.schedules.is_empty() {
            let len = self.schedules.len();
            self.index = (self.index + len - 1) % len;
        }
    }

    /// The displayed schedule, or an empty slice when there are none.
    pub fn current(&self) -> &[ClassEvent] {
        self.schedules
            .get(self.index)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}
