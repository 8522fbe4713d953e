use crate::model::DayRecord;

/// Horizontal drag distance, in CSS pixels, before a touch counts as a
/// swipe.
pub const SWIPE_THRESHOLD_PX: f64 = 50.0;

/// Below this viewport width the auxiliary mobile navigation strip
/// (previous/next buttons plus dropdown) is mounted.
pub const MOBILE_BREAKPOINT_PX: u32 = 768;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Viewport {
    Mobile,
    Desktop,
}

/// Classify a viewport width. Crossing the breakpoint mounts or unmounts
/// the mobile strip but never changes the active day, which lives in
/// [`DaySelection`] and is untouched by resizes.
pub fn viewport_for(width: u32) -> Viewport {
    if width < MOBILE_BREAKPOINT_PX {
        Viewport::Mobile
    } else {
        Viewport::Desktop
    }
}

/// Live state machine over the day values of the current dataset. The
/// active day starts at the first record and moves via explicit selection
/// or swipe gestures; there is no terminal state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DaySelection {
    days: Vec<u32>,
    active: u32,
}

impl DaySelection {
    /// `None` when the dataset is empty.
    pub fn new(records: &[DayRecord]) -> Option<Self> {
        Self::from_days(records.iter().map(|record| record.day).collect())
    }

    pub fn from_days(days: Vec<u32>) -> Option<Self> {
        let first = *days.first()?;
        Some(Self {
            days,
            active: first,
        })
    }

    pub fn active(&self) -> u32 {
        self.active
    }

    pub fn days(&self) -> &[u32] {
        &self.days
    }

    /// Activate `day` if a card for it exists. Returns whether the
    /// selection changed.
    pub fn select(&mut self, day: u32) -> bool {
        if day == self.active || !self.days.contains(&day) {
            return false;
        }

        self.active = day;
        true
    }

    /// Advance to `active + 1` when that day exists.
    pub fn next(&mut self) -> Option<u32> {
        self.step(self.active.checked_add(1)?)
    }

    /// Retreat to `active - 1` when that day exists.
    pub fn prev(&mut self) -> Option<u32> {
        self.step(self.active.checked_sub(1)?)
    }

    fn step(&mut self, day: u32) -> Option<u32> {
        self.days.contains(&day).then(|| {
            self.active = day;
            day
        })
    }

    /// Interpret a horizontal drag. Gestures starting inside the map widget
    /// are ignored, the map has its own drag semantics. A drag beyond the
    /// threshold right-to-left advances, left-to-right retreats.
    pub fn swipe(&mut self, delta_x: f64, within_map: bool) -> Option<u32> {
        if within_map {
            return None;
        }

        if delta_x <= -SWIPE_THRESHOLD_PX {
            self.next()
        } else if delta_x >= SWIPE_THRESHOLD_PX {
            self.prev()
        } else {
            None
        }
    }
}
