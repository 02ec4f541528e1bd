use chrono::NaiveTime;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SlotWindow {
    Morning,
    Evening,
}

/// A bookable half-hour slot. `label` is the exact text the website shows and
/// stores, e.g. `"9:30 AM"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeSlot {
    pub label: &'static str,
    pub hour: u32,
    pub minute: u32,
}

const fn slot(label: &'static str, hour: u32, minute: u32) -> TimeSlot {
    TimeSlot {
        label,
        hour,
        minute,
    }
}

/// Morning window 09:00-14:00, evening window 15:00-20:00.
pub const TIME_SLOTS: [TimeSlot; 20] = [
    slot("9:00 AM", 9, 0),
    slot("9:30 AM", 9, 30),
    slot("10:00 AM", 10, 0),
    slot("10:30 AM", 10, 30),
    slot("11:00 AM", 11, 0),
    slot("11:30 AM", 11, 30),
    slot("12:00 PM", 12, 0),
    slot("12:30 PM", 12, 30),
    slot("1:00 PM", 13, 0),
    slot("1:30 PM", 13, 30),
    slot("3:00 PM", 15, 0),
    slot("3:30 PM", 15, 30),
    slot("4:00 PM", 16, 0),
    slot("4:30 PM", 16, 30),
    slot("5:00 PM", 17, 0),
    slot("5:30 PM", 17, 30),
    slot("6:00 PM", 18, 0),
    slot("6:30 PM", 18, 30),
    slot("7:00 PM", 19, 0),
    slot("7:30 PM", 19, 30),
];

impl TimeSlot {
    pub fn from_label(label: &str) -> Option<&'static TimeSlot> {
        TIME_SLOTS.iter().find(|s| s.label == label)
    }

    pub fn start(&self) -> NaiveTime {
        NaiveTime::from_hms_opt(self.hour, self.minute, 0).unwrap_or_default()
    }

    pub fn window(&self) -> SlotWindow {
        if self.hour < 14 {
            SlotWindow::Morning
        } else {
            SlotWindow::Evening
        }
    }
}
