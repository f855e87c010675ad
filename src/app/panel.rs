//! Control panel state: visibility toggle and selected date
//!
//! The panel label and the calendar fields are computed on read from the
//! stored flag and date; neither is stored.

use crate::types::{DateParts, PanelLabel};
use chrono::{DateTime, NaiveDate, TimeZone};
use tracing::debug;

// ============================================================================
// VISIBILITY
// ============================================================================

/// Expanded/collapsed state of the panel. Starts collapsed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PanelState {
    expanded: bool,
}

impl PanelState {
    pub fn toggle(&mut self) {
        self.expanded = !self.expanded;
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    pub fn label(&self) -> PanelLabel {
        if self.expanded {
            PanelLabel::Active
        } else {
            PanelLabel::Inactive
        }
    }
}

// ============================================================================
// DATE
// ============================================================================

/// A value the date picker (or anything else) may hand to [`SelectedDate::set_date`].
///
/// Returns `None` when the value does not denote a real calendar date.
pub trait CalendarValue {
    fn to_naive_date(&self) -> Option<NaiveDate>;
}

impl CalendarValue for NaiveDate {
    fn to_naive_date(&self) -> Option<NaiveDate> {
        Some(*self)
    }
}

impl CalendarValue for Option<NaiveDate> {
    fn to_naive_date(&self) -> Option<NaiveDate> {
        *self
    }
}

/// ISO `YYYY-MM-DD`
impl CalendarValue for &str {
    fn to_naive_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.trim(), "%Y-%m-%d").ok()
    }
}

impl<Tz: TimeZone> CalendarValue for DateTime<Tz> {
    fn to_naive_date(&self) -> Option<NaiveDate> {
        Some(self.date_naive())
    }
}

impl CalendarValue for DateParts {
    fn to_naive_date(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, self.day)
    }
}

/// The date currently selected in the panel. Always a valid date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectedDate {
    value: NaiveDate,
}

impl SelectedDate {
    pub fn new(value: NaiveDate) -> Self {
        Self { value }
    }

    pub fn today() -> Self {
        Self::new(chrono::Local::now().date_naive())
    }

    pub fn value(&self) -> NaiveDate {
        self.value
    }

    pub fn parts(&self) -> DateParts {
        DateParts::from(self.value)
    }

    /// Replace the date. Returns true only if the stored value changed;
    /// invalid input keeps the previous date.
    pub fn set_date(&mut self, value: impl CalendarValue) -> bool {
        match value.to_naive_date() {
            Some(date) if date != self.value => {
                debug!(from = %self.value, to = %date, "Selected date changed");
                self.value = date;
                true
            }
            Some(_) => false,
            None => {
                debug!(current = %self.value, "Ignoring invalid date input");
                false
            }
        }
    }
}

// ============================================================================
// COMPONENT
// ============================================================================

/// What the user did with the panel during one frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PanelAction {
    pub toggled: bool,
    pub date_changed: Option<NaiveDate>,
}

/// The control panel instance owned by the app
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlPanel {
    pub(crate) panel: PanelState,
    pub(crate) date: SelectedDate,
}

impl ControlPanel {
    pub fn mount(date: SelectedDate) -> Self {
        Self {
            panel: PanelState::default(),
            date,
        }
    }

    pub fn panel(&self) -> &PanelState {
        &self.panel
    }

    pub fn date(&self) -> &SelectedDate {
        &self.date
    }

    /// Apply a frame's action. Returns true if the selected date changed.
    pub fn apply(&mut self, action: PanelAction) -> bool {
        if action.toggled {
            self.panel.toggle();
            debug!(
                expanded = self.panel.is_expanded(),
                label = self.panel.label().class(),
                "Control panel toggled"
            );
        }
        match action.date_changed {
            Some(date) => self.date.set_date(date),
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_label_tracks_toggle_parity() {
        let mut panel = PanelState::default();
        for n in 1..=9 {
            panel.toggle();
            let expected = if n % 2 == 1 { PanelLabel::Active } else { PanelLabel::Inactive };
            assert_eq!(panel.label(), expected);
            assert_eq!(panel.is_expanded(), n % 2 == 1);
        }
    }

    #[test]
    fn test_double_toggle_restores_label() {
        let mut panel = PanelState::default();
        let before = panel.label();
        panel.toggle();
        panel.toggle();
        assert_eq!(panel.label(), before);

        panel.toggle();
        let before = panel.label();
        panel.toggle();
        panel.toggle();
        assert_eq!(panel.label(), before);
    }

    #[test]
    fn test_parts_follow_every_date() {
        let mut selected = SelectedDate::new(date(2000, 1, 1));
        let mut d = date(2023, 12, 25);
        for _ in 0..800 {
            selected.set_date(d);
            let parts = selected.parts();
            assert_eq!((parts.day, parts.month, parts.year), (d.day(), d.month(), d.year()));
            d = d.succ_opt().unwrap();
        }
    }

    #[test]
    fn test_set_date_is_idempotent() {
        let mut selected = SelectedDate::new(date(2024, 3, 15));
        assert!(selected.set_date(date(2024, 7, 4)));
        let parts = selected.parts();
        assert!(!selected.set_date(date(2024, 7, 4)));
        assert_eq!(selected.parts(), parts);
    }

    #[test]
    fn test_mount_state() {
        let panel = ControlPanel::mount(SelectedDate::new(date(2024, 3, 15)));
        assert_eq!(panel.date().parts(), DateParts { day: 15, month: 3, year: 2024 });
        assert_eq!(panel.panel().label(), PanelLabel::Inactive);
    }

    #[test]
    fn test_date_change_keeps_panel_active() {
        let mut panel = ControlPanel::mount(SelectedDate::new(date(2024, 3, 15)));
        panel.apply(PanelAction { toggled: true, date_changed: None });
        assert_eq!(panel.panel().label(), PanelLabel::Active);

        let changed = panel.apply(PanelAction {
            toggled: false,
            date_changed: Some(date(2025, 12, 1)),
        });
        assert!(changed);
        assert_eq!(panel.date().parts(), DateParts { day: 1, month: 12, year: 2025 });
        assert_eq!(panel.panel().label(), PanelLabel::Active);
    }

    #[test]
    fn test_invalid_input_keeps_previous_date() {
        let mut selected = SelectedDate::new(date(2024, 3, 15));
        let parts = selected.parts();

        assert!(!selected.set_date(None::<NaiveDate>));
        assert!(!selected.set_date("not a date"));
        assert!(!selected.set_date("2024-02-30"));
        assert!(!selected.set_date(DateParts { day: 0, month: 13, year: 2024 }));
        assert_eq!(selected.parts(), parts);
    }

    #[test]
    fn test_boundary_adapters() {
        let mut selected = SelectedDate::new(date(2024, 3, 15));
        assert!(selected.set_date(" 2024-02-29 "));
        assert_eq!(selected.value(), date(2024, 2, 29));

        let utc = chrono::Utc.with_ymd_and_hms(2025, 6, 30, 23, 0, 0).unwrap();
        assert!(selected.set_date(utc));
        assert_eq!(selected.parts(), DateParts { day: 30, month: 6, year: 2025 });

        assert!(selected.set_date(DateParts { day: 1, month: 1, year: 1996 }));
        assert_eq!(selected.value(), date(1996, 1, 1));
    }
}
