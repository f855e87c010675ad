//! Common types and data structures

use crate::analysis::ImageStats;
use chrono::{Datelike, NaiveDate};

/// Two-state label of the control panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelLabel {
    Active,
    Inactive,
}

impl PanelLabel {
    /// Style class carried by every element of the panel
    pub fn class(self) -> &'static str {
        match self {
            PanelLabel::Active => "active",
            PanelLabel::Inactive => "un-active",
        }
    }
}

/// Calendar fields of the selected date
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateParts {
    pub day: u32,
    pub month: u32, // 1-indexed
    pub year: i32,
}

impl From<NaiveDate> for DateParts {
    fn from(date: NaiveDate) -> Self {
        Self {
            day: date.day(),
            month: date.month(),
            year: date.year(),
        }
    }
}

impl DateParts {
    /// `DD/MM/YYYY`
    pub fn display(&self) -> String {
        format!("{:02}/{:02}/{:04}", self.day, self.month, self.year)
    }
}

/// Layout of the embedded date picker relative to the image display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerOrientation {
    Landscape,
    Portrait,
}

/// Status of the solar frame fetch for the selected date
#[derive(Debug, Clone, PartialEq)]
pub enum FetchStatus {
    Idle,
    Loading { attempt: usize, of: usize },
    Ready,
    Failed(String),
}

/// Decoded solar image ready for upload as a texture
#[derive(Debug, Clone)]
pub struct SolarFrame {
    pub date: NaiveDate,
    pub url: String,
    pub size: [usize; 2],
    pub byte_len: u64, // encoded size as downloaded
    pub rgba: Vec<u8>,
    pub stats: ImageStats,
}

/// Shared state between the fetch task and the UI thread
pub struct FrameState {
    pub status: FetchStatus,
    pub frame: Option<SolarFrame>,
    pub generation: u64, // bumped on each request; stale tasks compare against it
}

impl Default for FrameState {
    fn default() -> Self {
        Self {
            status: FetchStatus::Idle,
            frame: None,
            generation: 0,
        }
    }
}
