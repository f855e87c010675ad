//! UI module - contains UI rendering components
//!
//! `control_panel` renders the collapsible panel; `components` holds the
//! small custom-painted widgets it is built from.

pub mod components;
pub mod control_panel;
