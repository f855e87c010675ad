//! The "Panel de control": a collapsible panel with a date picker
//!
//! Rendering happens in two steps. [`PanelView::build`] derives a plain view
//! tree from the panel state, then [`render_control_panel`] paints that tree
//! and reports what the user did as a [`PanelAction`].

use crate::app::panel::{PanelAction, PanelState, SelectedDate};
use crate::constants::PANEL_TITLE;
use crate::theme;
use crate::types::{FetchStatus, PanelLabel, PickerOrientation};
use crate::ui::components;
use chrono::NaiveDate;
use eframe::egui;

const MIN_LANDSCAPE_WIDTH: f32 = 640.0;

const TOGGLE_ID: &str = "panel_toggle";
const PREV_DAY_ID: &str = "panel_prev_day";
const NEXT_DAY_ID: &str = "panel_next_day";

// ============================================================================
// VIEW TREE
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct PanelView {
    pub title: &'static str,
    pub label: PanelLabel,
    /// `DD/MM/YYYY` of the selected date
    pub summary: String,
    /// Summary strip shown while collapsed
    pub preview: RegionView,
    /// Image display and date picker shown while expanded
    pub tools: ToolsView,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegionView {
    pub visible: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToolsView {
    pub visible: bool,
    pub picker: PickerConfig,
}

/// How the embedded date picker is initialised
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PickerConfig {
    pub initial: NaiveDate,
    pub orientation: PickerOrientation,
}

impl PanelView {
    pub fn build(panel: &PanelState, date: &SelectedDate) -> Self {
        let label = panel.label();
        Self {
            title: PANEL_TITLE,
            label,
            summary: date.parts().display(),
            preview: RegionView {
                visible: label == PanelLabel::Inactive,
            },
            tools: ToolsView {
                visible: label == PanelLabel::Active,
                picker: PickerConfig {
                    initial: date.value(),
                    orientation: PickerOrientation::Landscape,
                },
            },
        }
    }
}

// ============================================================================
// RENDERING
// ============================================================================

/// What the image regions need to know about the current solar frame
pub struct FrameSlot<'a> {
    pub texture: Option<&'a egui::TextureHandle>,
    pub status: &'a FetchStatus,
}

/// Paint the panel with the given background fill. Returns what the user did this frame.
pub fn render_control_panel(
    ui: &mut egui::Ui,
    view: &PanelView,
    slot: &FrameSlot,
    fill: egui::Color32,
) -> PanelAction {
    let mut action = PanelAction::default();

    theme::panel_frame(fill).show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.spacing_mut().item_spacing = egui::vec2(theme::SPACING_MD, theme::SPACING_MD);

        // Header: title (+ summary strip while collapsed) and toggle
        ui.horizontal(|ui| {
            ui.vertical(|ui| {
                ui.set_width(theme::PANEL_TITLE_WIDTH);
                ui.add(
                    egui::Label::new(
                        egui::RichText::new(view.title)
                            .size(theme::FONT_TITLE)
                            .strong()
                            .color(theme::ON_PRIMARY),
                    )
                    .selectable(false),
                );
                components::reveal(ui, "panel_preview", view.preview.visible, |ui| {
                    render_preview(ui, view, slot);
                });
            });
            ui.with_layout(egui::Layout::right_to_left(egui::Align::TOP), |ui| {
                let expanded = view.label == PanelLabel::Active;
                if components::toggle_button(ui, egui::Id::new(TOGGLE_ID), expanded).clicked() {
                    action.toggled = true;
                }
            });
        });

        components::reveal(ui, "panel_tools", view.tools.visible, |ui| {
            let mut tools = |ui: &mut egui::Ui| {
                components::image_display(
                    ui,
                    slot.texture,
                    slot.status,
                    egui::vec2(theme::IMAGE_DISPLAY_SIZE, theme::IMAGE_DISPLAY_SIZE),
                    theme::RADIUS_DISPLAY,
                    egui::Stroke::new(theme::STROKE_THICK, theme::ON_PRIMARY),
                );
                if let Some(date) = render_picker(ui, &view.tools.picker) {
                    action.date_changed = Some(date);
                }
            };
            // Fall back to stacking when there is no room beside the display
            let orientation = if ui.available_width() < MIN_LANDSCAPE_WIDTH {
                PickerOrientation::Portrait
            } else {
                view.tools.picker.orientation
            };
            match orientation {
                PickerOrientation::Landscape => {
                    ui.horizontal_top(|ui| {
                        ui.spacing_mut().item_spacing.x = theme::SPACING_XL;
                        tools(ui)
                    });
                }
                PickerOrientation::Portrait => {
                    ui.vertical(tools);
                }
            }
        });
    });

    action
}

fn render_preview(ui: &mut egui::Ui, view: &PanelView, slot: &FrameSlot) {
    ui.horizontal(|ui| {
        let (w, h) = theme::PREVIEW_STRIP;
        components::image_display(
            ui,
            slot.texture,
            slot.status,
            egui::vec2(w, h),
            theme::RADIUS_MEDIUM,
            egui::Stroke::new(theme::STROKE_DEFAULT, theme::ON_PRIMARY),
        );
        ui.add(
            egui::Label::new(
                egui::RichText::new(&view.summary)
                    .size(theme::FONT_LABEL)
                    .color(theme::ON_PRIMARY),
            )
            .selectable(false),
        );
    });
}

/// Date picker with previous/next day steppers. Returns the newly picked date.
fn render_picker(ui: &mut egui::Ui, config: &PickerConfig) -> Option<NaiveDate> {
    let mut picked = None;

    ui.vertical(|ui| {
        ui.add(
            egui::Label::new(
                egui::RichText::new("SELECT DATE")
                    .size(theme::FONT_SMALL)
                    .color(theme::ON_PRIMARY),
            )
            .selectable(false),
        );

        ui.horizontal(|ui| {
            if components::icon_button(ui, egui::Id::new(PREV_DAY_ID), egui_phosphor::regular::CARET_LEFT)
                .on_hover_text("Previous day")
                .clicked()
            {
                picked = config.initial.pred_opt();
            }

            let mut date = config.initial;
            let response = ui.add(
                egui_extras::DatePickerButton::new(&mut date)
                    .id_salt("panel_date_picker")
                    .format("%d/%m/%Y")
                    .calendar_week(false)
                    .highlight_weekends(false),
            );
            if response.changed() {
                picked = Some(date);
            }

            if components::icon_button(ui, egui::Id::new(NEXT_DAY_ID), egui_phosphor::regular::CARET_RIGHT)
                .on_hover_text("Next day")
                .clicked()
            {
                picked = config.initial.succ_opt();
            }
        });

        if ui.add(theme::button_on_primary("Today")).clicked() {
            picked = Some(chrono::Local::now().date_naive());
        }
    });

    picked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::panel::ControlPanel;

    fn mounted() -> ControlPanel {
        ControlPanel::mount(SelectedDate::new(NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()))
    }

    #[test]
    fn test_collapsed_view_shows_preview_only() {
        let panel = mounted();
        let view = PanelView::build(panel.panel(), panel.date());
        assert_eq!(view.label, PanelLabel::Inactive);
        assert_eq!(view.label.class(), "un-active");
        assert!(view.preview.visible);
        assert!(!view.tools.visible);
        assert_eq!(view.summary, "15/03/2024");
    }

    #[test]
    fn test_toggle_reveals_tools() {
        let mut panel = mounted();
        panel.apply(PanelAction { toggled: true, date_changed: None });
        let view = PanelView::build(panel.panel(), panel.date());
        assert_eq!(view.label, PanelLabel::Active);
        assert!(!view.preview.visible);
        assert!(view.tools.visible);
        assert_eq!(view.label.class(), "active");
    }

    #[test]
    fn test_picker_starts_at_selected_date_in_landscape() {
        let mut panel = mounted();
        let d = NaiveDate::from_ymd_opt(2025, 12, 1).unwrap();
        panel.apply(PanelAction { toggled: false, date_changed: Some(d) });
        let view = PanelView::build(panel.panel(), panel.date());
        assert_eq!(view.tools.picker.initial, d);
        assert_eq!(view.tools.picker.orientation, PickerOrientation::Landscape);
        assert_eq!(view.summary, "01/12/2025");
    }

    #[test]
    fn test_build_is_deterministic() {
        let panel = mounted();
        assert_eq!(
            PanelView::build(panel.panel(), panel.date()),
            PanelView::build(panel.panel(), panel.date())
        );
    }

    fn input(events: Vec<egui::Event>) -> egui::RawInput {
        egui::RawInput {
            screen_rect: Some(egui::Rect::from_min_size(egui::Pos2::ZERO, egui::vec2(1200.0, 900.0))),
            events,
            ..Default::default()
        }
    }

    /// Run one frame of the panel, returning what the user did in it
    fn frame(ctx: &egui::Context, view: &PanelView, events: Vec<egui::Event>) -> PanelAction {
        let status = FetchStatus::Loading { attempt: 1, of: 16 };
        let mut action = PanelAction::default();
        let _ = ctx.run(input(events), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                let slot = FrameSlot { texture: None, status: &status };
                action = render_control_panel(ui, view, &slot, theme::PRIMARY);
            });
        });
        action
    }

    /// Lay the panel out, then click the centre of the widget `id`
    fn click(ctx: &egui::Context, view: &PanelView, id: &str) -> PanelAction {
        assert_eq!(frame(ctx, view, vec![]), PanelAction::default());
        let pos = ctx
            .read_response(egui::Id::new(id))
            .map(|r| r.rect.center())
            .unwrap_or_else(|| panic!("{} not laid out", id));

        let button = |pressed| egui::Event::PointerButton {
            pos,
            button: egui::PointerButton::Primary,
            pressed,
            modifiers: egui::Modifiers::NONE,
        };
        let mut action = frame(ctx, view, vec![egui::Event::PointerMoved(pos)]);
        for event in [button(true), button(false)] {
            let next = frame(ctx, view, vec![event]);
            action.toggled |= next.toggled;
            action.date_changed = action.date_changed.or(next.date_changed);
        }
        action
    }

    #[test]
    fn test_render_headless_without_input() {
        let ctx = egui::Context::default();
        let mut panel = mounted();

        for toggled in [false, true] {
            if toggled {
                panel.apply(PanelAction { toggled: true, date_changed: None });
            }
            let view = PanelView::build(panel.panel(), panel.date());
            assert_eq!(frame(&ctx, &view, vec![]), PanelAction::default());
        }
    }

    #[test]
    fn test_clicking_toggle_requests_toggle() {
        let ctx = egui::Context::default();
        let mut panel = mounted();
        let view = PanelView::build(panel.panel(), panel.date());

        let action = click(&ctx, &view, TOGGLE_ID);
        assert_eq!(action, PanelAction { toggled: true, date_changed: None });

        assert!(!panel.apply(action));
        assert_eq!(panel.panel().label(), PanelLabel::Active);
    }

    #[test]
    fn test_day_steppers_change_date() {
        let mut panel = mounted();
        panel.apply(PanelAction { toggled: true, date_changed: None });
        let view = PanelView::build(panel.panel(), panel.date());
        let initial = view.tools.picker.initial;

        let next = click(&egui::Context::default(), &view, NEXT_DAY_ID);
        assert!(!next.toggled);
        assert_eq!(next.date_changed, initial.succ_opt());

        let prev = click(&egui::Context::default(), &view, PREV_DAY_ID);
        assert_eq!(prev.date_changed, initial.pred_opt());

        assert!(panel.apply(next));
        assert_eq!(panel.date().value(), NaiveDate::from_ymd_opt(2024, 3, 16).unwrap());
        assert_eq!(panel.panel().label(), PanelLabel::Active);
    }
}
