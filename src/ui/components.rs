//! Reusable UI components
//!
//! This module contains standalone UI components used by the control panel
//! and the frame details view.

use crate::theme;
use crate::types::FetchStatus;
use eframe::egui;

/// Round toggle button of the panel header. The caret points where the panel will move.
pub fn toggle_button(ui: &mut egui::Ui, id: egui::Id, expanded: bool) -> egui::Response {
    let size = theme::TOGGLE_SIZE;
    let (rect, _) = ui.allocate_exact_size(egui::vec2(size, size), egui::Sense::hover());
    let response = ui.interact(rect, id, egui::Sense::click());

    if response.hovered() {
        ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
    }

    if ui.is_rect_visible(rect) {
        let (fill, draw_rect) = theme::button_visual(&response, theme::PRIMARY_CONTAINER, rect);
        let painter = ui.painter();
        painter.circle_filled(draw_rect.center(), draw_rect.width() / 2.0, fill);
        let icon = if expanded {
            egui_phosphor::regular::CARET_DOWN
        } else {
            egui_phosphor::regular::CARET_UP
        };
        painter.text(
            draw_rect.center(),
            egui::Align2::CENTER_CENTER,
            icon,
            egui::FontId::proportional(size * 0.5),
            theme::ON_PRIMARY_CONTAINER,
        );
    }

    response
}

/// Square icon button on the primary fill, used by the day steppers
pub fn icon_button(ui: &mut egui::Ui, id: egui::Id, icon: &str) -> egui::Response {
    let size = theme::STEPPER_SIZE;
    let (rect, _) = ui.allocate_exact_size(egui::vec2(size, size), egui::Sense::hover());
    let response = ui.interact(rect, id, egui::Sense::click());

    if response.hovered() {
        ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
    }

    if ui.is_rect_visible(rect) {
        let (fill, draw_rect) = theme::button_visual(&response, theme::PRIMARY_CONTAINER, rect);
        let painter = ui.painter();
        painter.rect_filled(draw_rect, theme::RADIUS_DEFAULT, fill);
        painter.text(
            draw_rect.center(),
            egui::Align2::CENTER_CENTER,
            icon,
            egui::FontId::proportional(size * 0.6),
            theme::ON_PRIMARY_CONTAINER,
        );
    }

    response
}

/// Show `add_contents` only while `visible`, animating height changes.
///
/// The region is visited on every frame so its animation state is kept even
/// when hidden.
pub fn reveal<R>(
    ui: &mut egui::Ui,
    id_salt: &str,
    visible: bool,
    add_contents: impl FnOnce(&mut egui::Ui) -> R,
) -> Option<R> {
    let id = ui.make_persistent_id(id_salt);
    let mut state =
        egui::collapsing_header::CollapsingState::load_with_default_open(ui.ctx(), id, visible);
    state.set_open(visible);
    state
        .show_body_unindented(ui, add_contents)
        .map(|inner| inner.inner)
}

/// Bordered image area. Draws the texture when present, otherwise the fetch status.
pub fn image_display(
    ui: &mut egui::Ui,
    texture: Option<&egui::TextureHandle>,
    status: &FetchStatus,
    size: egui::Vec2,
    rounding: f32,
    stroke: egui::Stroke,
) -> egui::Response {
    let (rect, response) = ui.allocate_exact_size(size, egui::Sense::hover());
    if !ui.is_rect_visible(rect) {
        return response;
    }

    match texture {
        Some(tex) => {
            // Frames are square; fit inside the rect
            let side = rect.width().min(rect.height());
            let img_rect = egui::Rect::from_center_size(rect.center(), egui::vec2(side, side));
            egui::Image::new(egui::load::SizedTexture::new(tex.id(), img_rect.size()))
                .corner_radius(rounding)
                .paint_at(ui, img_rect);
        }
        None => match status {
            FetchStatus::Loading { attempt, of } => {
                let spinner_size = (size.y * 0.4).min(32.0);
                ui.put(
                    egui::Rect::from_center_size(rect.center(), egui::vec2(spinner_size, spinner_size)),
                    egui::Spinner::new().size(spinner_size).color(stroke.color),
                );
                if *of > 1 && size.y >= 64.0 {
                    ui.painter().text(
                        rect.center() + egui::vec2(0.0, spinner_size),
                        egui::Align2::CENTER_TOP,
                        format!("{} / {}", attempt, of),
                        egui::FontId::proportional(theme::FONT_SMALL),
                        stroke.color,
                    );
                }
            }
            FetchStatus::Failed(_) if size.y >= 64.0 => {
                ui.painter().text(
                    rect.center(),
                    egui::Align2::CENTER_CENTER,
                    egui_phosphor::regular::IMAGE_BROKEN,
                    egui::FontId::proportional(size.y * 0.15),
                    stroke.color,
                );
            }
            _ => {}
        },
    }

    ui.painter()
        .rect_stroke(rect, rounding, stroke, egui::StrokeKind::Inside);

    response
}

/// Label / value row used by the statistics card
pub fn stat_row(ui: &mut egui::Ui, label: &str, value: String) {
    ui.horizontal(|ui| {
        ui.add(
            egui::Label::new(
                egui::RichText::new(label)
                    .size(theme::FONT_SMALL)
                    .color(theme::OUTLINE),
            )
            .selectable(false),
        );
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(
                egui::RichText::new(value)
                    .size(theme::FONT_BODY)
                    .color(theme::ON_BACKGROUND),
            );
        });
    });
}
