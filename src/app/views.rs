//! Frame details view (central panel above the control panel)

use super::images::lock;
use super::App;
use crate::theme;
use crate::types::FetchStatus;
use crate::ui::components::{image_display, stat_row};
use crate::utils::format_bytes;
use eframe::egui;
use tracing::warn;

impl App {
    pub(crate) fn render_frame_details(&mut self, ui: &mut egui::Ui) {
        let parts = self.control.date().parts();
        let status = self.frame_status();

        ui.horizontal(|ui| {
            ui.add(
                egui::Label::new(
                    egui::RichText::new(format!("{}  {}", egui_phosphor::regular::SUN, parts.display()))
                        .size(theme::FONT_TITLE)
                        .color(theme::ON_BACKGROUND),
                )
                .selectable(false),
            );
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let (text, color) = match &status {
                    FetchStatus::Idle => ("Idle".to_string(), theme::OUTLINE),
                    FetchStatus::Loading { attempt, of } => {
                        (format!("Loading {}/{}", attempt, of), theme::SECONDARY)
                    }
                    FetchStatus::Ready => ("Ready".to_string(), theme::PRIMARY),
                    FetchStatus::Failed(e) => (e.clone(), theme::ERROR),
                };
                ui.label(egui::RichText::new(text).size(theme::FONT_LABEL).color(color));
            });
        });

        ui.add_space(theme::SPACING_MD);

        // Large frame on the left, statistics card on the right
        let side = (ui.available_height() - theme::SPACING_MD)
            .min(ui.available_width() * 0.6)
            .max(64.0);
        let mut retry = false;
        ui.horizontal_top(|ui| {
            image_display(
                ui,
                self.frame_texture.as_ref(),
                &status,
                egui::vec2(side, side),
                theme::RADIUS_MEDIUM,
                egui::Stroke::new(theme::STROKE_DEFAULT, theme::OUTLINE),
            );

            theme::card_frame().show(ui, |ui| {
                ui.set_width(ui.available_width().min(320.0));
                ui.add(
                    egui::Label::new(
                        egui::RichText::new("INTENSITY")
                            .size(theme::FONT_SMALL)
                            .color(theme::OUTLINE),
                    )
                    .selectable(false),
                );
                ui.add_space(theme::SPACING_SM);

                let s = lock(&self.frame_state);
                match &s.frame {
                    Some(frame) => {
                        stat_row(ui, "Observed", frame.date.format("%Y-%m-%d").to_string());
                        stat_row(ui, "Entropy", format!("{:.3} bits", frame.stats.entropy));
                        stat_row(ui, "Mean", format!("{:.2}", frame.stats.mean_intensity));
                        stat_row(ui, "Std. deviation", format!("{:.2}", frame.stats.standard_deviation));
                        ui.separator();
                        stat_row(ui, "Resolution", format!("{} × {}", frame.size[0], frame.size[1]));
                        stat_row(ui, "Size", format_bytes(frame.byte_len));
                        ui.add_space(theme::SPACING_SM);
                        let open_label = format!("{}  Open source image", egui_phosphor::regular::ARROW_SQUARE_OUT);
                        if ui.button(open_label).on_hover_text(frame.url.as_str()).clicked() {
                            if let Err(e) = open::that(&frame.url) {
                                warn!(url = %frame.url, error = %e, "Failed to open browser");
                            }
                        }
                    }
                    None => {
                        ui.label(
                            egui::RichText::new("No frame loaded")
                                .size(theme::FONT_BODY)
                                .color(theme::OUTLINE),
                        );
                        if matches!(status, FetchStatus::Failed(_) | FetchStatus::Idle) {
                            let label = format!("{}  Load frame", egui_phosphor::regular::ARROW_CLOCKWISE);
                            retry = ui.button(label).clicked();
                        }
                    }
                }
            });
        });

        if retry {
            let ctx = ui.ctx().clone();
            self.request_frame(&ctx);
        }
    }
}
