//! Centralized theme constants for Sunwatch
//! All colors, sizes, and styling should reference these constants

use egui::Color32;

// =============================================================================
// COLORS - Primary
// =============================================================================
pub const PRIMARY: Color32 = Color32::from_rgb(0x5f, 0xd4, 0xfd);
pub const ON_PRIMARY: Color32 = Color32::from_rgb(0x00, 0x35, 0x44);
pub const PRIMARY_CONTAINER: Color32 = Color32::from_rgb(0x00, 0x4d, 0x62);
pub const ON_PRIMARY_CONTAINER: Color32 = Color32::from_rgb(0xba, 0xea, 0xff);

// =============================================================================
// COLORS - Secondary
// =============================================================================
pub const SECONDARY: Color32 = Color32::from_rgb(0xb3, 0xca, 0xd5);
pub const ON_SECONDARY: Color32 = Color32::from_rgb(0x1e, 0x33, 0x3c);
pub const SECONDARY_CONTAINER: Color32 = Color32::from_rgb(0x35, 0x4a, 0x53);
pub const ON_SECONDARY_CONTAINER: Color32 = Color32::from_rgb(0xcf, 0xe6, 0xf1);

// =============================================================================
// COLORS - Tertiary
// =============================================================================
pub const TERTIARY: Color32 = Color32::from_rgb(0xc4, 0xc3, 0xeb);
pub const ON_TERTIARY: Color32 = Color32::from_rgb(0x2d, 0x2d, 0x4d);
pub const TERTIARY_CONTAINER: Color32 = Color32::from_rgb(0x43, 0x44, 0x65);
pub const ON_TERTIARY_CONTAINER: Color32 = Color32::from_rgb(0xe1, 0xdf, 0xff);

// =============================================================================
// COLORS - Error
// =============================================================================
pub const ERROR: Color32 = Color32::from_rgb(0xff, 0xb4, 0xab);
pub const ON_ERROR: Color32 = Color32::from_rgb(0x69, 0x00, 0x05);
pub const ERROR_CONTAINER: Color32 = Color32::from_rgb(0x93, 0x00, 0x0a);
pub const ON_ERROR_CONTAINER: Color32 = Color32::from_rgb(0xff, 0xda, 0xd6);

// =============================================================================
// COLORS - Background & outline
// =============================================================================
pub const BACKGROUND: Color32 = Color32::from_rgb(0x19, 0x1c, 0x1d);
pub const ON_BACKGROUND: Color32 = Color32::from_rgb(0xe1, 0xe3, 0xe4);
pub const OUTLINE: Color32 = Color32::from_rgb(0x8a, 0x92, 0x96);

/// Named palette tokens, keyed by their style class name
pub const TOKENS: &[(&str, Color32)] = &[
    ("primary", PRIMARY),
    ("on-primary", ON_PRIMARY),
    ("primary-container", PRIMARY_CONTAINER),
    ("on-primary-container", ON_PRIMARY_CONTAINER),
    ("secondary", SECONDARY),
    ("on-secondary", ON_SECONDARY),
    ("secondary-container", SECONDARY_CONTAINER),
    ("on-secondary-container", ON_SECONDARY_CONTAINER),
    ("tertiary", TERTIARY),
    ("on-tertiary", ON_TERTIARY),
    ("tertiary-container", TERTIARY_CONTAINER),
    ("on-tertiary-container", ON_TERTIARY_CONTAINER),
    ("error", ERROR),
    ("on-error", ON_ERROR),
    ("error-container", ERROR_CONTAINER),
    ("on-error-container", ON_ERROR_CONTAINER),
    ("background", BACKGROUND),
    ("on-background", ON_BACKGROUND),
    ("outline", OUTLINE),
];

/// Look up a palette token by name
pub fn token(name: &str) -> Option<Color32> {
    TOKENS.iter().find(|(n, _)| *n == name).map(|(_, c)| *c)
}

// =============================================================================
// TYPOGRAPHY - Font Sizes
// =============================================================================
pub const FONT_TITLE: f32 = 18.0;
pub const FONT_BODY: f32 = 14.0;
pub const FONT_LABEL: f32 = 13.0;
pub const FONT_SMALL: f32 = 11.0;

// =============================================================================
// DIMENSIONS - Control panel
// =============================================================================
pub const PANEL_TITLE_WIDTH: f32 = 240.0;
pub const PREVIEW_STRIP: (f32, f32) = (192.0, 32.0);
pub const IMAGE_DISPLAY_SIZE: f32 = 384.0;
pub const TOGGLE_SIZE: f32 = 32.0;
pub const STEPPER_SIZE: f32 = 24.0;

// =============================================================================
// CORNER RADIUS
// =============================================================================
pub const RADIUS_DEFAULT: f32 = 4.0;
pub const RADIUS_MEDIUM: f32 = 8.0;
pub const RADIUS_PANEL: f32 = 12.0;
pub const RADIUS_DISPLAY: f32 = 24.0;

// =============================================================================
// STROKE WIDTHS
// =============================================================================
pub const STROKE_DEFAULT: f32 = 1.0;
pub const STROKE_THICK: f32 = 2.0;

// =============================================================================
// SPACING
// =============================================================================
pub const SPACING_SM: f32 = 4.0;
pub const SPACING_MD: f32 = 8.0;
pub const SPACING_LG: f32 = 12.0;
pub const SPACING_XL: f32 = 16.0;

// =============================================================================
// HELPER - Apply global visuals
// =============================================================================
pub fn apply_visuals(ctx: &egui::Context) {
    ctx.set_visuals(egui::Visuals {
        dark_mode: true,
        panel_fill: BACKGROUND,
        window_fill: lighten(BACKGROUND, 0.04),
        extreme_bg_color: BACKGROUND,
        faint_bg_color: lighten(BACKGROUND, 0.04),
        hyperlink_color: PRIMARY,
        selection: egui::style::Selection {
            bg_fill: PRIMARY_CONTAINER,
            stroke: egui::Stroke::new(STROKE_DEFAULT, ON_PRIMARY_CONTAINER),
        },
        widgets: egui::style::Widgets {
            noninteractive: egui::style::WidgetVisuals {
                bg_fill: BACKGROUND,
                weak_bg_fill: SECONDARY_CONTAINER,
                bg_stroke: egui::Stroke::new(STROKE_DEFAULT, OUTLINE),
                fg_stroke: egui::Stroke::new(STROKE_DEFAULT, ON_BACKGROUND),
                corner_radius: RADIUS_DEFAULT.into(),
                expansion: 0.0,
            },
            inactive: egui::style::WidgetVisuals {
                bg_fill: SECONDARY_CONTAINER,
                weak_bg_fill: SECONDARY_CONTAINER,
                bg_stroke: egui::Stroke::NONE,
                fg_stroke: egui::Stroke::new(STROKE_DEFAULT, ON_SECONDARY_CONTAINER),
                corner_radius: RADIUS_DEFAULT.into(),
                expansion: 0.0,
            },
            hovered: egui::style::WidgetVisuals {
                bg_fill: lighten(SECONDARY_CONTAINER, 0.12),
                weak_bg_fill: lighten(SECONDARY_CONTAINER, 0.12),
                bg_stroke: egui::Stroke::NONE,
                fg_stroke: egui::Stroke::new(STROKE_THICK, ON_SECONDARY_CONTAINER),
                corner_radius: RADIUS_DEFAULT.into(),
                expansion: 0.0,
            },
            active: egui::style::WidgetVisuals {
                bg_fill: PRIMARY_CONTAINER,
                weak_bg_fill: PRIMARY_CONTAINER,
                bg_stroke: egui::Stroke::NONE,
                fg_stroke: egui::Stroke::new(STROKE_DEFAULT, ON_PRIMARY_CONTAINER),
                corner_radius: RADIUS_DEFAULT.into(),
                expansion: -1.0,
            },
            open: egui::style::WidgetVisuals {
                bg_fill: PRIMARY_CONTAINER,
                weak_bg_fill: SECONDARY_CONTAINER,
                bg_stroke: egui::Stroke::new(STROKE_DEFAULT, OUTLINE),
                fg_stroke: egui::Stroke::new(STROKE_DEFAULT, ON_PRIMARY_CONTAINER),
                corner_radius: RADIUS_DEFAULT.into(),
                expansion: 0.0,
            },
        },
        interact_cursor: Some(egui::CursorIcon::PointingHand),
        window_stroke: egui::Stroke::new(STROKE_DEFAULT, OUTLINE),
        window_corner_radius: egui::CornerRadius::same(8),
        menu_corner_radius: egui::CornerRadius::same(8),
        ..egui::Visuals::dark()
    });

    ctx.style_mut(|style| {
        style.interaction.selectable_labels = false;
        style.spacing.item_spacing = egui::vec2(8.0, 8.0);
        style.spacing.button_padding = egui::vec2(12.0, 6.0);
    });
}

// =============================================================================
// HELPER - Frames
// =============================================================================

/// Rounded frame of the control panel
pub fn panel_frame(fill: Color32) -> egui::Frame {
    egui::Frame::new()
        .fill(fill)
        .corner_radius(RADIUS_PANEL)
        .inner_margin(egui::Margin::same(SPACING_XL as i8))
}

pub fn card_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(lighten(BACKGROUND, 0.04))
        .stroke(egui::Stroke::new(STROKE_DEFAULT, SECONDARY_CONTAINER))
        .corner_radius(RADIUS_MEDIUM)
        .inner_margin(egui::Margin::same(SPACING_LG as i8))
}

// =============================================================================
// HELPER - Buttons
// =============================================================================

/// Small flat button drawn on top of the primary panel fill
pub fn button_on_primary(text: impl Into<String>) -> egui::Button<'static> {
    egui::Button::new(egui::RichText::new(text.into()).color(ON_PRIMARY_CONTAINER))
        .fill(PRIMARY_CONTAINER)
        .corner_radius(RADIUS_DEFAULT)
}

/// Returns (fill, draw_rect) for a custom-painted button with hover/press effects.
/// Lightens on hover, slightly lightens + shrinks on press.
pub fn button_visual(
    response: &egui::Response,
    base_fill: Color32,
    rect: egui::Rect,
) -> (Color32, egui::Rect) {
    if response.is_pointer_button_down_on() {
        (lighten(base_fill, 0.06), rect.shrink(1.5))
    } else if response.hovered() {
        (lighten(base_fill, 0.12), rect)
    } else {
        (base_fill, rect)
    }
}

fn lighten(c: Color32, amount: f32) -> Color32 {
    let r = (c.r() as f32 + (255.0 - c.r() as f32) * amount) as u8;
    let g = (c.g() as f32 + (255.0 - c.g() as f32) * amount) as u8;
    let b = (c.b() as f32 + (255.0 - c.b() as f32) * amount) as u8;
    Color32::from_rgb(r, g, b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokens_match_palette() {
        assert_eq!(token("primary"), Some(Color32::from_rgb(0x5f, 0xd4, 0xfd)));
        assert_eq!(token("on-primary"), Some(ON_PRIMARY));
        assert_eq!(token("outline"), Some(Color32::from_rgb(0x8a, 0x92, 0x96)));
        assert_eq!(token("gradient-radial"), None);
        assert_eq!(TOKENS.len(), 19);
    }

    #[test]
    fn test_lighten_bounds() {
        assert_eq!(lighten(Color32::BLACK, 0.0), Color32::BLACK);
        assert_eq!(lighten(Color32::BLACK, 1.0), Color32::WHITE);
    }
}
