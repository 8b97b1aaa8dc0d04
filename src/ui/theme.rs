//! Colors and egui visuals for the configured theme.

use crate::storage::config::Theme;
use egui::{Color32, Visuals};

/// Colors used by the sensor cards and recording panel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    /// Panel background
    pub panel: Color32,
    /// Card background
    pub card: Color32,
    /// Primary text
    pub text: Color32,
    /// Secondary text
    pub text_weak: Color32,
    /// Buttons and selection
    pub accent: Color32,
    /// Active sensor / recording indicator
    pub success: Color32,
    /// Suspended indicator
    pub warning: Color32,
    /// Sensor errors
    pub error: Color32,
    /// Card border
    pub border: Color32,
}

impl Palette {
    pub const DARK: Palette = Palette {
        panel: Color32::from_rgb(28, 28, 36),
        card: Color32::from_rgb(38, 38, 48),
        text: Color32::from_rgb(240, 240, 245),
        text_weak: Color32::from_rgb(160, 160, 170),
        accent: Color32::from_rgb(66, 133, 244),
        success: Color32::from_rgb(52, 168, 83),
        warning: Color32::from_rgb(251, 188, 4),
        error: Color32::from_rgb(234, 67, 53),
        border: Color32::from_rgb(60, 60, 70),
    };

    pub const LIGHT: Palette = Palette {
        panel: Color32::from_rgb(255, 255, 255),
        card: Color32::from_rgb(245, 245, 248),
        text: Color32::from_rgb(32, 32, 40),
        text_weak: Color32::from_rgb(96, 96, 104),
        accent: Color32::from_rgb(26, 115, 232),
        success: Color32::from_rgb(24, 128, 56),
        warning: Color32::from_rgb(234, 160, 0),
        error: Color32::from_rgb(200, 50, 40),
        border: Color32::from_rgb(218, 218, 224),
    };

    /// Palette for `theme`.
    pub fn for_theme(theme: Theme) -> Palette {
        match theme {
            Theme::Dark => Palette::DARK,
            Theme::Light => Palette::LIGHT,
        }
    }
}

/// egui visuals for `theme`.
pub fn visuals(theme: Theme) -> Visuals {
    let palette = Palette::for_theme(theme);
    let mut visuals = match theme {
        Theme::Dark => Visuals::dark(),
        Theme::Light => Visuals::light(),
    };

    visuals.window_fill = palette.panel;
    visuals.panel_fill = palette.panel;
    visuals.faint_bg_color = palette.card;

    visuals.widgets.noninteractive.bg_fill = palette.card;
    visuals.widgets.inactive.bg_fill = palette.card;
    visuals.widgets.active.bg_fill = palette.accent;

    visuals.selection.bg_fill = palette.accent.linear_multiply(0.3);
    visuals.selection.stroke.color = palette.accent;

    visuals.widgets.noninteractive.fg_stroke.color = palette.text;
    visuals.widgets.inactive.fg_stroke.color = palette.text_weak;
    visuals.widgets.noninteractive.bg_stroke.color = palette.border;
    visuals.widgets.inactive.bg_stroke.color = palette.border;

    visuals
}

/// The other theme.
pub fn toggled(theme: Theme) -> Theme {
    match theme {
        Theme::Dark => Theme::Light,
        Theme::Light => Theme::Dark,
    }
}
