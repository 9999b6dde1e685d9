//! Theme configuration for FraudLens
//!
//! Light and dark palettes for the document-forensics interface. The light
//! theme is the default, matching the clean report-style look of the
//! product.

use gpui::*;

/// Theme colors for the application.
#[derive(Clone)]
pub struct Theme {
    // Backgrounds
    pub background: Hsla,
    pub card_bg: Hsla,
    pub card_bg_elevated: Hsla,
    pub hover_bg: Hsla,
    pub table_header_bg: Hsla,

    // Text
    pub text: Hsla,
    pub text_secondary: Hsla,
    pub text_muted: Hsla,
    pub text_dimmed: Hsla,

    // Borders
    pub border: Hsla,
    pub border_subtle: Hsla,
    pub border_strong: Hsla,

    // Accent
    pub accent: Hsla,
    pub accent_subtle: Hsla,

    // Semantic
    pub positive: Hsla,
    pub positive_subtle: Hsla,
    pub warning: Hsla,
    pub warning_subtle: Hsla,
    pub negative: Hsla,
    pub negative_subtle: Hsla,

    // Skeleton placeholders
    pub skeleton: Hsla,

    // Tabs
    pub tab_active_bg: Hsla,
    pub tab_active_text: Hsla,
}

impl Theme {
    pub fn from_mode(mode: &str) -> Self {
        match mode {
            "dark" => Self::dark(),
            _ => Self::light(),
        }
    }

    /// Light theme: white cards over a soft slate canvas, dark active tab.
    pub fn light() -> Self {
        Self {
            background: hsla(220.0 / 360.0, 0.12, 0.96, 1.0),
            card_bg: hsla(0.0, 0.0, 1.0, 1.0),
            card_bg_elevated: hsla(220.0 / 360.0, 0.10, 0.985, 1.0),
            hover_bg: hsla(220.0 / 360.0, 0.12, 0.93, 1.0),
            table_header_bg: hsla(220.0 / 360.0, 0.10, 0.95, 1.0),

            text: hsla(222.0 / 360.0, 0.30, 0.13, 1.0),
            text_secondary: hsla(222.0 / 360.0, 0.16, 0.30, 1.0),
            text_muted: hsla(222.0 / 360.0, 0.10, 0.44, 1.0),
            text_dimmed: hsla(222.0 / 360.0, 0.08, 0.58, 1.0),

            border: hsla(220.0 / 360.0, 0.13, 0.85, 1.0),
            border_subtle: hsla(220.0 / 360.0, 0.10, 0.91, 1.0),
            border_strong: hsla(220.0 / 360.0, 0.14, 0.66, 1.0),

            accent: hsla(210.0 / 360.0, 0.88, 0.46, 1.0),
            accent_subtle: hsla(210.0 / 360.0, 0.82, 0.46, 0.12),

            positive: hsla(152.0 / 360.0, 0.66, 0.38, 1.0),
            positive_subtle: hsla(152.0 / 360.0, 0.58, 0.38, 0.14),
            warning: hsla(40.0 / 360.0, 0.88, 0.46, 1.0),
            warning_subtle: hsla(40.0 / 360.0, 0.80, 0.46, 0.16),
            negative: hsla(4.0 / 360.0, 0.70, 0.48, 1.0),
            negative_subtle: hsla(4.0 / 360.0, 0.64, 0.48, 0.12),

            skeleton: hsla(220.0 / 360.0, 0.12, 0.88, 1.0),

            tab_active_bg: hsla(222.0 / 360.0, 0.25, 0.10, 1.0),
            tab_active_text: hsla(0.0, 0.0, 0.99, 1.0),
        }
    }

    /// Dark theme variant.
    pub fn dark() -> Self {
        Self {
            background: hsla(222.0 / 360.0, 0.15, 0.08, 1.0),
            card_bg: hsla(222.0 / 360.0, 0.14, 0.12, 1.0),
            card_bg_elevated: hsla(222.0 / 360.0, 0.14, 0.15, 1.0),
            hover_bg: hsla(222.0 / 360.0, 0.16, 0.17, 1.0),
            table_header_bg: hsla(222.0 / 360.0, 0.15, 0.10, 1.0),

            text: hsla(0.0, 0.0, 0.97, 1.0),
            text_secondary: hsla(220.0 / 360.0, 0.08, 0.80, 1.0),
            text_muted: hsla(220.0 / 360.0, 0.12, 0.58, 1.0),
            text_dimmed: hsla(220.0 / 360.0, 0.10, 0.44, 1.0),

            border: hsla(222.0 / 360.0, 0.14, 0.22, 1.0),
            border_subtle: hsla(222.0 / 360.0, 0.12, 0.16, 1.0),
            border_strong: hsla(222.0 / 360.0, 0.16, 0.32, 1.0),

            accent: hsla(210.0 / 360.0, 0.92, 0.58, 1.0),
            accent_subtle: hsla(210.0 / 360.0, 0.80, 0.55, 0.18),

            positive: hsla(152.0 / 360.0, 0.72, 0.48, 1.0),
            positive_subtle: hsla(152.0 / 360.0, 0.65, 0.45, 0.18),
            warning: hsla(40.0 / 360.0, 0.92, 0.52, 1.0),
            warning_subtle: hsla(40.0 / 360.0, 0.85, 0.50, 0.18),
            negative: hsla(4.0 / 360.0, 0.75, 0.55, 1.0),
            negative_subtle: hsla(4.0 / 360.0, 0.70, 0.50, 0.18),

            skeleton: hsla(222.0 / 360.0, 0.14, 0.20, 1.0),

            tab_active_bg: hsla(0.0, 0.0, 0.97, 1.0),
            tab_active_text: hsla(222.0 / 360.0, 0.25, 0.10, 1.0),
        }
    }
}
