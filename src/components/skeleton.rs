//! Skeleton placeholders shown while remote collections load

use crate::theme::Theme;
use gpui::*;

/// A rounded placeholder bar standing in for a single cell value.
pub fn skeleton_bar(theme: &Theme, width: f32) -> Div {
    div()
        .w(px(width))
        .h(px(12.0))
        .rounded_full()
        .bg(theme.skeleton)
}

/// A placeholder card standing in for an insight field.
pub fn skeleton_card(theme: &Theme) -> Div {
    div()
        .w_full()
        .p(px(16.0))
        .rounded(px(8.0))
        .bg(theme.card_bg)
        .border_1()
        .border_color(theme.border_subtle)
        .child(skeleton_bar(theme, 180.0))
}
