//! Document upload panel
//!
//! Accepts a file selection and records its name. No processing happens
//! client-side; analysis results arrive separately from the backend.

use crate::theme::Theme;
use gpui::prelude::*;
use gpui::*;
use tracing::debug;

/// Upload panel state: at most one chosen document.
pub struct UploadPanel {
    chosen_file: Option<String>,
    theme: Theme,
}

impl UploadPanel {
    pub fn new(theme: Theme) -> Self {
        Self {
            chosen_file: None,
            theme,
        }
    }

    fn pick_file(&mut self, cx: &mut Context<Self>) {
        let paths = cx.prompt_for_paths(PathPromptOptions {
            files: true,
            directories: false,
            multiple: false,
            prompt: None,
        });

        cx.spawn(async move |this, cx: &mut AsyncApp| {
            if let Ok(Ok(Some(mut selected))) = paths.await {
                if let Some(path) = selected.pop() {
                    let name = path
                        .file_name()
                        .map(|n| n.to_string_lossy().into_owned())
                        .unwrap_or_else(|| path.display().to_string());
                    debug!(file = %name, "document chosen");
                    let _ = cx.update(|cx| {
                        if let Some(entity) = this.upgrade() {
                            entity.update(cx, |panel, cx| {
                                panel.chosen_file = Some(name);
                                cx.notify();
                            });
                        }
                    });
                }
            }
        })
        .detach();
    }
}

impl Render for UploadPanel {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let theme = self.theme.clone();

        div()
            .size_full()
            .bg(theme.card_bg)
            .p(px(24.0))
            .flex()
            .flex_col()
            .items_center()
            .gap(px(16.0))
            .child(
                div()
                    .text_size(px(17.0))
                    .font_weight(FontWeight::SEMIBOLD)
                    .text_color(theme.text)
                    .child("Upload Your File"),
            )
            .child(
                div()
                    .id("file-drop-zone")
                    .flex_grow()
                    .w_full()
                    .rounded(px(8.0))
                    .border_2()
                    .border_color(theme.border)
                    .bg(theme.card_bg_elevated)
                    .cursor_pointer()
                    .hover(|s| s.border_color(theme.border_strong))
                    .flex()
                    .items_center()
                    .justify_center()
                    .on_click(cx.listener(|this, _, _, cx| {
                        this.pick_file(cx);
                    }))
                    .child(
                        div()
                            .text_size(px(13.0))
                            .text_color(theme.text_muted)
                            .child("Choose File"),
                    ),
            )
            .child(
                div()
                    .text_size(px(12.0))
                    .text_color(theme.text_dimmed)
                    .child(
                        self.chosen_file
                            .clone()
                            .unwrap_or_else(|| "No file chosen".to_string()),
                    ),
            )
    }
}
