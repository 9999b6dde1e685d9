//! Fraud-signal table
//!
//! Sortable, filterable table over the loaded fraud signals: a free-text
//! search box, a sortable signal column, and a status dropdown backed by the
//! distinct statuses of the loaded set. Skeleton rows stand in while the
//! collection loads; an empty filtered result collapses to a single
//! no-results row.

use crate::api::{ApiClient, Signal};
use crate::components::skeleton_bar;
use crate::loader::CollectionState;
use crate::settings::Settings;
use crate::table::{Column, SortDirection, Table, TableContent};
use crate::theme::Theme;
use gpui::prelude::*;
use gpui::*;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

pub(crate) const SIGNAL_COLUMN: &str = "signal";
pub(crate) const STATUS_COLUMN: &str = "status";

pub(crate) fn signal_columns() -> Vec<Column<Signal>> {
    vec![
        Column {
            id: SIGNAL_COLUMN,
            label: "Fraud",
            value: |row| row.signal.clone(),
        },
        Column {
            id: STATUS_COLUMN,
            label: "Status",
            value: |row| row.status.clone(),
        },
    ]
}

/// Fraud-signal table view. Owns the signal collection state and the table's
/// derivation state.
pub struct FraudTableView {
    signals: CollectionState<Signal>,
    table: Table<Signal>,
    filter_focus: FocusHandle,
    show_status_menu: bool,
    client: Arc<ApiClient>,
    settings: Arc<Settings>,
    theme: Theme,
    // Kept so teardown cancels an in-flight load instead of leaking it.
    load_task: Option<Task<()>>,
}

impl FraudTableView {
    pub fn new(
        client: Arc<ApiClient>,
        settings: Arc<Settings>,
        theme: Theme,
        cx: &mut Context<Self>,
    ) -> Self {
        let table = Table::new(signal_columns())
            .with_categorical_column(STATUS_COLUMN)
            .case_sensitive(settings.case_sensitive_filter)
            .placeholder_rows(settings.placeholder_rows);

        let mut view = Self {
            signals: CollectionState::new(),
            table,
            filter_focus: cx.focus_handle(),
            show_status_menu: false,
            client,
            settings,
            theme,
            load_task: None,
        };
        view.load(cx);
        view
    }

    /// Fetch the fraud signals unless they are already present or in flight.
    /// An empty or failed response keeps the skeleton rows up.
    pub fn load(&mut self, cx: &mut Context<Self>) {
        if !self.signals.should_fetch() {
            return;
        }
        self.signals.begin();

        let client = self.client.clone();
        let settle_delay = Duration::from_millis(self.settings.settle_delay_ms);
        let generation = self.signals.generation();

        self.load_task = Some(cx.spawn(async move |this, cx: &mut AsyncApp| {
            let fetched = cx
                .background_executor()
                .spawn(async move { client.fraud_signals() })
                .await;

            if !settle_delay.is_zero() {
                cx.background_executor().timer(settle_delay).await;
            }

            let _ = cx.update(|cx| {
                if let Some(entity) = this.upgrade() {
                    entity.update(cx, |view, cx| {
                        match fetched {
                            Ok(signals) => {
                                debug!(count = signals.len(), "fraud signals loaded");
                                if view.signals.try_populate(generation, signals) {
                                    cx.notify();
                                }
                            }
                            Err(e) => {
                                // No retry and no error row; the skeletons
                                // stay up until a reset.
                                warn!(error = %e, "fraud signal fetch failed");
                            }
                        }
                    });
                }
            });
        }));
    }

    fn handle_filter_key(&mut self, event: &KeyDownEvent, cx: &mut Context<Self>) {
        let keystroke = &event.keystroke;
        if keystroke.modifiers.control || keystroke.modifiers.platform || keystroke.modifiers.alt {
            return;
        }

        match keystroke.key.as_str() {
            "backspace" => {
                let mut text = self.table.global_filter().to_string();
                text.pop();
                self.table.set_global_filter(text);
                cx.notify();
            }
            "escape" => {
                self.table.set_global_filter("");
                cx.notify();
            }
            _ => {
                if let Some(ch) = keystroke.key_char.clone() {
                    let mut text = self.table.global_filter().to_string();
                    text.push_str(&ch);
                    self.table.set_global_filter(text);
                    cx.notify();
                }
            }
        }
    }

    fn toggle_sort(&mut self, column_id: &'static str, cx: &mut Context<Self>) {
        self.table.toggle_sort(column_id);
        cx.notify();
    }

    fn set_status_filter(&mut self, value: Option<String>, cx: &mut Context<Self>) {
        self.table.set_categorical_filter(value);
        self.show_status_menu = false;
        cx.notify();
    }

    // ========================================================================
    // RENDERING
    // ========================================================================

    fn render_search_box(&self, window: &Window, cx: &mut Context<Self>) -> impl IntoElement {
        let theme = &self.theme;
        let text = self.table.global_filter().to_string();
        let is_focused = self.filter_focus.is_focused(window);

        div()
            .id("signal-filter")
            .track_focus(&self.filter_focus)
            .on_key_down(cx.listener(|this, event: &KeyDownEvent, _window, cx| {
                this.handle_filter_key(event, cx);
            }))
            .on_click(cx.listener(|this, _, window, _cx| {
                window.focus(&this.filter_focus);
            }))
            .w(px(260.0))
            .h(px(34.0))
            .px(px(10.0))
            .rounded(px(6.0))
            .bg(theme.card_bg_elevated)
            .border_1()
            .border_color(if is_focused { theme.accent } else { theme.border })
            .cursor_text()
            .flex()
            .items_center()
            .child(
                div()
                    .flex_grow()
                    .text_size(px(13.0))
                    .text_color(if text.is_empty() {
                        theme.text_dimmed
                    } else {
                        theme.text
                    })
                    .child(if text.is_empty() {
                        "Search fraud signals...".to_string()
                    } else {
                        text
                    }),
            )
    }

    fn render_sort_header(&self, cx: &mut Context<Self>) -> impl IntoElement {
        let theme = &self.theme;
        let indicator = match self.table.sort_for(SIGNAL_COLUMN) {
            Some(SortDirection::Ascending) => "^",
            Some(SortDirection::Descending) => "v",
            None => "^v",
        };

        div()
            .id("sort-signal")
            .px(px(10.0))
            .py(px(6.0))
            .rounded(px(6.0))
            .border_1()
            .border_color(theme.border)
            .bg(theme.card_bg)
            .cursor_pointer()
            .hover(|s| s.bg(theme.hover_bg))
            .on_click(cx.listener(|this, _, _, cx| {
                this.toggle_sort(SIGNAL_COLUMN, cx);
            }))
            .flex()
            .items_center()
            .gap(px(6.0))
            .child(
                div()
                    .text_size(px(12.0))
                    .font_weight(FontWeight::MEDIUM)
                    .text_color(theme.text)
                    .child("Fraud"),
            )
            .child(
                div()
                    .text_size(px(10.0))
                    .text_color(theme.text_dimmed)
                    .child(indicator),
            )
    }

    fn render_status_header(&self, cx: &mut Context<Self>) -> Div {
        let theme = &self.theme;
        let statuses = self.table.distinct_categorical_values(self.signals.items());

        div()
            .relative()
            .flex()
            .justify_center()
            .child(
                div()
                    .id("status-filter")
                    .px(px(10.0))
                    .py(px(6.0))
                    .rounded(px(6.0))
                    .border_1()
                    .border_color(if self.table.categorical_filter().is_some() {
                        theme.accent
                    } else {
                        theme.border
                    })
                    .bg(theme.card_bg)
                    .cursor_pointer()
                    .hover(|s| s.bg(theme.hover_bg))
                    .on_click(cx.listener(|this, _, _, cx| {
                        this.show_status_menu = !this.show_status_menu;
                        cx.notify();
                    }))
                    .flex()
                    .items_center()
                    .gap(px(6.0))
                    .child(
                        div()
                            .text_size(px(12.0))
                            .font_weight(FontWeight::MEDIUM)
                            .text_color(theme.text)
                            .child("Status"),
                    )
                    .child(
                        div()
                            .text_size(px(10.0))
                            .text_color(theme.text_dimmed)
                            .child(if self.show_status_menu { "^" } else { "v" }),
                    ),
            )
            .when(self.show_status_menu, |el| {
                el.child(self.render_status_menu(statuses, cx))
            })
    }

    fn render_status_menu(&self, statuses: Vec<String>, cx: &mut Context<Self>) -> Div {
        let theme = &self.theme;

        div()
            .absolute()
            .top(px(34.0))
            .right(px(0.0))
            .min_w(px(220.0))
            .rounded(px(8.0))
            .bg(theme.card_bg_elevated)
            .border_1()
            .border_color(theme.border)
            .overflow_hidden()
            .child(
                div()
                    .id("status-all")
                    .px(px(12.0))
                    .py(px(8.0))
                    .cursor_pointer()
                    .hover(|s| s.bg(theme.hover_bg))
                    .on_click(cx.listener(|this, _, _, cx| {
                        this.set_status_filter(None, cx);
                    }))
                    .text_size(px(12.0))
                    .text_color(theme.text)
                    .child("All"),
            )
            .children(statuses.into_iter().enumerate().map(|(index, status)| {
                let is_selected = self.table.categorical_filter() == Some(status.as_str());
                let value = status.clone();

                div()
                    .id(SharedString::from(format!("status-option-{}", index)))
                    .px(px(12.0))
                    .py(px(8.0))
                    .cursor_pointer()
                    .bg(if is_selected {
                        theme.accent_subtle
                    } else {
                        transparent_black()
                    })
                    .hover(|s| s.bg(theme.hover_bg))
                    .on_click(cx.listener(move |this, _, _, cx| {
                        this.set_status_filter(Some(value.clone()), cx);
                    }))
                    .text_size(px(12.0))
                    .text_color(theme.text_secondary)
                    .child(status)
            }))
    }

    fn render_skeleton_row(&self) -> Div {
        let theme = &self.theme;

        div()
            .flex()
            .items_center()
            .px(px(16.0))
            .py(px(10.0))
            .border_b_1()
            .border_color(theme.border_subtle)
            .child(div().flex_1().child(skeleton_bar(theme, 140.0)))
            .child(div().flex_1().child(skeleton_bar(theme, 180.0)))
    }

    fn render_empty_row(&self) -> Div {
        let theme = &self.theme;

        div()
            .py(px(24.0))
            .flex()
            .items_center()
            .justify_center()
            .text_size(px(13.0))
            .text_color(theme.text_dimmed)
            .child("No results found.")
    }

    fn render_row(&self, signal: &Signal) -> Div {
        let theme = &self.theme;
        let (status_fg, status_bg) = status_colors(theme, &signal.status);

        div()
            .flex()
            .items_center()
            .px(px(16.0))
            .py(px(10.0))
            .border_b_1()
            .border_color(theme.border_subtle)
            .hover(|s| s.bg(theme.hover_bg))
            .child(
                div()
                    .flex_1()
                    .text_size(px(13.0))
                    .font_weight(FontWeight::SEMIBOLD)
                    .text_color(theme.text)
                    .child(signal.signal.clone()),
            )
            .child(
                div()
                    .flex_1()
                    .flex()
                    .child(
                        div()
                            .px(px(8.0))
                            .py(px(3.0))
                            .rounded(px(4.0))
                            .bg(status_bg)
                            .text_size(px(11.0))
                            .font_weight(FontWeight::MEDIUM)
                            .text_color(status_fg)
                            .child(signal.status.clone()),
                    ),
            )
    }
}

/// Categorical status -> pill colors. Unknown statuses read as neutral.
fn status_colors(theme: &Theme, status: &str) -> (Hsla, Hsla) {
    match status {
        "PASS" => (theme.positive, theme.positive_subtle),
        "FAIL" => (theme.negative, theme.negative_subtle),
        s if s.starts_with("POSSIBLE_") => (theme.warning, theme.warning_subtle),
        _ => (theme.text_muted, theme.hover_bg),
    }
}

impl Render for FraudTableView {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let theme = self.theme.clone();

        let body: Vec<Div> = match self.table.content(self.signals.items(), self.signals.is_loading()) {
            TableContent::Loading { placeholder_rows } => {
                (0..placeholder_rows).map(|_| self.render_skeleton_row()).collect()
            }
            TableContent::EmptyResult => vec![self.render_empty_row()],
            TableContent::Populated(rows) => {
                rows.into_iter().map(|row| self.render_row(row)).collect()
            }
        };

        div()
            .size_full()
            .p(px(16.0))
            .flex()
            .flex_col()
            .gap(px(12.0))
            .child(self.render_search_box(window, cx))
            .child(
                div()
                    .w_full()
                    .rounded(px(8.0))
                    .border_1()
                    .border_color(theme.border)
                    .overflow_hidden()
                    .flex()
                    .flex_col()
                    // Header
                    .child(
                        div()
                            .flex()
                            .items_center()
                            .px(px(16.0))
                            .py(px(8.0))
                            .bg(theme.table_header_bg)
                            .border_b_1()
                            .border_color(theme.border)
                            .child(div().flex_1().child(self.render_sort_header(cx)))
                            .child(div().flex_1().child(self.render_status_header(cx))),
                    )
                    // Body
                    .child(
                        div()
                            .id("signal-rows-scroll")
                            .flex()
                            .flex_col()
                            .max_h(px(380.0))
                            .overflow_y_scroll()
                            .children(body),
                    ),
            )
    }
}
