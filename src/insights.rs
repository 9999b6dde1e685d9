//! Insights tab
//!
//! One card per extracted document field. The collection loads once per
//! session; skeleton cards stand in until it settles.

use crate::api::{ApiClient, InsightField};
use crate::components::skeleton_card;
use crate::loader::CollectionState;
use crate::settings::Settings;
use crate::theme::Theme;
use gpui::prelude::*;
use gpui::*;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

/// Insight cards view. Owns the insight-field collection state.
pub struct InsightsView {
    fields: CollectionState<InsightField>,
    client: Arc<ApiClient>,
    settings: Arc<Settings>,
    theme: Theme,
    // Kept so teardown cancels an in-flight load instead of leaking it.
    load_task: Option<Task<()>>,
}

impl InsightsView {
    pub fn new(
        client: Arc<ApiClient>,
        settings: Arc<Settings>,
        theme: Theme,
        cx: &mut Context<Self>,
    ) -> Self {
        let mut view = Self {
            fields: CollectionState::new(),
            client,
            settings,
            theme,
            load_task: None,
        };
        view.load(cx);
        view
    }

    /// Fetch the insight fields unless they are already present or in
    /// flight. An empty or failed response keeps the skeletons up.
    pub fn load(&mut self, cx: &mut Context<Self>) {
        if !self.fields.should_fetch() {
            return;
        }
        self.fields.begin();

        let client = self.client.clone();
        let settle_delay = Duration::from_millis(self.settings.settle_delay_ms);
        let generation = self.fields.generation();

        self.load_task = Some(cx.spawn(async move |this, cx: &mut AsyncApp| {
            let fetched = cx
                .background_executor()
                .spawn(async move { client.insights() })
                .await;

            if !settle_delay.is_zero() {
                cx.background_executor().timer(settle_delay).await;
            }

            let _ = cx.update(|cx| {
                if let Some(entity) = this.upgrade() {
                    entity.update(cx, |view, cx| {
                        match fetched {
                            Ok(fields) => {
                                debug!(count = fields.len(), "insights loaded");
                                if view.fields.try_populate(generation, fields) {
                                    cx.notify();
                                }
                            }
                            Err(e) => {
                                // No retry and no error card; the skeletons
                                // stay up until a reset.
                                warn!(error = %e, "insights fetch failed");
                            }
                        }
                    });
                }
            });
        }));
    }

    fn render_card(&self, field: &InsightField) -> Div {
        let theme = &self.theme;

        div()
            .w_full()
            .p(px(16.0))
            .rounded(px(8.0))
            .bg(theme.card_bg)
            .border_1()
            .border_color(theme.border_subtle)
            .child(
                div()
                    .text_size(px(13.0))
                    .text_color(theme.text_secondary)
                    .child(field.value.clone()),
            )
    }
}

impl Render for InsightsView {
    fn render(&mut self, _window: &mut Window, _cx: &mut Context<Self>) -> impl IntoElement {
        let theme = self.theme.clone();

        let cards: Vec<Div> = if self.fields.is_loading() {
            (0..self.settings.placeholder_rows)
                .map(|_| skeleton_card(&theme))
                .collect()
        } else {
            self.fields
                .items()
                .iter()
                .map(|field| self.render_card(field))
                .collect()
        };

        div()
            .id("insights-scroll")
            .size_full()
            .overflow_y_scroll()
            .p(px(16.0))
            .flex()
            .flex_col()
            .gap(px(12.0))
            .children(cards)
    }
}
