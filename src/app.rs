//! Main application state and rendering for FraudLens

use crate::api::ApiClient;
use crate::fraud_table::FraudTableView;
use crate::insights::InsightsView;
use crate::report::ReportView;
use crate::settings::Settings;
use crate::theme::Theme;
use crate::upload::UploadPanel;
use gpui::prelude::*;
use gpui::*;
use std::sync::Arc;
use tracing::info;

/// Tabs of the analysis panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WorkspaceTab {
    #[default]
    Table,
    Insights,
}

impl WorkspaceTab {
    pub fn label(&self) -> &'static str {
        match self {
            WorkspaceTab::Table => "Table",
            WorkspaceTab::Insights => "Insights",
        }
    }
}

const TABS: [WorkspaceTab; 2] = [WorkspaceTab::Table, WorkspaceTab::Insights];

/// Root view: upload panel and analysis tabs on top, narrative report with
/// the risk gauge below.
pub struct FraudLensApp {
    active_tab: WorkspaceTab,
    upload: Entity<UploadPanel>,
    fraud_table: Entity<FraudTableView>,
    insights: Entity<InsightsView>,
    report: Entity<ReportView>,
    theme: Theme,
}

impl FraudLensApp {
    pub fn new(cx: &mut Context<Self>) -> Self {
        let settings = Arc::new(Settings::load());
        let theme = Theme::from_mode(&settings.theme_mode);
        let api_client = Arc::new(ApiClient::new(settings.base_url.clone()));
        info!(base_url = %api_client.base_url(), "starting");

        let upload = cx.new(|_| UploadPanel::new(theme.clone()));
        let fraud_table = {
            let client = api_client.clone();
            let settings = settings.clone();
            let theme = theme.clone();
            cx.new(|cx| FraudTableView::new(client, settings, theme, cx))
        };
        let insights = {
            let client = api_client.clone();
            let settings = settings.clone();
            let theme = theme.clone();
            cx.new(|cx| InsightsView::new(client, settings, theme, cx))
        };
        // Position 40 matches the "0.4 (Moderate)" likelihood of the demo
        // report; from there it follows the gauge controls only.
        let report = cx.new(|_| ReportView::new(40.0, theme.clone()));

        Self {
            active_tab: WorkspaceTab::default(),
            upload,
            fraud_table,
            insights,
            report,
            theme,
        }
    }

    pub fn set_active_tab(&mut self, tab: WorkspaceTab, cx: &mut Context<Self>) {
        self.active_tab = tab;
        cx.notify();
    }

    fn render_tab_bar(&self, cx: &mut Context<Self>) -> Div {
        let theme = &self.theme;

        div()
            .flex()
            .w_full()
            .p(px(4.0))
            .gap(px(4.0))
            .rounded(px(8.0))
            .bg(theme.background)
            .children(TABS.iter().map(|tab| {
                let tab = *tab;
                let is_active = self.active_tab == tab;

                div()
                    .id(SharedString::from(format!("tab-{}", tab.label())))
                    .flex_1()
                    .py(px(6.0))
                    .rounded(px(6.0))
                    .cursor_pointer()
                    .bg(if is_active {
                        theme.tab_active_bg
                    } else {
                        theme.card_bg
                    })
                    .hover(|s| {
                        if is_active {
                            s
                        } else {
                            s.bg(theme.hover_bg)
                        }
                    })
                    .on_click(cx.listener(move |this, _, _, cx| {
                        this.set_active_tab(tab, cx);
                    }))
                    .flex()
                    .items_center()
                    .justify_center()
                    .text_size(px(13.0))
                    .font_weight(FontWeight::MEDIUM)
                    .text_color(if is_active {
                        theme.tab_active_text
                    } else {
                        theme.text
                    })
                    .child(tab.label())
            }))
    }

    fn render_analysis_panel(&self, cx: &mut Context<Self>) -> Div {
        div()
            .size_full()
            .p(px(12.0))
            .flex()
            .flex_col()
            .gap(px(8.0))
            .child(self.render_tab_bar(cx))
            .child(div().flex_grow().overflow_hidden().child(match self.active_tab {
                WorkspaceTab::Table => self.fraud_table.clone().into_any_element(),
                WorkspaceTab::Insights => self.insights.clone().into_any_element(),
            }))
    }
}

impl Render for FraudLensApp {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let theme = self.theme.clone();

        div()
            .size_full()
            .bg(theme.background)
            .p(px(32.0))
            .flex()
            .items_center()
            .justify_center()
            .child(
                div()
                    .w_full()
                    .h_full()
                    .border_2()
                    .border_color(theme.border_strong)
                    .bg(theme.card_bg)
                    .flex()
                    .flex_col()
                    .overflow_hidden()
                    // Upper split: upload | analysis tabs
                    .child(
                        div()
                            .h(relative(0.6))
                            .flex()
                            .border_b_1()
                            .border_color(theme.border_strong)
                            .child(
                                div()
                                    .w(relative(0.4))
                                    .border_r_1()
                                    .border_color(theme.border_strong)
                                    .child(self.upload.clone()),
                            )
                            .child(div().w(relative(0.6)).child(self.render_analysis_panel(cx))),
                    )
                    // Lower split: narrative report + gauge
                    .child(div().h(relative(0.4)).child(self.report.clone())),
            )
    }
}
