//! FraudLens - GPUI dashboard for document fraud-risk analysis
//!
//! Presents pre-computed analysis results for an uploaded document: a
//! sortable/filterable fraud-signal table, extracted insight fields, a
//! narrative risk report, and a fraud-likelihood gauge.

mod api;
mod app;
mod components;
mod fraud_table;
mod gauge;
mod insights;
mod loader;
mod report;
mod settings;
mod table;
mod theme;
mod upload;

#[cfg(test)]
mod tests;

use app::FraudLensApp;
use gpui::*;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    Application::new().run(|cx: &mut App| {
        let window_options = WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(Bounds {
                origin: Point::default(),
                size: Size {
                    width: px(1280.0),
                    height: px(840.0),
                },
            })),
            titlebar: Some(TitlebarOptions {
                title: Some("FraudLens - Document Fraud Analysis".into()),
                appears_transparent: false,
                ..Default::default()
            }),
            ..Default::default()
        };

        cx.open_window(window_options, |_window, cx| {
            cx.new(|cx| FraudLensApp::new(cx))
        })
        .unwrap();
    });
}
