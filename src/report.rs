//! Narrative fraud-analysis report panel
//!
//! Static report text for the analyzed document plus the fraud-likelihood
//! gauge. The narrative arrives pre-computed; the gauge position is driven by
//! user input on the strip controls, not by loaded data.

use crate::gauge;
use crate::theme::Theme;
use gpui::prelude::*;
use gpui::*;

struct ReportSection {
    heading: &'static str,
    bullets: &'static [&'static str],
}

const AUTHENTICITY: ReportSection = ReportSection {
    heading: "Authenticity Indicators:",
    bullets: &[
        "Institution: SVIT, Vasad is real.",
        "Email: contact@svitvasad.ac.in, Website: svitvasad.ac.in.",
        "Student ID: 22BEITM069 is in a valid format.",
        "Branch: Information Technology, valid duration (2022-2026).",
    ],
};

const FRAUD_INDICATORS: ReportSection = ReportSection {
    heading: "Potential Fraud Indicators:",
    bullets: &[
        "OCR errors: \"BARDAR\" and \"waren umfarer\" seem suspicious.",
        "Missing standard features: No photo, signature, or hologram.",
    ],
};

const VERIFICATION: ReportSection = ReportSection {
    heading: "Suggestions for Verification:",
    bullets: &[
        "Verify email and contact info on the SVIT website.",
        "Check the student ID number with SVIT's records.",
        "Confirm the details with the individual named on the document.",
    ],
};

/// How far one click of the gauge step buttons moves the marker.
const GAUGE_STEP: f32 = 5.0;

/// Report panel: narrative sections with the risk gauge in between.
pub struct ReportView {
    gauge_position: f32,
    theme: Theme,
}

impl ReportView {
    pub fn new(gauge_position: f32, theme: Theme) -> Self {
        Self {
            gauge_position,
            theme,
        }
    }

    fn nudge_gauge(&mut self, delta: f32, cx: &mut Context<Self>) {
        // No bounds here; the mapper clamps the rendered offset.
        self.gauge_position += delta;
        cx.notify();
    }

    fn set_gauge(&mut self, position: f32, cx: &mut Context<Self>) {
        self.gauge_position = position;
        cx.notify();
    }

    fn render_section(&self, section: &ReportSection) -> Div {
        let theme = &self.theme;

        div()
            .flex()
            .flex_col()
            .gap(px(8.0))
            .child(
                div()
                    .pb(px(6.0))
                    .border_b_1()
                    .border_color(theme.border_subtle)
                    .text_size(px(17.0))
                    .font_weight(FontWeight::SEMIBOLD)
                    .text_color(theme.text)
                    .child(section.heading),
            )
            .children(section.bullets.iter().map(|bullet| {
                div()
                    .flex()
                    .gap(px(8.0))
                    .child(
                        div()
                            .text_size(px(13.0))
                            .text_color(theme.text_dimmed)
                            .child("-"),
                    )
                    .child(
                        div()
                            .text_size(px(13.0))
                            .text_color(theme.text_secondary)
                            .child(*bullet),
                    )
            }))
    }

    fn render_gauge(&self, cx: &mut Context<Self>) -> Div {
        let theme = &self.theme;
        let position = self.gauge_position;
        let band = gauge::band_for(position);
        let offset = gauge::marker_offset(position, gauge::TRACK_WIDTH);

        div()
            .flex()
            .flex_col()
            .gap(px(10.0))
            .child(
                div()
                    .pb(px(6.0))
                    .border_b_1()
                    .border_color(theme.border_subtle)
                    .text_size(px(17.0))
                    .font_weight(FontWeight::SEMIBOLD)
                    .text_color(theme.text)
                    .child("Fraud Likelihood:"),
            )
            .child(
                div()
                    .flex()
                    .items_center()
                    .gap(px(12.0))
                    .child(self.render_gauge_button("gauge-down", "-", -GAUGE_STEP, cx))
                    // Track with marker overlay. Bands keep their fixed equal
                    // widths no matter where the marker sits.
                    .child(
                        div()
                            .w(px(gauge::TRACK_WIDTH))
                            .flex()
                            .flex_col()
                            .gap(px(4.0))
                            .child(
                                div()
                                    .relative()
                                    .w_full()
                                    .h(px(14.0))
                                    .rounded(px(4.0))
                                    .flex()
                                    .children(gauge::BANDS.iter().enumerate().map(
                                        |(index, strip_band)| {
                                            let position = band_center(index);
                                            div()
                                                .id(SharedString::from(format!("gauge-band-{}", index)))
                                                .flex_1()
                                                .h_full()
                                                .bg(strip_band.color())
                                                .cursor_pointer()
                                                .on_click(cx.listener(move |this, _, _, cx| {
                                                    this.set_gauge(position, cx);
                                                }))
                                        },
                                    ))
                                    .child(
                                        div()
                                            .absolute()
                                            .left(px(offset))
                                            .top(px(-4.0))
                                            .w(px(gauge::MARKER_HALF_WIDTH * 2.0))
                                            .h(px(22.0))
                                            .rounded(px(3.0))
                                            .bg(theme.text)
                                            .border_1()
                                            .border_color(theme.card_bg),
                                    ),
                            )
                            .child(
                                div()
                                    .flex()
                                    .justify_between()
                                    .text_size(px(10.0))
                                    .text_color(theme.text_dimmed)
                                    .child("0")
                                    .child("100"),
                            ),
                    )
                    .child(self.render_gauge_button("gauge-up", "+", GAUGE_STEP, cx))
                    .child(
                        div()
                            .px(px(10.0))
                            .py(px(4.0))
                            .rounded(px(4.0))
                            .bg(band.color().opacity(0.18))
                            .text_size(px(12.0))
                            .font_weight(FontWeight::MEDIUM)
                            .text_color(band.color())
                            .child(format!("{:.0} ({})", position, band.label)),
                    ),
            )
    }

    fn render_gauge_button(
        &self,
        id: &'static str,
        glyph: &'static str,
        delta: f32,
        cx: &mut Context<Self>,
    ) -> impl IntoElement {
        let theme = &self.theme;

        div()
            .id(id)
            .size(px(24.0))
            .rounded(px(4.0))
            .border_1()
            .border_color(theme.border)
            .cursor_pointer()
            .hover(|s| s.bg(theme.hover_bg))
            .flex()
            .items_center()
            .justify_center()
            .text_size(px(13.0))
            .text_color(theme.text_secondary)
            .on_click(cx.listener(move |this, _, _, cx| {
                this.nudge_gauge(delta, cx);
            }))
            .child(glyph)
    }
}

fn band_center(index: usize) -> f32 {
    gauge::band_width_percent() * (index as f32 + 0.5)
}

impl Render for ReportView {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let theme = self.theme.clone();

        div()
            .size_full()
            .id("report-scroll")
            .overflow_y_scroll()
            .bg(theme.card_bg)
            .p(px(20.0))
            .flex()
            .flex_col()
            .gap(px(18.0))
            .child(
                div()
                    .text_size(px(26.0))
                    .font_weight(FontWeight::BOLD)
                    .text_color(theme.text)
                    .child("Fraud Analysis for the Given Document"),
            )
            .child(self.render_section(&AUTHENTICITY))
            .child(self.render_section(&FRAUD_INDICATORS))
            .child(self.render_gauge(cx))
            .child(self.render_section(&VERIFICATION))
    }
}
