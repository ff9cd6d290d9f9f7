use dioxus::prelude::*;

use barrier_calculator::domain::{format_amount, format_currency, CostChart, MaterialType, ResourceBars};

use crate::ui::theme;

/// Two stacked bars: purchase plus operation over the chart horizon.
#[component]
pub fn CostBars(chart: CostChart, material: MaterialType) -> Element {
    let horizon = format_amount(chart.years, 0);
    let rows = [
        (chart.alternative.clone(), theme::alternative_bar(material)),
        (chart.reusable.clone(), theme::reusable_bar()),
    ];

    rsx! {
        section { class: "panel",
            h2 { class: "label", "Cumulative cost over {horizon} years" }
            for (bar, fill) in rows {
                div { class: "bar-row",
                    span { class: "bar-label", "{bar.label}" }
                    div { class: "bar-track",
                        div {
                            class: "{fill}",
                            style: "{width_style(bar.width)}",
                            for (idx, segment) in bar.segments.clone().into_iter().enumerate() {
                                div {
                                    class: "{theme::segment_fill(idx)}",
                                    style: "{width_style(segment.share)}",
                                    title: "{segment.label}: {format_currency(segment.value)}",
                                }
                            }
                        }
                    }
                    span { class: "bar-value", "{format_currency(bar.total)}" }
                }
            }
            div { class: "legend",
                span { class: "segment-purchase legend-swatch" }
                span { "Purchase" }
                span { class: "segment-operation legend-swatch" }
                span { "Operation" }
            }
        }
    }
}

/// One pair of bars per resource, alternative above screen.
#[component]
pub fn ResourceBarGroup(bars: ResourceBars, material: MaterialType) -> Element {
    let rows = [
        (bars.alternative.clone(), theme::alternative_bar(material)),
        (bars.reusable.clone(), theme::reusable_bar()),
    ];

    rsx! {
        div { class: "resource-group",
            h3 { class: "label", "{bars.resource} ({bars.unit})" }
            for (bar, fill) in rows {
                div { class: "bar-row",
                    span { class: "bar-label", "{bar.label}" }
                    div { class: "bar-track",
                        div { class: "{fill}", style: "{width_style(bar.width)}" }
                    }
                    span { class: "bar-value", "{format_amount(bar.total, bars.decimals)} {bars.unit}" }
                }
            }
        }
    }
}

fn width_style(percent: f64) -> String {
    format!("width: {:.1}%;", percent.clamp(0.0, 100.0))
}
