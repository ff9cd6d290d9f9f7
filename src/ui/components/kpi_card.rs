use dioxus::prelude::*;

#[component]
pub fn KpiCard(
    title: String,
    value: String,
    unit: Option<String>,
    description: Option<String>,
) -> Element {
    rsx! {
        div { class: "panel kpi-card",
            h3 { class: "label", "{title}" }
            p { class: "kpi-value",
                "{value}"
                if let Some(unit) = unit {
                    span { class: "kpi-unit", " {unit}" }
                }
            }
            if let Some(desc) = description {
                p { class: "muted", "{desc}" }
            }
        }
    }
}
