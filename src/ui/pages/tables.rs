use dioxus::prelude::*;

use barrier_calculator::{
    domain::{format_amount, format_currency, CalculatorState, ResourceTable, WipeRate},
    infra::config::{tables_path, TABLES_PATH_ENV},
};

use crate::ui::{
    components::toast::{push_toast, ToastKind, ToastMessage},
    theme,
};

#[component]
pub fn TablesPage() -> Element {
    let state = use_context::<Signal<CalculatorState>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();
    let tables = state.with(|st| st.tables.clone());
    let costs = &tables.costs;
    let resources = &tables.resources;

    let cost_rows = vec![
        ("Screen, per unit", format_currency(costs.screen_unit)),
        ("Textile curtain, per unit", format_currency(costs.textile_unit)),
        ("Disposable curtain, per unit", format_currency(costs.disposable_unit)),
        ("Screen cleaning, per event", format_currency(costs.screen_cleaning)),
        ("Textile cleaning, per event", format_currency(costs.textile_cleaning)),
        (
            "Disposable replacement, per cycle",
            format_currency(costs.disposable_replacement),
        ),
        (
            "Screen lifespan",
            format!("{} years", format_amount(costs.screen_lifespan_years, 0)),
        ),
    ];

    let resource_rows = vec![
        (
            "Textile laundering energy",
            format!("{} kWh", format_amount(resources.textile_energy_kwh, 2)),
        ),
        (
            "Textile laundering water",
            format!("{} L", format_amount(resources.textile_water_liters, 2)),
        ),
        (
            "Disposable plastic",
            format!("{} kg", format_amount(resources.disposable_plastic_kg, 2)),
        ),
        (
            "Screen disinfectant",
            format!("{} L", format_amount(resources.screen_disinfectant_liters, 2)),
        ),
        (
            "Screen wipes",
            format!(
                "{} {}",
                format_amount(resources.screen_wipes.per_cleaning(), 3),
                resources.screen_wipes.unit().label()
            ),
        ),
    ];

    let counting = matches!(resources.screen_wipes, WipeRate::Count(_));
    let source = tables_path()
        .map(|path| path.display().to_string())
        .unwrap_or_else(|| "no config directory".to_string());

    rsx! {
        div { class: "page",
            section { class: "panel",
                h2 { class: "label", "Costs" }
                RateList { rows: cost_rows }
            }
            section { class: "panel",
                h2 { class: "label", "Resources per cleaning or replacement" }
                RateList { rows: resource_rows }
                div { class: "option-row",
                    button {
                        class: "{theme::option_button(counting)}",
                        onclick: move |_| select_wipes(state, toasts, ResourceTable::wipe_count().screen_wipes, "by count"),
                        "Count wipes"
                    }
                    button {
                        class: "{theme::option_button(!counting)}",
                        onclick: move |_| select_wipes(state, toasts, ResourceTable::wipe_mass().screen_wipes, "by weight"),
                        "Weigh wipes"
                    }
                }
            }
            p { class: "muted",
                "Overrides are read at startup from {source} or the file named by {TABLES_PATH_ENV}."
            }
        }
    }
}

fn select_wipes(
    mut state: Signal<CalculatorState>,
    toasts: Signal<Vec<ToastMessage>>,
    rate: WipeRate,
    label: &'static str,
) {
    state.with_mut(|st| st.set_wipe_rate(rate));
    tracing::info!(?rate, "switched wipe rate");
    push_toast(toasts, ToastKind::Info, format!("Wipes now measured {label}."));
}

#[component]
fn RateList(rows: Vec<(&'static str, String)>) -> Element {
    rsx! {
        ul { class: "rate-list",
            for (label, value) in rows {
                li { class: "rate-row",
                    span { "{label}" }
                    span { class: "rate-value", "{value}" }
                }
            }
        }
    }
}
