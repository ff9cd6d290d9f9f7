use dioxus::prelude::*;

use barrier_calculator::domain::{
    format_amount, format_currency, parse_quantity, BreakEven, Calculation, CalculatorState,
    CleaningFrequency, MaterialType, ResourceResult,
};

use crate::ui::components::{
    bar_chart::{CostBars, ResourceBarGroup},
    kpi_card::KpiCard,
    toast::{push_toast, ToastKind, ToastMessage},
};

#[component]
pub fn CalculatorPage() -> Element {
    let mut state = use_context::<Signal<CalculatorState>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();

    let params = state.with(|st| st.snapshot());
    let calculation = state.with(|st| st.calculate());

    let mut quantity_input = use_signal(|| params.quantity.to_string());

    let on_calculate = move |_| match parse_quantity(&quantity_input()) {
        Ok(quantity) => {
            state.with_mut(|st| st.set_quantity(quantity));
            if let Some(result) = state.with(|st| st.calculate()) {
                tracing::info!(
                    material = result.params.material.as_key(),
                    frequency = result.params.frequency.as_key(),
                    quantity = result.params.quantity,
                    break_even = ?result.economics.break_even,
                    "calculated payback"
                );
                push_toast(
                    toasts,
                    ToastKind::Info,
                    format!("Break-even: {}", result.break_even),
                );
            }
        }
        Err(err) => {
            tracing::warn!(%err, "rejected quantity");
            push_toast(toasts, ToastKind::Error, format!("Please enter a valid quantity: {err}"));
        }
    };

    rsx! {
        div { class: "page",
            section { class: "panel",
                h2 { class: "label", "Your barriers" }
                div { class: "form-grid",
                    div {
                        label { class: "label", "Quantity" }
                        input {
                            class: "input",
                            r#type: "number",
                            min: "1",
                            value: quantity_input(),
                            oninput: move |evt| {
                                let raw = evt.value();
                                // Invalid edits keep showing the last valid result.
                                if let Ok(quantity) = parse_quantity(&raw) {
                                    state.with_mut(|st| st.set_quantity(quantity));
                                }
                                quantity_input.set(raw);
                            },
                        }
                    }
                    div {
                        label { class: "label", "Current barrier" }
                        select {
                            class: "input",
                            onchange: move |evt| match evt.value().parse::<MaterialType>() {
                                Ok(material) => state.with_mut(|st| st.set_material(material)),
                                Err(err) => tracing::warn!(%err, "ignored material selection"),
                            },
                            for material in MaterialType::ALL {
                                option {
                                    value: material.as_key(),
                                    selected: material == params.material,
                                    "{material.name()}"
                                }
                            }
                        }
                    }
                    div {
                        label { class: "label", "Cleaning frequency" }
                        select {
                            class: "input",
                            onchange: move |evt| match evt.value().parse::<CleaningFrequency>() {
                                Ok(frequency) => state.with_mut(|st| st.set_frequency(frequency)),
                                Err(err) => tracing::warn!(%err, "ignored frequency selection"),
                            },
                            for frequency in CleaningFrequency::ALL {
                                option {
                                    value: frequency.as_key(),
                                    selected: frequency == params.frequency,
                                    "{frequency.name()}"
                                }
                            }
                        }
                    }
                }
                button { class: "button-primary", onclick: on_calculate, "Calculate" }
            }

            if let Some(calculation) = calculation {
                ResultView { calculation }
            } else {
                p { class: "muted", "Enter a quantity above zero to see the comparison." }
            }
        }
    }
}

#[component]
fn ResultView(calculation: Calculation) -> Element {
    let material = calculation.params.material;
    let economics = calculation.economics;
    let break_even = calculation.break_even;
    let summary = savings_summary(&calculation.resources);

    let break_even_note = match economics.break_even {
        BreakEven::Never => "Cleaning the screens costs as much as the current barriers.".to_string(),
        BreakEven::After(years) if years > 0.0 => format!(
            "Screens cost {} more up front.",
            format_currency(economics.initial_cost_difference)
        ),
        BreakEven::After(_) => "Screens are cheaper from day one.".to_string(),
        BreakEven::Invalid => String::new(),
    };

    rsx! {
        div { class: "kpi-grid",
            KpiCard {
                title: "Break-even".to_string(),
                value: break_even.magnitude.to_string(),
                unit: Some(break_even.unit_label().to_string()),
                description: Some(break_even_note),
            }
            KpiCard {
                title: "Annual savings".to_string(),
                value: format_currency(economics.annual_savings),
                description: Some(format!(
                    "{} vs {} per year",
                    format_currency(economics.costs.reusable_annual),
                    format_currency(economics.costs.alternative_annual)
                )),
            }
            KpiCard {
                title: "Initial cost difference".to_string(),
                value: format_currency(economics.initial_cost_difference),
                description: Some(format!(
                    "{} screens vs {} {}",
                    format_currency(economics.costs.reusable_initial),
                    format_currency(economics.costs.alternative_initial),
                    material.name().to_lowercase()
                )),
            }
        }

        CostBars { chart: calculation.cost_chart.clone(), material }

        section { class: "panel",
            h2 { class: "label", "Annual resource use" }
            ul { class: "summary",
                for line in summary {
                    li { "{line}" }
                }
            }
            for bars in calculation.resource_chart.clone() {
                ResourceBarGroup { bars, material }
            }
        }
    }
}

fn savings_summary(resources: &ResourceResult) -> Vec<String> {
    let (disinfectant, wipes) = resources.screen_consumables();
    let consumables = format!(
        "Screens use {} L of disinfectant and {} {} per year.",
        format_amount(disinfectant, 2),
        format_amount(wipes, 2),
        resources.wipe_unit().label()
    );

    match *resources {
        ResourceResult::Textile {
            saved_energy,
            saved_water,
            ..
        } => vec![
            format!(
                "Saves {} kWh of energy and {} L of water per year.",
                format_amount(saved_energy, 0),
                format_amount(saved_water, 0)
            ),
            consumables,
        ],
        ResourceResult::Disposable { saved_plastic, .. } => vec![
            format!(
                "Avoids {} kg of plastic waste per year.",
                format_amount(saved_plastic, 0)
            ),
            consumables,
        ],
    }
}
