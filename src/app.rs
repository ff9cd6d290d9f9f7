use dioxus::prelude::*;

use barrier_calculator::{domain::CalculatorState, infra::config::load_tables};

use crate::{
    ui::{
        components::toast::{Toast, ToastMessage},
        pages::{CalculatorPage, TablesPage},
        shell::Shell,
    },
    util::assets,
};

#[derive(Routable, Clone, PartialEq)]
pub enum Route {
    #[route("/")]
    #[route("/calculator")]
    Calculator {},
    #[route("/tables")]
    Tables {},
}

#[component]
pub fn App() -> Element {
    let state = use_signal(|| CalculatorState::new(load_tables()));
    use_context_provider(|| state);

    let toasts = use_signal(Vec::<ToastMessage>::new);
    use_context_provider(|| toasts);

    rsx! {
        document::Style { "{assets::main_css()}" }
        Router::<Route> {}
        Toast {}
    }
}

#[component]
pub fn Calculator() -> Element {
    rsx! { Shell { CalculatorPage {} } }
}

#[component]
pub fn Tables() -> Element {
    rsx! { Shell { TablesPage {} } }
}
