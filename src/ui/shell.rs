use dioxus::prelude::*;

use barrier_calculator::domain::{CalculatorState, MaterialType};

use crate::app::Route;
use crate::ui::theme;
use crate::util::version::{version_label, APP_NAME};

#[component]
pub fn Shell(children: Element) -> Element {
    let state = use_context::<Signal<CalculatorState>>();
    let material = state.with(|s| s.snapshot().material);

    let current_route = use_route::<Route>();
    let nav = use_navigator();

    let tagline = match material {
        MaterialType::Textile => "compared against laundered textile curtains",
        MaterialType::Disposable => "compared against single-use curtains",
    };

    rsx! {
        div { class: "app",
            header { class: "app-header {theme::header_accent(material)}",
                div {
                    h1 { class: "app-title", "{APP_NAME}" }
                    p { class: "app-tagline", "{tagline}" }
                }
                nav { class: "app-nav",
                    NavButton {
                        active: matches!(current_route, Route::Calculator {}),
                        onclick: move |_| { nav.push(Route::Calculator {}); },
                        label: "Calculator",
                    }
                    NavButton {
                        active: matches!(current_route, Route::Tables {}),
                        onclick: move |_| { nav.push(Route::Tables {}); },
                        label: "Rates",
                    }
                }
            }
            main { class: "app-main",
                {children}
            }
            footer { class: "app-footer", "{version_label()}" }
        }
    }
}

#[component]
fn NavButton(active: bool, onclick: EventHandler<()>, label: &'static str) -> Element {
    let class = if active {
        "nav-button nav-button-active"
    } else {
        "nav-button"
    };

    rsx! {
        button {
            class: "{class}",
            onclick: move |_| onclick.call(()),
            "{label}"
        }
    }
}
