use crate::config::Config;
use crate::orders_context::OrdersContextProvider;
use crate::ui::{Route, MAIN_CSS};
use dioxus::prelude::*;

#[component]
pub fn App() -> Element {
    let config = use_hook(Config::load);

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        OrdersContextProvider {
            config: config,
            Router::<Route> {}
        }
    }
}
