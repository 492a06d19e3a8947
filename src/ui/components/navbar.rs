use crate::orders_context::OrdersContext;
use crate::ui::Route;
use dioxus::prelude::*;

/// Shared navbar with a link back to the storefront admin home.
#[component]
pub fn Navbar() -> Element {
    let ctx = use_context::<OrdersContext>();

    rsx! {
        div {
            id: "navbar",
            a {
                class: "back-link",
                href: "{ctx.config.admin_home_url()}",
                "Back"
            }
            span {
                class: "navbar-title",
                "Order Administration"
            }
        }

        Outlet::<Route> {}
    }
}
