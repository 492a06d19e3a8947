use dioxus::prelude::*;

use crate::orders_context::OrdersContext;
use crate::state::ViewMode;
use crate::ui::components::{OrderRow, Pagination};

/// Paginated order browser with search by order id and per-row status
/// updates. A search (successful or failed) takes over the page until
/// it is cleared or a new page fetch completes.
#[component]
pub fn OrdersPage() -> Element {
    let ctx = use_context::<OrdersContext>();

    {
        let mut ctx = ctx.clone();
        use_effect(move || ctx.fetch_orders(0));
    }

    let state = ctx.state.read().clone();

    rsx! {
        div {
            class: "orders-page",
            h1 { class: "page-title", "All Orders" }

            form {
                class: "search-form",
                onsubmit: {
                    let mut ctx = ctx.clone();
                    move |event: FormEvent| {
                        event.prevent_default();
                        ctx.search_order();
                    }
                },
                input {
                    class: "search-input",
                    placeholder: "Enter order id",
                    value: "{ctx.search_input}",
                    oninput: {
                        let mut ctx = ctx.clone();
                        move |event: FormEvent| ctx.search_input.set(event.value())
                    }
                }
                button { class: "search-button", r#type: "submit", "Search" }
            }

            {match state.view {
                ViewMode::SearchFailed(ref message) => rsx! {
                    div { class: "search-error", "{message}" }
                    BackToList {}
                },
                ViewMode::Single(ref order) => {
                    let id = order.id;
                    let mut row_ctx = ctx.clone();
                    rsx! {
                        OrdersTable {
                            OrderRow {
                                order: order.clone(),
                                on_status_change: move |status| row_ctx.update_status(id, status),
                            }
                        }
                        BackToList {}
                    }
                }
                ViewMode::List => rsx! {
                    p { class: "total-count", "Total orders: {state.total_elements}" }
                    OrdersTable {
                        for order in state.orders.iter() {
                            OrderRow {
                                key: "{order.id}",
                                order: order.clone(),
                                on_status_change: {
                                    let mut ctx = ctx.clone();
                                    let id = order.id;
                                    move |status| ctx.update_status(id, status)
                                },
                            }
                        }
                    }
                    Pagination {
                        current_page: state.page_no,
                        total_pages: state.total_pages,
                        on_page: {
                            let mut ctx = ctx.clone();
                            move |page| ctx.fetch_orders(page)
                        },
                    }
                },
            }}
        }
    }
}

#[component]
fn OrdersTable(children: Element) -> Element {
    rsx! {
        table {
            class: "orders-table",
            thead {
                tr {
                    th { "Order Id" }
                    th { "Deliver To" }
                    th { "Date" }
                    th { "Product" }
                    th { "Quantity / Price" }
                    th { "Status" }
                    th { "Update Status" }
                }
            }
            tbody {
                {children}
            }
        }
    }
}

#[component]
fn BackToList() -> Element {
    let mut ctx = use_context::<OrdersContext>();

    rsx! {
        button {
            class: "back-to-list",
            onclick: move |_| ctx.clear_search(),
            "Back to all orders"
        }
    }
}
