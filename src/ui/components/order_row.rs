use dioxus::prelude::*;

use crate::models::{Order, OrderStatus};

/// One order line: address block, product, pricing and the status
/// control. The control is disabled once the order reaches a terminal
/// status.
#[component]
pub fn OrderRow(order: Order, on_status_change: EventHandler<OrderStatus>) -> Element {
    let address = &order.order_address;

    rsx! {
        tr {
            td { "{order.order_id}" }
            td {
                class: "address-block",
                "Name: {address.first_name} {address.last_name}" br {}
                "Email: {address.email}" br {}
                "Mobile: {address.mobile_no}" br {}
                "Address: {address.address}" br {}
                "City: {address.city}" br {}
                "State: {address.state}, {address.pincode}"
            }
            td { "{order.order_date}" }
            td { "{order.product.title}" }
            td {
                "Quantity: {order.quantity}" br {}
                "Price: {order.price}" br {}
                "Total: {order.total_price()}"
            }
            td { "{order.status}" }
            td {
                select {
                    class: "status-select",
                    disabled: order.status.is_terminal(),
                    onchange: move |event: FormEvent| {
                        if let Some(status) = OrderStatus::from_label(&event.value()) {
                            on_status_change.call(status);
                        }
                    },
                    option { value: "", "--select--" }
                    for status in OrderStatus::ALL {
                        option { value: "{status}", "{status}" }
                    }
                }
            }
        }
    }
}
