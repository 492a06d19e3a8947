use serde::{Deserialize, Serialize};
use std::fmt;

/// Fulfillment status of an order. Serialized as the exact strings the
/// backend uses, so any other wire value is a deserialization error.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum OrderStatus {
    #[serde(rename = "In Progress")]
    InProgress,
    #[serde(rename = "Order Received")]
    OrderReceived,
    #[serde(rename = "Product Packed")]
    ProductPacked,
    #[serde(rename = "Out for Delivery")]
    OutForDelivery,
    #[serde(rename = "Delivered")]
    Delivered,
    #[serde(rename = "Cancelled")]
    Cancelled,
}

impl OrderStatus {
    /// All statuses, in the order the status select shows them.
    pub const ALL: [OrderStatus; 6] = [
        OrderStatus::InProgress,
        OrderStatus::OrderReceived,
        OrderStatus::ProductPacked,
        OrderStatus::OutForDelivery,
        OrderStatus::Delivered,
        OrderStatus::Cancelled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::InProgress => "In Progress",
            OrderStatus::OrderReceived => "Order Received",
            OrderStatus::ProductPacked => "Product Packed",
            OrderStatus::OutForDelivery => "Out for Delivery",
            OrderStatus::Delivered => "Delivered",
            OrderStatus::Cancelled => "Cancelled",
        }
    }

    /// Parse the label shown in the status select.
    pub fn from_label(label: &str) -> Option<OrderStatus> {
        OrderStatus::ALL.into_iter().find(|s| s.as_str() == label)
    }

    /// Delivered and Cancelled orders accept no further transitions.
    pub fn is_terminal(&self) -> bool {
        matches!(self, OrderStatus::Delivered | OrderStatus::Cancelled)
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Delivery address embedded in an order. All fields are free-form
/// strings; the backend owns validation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OrderAddress {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub mobile_no: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub pincode: String,
}

/// Product reference embedded in an order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    pub title: String,
}

/// One customer order as returned by the admin endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Internal identifier, used for status updates
    pub id: i64,
    /// Business identifier shown to the admin
    pub order_id: String,
    pub order_date: String,
    pub quantity: u32,
    pub price: f64,
    pub status: OrderStatus,
    pub order_address: OrderAddress,
    pub product: Product,
}

impl Order {
    /// Display-only; the backend never sees this value.
    pub fn total_price(&self) -> f64 {
        self.quantity as f64 * self.price
    }
}

/// One page of the order listing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OrderPage {
    pub content: Vec<Order>,
    /// Zero-based index of this page
    pub number: u32,
    pub total_pages: u32,
    pub total_elements: u64,
}
