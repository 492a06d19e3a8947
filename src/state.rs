use crate::models::{Order, OrderPage, OrderStatus};

/// What the page is currently showing. `Single` and `SearchFailed` both
/// suppress the list and its pagination controls.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewMode {
    /// Paginated order listing (the default)
    List,
    /// Exactly one searched order
    Single(Order),
    /// A failed search, with the message shown in place of the table
    SearchFailed(String),
}

/// Pure page state. All transitions live here, independent of the UI
/// runtime, so they can be unit tested directly; `OrdersContext` folds
/// HTTP results into this struct.
#[derive(Debug, Clone, PartialEq)]
pub struct OrdersState {
    pub view: ViewMode,
    /// Orders of the most recently fetched page
    pub orders: Vec<Order>,
    /// Zero-based current page index
    pub page_no: u32,
    pub total_pages: u32,
    pub total_elements: u64,
    fetch_seq: u64,
}

impl OrdersState {
    pub fn new() -> Self {
        Self {
            view: ViewMode::List,
            orders: Vec::new(),
            page_no: 0,
            total_pages: 0,
            total_elements: 0,
            fetch_seq: 0,
        }
    }

    /// Register the start of a list fetch and return its sequence number.
    /// Starting a new fetch invalidates every earlier in-flight one.
    pub fn begin_fetch(&mut self) -> u64 {
        self.fetch_seq += 1;
        self.fetch_seq
    }

    /// Install a fetched page, unless a newer fetch has started since
    /// `seq` was issued; a stale response never overwrites newer state.
    /// Installing a page also returns the view to the list.
    pub fn apply_page(&mut self, seq: u64, page: OrderPage) -> bool {
        if seq != self.fetch_seq {
            return false;
        }
        self.orders = page.content;
        self.page_no = page.number;
        self.total_pages = page.total_pages;
        self.total_elements = page.total_elements;
        self.view = ViewMode::List;
        true
    }

    /// Show the one order a search found, clearing any prior error.
    pub fn apply_search_result(&mut self, order: Order) {
        self.view = ViewMode::Single(order);
    }

    /// Show a search failure in place of the result table.
    pub fn apply_search_error(&mut self, message: String) {
        self.view = ViewMode::SearchFailed(message);
    }

    /// Leave single-result mode without refetching; the cached page is
    /// still present and becomes visible again.
    pub fn clear_search(&mut self) {
        self.view = ViewMode::List;
    }

    /// Patch the status of the matching order after a successful update:
    /// the single displayed order when one is shown, otherwise the
    /// matching list entry. All other entries are untouched.
    pub fn apply_status_update(&mut self, id: i64, status: OrderStatus) {
        if let ViewMode::Single(order) = &mut self.view {
            if order.id == id {
                order.status = status;
                return;
            }
        }
        if let Some(order) = self.orders.iter_mut().find(|o| o.id == id) {
            order.status = status;
        }
    }

    pub fn has_prev(&self) -> bool {
        self.page_no > 0
    }

    pub fn has_next(&self) -> bool {
        self.page_no + 1 < self.total_pages
    }
}

impl Default for OrdersState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{OrderAddress, Product};

    fn order(id: i64, status: OrderStatus) -> Order {
        Order {
            id,
            order_id: format!("ORD-{id}"),
            order_date: "2024-06-12".to_string(),
            quantity: 2,
            price: 100.0,
            status,
            order_address: OrderAddress {
                first_name: "Asha".to_string(),
                last_name: "Verma".to_string(),
                email: "asha@example.com".to_string(),
                mobile_no: "9876543210".to_string(),
                address: "14 Lake Road".to_string(),
                city: "Pune".to_string(),
                state: "MH".to_string(),
                pincode: "411001".to_string(),
            },
            product: Product {
                title: "Wireless Mouse".to_string(),
            },
        }
    }

    fn page(ids: &[i64], number: u32, total_pages: u32, total_elements: u64) -> OrderPage {
        OrderPage {
            content: ids
                .iter()
                .map(|&id| order(id, OrderStatus::InProgress))
                .collect(),
            number,
            total_pages,
            total_elements,
        }
    }

    #[test]
    fn starts_in_list_mode_with_no_pages() {
        let state = OrdersState::new();
        assert_eq!(state.view, ViewMode::List);
        assert!(state.orders.is_empty());
        assert!(!state.has_prev());
        assert!(!state.has_next());
    }

    #[test]
    fn applying_a_page_installs_content_and_metadata() {
        let mut state = OrdersState::new();
        let seq = state.begin_fetch();
        assert!(state.apply_page(seq, page(&[1, 2, 3], 0, 3, 25)));
        assert_eq!(state.orders.len(), 3);
        assert_eq!(state.page_no, 0);
        assert_eq!(state.total_pages, 3);
        assert_eq!(state.total_elements, 25);
        assert!(!state.has_prev());
        assert!(state.has_next());
    }

    #[test]
    fn stale_page_response_is_ignored() {
        let mut state = OrdersState::new();
        let first = state.begin_fetch();
        let second = state.begin_fetch();

        // The later-started fetch resolves first.
        assert!(state.apply_page(second, page(&[10, 11], 2, 3, 25)));
        // The earlier fetch resolves late and must not win.
        assert!(!state.apply_page(first, page(&[1, 2], 0, 3, 25)));

        assert_eq!(state.page_no, 2);
        assert_eq!(state.orders[0].id, 10);
    }

    #[test]
    fn last_page_disables_next() {
        let mut state = OrdersState::new();
        let seq = state.begin_fetch();
        state.apply_page(seq, page(&[21], 2, 3, 25));
        assert!(state.has_prev());
        assert!(!state.has_next());
    }

    #[test]
    fn single_page_listing_disables_both_controls() {
        let mut state = OrdersState::new();
        let seq = state.begin_fetch();
        state.apply_page(seq, page(&[1], 0, 1, 1));
        assert!(!state.has_prev());
        assert!(!state.has_next());
    }

    #[test]
    fn successful_search_replaces_a_prior_error() {
        let mut state = OrdersState::new();
        state.apply_search_error("Order not found".to_string());
        state.apply_search_result(order(7, OrderStatus::OrderReceived));
        assert!(matches!(&state.view, ViewMode::Single(o) if o.id == 7));
    }

    #[test]
    fn failed_search_replaces_a_prior_result() {
        let mut state = OrdersState::new();
        state.apply_search_result(order(7, OrderStatus::OrderReceived));
        state.apply_search_error("No order exists with id 999".to_string());
        assert_eq!(
            state.view,
            ViewMode::SearchFailed("No order exists with id 999".to_string())
        );
    }

    #[test]
    fn clearing_a_search_restores_the_cached_page() {
        let mut state = OrdersState::new();
        let seq = state.begin_fetch();
        state.apply_page(seq, page(&[1, 2], 1, 3, 25));
        state.apply_search_result(order(7, OrderStatus::OrderReceived));

        state.clear_search();

        assert_eq!(state.view, ViewMode::List);
        assert_eq!(state.orders.len(), 2);
        assert_eq!(state.page_no, 1);
    }

    #[test]
    fn fetching_a_page_leaves_single_result_mode() {
        let mut state = OrdersState::new();
        state.apply_search_result(order(7, OrderStatus::OrderReceived));
        let seq = state.begin_fetch();
        state.apply_page(seq, page(&[1], 0, 1, 1));
        assert_eq!(state.view, ViewMode::List);
    }

    #[test]
    fn status_update_patches_only_the_matching_list_entry() {
        let mut state = OrdersState::new();
        let seq = state.begin_fetch();
        state.apply_page(seq, page(&[1, 2, 3], 0, 1, 3));

        state.apply_status_update(2, OrderStatus::Delivered);

        assert_eq!(state.orders[0].status, OrderStatus::InProgress);
        assert_eq!(state.orders[1].status, OrderStatus::Delivered);
        assert_eq!(state.orders[2].status, OrderStatus::InProgress);
    }

    #[test]
    fn status_update_in_single_mode_leaves_the_cached_list_alone() {
        let mut state = OrdersState::new();
        let seq = state.begin_fetch();
        state.apply_page(seq, page(&[7, 8], 0, 1, 2));
        state.apply_search_result(order(7, OrderStatus::OrderReceived));

        state.apply_status_update(7, OrderStatus::OutForDelivery);

        assert!(
            matches!(&state.view, ViewMode::Single(o) if o.status == OrderStatus::OutForDelivery)
        );
        // The cached list copy of order 7 is reconciled on the next fetch.
        assert_eq!(state.orders[0].status, OrderStatus::InProgress);
    }

    #[test]
    fn status_update_for_an_unknown_id_is_a_no_op() {
        let mut state = OrdersState::new();
        let seq = state.begin_fetch();
        state.apply_page(seq, page(&[1], 0, 1, 1));
        let before = state.clone();

        state.apply_status_update(99, OrderStatus::Cancelled);

        assert_eq!(state, before);
    }
}
