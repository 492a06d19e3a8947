use dioxus::prelude::*;
use tracing::error;

use crate::admin_client::{AdminApiError, AdminClient};
use crate::config::Config;
use crate::models::OrderStatus;
use crate::state::OrdersState;

/// Shared state and actions for the orders page. Each action spawns the
/// HTTP call and folds the outcome into [`OrdersState`].
#[derive(Clone)]
pub struct OrdersContext {
    pub state: Signal<OrdersState>,
    pub search_input: Signal<String>,
    pub config: Config,
    client: AdminClient,
}

impl OrdersContext {
    /// Fetch one page of the listing. On failure the prior state is kept
    /// and the error is only logged.
    pub fn fetch_orders(&mut self, page: u32) {
        let client = self.client.clone();
        let mut state = self.state.clone();

        spawn(async move {
            let seq = state.write().begin_fetch();
            match client.fetch_orders(page).await {
                Ok(page) => {
                    state.write().apply_page(seq, page);
                }
                Err(e) => {
                    error!("order list fetch failed: {e}");
                }
            }
        });
    }

    /// Look up the order id currently in the search input. An empty
    /// (post-trim) query is ignored.
    pub fn search_order(&mut self) {
        let query = self.search_input.read().trim().to_string();
        if query.is_empty() {
            return;
        }

        let client = self.client.clone();
        let mut state = self.state.clone();

        spawn(async move {
            match client.search_order(&query).await {
                Ok(order) => state.write().apply_search_result(order),
                Err(AdminApiError::Backend { message, .. }) => {
                    state.write().apply_search_error(message)
                }
                Err(e) => state.write().apply_search_error(e.to_string()),
            }
        });
    }

    /// Transition an order's status; on success only the local copy is
    /// patched, the next fetch reconciles with backend truth.
    pub fn update_status(&mut self, id: i64, status: OrderStatus) {
        let client = self.client.clone();
        let mut state = self.state.clone();

        spawn(async move {
            match client.update_order_status(id, status).await {
                Ok(()) => state.write().apply_status_update(id, status),
                Err(e) => {
                    error!("status update to {status} failed for order {id}: {e}");
                }
            }
        });
    }

    /// Return from single-result (or search-error) mode to the cached list.
    pub fn clear_search(&mut self) {
        self.state.write().clear_search();
    }
}

/// Provider component to make the orders context available throughout the app
#[component]
pub fn OrdersContextProvider(config: Config, children: Element) -> Element {
    let client = use_hook({
        let base_url = config.api_base_url.clone();
        move || AdminClient::new(base_url)
    });

    let orders_ctx = OrdersContext {
        state: use_signal(OrdersState::new),
        search_input: use_signal(String::new),
        config,
        client,
    };

    use_context_provider(move || orders_ctx);

    rsx! {
        {children}
    }
}
