pub mod app;
pub mod navbar;
pub mod order_row;
pub mod orders_page;
pub mod pagination;

pub use app::App;
pub use navbar::Navbar;
pub use order_row::OrderRow;
pub use orders_page::OrdersPage;
pub use pagination::Pagination;
