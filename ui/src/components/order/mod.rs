pub mod detail;
pub mod form;
pub mod list;
pub mod status_badge;

pub use detail::OrderDetail;
pub use form::OrderForm;
pub use list::OrderList;
pub use status_badge::StatusBadge;
