pub mod detail;
pub mod form;
pub mod list;

pub use detail::CustomerDetail;
pub use form::CustomerForm;
pub use list::CustomerList;
