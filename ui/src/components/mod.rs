pub mod beer;
pub mod confirmation_modal;
pub mod customer;
pub mod form_field;
pub mod layout;
pub mod order;
pub mod pagination;

pub use confirmation_modal::ConfirmationModal;
pub use form_field::{SelectField, TextField};
pub use pagination::Pagination;
