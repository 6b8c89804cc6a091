pub mod detail;
pub mod form;
pub mod list;

pub use detail::BeerDetail;
pub use form::BeerForm;
pub use list::BeerList;
