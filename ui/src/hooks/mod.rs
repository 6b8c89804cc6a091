pub mod use_beer_orders;
pub mod use_beers;
pub mod use_customers;
pub mod use_entity_detail;
pub mod use_paged_list;

pub use use_beer_orders::{BeerOrderHandle, use_beer_order, use_beer_orders};
pub use use_beers::{BeerHandle, use_beer, use_beers};
pub use use_customers::{CustomerHandle, use_customer, use_customers};
pub use use_entity_detail::{EntityDetailHandle, use_entity_detail};
pub use use_paged_list::{PagedListHandle, use_paged_list};
