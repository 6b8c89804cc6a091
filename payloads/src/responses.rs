use crate::{BeerId, BeerOrderId, BeerStyle, CustomerId, OrderLineId, OrderStatus};
use jiff::Timestamp;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Beer {
    pub id: BeerId,
    pub beer_name: String,
    pub beer_style: BeerStyle,
    pub upc: String,
    pub price: Decimal,
    pub quantity_on_hand: i32,
    /// Optimistic-concurrency version, assigned by the backend.
    pub version: i32,
    pub created_date: Timestamp,
    pub update_date: Timestamp,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: CustomerId,
    pub customer_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub version: i32,
    pub created_date: Timestamp,
    pub update_date: Timestamp,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderLine {
    pub id: OrderLineId,
    pub beer: Beer,
    pub order_quantity: i32,
    /// How much of the requested quantity the backend has allocated so far.
    pub quantity_allocated: i32,
    pub version: i32,
    pub created_date: Timestamp,
    pub update_date: Timestamp,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BeerOrder {
    pub id: BeerOrderId,
    pub customer: Customer,
    pub order_status: OrderStatus,
    pub order_lines: Vec<OrderLine>,
    pub version: i32,
    pub created_date: Timestamp,
    pub update_date: Timestamp,
}

/// Spring-style page envelope returned by every list endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub content: Vec<T>,
    pub pageable: Pageable,
    pub total_elements: u64,
    pub total_pages: u32,
    pub last: bool,
    pub first: bool,
    pub size: u32,
    pub number: u32,
    pub sort: SortInfo,
    pub number_of_elements: u32,
    pub empty: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pageable {
    pub offset: u64,
    pub page_number: u32,
    pub page_size: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SortInfo {
    pub sorted: bool,
    pub unsorted: bool,
    pub empty: bool,
}

impl<T> Page<T> {
    /// One-based "showing X to Y of Z" bounds, derived only from the
    /// envelope's offset, content length, and total element count. An
    /// empty page yields `(0, 0, total)` rather than an inverted range.
    pub fn display_range(&self) -> (u64, u64, u64) {
        if self.content.is_empty() {
            return (0, 0, self.total_elements);
        }
        let first = self.pageable.offset + 1;
        let last = (self.pageable.offset + self.content.len() as u64)
            .min(self.total_elements);
        (first, last, self.total_elements)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page_of(offset: u64, len: usize, total: u64) -> Page<u32> {
        Page {
            content: vec![0; len],
            pageable: Pageable {
                offset,
                page_number: 0,
                page_size: 20,
            },
            total_elements: total,
            total_pages: 1,
            last: false,
            first: true,
            size: 20,
            number: 0,
            sort: SortInfo {
                sorted: true,
                unsorted: false,
                empty: false,
            },
            number_of_elements: len as u32,
            empty: len == 0,
        }
    }

    #[test]
    fn display_range_uses_only_envelope_fields() {
        assert_eq!(page_of(0, 20, 53).display_range(), (1, 20, 53));
        assert_eq!(page_of(40, 13, 53).display_range(), (41, 53, 53));
    }

    #[test]
    fn display_range_clamps_to_total_elements() {
        // A short final page must not report past the total.
        assert_eq!(page_of(20, 20, 25).display_range(), (21, 25, 25));
    }

    #[test]
    fn display_range_on_an_empty_page_does_not_invert() {
        assert_eq!(page_of(0, 0, 0).display_range(), (0, 0, 0));
        // A page past the end of the data set still reports the total.
        assert_eq!(page_of(40, 0, 37).display_range(), (0, 0, 37));
    }

    #[test]
    fn entities_deserialize_from_camel_case_json() {
        let beer: Beer = serde_json::from_str(
            r#"{
                "id": 1,
                "beerName": "Test Beer",
                "beerStyle": "IPA",
                "upc": "123456789",
                "price": 9.99,
                "quantityOnHand": 100,
                "version": 1,
                "createdDate": "2025-08-06T00:00:00Z",
                "updateDate": "2025-08-06T00:00:00Z"
            }"#,
        )
        .unwrap();
        assert_eq!(beer.id, crate::BeerId(1));
        assert_eq!(beer.beer_style, BeerStyle::Ipa);
        assert_eq!(beer.quantity_on_hand, 100);
    }
}
