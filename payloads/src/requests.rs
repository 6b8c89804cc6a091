use crate::{BeerId, BeerStyle, CustomerId, OrderLineId, OrderStatus};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBeer {
    pub beer_name: String,
    pub beer_style: BeerStyle,
    pub upc: String,
    pub price: Decimal,
    pub quantity_on_hand: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BeerPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub beer_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub beer_style: Option<BeerStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upc: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity_on_hand: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCustomer {
    pub customer_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zip_code: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewOrderLine {
    pub beer_id: BeerId,
    pub order_quantity: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBeerOrder {
    pub customer_id: CustomerId,
    pub order_lines: Vec<NewOrderLine>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderLineUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<OrderLineId>,
    pub beer_id: BeerId,
    pub order_quantity: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BeerOrderUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_status: Option<OrderStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_lines: Option<Vec<OrderLineUpdate>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderStatusUpdate {
    pub order_status: OrderStatus,
}

/// Field-scoped validation errors for the beer form. A `None` field has no
/// error; submission is allowed only when every field is `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BeerValidation {
    pub beer_name: Option<&'static str>,
    pub beer_style: Option<&'static str>,
    pub upc: Option<&'static str>,
    pub price: Option<&'static str>,
    pub quantity_on_hand: Option<&'static str>,
}

impl BeerValidation {
    pub fn is_valid(&self) -> bool {
        self.beer_name.is_none()
            && self.beer_style.is_none()
            && self.upc.is_none()
            && self.price.is_none()
            && self.quantity_on_hand.is_none()
    }
}

/// Validate beer form input before it goes anywhere near the network.
/// `price` and `quantity_on_hand` are `None` when the raw input failed to
/// parse as a number.
pub fn validate_beer(
    beer_name: &str,
    beer_style: Option<BeerStyle>,
    upc: &str,
    price: Option<Decimal>,
    quantity_on_hand: Option<i32>,
) -> BeerValidation {
    let mut errors = BeerValidation::default();
    if beer_name.trim().is_empty() {
        errors.beer_name = Some("Beer name is required");
    }
    if beer_style.is_none() {
        errors.beer_style = Some("Beer style is required");
    }
    if upc.trim().is_empty() {
        errors.upc = Some("UPC is required");
    }
    match price {
        Some(price) if price > Decimal::ZERO => {}
        _ => errors.price = Some("Price must be greater than 0"),
    }
    match quantity_on_hand {
        Some(quantity) if quantity >= 0 => {}
        _ => errors.quantity_on_hand = Some("Quantity must be 0 or greater"),
    }
    errors
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomerValidation {
    pub customer_name: Option<&'static str>,
    pub email: Option<&'static str>,
    pub phone: Option<&'static str>,
    pub address: Option<&'static str>,
    pub city: Option<&'static str>,
    pub state: Option<&'static str>,
    pub zip_code: Option<&'static str>,
}

impl CustomerValidation {
    pub fn is_valid(&self) -> bool {
        self.customer_name.is_none()
            && self.email.is_none()
            && self.phone.is_none()
            && self.address.is_none()
            && self.city.is_none()
            && self.state.is_none()
            && self.zip_code.is_none()
    }
}

pub fn validate_customer(
    customer_name: &str,
    email: &str,
    phone: &str,
    address: &str,
    city: &str,
    state: &str,
    zip_code: &str,
) -> CustomerValidation {
    let mut errors = CustomerValidation::default();
    if customer_name.trim().is_empty() {
        errors.customer_name = Some("Name is required");
    }
    let email = email.trim();
    if email.is_empty() {
        errors.email = Some("Email is required");
    } else if !looks_like_email(email) {
        errors.email = Some("Email must be valid");
    }
    if phone.trim().is_empty() {
        errors.phone = Some("Phone is required");
    }
    if address.trim().is_empty() {
        errors.address = Some("Address is required");
    }
    if city.trim().is_empty() {
        errors.city = Some("City is required");
    }
    if state.trim().is_empty() {
        errors.state = Some("State is required");
    }
    if zip_code.trim().is_empty() {
        errors.zip_code = Some("Zip code is required");
    }
    errors
}

// Enough to catch typos; the backend does the real validation.
fn looks_like_email(value: &str) -> bool {
    match value.split_once('@') {
        Some((local, domain)) => !local.is_empty() && domain.contains('.'),
        None => false,
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderValidation {
    pub customer: Option<&'static str>,
    pub order_lines: Option<&'static str>,
}

impl OrderValidation {
    pub fn is_valid(&self) -> bool {
        self.customer.is_none() && self.order_lines.is_none()
    }
}

pub fn validate_new_order(
    customer_id: Option<CustomerId>,
    order_lines: &[NewOrderLine],
) -> OrderValidation {
    let mut errors = OrderValidation::default();
    if customer_id.is_none() {
        errors.customer = Some("A customer is required");
    }
    if order_lines.is_empty() {
        errors.order_lines = Some("At least one order line is required");
    } else if order_lines.iter().any(|line| line.order_quantity < 1) {
        errors.order_lines = Some("Order quantities must be at least 1");
    }
    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::dec;

    fn valid_beer_input() -> BeerValidation {
        validate_beer(
            "Galaxy Hopper",
            Some(BeerStyle::Ipa),
            "0631234200036",
            Some(dec!(12.99)),
            Some(100),
        )
    }

    #[test]
    fn valid_beer_input_produces_no_errors() {
        assert!(valid_beer_input().is_valid());
    }

    #[test]
    fn empty_name_style_and_upc_each_produce_an_error() {
        let errors = validate_beer("  ", None, "", Some(dec!(1)), Some(0));
        assert!(errors.beer_name.is_some());
        assert!(errors.beer_style.is_some());
        assert!(errors.upc.is_some());
        assert!(errors.price.is_none());
        assert!(errors.quantity_on_hand.is_none());
    }

    #[test]
    fn price_must_be_strictly_positive() {
        let zero = validate_beer("a", Some(BeerStyle::Ale), "b", Some(dec!(0)), Some(1));
        assert!(zero.price.is_some());
        let negative =
            validate_beer("a", Some(BeerStyle::Ale), "b", Some(dec!(-1.50)), Some(1));
        assert!(negative.price.is_some());
        let missing = validate_beer("a", Some(BeerStyle::Ale), "b", None, Some(1));
        assert!(missing.price.is_some());
    }

    #[test]
    fn quantity_may_be_zero_but_not_negative_or_missing() {
        let zero = validate_beer("a", Some(BeerStyle::Ale), "b", Some(dec!(1)), Some(0));
        assert!(zero.quantity_on_hand.is_none());
        let negative =
            validate_beer("a", Some(BeerStyle::Ale), "b", Some(dec!(1)), Some(-1));
        assert!(negative.quantity_on_hand.is_some());
        let missing = validate_beer("a", Some(BeerStyle::Ale), "b", Some(dec!(1)), None);
        assert!(missing.quantity_on_hand.is_some());
    }

    #[test]
    fn customer_requires_every_contact_field() {
        let errors = validate_customer("", "", "", "", "", "", "");
        assert!(errors.customer_name.is_some());
        assert!(errors.email.is_some());
        assert!(errors.phone.is_some());
        assert!(errors.address.is_some());
        assert!(errors.city.is_some());
        assert!(errors.state.is_some());
        assert!(errors.zip_code.is_some());
    }

    #[test]
    fn customer_email_must_look_like_an_address() {
        let errors = validate_customer(
            "Jane", "not-an-email", "555", "1 Main St", "Springfield", "IL", "62704",
        );
        assert_eq!(errors.email, Some("Email must be valid"));
        let ok = validate_customer(
            "Jane",
            "jane@example.com",
            "555",
            "1 Main St",
            "Springfield",
            "IL",
            "62704",
        );
        assert!(ok.is_valid());
    }

    #[test]
    fn order_needs_a_customer_and_at_least_one_sane_line() {
        let no_customer = validate_new_order(None, &[]);
        assert!(no_customer.customer.is_some());
        assert!(no_customer.order_lines.is_some());

        let bad_quantity = validate_new_order(
            Some(CustomerId(1)),
            &[NewOrderLine {
                beer_id: BeerId(1),
                order_quantity: 0,
            }],
        );
        assert!(bad_quantity.order_lines.is_some());

        let ok = validate_new_order(
            Some(CustomerId(1)),
            &[NewOrderLine {
                beer_id: BeerId(1),
                order_quantity: 2,
            }],
        );
        assert!(ok.is_valid());
    }

    #[test]
    fn patch_serializes_only_the_fields_it_carries() {
        let patch = BeerPatch {
            price: Some(dec!(4.25)),
            ..BeerPatch::default()
        };
        let json = serde_json::to_string(&patch).unwrap();
        assert_eq!(json, r#"{"price":"4.25"}"#);
    }

    #[test]
    fn order_update_serializes_lines_with_optional_ids() {
        let update = BeerOrderUpdate {
            order_status: None,
            order_lines: Some(vec![
                OrderLineUpdate {
                    id: Some(OrderLineId(7)),
                    beer_id: BeerId(2),
                    order_quantity: 3,
                },
                OrderLineUpdate {
                    id: None,
                    beer_id: BeerId(5),
                    order_quantity: 1,
                },
            ]),
        };
        let json = serde_json::to_string(&update).unwrap();
        assert_eq!(
            json,
            r#"{"orderLines":[{"id":7,"beerId":2,"orderQuantity":3},{"beerId":5,"orderQuantity":1}]}"#
        );
    }
}
