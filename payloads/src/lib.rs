use serde::{Deserialize, Serialize};

pub mod api_client;
pub mod requests;
pub mod responses;

pub use api_client::{APIClient, ClientError};

macro_rules! id_newtype {
    ($name:ident) => {
        #[derive(
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            Hash,
            PartialOrd,
            Ord,
            Serialize,
            Deserialize,
            derive_more::Display,
        )]
        pub struct $name(pub i64);
    };
}

id_newtype!(BeerId);
id_newtype!(CustomerId);
id_newtype!(BeerOrderId);
id_newtype!(OrderLineId);

/// Beer styles known to the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BeerStyle {
    Ale,
    Ipa,
    Lager,
    Stout,
    Wheat,
}

impl BeerStyle {
    pub const ALL: [BeerStyle; 5] = [
        BeerStyle::Ale,
        BeerStyle::Ipa,
        BeerStyle::Lager,
        BeerStyle::Stout,
        BeerStyle::Wheat,
    ];

    /// The enum value as it appears on the wire and in query parameters.
    pub fn wire_name(&self) -> &'static str {
        match self {
            BeerStyle::Ale => "ALE",
            BeerStyle::Ipa => "IPA",
            BeerStyle::Lager => "LAGER",
            BeerStyle::Stout => "STOUT",
            BeerStyle::Wheat => "WHEAT",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BeerStyle::Ale => "Ale",
            BeerStyle::Ipa => "IPA",
            BeerStyle::Lager => "Lager",
            BeerStyle::Stout => "Stout",
            BeerStyle::Wheat => "Wheat",
        }
    }

    pub fn from_wire(value: &str) -> Option<BeerStyle> {
        Self::ALL.into_iter().find(|s| s.wire_name() == value)
    }
}

/// Order lifecycle states. Transitions are owned by the backend; the
/// frontend only requests a transition and displays whatever comes back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    New,
    Pending,
    Ready,
    PickedUp,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 6] = [
        OrderStatus::New,
        OrderStatus::Pending,
        OrderStatus::Ready,
        OrderStatus::PickedUp,
        OrderStatus::Delivered,
        OrderStatus::Cancelled,
    ];

    pub fn wire_name(&self) -> &'static str {
        match self {
            OrderStatus::New => "NEW",
            OrderStatus::Pending => "PENDING",
            OrderStatus::Ready => "READY",
            OrderStatus::PickedUp => "PICKED_UP",
            OrderStatus::Delivered => "DELIVERED",
            OrderStatus::Cancelled => "CANCELLED",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            OrderStatus::New => "New",
            OrderStatus::Pending => "Pending",
            OrderStatus::Ready => "Ready",
            OrderStatus::PickedUp => "Picked up",
            OrderStatus::Delivered => "Delivered",
            OrderStatus::Cancelled => "Cancelled",
        }
    }

    pub fn from_wire(value: &str) -> Option<OrderStatus> {
        Self::ALL.into_iter().find(|s| s.wire_name() == value)
    }

    /// The next step in the normal fulfilment progression, used to decide
    /// which advance action the UI offers. The backend still has the final
    /// say on whether a transition is legal.
    pub fn next(&self) -> Option<OrderStatus> {
        match self {
            OrderStatus::New => Some(OrderStatus::Pending),
            OrderStatus::Pending => Some(OrderStatus::Ready),
            OrderStatus::Ready => Some(OrderStatus::PickedUp),
            OrderStatus::PickedUp => Some(OrderStatus::Delivered),
            OrderStatus::Delivered | OrderStatus::Cancelled => None,
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, OrderStatus::Delivered | OrderStatus::Cancelled)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn wire_name(&self) -> &'static str {
        match self {
            SortDirection::Asc => "ASC",
            SortDirection::Desc => "DESC",
        }
    }
}

/// A filter that carries list pagination state and can marshal itself into
/// query parameters for the list endpoints.
pub trait PageFilter: Clone + PartialEq {
    fn page(&self) -> u32;
    fn set_page(&mut self, page: u32);
    fn query_params(&self) -> Vec<(&'static str, String)>;
}

/// A partial change to a filter, with unset fields left as they were.
pub trait FilterUpdate<F>: Default {
    /// True when the update touches nothing besides the page number.
    fn is_page_only(&self) -> bool;
    fn merge_into(self, filter: &mut F);
}

/// Merge a partial update into a filter. Changing anything other than the
/// page number resets the page to 0 so a new search or sort never keeps a
/// stale page position.
pub fn apply_update<F, U>(filter: &F, update: U) -> F
where
    F: PageFilter,
    U: FilterUpdate<F>,
{
    let page_only = update.is_page_only();
    let mut next = filter.clone();
    update.merge_into(&mut next);
    if !page_only {
        next.set_page(0);
    }
    next
}

macro_rules! common_params {
    ($filter:expr) => {{
        vec![
            ("page", $filter.page.to_string()),
            ("size", $filter.size.to_string()),
            ("sortField", $filter.sort_field.clone()),
            ("sortDirection", $filter.sort_direction.wire_name().to_string()),
        ]
    }};
}

#[derive(Debug, Clone, PartialEq)]
pub struct BeerFilter {
    pub page: u32,
    pub size: u32,
    pub sort_field: String,
    pub sort_direction: SortDirection,
    pub beer_name: Option<String>,
    pub beer_style: Option<BeerStyle>,
}

impl Default for BeerFilter {
    fn default() -> Self {
        Self {
            page: 0,
            size: 20,
            sort_field: "id".to_string(),
            sort_direction: SortDirection::Asc,
            beer_name: None,
            beer_style: None,
        }
    }
}

impl PageFilter for BeerFilter {
    fn page(&self) -> u32 {
        self.page
    }

    fn set_page(&mut self, page: u32) {
        self.page = page;
    }

    fn query_params(&self) -> Vec<(&'static str, String)> {
        let mut params = common_params!(self);
        if let Some(name) = &self.beer_name {
            params.push(("beerName", name.clone()));
        }
        if let Some(style) = self.beer_style {
            params.push(("beerStyle", style.wire_name().to_string()));
        }
        params
    }
}

/// Partial update for [`BeerFilter`]. The optional search fields are
/// doubly-optional so that "clear this filter" is expressible.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BeerFilterUpdate {
    pub page: Option<u32>,
    pub size: Option<u32>,
    pub sort_field: Option<String>,
    pub sort_direction: Option<SortDirection>,
    pub beer_name: Option<Option<String>>,
    pub beer_style: Option<Option<BeerStyle>>,
}

impl BeerFilterUpdate {
    pub fn page(page: u32) -> Self {
        Self {
            page: Some(page),
            ..Self::default()
        }
    }
}

impl FilterUpdate<BeerFilter> for BeerFilterUpdate {
    fn is_page_only(&self) -> bool {
        self.size.is_none()
            && self.sort_field.is_none()
            && self.sort_direction.is_none()
            && self.beer_name.is_none()
            && self.beer_style.is_none()
    }

    fn merge_into(self, filter: &mut BeerFilter) {
        if let Some(page) = self.page {
            filter.page = page;
        }
        if let Some(size) = self.size {
            filter.size = size;
        }
        if let Some(sort_field) = self.sort_field {
            filter.sort_field = sort_field;
        }
        if let Some(sort_direction) = self.sort_direction {
            filter.sort_direction = sort_direction;
        }
        if let Some(beer_name) = self.beer_name {
            filter.beer_name = beer_name;
        }
        if let Some(beer_style) = self.beer_style {
            filter.beer_style = beer_style;
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CustomerFilter {
    pub page: u32,
    pub size: u32,
    pub sort_field: String,
    pub sort_direction: SortDirection,
    pub customer_name: Option<String>,
}

impl Default for CustomerFilter {
    fn default() -> Self {
        Self {
            page: 0,
            size: 20,
            sort_field: "id".to_string(),
            sort_direction: SortDirection::Asc,
            customer_name: None,
        }
    }
}

impl PageFilter for CustomerFilter {
    fn page(&self) -> u32 {
        self.page
    }

    fn set_page(&mut self, page: u32) {
        self.page = page;
    }

    fn query_params(&self) -> Vec<(&'static str, String)> {
        let mut params = common_params!(self);
        if let Some(name) = &self.customer_name {
            params.push(("customerName", name.clone()));
        }
        params
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CustomerFilterUpdate {
    pub page: Option<u32>,
    pub size: Option<u32>,
    pub sort_field: Option<String>,
    pub sort_direction: Option<SortDirection>,
    pub customer_name: Option<Option<String>>,
}

impl CustomerFilterUpdate {
    pub fn page(page: u32) -> Self {
        Self {
            page: Some(page),
            ..Self::default()
        }
    }
}

impl FilterUpdate<CustomerFilter> for CustomerFilterUpdate {
    fn is_page_only(&self) -> bool {
        self.size.is_none()
            && self.sort_field.is_none()
            && self.sort_direction.is_none()
            && self.customer_name.is_none()
    }

    fn merge_into(self, filter: &mut CustomerFilter) {
        if let Some(page) = self.page {
            filter.page = page;
        }
        if let Some(size) = self.size {
            filter.size = size;
        }
        if let Some(sort_field) = self.sort_field {
            filter.sort_field = sort_field;
        }
        if let Some(sort_direction) = self.sort_direction {
            filter.sort_direction = sort_direction;
        }
        if let Some(customer_name) = self.customer_name {
            filter.customer_name = customer_name;
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BeerOrderFilter {
    pub page: u32,
    pub size: u32,
    pub sort_field: String,
    pub sort_direction: SortDirection,
    pub customer_id: Option<CustomerId>,
    pub order_status: Option<OrderStatus>,
}

impl Default for BeerOrderFilter {
    fn default() -> Self {
        Self {
            page: 0,
            size: 20,
            sort_field: "id".to_string(),
            sort_direction: SortDirection::Asc,
            customer_id: None,
            order_status: None,
        }
    }
}

impl PageFilter for BeerOrderFilter {
    fn page(&self) -> u32 {
        self.page
    }

    fn set_page(&mut self, page: u32) {
        self.page = page;
    }

    fn query_params(&self) -> Vec<(&'static str, String)> {
        let mut params = common_params!(self);
        if let Some(customer_id) = self.customer_id {
            params.push(("customerId", customer_id.to_string()));
        }
        if let Some(status) = self.order_status {
            params.push(("orderStatus", status.wire_name().to_string()));
        }
        params
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BeerOrderFilterUpdate {
    pub page: Option<u32>,
    pub size: Option<u32>,
    pub sort_field: Option<String>,
    pub sort_direction: Option<SortDirection>,
    pub customer_id: Option<Option<CustomerId>>,
    pub order_status: Option<Option<OrderStatus>>,
}

impl BeerOrderFilterUpdate {
    pub fn page(page: u32) -> Self {
        Self {
            page: Some(page),
            ..Self::default()
        }
    }
}

impl FilterUpdate<BeerOrderFilter> for BeerOrderFilterUpdate {
    fn is_page_only(&self) -> bool {
        self.size.is_none()
            && self.sort_field.is_none()
            && self.sort_direction.is_none()
            && self.customer_id.is_none()
            && self.order_status.is_none()
    }

    fn merge_into(self, filter: &mut BeerOrderFilter) {
        if let Some(page) = self.page {
            filter.page = page;
        }
        if let Some(size) = self.size {
            filter.size = size;
        }
        if let Some(sort_field) = self.sort_field {
            filter.sort_field = sort_field;
        }
        if let Some(sort_direction) = self.sort_direction {
            filter.sort_direction = sort_direction;
        }
        if let Some(customer_id) = self.customer_id {
            filter.customer_id = customer_id;
        }
        if let Some(order_status) = self.order_status {
            filter.order_status = order_status;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_filter_marshals_the_five_standard_params() {
        let params = BeerFilter::default().query_params();
        assert_eq!(
            params,
            vec![
                ("page", "0".to_string()),
                ("size", "20".to_string()),
                ("sortField", "id".to_string()),
                ("sortDirection", "ASC".to_string()),
            ]
        );
    }

    #[test]
    fn search_fields_appear_only_when_set() {
        let filter = BeerFilter {
            beer_name: Some("Galaxy".to_string()),
            beer_style: Some(BeerStyle::Ipa),
            ..BeerFilter::default()
        };
        let params = filter.query_params();
        assert!(params.contains(&("beerName", "Galaxy".to_string())));
        assert!(params.contains(&("beerStyle", "IPA".to_string())));
    }

    #[test]
    fn changing_a_search_field_resets_the_page() {
        let filter = BeerFilter {
            page: 7,
            ..BeerFilter::default()
        };
        let next = apply_update(
            &filter,
            BeerFilterUpdate {
                beer_name: Some(Some("Stout".to_string())),
                ..BeerFilterUpdate::default()
            },
        );
        assert_eq!(next.page, 0);
        assert_eq!(next.beer_name.as_deref(), Some("Stout"));
    }

    #[test]
    fn clearing_a_search_field_also_resets_the_page() {
        let filter = BeerFilter {
            page: 3,
            beer_style: Some(BeerStyle::Stout),
            ..BeerFilter::default()
        };
        let next = apply_update(
            &filter,
            BeerFilterUpdate {
                beer_style: Some(None),
                ..BeerFilterUpdate::default()
            },
        );
        assert_eq!(next.page, 0);
        assert_eq!(next.beer_style, None);
    }

    #[test]
    fn page_only_update_keeps_everything_else() {
        let filter = BeerFilter {
            page: 1,
            beer_name: Some("Porter".to_string()),
            sort_direction: SortDirection::Desc,
            ..BeerFilter::default()
        };
        let next = apply_update(&filter, BeerFilterUpdate::page(2));
        assert_eq!(next.page, 2);
        assert_eq!(next.beer_name.as_deref(), Some("Porter"));
        assert_eq!(next.sort_direction, SortDirection::Desc);
    }

    #[test]
    fn changing_the_sort_resets_the_page() {
        let filter = CustomerFilter {
            page: 4,
            ..CustomerFilter::default()
        };
        let next = apply_update(
            &filter,
            CustomerFilterUpdate {
                sort_field: Some("customerName".to_string()),
                ..CustomerFilterUpdate::default()
            },
        );
        assert_eq!(next.page, 0);
        assert_eq!(next.sort_field, "customerName");
    }

    #[test]
    fn order_filter_marshals_customer_and_status() {
        let filter = BeerOrderFilter {
            customer_id: Some(CustomerId(42)),
            order_status: Some(OrderStatus::PickedUp),
            ..BeerOrderFilter::default()
        };
        let params = filter.query_params();
        assert!(params.contains(&("customerId", "42".to_string())));
        assert!(params.contains(&("orderStatus", "PICKED_UP".to_string())));
    }

    #[test]
    fn order_status_progression_stops_at_terminal_states() {
        assert_eq!(OrderStatus::New.next(), Some(OrderStatus::Pending));
        assert_eq!(OrderStatus::PickedUp.next(), Some(OrderStatus::Delivered));
        assert_eq!(OrderStatus::Delivered.next(), None);
        assert_eq!(OrderStatus::Cancelled.next(), None);
        assert!(OrderStatus::Cancelled.is_terminal());
        assert!(!OrderStatus::Ready.is_terminal());
    }

    #[test]
    fn enums_round_trip_through_their_wire_names() {
        for style in BeerStyle::ALL {
            assert_eq!(BeerStyle::from_wire(style.wire_name()), Some(style));
        }
        for status in OrderStatus::ALL {
            assert_eq!(OrderStatus::from_wire(status.wire_name()), Some(status));
        }
        assert_eq!(BeerStyle::from_wire("PILSNER"), None);
    }
}
