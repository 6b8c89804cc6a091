pub mod beers;
pub mod customers;
pub mod home;
pub mod not_found;
pub mod orders;

pub use beers::BeersPage;
pub use customers::CustomersPage;
pub use home::HomePage;
pub use not_found::NotFoundPage;
pub use orders::OrdersPage;

/// Which view of a resource section is showing. Each page owns one of
/// these and swaps subviews in place instead of adding routes per view.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ResourceView<Id> {
    List,
    Detail(Id),
    Create,
    Edit(Id),
}

impl<Id> ResourceView<Id> {
    /// Where a subview lands when it finishes. Back, cancel, and a
    /// successful save all return to the list.
    pub fn finished() -> Self {
        ResourceView::List
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finishing_any_subview_returns_to_the_list() {
        assert_eq!(ResourceView::<i64>::finished(), ResourceView::List);
    }
}
