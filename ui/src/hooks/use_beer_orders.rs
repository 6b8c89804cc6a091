use payloads::{BeerOrderFilter, BeerOrderFilterUpdate, BeerOrderId, OrderStatus, responses};
use yew::prelude::*;

use crate::get_api_client;
use crate::hooks::use_entity_detail::{
    EntityDetailHandle, MutationEffect, spawn_mutation, use_entity_detail,
};
use crate::hooks::use_paged_list::{PagedListHandle, use_paged_list};

pub type BeerOrderListHandle =
    PagedListHandle<responses::BeerOrder, BeerOrderFilter, BeerOrderFilterUpdate>;

/// Hook for the paginated, filterable order list.
#[hook]
pub fn use_beer_orders(initial_filter: BeerOrderFilter) -> BeerOrderListHandle {
    use_paged_list(initial_filter, |filter: BeerOrderFilter| async move {
        get_api_client()
            .list_beer_orders(&filter)
            .await
            .map_err(|e| e.to_string())
    })
}

/// Hook return type for a single order. Status transitions and cancellation
/// are requests to the backend; whatever order comes back replaces the held
/// one, so the UI always shows the server's view of the workflow.
pub struct BeerOrderHandle {
    pub order: Option<responses::BeerOrder>,
    pub is_loading: bool,
    pub error: Option<String>,
    pub refetch: Callback<()>,
    pub update_status: Callback<(OrderStatus, Callback<bool>)>,
    pub cancel: Callback<Callback<bool>>,
    pub delete: Callback<Callback<bool>>,
}

/// Hook for a single order. `None` means "do not fetch" (create mode).
#[hook]
pub fn use_beer_order(order_id: Option<BeerOrderId>) -> BeerOrderHandle {
    let detail: EntityDetailHandle<responses::BeerOrder> =
        use_entity_detail(order_id, |id| async move {
            get_api_client()
                .get_beer_order(id)
                .await
                .map_err(|e| e.to_string())
        });

    let update_status = {
        let state = detail.state.clone();
        Callback::from(
            move |(status, on_done): (OrderStatus, Callback<bool>)| {
                let Some(id) = order_id else { return };
                spawn_mutation(
                    state.clone(),
                    async move {
                        get_api_client()
                            .update_beer_order_status(id, status)
                            .await
                            .map(MutationEffect::Replace)
                            .map_err(|e| e.to_string())
                    },
                    on_done,
                );
            },
        )
    };

    let cancel = {
        let state = detail.state.clone();
        Callback::from(move |on_done: Callback<bool>| {
            let Some(id) = order_id else { return };
            spawn_mutation(
                state.clone(),
                async move {
                    get_api_client()
                        .cancel_beer_order(id)
                        .await
                        .map(MutationEffect::Replace)
                        .map_err(|e| e.to_string())
                },
                on_done,
            );
        })
    };

    let delete = {
        let state = detail.state.clone();
        Callback::from(move |on_done: Callback<bool>| {
            let Some(id) = order_id else { return };
            spawn_mutation(
                state.clone(),
                async move {
                    get_api_client()
                        .delete_beer_order(id)
                        .await
                        .map(|()| MutationEffect::Clear)
                        .map_err(|e| e.to_string())
                },
                on_done,
            );
        })
    };

    BeerOrderHandle {
        order: detail.entity.clone(),
        is_loading: detail.is_loading,
        error: detail.error.clone(),
        refetch: detail.refetch.clone(),
        update_status,
        cancel,
        delete,
    }
}
