use payloads::{CustomerFilter, CustomerFilterUpdate, CustomerId, requests, responses};
use yew::prelude::*;

use crate::get_api_client;
use crate::hooks::use_entity_detail::{
    EntityDetailHandle, MutationEffect, spawn_mutation, use_entity_detail,
};
use crate::hooks::use_paged_list::{PagedListHandle, use_paged_list};

pub type CustomerListHandle =
    PagedListHandle<responses::Customer, CustomerFilter, CustomerFilterUpdate>;

/// Hook for the paginated, filterable customer list.
#[hook]
pub fn use_customers(initial_filter: CustomerFilter) -> CustomerListHandle {
    use_paged_list(initial_filter, |filter: CustomerFilter| async move {
        get_api_client()
            .list_customers(&filter)
            .await
            .map_err(|e| e.to_string())
    })
}

/// Hook return type for a single customer with its mutations.
pub struct CustomerHandle {
    pub customer: Option<responses::Customer>,
    pub is_loading: bool,
    pub error: Option<String>,
    pub refetch: Callback<()>,
    pub update: Callback<(requests::NewCustomer, Callback<bool>)>,
    pub patch: Callback<(requests::CustomerPatch, Callback<bool>)>,
    pub delete: Callback<Callback<bool>>,
}

/// Hook for a single customer. `None` means "do not fetch" (create mode).
#[hook]
pub fn use_customer(customer_id: Option<CustomerId>) -> CustomerHandle {
    let detail: EntityDetailHandle<responses::Customer> =
        use_entity_detail(customer_id, |id| async move {
            get_api_client()
                .get_customer(id)
                .await
                .map_err(|e| e.to_string())
        });

    let update = {
        let state = detail.state.clone();
        Callback::from(
            move |(customer, on_done): (requests::NewCustomer, Callback<bool>)| {
                let Some(id) = customer_id else { return };
                spawn_mutation(
                    state.clone(),
                    async move {
                        get_api_client()
                            .update_customer(id, &customer)
                            .await
                            .map(MutationEffect::Replace)
                            .map_err(|e| e.to_string())
                    },
                    on_done,
                );
            },
        )
    };

    let patch = {
        let state = detail.state.clone();
        Callback::from(
            move |(patch, on_done): (requests::CustomerPatch, Callback<bool>)| {
                let Some(id) = customer_id else { return };
                spawn_mutation(
                    state.clone(),
                    async move {
                        get_api_client()
                            .patch_customer(id, &patch)
                            .await
                            .map(MutationEffect::Replace)
                            .map_err(|e| e.to_string())
                    },
                    on_done,
                );
            },
        )
    };

    let delete = {
        let state = detail.state.clone();
        Callback::from(move |on_done: Callback<bool>| {
            let Some(id) = customer_id else { return };
            spawn_mutation(
                state.clone(),
                async move {
                    get_api_client()
                        .delete_customer(id)
                        .await
                        .map(|()| MutationEffect::Clear)
                        .map_err(|e| e.to_string())
                },
                on_done,
            );
        })
    };

    CustomerHandle {
        customer: detail.entity.clone(),
        is_loading: detail.is_loading,
        error: detail.error.clone(),
        refetch: detail.refetch.clone(),
        update,
        patch,
        delete,
    }
}
