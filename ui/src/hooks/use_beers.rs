use payloads::{BeerFilter, BeerFilterUpdate, BeerId, requests, responses};
use yew::prelude::*;

use crate::get_api_client;
use crate::hooks::use_entity_detail::{
    EntityDetailHandle, MutationEffect, spawn_mutation, use_entity_detail,
};
use crate::hooks::use_paged_list::{PagedListHandle, use_paged_list};

pub type BeerListHandle =
    PagedListHandle<responses::Beer, BeerFilter, BeerFilterUpdate>;

/// Hook for the paginated, filterable beer list.
#[hook]
pub fn use_beers(initial_filter: BeerFilter) -> BeerListHandle {
    use_paged_list(initial_filter, |filter: BeerFilter| async move {
        get_api_client()
            .list_beers(&filter)
            .await
            .map_err(|e| e.to_string())
    })
}

/// Hook return type for a single beer with its mutations. Each mutation
/// reports completion success through the supplied callback so views can
/// navigate after a save or delete.
pub struct BeerHandle {
    pub beer: Option<responses::Beer>,
    pub is_loading: bool,
    pub error: Option<String>,
    pub refetch: Callback<()>,
    pub update: Callback<(requests::NewBeer, Callback<bool>)>,
    pub patch: Callback<(requests::BeerPatch, Callback<bool>)>,
    pub delete: Callback<Callback<bool>>,
}

/// Hook for a single beer. `None` means "do not fetch" (create mode).
#[hook]
pub fn use_beer(beer_id: Option<BeerId>) -> BeerHandle {
    let detail: EntityDetailHandle<responses::Beer> =
        use_entity_detail(beer_id, |id| async move {
            get_api_client()
                .get_beer(id)
                .await
                .map_err(|e| e.to_string())
        });

    let update = {
        let state = detail.state.clone();
        Callback::from(
            move |(beer, on_done): (requests::NewBeer, Callback<bool>)| {
                let Some(id) = beer_id else { return };
                spawn_mutation(
                    state.clone(),
                    async move {
                        get_api_client()
                            .update_beer(id, &beer)
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
            move |(patch, on_done): (requests::BeerPatch, Callback<bool>)| {
                let Some(id) = beer_id else { return };
                spawn_mutation(
                    state.clone(),
                    async move {
                        get_api_client()
                            .patch_beer(id, &patch)
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
            let Some(id) = beer_id else { return };
            spawn_mutation(
                state.clone(),
                async move {
                    get_api_client()
                        .delete_beer(id)
                        .await
                        .map(|()| MutationEffect::Clear)
                        .map_err(|e| e.to_string())
                },
                on_done,
            );
        })
    };

    BeerHandle {
        beer: detail.entity.clone(),
        is_loading: detail.is_loading,
        error: detail.error.clone(),
        refetch: detail.refetch.clone(),
        update,
        patch,
        delete,
    }
}
