use std::future::Future;
use std::rc::Rc;

use payloads::{FilterUpdate, PageFilter, apply_update, responses::Page};
use yew::prelude::*;

/// Generic list hook return type: one page of a paginated resource plus the
/// filter state that produced it.
pub struct PagedListHandle<T, F, U> {
    /// The most recently fetched page, or `None` before the first load.
    pub page: Option<Page<T>>,
    pub is_loading: bool,
    pub error: Option<String>,
    /// The filter currently driving the fetch.
    pub filter: F,
    /// Merge a partial filter change. Any change beyond the page number
    /// resets the page to 0 before the fetch fires.
    pub update_filter: Callback<U>,
    pub refetch: Callback<()>,
}

impl<T, F, U> PagedListHandle<T, F, U> {
    /// Returns true if this is the initial load (no data, no error, loading)
    pub fn is_initial_loading(&self) -> bool {
        self.is_loading && self.page.is_none() && self.error.is_none()
    }
}

/// Generic list hook composer.
///
/// Fetches on mount and again whenever the filter changes. Each fetch is
/// tagged with a monotonically increasing token; a response that settles
/// after a newer fetch was issued is dropped, so rapid filter changes
/// resolve last-started-wins instead of last-arrived-wins.
///
/// # Example
///
/// ```ignore
/// #[hook]
/// pub fn use_beers(initial_filter: BeerFilter) -> BeerListHandle {
///     use_paged_list(initial_filter, |filter: BeerFilter| async move {
///         get_api_client()
///             .list_beers(&filter)
///             .await
///             .map_err(|e| e.to_string())
///     })
/// }
/// ```
#[hook]
pub fn use_paged_list<T, F, U, Fetch, Fut>(
    initial_filter: F,
    fetch: Fetch,
) -> PagedListHandle<T, F, U>
where
    T: Clone + 'static,
    F: PageFilter + 'static,
    U: FilterUpdate<F> + 'static,
    Fetch: Fn(F) -> Fut + 'static,
    Fut: Future<Output = Result<Page<T>, String>> + 'static,
{
    let page = use_state(|| None::<Page<T>>);
    let error = use_state(|| None::<String>);
    let is_loading = use_state(|| true);
    let filter = use_state(move || initial_filter);
    let refresh = use_state(|| 0u64);
    let latest_request = use_mut_ref(|| 0u64);

    // Fetch on mount, on every filter change, and on refetch.
    {
        let page = page.clone();
        let error = error.clone();
        let is_loading = is_loading.clone();
        let latest_request = latest_request.clone();
        let fetch = Rc::new(fetch);

        use_effect_with(((*filter).clone(), *refresh), move |(filter, _)| {
            let token = {
                let mut latest = latest_request.borrow_mut();
                *latest += 1;
                *latest
            };
            let filter = filter.clone();
            let fetch = fetch.clone();

            yew::platform::spawn_local(async move {
                is_loading.set(true);
                error.set(None);

                let result = fetch(filter).await;

                // A newer fetch started while this one was in flight; its
                // effect owns the loading flag now, so drop this response.
                if *latest_request.borrow() != token {
                    return;
                }

                match result {
                    Ok(data) => {
                        page.set(Some(data));
                        error.set(None);
                    }
                    Err(e) => {
                        tracing::error!("list fetch failed: {}", e);
                        error.set(Some(e));
                    }
                }

                is_loading.set(false);
            });
        });
    }

    let update_filter = {
        let filter = filter.clone();
        Callback::from(move |update: U| {
            filter.set(apply_update(&*filter, update));
        })
    };

    let refetch = {
        let refresh = refresh.clone();
        Callback::from(move |_| refresh.set(*refresh + 1))
    };

    PagedListHandle {
        page: (*page).clone(),
        is_loading: *is_loading,
        error: (*error).clone(),
        filter: (*filter).clone(),
        update_filter,
        refetch,
    }
}
