use std::future::Future;
use std::rc::Rc;

use yew::prelude::*;

/// Generic detail hook return type for a single entity.
pub struct EntityDetailHandle<T> {
    /// The held entity. Populated by fetch and by echo-back mutations,
    /// cleared only by a successful delete.
    pub entity: Option<T>,
    pub is_loading: bool,
    pub error: Option<String>,
    pub refetch: Callback<()>,
    pub(crate) state: DetailState<T>,
}

/// The state handles a detail hook owns, shared with its mutation callbacks.
#[derive(Clone)]
pub(crate) struct DetailState<T> {
    pub entity: UseStateHandle<Option<T>>,
    pub error: UseStateHandle<Option<String>>,
    pub is_loading: UseStateHandle<bool>,
}

/// What a successful mutation does to the held entity.
pub(crate) enum MutationEffect<T> {
    /// Replace the entity with the server's returned representation.
    Replace(T),
    /// Drop the entity (successful delete).
    Clear,
}

/// The settle rule shared by every detail mutation: success applies the
/// effect and clears the error; failure records the error and leaves the
/// entity exactly as it was. In particular a failed delete must not null
/// out the entity.
pub(crate) fn settle_mutation<T>(
    entity: Option<T>,
    result: Result<MutationEffect<T>, String>,
) -> (Option<T>, Option<String>) {
    match result {
        Ok(MutationEffect::Replace(next)) => (Some(next), None),
        Ok(MutationEffect::Clear) => (None, None),
        Err(e) => (entity, Some(e)),
    }
}

/// Run a mutation against a detail hook's state. `on_done` fires after the
/// state has settled, with `true` on success, so callers can navigate away.
pub(crate) fn spawn_mutation<T, Fut>(
    state: DetailState<T>,
    fut: Fut,
    on_done: Callback<bool>,
) where
    T: Clone + 'static,
    Fut: Future<Output = Result<MutationEffect<T>, String>> + 'static,
{
    yew::platform::spawn_local(async move {
        state.is_loading.set(true);
        state.error.set(None);

        let result = fut.await;
        if let Err(e) = &result {
            tracing::error!("mutation failed: {}", e);
        }
        let succeeded = result.is_ok();
        let (entity, error) = settle_mutation((*state.entity).clone(), result);
        state.entity.set(entity);
        state.error.set(error);
        state.is_loading.set(false);

        on_done.emit(succeeded);
    });
}

/// Generic detail hook composer.
///
/// A `None` id is the "do not fetch" sentinel: the hook starts non-loading
/// with no entity and never calls the fetch function. Mutations are layered
/// on by the per-resource hooks via [`spawn_mutation`].
#[hook]
pub fn use_entity_detail<T, Id, Fetch, Fut>(
    id: Option<Id>,
    fetch: Fetch,
) -> EntityDetailHandle<T>
where
    T: Clone + 'static,
    Id: Copy + PartialEq + 'static,
    Fetch: Fn(Id) -> Fut + 'static,
    Fut: Future<Output = Result<T, String>> + 'static,
{
    let entity = use_state(|| None::<T>);
    let error = use_state(|| None::<String>);
    let is_loading = use_state(|| false);

    let refetch = {
        let entity = entity.clone();
        let error = error.clone();
        let is_loading = is_loading.clone();
        let fetch = Rc::new(fetch);

        use_callback(id, move |_: (), id| {
            let Some(id) = *id else {
                return;
            };
            let entity = entity.clone();
            let error = error.clone();
            let is_loading = is_loading.clone();
            let fetch = fetch.clone();

            yew::platform::spawn_local(async move {
                is_loading.set(true);
                error.set(None);

                match fetch(id).await {
                    Ok(data) => {
                        entity.set(Some(data));
                        error.set(None);
                    }
                    Err(e) => {
                        tracing::error!("detail fetch failed: {}", e);
                        error.set(Some(e));
                    }
                }

                is_loading.set(false);
            });
        })
    };

    // Auto-fetch on mount and when the id changes.
    {
        let refetch = refetch.clone();
        use_effect_with(id, move |_| {
            refetch.emit(());
        });
    }

    let state = DetailState {
        entity: entity.clone(),
        error: error.clone(),
        is_loading: is_loading.clone(),
    };

    EntityDetailHandle {
        entity: (*entity).clone(),
        is_loading: *is_loading,
        error: (*error).clone(),
        refetch: Callback::from(move |_| refetch.emit(())),
        state,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn echo_back_replaces_the_entity_with_the_server_payload() {
        let (entity, error) =
            settle_mutation(Some("stale"), Ok(MutationEffect::Replace("fresh")));
        assert_eq!(entity, Some("fresh"));
        assert_eq!(error, None);
    }

    #[test]
    fn successful_delete_clears_the_entity() {
        let (entity, error) =
            settle_mutation(Some("record"), Ok::<_, String>(MutationEffect::Clear));
        assert_eq!(entity, None);
        assert_eq!(error, None);
    }

    #[test]
    fn failed_mutation_keeps_the_entity_and_records_the_error() {
        let (entity, error) = settle_mutation(
            Some("record"),
            Err::<MutationEffect<_>, _>("500 from server".to_string()),
        );
        assert_eq!(entity, Some("record"));
        assert_eq!(error.as_deref(), Some("500 from server"));
    }

    #[test]
    fn a_failed_mutation_with_no_entity_stays_empty() {
        let (entity, error) = settle_mutation(
            None::<&str>,
            Err::<MutationEffect<_>, _>("timeout".to_string()),
        );
        assert_eq!(entity, None);
        assert!(error.is_some());
    }
}
