use yew::prelude::*;
use std::future::Future;
use std::rc::Rc;
use crate::hooks::{FetchState, Generation};
use crate::ui::toast::ToastContext;

/// Fetches on mount and whenever `deps` change; returns the state plus a refetch callback.
///
/// Failures are stored in the state and shown once as an error toast.
/// Responses to superseded requests are dropped, so a slow reply for old
/// `deps` never overwrites the current one.
#[hook]
pub fn use_fetch<T, D, F, Fut>(
    deps: D,
    fetch_fn: F,
) -> (UseStateHandle<FetchState<T>>, Callback<()>)
where
    T: 'static,
    D: PartialEq + Clone + 'static,
    F: Fn(D) -> Fut + 'static,
    Fut: Future<Output = Result<T, String>> + 'static,
{
    let fetch_state = use_state(|| FetchState::Loading);
    let toast_ctx = use_context::<ToastContext>();
    let fetch_fn = Rc::new(fetch_fn);
    let generation = use_memo((), |_| Generation::default());

    let refetch = {
        let fetch_state = fetch_state.clone();
        use_callback(deps.clone(), move |_: (), deps| {
            let fetch_state = fetch_state.clone();
            let toast_ctx = toast_ctx.clone();
            let fut = (*fetch_fn)(deps.clone());
            let ticket = generation.next();

            fetch_state.set(FetchState::Loading);

            wasm_bindgen_futures::spawn_local(async move {
                let result = fut.await;
                if !ticket.is_current() {
                    return;
                }
                if let (Err(err), Some(toast_ctx)) = (&result, &toast_ctx) {
                    toast_ctx.show_error(err.clone());
                }
                fetch_state.set(FetchState::from(result));
            });
        })
    };

    {
        let refetch = refetch.clone();
        use_effect_with(deps, move |_| {
            refetch.emit(());
            || ()
        });
    }

    (fetch_state, refetch)
}
