use common::client::LoadingTracker;
use yew::prelude::*;

/// Handle to the full-screen loading overlay.
///
/// Call `begin` right before a request and `finish` once it settles.
#[derive(Clone, PartialEq)]
pub struct LoadingContext {
    begin: Callback<String>,
    finish: Callback<()>,
}

impl LoadingContext {
    pub fn begin(&self, message: impl Into<String>) {
        self.begin.emit(message.into());
    }

    pub fn finish(&self) {
        self.finish.emit(());
    }
}

#[derive(Properties, PartialEq)]
pub struct LoadingProviderProps {
    pub children: Children,
}

#[function_component(LoadingProvider)]
pub fn loading_provider(props: &LoadingProviderProps) -> Html {
    let tracker = use_mut_ref(LoadingTracker::new);
    let update = use_force_update();

    let begin = {
        let tracker = tracker.clone();
        let update = update.clone();
        use_callback((), move |message: String, _| {
            tracker.borrow_mut().begin(message);
            update.force_update();
        })
    };

    let finish = {
        let tracker = tracker.clone();
        let update = update.clone();
        use_callback((), move |_: (), _| {
            tracker.borrow_mut().finish();
            update.force_update();
        })
    };

    let context = LoadingContext { begin, finish };
    let overlay = {
        let tracker = tracker.borrow();
        if tracker.is_visible() {
            html! {
                <div class="fixed inset-0 z-[60] flex flex-col items-center justify-center gap-4 bg-base-300/70">
                    <span class="loading loading-spinner loading-lg"></span>
                    {if let Some(message) = tracker.message() {
                        html! { <p class="text-sm font-semibold">{message}</p> }
                    } else {
                        html! {}
                    }}
                </div>
            }
        } else {
            html! {}
        }
    };

    html! {
        <ContextProvider<LoadingContext> context={context}>
            {props.children.clone()}
            {overlay}
        </ContextProvider<LoadingContext>>
    }
}

/// Centered inline spinner for sections that load on their own
#[function_component(LoadingSpinner)]
pub fn loading_spinner() -> Html {
    html! {
        <div class="flex justify-center items-center py-12">
            <span class="loading loading-spinner loading-lg"></span>
        </div>
    }
}
