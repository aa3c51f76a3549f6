use std::rc::Rc;

use common::client::MetricsPanel;
use gloo_timers::callback::Interval;
use yew::prelude::*;
use yew_router::prelude::*;

use super::stats::MetricCards;
use crate::api_client::{catalog, forecast};
use crate::settings;
use crate::ui::error::ErrorDisplay;
use crate::ui::loading::LoadingSpinner;
use crate::ui::toast::ToastContext;
use crate::Route;

#[derive(Default, PartialEq)]
struct PanelState {
    panel: MetricsPanel,
    loaded: bool,
}

enum PanelAction {
    Replace(MetricsPanel),
    Refresh,
}

impl Reducible for PanelState {
    type Action = PanelAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            PanelAction::Replace(panel) => Rc::new(Self { panel, loaded: true }),
            PanelAction::Refresh => Rc::new(Self {
                panel: self.panel.refreshed(),
                loaded: self.loaded,
            }),
        }
    }
}

async fn load_metrics() -> Result<MetricsPanel, String> {
    let health = forecast::get_health().await?;
    let centers = catalog::get_centers().await?;
    let items = catalog::get_items(None).await?;

    let mut panel = MetricsPanel::new();
    panel.set("Service", health.status);
    panel.set("Distribution centers", centers.count.to_string());
    panel.set("Items", items.count.to_string());
    panel.set("History records", health.history_records.to_string());
    panel.set("Catalog source", health.catalog_source);
    Ok(panel)
}

#[function_component(Dashboard)]
pub fn dashboard() -> Html {
    let state = use_reducer(PanelState::default);
    let error = use_state(|| None::<String>);
    let toast_ctx = use_context::<ToastContext>();

    let reload = {
        let state = state.clone();
        let error = error.clone();
        use_callback((), move |_: (), _| {
            let state = state.clone();
            let error = error.clone();
            let toast_ctx = toast_ctx.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match load_metrics().await {
                    Ok(panel) => {
                        error.set(None);
                        state.dispatch(PanelAction::Replace(panel));
                    }
                    Err(err) => {
                        if let Some(toast_ctx) = &toast_ctx {
                            toast_ctx.show_error(err.clone());
                        }
                        error.set(Some(err));
                    }
                }
            });
        })
    };

    {
        let reload = reload.clone();
        use_effect_with((), move |_| {
            reload.emit(());
            || ()
        });
    }

    // Presentation-only refresh of what is on screen
    {
        let state = state.clone();
        use_effect_with((), move |_| {
            let refresh_ms = settings::get_settings().metrics_refresh_ms;
            let interval = Interval::new(refresh_ms, move || {
                log::trace!("Refreshing dashboard metrics");
                state.dispatch(PanelAction::Refresh);
            });
            move || drop(interval)
        });
    }

    let body = if let Some(err) = (*error).clone() {
        let reload = reload.clone();
        html! { <ErrorDisplay message={err} on_retry={Some(reload)} /> }
    } else if !state.loaded {
        html! { <LoadingSpinner /> }
    } else {
        html! { <MetricCards panel={state.panel.clone()} /> }
    };

    html! {
        <>
            <div class="flex justify-between items-center mb-6">
                <div>
                    <h2 class="text-2xl font-bold">{"Seafood Demand Forecasting"}</h2>
                    <p class="text-sm text-gray-500">{"Daily forecasts per center and item, plus monthly planning from your own history"}</p>
                </div>
                <button class="btn btn-ghost btn-sm" onclick={Callback::from(move |_| reload.emit(()))}>
                    <i class="fas fa-sync"></i>{" Reload"}
                </button>
            </div>
            {body}
            <div class="grid grid-cols-1 md:grid-cols-2 gap-4 mt-6">
                <div class="card bg-base-100 shadow">
                    <div class="card-body">
                        <h3 class="card-title"><i class="fas fa-chart-line"></i>{"Quick Forecast"}</h3>
                        <p>{"Pick a center, an item and a horizon to see the daily demand forecast."}</p>
                        <div class="card-actions justify-end">
                            <Link<Route> to={Route::Forecast} classes="btn btn-primary btn-sm">{"Open"}</Link<Route>>
                        </div>
                    </div>
                </div>
                <div class="card bg-base-100 shadow">
                    <div class="card-body">
                        <h3 class="card-title"><i class="fas fa-file-csv"></i>{"Upload & Analyze"}</h3>
                        <p>{"Upload a CSV of historical demand to get a monthly forecast and an inventory recommendation."}</p>
                        <div class="card-actions justify-end">
                            <Link<Route> to={Route::Analyzer} classes="btn btn-primary btn-sm">{"Open"}</Link<Route>>
                        </div>
                    </div>
                </div>
            </div>
        </>
    }
}
