use common::{CentersResponse, ForecastResponse, ItemsResponse};
use yew::prelude::*;

use super::chart::ForecastChart;
use super::controls::{ForecastControls, Selection};
use crate::api_client::{catalog, forecast};
use crate::hooks::FetchState;
use crate::ui::fetch_hook::use_fetch;
use crate::ui::loading::LoadingContext;
use crate::ui::toast::ToastContext;

const DEFAULT_DAYS: u32 = 30;

fn summary_cards(response: &ForecastResponse) -> Html {
    let series = response.series();
    let total: f64 = series.iter().map(|p| p.forecast).sum();
    let average = if series.is_empty() { 0.0 } else { total / series.len() as f64 };
    let peak = series
        .iter()
        .max_by(|a, b| a.forecast.total_cmp(&b.forecast))
        .map(|p| format!("{:.0} on {}", p.forecast, p.date.format("%d %b")))
        .unwrap_or_else(|| "-".to_string());

    html! {
        <div class="grid grid-cols-1 md:grid-cols-3 gap-4 mb-6">
            <div class="stats shadow bg-base-100">
                <div class="stat">
                    <div class="stat-title">{"Total demand"}</div>
                    <div class="stat-value text-primary text-2xl">{format!("{:.0}", total)}</div>
                    <div class="stat-desc">{format!("next {} days", response.forecast_days)}</div>
                </div>
            </div>
            <div class="stats shadow bg-base-100">
                <div class="stat">
                    <div class="stat-title">{"Daily average"}</div>
                    <div class="stat-value text-2xl">{format!("{:.1}", average)}</div>
                </div>
            </div>
            <div class="stats shadow bg-base-100">
                <div class="stat">
                    <div class="stat-title">{"Peak day"}</div>
                    <div class="stat-value text-2xl">{peak}</div>
                    <div class="stat-desc">{response.model_used.label()}</div>
                </div>
            </div>
        </div>
    }
}

#[function_component(Forecast)]
pub fn forecast_page() -> Html {
    let toast_ctx = use_context::<ToastContext>();
    let loading_ctx = use_context::<LoadingContext>();
    let selection = use_state(|| Selection {
        days: DEFAULT_DAYS,
        ..Selection::default()
    });
    let result = use_state(|| FetchState::<ForecastResponse>::NotStarted);

    let (centers, _) = use_fetch((), |_| catalog::get_centers());
    let (items, _) = use_fetch(selection.center.clone(), |center: Option<String>| async move {
        match center {
            Some(center) => catalog::get_items(Some(&center)).await,
            None => Ok(ItemsResponse::default()),
        }
    });

    let on_change = {
        let selection = selection.clone();
        Callback::from(move |next: Selection| selection.set(next))
    };

    let on_submit = {
        let selection = selection.clone();
        let result = result.clone();
        Callback::from(move |_| {
            let current = (*selection).clone();
            let (Some(center), Some(item)) = (current.center.clone(), current.item.clone()) else {
                if let Some(toast_ctx) = &toast_ctx {
                    toast_ctx.show_warning("Please select a center and an item");
                }
                return;
            };
            // The upper limit is configured server-side and reported as an error
            if current.days == 0 {
                if let Some(toast_ctx) = &toast_ctx {
                    toast_ctx.show_warning("Forecast horizon must be at least 1 day");
                }
                return;
            }

            if let Some(loading_ctx) = &loading_ctx {
                loading_ctx.begin("Generating forecast...");
            }
            result.set(FetchState::Loading);

            let result = result.clone();
            let toast_ctx = toast_ctx.clone();
            let loading_ctx = loading_ctx.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let response =
                    forecast::get_forecast(&center, &item, current.days, current.model).await;
                if let Some(loading_ctx) = &loading_ctx {
                    loading_ctx.finish();
                }
                if let Some(toast_ctx) = &toast_ctx {
                    match &response {
                        Ok(_) => {
                            toast_ctx.show_success(format!("Forecast ready for {} / {}", center, item))
                        }
                        Err(err) => toast_ctx.show_error(err.clone()),
                    }
                }
                result.set(FetchState::from(response));
            });
        })
    };

    let center_names = centers
        .data()
        .map(|c: &CentersResponse| c.centers.clone())
        .unwrap_or_default();
    let item_names = items.data().map(|i| i.items.clone()).unwrap_or_default();

    let output = match &*result {
        FetchState::Success(response) => html! {
            <>
                {summary_cards(response)}
                <div class="card bg-base-100 shadow">
                    <div class="card-body">
                        <ForecastChart response={response.clone()} />
                    </div>
                </div>
            </>
        },
        FetchState::NotStarted => html! {
            <div class="alert">
                <i class="fas fa-info-circle"></i>
                <span>{"Choose a center and an item, then generate a forecast."}</span>
            </div>
        },
        // Errors are reported through toasts; the overlay covers loading
        FetchState::Loading | FetchState::Error(_) => html! {},
    };

    html! {
        <>
            <ForecastControls
                centers={center_names}
                items={item_names}
                selection={(*selection).clone()}
                {on_change}
                {on_submit}
            />
            {if centers.is_loading() {
                html! { <p class="text-sm text-gray-500 mb-4">{"Loading centers..."}</p> }
            } else {
                html! {}
            }}
            {output}
        </>
    }
}
