use common::client::{preview_csv, validate_csv_file, CsvPreview, UploadRejection};
use common::{AnalysisSummary, DatasetOverview};
use wasm_bindgen_futures::JsFuture;
use web_sys::{File, HtmlInputElement};
use yew::prelude::*;

use super::preview::PreviewTable;
use super::summary::{OverviewCard, SummaryCards};
use super::upload_zone::UploadZone;
use crate::api_client::upload;
use crate::hooks::{FetchState, Generation};
use crate::ui::loading::LoadingContext;
use crate::ui::toast::ToastContext;

const DEFAULT_MONTHS: u32 = 12;

async fn read_text(file: &File) -> Result<String, String> {
    let promise: js_sys::Promise = file.text();
    JsFuture::from(promise)
        .await
        .ok()
        .and_then(|value| value.as_string())
        .ok_or_else(|| format!("Could not read '{}'", file.name()))
}

#[function_component(Analyzer)]
pub fn analyzer() -> Html {
    let toast_ctx = use_context::<ToastContext>();
    let loading_ctx = use_context::<LoadingContext>();
    let file = use_state(|| None::<File>);
    let preview = use_state(|| None::<CsvPreview>);
    let months = use_state(|| DEFAULT_MONTHS);
    let summary = use_state(|| FetchState::<AnalysisSummary>::NotStarted);
    let overview = use_state(|| FetchState::<DatasetOverview>::NotStarted);
    let preview_generation = use_memo((), |_| Generation::default());

    let on_file = {
        let file = file.clone();
        let preview = preview.clone();
        let toast_ctx = toast_ctx.clone();
        Callback::from(move |selected: File| {
            // Any read still pending belongs to the previous file
            let ticket = preview_generation.next();
            let content_type = selected.type_();
            if let Err(rejection) = validate_csv_file(&selected.name(), Some(&content_type)) {
                log::warn!("Rejected upload before sending: {}", rejection);
                if let Some(toast_ctx) = &toast_ctx {
                    toast_ctx.show_error(rejection.to_string());
                }
                file.set(None);
                preview.set(None);
                return;
            }

            file.set(Some(selected.clone()));
            preview.set(None);
            let preview = preview.clone();
            let toast_ctx = toast_ctx.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let text = read_text(&selected).await;
                if !ticket.is_current() {
                    return;
                }
                match text {
                    Ok(text) => preview.set(Some(preview_csv(&text))),
                    Err(err) => {
                        preview.set(None);
                        if let Some(toast_ctx) = &toast_ctx {
                            toast_ctx.show_warning(err);
                        }
                    }
                }
            });
        })
    };

    let on_months = {
        let months = months.clone();
        Callback::from(move |e: Event| {
            let input = e.target_unchecked_into::<HtmlInputElement>();
            months.set(input.value().trim().parse::<u32>().unwrap_or(0));
        })
    };

    // Both actions refuse to send anything without a validated file
    let selected_file = {
        let file = file.clone();
        let toast_ctx = toast_ctx.clone();
        move || -> Option<File> {
            let selected = (*file).clone();
            if selected.is_none() {
                if let Some(toast_ctx) = &toast_ctx {
                    toast_ctx.show_warning(UploadRejection::MissingFile.to_string());
                }
            }
            selected
        }
    };

    let on_forecast = {
        let selected_file = selected_file.clone();
        let months = months.clone();
        let summary = summary.clone();
        let toast_ctx = toast_ctx.clone();
        let loading_ctx = loading_ctx.clone();
        Callback::from(move |_| {
            let Some(file) = selected_file() else {
                return;
            };
            let months = *months;
            // The upper limit is configured server-side and reported as an error
            if months == 0 {
                if let Some(toast_ctx) = &toast_ctx {
                    toast_ctx.show_warning("Forecast months must be at least 1");
                }
                return;
            }

            if let Some(loading_ctx) = &loading_ctx {
                loading_ctx.begin("Generating forecast...");
            }
            summary.set(FetchState::Loading);

            let summary = summary.clone();
            let toast_ctx = toast_ctx.clone();
            let loading_ctx = loading_ctx.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let result = upload::upload_forecast(&file, months).await;
                if let Some(loading_ctx) = &loading_ctx {
                    loading_ctx.finish();
                }
                if let Some(toast_ctx) = &toast_ctx {
                    match &result {
                        Ok(s) => toast_ctx.show_success(s.message.clone()),
                        Err(err) => toast_ctx.show_error(err.clone()),
                    }
                }
                summary.set(FetchState::from(result));
            });
        })
    };

    let on_analyze = {
        let overview = overview.clone();
        let toast_ctx = toast_ctx.clone();
        let loading_ctx = loading_ctx.clone();
        Callback::from(move |_| {
            let Some(file) = selected_file() else {
                return;
            };

            if let Some(loading_ctx) = &loading_ctx {
                loading_ctx.begin("Analyzing dataset...");
            }
            overview.set(FetchState::Loading);

            let overview = overview.clone();
            let toast_ctx = toast_ctx.clone();
            let loading_ctx = loading_ctx.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let result = upload::analyze_data(&file).await;
                if let Some(loading_ctx) = &loading_ctx {
                    loading_ctx.finish();
                }
                if let (Err(err), Some(toast_ctx)) = (&result, &toast_ctx) {
                    toast_ctx.show_error(err.clone());
                }
                overview.set(FetchState::from(result));
            });
        })
    };

    let file_name = (*file).as_ref().map(|f| f.name());

    html! {
        <div class="flex flex-col gap-6">
            <UploadZone {file_name} {on_file} />

            {if let Some(preview) = (*preview).clone() {
                html! {
                    <div class="card bg-base-100 shadow">
                        <div class="card-body">
                            <h3 class="card-title">{"Preview"}</h3>
                            <PreviewTable {preview} />
                        </div>
                    </div>
                }
            } else {
                html! {}
            }}

            <div class="card bg-base-100 shadow">
                <div class="card-body flex-row flex-wrap items-end gap-4">
                    <label class="form-control w-48">
                        <span class="label-text">{"Forecast months"}</span>
                        <input type="number" min="1" class="input input-bordered"
                            value={months.to_string()} onchange={on_months} />
                    </label>
                    <button class="btn btn-primary" onclick={on_forecast} disabled={summary.is_loading()}>
                        <i class="fas fa-magic"></i>{" Generate Forecast"}
                    </button>
                    <button class="btn btn-outline" onclick={on_analyze} disabled={overview.is_loading()}>
                        <i class="fas fa-search"></i>{" Analyze Dataset"}
                    </button>
                </div>
            </div>

            {if let Some(s) = summary.data() {
                html! { <SummaryCards summary={s.clone()} /> }
            } else {
                html! {}
            }}
            {if let Some(o) = overview.data() {
                html! { <OverviewCard overview={o.clone()} /> }
            } else {
                html! {}
            }}
        </div>
    }
}
