use common::ModelKind;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

/// Horizons offered as shortcuts next to the free input.
const HORIZON_PRESETS: [u32; 3] = [7, 30, 90];

#[derive(Clone, PartialEq, Default)]
pub struct Selection {
    pub center: Option<String>,
    pub item: Option<String>,
    pub days: u32,
    pub model: ModelKind,
}

#[derive(Properties, PartialEq)]
pub struct Props {
    pub centers: Vec<String>,
    pub items: Vec<String>,
    pub selection: Selection,
    pub on_change: Callback<Selection>,
    pub on_submit: Callback<()>,
}

fn select_value(e: &Event) -> String {
    e.target_unchecked_into::<HtmlSelectElement>().value()
}

#[function_component(ForecastControls)]
pub fn forecast_controls(props: &Props) -> Html {
    let selection = props.selection.clone();

    let on_center = {
        let selection = selection.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |e: Event| {
            let center = select_value(&e);
            on_change.emit(Selection {
                center: (!center.is_empty()).then_some(center),
                item: None,
                ..selection.clone()
            });
        })
    };

    let on_item = {
        let selection = selection.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |e: Event| {
            let item = select_value(&e);
            on_change.emit(Selection {
                item: (!item.is_empty()).then_some(item),
                ..selection.clone()
            });
        })
    };

    let on_days = {
        let selection = selection.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |e: Event| {
            let input = e.target_unchecked_into::<HtmlInputElement>();
            let days = input.value().trim().parse::<u32>().unwrap_or(0);
            on_change.emit(Selection { days, ..selection.clone() });
        })
    };

    let on_model = {
        let selection = selection.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |e: Event| {
            let model = select_value(&e).parse().unwrap_or_default();
            on_change.emit(Selection { model, ..selection.clone() });
        })
    };

    let on_submit = {
        let on_submit = props.on_submit.clone();
        Callback::from(move |_| on_submit.emit(()))
    };

    html! {
        <div class="card bg-base-100 shadow mb-6">
            <div class="card-body">
                <div class="grid grid-cols-1 md:grid-cols-4 gap-4">
                    <label class="form-control">
                        <span class="label-text">{"Distribution center"}</span>
                        <select class="select select-bordered" onchange={on_center}>
                            <option value="" selected={selection.center.is_none()}>{"Select a center"}</option>
                            {for props.centers.iter().map(|c| html! {
                                <option value={c.clone()} selected={selection.center.as_deref() == Some(c.as_str())}>{c}</option>
                            })}
                        </select>
                    </label>
                    <label class="form-control">
                        <span class="label-text">{"Item"}</span>
                        <select class="select select-bordered" onchange={on_item} disabled={selection.center.is_none()}>
                            <option value="" selected={selection.item.is_none()}>{"Select an item"}</option>
                            {for props.items.iter().map(|i| html! {
                                <option value={i.clone()} selected={selection.item.as_deref() == Some(i.as_str())}>{i}</option>
                            })}
                        </select>
                    </label>
                    <label class="form-control">
                        <span class="label-text">{"Horizon (days)"}</span>
                        <input type="number" min="1" class="input input-bordered"
                            value={selection.days.to_string()} onchange={on_days} />
                        <div class="join mt-2">
                            {for HORIZON_PRESETS.iter().map(|days| {
                                let days = *days;
                                let selection = selection.clone();
                                let on_change = props.on_change.clone();
                                let active = selection.days == days;
                                html! {
                                    <button class={classes!("btn", "btn-xs", "join-item", active.then_some("btn-active"))}
                                        onclick={Callback::from(move |_| on_change.emit(Selection { days, ..selection.clone() }))}>
                                        {format!("{}d", days)}
                                    </button>
                                }
                            })}
                        </div>
                    </label>
                    <label class="form-control">
                        <span class="label-text">{"Model"}</span>
                        <select class="select select-bordered" onchange={on_model}>
                            {for ModelKind::ALL.iter().map(|m| html! {
                                <option value={m.as_str()} selected={selection.model == *m}>{m.label()}</option>
                            })}
                        </select>
                    </label>
                </div>
                <div class="card-actions justify-end mt-4">
                    <button class="btn btn-primary" onclick={on_submit}>
                        <i class="fas fa-chart-line"></i>{" Generate Forecast"}
                    </button>
                </div>
            </div>
        </div>
    }
}
