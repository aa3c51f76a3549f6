use common::ForecastResponse;
use serde::Serialize;
use wasm_bindgen::prelude::*;
use web_sys::Element;
use yew::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = Plotly)]
    pub fn newPlot(div_id: &str, data: JsValue, layout: JsValue, config: JsValue);
}

/// Converts JSON into plain JS objects, which is what Plotly expects.
fn to_js(value: &serde_json::Value) -> JsValue {
    let serializer = serde_wasm_bindgen::Serializer::json_compatible();
    value.serialize(&serializer).unwrap_or(JsValue::NULL)
}

#[derive(Properties, PartialEq)]
pub struct Props {
    pub response: ForecastResponse,
}

/// Daily point forecast with its interval drawn as a shaded band.
#[function_component(ForecastChart)]
pub fn forecast_chart(props: &Props) -> Html {
    let chart_ref = use_node_ref();

    use_effect_with((chart_ref.clone(), props.response.clone()), move |(chart_ref, response)| {
        if let Some(element) = chart_ref.cast::<Element>() {
            let series = response.series();
            let dates: Vec<String> = series.iter().map(|p| p.date.format("%Y-%m-%d").to_string()).collect();
            let forecast: Vec<f64> = series.iter().map(|p| p.forecast).collect();
            let lower: Vec<f64> = series.iter().map(|p| p.lower_bound).collect();
            let upper: Vec<f64> = series.iter().map(|p| p.upper_bound).collect();

            let traces = serde_json::json!([
                {
                    "x": dates,
                    "y": upper,
                    "type": "scatter",
                    "mode": "lines",
                    "line": {"width": 0},
                    "showlegend": false,
                    "hoverinfo": "skip",
                    "name": "Upper bound"
                },
                {
                    "x": dates,
                    "y": lower,
                    "type": "scatter",
                    "mode": "lines",
                    "line": {"width": 0},
                    "fill": "tonexty",
                    "fillcolor": "rgba(59,130,246,0.15)",
                    "name": "Confidence interval"
                },
                {
                    "x": dates,
                    "y": forecast,
                    "type": "scatter",
                    "mode": "lines+markers",
                    "line": {"color": "#3b82f6", "shape": "spline"},
                    "name": format!("Forecast ({})", response.model_used.label())
                }
            ]);

            let layout = serde_json::json!({
                "title": format!("{} - {}", response.center, response.item),
                "margin": {"t": 40, "r": 10, "l": 60, "b": 40},
                "paper_bgcolor": "rgba(0,0,0,0)",
                "plot_bgcolor": "rgba(0,0,0,0)",
                "xaxis": {"showgrid": false, "title": "Date"},
                "yaxis": {
                    "showgrid": true,
                    "gridcolor": "#eee",
                    "title": "Demand",
                    "rangemode": "tozero"
                },
                "legend": {"orientation": "h", "y": -0.2}
            });

            let config = serde_json::json!({"responsive": true, "displayModeBar": false});

            let div_id = element.id();
            if !div_id.is_empty() {
                log::trace!("Drawing forecast chart with {} points", series.len());
                newPlot(&div_id, to_js(&traces), to_js(&layout), to_js(&config));
            }
        }
        || ()
    });

    html! {
        <div ref={chart_ref} id="chart-forecast" class="chart-container" style="height: 380px;"></div>
    }
}
