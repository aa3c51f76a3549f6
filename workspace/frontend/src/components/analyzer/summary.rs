use common::{AnalysisSummary, DatasetOverview};
use yew::prelude::*;

fn stat(title: &str, value: String, desc: Option<String>) -> Html {
    html! {
        <div class="stats shadow bg-base-100">
            <div class="stat">
                <div class="stat-title">{title}</div>
                <div class="stat-value text-2xl">{value}</div>
                {if let Some(desc) = desc {
                    html! { <div class="stat-desc">{desc}</div> }
                } else {
                    html! {}
                }}
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct SummaryProps {
    pub summary: AnalysisSummary,
}

#[function_component(SummaryCards)]
pub fn summary_cards(props: &SummaryProps) -> Html {
    let s = &props.summary;

    html! {
        <div class="card bg-base-100 shadow">
            <div class="card-body">
                <h3 class="card-title">{"Forecast summary"}</h3>
                <p class="text-sm text-gray-500">{format!("{} ({} records, generated {})", s.message, s.records_analyzed, s.forecast_generated)}</p>
                <div class="grid grid-cols-1 md:grid-cols-4 gap-4 mt-2">
                    {stat("Estimated demand", format!("{:.0} {}", s.estimated_demand, s.unit), Some(format!("over {} months", s.total_months)))}
                    {stat("Recommended inventory", format!("{:.0} {}", s.recommended_inventory, s.unit), Some("for the busiest month".to_string()))}
                    {stat("Peak season", s.peak_season.clone(), None)}
                    {stat("Growth trend", s.growth_trend.clone(), None)}
                </div>
                <div class="overflow-x-auto mt-4">
                    <table class="table table-sm">
                        <thead><tr><th>{"Month"}</th><th class="text-right">{format!("Demand ({})", s.unit)}</th></tr></thead>
                        <tbody>
                            {for s.monthly_forecast.iter().map(|m| html! {
                                <tr key={m.month.clone()}>
                                    <td>{&m.month}</td>
                                    <td class="text-right">{format!("{:.1}", m.demand)}</td>
                                </tr>
                            })}
                        </tbody>
                    </table>
                </div>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct OverviewProps {
    pub overview: DatasetOverview,
}

#[function_component(OverviewCard)]
pub fn overview_card(props: &OverviewProps) -> Html {
    let o = &props.overview;
    let range = o
        .date_range
        .as_ref()
        .map(|r| format!("{} to {}", r.start, r.end))
        .unwrap_or_else(|| "No dates found".to_string());

    html! {
        <div class="card bg-base-100 shadow">
            <div class="card-body">
                <h3 class="card-title">{"Dataset overview"}</h3>
                <div class="grid grid-cols-1 md:grid-cols-4 gap-4">
                    {stat("Records", o.total_records.to_string(), None)}
                    {stat("Centers", o.centers.len().to_string(), None)}
                    {stat("Products", o.products.len().to_string(), None)}
                    {stat("Total demand", format!("{:.0}", o.total_demand), None)}
                </div>
                <p class="text-sm mt-2"><span class="font-semibold">{"Date range: "}</span>{range}</p>
                <p class="text-sm"><span class="font-semibold">{"Columns: "}</span>{o.columns.join(", ")}</p>
                <ul class="list-disc list-inside text-sm mt-2">
                    {for o.recommendations.iter().map(|r| html! { <li>{r}</li> })}
                </ul>
            </div>
        </div>
    }
}
