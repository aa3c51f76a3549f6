use common::client::MetricsPanel;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub panel: MetricsPanel,
}

#[function_component(MetricCards)]
pub fn metric_cards(props: &Props) -> Html {
    let refreshed_at = chrono::Local::now().format("%H:%M:%S").to_string();

    html! {
        <>
            <div class="grid grid-cols-1 md:grid-cols-3 xl:grid-cols-5 gap-4">
                {for props.panel.entries().iter().map(|entry| html! {
                    <div key={entry.label.clone()} class="stats shadow bg-base-100">
                        <div class="stat">
                            <div class="stat-title">{&entry.label}</div>
                            <div class="stat-value text-primary text-2xl">{&entry.value}</div>
                        </div>
                    </div>
                })}
            </div>
            <p class="text-xs text-gray-500 mt-2">
                {format!("Updated {} (refresh #{})", refreshed_at, props.panel.refresh_count())}
            </p>
        </>
    }
}
