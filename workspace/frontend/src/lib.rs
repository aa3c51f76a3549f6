use yew::prelude::*;
use yew_router::prelude::*;

mod components;
pub mod api_client;
pub mod hooks;
pub mod settings;
pub mod ui;

use components::analyzer::Analyzer;
use components::dashboard::Dashboard;
use components::forecast::Forecast;
use components::layout::layout::Layout;
use ui::loading::LoadingProvider;
use ui::toast::ToastProvider;

#[derive(Debug, Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Dashboard,
    #[at("/forecast")]
    Forecast,
    #[at("/analyzer")]
    Analyzer,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    log::debug!("Routing to: {:?}", routes);
    match routes {
        Route::Dashboard => html! { <Layout title="Dashboard"><Dashboard /></Layout> },
        Route::Forecast => html! { <Layout title="Quick Forecast"><Forecast /></Layout> },
        Route::Analyzer => html! { <Layout title="Upload & Analyze"><Analyzer /></Layout> },
        Route::NotFound => {
            log::warn!("404 - Route not found");
            html! { <Layout title="404"><h1>{"404 Not Found"}</h1></Layout> }
        }
    }
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <ToastProvider>
            <LoadingProvider>
                <BrowserRouter>
                    <Switch<Route> render={switch} />
                </BrowserRouter>
            </LoadingProvider>
        </ToastProvider>
    }
}

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn run_app() {
    settings::init_settings();

    let settings = settings::get_settings();
    wasm_logger::init(wasm_logger::Config::new(settings.log_level));

    log::info!("=== Seafood Forecast Dashboard Starting ===");
    log::info!("Application settings: {:?}", settings);
    log::debug!("API base URL: {}", settings.api_base_url());

    yew::Renderer::<App>::new().render();
    log::info!("Application initialized successfully");
}
