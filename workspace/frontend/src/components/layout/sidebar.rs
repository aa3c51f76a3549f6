use yew::prelude::*;
use yew_router::prelude::*;
use crate::Route;

#[function_component(Sidebar)]
pub fn sidebar() -> Html {
    html! {
        <div class="drawer-side z-50">
            <label aria-label="close sidebar" class="drawer-overlay" for="main-drawer"></label>
            <ul class="menu p-4 w-72 min-h-full bg-base-100 text-base-content border-r border-base-300">
                <li class="mb-4">
                    <div class="flex items-center gap-3 px-2">
                        <div class="w-10 h-10 rounded-lg bg-primary flex items-center justify-center text-primary-content text-2xl">
                            <i class="fas fa-fish"></i>
                        </div>
                        <span class="text-xl font-bold tracking-tight">{"Seafood AI"}</span>
                    </div>
                </li>

                <li><Link<Route> to={Route::Dashboard}><i class="fas fa-home w-5"></i> {"Dashboard"}</Link<Route>></li>
                <li><Link<Route> to={Route::Forecast}><i class="fas fa-chart-line w-5"></i> {"Quick Forecast"}</Link<Route>></li>
                <li><Link<Route> to={Route::Analyzer}><i class="fas fa-file-csv w-5"></i> {"Upload & Analyze"}</Link<Route>></li>
            </ul>
        </div>
    }
}
