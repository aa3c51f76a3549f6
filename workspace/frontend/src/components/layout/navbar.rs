use yew::prelude::*;
use crate::settings;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub title: String,
}

#[function_component(Navbar)]
pub fn navbar(props: &Props) -> Html {
    let api_url = settings::get_settings().api_base_url();

    html! {
        <div class="navbar bg-base-100 shadow-sm z-40 sticky top-0">
            <div class="flex-none lg:hidden">
                <label aria-label="open sidebar" class="btn btn-square btn-ghost" for="main-drawer">
                    <i class="fas fa-bars text-xl"></i>
                </label>
            </div>
            <div class="flex-1 px-4">
                <h1 class="text-xl font-bold">{ &props.title }</h1>
            </div>
            <div class="flex-none px-4 hidden md:block">
                <span class="badge badge-ghost font-mono text-xs" title="Forecast API">{api_url}</span>
            </div>
        </div>
    }
}
