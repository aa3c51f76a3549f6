use web_sys::{DragEvent, File, HtmlInputElement};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub file_name: Option<String>,
    pub on_file: Callback<File>,
}

/// Drag-and-drop target with a hidden file input fallback.
#[function_component(UploadZone)]
pub fn upload_zone(props: &Props) -> Html {
    let dragging = use_state(|| false);
    let input_ref = use_node_ref();

    let on_drag_over = {
        let dragging = dragging.clone();
        Callback::from(move |e: DragEvent| {
            e.prevent_default();
            dragging.set(true);
        })
    };

    let on_drag_leave = {
        let dragging = dragging.clone();
        Callback::from(move |_: DragEvent| dragging.set(false))
    };

    let on_drop = {
        let dragging = dragging.clone();
        let on_file = props.on_file.clone();
        Callback::from(move |e: DragEvent| {
            e.prevent_default();
            dragging.set(false);
            let file = e
                .data_transfer()
                .and_then(|dt| dt.files())
                .and_then(|files| files.get(0));
            match file {
                Some(file) => {
                    log::debug!("File dropped: {}", file.name());
                    on_file.emit(file);
                }
                None => log::debug!("Drop without a file"),
            }
        })
    };

    let on_change = {
        let on_file = props.on_file.clone();
        Callback::from(move |e: Event| {
            let input = e.target_unchecked_into::<HtmlInputElement>();
            if let Some(file) = input.files().and_then(|files| files.get(0)) {
                log::debug!("File selected: {}", file.name());
                on_file.emit(file);
            }
            // Allow choosing the same file again
            input.set_value("");
        })
    };

    let on_click = {
        let input_ref = input_ref.clone();
        Callback::from(move |_| {
            if let Some(input) = input_ref.cast::<HtmlInputElement>() {
                input.click();
            }
        })
    };

    let zone_class = classes!(
        "border-2", "border-dashed", "rounded-box", "p-10", "text-center", "cursor-pointer",
        if *dragging { "border-primary bg-primary/10" } else { "border-base-300 bg-base-100" }
    );

    html! {
        <div class={zone_class}
            ondragover={on_drag_over}
            ondragleave={on_drag_leave}
            ondrop={on_drop}
            onclick={on_click}>
            <i class="fas fa-cloud-upload-alt text-4xl text-primary mb-2"></i>
            <p class="font-semibold">{"Drag & drop a CSV file here, or click to browse"}</p>
            <p class="text-sm text-gray-500">{"Columns such as date, center, item and qty are detected automatically"}</p>
            {if let Some(name) = &props.file_name {
                html! { <p class="mt-2 badge badge-primary">{name}</p> }
            } else {
                html! {}
            }}
            <input ref={input_ref} type="file" accept=".csv,text/csv" class="hidden" onchange={on_change} />
        </div>
    }
}
