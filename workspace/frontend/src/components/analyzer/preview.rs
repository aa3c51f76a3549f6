use common::client::CsvPreview;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub preview: CsvPreview,
}

#[function_component(PreviewTable)]
pub fn preview_table(props: &Props) -> Html {
    if props.preview.is_empty() {
        return html! { <p class="text-sm text-gray-500">{"The file is empty."}</p> };
    }

    html! {
        <div class="overflow-x-auto">
            <table class="table table-zebra table-sm">
                <thead>
                    <tr>
                        {for props.preview.header.iter().map(|h| html! { <th>{h}</th> })}
                    </tr>
                </thead>
                <tbody>
                    {for props.preview.rows.iter().map(|row| html! {
                        <tr>{for row.iter().map(|cell| html! { <td>{cell}</td> })}</tr>
                    })}
                </tbody>
            </table>
        </div>
    }
}
