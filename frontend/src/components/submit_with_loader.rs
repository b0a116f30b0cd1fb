use leptos::*;

use crate::dom::WebDocument;
use crate::loader;

/// Button that shows the loading state in `container_id` and then submits
/// `form_id`.
#[component]
pub fn SubmitWithLoader(
    #[prop(into)] container_id: String,
    #[prop(into)] form_id: String,
    #[prop(into)] button_id: String,
    #[prop(optional, into)] class: Option<String>,
    children: Children,
) -> impl IntoView {
    let class = class.unwrap_or_else(|| "btn btn-primary".to_string());
    let id = button_id.clone();

    let on_click = move |_: ev::MouseEvent| {
        let page = WebDocument::new(document());
        let result = loader::with_active(|indicator| {
            indicator.present_loading_state_and_submit(&page, &container_id, &form_id, &button_id)
        });
        if let Err(e) = result {
            log::error!("Submit loader failed: {}", e);
        }
    };

    view! {
        <button type="button" id=id class=class on:click=on_click>
            {children()}
        </button>
    }
}
