use yew::{function_component, html, Html};

#[function_component]
pub fn NoContent() -> Html {
    html! {
        <div class="fc__no-content">{ "No entries" }</div>
    }
}
