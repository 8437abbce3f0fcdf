use yew::events::InputEvent;
use yew::{classes, function_component, html, Callback, Html, Properties};

#[derive(Properties, Clone, PartialEq, Debug)]
pub struct InputProps {
    #[prop_or_default]
    pub name: String,
    #[prop_or_default]
    pub label: Option<String>,
    #[prop_or("text".into())]
    pub input_type: String,
    #[prop_or_default]
    pub value: String,
    #[prop_or_default]
    pub required: bool,
    #[prop_or_default]
    pub error: bool,
    #[prop_or_default]
    pub oninput: Option<Callback<InputEvent>>,
}

#[function_component]
pub fn Input(props: &InputProps) -> Html {
    let label = props.label.clone().unwrap_or_default();
    html! {
        <div class="fc__input">
            { if props.label.is_some() {
                   html! {
                       <label>
                           { label.clone() }
                           { if props.required { html! { <span class="fc__input__required">{"*"}</span> } } else { html!{} } }
                       </label>
                   }
                } else { html!{} }
            }
            <div class="fc__input__wrapper">
                <input class={classes!(props.error.then_some("fc__input--error"))}
                    type={props.input_type.clone()}
                    name={props.name.clone()}
                    value={props.value.clone()}
                    oninput={props.oninput.clone().unwrap_or_default()}
                    />
            </div>
            { if props.error {
                  html! { <span class="fc__input__error-text">{ format!("{label} is required") }</span> }
              } else { html!{} }
            }
        </div>
    }
}
