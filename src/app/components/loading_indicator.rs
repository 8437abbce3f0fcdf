use yew::{classes, function_component, html, Html, Properties};

#[derive(Properties, Clone, PartialEq, Debug)]
pub struct LoadingIndicatorProps {
    pub loading: bool,
    #[prop_or_default]
    pub class: String,
}

#[function_component]
pub fn LoadingIndicator(props: &LoadingIndicatorProps) -> Html {
    if !props.loading {
        html! { <div class={classes!("fc__loading-bar-placeholder", props.class.clone())}></div> }
    } else {
        html! {
         <div class={classes!("fc__loading-bar-container", props.class.clone())}>
            <div class="fc__loading-bar"></div>
          </div>
        }
    }
}
