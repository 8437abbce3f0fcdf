mod components;

use crate::app::components::{
    DriverFormPage, DriverListPage, Guard, LoadingIndicator, Login, ToastrView,
};
use crate::error::Error;
use crate::model::WebConfig;
use crate::provider::ServiceContextProvider;
use crate::services::request_get;
use log::error;
use yew::prelude::*;
use yew_hooks::{use_async_with_options, UseAsyncOptions};
use yew_router::prelude::*;

/// App routes
#[derive(Routable, Debug, Clone, PartialEq, Eq)]
pub enum AppRoute {
    #[at("/login")]
    Login,
    #[at("/drivers")]
    DriverList,
    #[at("/drivers/new")]
    DriverCreate,
    #[at("/drivers/:id")]
    DriverEdit { id: u32 },
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

pub fn switch(route: AppRoute) -> Html {
    match route {
        AppRoute::Login => html! { <Login /> },
        AppRoute::Home | AppRoute::DriverList => html! {
            <Guard><DriverListPage /></Guard>
        },
        AppRoute::DriverCreate => html! {
            <Guard><DriverFormPage /></Guard>
        },
        AppRoute::DriverEdit { id } => html! {
            <Guard><DriverFormPage id={Some(id)} /></Guard>
        },
        AppRoute::NotFound => html! { "Page not found" },
    }
}

#[function_component]
pub fn App() -> Html {
    let configuration_state = use_state(|| None::<WebConfig>);
    let configuration_error = use_state(|| None::<Error>);

    {
        let config_state = configuration_state.clone();
        let error_state = configuration_error.clone();
        use_async_with_options::<_, (), Error>(
            async move {
                match request_get("config.json", None).await {
                    Ok(cfg) => config_state.set(Some(cfg)),
                    Err(err) => {
                        error!("Failed to load config {err}");
                        error_state.set(Some(err));
                    }
                }
                Ok(())
            },
            UseAsyncOptions::enable_auto(),
        );
    }

    if let Some(err) = &*configuration_error {
        return html! {
            <div class="fc__app-error">
                { format!("Failed to load configuration: {err}") }
            </div>
        };
    }

    let Some(config) = (*configuration_state).clone() else {
        return html! { <LoadingIndicator loading={true} /> };
    };

    html! {
        <BrowserRouter>
            <ServiceContextProvider config={config}>
                <ToastrView />
                <Switch<AppRoute> render={switch} />
            </ServiceContextProvider>
        </BrowserRouter>
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use gloo_timers::future::TimeoutFuture;
    use wasm_bindgen_test::wasm_bindgen_test;

    #[wasm_bindgen_test]
    async fn unloadable_config_renders_an_error_state() {
        let document = web_sys::window().unwrap().document().unwrap();
        let root = document.create_element("div").unwrap();
        document.body().unwrap().append_child(&root).unwrap();
        yew::Renderer::<App>::with_root(root.clone()).render();
        // the test harness serves no config.json, so the fetch settles as an error
        TimeoutFuture::new(200).await;
        assert!(root.inner_html().contains("Failed to load configuration"));
        root.remove();
    }
}
