use crate::app::components::LoadingIndicator;
use crate::app::AppRoute;
use crate::error::Error;
use crate::hooks::use_service_context;
use crate::model::AuthState;
use yew::prelude::*;
use yew_hooks::{use_async_with_options, UseAsyncOptions};
use yew_router::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct GuardProps {
    pub children: Children,
}

/// Authorization gate. The wrapped children are not mounted until the check
/// resolves, so none of their data-fetch effects can start early. The check
/// runs exactly once per mount; a failure navigates to the login view once
/// and the protected content is never rendered.
#[function_component]
pub fn Guard(props: &GuardProps) -> Html {
    let services = use_service_context();
    let navigator = use_navigator().expect("Navigator not found");
    let auth_state = use_state(AuthState::default);

    {
        let services_ctx = services.clone();
        let state = auth_state.clone();
        let navigator = navigator.clone();
        use_async_with_options::<_, (), Error>(
            async move {
                let authorized = services_ctx.auth.check().await;
                state.set(state.resolve(authorized));
                if !authorized {
                    navigator.push(&AppRoute::Login);
                }
                Ok(())
            },
            UseAsyncOptions::enable_auto(),
        );
    }

    match *auth_state {
        AuthState::Pending => html! { <LoadingIndicator loading={true} /> },
        AuthState::Authorized => html! { { for props.children.iter() } },
        AuthState::Unauthorized => html! {},
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use crate::model::{ApiConfig, WebConfig};
    use crate::provider::ServiceContextProvider;
    use gloo_storage::{LocalStorage, Storage};
    use gloo_timers::future::TimeoutFuture;
    use wasm_bindgen_test::{wasm_bindgen_test, wasm_bindgen_test_configure};

    wasm_bindgen_test_configure!(run_in_browser);

    fn test_config() -> WebConfig {
        WebConfig {
            app_title: None,
            api: ApiConfig {
                api_url: "http://localhost".to_string(),
            },
        }
    }

    #[function_component]
    fn Harness() -> Html {
        html! {
            <BrowserRouter>
                <ServiceContextProvider config={test_config()}>
                    <Guard>
                        <div id="protected-content">{ "secret" }</div>
                    </Guard>
                </ServiceContextProvider>
            </BrowserRouter>
        }
    }

    fn mount() -> web_sys::Element {
        let document = web_sys::window().unwrap().document().unwrap();
        let root = document.create_element("div").unwrap();
        document.body().unwrap().append_child(&root).unwrap();
        yew::Renderer::<Harness>::with_root(root.clone()).render();
        root
    }

    #[wasm_bindgen_test]
    async fn present_credential_mounts_the_children() {
        LocalStorage::set("authToken", "token".to_string()).unwrap();
        let root = mount();
        TimeoutFuture::new(100).await;
        assert!(root.inner_html().contains("secret"));
        LocalStorage::delete("authToken");
        root.remove();
    }

    #[wasm_bindgen_test]
    async fn missing_credential_redirects_to_login_and_never_mounts() {
        LocalStorage::delete("authToken");
        let root = mount();
        TimeoutFuture::new(100).await;
        assert!(!root.inner_html().contains("secret"));
        let path = web_sys::window().unwrap().location().pathname().unwrap();
        assert_eq!(path, "/login");
        root.remove();
    }
}
