use crate::app::AppRoute;
use crate::hooks::use_service_context;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

/// Gate redirect destination. The credential exchange itself is external;
/// this view only stores the bearer token through the session context.
#[function_component]
pub fn Login() -> Html {
    let services = use_service_context();
    let navigator = use_navigator().expect("Navigator not found");
    let token_ref = use_node_ref();
    let failed = use_state(|| false);

    let do_login = {
        let services_ctx = services.clone();
        let navigator = navigator.clone();
        let t_ref = token_ref.clone();
        let failed = failed.clone();
        Callback::from(move |()| {
            let Some(input) = t_ref.cast::<HtmlInputElement>() else {
                return;
            };
            let token = input.value();
            if token.trim().is_empty() {
                failed.set(true);
                return;
            }
            services_ctx.auth.login(&token);
            failed.set(false);
            navigator.push(&AppRoute::DriverList);
        })
    };

    let handle_login = {
        let login = do_login.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            login.emit(());
        })
    };

    let handle_key_down = {
        let login = do_login.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Enter" {
                e.prevent_default();
                login.emit(());
            }
        })
    };

    html! {
        <div class="fc__login-view">
            <div class="fc__login-view__header">
                <div class="fc__login-view__header-title">{ "Fleet Console Login" }</div>
            </div>
            <form>
                <div class="fc__login-view__form">
                    <label>{ "API token" }</label>
                    <input ref={token_ref} type="password" name="token"
                        autocomplete="off" onkeydown={handle_key_down} />
                    <div class="fc__login-view__form-action">
                        <button type="button" class="btn" onclick={handle_login}>{ "Login" }</button>
                        <span class={if *failed { "error-text" } else { "hidden" }}>{ "A token is required" }</span>
                    </div>
                </div>
            </form>
        </div>
    }
}
