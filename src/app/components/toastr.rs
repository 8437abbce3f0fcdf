use crate::hooks::{use_service_context, Services};
use crate::services::{Toast, ToastType};
use std::rc::Rc;
use yew::prelude::*;
use yew_hooks::use_mount;

#[function_component]
pub fn ToastrView() -> Html {
    let service_ctx = use_service_context();
    let toasts = use_state(Vec::<Toast>::new);
    {
        let service_ctx = service_ctx.clone();
        let toasts = toasts.clone();
        use_mount(move || {
            service_ctx.toastr.subscribe(move |new_toasts| {
                toasts.set(new_toasts);
            });
        });
    }

    if toasts.is_empty() {
        html! {}
    } else {
        html! {
            <div class="fc__toastr-container">
               { for toasts.iter().map(|toast| render_toast(toast, &service_ctx)) }
            </div>
        }
    }
}

fn render_toast(toast: &Toast, services: &Rc<Services>) -> Html {
    let class = match toast.toast_type {
        ToastType::Success => "fc__toast success",
        ToastType::Error => "fc__toast error",
    };
    let ondismiss = {
        let services = services.clone();
        let id = toast.id;
        Callback::from(move |_| services.toastr.dismiss(id))
    };
    html! {
        <div key={toast.id} class={classes!(class)} onclick={ondismiss}>
            <span class="fc__toast__title">{ &toast.title }</span>
            <span class="fc__toast__message">{ &toast.message }</span>
        </div>
    }
}
