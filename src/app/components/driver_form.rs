use crate::app::components::{Input, LoadingIndicator};
use crate::app::AppRoute;
use crate::error::Error;
use crate::hooks::use_service_context;
use crate::model::{DriverForm, Field, FormMode};
use log::{error, warn};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_hooks::{use_async_with_options, UseAsyncOptions};
use yew_router::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct DriverFormPageProps {
    /// Present in edit mode; absent for a fresh record.
    #[prop_or_default]
    pub id: Option<u32>,
}

/// Create/edit workflow over the `DriverForm` state machine. Edit mode
/// resolves the record through the collection fetch; a miss keeps the empty
/// defaults.
#[function_component]
pub fn DriverFormPage(props: &DriverFormPageProps) -> Html {
    let services = use_service_context();
    let navigator = use_navigator().expect("Navigator not found");
    let form = use_state(|| DriverForm::new(props.id.map_or(FormMode::Create, FormMode::Edit)));

    {
        let services_ctx = services.clone();
        let form = form.clone();
        let id = props.id;
        use_async_with_options::<_, (), Error>(
            async move {
                if let Some(id) = id {
                    match services_ctx.drivers.find_by_id(id).await {
                        Ok(Some(driver)) => {
                            let mut next = (*form).clone();
                            next.populate(&driver);
                            form.set(next);
                        }
                        Ok(None) => {
                            warn!("no driver with id {id}, form keeps empty defaults");
                        }
                        Err(err) => {
                            error!("failed to resolve driver {id}: {err}");
                            services_ctx
                                .toastr
                                .error("Load Error", "Could not load the driver record.");
                        }
                    }
                }
                Ok(())
            },
            UseAsyncOptions::enable_auto(),
        );
    }

    let handle_change = {
        let form = form.clone();
        Callback::from(move |(field, value): (Field, String)| {
            let mut next = (*form).clone();
            next.set_field(field, &value);
            form.set(next);
        })
    };

    let handle_submit = {
        let services_ctx = services.clone();
        let navigator = navigator.clone();
        let form = form.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let mut next = (*form).clone();
            if !next.validate() {
                form.set(next);
                services_ctx
                    .toastr
                    .error("Validation Error", "Please fill in all required fields.");
                return;
            }
            if !next.begin_submit() {
                // a submission is already in flight
                return;
            }
            form.set(next.clone());

            let services = services_ctx.clone();
            let navigator = navigator.clone();
            let form = form.clone();
            spawn_local(async move {
                let payload = next.payload();
                let result = match next.mode {
                    FormMode::Create => services.drivers.create(&payload).await,
                    FormMode::Edit(id) => services.drivers.update(id, &payload).await,
                };
                // settle from the live handle, not the submit-time snapshot,
                // so edits typed while the request was in flight survive
                let mut settled = (*form).clone();
                settled.finish_submit(result.is_ok());
                form.set(settled);
                match result {
                    Ok(()) => {
                        services
                            .toastr
                            .success("Success", "Driver saved successfully.");
                        navigator.push(&AppRoute::DriverList);
                    }
                    Err(err) => {
                        error!("{err}");
                        services
                            .toastr
                            .error("Submission Error", "Failed to save the driver. Please try again.");
                    }
                }
            });
        })
    };

    let title = match form.mode {
        FormMode::Create => "Add Driver",
        FormMode::Edit(_) => "Edit Driver",
    };

    html! {
        <div class="fc__driver-form">
            <div class="fc__driver-form__header">
                <h1>{ title }</h1>
            </div>
            <form onsubmit={handle_submit}>
                <div class="fc__driver-form__body">
                    <div class="fc__driver-form__row">
                        { field_input(&form, Field::Username, "Username", "text", &handle_change) }
                        { field_input(&form, Field::Password, "Password", "password", &handle_change) }
                    </div>
                    <div class="fc__driver-form__row">
                        { field_input(&form, Field::FirstName, "First name", "text", &handle_change) }
                        { field_input(&form, Field::LastName, "Last name", "text", &handle_change) }
                    </div>
                    <div class="fc__driver-form__row">
                        { field_input(&form, Field::Email, "Email", "email", &handle_change) }
                        { field_input(&form, Field::PhoneNumber, "Phone number", "text", &handle_change) }
                    </div>
                    <div class="fc__driver-form__row">
                        { field_input(&form, Field::OperationalTime, "Operational time", "text", &handle_change) }
                        { field_input(&form, Field::Route, "Route", "text", &handle_change) }
                    </div>
                    <div class="fc__driver-form__row">
                        { field_input(&form, Field::VehicleNumber, "Vehicle number", "text", &handle_change) }
                        { field_input(&form, Field::VehicleBrand, "Vehicle brand", "text", &handle_change) }
                        { field_input(&form, Field::VehicleSeries, "Vehicle series", "text", &handle_change) }
                    </div>
                    <LoadingIndicator loading={form.is_submitting()} />
                    <button type="submit" class="btn primary" disabled={form.is_submitting()}>
                        { "Submit" }
                    </button>
                </div>
            </form>
        </div>
    }
}

fn field_input(
    form: &DriverForm,
    field: Field,
    label: &str,
    input_type: &str,
    on_change: &Callback<(Field, String)>,
) -> Html {
    let oninput = {
        let on_change = on_change.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                on_change.emit((field, input.value()));
            }
        })
    };
    html! {
        <Input name={field.as_str().to_string()}
            label={label.to_string()}
            input_type={input_type.to_string()}
            value={form.get(field).to_string()}
            required={form.is_required(field)}
            error={form.errors.is_invalid(field)}
            oninput={Some(oninput)} />
    }
}
