use crate::app::components::{LoadingIndicator, NoContent};
use crate::app::AppRoute;
use crate::hooks::use_service_context;
use crate::model::Driver;
use yew::prelude::*;
use yew_hooks::{use_async_with_options, UseAsyncOptions};
use yew_router::prelude::*;

const HEADERS: [&str; 8] = [
    "Username",
    "Name",
    "Email",
    "Phone",
    "Operational time",
    "Route",
    "Vehicle",
    "",
];

/// List view over the full driver collection. Fetches once per mount;
/// a malformed response renders as an error state, not as an empty table.
#[function_component]
pub fn DriverListPage() -> Html {
    let services = use_service_context();
    let navigator = use_navigator().expect("Navigator not found");

    let drivers = {
        let services_ctx = services.clone();
        use_async_with_options(
            async move { services_ctx.drivers.fetch_all().await },
            UseAsyncOptions::enable_auto(),
        )
    };

    let handle_create = {
        let navigator = navigator.clone();
        Callback::from(move |_| navigator.push(&AppRoute::DriverCreate))
    };

    let handle_logout = {
        let services_ctx = services.clone();
        let navigator = navigator.clone();
        Callback::from(move |_| {
            services_ctx.auth.logout();
            navigator.push(&AppRoute::Login);
        })
    };

    let body = if drivers.loading {
        html! { <LoadingIndicator loading={true} /> }
    } else if let Some(err) = &drivers.error {
        html! {
            <div class="fc__driver-table__error">
                { format!("Failed to load drivers: {err}") }
            </div>
        }
    } else if let Some(list) = &drivers.data {
        if list.is_empty() {
            html! { <NoContent /> }
        } else {
            render_table(list, &navigator)
        }
    } else {
        html! {}
    };

    html! {
        <div class="fc__driver-table">
            <div class="fc__driver-table__header">
                <h1>{ "Drivers" }</h1>
                <div class="fc__driver-table__actions">
                    <button class="btn primary" onclick={handle_create}>{ "Add driver" }</button>
                    <button class="btn" onclick={handle_logout}>{ "Logout" }</button>
                </div>
            </div>
            <div class="fc__driver-table__body">
                { body }
            </div>
        </div>
    }
}

fn render_table(drivers: &[Driver], navigator: &Navigator) -> Html {
    html! {
        <table class="fc__table">
            <thead>
                <tr>
                    { for HEADERS.iter().map(|header| html! { <th>{ *header }</th> }) }
                </tr>
            </thead>
            <tbody>
                { for drivers.iter().map(|driver| render_row(driver, navigator)) }
            </tbody>
        </table>
    }
}

fn render_row(driver: &Driver, navigator: &Navigator) -> Html {
    let edit = driver.id.map(|id| {
        let navigator = navigator.clone();
        let onclick = Callback::from(move |_| navigator.push(&AppRoute::DriverEdit { id }));
        html! { <button class="btn" {onclick}>{ "Edit" }</button> }
    });
    html! {
        <tr>
            <td>{ &driver.username }</td>
            <td>{ format!("{} {}", driver.firstname, driver.lastname) }</td>
            <td>{ &driver.email }</td>
            <td>{ &driver.phone_number }</td>
            <td>{ &driver.operational_time }</td>
            <td>{ &driver.route }</td>
            <td>{ format!("{} {} {}", driver.vehicle_number, driver.vehicle_brand, driver.vehicle_series) }</td>
            <td>{ edit.unwrap_or_default() }</td>
        </tr>
    }
}
