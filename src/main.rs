mod app;
mod error;
mod hooks;
mod model;
mod provider;
mod services;

use crate::app::App;

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    yew::Renderer::<App>::new().render();
}
