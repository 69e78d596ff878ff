//! Menu Tree Frontend Entry Point

mod app;
mod components;
mod config;
mod dom;
mod logger;
mod storage;
mod store;

fn main() {
    console_error_panic_hook::set_once();
    app::start();
}
