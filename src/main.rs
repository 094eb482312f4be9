mod backend;
mod frontend;
mod utils;

use crate::backend::services::SessionStore;
use crate::backend::utils::config::AppConfig;
use crate::backend::utils::route::Route;
use crate::frontend::services::context::AuthState;
use dioxus::LaunchBuilder;
use dioxus::prelude::*;
use dioxus_desktop::{Config, LogicalSize, WindowBuilder};
use dioxus_router::Router;

fn main() {
    utils::logging::init_from_env();

    let app_config = AppConfig::load();
    let window = &app_config.window;
    let size = LogicalSize::new(f64::from(window.width), f64::from(window.height));

    let config = Config::default()
        .with_window(
            WindowBuilder::new()
                .with_title(window.title.clone())
                .with_inner_size(size)
                .with_min_inner_size(size)
                .with_resizable(window.resizable),
        )
        .with_menu(None);

    LaunchBuilder::new()
        .with_cfg(config)
        .with_context(app_config)
        .launch(App);
}

#[component]
fn App() -> Element {
    let app_config = use_context::<AppConfig>();
    let store = use_signal(|| SessionStore::new(app_config.session_path()));
    let user = use_signal(|| None);
    let loading = use_signal(|| true);
    let mut auth = use_context_provider(|| AuthState { user, loading, store });

    use_future(move || async move { auth.restore().await });

    rsx! { Router::<Route> {} }
}
