use dioxus::prelude::*;
use stock_ui::{ apply_theme_to_body, load_table_routes, Route, SharedStore, ThemeState };

const MAIN_CSS: Asset = asset!("/assets/styling/main.css");
const BOOTSTRAP_ICONS: &str = "https://cdn.jsdelivr.net/npm/bootstrap-icons@1.11.3/font/bootstrap-icons.min.css";

fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    {
        dotenv::dotenv().ok();
        if std::env::var("RUST_LOG").is_err() {
            std::env::set_var("RUST_LOG", "info");
        }
        env_logger::init();
    }

    #[cfg(target_arch = "wasm32")]
    {
        if let Err(e) = console_log::init_with_level(log::Level::Info) {
            web_sys::console::error_1(&format!("Logger init failed: {}", e).into());
        }
    }

    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let store = use_context_provider(SharedStore::platform_default);
    let theme = use_signal(|| ThemeState::load(store.store()));
    use_context_provider(|| theme);
    use_context_provider(load_table_routes);

    use_effect(move || apply_theme_to_body(theme()));

    rsx! {
        div {
            class: if theme().is_dark { "app dark-mode" } else { "app" },
            document::Link { rel: "stylesheet", href: MAIN_CSS }
            document::Link { rel: "stylesheet", href: BOOTSTRAP_ICONS }
            Router::<Route> {}
        }
    }
}
