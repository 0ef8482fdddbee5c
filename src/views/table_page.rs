use dioxus::prelude::*;
use crate::utils::TableRoutes;
use crate::Route;

/// Landing view for every table path; unknown paths get a not-found notice.
#[component]
pub fn TablePage(segments: Vec<String>) -> Element {
    let routes = use_context::<TableRoutes>();
    let path = format!("/{}", segments.join("/"));

    match routes.table_for_path(&path) {
        Some(route) =>
            rsx! {
                div {
                    class: "container",
                    h1 { class: "page-title", "{route.label}" }
                    p { class: "muted", "Table: {route.table}" }
                }
            },
        None =>
            rsx! {
                div {
                    class: "container",
                    h1 { class: "page-title", "Page not found" }
                    p { class: "muted", "Nothing is served at {path}" }
                    Link { class: "nav-link", to: Route::Home, "Back to home" }
                }
            },
    }
}
