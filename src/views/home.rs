use dioxus::prelude::*;
use crate::utils::TableRoutes;

#[component]
pub fn Home() -> Element {
    let routes = use_context::<TableRoutes>();
    let landing = routes.table_for_path("/").map(|r| r.label.clone());

    rsx! {
        div {
            class: "container",
            h1 {
                class: "page-title",
                "Stock Management"
            }
            {landing.map(|label| rsx! {
                p { class: "muted", "Landing table: {label}" }
            })}
            p {
                class: "muted",
                "Pick a table from the menu to open its page."
            }
        }
    }
}
