use crate::utils::{ SharedStore, ThemeState };
use crate::views::TableSelect;
use dioxus::prelude::*;
use crate:: {
    routes::Route,
};
const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");

#[component(no_case_check)]
pub fn Navbar() -> Element {
    let mut theme = use_context::<Signal<ThemeState>>();
    let store = use_context::<SharedStore>();

    rsx! {
        div {
            document::Link { rel: "stylesheet", href: NAVBAR_CSS }

            nav {
                class: if theme.read().is_dark { "navbar navbar-dark" } else { "navbar" },
                div {
                    id: "navbar",
                    class: "navbar-inner",
                    div {
                        class: "navbar-links",
                        Link {
                            class: "nav-link",
                            to: Route::Home,
                            "Home"
                        }
                        TableSelect {}
                    }
                    a {
                        id: "modeToggle",
                        class: "mode-toggle",
                        href: "#",
                        title: if theme.read().is_dark { "Switch to light mode" } else { "Switch to dark mode" },
                        onclick: move |evt: Event<MouseData>| {
                            evt.prevent_default();
                            theme.write().toggle(store.store());
                        },
                        i {
                            id: "modeIcon",
                            class: theme.read().icon_class(),
                        }
                    }
                }
            }
            Outlet::<Route> {}
        }
    }
}
