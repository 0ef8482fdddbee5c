use dioxus::events::FormData;
use dioxus::prelude::*;
#[cfg(not(target_arch = "wasm32"))]
use crate::error::NavigationError;
use crate::utils::{ redirect_for_selection, PageNavigator, TableRoutes };
use crate::Route;

/// Router-backed navigation for builds without a browser location.
#[cfg(not(target_arch = "wasm32"))]
struct RouterNavigator(Navigator);

#[cfg(not(target_arch = "wasm32"))]
impl PageNavigator for RouterNavigator {
    fn navigate(&mut self, path: &str) -> Result<(), NavigationError> {
        let route = path
            .parse::<Route>()
            .map_err(|_| NavigationError::Unroutable(path.to_string()))?;
        match self.0.push(route) {
            None => Ok(()),
            Some(_) => Err(NavigationError::Rejected(path.to_string())),
        }
    }
}

#[component]
pub fn TableSelect() -> Element {
    let routes = use_context::<TableRoutes>();
    let current_route = use_route::<Route>();
    #[cfg(not(target_arch = "wasm32"))]
    let router = navigator();

    let current = routes
        .table_for_path(&current_route.to_string())
        .map(|r| r.table.clone())
        .unwrap_or_default();
    let options = routes.clone();

    rsx! {
        select {
            id: "tableSelect",
            class: "table-select",
            onchange: move |evt: Event<FormData>| {
                let value = evt.data.as_ref().value().to_string();
                #[cfg(target_arch = "wasm32")]
                let mut page = crate::utils::BrowserNavigator;
                #[cfg(not(target_arch = "wasm32"))]
                let mut page = RouterNavigator(router.clone());
                redirect_for_selection(&routes, &value, &mut page);
            },

            option { value: "", selected: current.is_empty(), "Select a table" }
            for route in options.iter() {
                option {
                    key: "{route.table}",
                    value: "{route.table}",
                    selected: route.table == current,
                    "{route.label}"
                }
            }
        }
    }
}
