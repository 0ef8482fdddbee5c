use crate::error::NavigationError;
use crate::utils::table_routes::TableRoutes;

pub trait PageNavigator {
    fn navigate(&mut self, path: &str) -> Result<(), NavigationError>;
}

/// Full page load through `window.location.href`.
#[cfg(target_arch = "wasm32")]
pub struct BrowserNavigator;

#[cfg(target_arch = "wasm32")]
impl PageNavigator for BrowserNavigator {
    fn navigate(&mut self, path: &str) -> Result<(), NavigationError> {
        let window = web_sys::window().ok_or_else(|| NavigationError::Unavailable("no window".to_string()))?;
        window.location().set_href(path)?;
        Ok(())
    }
}

/// Handles a change of the table dropdown. Returns whether a navigation was
/// issued; unmapped values and navigation failures do nothing visible.
pub fn redirect_for_selection<N: PageNavigator + ?Sized>(
    routes: &TableRoutes,
    selected: &str,
    navigator: &mut N
) -> bool {
    let Some(path) = routes.resolve(selected) else {
        log::debug!("No page mapped for table {:?}", selected);
        return false;
    };

    match navigator.navigate(path) {
        Ok(()) => {
            log::info!("Redirecting to {} for table {}", path, selected);
            true
        }
        Err(e) => {
            log::warn!("Failed to open {} for table {}: {}", path, selected, e);
            false
        }
    }
}
