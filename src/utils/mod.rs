pub mod navigator;
pub mod storage;
pub mod table_routes;
pub mod theme_state;

pub use navigator::{ redirect_for_selection, PageNavigator };
#[cfg(target_arch = "wasm32")]
pub use navigator::BrowserNavigator;
#[cfg(target_arch = "wasm32")]
pub use storage::BrowserStorage;
pub use storage::{ MemoryStore, PreferenceStore, SharedStore };
pub use table_routes::{ TableRoute, TableRoutes };
pub use theme_state::{ apply_theme_to_body, ThemeState, DARK_CLASS, THEME_KEY };
