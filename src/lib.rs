mod views;
mod utils;
mod routes;
mod configs;
mod error;
#[cfg(test)]
mod tests;

pub use crate::routes::*;
pub use crate::utils::*;
pub use crate::configs::{ load_table_routes, resolve_table_routes, RouteSources };
pub use crate::error::{ ConfigError, NavigationError, StorageError };
pub use crate::views::{ Home, Navbar, TablePage, TableSelect };
