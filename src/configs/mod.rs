mod env_validate;

pub use env_validate::{ load_table_routes, resolve_table_routes, RouteSources };
