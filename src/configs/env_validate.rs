use std::path::Path;

use crate::error::ConfigError;
use crate::utils::TableRoutes;

pub const ROUTES_FILE_VAR: &str = "TABLE_ROUTES_FILE";
pub const ROUTES_JSON_VAR: &str = "TABLE_ROUTES";
pub const ROUTES_PRESET_VAR: &str = "TABLE_ROUTES_PRESET";

/// Raw values of the route settings, as found in the environment.
#[derive(Debug, Default, Clone)]
pub struct RouteSources {
    pub file: Option<String>,
    pub json: Option<String>,
    pub preset: Option<String>,
}

impl RouteSources {
    pub fn from_env() -> Self {
        let read = |name: &str| std::env::var(name).ok().filter(|v| !v.trim().is_empty());
        Self {
            file: read(ROUTES_FILE_VAR),
            json: read(ROUTES_JSON_VAR),
            preset: read(ROUTES_PRESET_VAR),
        }
    }
}

pub fn load_table_routes() -> TableRoutes {
    resolve_table_routes(&RouteSources::from_env())
}

/// First usable source wins: file, inline JSON, preset, then the default.
pub fn resolve_table_routes(sources: &RouteSources) -> TableRoutes {
    if let Some(path) = &sources.file {
        match routes_from_file(Path::new(path)) {
            Ok(routes) => {
                log::info!("Loaded {} table routes from {}", routes.len(), path);
                return routes;
            }
            Err(e) => log::warn!("Ignoring {}={}: {}", ROUTES_FILE_VAR, path, e),
        }
    }

    if let Some(json) = &sources.json {
        match TableRoutes::from_json(json) {
            Ok(routes) => {
                log::info!("Loaded {} table routes from {}", routes.len(), ROUTES_JSON_VAR);
                return routes;
            }
            Err(e) => log::warn!("Ignoring {}: {}", ROUTES_JSON_VAR, e),
        }
    }

    if let Some(name) = &sources.preset {
        match TableRoutes::preset(name) {
            Ok(routes) => {
                log::info!("Using table route preset {}", name.trim());
                return routes;
            }
            Err(e) => log::warn!("Ignoring {}: {}", ROUTES_PRESET_VAR, e),
        }
    }

    TableRoutes::default()
}

pub fn routes_from_file(path: &Path) -> Result<TableRoutes, ConfigError> {
    let contents = std::fs::read_to_string(path)?;
    TableRoutes::from_json(&contents)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const ITEMS_ONLY: &str = r#"[{"table":"stock_items","label":"Items","path":"/items/"}]"#;

    #[test]
    fn test_no_sources_uses_default() {
        assert_eq!(resolve_table_routes(&RouteSources::default()), TableRoutes::default());
    }

    #[test]
    fn test_preset_selected_by_name() {
        let sources = RouteSources { preset: Some("base".to_string()), ..Default::default() };
        assert_eq!(resolve_table_routes(&sources), TableRoutes::base_template());
    }

    #[test]
    fn test_bad_preset_falls_back_to_default() {
        let sources = RouteSources { preset: Some("nope".to_string()), ..Default::default() };
        assert_eq!(resolve_table_routes(&sources), TableRoutes::default());
    }

    #[test]
    fn test_inline_json_beats_preset() {
        let sources = RouteSources {
            json: Some(ITEMS_ONLY.to_string()),
            preset: Some("base".to_string()),
            ..Default::default()
        };
        let routes = resolve_table_routes(&sources);
        assert_eq!(routes.len(), 1);
        assert_eq!(routes.resolve("stock_items"), Some("/items/"));
    }

    #[test]
    fn test_malformed_json_falls_through_to_preset() {
        let sources = RouteSources {
            json: Some("[{".to_string()),
            preset: Some("base".to_string()),
            ..Default::default()
        };
        assert_eq!(resolve_table_routes(&sources), TableRoutes::base_template());
    }

    #[test]
    fn test_file_beats_inline_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{}", ITEMS_ONLY).unwrap();

        let sources = RouteSources {
            file: Some(file.path().to_string_lossy().into_owned()),
            json: Some("[]".to_string()),
            preset: None,
        };
        let routes = resolve_table_routes(&sources);
        assert_eq!(routes.len(), 1);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = routes_from_file(&dir.path().join("routes.json"));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }

    #[test]
    fn test_missing_file_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let sources = RouteSources {
            file: Some(dir.path().join("routes.json").to_string_lossy().into_owned()),
            ..Default::default()
        };
        assert_eq!(resolve_table_routes(&sources), TableRoutes::default());
    }
}
