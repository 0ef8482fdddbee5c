//! Stock table identifier to page path mapping used by the table dropdown.

use std::collections::HashSet;

use serde::{ Deserialize, Serialize };

use crate::error::ConfigError;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TableRoute {
    pub table: String,
    pub label: String,
    pub path: String,
}

impl TableRoute {
    pub fn new(table: &str, label: &str, path: &str) -> Self {
        Self {
            table: table.to_string(),
            label: label.to_string(),
            path: path.to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(transparent)]
pub struct TableRoutes {
    routes: Vec<TableRoute>,
}

impl TableRoutes {
    pub fn new(routes: Vec<TableRoute>) -> Result<Self, ConfigError> {
        let mut seen = HashSet::new();
        for route in &routes {
            if route.table.trim().is_empty() {
                return Err(ConfigError::InvalidEntry("empty table id".to_string()));
            }
            if !route.path.starts_with('/') {
                return Err(
                    ConfigError::InvalidEntry(
                        format!("path for {} must start with '/': {}", route.table, route.path)
                    )
                );
            }
            if !seen.insert(route.table.as_str()) {
                return Err(ConfigError::DuplicateTable(route.table.clone()));
            }
        }
        Ok(Self { routes })
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let routes: Vec<TableRoute> = serde_json::from_str(json)?;
        Self::new(routes)
    }

    pub fn preset(name: &str) -> Result<Self, ConfigError> {
        match name.trim() {
            "base" => Ok(Self::base_template()),
            "movements" => Ok(Self::stock_movements()),
            other => Err(ConfigError::UnknownPreset(other.to_string())),
        }
    }

    /// Mapping used before the movements module existed: units of measure
    /// live on the landing page and movements have no entry.
    pub fn base_template() -> Self {
        Self {
            routes: vec![
                TableRoute::new("stock_items_categories", "Item Categories", "/categories/"),
                TableRoute::new("stock_document_type", "Document Types", "/doctype/"),
                TableRoute::new("stock_items", "Items", "/items/"),
                TableRoute::new("stock_items_uom", "Units of Measure", "/")
            ],
        }
    }

    /// Mapping once movements became the landing page.
    pub fn stock_movements() -> Self {
        Self {
            routes: vec![
                TableRoute::new("stock_items_categories", "Item Categories", "/categories/"),
                TableRoute::new("stock_document_type", "Document Types", "/doctype/"),
                TableRoute::new("stock_items", "Items", "/items/"),
                TableRoute::new("stock_items_uom", "Units of Measure", "/uom/"),
                TableRoute::new("stock_movements", "Stock Movements", "/")
            ],
        }
    }

    pub fn resolve(&self, table: &str) -> Option<&str> {
        self.routes
            .iter()
            .find(|r| r.table == table)
            .map(|r| r.path.as_str())
    }

    /// Reverse lookup, ignoring leading and trailing slashes.
    pub fn table_for_path(&self, path: &str) -> Option<&TableRoute> {
        let wanted = path.trim_matches('/');
        self.routes.iter().find(|r| r.path.trim_matches('/') == wanted)
    }

    pub fn iter(&self) -> impl Iterator<Item = &TableRoute> {
        self.routes.iter()
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

impl Default for TableRoutes {
    fn default() -> Self {
        Self::stock_movements()
    }
}

impl<'de> Deserialize<'de> for TableRoutes {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let routes = Vec::<TableRoute>::deserialize(deserializer)?;
        TableRoutes::new(routes).map_err(<D::Error as serde::de::Error>::custom)
    }
}
