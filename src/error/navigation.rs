use std::fmt::{ Display, Formatter };

#[derive(Debug, Clone, PartialEq)]
pub enum NavigationError {
    Unavailable(String),
    Rejected(String),
    Unroutable(String),
}

impl Display for NavigationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            NavigationError::Unavailable(msg) => write!(f, "Navigation Unavailable: {}", msg),
            NavigationError::Rejected(msg) => write!(f, "Navigation Rejected: {}", msg),
            NavigationError::Unroutable(path) => write!(f, "No route for path: {}", path),
        }
    }
}

impl std::error::Error for NavigationError {}

#[cfg(target_arch = "wasm32")]
impl From<wasm_bindgen::JsValue> for NavigationError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        NavigationError::Rejected(format!("{:?}", value))
    }
}
