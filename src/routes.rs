use dioxus::prelude::*;
use crate::views::{ Home, Navbar, TablePage };

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[layout(Navbar)]
    #[route("/")]
    Home,
    #[route("/:..segments")] TablePage {
        segments: Vec<String>,
    },
}
