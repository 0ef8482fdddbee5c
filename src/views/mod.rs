mod home;
mod navbar;
mod table_page;
mod table_select;

pub use home::Home;
pub use navbar::Navbar;
pub use table_page::TablePage;
pub use table_select::TableSelect;
