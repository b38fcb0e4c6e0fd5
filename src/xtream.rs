pub mod api;
pub mod structs;

pub use api::{fetch_categories, fetch_channels};
pub use structs::{Category, Channel};
