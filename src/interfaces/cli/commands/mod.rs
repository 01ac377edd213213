//! CLI command implementations

mod clear;
mod config_gen;
mod delete;
mod list;
mod shorten;

pub use clear::clear_urls;
pub use config_gen::config_generate;
pub use delete::delete_url;
pub use list::{list_urls, render_list};
pub use shorten::shorten_url;
