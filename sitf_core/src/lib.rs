pub mod models;
pub mod plugins;
pub mod utils;
