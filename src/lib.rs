pub mod api;
pub mod collector;
pub mod models;
pub mod output;
pub mod utils;
