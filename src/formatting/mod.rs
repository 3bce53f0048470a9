pub mod tables;
pub mod utils;

pub use tables::print_json;
