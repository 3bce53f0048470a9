pub mod settings;

pub use settings::{OutputFormat, Settings};
