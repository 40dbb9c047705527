//! Data module - data file loading and column processing

mod loader;
mod processor;

pub use loader::{DataLoader, DataTable};
pub use processor::DataProcessor;
