pub mod chart;
pub mod error;
pub mod symlog;
pub mod table;

pub use chart::{render, RenderConfig};
pub use error::ChartError;
pub use table::{Record, ResultsTable, Series};
