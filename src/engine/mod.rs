mod errors;
mod import;
mod report_engine;
#[cfg(test)]
mod tests;

pub use errors::EngineError;
pub use import::{CsvImporter, ImportReport};
pub use report_engine::{PeriodReport, ReportEngine, ReportEngineBuilder};
