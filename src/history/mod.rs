mod results_log;

pub use results_log::ResultsLog;
