pub mod functions_client;

pub use functions_client::FunctionsAnalysisClient;
