pub mod chatbot;
pub mod footprint;
pub mod metrics_manager;
pub mod report_generator;
pub mod session_manager;
