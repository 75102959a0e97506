// Module structure for the access log analyzer.

// Core pipeline
pub mod parser;
pub mod stats;
pub mod report;

// Infrastructure
pub mod error;
pub mod input;
pub mod conf;
pub mod runtime;
