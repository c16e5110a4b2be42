pub mod config;
pub mod cors;
pub mod error;
pub mod handlers;
pub mod llm;
pub mod routes;
pub mod state;
pub mod translate;
