pub mod config;
pub mod db;
pub mod errors;
pub mod models;
pub mod queries;
pub mod schema;
pub mod seed;
pub mod telemetry;
pub mod validations;
