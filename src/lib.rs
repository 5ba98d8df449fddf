pub mod configuration;
pub mod db;
pub mod docs;
pub mod forms;
pub mod helpers;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod startup;
pub mod telemetry;
