use errors::Error;

pub mod auth_client;
pub mod authentication;
pub mod configuration;
pub mod controller;
pub mod domain;
pub mod errors;
pub mod menu;
pub mod middleware;
pub mod password_change;
pub mod startup;
pub mod telemetry;
pub mod view_engine;

/// Application results options list
pub type Result<T, E = Error> = std::result::Result<T, E>;
