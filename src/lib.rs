pub mod configuration;
pub mod domain;
pub mod email;
pub mod routes;
pub mod startup;
pub mod subscription_client;
pub mod telemetry;
