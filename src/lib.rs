pub mod config;
pub mod endpoints;
pub mod models;
pub mod repos;
