pub mod configs;
pub mod graphql;
pub mod rest;
