pub mod connection_pool;
pub mod schema;
