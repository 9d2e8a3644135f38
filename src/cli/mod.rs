pub mod consolidate;
pub mod server;
