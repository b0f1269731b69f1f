pub mod connection;

pub use connection::Database;
