pub mod connection;
pub mod devices;
pub mod send;
