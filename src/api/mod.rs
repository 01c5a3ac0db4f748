pub mod docs;
pub mod error;
pub mod server;
pub mod users;
