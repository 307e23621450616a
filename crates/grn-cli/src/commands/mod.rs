pub mod grid;
pub mod init;
pub mod schema;
pub mod sync;
pub mod validate;
