//! CLI command implementations.

pub mod init;
pub mod make;

pub use init::init_project;
pub use make::{make_site, MakeOptions};
