pub mod config;
pub mod token;
pub mod transport;

pub use config::*;
pub use token::*;
pub use transport::*;
