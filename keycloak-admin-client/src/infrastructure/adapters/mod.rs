pub mod reqwest_transport;
pub mod token_store;

pub use reqwest_transport::*;
pub use token_store::*;
