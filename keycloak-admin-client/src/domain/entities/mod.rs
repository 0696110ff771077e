pub mod authentication_flow;
pub mod common;
pub mod identity_provider;
pub mod user_storage;

pub use authentication_flow::*;
pub use common::*;
pub use identity_provider::*;
pub use user_storage::*;
