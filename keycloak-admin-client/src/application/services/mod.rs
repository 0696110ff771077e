pub mod authentication_flow_management;
pub mod exchange;
pub mod identity_provider_management;
pub mod user_storage_management;

pub use authentication_flow_management::*;
pub use exchange::AdminExchange;
pub use identity_provider_management::*;
pub use user_storage_management::*;
