pub mod embedded;
pub mod import;

pub use embedded::EmbeddedVault;
pub use import::{AcceptedConsignment, ImportFlowAdapter};
