pub mod coordinator;
pub mod domain;
pub mod ports;
pub mod sheet;

pub use coordinator::SheetCoordinator;
pub use domain::{
    AccountId, Asset, AssetAuthenticity, AssetCategory, AssetId, Balance, Consignment,
    ContractType, Invoice, Network, Policy, ScanPayload, SupplyMetric, VerificationStatus,
    WalletAccount,
};
pub use ports::{ImportPort, VaultError, VaultPort};
pub use sheet::{ImportCategory, Sheet};
