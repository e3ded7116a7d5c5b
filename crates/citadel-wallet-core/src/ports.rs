use thiserror::Error;

use crate::domain::{
    AccountId, Asset, AssetId, Consignment, ContractType, Invoice, ScanPayload, WalletAccount,
};

#[derive(Debug, Clone, Error)]
pub enum VaultError {
    #[error("decode error: {0}")]
    Decode(String),
    #[error("sync error: {0}")]
    Sync(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("validation error: {0}")]
    Invalid(String),
}

/// Wallet vault collaborator. Owns accounts, assets and all cryptographic
/// and network concerns; the presentation layer only reads from it.
pub trait VaultPort {
    fn accounts(&self) -> Result<Vec<WalletAccount>, VaultError>;
    fn account(&self, id: &AccountId) -> Result<WalletAccount, VaultError>;
    fn assets(&self) -> Result<Vec<Asset>, VaultError>;
    fn native_asset(&self) -> Result<Asset, VaultError>;
    fn decode(&self, raw: &str) -> Result<ScanPayload, VaultError>;
    fn compose_invoice(
        &self,
        account: &AccountId,
        asset: &AssetId,
        amount: Option<u64>,
    ) -> Result<Invoice, VaultError>;
    fn sync(&self, account: &AccountId) -> Result<(), VaultError>;
    fn create_account(
        &self,
        name: &str,
        contract_type: ContractType,
    ) -> Result<WalletAccount, VaultError>;
    fn create_keyring(&self, name: &str) -> Result<(), VaultError>;
}

/// Consignment acceptance flow. Owns acceptance state outside the sheet
/// coordinator; the coordinator only hands it a decoded payload plus the
/// target account context.
pub trait ImportPort {
    fn accept_consignment(
        &self,
        consignment: &Consignment,
        account: &AccountId,
    ) -> Result<(), VaultError>;
}
