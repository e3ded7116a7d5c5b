//! Transient per-screen UI state. Sheet form states are reset whenever the
//! coordinator presents a new sheet (tracked by its generation counter);
//! the wallet pane state lives for the whole session.

use citadel_wallet_core::{AccountId, AssetId, Invoice};

/// Wallet pane tab selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WalletTab {
    #[default]
    History,
    Balance,
}

#[derive(Debug, Default)]
pub struct WalletPaneState {
    pub selected_account: Option<AccountId>,
    pub selected_asset: Option<AssetId>,
    pub selected_tab: WalletTab,
    /// Inline error for this screen (sync failures etc.); never touches
    /// the sheet state.
    pub error: Option<String>,
    pub info: Option<String>,
}

#[derive(Debug, Default)]
pub struct InvoiceFormState {
    pub account: Option<AccountId>,
    pub asset: Option<AssetId>,
    pub amount: String,
    pub composed: Option<Invoice>,
    pub error: Option<String>,
}

#[derive(Debug, Default)]
pub struct ScanFormState {
    pub raw: String,
    pub in_flight: bool,
    /// Invoice decoded without an account context; the sheet renders an
    /// account picker for it instead of guessing.
    pub orphan_invoice: Option<Invoice>,
}

#[derive(Debug, Default)]
pub struct DetailsState {
    pub error: Option<String>,
    pub info: Option<String>,
}

#[derive(Debug)]
pub struct AddAccountFormState {
    pub name: String,
    pub selected: citadel_wallet_core::ContractType,
    pub error: Option<String>,
}

impl Default for AddAccountFormState {
    fn default() -> Self {
        Self {
            name: String::new(),
            selected: citadel_wallet_core::ContractType::Current,
            error: None,
        }
    }
}

#[derive(Debug, Default)]
pub struct AddKeyringFormState {
    pub name: String,
    pub error: Option<String>,
}

/// All sheet-scoped form states, reset together on re-presentation.
#[derive(Debug, Default)]
pub struct SheetForms {
    pub invoice: InvoiceFormState,
    pub scan: ScanFormState,
    pub details: DetailsState,
    pub add_account: AddAccountFormState,
    pub add_keyring: AddKeyringFormState,
}
