use crate::domain::{AccountId, AssetId, Invoice};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportCategory {
    Invoice,
    Consignment,
}

impl ImportCategory {
    pub fn label(self) -> &'static str {
        match self {
            ImportCategory::Invoice => "invoice",
            ImportCategory::Consignment => "consignment",
        }
    }
}

/// Modal sheet presented over the wallet view. At most one is active at a
/// time; the coordinator owns the active slot.
#[derive(Debug, Clone, PartialEq)]
pub enum Sheet {
    CreateInvoice {
        account: Option<AccountId>,
        preset_asset: Option<AssetId>,
    },
    Scan {
        label: String,
        target: ImportCategory,
    },
    Pay {
        account: AccountId,
        invoice: Invoice,
    },
    AccountDetails {
        account: AccountId,
    },
    AddAccount,
    AddKeyring,
}

impl Sheet {
    /// Stable discriminant for view identity and diffing only.
    pub fn id(&self) -> u8 {
        match self {
            Sheet::CreateInvoice { .. } => 0,
            Sheet::Scan { .. } => 1,
            Sheet::Pay { .. } => 2,
            Sheet::AccountDetails { .. } => 3,
            Sheet::AddAccount => 4,
            Sheet::AddKeyring => 5,
        }
    }
}
