use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AccountId(pub String);

impl AccountId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl std::fmt::Display for AccountId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AssetId(pub String);

impl AssetId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl std::fmt::Display for AssetId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Network {
    Mainnet,
    Testnet,
    Signet,
}

impl Network {
    pub fn localized_description(self) -> &'static str {
        match self {
            Network::Mainnet => "Bitcoin mainnet",
            Network::Testnet => "Bitcoin testnet",
            Network::Signet => "Bitcoin signet",
        }
    }

    pub fn sats_label(self) -> &'static str {
        match self {
            Network::Mainnet => "Sats.",
            Network::Testnet | Network::Signet => "tSats.",
        }
    }

    pub fn satoshis_label(self) -> &'static str {
        match self {
            Network::Mainnet => "Satoshis",
            Network::Testnet | Network::Signet => "Testnet satoshis",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AssetCategory {
    Currency,
    Stablecoin,
    Token,
    Nft,
}

impl AssetCategory {
    pub fn localized_description(self) -> &'static str {
        match self {
            AssetCategory::Currency => "Digital currency",
            AssetCategory::Stablecoin => "Stable coin",
            AssetCategory::Token => "Fungible asset",
            AssetCategory::Nft => "Non-fungible token",
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            AssetCategory::Currency => "₿",
            AssetCategory::Stablecoin => "💲",
            AssetCategory::Token => "🔹",
            AssetCategory::Nft => "🖼",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VerificationStatus {
    PublicTruth,
    Verified,
    Unverified,
}

impl VerificationStatus {
    pub fn is_verified(self) -> bool {
        match self {
            VerificationStatus::PublicTruth | VerificationStatus::Verified => true,
            VerificationStatus::Unverified => false,
        }
    }

    pub fn localized_string(self) -> &'static str {
        match self {
            VerificationStatus::PublicTruth => "Public fact",
            VerificationStatus::Verified => "Verified",
            VerificationStatus::Unverified => "Unverified",
        }
    }

    pub fn verified_symbol(self) -> &'static str {
        if self.is_verified() {
            "✅"
        } else {
            "❌"
        }
    }
}

/// Product-defined account behavior category. Only `Current` is live;
/// the rest are presented in account creation as upcoming capabilities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum ContractType {
    Current = 1,
    Saving = 2,
    Instant = 3,
    Storm = 4,
    Prometheus = 5,
    Trading = 6,
    Staking = 7,
    Liquidity = 8,
}

impl ContractType {
    pub const ALL: [ContractType; 8] = [
        ContractType::Current,
        ContractType::Saving,
        ContractType::Instant,
        ContractType::Storm,
        ContractType::Prometheus,
        ContractType::Trading,
        ContractType::Staking,
        ContractType::Liquidity,
    ];

    pub fn id(self) -> u8 {
        self as u8
    }

    pub fn symbol(self) -> &'static str {
        match self {
            ContractType::Current => "💵",
            ContractType::Saving => "🏦",
            ContractType::Instant => "⚡",
            ContractType::Storm => "🌩",
            ContractType::Prometheus => "🖥",
            ContractType::Trading => "⇄",
            ContractType::Staking => "📦",
            ContractType::Liquidity => "💧",
        }
    }

    pub fn localized_name(self) -> &'static str {
        match self {
            ContractType::Current => "Current account",
            ContractType::Saving => "Saving account",
            ContractType::Instant => "Instant payments (Lightning)",
            ContractType::Storm => "Data storage",
            ContractType::Prometheus => "Computing",
            ContractType::Trading => "Trading",
            ContractType::Staking => "Staking",
            ContractType::Liquidity => "Liquidity provider / DEX",
        }
    }

    pub fn localized_description(self) -> &'static str {
        match self {
            ContractType::Current => {
                "A normal bitcoin or digital assets account suitable for on-chain \
                 payments. Accounts of this type may be single-signature (personal) or \
                 multi-signature (corporate or family use); power users can add custom \
                 lock times and other miniscript conditions. Keys for current accounts \
                 are usually kept hot, so for HODLing look at saving accounts instead."
            }
            ContractType::Saving => {
                "For true HODLers: saving accounts always keep private keys cold and \
                 will support covenants once CTV activates."
            }
            ContractType::Instant => {
                "Fast and cheap micropayments over lightning channels of different \
                 sorts: unilaterally funded channels, bilaterally funded channels, \
                 channel factories and RGB-asset enabled channels."
            }
            ContractType::Storm => "Pay for decentralized data storage.",
            ContractType::Prometheus => "Pay for decentralized computing.",
            ContractType::Trading => {
                "Use the decentralized exchange functionality of the lightning network \
                 for cheap and efficient trading operations."
            }
            ContractType::Staking => {
                "Put bitcoins and digital assets into a liquidity pool at a lightning \
                 node and earn a share of the fees the node collects as part of the \
                 decentralized exchange."
            }
            ContractType::Liquidity => {
                "Operate a lightning node as part of the decentralized exchange by \
                 providing node liquidity to the network, maintaining a liquidity pool \
                 to earn more fees."
            }
        }
    }

    pub fn enabled(self) -> bool {
        match self {
            ContractType::Current => true,
            ContractType::Saving
            | ContractType::Instant
            | ContractType::Storm
            | ContractType::Prometheus
            | ContractType::Trading
            | ContractType::Staking
            | ContractType::Liquidity => false,
        }
    }
}

/// Spending policy attached to an account by the vault. The vault only
/// issues `Current` policies today; the enum is open for future kinds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Policy {
    Current { descriptor: String },
}

impl Policy {
    pub fn contract_type(&self) -> ContractType {
        match self {
            Policy::Current { .. } => ContractType::Current,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalletAccount {
    pub id: AccountId,
    pub name: String,
    pub policy: Policy,
    pub network: Network,
}

impl WalletAccount {
    pub fn contract_type(&self) -> ContractType {
        self.policy.contract_type()
    }

    pub fn symbol(&self) -> &'static str {
        self.contract_type().symbol()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Balance {
    pub total: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SupplyMetric {
    Known,
    Max,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetAuthenticity {
    pub status: VerificationStatus,
}

impl AssetAuthenticity {
    pub fn symbol(&self) -> &'static str {
        self.status.verified_symbol()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Asset {
    pub id: AssetId,
    pub ticker: String,
    pub name: String,
    pub category: AssetCategory,
    pub is_native: bool,
    pub network: Network,
    pub authenticity: AssetAuthenticity,
    pub balance: Balance,
    pub known_supply: Option<u64>,
    pub max_supply: Option<u64>,
}

impl Asset {
    pub fn symbol(&self) -> &'static str {
        self.category.symbol()
    }

    pub fn supply(&self, metric: SupplyMetric) -> Option<u64> {
        match metric {
            SupplyMetric::Known => self.known_supply,
            SupplyMetric::Max => self.max_supply,
        }
    }

    pub fn formatted_balance(&self) -> String {
        format!("{} {}", self.balance.total, self.ticker)
    }

    pub fn formatted_supply(&self, metric: SupplyMetric) -> String {
        format!("{} {}", self.supply(metric).unwrap_or(0), self.ticker)
    }

    pub fn localized_issuer(&self) -> String {
        if self.is_native {
            format!(
                "Decentralized consensus on {} blockchain",
                self.network.localized_description()
            )
        } else {
            "Trusted centralized party".to_owned()
        }
    }
}

/// Payment request payload decoded from a scanned string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Invoice {
    pub beneficiary: String,
    pub asset: Option<AssetId>,
    pub amount: Option<u64>,
    pub raw: String,
}

/// Off-chain transfer proof artifact imported into the wallet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Consignment {
    pub consignment_id: String,
    pub asset: AssetId,
    pub raw: String,
}

/// Outcome of a vault decode of a scanned string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanPayload {
    Invoice(Invoice),
    Consignment(Consignment),
}
