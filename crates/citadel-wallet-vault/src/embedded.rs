//! In-memory vault used by the shell and integration tests. Real key,
//! chain and network handling live in the production vault behind the
//! same port.

use std::sync::Mutex;

use citadel_wallet_core::{
    AccountId, Asset, AssetAuthenticity, AssetCategory, AssetId, Balance, Consignment,
    ContractType, Invoice, Network, Policy, ScanPayload, VaultError, VaultPort,
    VerificationStatus, WalletAccount,
};

struct VaultState {
    accounts: Vec<WalletAccount>,
    assets: Vec<Asset>,
    keyrings: Vec<String>,
    sync_count: u64,
}

pub struct EmbeddedVault {
    state: Mutex<VaultState>,
    network: Network,
}

impl Default for EmbeddedVault {
    fn default() -> Self {
        Self::testnet()
    }
}

impl EmbeddedVault {
    pub fn testnet() -> Self {
        let network = Network::Testnet;
        Self {
            state: Mutex::new(VaultState {
                accounts: vec![WalletAccount {
                    id: AccountId::new("checking"),
                    name: "Checking".to_owned(),
                    policy: Policy::Current {
                        descriptor: "wpkh([f00dbabe/84h/1h/0h]tpub.../0/*)".to_owned(),
                    },
                    network,
                }],
                assets: vec![
                    Asset {
                        id: AssetId::new("btc"),
                        ticker: "BTC".to_owned(),
                        name: "Bitcoin".to_owned(),
                        category: AssetCategory::Currency,
                        is_native: true,
                        network,
                        authenticity: AssetAuthenticity {
                            status: VerificationStatus::PublicTruth,
                        },
                        balance: Balance { total: 1_250_000 },
                        known_supply: Some(19_800_000),
                        max_supply: Some(21_000_000),
                    },
                    Asset {
                        id: AssetId::new("rgb:tether"),
                        ticker: "USDT".to_owned(),
                        name: "Tether USD".to_owned(),
                        category: AssetCategory::Stablecoin,
                        is_native: false,
                        network,
                        authenticity: AssetAuthenticity {
                            status: VerificationStatus::Verified,
                        },
                        balance: Balance { total: 320 },
                        known_supply: Some(1_000_000),
                        max_supply: None,
                    },
                ],
                keyrings: vec!["Primary seed".to_owned()],
                sync_count: 0,
            }),
            network,
        }
    }

    pub fn network(&self) -> Network {
        self.network
    }

    pub fn sync_count(&self) -> u64 {
        self.state.lock().expect("vault state poisoned").sync_count
    }

    fn slug(name: &str) -> String {
        name.trim()
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() {
                    c.to_ascii_lowercase()
                } else {
                    '-'
                }
            })
            .collect()
    }
}

impl VaultPort for EmbeddedVault {
    fn accounts(&self) -> Result<Vec<WalletAccount>, VaultError> {
        Ok(self
            .state
            .lock()
            .expect("vault state poisoned")
            .accounts
            .clone())
    }

    fn account(&self, id: &AccountId) -> Result<WalletAccount, VaultError> {
        self.state
            .lock()
            .expect("vault state poisoned")
            .accounts
            .iter()
            .find(|account| &account.id == id)
            .cloned()
            .ok_or_else(|| VaultError::NotFound(format!("account {id}")))
    }

    fn assets(&self) -> Result<Vec<Asset>, VaultError> {
        Ok(self
            .state
            .lock()
            .expect("vault state poisoned")
            .assets
            .clone())
    }

    fn native_asset(&self) -> Result<Asset, VaultError> {
        self.state
            .lock()
            .expect("vault state poisoned")
            .assets
            .iter()
            .find(|asset| asset.is_native)
            .cloned()
            .ok_or_else(|| VaultError::NotFound("native asset".to_owned()))
    }

    fn decode(&self, raw: &str) -> Result<ScanPayload, VaultError> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Err(VaultError::Decode("empty payment string".to_owned()));
        }

        if let Some(rest) = raw.strip_prefix("consignment:") {
            let (asset, consignment_id) = rest.split_once('/').ok_or_else(|| {
                VaultError::Decode("consignment is missing an asset prefix".to_owned())
            })?;
            if consignment_id.is_empty() {
                return Err(VaultError::Decode("consignment id is empty".to_owned()));
            }
            tracing::debug!(consignment_id, "decoded consignment");
            return Ok(ScanPayload::Consignment(Consignment {
                consignment_id: consignment_id.to_owned(),
                asset: AssetId::new(asset),
                raw: raw.to_owned(),
            }));
        }

        if raw.starts_with("lnbc") || raw.starts_with("lntb") {
            let amount: String = raw[4..].chars().take_while(char::is_ascii_digit).collect();
            tracing::debug!(len = raw.len(), "decoded lightning invoice");
            return Ok(ScanPayload::Invoice(Invoice {
                beneficiary: raw.to_owned(),
                asset: None,
                amount: amount.parse().ok(),
                raw: raw.to_owned(),
            }));
        }

        if let Some(rest) = raw.strip_prefix("citadel:") {
            let (beneficiary, tail) = rest
                .split_once('/')
                .ok_or_else(|| VaultError::Decode("invoice is missing an asset".to_owned()))?;
            let (asset, amount) = match tail.split_once("?amount=") {
                Some((asset, amount)) => {
                    let amount = amount.parse().map_err(|_| {
                        VaultError::Decode(format!("invalid invoice amount: {amount}"))
                    })?;
                    (asset, Some(amount))
                }
                None => (tail, None),
            };
            return Ok(ScanPayload::Invoice(Invoice {
                beneficiary: beneficiary.to_owned(),
                asset: Some(AssetId::new(asset)),
                amount,
                raw: raw.to_owned(),
            }));
        }

        Err(VaultError::Decode(format!(
            "unrecognized payment string: {raw:.24}"
        )))
    }

    fn compose_invoice(
        &self,
        account: &AccountId,
        asset: &AssetId,
        amount: Option<u64>,
    ) -> Result<Invoice, VaultError> {
        let account = self.account(account)?;
        let state = self.state.lock().expect("vault state poisoned");
        if !state.assets.iter().any(|known| &known.id == asset) {
            return Err(VaultError::NotFound(format!("asset {asset}")));
        }

        let beneficiary = format!("tb1q{}", EmbeddedVault::slug(&account.id.0));
        let raw = match amount {
            Some(amount) => format!("citadel:{beneficiary}/{asset}?amount={amount}"),
            None => format!("citadel:{beneficiary}/{asset}"),
        };
        Ok(Invoice {
            beneficiary,
            asset: Some(asset.clone()),
            amount,
            raw,
        })
    }

    fn sync(&self, account: &AccountId) -> Result<(), VaultError> {
        let mut state = self.state.lock().expect("vault state poisoned");
        if !state.accounts.iter().any(|known| &known.id == account) {
            return Err(VaultError::Sync(format!("unknown account {account}")));
        }
        state.sync_count += 1;
        tracing::info!(%account, "synced account");
        Ok(())
    }

    fn create_account(
        &self,
        name: &str,
        contract_type: ContractType,
    ) -> Result<WalletAccount, VaultError> {
        if contract_type != ContractType::Current {
            return Err(VaultError::Invalid(format!(
                "{} accounts are not available yet",
                contract_type.localized_name()
            )));
        }
        let name = name.trim();
        if name.is_empty() {
            return Err(VaultError::Invalid("account name is empty".to_owned()));
        }

        let mut state = self.state.lock().expect("vault state poisoned");
        let id = AccountId::new(EmbeddedVault::slug(name));
        if state.accounts.iter().any(|known| known.id == id) {
            return Err(VaultError::Invalid(format!(
                "account {id} already exists"
            )));
        }

        let account = WalletAccount {
            id,
            name: name.to_owned(),
            policy: Policy::Current {
                descriptor: format!("wpkh([f00dbabe/84h/1h/{}h])", state.accounts.len()),
            },
            network: self.network,
        };
        state.accounts.push(account.clone());
        tracing::info!(account = %account.id, "created account");
        Ok(account)
    }

    fn create_keyring(&self, name: &str) -> Result<(), VaultError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(VaultError::Invalid("keyring name is empty".to_owned()));
        }
        let mut state = self.state.lock().expect("vault state poisoned");
        if state.keyrings.iter().any(|known| known == name) {
            return Err(VaultError::Invalid(format!(
                "keyring {name} already exists"
            )));
        }
        state.keyrings.push(name.to_owned());
        tracing::info!(keyring = name, "created keyring");
        Ok(())
    }
}
