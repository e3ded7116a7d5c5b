use citadel_wallet_core::{
    AccountId, Asset, AssetAuthenticity, AssetCategory, AssetId, Balance, ContractType, Network,
    Policy, SupplyMetric, VerificationStatus, WalletAccount,
};

fn tether_asset(is_native: bool) -> Asset {
    Asset {
        id: AssetId::new("rgb:tether"),
        ticker: "USDT".to_owned(),
        name: "Tether USD".to_owned(),
        category: AssetCategory::Stablecoin,
        is_native,
        network: Network::Testnet,
        authenticity: AssetAuthenticity {
            status: VerificationStatus::Verified,
        },
        balance: Balance { total: 1_250 },
        known_supply: Some(1_000_000),
        max_supply: None,
    }
}

#[test]
fn every_contract_type_has_nonempty_labels_and_an_icon() {
    for contract_type in ContractType::ALL {
        assert!(!contract_type.localized_name().is_empty());
        assert!(!contract_type.localized_description().is_empty());
        assert!(!contract_type.symbol().is_empty());
    }
}

#[test]
fn contract_type_discriminants_are_stable() {
    let ids: Vec<u8> = ContractType::ALL.iter().map(|ct| ct.id()).collect();
    assert_eq!(ids, vec![1, 2, 3, 4, 5, 6, 7, 8]);
}

#[test]
fn only_current_contract_type_is_enabled() {
    for contract_type in ContractType::ALL {
        assert_eq!(
            contract_type.enabled(),
            contract_type == ContractType::Current,
            "{contract_type:?}"
        );
    }
}

#[test]
fn every_asset_category_has_label_and_icon() {
    for category in [
        AssetCategory::Currency,
        AssetCategory::Stablecoin,
        AssetCategory::Token,
        AssetCategory::Nft,
    ] {
        assert!(!category.localized_description().is_empty());
        assert!(!category.symbol().is_empty());
    }
}

#[test]
fn verification_status_is_verified_exactly_for_public_truth_and_verified() {
    assert!(VerificationStatus::PublicTruth.is_verified());
    assert!(VerificationStatus::Verified.is_verified());
    assert!(!VerificationStatus::Unverified.is_verified());

    for status in [
        VerificationStatus::PublicTruth,
        VerificationStatus::Verified,
        VerificationStatus::Unverified,
    ] {
        assert!(!status.localized_string().is_empty());
        assert!(!status.verified_symbol().is_empty());
    }
}

#[test]
fn network_labels_distinguish_mainnet_units() {
    assert_eq!(Network::Mainnet.sats_label(), "Sats.");
    assert_eq!(Network::Testnet.sats_label(), "tSats.");
    assert_eq!(Network::Signet.satoshis_label(), "Testnet satoshis");
    for network in [Network::Mainnet, Network::Testnet, Network::Signet] {
        assert!(!network.localized_description().is_empty());
    }
}

#[test]
fn native_assets_attribute_issuance_to_chain_consensus() {
    let native = tether_asset(true);
    assert_eq!(
        native.localized_issuer(),
        "Decentralized consensus on Bitcoin testnet blockchain"
    );

    let issued = tether_asset(false);
    assert_eq!(issued.localized_issuer(), "Trusted centralized party");
}

#[test]
fn balance_and_supply_format_as_value_plus_ticker() {
    let asset = tether_asset(false);
    assert_eq!(asset.formatted_balance(), "1250 USDT");
    assert_eq!(asset.formatted_supply(SupplyMetric::Known), "1000000 USDT");
    // Missing metric formats as zero rather than failing.
    assert_eq!(asset.formatted_supply(SupplyMetric::Max), "0 USDT");
}

#[test]
fn account_symbol_follows_policy_contract_type() {
    let account = WalletAccount {
        id: AccountId::new("checking"),
        name: "Checking".to_owned(),
        policy: Policy::Current {
            descriptor: "wpkh([f00dbabe/84h/1h/0h])".to_owned(),
        },
        network: Network::Testnet,
    };
    assert_eq!(account.contract_type(), ContractType::Current);
    assert_eq!(account.symbol(), ContractType::Current.symbol());
}
