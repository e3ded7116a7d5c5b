use citadel_wallet_core::{
    AccountId, AssetId, Consignment, Invoice, Network, Policy, WalletAccount,
};

#[test]
fn invoice_roundtrip_serialization() {
    let invoice = Invoice {
        beneficiary: "bc1qexample".to_owned(),
        asset: Some(AssetId::new("rgb:tether")),
        amount: Some(42_000),
        raw: "lnbc1exampleinvoice".to_owned(),
    };

    let encoded = serde_json::to_vec(&invoice).expect("serialize invoice");
    let decoded: Invoice = serde_json::from_slice(&encoded).expect("deserialize invoice");
    assert_eq!(decoded, invoice);
}

#[test]
fn consignment_roundtrip_serialization() {
    let consignment = Consignment {
        consignment_id: "cons-7".to_owned(),
        asset: AssetId::new("rgb:tether"),
        raw: "consignment:cons-7".to_owned(),
    };

    let encoded = serde_json::to_string(&consignment).expect("serialize consignment");
    let decoded: Consignment =
        serde_json::from_str(&encoded).expect("deserialize consignment");
    assert_eq!(decoded, consignment);
}

#[test]
fn wallet_account_serializes_without_loss() {
    let account = WalletAccount {
        id: AccountId::new("checking"),
        name: "Checking".to_owned(),
        policy: Policy::Current {
            descriptor: "wpkh([f00dbabe/84h/1h/0h])".to_owned(),
        },
        network: Network::Signet,
    };

    let json = serde_json::to_string(&account).expect("serialize account");
    assert!(json.contains("\"Checking\""));
    let decoded: WalletAccount = serde_json::from_str(&json).expect("deserialize account");
    assert_eq!(decoded, account);
}
