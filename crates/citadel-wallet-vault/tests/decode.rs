use citadel_wallet_core::{AccountId, AssetId, ScanPayload, VaultError, VaultPort};
use citadel_wallet_vault::EmbeddedVault;

#[test]
fn lightning_invoice_decodes_with_amount() {
    let vault = EmbeddedVault::testnet();
    let payload = vault.decode("lnbc25000n1pexample").expect("decodes");
    match payload {
        ScanPayload::Invoice(invoice) => {
            assert_eq!(invoice.amount, Some(25_000));
            assert_eq!(invoice.raw, "lnbc25000n1pexample");
            assert!(invoice.asset.is_none());
        }
        other => panic!("expected invoice, got {other:?}"),
    }
}

#[test]
fn consignment_string_decodes_with_asset_prefix() {
    let vault = EmbeddedVault::testnet();
    let payload = vault
        .decode("consignment:rgb:tether/cons-42")
        .expect("decodes");
    match payload {
        ScanPayload::Consignment(consignment) => {
            assert_eq!(consignment.asset, AssetId::new("rgb:tether"));
            assert_eq!(consignment.consignment_id, "cons-42");
        }
        other => panic!("expected consignment, got {other:?}"),
    }
}

#[test]
fn garbage_and_empty_strings_are_decode_errors() {
    let vault = EmbeddedVault::testnet();
    for raw in ["", "   ", "not-a-payment", "consignment:", "citadel:addr"] {
        let err = vault.decode(raw).expect_err("must not decode");
        assert!(matches!(err, VaultError::Decode(_)), "{raw:?} -> {err}");
    }
}

#[test]
fn composed_invoice_decodes_back_to_the_same_request() {
    let vault = EmbeddedVault::testnet();
    let composed = vault
        .compose_invoice(
            &AccountId::new("checking"),
            &AssetId::new("rgb:tether"),
            Some(75),
        )
        .expect("compose");

    match vault.decode(&composed.raw).expect("decode composed") {
        ScanPayload::Invoice(decoded) => {
            assert_eq!(decoded.beneficiary, composed.beneficiary);
            assert_eq!(decoded.asset, Some(AssetId::new("rgb:tether")));
            assert_eq!(decoded.amount, Some(75));
        }
        other => panic!("expected invoice, got {other:?}"),
    }
}

#[test]
fn composing_for_unknown_account_or_asset_fails() {
    let vault = EmbeddedVault::testnet();
    let unknown_account = vault.compose_invoice(
        &AccountId::new("nope"),
        &AssetId::new("btc"),
        None,
    );
    assert!(matches!(unknown_account, Err(VaultError::NotFound(_))));

    let unknown_asset = vault.compose_invoice(
        &AccountId::new("checking"),
        &AssetId::new("rgb:nope"),
        None,
    );
    assert!(matches!(unknown_asset, Err(VaultError::NotFound(_))));
}
