use citadel_wallet_core::{
    AccountId, Consignment, ImportCategory, Invoice, ScanPayload, Sheet, SheetCoordinator,
    VaultError,
};

fn checking() -> AccountId {
    AccountId::new("checking")
}

fn lnbc_invoice() -> Invoice {
    Invoice {
        beneficiary: "bc1qexample".to_owned(),
        asset: None,
        amount: Some(25_000),
        raw: "lnbc1exampleinvoice".to_owned(),
    }
}

fn consignment() -> Consignment {
    Consignment {
        consignment_id: "cons-1".to_owned(),
        asset: citadel_wallet_core::AssetId::new("rgb:usdt"),
        raw: "consignment:cons-1".to_owned(),
    }
}

#[test]
fn at_most_one_sheet_is_active_after_any_request_sequence() {
    let mut coordinator = SheetCoordinator::new();
    assert!(coordinator.active().is_none());

    coordinator.request(Sheet::AddAccount);
    coordinator.request(Sheet::AddKeyring);
    coordinator.request(Sheet::CreateInvoice {
        account: None,
        preset_asset: None,
    });

    let active = coordinator.active().expect("one sheet active");
    assert_eq!(active.id(), 0);
}

#[test]
fn dismiss_is_idempotent() {
    let mut coordinator = SheetCoordinator::new();
    coordinator.dismiss();
    assert!(coordinator.active().is_none());

    coordinator.request(Sheet::AddAccount);
    coordinator.dismiss();
    coordinator.dismiss();
    assert!(coordinator.active().is_none());
    assert!(coordinator.error().is_none());
}

#[test]
fn repeat_request_of_same_variant_is_a_fresh_presentation() {
    let mut coordinator = SheetCoordinator::new();
    coordinator.request(Sheet::AddAccount);
    let first = coordinator.generation();
    coordinator.request(Sheet::AddAccount);
    assert_eq!(coordinator.active().map(Sheet::id), Some(4));
    assert!(coordinator.generation() > first);
}

#[test]
fn scan_with_bound_account_transitions_to_pay() {
    let mut coordinator = SheetCoordinator::new();
    coordinator.request_scan("invoice", ImportCategory::Invoice, Some(checking()));

    coordinator.complete_scan(Ok(ScanPayload::Invoice(lnbc_invoice())));

    match coordinator.active() {
        Some(Sheet::Pay { account, invoice }) => {
            assert_eq!(account, &checking());
            assert_eq!(invoice.raw, "lnbc1exampleinvoice");
        }
        other => panic!("expected pay sheet, got {other:?}"),
    }
    assert!(coordinator.error().is_none());
}

#[test]
fn scan_without_account_parks_the_invoice_for_account_selection() {
    let mut coordinator = SheetCoordinator::new();
    coordinator.request_scan("invoice", ImportCategory::Invoice, None);

    coordinator.complete_scan(Ok(ScanPayload::Invoice(lnbc_invoice())));

    // Scan sheet stays up; the caller routes the parked invoice.
    assert_eq!(coordinator.active().map(Sheet::id), Some(1));
    let parked = coordinator.take_pending_invoice().expect("parked invoice");
    assert_eq!(parked.beneficiary, "bc1qexample");
    assert!(coordinator.take_pending_invoice().is_none());
}

#[test]
fn decode_failure_keeps_scan_sheet_and_sets_error() {
    let mut coordinator = SheetCoordinator::new();
    coordinator.request_scan("invoice", ImportCategory::Invoice, Some(checking()));

    coordinator.complete_scan(Err(VaultError::Decode("garbled payload".to_owned())));

    assert_eq!(coordinator.active().map(Sheet::id), Some(1));
    let error = coordinator.error().expect("error slot populated");
    assert!(!error.is_empty());
    assert!(error.contains("garbled payload"));
}

#[test]
fn stale_completion_after_dismiss_is_a_noop() {
    let mut coordinator = SheetCoordinator::new();
    coordinator.request_scan("invoice", ImportCategory::Invoice, Some(checking()));
    coordinator.dismiss();

    coordinator.complete_scan(Ok(ScanPayload::Invoice(lnbc_invoice())));

    assert!(coordinator.active().is_none());
    assert!(coordinator.error().is_none());
    assert!(coordinator.take_pending_invoice().is_none());
}

#[test]
fn completion_while_a_non_scan_sheet_is_active_is_ignored() {
    let mut coordinator = SheetCoordinator::new();
    coordinator.request(Sheet::AddKeyring);

    coordinator.complete_scan(Ok(ScanPayload::Invoice(lnbc_invoice())));

    assert_eq!(coordinator.active().map(Sheet::id), Some(5));
    assert!(coordinator.error().is_none());
}

#[test]
fn consignment_scan_hands_off_and_dismisses() {
    let mut coordinator = SheetCoordinator::new();
    coordinator.request_scan("consignment", ImportCategory::Consignment, Some(checking()));

    coordinator.complete_scan(Ok(ScanPayload::Consignment(consignment())));

    assert!(coordinator.active().is_none());
    let (handed, account) = coordinator
        .take_pending_consignment()
        .expect("consignment handed off");
    assert_eq!(handed.consignment_id, "cons-1");
    assert_eq!(account, Some(checking()));
}

#[test]
fn consignment_scan_without_account_still_hands_off_for_selection() {
    let mut coordinator = SheetCoordinator::new();
    coordinator.request_scan("consignment", ImportCategory::Consignment, None);

    coordinator.complete_scan(Ok(ScanPayload::Consignment(consignment())));

    let (_, account) = coordinator
        .take_pending_consignment()
        .expect("consignment handed off");
    assert_eq!(account, None);
}

#[test]
fn payload_not_matching_scan_target_reads_as_decode_failure() {
    let mut coordinator = SheetCoordinator::new();
    coordinator.request_scan("consignment", ImportCategory::Consignment, Some(checking()));

    coordinator.complete_scan(Ok(ScanPayload::Invoice(lnbc_invoice())));

    assert_eq!(coordinator.active().map(Sheet::id), Some(1));
    assert!(coordinator
        .error()
        .expect("mismatch reported")
        .contains("consignment"));
}

#[test]
fn requesting_details_discards_add_account_without_cancel_event() {
    let mut coordinator = SheetCoordinator::new();
    coordinator.request(Sheet::AddAccount);
    coordinator.request(Sheet::AccountDetails {
        account: checking(),
    });

    match coordinator.active() {
        Some(Sheet::AccountDetails { account }) => assert_eq!(account, &checking()),
        other => panic!("expected account details, got {other:?}"),
    }
}

#[test]
fn reported_error_does_not_change_the_active_sheet() {
    let mut coordinator = SheetCoordinator::new();
    coordinator.request(Sheet::AccountDetails {
        account: checking(),
    });

    coordinator.report_error("sync error: electrum unreachable");

    assert_eq!(coordinator.active().map(Sheet::id), Some(3));
    assert!(coordinator.error().unwrap().contains("electrum"));

    coordinator.clear_error();
    assert!(coordinator.error().is_none());
    assert_eq!(coordinator.active().map(Sheet::id), Some(3));
}
