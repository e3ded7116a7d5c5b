use crate::domain::{AccountId, Consignment, Invoice, ScanPayload};
use crate::ports::VaultError;
use crate::sheet::{ImportCategory, Sheet};

/// Single source of truth for the active modal sheet.
///
/// All transitions happen on the UI event loop; asynchronous decode results
/// re-enter through [`SheetCoordinator::complete_scan`], which ignores
/// completions that arrive after the scan sheet was dismissed.
#[derive(Debug, Default)]
pub struct SheetCoordinator {
    active: Option<Sheet>,
    error: Option<String>,
    scan_account: Option<AccountId>,
    pending_invoice: Option<Invoice>,
    pending_consignment: Option<(Consignment, Option<AccountId>)>,
    generation: u64,
}

impl SheetCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> Option<&Sheet> {
        self.active.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Bumped on every `request`, so views can reset transient per-sheet
    /// state even when the same variant is presented twice in a row.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Present a sheet, replacing whatever is active. The previous sheet is
    /// dismissed implicitly; there is no cancellation callback.
    pub fn request(&mut self, sheet: Sheet) {
        self.reset_transients();
        self.generation = self.generation.saturating_add(1);
        self.active = Some(sheet);
    }

    /// Present the scan sheet, binding the account the scan was initiated
    /// from (if any) so a decoded invoice can flow straight into `Pay`.
    pub fn request_scan(
        &mut self,
        label: impl Into<String>,
        target: ImportCategory,
        account: Option<AccountId>,
    ) {
        self.request(Sheet::Scan {
            label: label.into(),
            target,
        });
        self.scan_account = account;
    }

    /// Clear the active sheet. Idempotent: dismissing with nothing active
    /// is a no-op.
    pub fn dismiss(&mut self) {
        self.reset_transients();
        self.active = None;
    }

    /// Deliver the outcome of a scan decode performed by the vault.
    ///
    /// A completion with no scan sheet active is a stale callback (the user
    /// dismissed the sheet while the decode was in flight) and is dropped.
    pub fn complete_scan(&mut self, outcome: Result<ScanPayload, VaultError>) {
        let target = match &self.active {
            Some(Sheet::Scan { target, .. }) => *target,
            _ => return,
        };

        match (outcome, target) {
            (Err(err), _) => {
                // Leave the scan sheet up so the user can retry.
                self.error = Some(err.to_string());
            }
            (Ok(ScanPayload::Invoice(invoice)), ImportCategory::Invoice) => {
                self.error = None;
                match self.scan_account.take() {
                    Some(account) => {
                        self.generation = self.generation.saturating_add(1);
                        self.active = Some(Sheet::Pay { account, invoice });
                    }
                    None => {
                        // No account context: park the invoice and let the
                        // caller pick an account instead of guessing one.
                        self.pending_invoice = Some(invoice);
                    }
                }
            }
            (Ok(ScanPayload::Consignment(consignment)), ImportCategory::Consignment) => {
                let account = self.scan_account.take();
                self.error = None;
                self.pending_consignment = Some((consignment, account));
                self.active = None;
            }
            (Ok(_), target) => {
                self.error = Some(format!("scanned data is not a valid {}", target.label()));
            }
        }
    }

    /// Invoice decoded without an account context, waiting for the caller
    /// to choose an account and present `Pay`.
    pub fn take_pending_invoice(&mut self) -> Option<Invoice> {
        self.pending_invoice.take()
    }

    /// Consignment handed off to the import flow, with the account context
    /// it was scanned under (None routes to account selection first).
    pub fn take_pending_consignment(&mut self) -> Option<(Consignment, Option<AccountId>)> {
        self.pending_consignment.take()
    }

    /// Inline error slot shared with screen-level failures (e.g. sync).
    /// Never changes the active sheet.
    pub fn report_error(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    fn reset_transients(&mut self) {
        self.error = None;
        self.scan_account = None;
        self.pending_invoice = None;
        self.pending_consignment = None;
    }
}
