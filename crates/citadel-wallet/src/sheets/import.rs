use std::sync::Arc;

use eframe::egui;

use citadel_wallet_core::{ImportCategory, Sheet, SheetCoordinator};

use crate::app::ScanResultSlot;
use crate::sheets::sheet_window;
use crate::state::ScanFormState;
use crate::ui;
use crate::vault_bridge::VaultBridge;

/// Scan sheet. Camera/QR capture is platform chrome; the desktop shell
/// takes the scanned string as pasted text and hands it to the vault
/// decoder on a worker thread.
#[allow(clippy::too_many_arguments)]
pub fn render(
    ctx: &egui::Context,
    bridge: &VaultBridge,
    coordinator: &mut SheetCoordinator,
    form: &mut ScanFormState,
    scan_slot: &ScanResultSlot,
    label: &str,
    target: ImportCategory,
) {
    sheet_window(&format!("Scan {label}")).show(ctx, |ui| {
        match target {
            ImportCategory::Invoice => {
                ui.label("Paste the payment invoice you want to pay.");
            }
            ImportCategory::Consignment => {
                ui.label("Paste the consignment you want to accept.");
            }
        }
        ui.add_space(8.0);

        ui::multiline_input(ui, &mut form.raw, "lnbc1...", 4);

        ui.add_space(8.0);
        ui.horizontal(|ui| {
            let can_decode = !form.raw.trim().is_empty() && !form.in_flight;
            if ui
                .add_enabled(can_decode, egui::Button::new("🔍 Decode"))
                .clicked()
            {
                coordinator.clear_error();
                form.in_flight = true;
                trigger_decode(ctx, bridge, scan_slot, form.raw.clone());
            }
            if ui.button("Cancel").clicked() {
                coordinator.dismiss();
            }
        });

        if form.in_flight {
            ui.add_space(8.0);
            ui::loading_spinner(ui);
        }

        if let Some(error) = coordinator.error().map(str::to_owned) {
            ui.add_space(8.0);
            ui::error_message(ui, &error);
        }

        // Invoice decoded without an account context: let the user choose
        // the paying account here instead of guessing one.
        if let Some(invoice) = form.orphan_invoice.clone() {
            ui.add_space(8.0);
            ui::section_header(ui, "Pay from");
            match bridge.accounts() {
                Ok(accounts) => {
                    for account in accounts {
                        if ui
                            .button(format!("{} {}", account.symbol(), account.name))
                            .clicked()
                        {
                            form.orphan_invoice = None;
                            coordinator.request(Sheet::Pay {
                                account: account.id,
                                invoice: invoice.clone(),
                            });
                        }
                    }
                }
                Err(err) => ui::error_message(ui, &err.to_string()),
            }
        }
    });
}

fn trigger_decode(
    ctx: &egui::Context,
    bridge: &VaultBridge,
    scan_slot: &ScanResultSlot,
    raw: String,
) {
    let bridge = bridge.clone();
    let slot = Arc::clone(scan_slot);
    let ctx = ctx.clone();

    // One-shot completion; a result arriving after the sheet was dismissed
    // is dropped by the coordinator.
    std::thread::spawn(move || {
        let outcome = bridge.decode(&raw);
        let mut guard = slot.lock().expect("scan slot poisoned");
        *guard = Some(outcome);
        ctx.request_repaint();
    });
}
