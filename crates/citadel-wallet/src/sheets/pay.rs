use eframe::egui;

use citadel_wallet_core::{AccountId, Invoice, SheetCoordinator};

use crate::sheets::sheet_window;
use crate::ui;
use crate::vault_bridge::VaultBridge;

/// Payment review sheet for a decoded invoice. Building and signing the
/// actual transaction is the vault's job, outside this shell.
pub fn render(
    ctx: &egui::Context,
    bridge: &VaultBridge,
    coordinator: &mut SheetCoordinator,
    account: &AccountId,
    invoice: &Invoice,
) {
    sheet_window("Pay").show(ctx, |ui| {
        let paying_account = bridge.account(account).ok();

        if let Some(paying) = paying_account.as_ref() {
            ui.label(format!(
                "Paying from {} {} on {}",
                paying.symbol(),
                paying.name,
                paying.network.localized_description()
            ));
            ui.add_space(8.0);
        }

        ui::section_header(ui, "Invoice");
        egui::Grid::new("pay_invoice")
            .num_columns(2)
            .spacing([10.0, 6.0])
            .show(ui, |ui| {
                ui.label("Beneficiary:");
                ui::copyable_value(ui, &invoice.beneficiary);
                ui.end_row();

                ui.label("Amount:");
                ui.label(formatted_amount(bridge, invoice, paying_account.as_ref()));
                ui.end_row();

                if let Some(asset) = invoice.asset.as_ref() {
                    ui.label("Asset:");
                    ui.monospace(asset.to_string());
                    ui.end_row();
                }
            });

        ui.add_space(10.0);
        ui.label(
            egui::RichText::new("Confirm the beneficiary before paying from your vault.")
                .weak()
                .small(),
        );

        ui.add_space(8.0);
        if ui.button("Close").clicked() {
            coordinator.dismiss();
        }
    });
}

fn formatted_amount(
    bridge: &VaultBridge,
    invoice: &Invoice,
    paying: Option<&citadel_wallet_core::WalletAccount>,
) -> String {
    let Some(amount) = invoice.amount else {
        return "any amount".to_owned();
    };

    // Asset-bound invoices display in the asset's ticker, plain lightning
    // invoices in the network's small unit.
    let unit = invoice
        .asset
        .as_ref()
        .and_then(|id| {
            bridge
                .assets()
                .ok()?
                .into_iter()
                .find(|asset| &asset.id == id)
                .map(|asset| asset.ticker)
        })
        .unwrap_or_else(|| {
            paying
                .map(|account| account.network.sats_label().to_owned())
                .unwrap_or_else(|| "Sats.".to_owned())
        });
    format!("{amount} {unit}")
}
