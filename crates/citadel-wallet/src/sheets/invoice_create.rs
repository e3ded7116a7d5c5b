use eframe::egui;
use eyre::{bail, eyre};

use citadel_wallet_core::SheetCoordinator;

use crate::sheets::sheet_window;
use crate::state::InvoiceFormState;
use crate::ui;
use crate::vault_bridge::VaultBridge;

pub fn render(
    ctx: &egui::Context,
    bridge: &VaultBridge,
    coordinator: &mut SheetCoordinator,
    form: &mut InvoiceFormState,
) {
    sheet_window("Create invoice").show(ctx, |ui| {
        ui.label("Request a payment into one of your accounts.");
        ui.add_space(10.0);

        if let Ok(accounts) = bridge.accounts() {
            ui.horizontal(|ui| {
                ui.label("Account:");
                let selected = form
                    .account
                    .as_ref()
                    .and_then(|id| accounts.iter().find(|account| &account.id == id))
                    .map(|account| account.name.clone())
                    .unwrap_or_else(|| "choose".to_owned());
                egui::ComboBox::from_id_salt("invoice_account")
                    .selected_text(selected)
                    .width(180.0)
                    .show_ui(ui, |ui| {
                        for account in &accounts {
                            ui.selectable_value(
                                &mut form.account,
                                Some(account.id.clone()),
                                &account.name,
                            );
                        }
                    });
            });
        }

        if let Ok(assets) = bridge.assets() {
            ui.horizontal(|ui| {
                ui.label("Asset:");
                let selected = form
                    .asset
                    .as_ref()
                    .and_then(|id| assets.iter().find(|asset| &asset.id == id))
                    .map(|asset| asset.ticker.clone())
                    .unwrap_or_else(|| "choose".to_owned());
                egui::ComboBox::from_id_salt("invoice_asset")
                    .selected_text(selected)
                    .width(180.0)
                    .show_ui(ui, |ui| {
                        for asset in &assets {
                            ui.selectable_value(
                                &mut form.asset,
                                Some(asset.id.clone()),
                                format!("{} {}", asset.symbol(), asset.ticker),
                            );
                        }
                    });
            });
        }

        ui.horizontal(|ui| {
            ui.label("Amount:");
            ui::number_input(ui, &mut form.amount, "any amount");
        });

        ui.add_space(10.0);
        ui.horizontal(|ui| {
            if ui.button("🧾 Create").clicked() {
                form.error = None;
                form.composed = None;
                match compose(bridge, form) {
                    Ok(invoice) => form.composed = Some(invoice),
                    Err(err) => form.error = Some(format!("{err:#}")),
                }
            }
            if ui.button("Close").clicked() {
                coordinator.dismiss();
            }
        });

        if let Some(invoice) = form.composed.as_ref() {
            ui.add_space(10.0);
            ui::section_header(ui, "Invoice");
            ui::copyable_value(ui, &invoice.raw);
            ui::success_message(ui, "Share this string with the payer");
        }

        if let Some(error) = form.error.as_ref() {
            ui.add_space(10.0);
            ui::error_message(ui, error);
        }
    });
}

fn compose(
    bridge: &VaultBridge,
    form: &InvoiceFormState,
) -> eyre::Result<citadel_wallet_core::Invoice> {
    let account = form
        .account
        .as_ref()
        .ok_or_else(|| eyre!("choose an account"))?;
    let asset = form.asset.as_ref().ok_or_else(|| eyre!("choose an asset"))?;
    let amount = parse_amount(&form.amount)?;
    bridge
        .compose_invoice(account, asset, amount)
        .map_err(|err| eyre!(err))
}

fn parse_amount(raw: &str) -> eyre::Result<Option<u64>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    let amount: u64 = raw.parse().map_err(|_| eyre!("invalid amount: {raw}"))?;
    if amount == 0 {
        bail!("amount must be positive");
    }
    Ok(Some(amount))
}

#[cfg(test)]
mod tests {
    use super::parse_amount;

    #[test]
    fn empty_amount_means_any() {
        assert_eq!(parse_amount("").unwrap(), None);
        assert_eq!(parse_amount("   ").unwrap(), None);
    }

    #[test]
    fn positive_amounts_parse() {
        assert_eq!(parse_amount("2500").unwrap(), Some(2500));
    }

    #[test]
    fn zero_and_garbage_amounts_are_rejected() {
        assert!(parse_amount("0").is_err());
        assert!(parse_amount("lots").is_err());
        assert!(parse_amount("-5").is_err());
    }
}
