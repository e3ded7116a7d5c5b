use eframe::egui;

use citadel_wallet_core::{AccountId, Policy, SheetCoordinator, SupplyMetric};

use crate::display::{ColorPair, StatusColor};
use crate::sheets::sheet_window;
use crate::state::DetailsState;
use crate::ui;
use crate::vault_bridge::VaultBridge;

pub fn render(
    ctx: &egui::Context,
    bridge: &VaultBridge,
    coordinator: &mut SheetCoordinator,
    state: &mut DetailsState,
    account: &AccountId,
) {
    let account = match bridge.account(account) {
        Ok(account) => account,
        Err(err) => {
            // Account disappeared under the sheet; drop back to the wallet.
            tracing::warn!(%err, "account details unavailable");
            coordinator.dismiss();
            return;
        }
    };

    sheet_window("Account details").show(ctx, |ui| {
        let contract_type = account.contract_type();
        ui.label(
            egui::RichText::new(format!("{} {}", contract_type.symbol(), account.name))
                .size(18.0)
                .color(contract_type.primary_color()),
        );
        ui.add_space(8.0);

        egui::Grid::new("account_details")
            .num_columns(2)
            .spacing([10.0, 6.0])
            .show(ui, |ui| {
                ui.label("Type:");
                ui.label(contract_type.localized_name());
                ui.end_row();

                ui.label("Network:");
                ui.label(account.network.localized_description());
                ui.end_row();

                ui.label("Units:");
                ui.label(account.network.satoshis_label());
                ui.end_row();

                ui.label("Policy:");
                match &account.policy {
                    Policy::Current { descriptor } => {
                        ui.monospace(descriptor);
                    }
                }
                ui.end_row();
            });

        ui.label(
            egui::RichText::new(contract_type.localized_description())
                .weak()
                .small(),
        );

        if let Ok(assets) = bridge.assets() {
            ui::section_header(ui, "Assets");
            egui::Grid::new("account_assets")
                .num_columns(3)
                .striped(true)
                .show(ui, |ui| {
                    for asset in &assets {
                        ui.horizontal(|ui| {
                            ui.label(
                                egui::RichText::new(asset.symbol())
                                    .color(asset.primary_color()),
                            );
                            ui.label(&asset.ticker);
                            ui.label(
                                egui::RichText::new(asset.authenticity.symbol())
                                    .color(asset.authenticity.verified_color()),
                            )
                            .on_hover_text(asset.authenticity.status.localized_string());
                        });
                        ui.monospace(asset.formatted_balance());
                        ui.vertical(|ui| {
                            ui.label(
                                egui::RichText::new(format!(
                                    "supply {}",
                                    asset.formatted_supply(SupplyMetric::Known)
                                ))
                                .small(),
                            );
                            ui.label(egui::RichText::new(asset.localized_issuer()).small());
                        });
                        ui.end_row();
                    }
                });
        }

        ui.add_space(10.0);
        ui.horizontal(|ui| {
            if ui.button("⟳ Sync").clicked() {
                match bridge.sync(&account.id) {
                    Ok(()) => {
                        state.error = None;
                        state.info = Some("Synced with the network".to_owned());
                    }
                    Err(err) => {
                        state.info = None;
                        state.error = Some(err.to_string());
                    }
                }
            }
            if ui.button("Close").clicked() {
                coordinator.dismiss();
            }
        });

        if let Some(error) = state.error.as_ref() {
            ui.add_space(8.0);
            ui::error_message(ui, error);
        }
        if let Some(info) = state.info.as_ref() {
            ui.add_space(8.0);
            ui::success_message(ui, info);
        }
    });
}
