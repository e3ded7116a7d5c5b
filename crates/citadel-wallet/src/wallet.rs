//! Wallet pane: balances, send/receive actions and operation history for
//! the selected account.

use eframe::egui;

use citadel_wallet_core::{ImportCategory, Sheet, SheetCoordinator, SupplyMetric};

use crate::display::{ColorPair, StatusColor};
use crate::state::{WalletPaneState, WalletTab};
use crate::ui;
use crate::vault_bridge::VaultBridge;

pub fn render(
    ui: &mut egui::Ui,
    bridge: &VaultBridge,
    coordinator: &mut SheetCoordinator,
    pane: &mut WalletPaneState,
) {
    let account = pane
        .selected_account
        .as_ref()
        .and_then(|id| bridge.account(id).ok());

    let Some(account) = account else {
        ui::styled_heading(ui, "Welcome");
        ui.label("No wallet accounts yet.");
        ui.add_space(10.0);
        if ui.button("➕ Create your first account").clicked() {
            coordinator.request(Sheet::AddAccount);
        }
        return;
    };

    ui.horizontal(|ui| {
        ui::styled_heading(ui, &format!("{} {}", account.symbol(), account.name));
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui
                .button("⟳")
                .on_hover_text("Sync with the network")
                .clicked()
            {
                match bridge.sync(&account.id) {
                    Ok(()) => {
                        pane.error = None;
                        pane.info = Some("Synced".to_owned());
                    }
                    Err(err) => pane.error = Some(err.to_string()),
                }
            }
            if ui.button("ℹ").on_hover_text("Account details").clicked() {
                coordinator.request(Sheet::AccountDetails {
                    account: account.id.clone(),
                });
            }
        });
    });
    ui.label(
        egui::RichText::new(account.network.localized_description())
            .weak()
            .small(),
    );
    ui.add_space(10.0);

    // Balance header for the selected asset
    let assets = bridge.assets().unwrap_or_default();
    if let Some(asset) = assets
        .iter()
        .find(|asset| Some(&asset.id) == pane.selected_asset.as_ref())
        .or_else(|| assets.first())
    {
        let (primary, secondary) = asset.gradient();
        ui.label(
            egui::RichText::new(format!("{} {}", asset.symbol(), asset.formatted_balance()))
                .size(28.0)
                .color(primary),
        );
        ui.label(egui::RichText::new(&asset.name).color(secondary).small());
    }

    ui.horizontal(|ui| {
        for asset in &assets {
            let selected = Some(&asset.id) == pane.selected_asset.as_ref();
            if ui
                .selectable_label(selected, format!("{} {}", asset.symbol(), asset.ticker))
                .clicked()
            {
                pane.selected_asset = Some(asset.id.clone());
            }
        }
    });

    ui.add_space(10.0);

    // Send/receive action row
    ui.horizontal(|ui| {
        if ui.button("🧾 Invoice").clicked() {
            coordinator.request(Sheet::CreateInvoice {
                account: Some(account.id.clone()),
                preset_asset: pane.selected_asset.clone(),
            });
        }
        if ui.button("⬆ Pay").clicked() {
            coordinator.request_scan("invoice", ImportCategory::Invoice, Some(account.id.clone()));
        }
        if ui.button("⬇ Accept").clicked() {
            coordinator.request_scan(
                "consignment",
                ImportCategory::Consignment,
                Some(account.id.clone()),
            );
        }
    });

    ui.add_space(10.0);

    ui.horizontal(|ui| {
        ui.selectable_value(&mut pane.selected_tab, WalletTab::History, "History");
        ui.selectable_value(&mut pane.selected_tab, WalletTab::Balance, "Balance");
    });
    ui.separator();

    if let Some(error) = pane.error.as_ref() {
        ui::error_message(ui, error);
    }
    if let Some(info) = pane.info.as_ref() {
        ui::success_message(ui, info);
    }

    match pane.selected_tab {
        WalletTab::History => render_history(ui, bridge),
        WalletTab::Balance => render_balances(ui, &assets),
    }
}

fn render_history(ui: &mut egui::Ui, bridge: &VaultBridge) {
    let accepted = bridge.accepted_consignments();
    if accepted.is_empty() {
        ui.label(egui::RichText::new("No operations yet.").weak());
        return;
    }
    egui::Grid::new("wallet_history")
        .num_columns(3)
        .striped(true)
        .show(ui, |ui| {
            ui.strong("Consignment");
            ui.strong("Asset");
            ui.strong("Account");
            ui.end_row();
            for record in &accepted {
                ui.monospace(&record.consignment.consignment_id);
                ui.label(record.consignment.asset.to_string());
                ui.label(record.account.to_string());
                ui.end_row();
            }
        });
}

fn render_balances(ui: &mut egui::Ui, assets: &[citadel_wallet_core::Asset]) {
    egui::Grid::new("wallet_balances")
        .num_columns(4)
        .striped(true)
        .show(ui, |ui| {
            ui.strong("Asset");
            ui.strong("Balance");
            ui.strong("Known supply");
            ui.strong("Issuer");
            ui.end_row();
            for asset in assets {
                ui.horizontal(|ui| {
                    ui.label(
                        egui::RichText::new(asset.symbol()).color(asset.primary_color()),
                    );
                    ui.label(&asset.name);
                    ui.label(
                        egui::RichText::new(asset.authenticity.symbol())
                            .color(asset.authenticity.verified_color()),
                    )
                    .on_hover_text(asset.authenticity.status.localized_string());
                });
                ui.monospace(asset.formatted_balance());
                ui.monospace(asset.formatted_supply(SupplyMetric::Known));
                ui.label(egui::RichText::new(asset.localized_issuer()).small());
                ui.end_row();
            }
        });
}
