use eframe::egui;

use citadel_wallet_core::{ContractType, SheetCoordinator};

use crate::display::ColorPair;
use crate::sheets::sheet_window;
use crate::state::{AddAccountFormState, WalletPaneState};
use crate::ui;
use crate::vault_bridge::VaultBridge;

pub fn render(
    ctx: &egui::Context,
    bridge: &VaultBridge,
    coordinator: &mut SheetCoordinator,
    form: &mut AddAccountFormState,
    pane: &mut WalletPaneState,
) {
    sheet_window("Add account").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label("Name:");
            ui::text_input(ui, &mut form.name, "e.g. Household");
        });
        ui.add_space(10.0);

        ui::section_header(ui, "Account type");
        // All contract types are presented; only the enabled ones are
        // selectable.
        for contract_type in ContractType::ALL {
            let row = format!(
                "{} {}",
                contract_type.symbol(),
                contract_type.localized_name()
            );
            let response = ui.add_enabled(
                contract_type.enabled(),
                egui::SelectableLabel::new(form.selected == contract_type, row),
            );
            if response.clicked() {
                form.selected = contract_type;
            }
            if !contract_type.enabled() {
                response.on_disabled_hover_text("Coming in a future release");
            }
        }

        ui.add_space(8.0);
        let selected = form.selected;
        ui.label(
            egui::RichText::new(selected.localized_name())
                .strong()
                .color(selected.primary_color()),
        );
        ui.label(
            egui::RichText::new(selected.localized_description())
                .weak()
                .small(),
        );

        ui.add_space(10.0);
        ui.horizontal(|ui| {
            let can_create = !form.name.trim().is_empty();
            if ui
                .add_enabled(can_create, egui::Button::new("➕ Create"))
                .clicked()
            {
                match bridge.create_account(&form.name, form.selected) {
                    Ok(account) => {
                        pane.selected_account = Some(account.id);
                        coordinator.dismiss();
                    }
                    Err(err) => form.error = Some(err.to_string()),
                }
            }
            if ui.button("Cancel").clicked() {
                coordinator.dismiss();
            }
        });

        if let Some(error) = form.error.as_ref() {
            ui.add_space(8.0);
            ui::error_message(ui, error);
        }
    });
}
