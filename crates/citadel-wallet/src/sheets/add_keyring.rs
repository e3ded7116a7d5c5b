use eframe::egui;

use citadel_wallet_core::SheetCoordinator;

use crate::sheets::sheet_window;
use crate::state::AddKeyringFormState;
use crate::ui;
use crate::vault_bridge::VaultBridge;

pub fn render(
    ctx: &egui::Context,
    bridge: &VaultBridge,
    coordinator: &mut SheetCoordinator,
    form: &mut AddKeyringFormState,
) {
    sheet_window("Add signing keys").show(ctx, |ui| {
        ui.label("Register a new keyring with the vault. Seed generation and \
                  storage happen inside the vault.");
        ui.add_space(10.0);

        ui.horizontal(|ui| {
            ui.label("Name:");
            ui::text_input(ui, &mut form.name, "e.g. Hardware signer");
        });

        ui.add_space(10.0);
        ui.horizontal(|ui| {
            let can_create = !form.name.trim().is_empty();
            if ui
                .add_enabled(can_create, egui::Button::new("🔑 Create"))
                .clicked()
            {
                match bridge.create_keyring(&form.name) {
                    Ok(()) => coordinator.dismiss(),
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
