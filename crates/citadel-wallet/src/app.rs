//! Main application state and update loop

use std::sync::{Arc, Mutex};

use eframe::egui;

use citadel_wallet_core::{
    Consignment, ScanPayload, Sheet, SheetCoordinator, VaultError,
};

use crate::sheets;
use crate::state::{SheetForms, WalletPaneState};
use crate::ui;
use crate::vault_bridge::VaultBridge;
use crate::wallet;

/// Slot a background decode worker drops its one-shot result into; the
/// update loop drains it and re-enters the coordinator on the UI thread.
pub type ScanResultSlot = Arc<Mutex<Option<Result<ScanPayload, VaultError>>>>;

/// The main application state
pub struct App {
    /// Only shell-facing boundary over the vault and import adapters
    bridge: VaultBridge,
    /// Single source of truth for the active modal sheet
    coordinator: SheetCoordinator,
    /// Wallet pane selection and inline messages
    pane: WalletPaneState,
    /// Transient per-sheet form states
    forms: SheetForms,
    /// Async scan decode result receiver
    scan_result: ScanResultSlot,
    /// Consignment waiting for the user to choose a target account
    pending_accept: Option<Consignment>,
    /// Last coordinator generation the forms were reset for
    seen_generation: u64,
}

impl App {
    /// Create a new App instance
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        let bridge = VaultBridge::default();

        let mut pane = WalletPaneState::default();
        if let Ok(accounts) = bridge.accounts() {
            pane.selected_account = accounts.first().map(|account| account.id.clone());
        }
        if let Ok(native) = bridge.native_asset() {
            pane.selected_asset = Some(native.id);
        }

        Self {
            bridge,
            coordinator: SheetCoordinator::new(),
            pane,
            forms: SheetForms::default(),
            scan_result: Arc::new(Mutex::new(None)),
            pending_accept: None,
            seen_generation: 0,
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ctx.set_visuals(egui::Visuals::dark());

        // Check for async scan decode results
        self.check_scan_result();

        // Reset sheet forms when a new sheet was presented
        self.sync_forms_to_sheet();

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.add_space(8.0);
            ui.horizontal(|ui| {
                ui.heading(
                    egui::RichText::new("🏰 Citadel Wallet")
                        .size(22.0)
                        .color(egui::Color32::from_rgb(0, 212, 170)),
                );
                ui.add_space(30.0);
                ui.separator();
                ui.add_space(10.0);

                if let Ok(accounts) = self.bridge.accounts() {
                    for account in &accounts {
                        ui.selectable_value(
                            &mut self.pane.selected_account,
                            Some(account.id.clone()),
                            format!("{} {}", account.symbol(), account.name),
                        );
                    }
                }

                if ui
                    .button("➕")
                    .on_hover_text("Add account")
                    .clicked()
                {
                    self.coordinator.request(Sheet::AddAccount);
                }
                if ui
                    .button("🔑")
                    .on_hover_text("Add signing keys")
                    .clicked()
                {
                    self.coordinator.request(Sheet::AddKeyring);
                }
            });
            ui.add_space(4.0);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.add_space(10.0);
                wallet::render(ui, &self.bridge, &mut self.coordinator, &mut self.pane);
                ui.add_space(20.0);
            });
        });

        self.render_active_sheet(ctx);
        self.render_pending_accept(ctx);
    }
}

impl App {
    fn render_active_sheet(&mut self, ctx: &egui::Context) {
        let Some(sheet) = self.coordinator.active().cloned() else {
            return;
        };
        match sheet {
            Sheet::CreateInvoice { .. } => sheets::invoice_create::render(
                ctx,
                &self.bridge,
                &mut self.coordinator,
                &mut self.forms.invoice,
            ),
            Sheet::Scan { label, target } => sheets::import::render(
                ctx,
                &self.bridge,
                &mut self.coordinator,
                &mut self.forms.scan,
                &self.scan_result,
                &label,
                target,
            ),
            Sheet::Pay { account, invoice } => sheets::pay::render(
                ctx,
                &self.bridge,
                &mut self.coordinator,
                &account,
                &invoice,
            ),
            Sheet::AccountDetails { account } => sheets::account_details::render(
                ctx,
                &self.bridge,
                &mut self.coordinator,
                &mut self.forms.details,
                &account,
            ),
            Sheet::AddAccount => sheets::add_account::render(
                ctx,
                &self.bridge,
                &mut self.coordinator,
                &mut self.forms.add_account,
                &mut self.pane,
            ),
            Sheet::AddKeyring => sheets::add_keyring::render(
                ctx,
                &self.bridge,
                &mut self.coordinator,
                &mut self.forms.add_keyring,
            ),
        }
    }

    fn check_scan_result(&mut self) {
        let outcome = {
            let mut guard = self.scan_result.lock().expect("scan slot poisoned");
            guard.take()
        };

        let Some(outcome) = outcome else {
            return;
        };
        self.forms.scan.in_flight = false;
        self.coordinator.complete_scan(outcome);

        // Invoice decoded without an account context: the scan sheet
        // renders an account picker for it.
        if let Some(invoice) = self.coordinator.take_pending_invoice() {
            self.forms.scan.orphan_invoice = Some(invoice);
        }

        // Consignments go straight to the import flow when the scan was
        // bound to an account, otherwise the user picks one first.
        if let Some((consignment, account)) = self.coordinator.take_pending_consignment() {
            match account {
                Some(account) => match self.bridge.accept_consignment(&consignment, &account) {
                    Ok(()) => {
                        self.pane.error = None;
                        self.pane.info = Some(format!(
                            "Accepted consignment {} into {}",
                            consignment.consignment_id, account
                        ));
                    }
                    Err(err) => self.pane.error = Some(err.to_string()),
                },
                None => self.pending_accept = Some(consignment),
            }
        }
    }

    fn sync_forms_to_sheet(&mut self) {
        let generation = self.coordinator.generation();
        if generation == self.seen_generation {
            return;
        }
        self.seen_generation = generation;
        self.forms = SheetForms::default();

        // Seed the invoice form from the presenting context.
        if let Some(Sheet::CreateInvoice {
            account,
            preset_asset,
        }) = self.coordinator.active()
        {
            self.forms.invoice.account = account
                .clone()
                .or_else(|| self.pane.selected_account.clone());
            self.forms.invoice.asset = preset_asset
                .clone()
                .or_else(|| self.pane.selected_asset.clone());
        }
    }

    fn render_pending_accept(&mut self, ctx: &egui::Context) {
        let Some(consignment) = self.pending_accept.clone() else {
            return;
        };

        egui::Window::new("Accept consignment")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label(format!(
                    "Choose the account that should receive consignment {}:",
                    consignment.consignment_id
                ));
                ui.add_space(8.0);

                match self.bridge.accounts() {
                    Ok(accounts) => {
                        for account in accounts {
                            if ui
                                .button(format!("{} {}", account.symbol(), account.name))
                                .clicked()
                            {
                                match self.bridge.accept_consignment(&consignment, &account.id) {
                                    Ok(()) => {
                                        self.pane.info = Some(format!(
                                            "Accepted consignment {} into {}",
                                            consignment.consignment_id, account.id
                                        ));
                                    }
                                    Err(err) => self.pane.error = Some(err.to_string()),
                                }
                                self.pending_accept = None;
                            }
                        }
                    }
                    Err(err) => ui::error_message(ui, &err.to_string()),
                }

                ui.add_space(8.0);
                if ui.button("Cancel").clicked() {
                    self.pending_accept = None;
                }
            });
    }
}
