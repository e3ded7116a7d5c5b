//! One module per modal sheet. Each render function reads the coordinator
//! state and writes back request/dismiss calls from user gestures.

pub mod account_details;
pub mod add_account;
pub mod add_keyring;
pub mod import;
pub mod invoice_create;
pub mod pay;

use eframe::egui;

/// Shared modal window chrome: centered, fixed, non-collapsible.
pub fn sheet_window(title: &str) -> egui::Window<'_> {
    egui::Window::new(title)
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .default_width(420.0)
}
