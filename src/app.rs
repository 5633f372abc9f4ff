use eframe::egui;

use crate::state::AppState;
use crate::ui::{panels, plot};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct MzmlBrowserApp {
    pub state: AppState,
}

impl Default for MzmlBrowserApp {
    fn default() -> Self {
        Self {
            state: AppState::default(),
        }
    }
}

impl MzmlBrowserApp {
    /// Left/Right arrows step through the loaded scans, unless a widget
    /// holds keyboard focus.
    fn handle_keys(&mut self, ctx: &egui::Context) {
        if ctx.memory(|mem| mem.focused().is_some()) {
            return;
        }
        ctx.input(|i| {
            if i.key_pressed(egui::Key::ArrowLeft) {
                self.state.step_selection(-1);
            }
            if i.key_pressed(egui::Key::ArrowRight) {
                self.state.step_selection(1);
            }
        });
    }
}

impl eframe::App for MzmlBrowserApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_keys(ctx);

        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Bottom panel: status line ----
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            panels::status_bar(ui, &self.state);
        });

        // ---- Left side panel: file info and scan table ----
        egui::SidePanel::left("scan_panel")
            .default_width(260.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: TIC above, spectrum below ----
        egui::CentralPanel::default().show(ctx, |ui| {
            if self.state.dataset.is_none() {
                ui.centered_and_justified(|ui| {
                    ui.heading("Open an mzML file to view its chromatogram  (File → Open mzML…)");
                });
                return;
            }

            let tic_height = ui.available_height() * 0.45;
            plot::tic_plot(ui, &mut self.state, tic_height);
            ui.separator();
            plot::spectrum_plot(ui, &mut self.state);
        });
    }
}
