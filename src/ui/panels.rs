use std::path::Path;

use anyhow::{Context, Result};
use eframe::egui::{self, Color32, RichText, Ui};

use crate::data::loader;
use crate::data::model::Spectrum;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu bar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open mzML…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
            ui.separator();
            if ui.button("Exit").clicked() {
                ui.ctx().send_viewport_cmd(egui::ViewportCommand::Close);
            }
        });

        ui.menu_button("View", |ui: &mut Ui| {
            if ui.button("Reset view").clicked() {
                state.reset_tic_view = true;
                state.reset_spectrum_view = true;
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(ds) = &state.dataset {
            ui.label(format!("{} - {} MS1 spectra", ds.name, ds.len()));
        }
    });
}

// ---------------------------------------------------------------------------
// Left side panel – file metadata and scan table
// ---------------------------------------------------------------------------

/// Render the left panel: file info, export, and the clickable scan list.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("File");
    ui.separator();

    let Some(ds) = &state.dataset else {
        ui.label("No file loaded.");
        return;
    };

    ui.label(RichText::new(&ds.name).strong());
    ui.label(format!("{} MS1 scans", ds.len()));
    if let Some((first, last)) = ds.rt_range() {
        ui.label(format!("RT {first:.2} to {last:.2} min"));
    }
    ui.label(RichText::new(&ds.path).small().weak());

    ui.add_space(4.0);
    let can_export = state.selected_spectrum().is_some();
    if ui
        .add_enabled(can_export, egui::Button::new("Export spectrum…"))
        .clicked()
    {
        export_spectrum_dialog(state);
    }

    ui.separator();
    ui.heading("Scans");
    ui.separator();
    scan_table(ui, state);
}

/// One row per scan; clicking the scan number selects it, mirroring a
/// TIC click on that retention time.
fn scan_table(ui: &mut Ui, state: &mut AppState) {
    use egui_extras::{Column, TableBuilder};

    let Some(ds) = &state.dataset else { return };
    let selected = state.selected;
    let mut clicked_row: Option<usize> = None;

    TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
        .column(Column::auto().at_least(44.0))
        .column(Column::auto().at_least(64.0))
        .column(Column::auto().at_least(70.0))
        .column(Column::remainder().at_least(50.0))
        .header(20.0, |mut header| {
            header.col(|ui| {
                ui.strong("Scan");
            });
            header.col(|ui| {
                ui.strong("RT (min)");
            });
            header.col(|ui| {
                ui.strong("TIC");
            });
            header.col(|ui| {
                ui.strong("Peaks");
            });
        })
        .body(|body| {
            body.rows(18.0, ds.len(), |mut row| {
                let idx = row.index();
                let point = &ds.tic[idx];
                let is_selected = selected == Some(idx);

                row.col(|ui| {
                    if ui.selectable_label(is_selected, format!("{idx}")).clicked() {
                        clicked_row = Some(idx);
                    }
                });
                row.col(|ui| {
                    ui.label(format!("{:.3}", point.rt_minutes));
                });
                row.col(|ui| {
                    ui.label(format!("{:.3e}", point.total_intensity));
                });
                row.col(|ui| {
                    ui.label(format!("{}", ds.spectra[idx].peak_count()));
                });
            });
        });

    if let Some(idx) = clicked_row {
        state.select(idx);
    }
}

// ---------------------------------------------------------------------------
// Bottom status bar
// ---------------------------------------------------------------------------

/// Render the status line: transient messages win, otherwise the selected
/// scan's retention time, peak count, and the file name.
pub fn status_bar(ui: &mut Ui, state: &AppState) {
    ui.horizontal(|ui: &mut Ui| {
        if state.loading {
            ui.spinner();
            ui.label("Loading…");
            return;
        }
        match &state.status_message {
            Some(msg) if msg.starts_with("Error") => {
                ui.label(RichText::new(msg).color(Color32::RED));
            }
            Some(msg) => {
                ui.label(msg);
            }
            None => {
                if let (Some(ds), Some(sp)) = (&state.dataset, state.selected_spectrum()) {
                    ui.label(format!(
                        "{} | RT {:.3} min | {} peaks",
                        ds.name,
                        sp.rt_minutes,
                        sp.peak_count()
                    ));
                } else {
                    ui.label("Ready - Please open an mzML file");
                }
            }
        }
    });
}

// ---------------------------------------------------------------------------
// File dialogs
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open mzML file")
        .add_filter("mzML", &["mzML", "mzml"])
        .pick_file();

    if let Some(path) = file {
        load_path(state, &path);
    }
}

/// Load `path`, replacing the dataset on success. On failure the previous
/// dataset and selection stay untouched and the error lands in the status
/// line.
pub fn load_path(state: &mut AppState, path: &Path) {
    state.loading = true;
    match loader::load_mzml(path) {
        Ok(dataset) => {
            log::info!(
                "Loaded {} MS1 spectra from {}",
                dataset.len(),
                path.display()
            );
            state.set_dataset(dataset);
        }
        Err(e) => {
            log::error!("Failed to load file: {e}");
            state.status_message = Some(format!("Error: {e}"));
            state.loading = false;
        }
    }
}

fn export_spectrum_dialog(state: &mut AppState) {
    let default_name = match (&state.dataset, state.selected) {
        (Some(ds), Some(idx)) => {
            let stem = Path::new(&ds.name)
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or("spectrum");
            format!("{stem}_scan{idx}.csv")
        }
        _ => "spectrum.csv".to_string(),
    };

    let Some(path) = rfd::FileDialog::new()
        .set_title("Export spectrum as CSV")
        .add_filter("CSV", &["csv"])
        .set_file_name(default_name)
        .save_file()
    else {
        return;
    };

    let Some(spectrum) = state.selected_spectrum() else {
        return;
    };
    match write_spectrum_csv(&path, spectrum) {
        Ok(()) => {
            log::info!("Exported spectrum to {}", path.display());
            state.status_message = Some(format!("Exported {}", path.display()));
        }
        Err(e) => {
            log::error!("Failed to export spectrum: {e:#}");
            state.status_message = Some(format!("Error: {e:#}"));
        }
    }
}

/// Write one `mz,intensity` row per point.
fn write_spectrum_csv(path: &Path, spectrum: &Spectrum) -> Result<()> {
    let mut writer = csv::Writer::from_path(path).context("creating CSV file")?;
    writer
        .write_record(["mz", "intensity"])
        .context("writing CSV header")?;
    for (mz, intensity) in spectrum.mz.iter().zip(&spectrum.intensity) {
        writer
            .write_record(&[mz.to_string(), intensity.to_string()])
            .context("writing CSV row")?;
    }
    writer.flush().context("flushing CSV file")?;
    Ok(())
}
