use eframe::egui::{Align2, Color32, RichText, Ui};
use egui_plot::{Bar, BarChart, Legend, Line, LineStyle, Plot, PlotPoints, Text, VLine};

use crate::data::select::{top_peaks, MAX_PEAK_LABELS};
use crate::state::AppState;

const TIC_COLOR: Color32 = Color32::LIGHT_BLUE;
const MARKER_COLOR: Color32 = Color32::RED;
const SPECTRUM_COLOR: Color32 = Color32::ORANGE;
const LABEL_COLOR: Color32 = Color32::GRAY;

// ---------------------------------------------------------------------------
// TIC plot (upper central panel)
// ---------------------------------------------------------------------------

/// Render the total ion chromatogram. Clicking the plot selects the scan
/// nearest to the clicked retention time; the dashed marker tracks the
/// current selection.
pub fn tic_plot(ui: &mut Ui, state: &mut AppState, height: f32) {
    let reset = state.reset_tic_view;
    state.reset_tic_view = false;

    let Some(dataset) = &state.dataset else { return };
    let points: Vec<[f64; 2]> = dataset
        .tic
        .iter()
        .map(|p| [p.rt_minutes, p.total_intensity])
        .collect();
    let marker_rt = state
        .selected
        .and_then(|i| dataset.tic.get(i))
        .map(|p| p.rt_minutes);

    let mut plot = Plot::new("tic_plot")
        .legend(Legend::default())
        .x_axis_label("Retention Time (min)")
        .y_axis_label("Total Ion Count")
        .height(height)
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true);
    if reset {
        plot = plot.reset();
    }

    let clicked_rt = plot
        .show(ui, |plot_ui| {
            plot_ui.line(Line::new(points).name("TIC").color(TIC_COLOR).width(1.5));

            if let Some(rt) = marker_rt {
                plot_ui.vline(
                    VLine::new(rt)
                        .color(MARKER_COLOR)
                        .width(1.0)
                        .style(LineStyle::Dashed { length: 4.0 })
                        .name("Selected"),
                );
            }

            if plot_ui.response().clicked() {
                plot_ui.pointer_coordinate().map(|coord| coord.x)
            } else {
                None
            }
        })
        .inner;

    if let Some(rt) = clicked_rt {
        state.select_nearest_rt(rt);
    }
}

// ---------------------------------------------------------------------------
// Spectrum plot (lower central panel)
// ---------------------------------------------------------------------------

/// Render the selected scan: a continuous line for profile scans, stems for
/// centroid scans, with the top peaks annotated by m/z.
pub fn spectrum_plot(ui: &mut Ui, state: &mut AppState) {
    let reset = state.reset_spectrum_view;
    state.reset_spectrum_view = false;

    let Some(spectrum) = state.selected_spectrum() else {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.label("Click the chromatogram to view a spectrum");
        });
        return;
    };

    ui.label(format!("Mass Spectrum at {:.3} min", spectrum.rt_minutes));
    ui.separator();

    let top = top_peaks(&spectrum.mz, &spectrum.intensity, MAX_PEAK_LABELS);

    let mut plot = Plot::new("spectrum_plot")
        .legend(Legend::default())
        .x_axis_label("m/z")
        .y_axis_label("Intensity")
        .height(ui.available_height())
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true);
    if reset {
        plot = plot.reset();
    }

    plot.show(ui, |plot_ui| {
        if spectrum.profile {
            let points: PlotPoints = spectrum
                .mz
                .iter()
                .zip(&spectrum.intensity)
                .map(|(&mz, &intensity)| [mz, intensity])
                .collect();
            plot_ui.line(
                Line::new(points)
                    .name("Spectrum")
                    .color(SPECTRUM_COLOR)
                    .width(1.0),
            );
        } else {
            // Stem width tracks the m/z span so centroid peaks stay thin.
            let span = spectrum.mz.last().copied().unwrap_or(1.0)
                - spectrum.mz.first().copied().unwrap_or(0.0);
            let stem_width = (span / 800.0).max(0.05);

            let bars: Vec<Bar> = spectrum
                .mz
                .iter()
                .zip(&spectrum.intensity)
                .filter(|(_, &intensity)| intensity > 0.0)
                .map(|(&mz, &intensity)| Bar::new(mz, intensity).width(stem_width))
                .collect();
            plot_ui.bar_chart(BarChart::new(bars).name("Spectrum").color(SPECTRUM_COLOR));
        }

        for &idx in &top {
            let mz = spectrum.mz[idx];
            let intensity = spectrum.intensity[idx];
            let label = Text::new(
                [mz, intensity * 1.02].into(),
                RichText::new(format!("{mz:.2}")).size(9.0).color(LABEL_COLOR),
            )
            .anchor(Align2::CENTER_BOTTOM);
            plot_ui.text(label);
        }
    });
}
