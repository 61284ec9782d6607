use std::path::Path;

use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};
use egui_extras::{Column, TableBuilder};

use crate::data::export::{self, EXPORT_FILE_NAME, EXPORT_MIME_TYPE};
use crate::data::loader::DATA_FILE;
use crate::data::model::{Dimension, SaleRecord, SalesDataset, COLUMNS};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – filter widgets
// ---------------------------------------------------------------------------

/// Render the left filter panel: one collapsible section per dimension.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Filter Data");
    ui.separator();

    let Some(dataset) = &state.dataset else {
        ui.label("No dataset loaded.");
        return;
    };

    // Clone the domains so we can mutate state inside the loop.
    let domains: Vec<_> = Dimension::ALL
        .iter()
        .map(|&dim| (dim, dataset.domain(dim).clone()))
        .collect();

    let mut changed = false;

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            for (dim, all_values) in &domains {
                let n_selected = state.filters.get(dim).map_or(0, |s| s.len());
                let header_text = format!("{}  ({n_selected}/{})", dim.label(), all_values.len());

                egui::CollapsingHeader::new(RichText::new(header_text).strong())
                    .id_salt(dim.label())
                    .default_open(false)
                    .show(ui, |ui: &mut Ui| {
                        // Select all / none buttons
                        ui.horizontal(|ui: &mut Ui| {
                            if ui.small_button("All").clicked() {
                                state.select_all_values(*dim);
                            }
                            if ui.small_button("None").clicked() {
                                state.select_no_values(*dim);
                            }
                        });

                        // Re-borrow after potential mutation from All/None
                        let selected = state.filters.entry(*dim).or_default();

                        for val in all_values {
                            let mut checked = selected.contains(val);
                            if ui.checkbox(&mut checked, val.to_string()).changed() {
                                if checked {
                                    selected.insert(val.clone());
                                } else {
                                    selected.remove(val);
                                }
                                changed = true;
                            }
                        }
                    });
            }
        });

    // Recompute the dashboard once after any checkbox changes.
    if changed {
        state.refilter();
    }
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Reload data").clicked() {
                state.load_dataset(Path::new(DATA_FILE));
                ui.close_menu();
            }
            if ui.button("Export filtered CSV…").clicked() {
                export_filtered(state);
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(ds) = &state.dataset {
            ui.label(format!(
                "{} of {} records",
                state.dashboard.indices.len(),
                ds.len()
            ));
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// Export dialog
// ---------------------------------------------------------------------------

/// Serialize the filtered view and let the user pick where to save it.
fn export_filtered(state: &mut AppState) {
    let Some(dataset) = &state.dataset else {
        return;
    };
    let rows: Vec<&SaleRecord> = state
        .dashboard
        .indices
        .iter()
        .map(|&i| &dataset.records[i])
        .collect();

    let bytes = match export::to_csv(&rows) {
        Ok(bytes) => bytes,
        Err(e) => {
            log::error!("Failed to serialize export: {e:#}");
            state.status_message = Some(format!("Error: {e:#}"));
            return;
        }
    };

    let Some(path) = rfd::FileDialog::new()
        .set_title("Export filtered data")
        .set_file_name(EXPORT_FILE_NAME)
        .add_filter(EXPORT_MIME_TYPE, &["csv"])
        .save_file()
    else {
        return;
    };

    match std::fs::write(&path, &bytes) {
        Ok(()) => {
            log::info!("Exported {} rows to {}", rows.len(), path.display());
            state.status_message = None;
        }
        Err(e) => {
            log::error!("Failed to write {}: {e}", path.display());
            state.status_message = Some(format!("Error: {e}"));
        }
    }
}

// ---------------------------------------------------------------------------
// Raw-data preview table
// ---------------------------------------------------------------------------

/// First rows of the filtered view, one column per source column.
pub fn preview_table(ui: &mut Ui, dataset: &SalesDataset, indices: &[usize]) {
    TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .columns(Column::auto(), COLUMNS.len())
        .header(20.0, |mut header| {
            for name in COLUMNS {
                header.col(|ui: &mut Ui| {
                    ui.strong(name);
                });
            }
        })
        .body(|body| {
            body.rows(18.0, indices.len(), |mut row| {
                let rec = &dataset.records[indices[row.index()]];
                let cells = [
                    rec.year.to_string(),
                    rec.region.clone(),
                    rec.model.clone(),
                    rec.fuel_type.clone(),
                    rec.transmission.clone(),
                    rec.color.clone(),
                    rec.sales_classification.clone(),
                    rec.sales_volume.to_string(),
                    format!("{:.0}", rec.price_usd),
                    format!("{:.1}", rec.engine_size_l),
                    format!("{:.0}", rec.mileage_km),
                ];
                for cell in cells {
                    row.col(|ui: &mut Ui| {
                        ui.label(cell);
                    });
                }
            });
        });
}
