use std::path::Path;

use eframe::egui::{self, RichText, Ui};

use crate::data::loader::DATA_FILE;
use crate::data::summary::Kpis;
use crate::state::AppState;
use crate::ui::{panels, plot};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct SalesDashboardApp {
    pub state: AppState,
}

impl SalesDashboardApp {
    /// Load the sales table from its fixed path and start the session.
    pub fn new() -> Self {
        let mut state = AppState::default();
        state.load_dataset(Path::new(DATA_FILE));
        Self { state }
    }
}

impl Default for SalesDashboardApp {
    fn default() -> Self {
        Self::new()
    }
}

impl eframe::App for SalesDashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: filters ----
        egui::SidePanel::left("filter_panel")
            .default_width(220.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: KPIs, preview, charts ----
        egui::CentralPanel::default().show(ctx, |ui| {
            central_panel(ui, &self.state);
        });
    }
}

// ---------------------------------------------------------------------------
// Central panel
// ---------------------------------------------------------------------------

fn central_panel(ui: &mut Ui, state: &AppState) {
    let Some(dataset) = &state.dataset else {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading(format!("No data — place {DATA_FILE} in the working directory."));
        });
        return;
    };

    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            ui.heading("BMW Car Sales Interactive Dashboard");
            ui.label(format!(
                "Showing {} records after filtering.",
                state.dashboard.indices.len()
            ));
            ui.add_space(8.0);

            kpi_row(ui, &state.dashboard.kpis);
            ui.add_space(8.0);

            egui::CollapsingHeader::new("Show Raw Data")
                .default_open(false)
                .show(ui, |ui: &mut Ui| {
                    panels::preview_table(ui, dataset, state.dashboard.preview());
                });

            for spec in &state.dashboard.charts {
                plot::chart(ui, spec);
            }
        });
}

/// The four metrics across the top of the page.
fn kpi_row(ui: &mut Ui, kpis: &Kpis) {
    ui.columns(4, |cols: &mut [Ui]| {
        metric(&mut cols[0], "Total Cars", &kpis.total_cars.to_string());
        metric(&mut cols[1], "Total Sales", &kpis.total_sales.to_string());
        metric(&mut cols[2], "Avg Price (USD)", &kpis.avg_price_label());
        metric(&mut cols[3], "Top Model", kpis.top_model_label());
    });
}

fn metric(ui: &mut Ui, label: &str, value: &str) {
    ui.vertical(|ui: &mut Ui| {
        ui.small(label);
        ui.label(RichText::new(value).size(22.0).strong());
    });
}
