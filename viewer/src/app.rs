use anyhow::anyhow;
use eframe::egui;
use egui::Color32;
use egui_plot::{Legend, MarkerShape, Plot, Points};
use graph_core::{load_dataset, Column, Dataset, ScatterPlot, Summary};
use std::path::PathBuf;

const APP_NAME: &str = "Complexity Graph";

pub(crate) struct ComplexityGraphApp {
    source: Option<PathBuf>,
    dataset: Dataset,
    summary: Option<Summary>,
    plot: Option<ScatterPlot>,
    title: String,
    y_axis: Column,

    // Side panel with the raw rows and per-column statistics.
    show_table: bool,

    load_error: Option<String>,
}

impl ComplexityGraphApp {
    /// Takes an already built plot of `dataset`; its title and y-axis carry
    /// over when the user switches axes or reloads.
    pub(crate) fn new(source: Option<PathBuf>, dataset: Dataset, plot: ScatterPlot) -> Self {
        Self {
            source,
            summary: Summary::of(&dataset),
            dataset,
            title: plot.title.clone(),
            y_axis: plot.y,
            plot: Some(plot),
            show_table: false,
            load_error: None,
        }
    }

    pub(crate) fn set_y_axis(&mut self, y_axis: Column) {
        if self.y_axis != y_axis {
            self.y_axis = y_axis;
            self.rebuild_plot();
        }
    }

    /// Replaces the shown dataset. On failure the current one stays and the
    /// error is shown in the window.
    pub(crate) fn load_from_path(&mut self, path: PathBuf) {
        match load_dataset(&path) {
            Ok(dataset) => {
                self.summary = Summary::of(&dataset);
                self.dataset = dataset;
                self.source = Some(path);
                self.load_error = None;
                self.rebuild_plot();
            }
            Err(e) => {
                log::error!("failed to load {}: {e}", path.display());
                self.load_error = Some(e.to_string());
            }
        }
    }

    fn reload(&mut self) {
        if let Some(path) = self.source.clone() {
            self.load_from_path(path);
        }
    }

    fn rebuild_plot(&mut self) {
        match ScatterPlot::from_dataset(
            &self.dataset,
            Column::InputLength,
            self.y_axis,
            self.title.clone(),
        ) {
            Ok(plot) => self.plot = Some(plot),
            Err(e) => {
                self.plot = None;
                self.load_error = Some(e.to_string());
            }
        }
    }

    fn ui_menu(&mut self, ctx: &egui::Context, ui: &mut egui::Ui) {
        egui::menu::bar(ui, |ui| {
            ui.menu_button("File", |ui| {
                if ui.button("Open data file...").clicked() {
                    if let Some(path) = rfd::FileDialog::new()
                        .add_filter("Measurements", &["txt", "dat"])
                        .pick_file()
                    {
                        self.load_from_path(path);
                    }
                    ui.close_menu();
                }

                if ui
                    .add_enabled(self.source.is_some(), egui::Button::new("Reload"))
                    .clicked()
                {
                    self.reload();
                    ui.close_menu();
                }

                ui.separator();

                if ui.button("Quit").clicked() {
                    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                }
            });

            ui.menu_button("View", |ui| {
                let mut y_axis = self.y_axis;
                ui.radio_value(&mut y_axis, Column::TimeMs, Column::TimeMs.name());
                ui.radio_value(&mut y_axis, Column::OutputLength, Column::OutputLength.name());
                self.set_y_axis(y_axis);

                ui.separator();
                ui.checkbox(&mut self.show_table, "Show data table");
            });
        });
    }

    fn ui_table(&self, ui: &mut egui::Ui) {
        egui::ScrollArea::vertical().show(ui, |ui| {
            if let Some(summary) = &self.summary {
                ui.strong("Summary");
                egui::Grid::new("summary_grid").striped(true).show(ui, |ui| {
                    ui.label("");
                    for (column, _) in summary.iter() {
                        ui.strong(column.name());
                    }
                    ui.end_row();

                    let rows: [(&str, fn(&graph_core::ColumnStatistics) -> String); 5] = [
                        ("count", |s| s.count.to_string()),
                        ("mean", |s| format!("{:.3}", s.mean)),
                        ("std", |s| format!("{:.3}", s.std)),
                        ("min", |s| s.min.to_string()),
                        ("max", |s| s.max.to_string()),
                    ];
                    for (label, field) in rows {
                        ui.label(label);
                        for (_, stats) in summary.iter() {
                            ui.label(field(stats));
                        }
                        ui.end_row();
                    }
                });
                ui.separator();
            }

            ui.strong(format!("{} rows", self.dataset.len()));
            egui::Grid::new("rows_grid").striped(true).show(ui, |ui| {
                ui.label("");
                for column in Column::ALL {
                    ui.strong(column.name());
                }
                ui.end_row();

                for (idx, row) in self.dataset.rows().iter().enumerate() {
                    ui.label(idx.to_string());
                    for column in Column::ALL {
                        ui.label(row.value(column).to_string());
                    }
                    ui.end_row();
                }
            });
        });
    }

    fn ui_plot(&self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.heading(&self.title);
        });

        if let Some(err) = &self.load_error {
            ui.colored_label(Color32::RED, err);
        }

        let Some(plot) = &self.plot else {
            return;
        };

        let [r, g, b] = plot.color;
        let points = Points::new(plot.points.clone())
            .name(plot.y_label())
            .shape(MarkerShape::Circle)
            .filled(true)
            .radius(3.0)
            .color(Color32::from_rgb(r, g, b));

        Plot::new("complexity_scatter")
            .x_axis_label(plot.x_label())
            .y_axis_label(plot.y_label())
            .legend(Legend::default())
            .show(ui, |plot_ui| {
                plot_ui.points(points);
            });
    }
}

impl eframe::App for ComplexityGraphApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            self.ui_menu(ctx, ui);
        });

        if let Some(path) = &self.source {
            egui::TopBottomPanel::bottom("status_panel").show(ctx, |ui| {
                ui.label(path.display().to_string());
            });
        }

        if self.show_table {
            egui::SidePanel::right("table_panel")
                .resizable(true)
                .default_width(380.0)
                .show(ctx, |ui| self.ui_table(ui));
        }

        egui::CentralPanel::default().show(ctx, |ui| self.ui_plot(ui));
    }
}

/// Opens the plot window and blocks until the user closes it.
pub(crate) fn run(app: ComplexityGraphApp) -> anyhow::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 750.0])
            .with_title(app.title.clone()),
        ..Default::default()
    };

    eframe::run_native(APP_NAME, options, Box::new(|_cc| Ok(Box::new(app))))
        .map_err(|e| anyhow!("plot window failed: {e}"))
}
