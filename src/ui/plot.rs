use eframe::egui::{self, Align2, Color32, FontId, Pos2, Rect, Sense, Stroke, Ui, Vec2};
use egui_plot::{
    Bar, BarChart, BoxElem, BoxPlot, BoxSpread, Legend, Line, MarkerShape, Plot, PlotPoint,
    PlotPoints, Points, Text,
};

use crate::charts::stats::Bins;
use crate::charts::{
    BoxGroup, ChartKind, ChartSpec, HistogramSeries, LabeledValue, ScatterSeries,
};
use crate::color::{diverging_color, ColorMap};

const CHART_HEIGHT: f32 = 280.0;

// ---------------------------------------------------------------------------
// Chart dispatch
// ---------------------------------------------------------------------------

/// Render one chart spec under its section title.
pub fn chart(ui: &mut Ui, spec: &ChartSpec) {
    ui.add_space(16.0);
    ui.heading(spec.title);
    ui.add_space(4.0);

    match &spec.kind {
        ChartKind::Line {
            x_label,
            y_label,
            markers,
            points,
        } => line_chart(ui, spec.title, x_label, y_label, *markers, points),
        ChartKind::Pie { hole, slices } => pie_chart(ui, *hole, slices),
        ChartKind::Bar { y_label, bars } => bar_chart(ui, spec.title, y_label, bars),
        ChartKind::Scatter {
            x_label,
            y_label,
            opacity,
            series,
        } => scatter_chart(ui, spec.title, x_label, y_label, *opacity, series),
        ChartKind::BoxPlot { y_label, groups } => box_chart(ui, spec.title, y_label, groups),
        ChartKind::Heatmap { labels, cells, .. } => heatmap(ui, labels, cells),
        ChartKind::Histogram {
            x_label,
            bins,
            series,
        } => histogram_chart(ui, spec.title, x_label, bins, series),
    }
}

// ---------------------------------------------------------------------------
// egui_plot-backed kinds
// ---------------------------------------------------------------------------

fn line_chart(
    ui: &mut Ui,
    id: &str,
    x_label: &str,
    y_label: &str,
    markers: bool,
    points: &[[f64; 2]],
) {
    let color = Color32::LIGHT_BLUE;
    Plot::new(id)
        .height(CHART_HEIGHT)
        .x_axis_label(x_label)
        .y_axis_label(y_label)
        .allow_scroll(false)
        .show(ui, |plot_ui| {
            let line_points: PlotPoints = points.iter().copied().collect();
            plot_ui.line(Line::new(line_points).color(color).width(2.0));
            if markers {
                let marker_points: PlotPoints = points.iter().copied().collect();
                plot_ui.points(Points::new(marker_points).radius(4.0).color(color));
            }
        });
}

fn bar_chart(ui: &mut Ui, id: &str, y_label: &str, bars: &[LabeledValue]) {
    let colors = ColorMap::new(bars.iter().map(|b| b.label.as_str()));
    Plot::new(id)
        .height(CHART_HEIGHT)
        .y_axis_label(y_label)
        .legend(Legend::default())
        .allow_scroll(false)
        .show(ui, |plot_ui| {
            for (i, item) in bars.iter().enumerate() {
                let color = colors.color_for(&item.label);
                let bar = Bar::new(i as f64, item.value).width(0.7).fill(color);
                plot_ui.bar_chart(BarChart::new(vec![bar]).name(&item.label).color(color));
                plot_ui.text(Text::new(
                    PlotPoint::new(i as f64, item.value),
                    format!("{}", item.value as u64),
                ));
            }
        });
}

fn scatter_chart(
    ui: &mut Ui,
    id: &str,
    x_label: &str,
    y_label: &str,
    opacity: f32,
    series: &[ScatterSeries],
) {
    let colors = ColorMap::new(series.iter().map(|s| s.name.as_str()));
    Plot::new(id)
        .height(CHART_HEIGHT)
        .x_axis_label(x_label)
        .y_axis_label(y_label)
        .legend(Legend::default())
        .allow_scroll(false)
        .show(ui, |plot_ui| {
            for s in series {
                let points: PlotPoints = s.points.iter().map(|p| [p.x, p.y]).collect();
                let color = colors.color_for(&s.name).gamma_multiply(opacity);
                plot_ui.points(
                    Points::new(points)
                        .radius(2.5)
                        .color(color)
                        .name(&s.name),
                );
            }
        });
}

fn box_chart(ui: &mut Ui, id: &str, y_label: &str, groups: &[BoxGroup]) {
    let colors = ColorMap::new(groups.iter().map(|g| g.name.as_str()));
    Plot::new(id)
        .height(CHART_HEIGHT)
        .y_axis_label(y_label)
        .legend(Legend::default())
        .allow_scroll(false)
        .show(ui, |plot_ui| {
            for (i, group) in groups.iter().enumerate() {
                let color = colors.color_for(&group.name);
                let s = group.summary;
                let elem = BoxElem::new(
                    i as f64,
                    BoxSpread::new(s.min, s.q1, s.median, s.q3, s.max),
                )
                .box_width(0.5)
                .fill(color.gamma_multiply(0.4))
                .stroke(Stroke::new(1.5, color));
                plot_ui.box_plot(BoxPlot::new(vec![elem]).name(&group.name));
            }
        });
}

fn histogram_chart(
    ui: &mut Ui,
    id: &str,
    x_label: &str,
    bins: &Bins,
    series: &[HistogramSeries],
) {
    let colors = ColorMap::new(series.iter().map(|s| s.name.as_str()));
    Plot::new(id)
        .height(CHART_HEIGHT)
        .x_axis_label(x_label)
        .y_axis_label("Count")
        .legend(Legend::default())
        .allow_scroll(false)
        .show(ui, |plot_ui| {
            // Stack each group's bars on the groups drawn before it.
            let mut stacked = vec![0.0f64; bins.count];
            for s in series {
                let color = colors.color_for(&s.name);
                let group_bars: Vec<Bar> = s
                    .counts
                    .iter()
                    .enumerate()
                    .filter(|(_, &count)| count > 0)
                    .map(|(i, &count)| {
                        Bar::new(bins.center(i), count as f64)
                            .width(bins.width * 0.95)
                            .base_offset(stacked[i])
                            .fill(color)
                    })
                    .collect();
                for (i, &count) in s.counts.iter().enumerate() {
                    stacked[i] += count as f64;
                }
                plot_ui.bar_chart(BarChart::new(group_bars).name(&s.name).color(color));
            }

            // Marginal five-number summaries as whisker rows above the bars.
            let top = stacked.iter().fold(0.0f64, |m, &v| m.max(v));
            for (k, s) in series.iter().enumerate() {
                let y = top * (1.08 + 0.06 * k as f64);
                let color = colors.color_for(&s.name);
                let m = s.marginal;
                plot_ui.line(
                    Line::new(PlotPoints::from(vec![[m.min, y], [m.max, y]]))
                        .color(color)
                        .width(1.0),
                );
                plot_ui.line(
                    Line::new(PlotPoints::from(vec![[m.q1, y], [m.q3, y]]))
                        .color(color)
                        .width(4.0),
                );
                plot_ui.points(
                    Points::new(PlotPoints::from(vec![[m.median, y]]))
                        .radius(3.5)
                        .shape(MarkerShape::Diamond)
                        .color(color),
                );
            }
        });
}

// ---------------------------------------------------------------------------
// Painter-drawn kinds (no egui_plot equivalent)
// ---------------------------------------------------------------------------

fn pie_chart(ui: &mut Ui, hole: f32, slices: &[LabeledValue]) {
    let total: f64 = slices.iter().map(|s| s.value).sum();
    let colors = ColorMap::new(slices.iter().map(|s| s.label.as_str()));

    let size = Vec2::new(ui.available_width(), CHART_HEIGHT);
    let (rect, _) = ui.allocate_exact_size(size, Sense::hover());

    if total > 0.0 {
        let painter = ui.painter_at(rect);
        let center = rect.center();
        let radius = rect.height().min(rect.width()) * 0.45;

        // Start at 12 o'clock, sweep clockwise.
        let mut angle = -std::f32::consts::FRAC_PI_2;
        for slice in slices {
            let sweep = (slice.value / total) as f32 * std::f32::consts::TAU;
            let steps = (sweep / 0.05).ceil().max(1.0) as usize;
            let mut points = vec![center];
            for k in 0..=steps {
                let a = angle + sweep * k as f32 / steps as f32;
                points.push(center + radius * Vec2::new(a.cos(), a.sin()));
            }
            painter.add(egui::Shape::convex_polygon(
                points,
                colors.color_for(&slice.label),
                Stroke::NONE,
            ));
            angle += sweep;
        }
        if hole > 0.0 {
            painter.circle_filled(center, radius * hole, ui.visuals().panel_fill);
        }
    }

    ui.horizontal_wrapped(|ui: &mut Ui| {
        for slice in slices {
            let share = if total > 0.0 {
                100.0 * slice.value / total
            } else {
                0.0
            };
            ui.label(
                egui::RichText::new(format!("■ {} — {share:.1}%", slice.label))
                    .color(colors.color_for(&slice.label)),
            );
        }
    });
}

fn heatmap(ui: &mut Ui, labels: &[&str], cells: &[Vec<f64>]) {
    let n = labels.len();
    if n == 0 {
        return;
    }
    let cell: f32 = 58.0;
    let label_w: f32 = 110.0;
    let label_h: f32 = 20.0;

    let size = Vec2::new(label_w + n as f32 * cell, label_h + n as f32 * cell);
    let (rect, _) = ui.allocate_exact_size(size, Sense::hover());
    let painter = ui.painter_at(rect);
    let origin = rect.min + Vec2::new(label_w, label_h);
    let text_color = ui.visuals().text_color();

    for (i, label) in labels.iter().enumerate() {
        painter.text(
            Pos2::new(rect.min.x + label_w - 6.0, origin.y + (i as f32 + 0.5) * cell),
            Align2::RIGHT_CENTER,
            label,
            FontId::proportional(12.0),
            text_color,
        );
        painter.text(
            Pos2::new(origin.x + (i as f32 + 0.5) * cell, rect.min.y + label_h - 4.0),
            Align2::CENTER_BOTTOM,
            label,
            FontId::proportional(12.0),
            text_color,
        );
    }

    for i in 0..n {
        for j in 0..n {
            let cell_rect = Rect::from_min_size(
                origin + Vec2::new(j as f32 * cell, i as f32 * cell),
                Vec2::splat(cell - 2.0),
            );
            let value = cells[i][j];
            if value.is_nan() {
                // Undefined correlation: blank cell.
                painter.rect_filled(cell_rect, 2.0, ui.visuals().faint_bg_color);
                continue;
            }
            painter.rect_filled(cell_rect, 2.0, diverging_color(value));
            let ink = if value.abs() < 0.5 {
                Color32::from_gray(40)
            } else {
                Color32::WHITE
            };
            painter.text(
                cell_rect.center(),
                Align2::CENTER_CENTER,
                format!("{value:.2}"),
                FontId::proportional(12.0),
                ink,
            );
        }
    }
}
