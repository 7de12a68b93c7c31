use egui_plot::{Bar, BarChart, Plot};
use medgamm_core::advisory::{Severity, INTRO_TEXT};
use medgamm_core::compare::Comparison;
use medgamm_core::filters::histogram::Histogram;

use crate::app::MedGammApp;

/// Height of each histogram chart in pixels.
const CHART_HEIGHT: f32 = 160.0;

/// Vertical space reserved below each image for caption and histogram.
const IMAGE_RESERVE: f32 = CHART_HEIGHT + 60.0;

pub fn show(ctx: &egui::Context, app: &mut MedGammApp) {
    egui::CentralPanel::default().show(ctx, |ui| {
        let (Some(cmp), Some(original_tex), Some(corrected_tex)) = (
            app.ui_state.comparison.as_ref(),
            app.view.original.as_ref(),
            app.view.corrected.as_ref(),
        ) else {
            show_placeholder(ui);
            return;
        };

        egui::ScrollArea::vertical().show(ui, |ui| {
            ui.columns(2, |cols| {
                image_column(
                    &mut cols[0],
                    "Original Scan",
                    "Linear Response (Sensor)",
                    original_tex,
                    "original_histogram",
                    &cmp.original_histogram,
                );
                image_column(
                    &mut cols[1],
                    &format!("Enhanced (\u{03b3}={})", cmp.gamma),
                    "Corrected (Perceptual)",
                    corrected_tex,
                    "corrected_histogram",
                    &cmp.corrected_histogram,
                );
            });

            ui.separator();
            advisory(ui, cmp);
        });
    });
}

fn image_column(
    ui: &mut egui::Ui,
    title: &str,
    caption: &str,
    texture: &egui::TextureHandle,
    plot_id: &str,
    histogram: &Histogram,
) {
    ui.heading(title);

    let max_height = (ui.available_height() - IMAGE_RESERVE).max(120.0);
    let max_size = egui::vec2(ui.available_width(), max_height);
    ui.add(
        egui::Image::from_texture(egui::load::SizedTexture::from_handle(texture))
            .max_size(max_size)
            .maintain_aspect_ratio(true),
    );
    ui.weak(caption);
    ui.add_space(4.0);

    histogram_chart(ui, plot_id, histogram);
}

/// Bar chart of the 256 intensity bins over [0, 256).
fn histogram_chart(ui: &mut egui::Ui, plot_id: &str, histogram: &Histogram) {
    let bars: Vec<Bar> = histogram
        .counts()
        .iter()
        .enumerate()
        .map(|(value, &count)| {
            Bar::new(value as f64 + 0.5, count as f64)
                .width(1.0)
                .fill(egui::Color32::GRAY)
        })
        .collect();

    let chart = BarChart::new("intensity", bars).color(egui::Color32::GRAY);

    Plot::new(plot_id)
        .height(CHART_HEIGHT)
        .include_x(0.0)
        .include_x(256.0)
        .include_y(0.0)
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .show_grid(false)
        .show_axes([true, false])
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(chart);
        });
}

fn advisory(ui: &mut egui::Ui, cmp: &Comparison) {
    ui.heading("Analysis");
    ui.add_space(4.0);

    let (fill, text) = severity_colors(cmp.regime.severity());
    egui::Frame::group(ui.style()).fill(fill).show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.label(
            egui::RichText::new(cmp.regime.headline(cmp.gamma))
                .strong()
                .color(text),
        );
        ui.label(egui::RichText::new(cmp.regime.advice()).color(text));
    });

    if let Some(stats) = cmp.corrected_stats {
        ui.add_space(4.0);
        ui.small(format!(
            "Image Statistics | Min Intensity: {} | Max Intensity: {} | Mean: {:.1}",
            stats.min, stats.max, stats.mean
        ));
    }
}

fn severity_colors(severity: Severity) -> (egui::Color32, egui::Color32) {
    match severity {
        Severity::Info => (
            egui::Color32::from_rgb(28, 45, 70),
            egui::Color32::from_rgb(150, 195, 255),
        ),
        Severity::Warning => (
            egui::Color32::from_rgb(70, 55, 20),
            egui::Color32::from_rgb(255, 210, 110),
        ),
        Severity::Success => (
            egui::Color32::from_rgb(25, 60, 35),
            egui::Color32::from_rgb(140, 225, 150),
        ),
    }
}

fn show_placeholder(ui: &mut egui::Ui) {
    ui.vertical_centered(|ui| {
        ui.add_space(ui.available_height() * 0.3);
        ui.label(
            egui::RichText::new("Open an X-ray, CT or MRI image to begin")
                .size(18.0)
                .color(egui::Color32::from_gray(140)),
        );
        ui.add_space(16.0);
        ui.strong("Why gamma correction?");
        ui.add_space(4.0);
        ui.set_max_width(520.0);
        ui.label(INTRO_TEXT);
    });
}
