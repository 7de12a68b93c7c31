use medgamm_core::consts::{GAMMA_MAX, GAMMA_MIN, GAMMA_STEP};
use medgamm_core::filters::gamma::RoundingPolicy;

use crate::app::MedGammApp;
use crate::state::ConfigState;

/// Fixed width of the left control panel.
const PANEL_WIDTH: f32 = 260.0;

pub fn show(ctx: &egui::Context, app: &mut MedGammApp) {
    egui::SidePanel::left("controls")
        .resizable(false)
        .exact_width(PANEL_WIDTH)
        .show(ctx, |ui| {
            ui.add_space(4.0);
            ui.heading("Control Panel");
            ui.separator();

            file_section(ui, app);
            ui.add_space(8.0);
            ui.separator();
            gamma_section(ui, app);
        });
}

fn file_section(ui: &mut egui::Ui, app: &MedGammApp) {
    let name = app
        .ui_state
        .file_path
        .as_ref()
        .and_then(|p| p.file_name())
        .map(|n| n.to_string_lossy().into_owned());
    let status = app
        .ui_state
        .original
        .as_ref()
        .map(|f| format!("{}x{}", f.width(), f.height()));

    crate::panels::section_header(ui, "Image", status.as_deref());
    ui.add_space(4.0);
    match (name, app.ui_state.original.is_some()) {
        (Some(name), _) => {
            ui.label(name);
        }
        (None, true) => {
            ui.label("Dropped image");
        }
        (None, false) => {
            ui.weak("File > Open, or drop a JPEG/PNG/TIFF here");
        }
    }
}

fn gamma_section(ui: &mut egui::Ui, app: &mut MedGammApp) {
    let label = format!("{:.1}", app.config.gamma);
    crate::panels::section_header(ui, "Gamma Correction (\u{03b3})", Some(&label));
    ui.add_space(4.0);

    let before = app.config;

    ui.add(
        egui::Slider::new(&mut app.config.gamma, GAMMA_MIN..=GAMMA_MAX)
            .step_by(GAMMA_STEP as f64)
            .fixed_decimals(1)
            .clamping(egui::SliderClamping::Always)
            .text("\u{03b3}"),
    );

    egui::ComboBox::from_label("Rounding")
        .selected_text(app.config.rounding.to_string())
        .show_ui(ui, |ui| {
            ui.selectable_value(&mut app.config.rounding, RoundingPolicy::Truncate, "Truncate");
            ui.selectable_value(&mut app.config.rounding, RoundingPolicy::Round, "Round");
        });

    if ui.button("Reset").clicked() {
        app.config = ConfigState::default();
    }

    if app.config != before {
        app.mark_params_dirty();
    }

    ui.add_space(8.0);
    ui.small("Output = input^(1/\u{03b3}); \u{03b3} = 1 leaves the scan unchanged.");
}
