use crate::app::MedGammApp;

/// Visible log lines in the status panel.
const LOG_LINES: usize = 3;

pub fn show(ctx: &egui::Context, app: &mut MedGammApp) {
    egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
        ui.add_space(2.0);

        let line_height = ui.text_style_height(&egui::TextStyle::Body);
        let spacing = ui.spacing().item_spacing.y;
        let log_height = line_height * LOG_LINES as f32 + spacing * (LOG_LINES - 1) as f32;

        egui::ScrollArea::vertical()
            .max_height(log_height)
            .min_scrolled_height(log_height)
            .stick_to_bottom(true)
            .show(ui, |ui| {
                if app.ui_state.log_messages.is_empty() {
                    // Reserve space to prevent layout jump.
                    for _ in 0..LOG_LINES {
                        ui.label("");
                    }
                } else {
                    for msg in &app.ui_state.log_messages {
                        ui.label(msg);
                    }
                }
            });

        ui.horizontal(|ui| {
            if let Some(ref frame) = app.ui_state.original {
                ui.label(format!("{}x{}", frame.width(), frame.height()));
                ui.separator();
            }
            ui.label(format!("\u{03b3} = {:.1}", app.config.gamma));
            ui.separator();
            ui.label(format!("Rounding: {}", app.config.rounding));
        });

        ui.add_space(2.0);
    });
}
