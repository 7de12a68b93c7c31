use medgamm_core::io::image_io::SUPPORTED_EXTENSIONS;

use crate::app::MedGammApp;
use crate::messages::DialogResult;
use crate::state::ConfigState;

pub fn show(ctx: &egui::Context, app: &mut MedGammApp) {
    egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        egui::MenuBar::new().ui(ui, |ui| {
            ui.menu_button("File", |ui| {
                let open_shortcut = egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::O);
                if ui.add(egui::Button::new("Open...").shortcut_text(ctx.format_shortcut(&open_shortcut))).clicked() {
                    ui.close();
                    open_file(app);
                }

                let can_save = app.ui_state.comparison.is_some();
                let save_shortcut = egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::S);
                if ui
                    .add_enabled(
                        can_save,
                        egui::Button::new("Save Corrected As...")
                            .shortcut_text(ctx.format_shortcut(&save_shortcut)),
                    )
                    .clicked()
                {
                    ui.close();
                    save_file(app);
                }

                ui.separator();

                let quit_shortcut = egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::Q);
                if ui.add(egui::Button::new("Quit").shortcut_text(ctx.format_shortcut(&quit_shortcut))).clicked() {
                    ui.close();
                    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                }
            });

            ui.menu_button("Edit", |ui| {
                if ui.button("Reset Gamma").clicked() {
                    ui.close();
                    app.config = ConfigState::default();
                    app.mark_params_dirty();
                    app.ui_state.add_log("Gamma reset to 1.0".into());
                }
            });

            ui.menu_button("Help", |ui| {
                if ui.button("About").clicked() {
                    ui.close();
                    app.show_about = true;
                }
            });
        });

        // Keyboard shortcuts (consumed outside menus)
        if ctx.input_mut(|i| i.consume_shortcut(&egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::O))) {
            open_file(app);
        }
        if ctx.input_mut(|i| i.consume_shortcut(&egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::S)))
            && app.ui_state.comparison.is_some()
        {
            save_file(app);
        }
        if ctx.input_mut(|i| i.consume_shortcut(&egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::Q))) {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
    });
}

fn open_file(app: &mut MedGammApp) {
    let dialog_tx = app.dialog_tx.clone();
    std::thread::spawn(move || {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("Images", SUPPORTED_EXTENSIONS)
            .add_filter("All files", &["*"])
            .pick_file()
        {
            let _ = dialog_tx.send(DialogResult::Open(path));
        }
    });
}

fn save_file(app: &mut MedGammApp) {
    let dialog_tx = app.dialog_tx.clone();
    let file_name = app
        .ui_state
        .file_path
        .as_ref()
        .and_then(|p| p.file_stem())
        .map(|stem| format!("{}_corrected.png", stem.to_string_lossy()))
        .unwrap_or_else(|| "corrected.png".to_string());

    std::thread::spawn(move || {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("PNG", &["png"])
            .add_filter("TIFF", &["tiff", "tif"])
            .add_filter("JPEG", &["jpg", "jpeg"])
            .set_file_name(file_name)
            .save_file()
        {
            let _ = dialog_tx.send(DialogResult::Save(path));
        }
    });
}
