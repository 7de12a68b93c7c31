use std::path::{Path, PathBuf};
use std::sync::mpsc;

use medgamm_core::compare::compare;
use medgamm_core::frame::Frame;
use medgamm_core::io::image_io::{load_image, load_image_from_bytes, save_image};
use tracing::{info, warn};

use crate::convert::frame_to_color_image;
use crate::messages::DialogResult;
use crate::panels;
use crate::state::{ConfigState, UIState, ViewState};

pub struct MedGammApp {
    pub dialog_tx: mpsc::Sender<DialogResult>,
    pub dialog_rx: mpsc::Receiver<DialogResult>,
    pub ui_state: UIState,
    pub view: ViewState,
    pub config: ConfigState,
    pub show_about: bool,
}

impl MedGammApp {
    pub fn new() -> Self {
        let (dialog_tx, dialog_rx) = mpsc::channel();

        Self {
            dialog_tx,
            dialog_rx,
            ui_state: UIState::default(),
            view: ViewState::default(),
            config: ConfigState::default(),
            show_about: false,
        }
    }

    /// Drain paths picked in file dialogs.
    fn poll_dialogs(&mut self, ctx: &egui::Context) {
        while let Ok(result) = self.dialog_rx.try_recv() {
            match result {
                DialogResult::Open(path) => self.open_path(ctx, path),
                DialogResult::Save(path) => self.save_corrected(&path),
            }
        }
    }

    fn poll_dropped_files(&mut self, ctx: &egui::Context) {
        let dropped = ctx.input(|i| i.raw.dropped_files.clone());
        // Only the first file; batch processing is not supported.
        let Some(file) = dropped.into_iter().next() else {
            return;
        };

        if let Some(path) = file.path {
            self.open_path(ctx, path);
        } else if let Some(bytes) = file.bytes {
            match load_image_from_bytes(&bytes) {
                Ok(frame) => {
                    self.ui_state.add_log(format!("Opened: {}", file.name));
                    self.set_original(ctx, frame, None);
                }
                Err(e) => self.report_error(format!("Failed to open {}: {e}", file.name)),
            }
        }
    }

    pub fn open_path(&mut self, ctx: &egui::Context, path: PathBuf) {
        match load_image(&path) {
            Ok(frame) => {
                self.ui_state.add_log(format!(
                    "Opened: {} ({}x{})",
                    path.display(),
                    frame.width(),
                    frame.height()
                ));
                self.set_original(ctx, frame, Some(path));
            }
            Err(e) => self.report_error(format!("Failed to open {}: {e}", path.display())),
        }
    }

    fn set_original(&mut self, ctx: &egui::Context, frame: Frame, path: Option<PathBuf>) {
        self.view.original = Some(ctx.load_texture(
            "original",
            frame_to_color_image(&frame),
            egui::TextureOptions::LINEAR,
        ));
        self.view.corrected = None;
        self.ui_state.set_original(frame, path);
    }

    fn save_corrected(&mut self, path: &Path) {
        let Some(ref cmp) = self.ui_state.comparison else {
            self.report_error("Nothing to save: open an image first".into());
            return;
        };
        match save_image(&cmp.corrected, path) {
            Ok(()) => self.ui_state.add_log(format!("Saved: {}", path.display())),
            Err(e) => self.report_error(format!("Failed to save {}: {e}", path.display())),
        }
    }

    /// Recompute the comparison after the image or the parameters changed.
    fn refresh(&mut self, ctx: &egui::Context) {
        if !self.ui_state.params_dirty {
            return;
        }
        self.ui_state.params_dirty = false;

        let Some(ref original) = self.ui_state.original else {
            return;
        };

        match compare(original, self.config.gamma, self.config.rounding) {
            Ok(cmp) => {
                info!(gamma = cmp.gamma.value(), regime = %cmp.regime, "correction updated");
                self.view.corrected = Some(ctx.load_texture(
                    "corrected",
                    frame_to_color_image(&cmp.corrected),
                    egui::TextureOptions::LINEAR,
                ));
                self.ui_state.comparison = Some(cmp);
            }
            Err(e) => self.report_error(format!("Correction failed: {e}")),
        }
    }

    pub fn mark_params_dirty(&mut self) {
        self.ui_state.params_dirty = true;
    }

    fn report_error(&mut self, message: String) {
        warn!("{message}");
        self.ui_state.add_log(format!("ERROR: {message}"));
    }
}

impl eframe::App for MedGammApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_dialogs(ctx);
        self.poll_dropped_files(ctx);
        self.refresh(ctx);

        panels::menu_bar::show(ctx, self);
        panels::status::show(ctx, self);
        panels::controls::show(ctx, self);
        panels::comparison::show(ctx, self);

        // Apply slider changes made this frame without waiting for the next input event.
        if self.ui_state.params_dirty {
            ctx.request_repaint();
        }

        if self.show_about {
            egui::Window::new("About MedGamm")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.heading("MedGamm");
                        ui.label("Gamma correction for grayscale scans");
                        ui.small("For visual inspection only, not for diagnosis.");
                        ui.add_space(8.0);
                        ui.label(format!("Version {}", env!("CARGO_PKG_VERSION")));
                        ui.add_space(8.0);
                        if ui.button("Close").clicked() {
                            self.show_about = false;
                        }
                    });
                });
        }
    }
}
