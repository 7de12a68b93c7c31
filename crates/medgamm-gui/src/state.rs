use std::path::PathBuf;

use medgamm_core::compare::Comparison;
use medgamm_core::consts::GAMMA_DEFAULT;
use medgamm_core::filters::gamma::RoundingPolicy;
use medgamm_core::frame::Frame;

/// Editable correction parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ConfigState {
    pub gamma: f32,
    pub rounding: RoundingPolicy,
}

impl Default for ConfigState {
    fn default() -> Self {
        Self {
            gamma: GAMMA_DEFAULT,
            rounding: RoundingPolicy::default(),
        }
    }
}

/// Overall UI state.
#[derive(Default)]
pub struct UIState {
    pub file_path: Option<PathBuf>,
    pub original: Option<Frame>,
    pub comparison: Option<Comparison>,

    /// Parameters changed since the last comparison was computed.
    pub params_dirty: bool,

    /// Log messages.
    pub log_messages: Vec<String>,
}

impl UIState {
    pub fn add_log(&mut self, msg: String) {
        self.log_messages.push(msg);
    }

    /// Replace the loaded image; the comparison is recomputed on the next frame.
    pub fn set_original(&mut self, frame: Frame, path: Option<PathBuf>) {
        self.original = Some(frame);
        self.file_path = path;
        self.comparison = None;
        self.params_dirty = true;
    }
}

/// GPU textures for the two images currently on screen.
#[derive(Default)]
pub struct ViewState {
    pub original: Option<egui::TextureHandle>,
    pub corrected: Option<egui::TextureHandle>,
}
