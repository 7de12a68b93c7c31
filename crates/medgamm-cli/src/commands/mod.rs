pub mod apply;
pub mod config;
pub mod histogram;
pub mod info;
pub mod lut;
pub mod pipeline;

use clap::ValueEnum;
use medgamm_core::filters::gamma::RoundingPolicy;

#[derive(Clone, Copy, Default, ValueEnum)]
pub enum RoundingArg {
    /// Cast toward zero (classic uint8 table)
    #[default]
    Truncate,
    /// Round to the nearest level
    Round,
}

impl From<RoundingArg> for RoundingPolicy {
    fn from(arg: RoundingArg) -> Self {
        match arg {
            RoundingArg::Truncate => RoundingPolicy::Truncate,
            RoundingArg::Round => RoundingPolicy::Round,
        }
    }
}
