use anyhow::Result;
use clap::Args;
use medgamm_core::filters::gamma::GammaLut;

use super::RoundingArg;

#[derive(Args)]
pub struct LutArgs {
    /// Gamma value (> 0)
    #[arg(long)]
    pub gamma: f32,

    /// How table values are converted back to 8-bit levels
    #[arg(long, value_enum, default_value = "truncate")]
    pub rounding: RoundingArg,

    /// Entries per printed row
    #[arg(long, default_value = "16")]
    pub columns: usize,
}

pub fn run(args: &LutArgs) -> Result<()> {
    let lut = GammaLut::with_policy(args.gamma, args.rounding.into())?;

    println!("# gamma={} rounding={}", lut.gamma().value(), lut.policy());
    for row in lut.table().chunks(args.columns.max(1)) {
        let line: Vec<String> = row.iter().map(|v| format!("{v:>3}")).collect();
        println!("{}", line.join(" "));
    }

    Ok(())
}
