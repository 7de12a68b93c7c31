use std::path::Path;

use console::Style;
use medgamm_core::advisory::Severity;
use medgamm_core::compare::Comparison;
use medgamm_core::config::EnhanceConfig;
use medgamm_core::filters::histogram::ImageStats;

struct Styles {
    title: Style,
    header: Style,
    label: Style,
    value: Style,
    path: Style,
    info: Style,
    warning: Style,
    success: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            header: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            path: Style::new().underlined(),
            info: Style::new().blue(),
            warning: Style::new().yellow(),
            success: Style::new().green(),
        }
    }

    fn severity(&self, severity: Severity) -> &Style {
        match severity {
            Severity::Info => &self.info,
            Severity::Warning => &self.warning,
            Severity::Success => &self.success,
        }
    }
}

pub fn print_config_summary(config: &EnhanceConfig) {
    let s = Styles::new();

    println!();
    println!("  {}", s.title.apply_to("MedGamm Run"));
    println!("  {}", s.title.apply_to("\u{2550}".repeat(11)));
    println!();
    println!(
        "  {:<14}{}",
        s.label.apply_to("Input"),
        s.path.apply_to(config.input.display())
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Output"),
        s.path.apply_to(config.output.display())
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Gamma"),
        s.value.apply_to(config.gamma)
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Rounding"),
        s.value.apply_to(config.rounding)
    );
    if let Some(ref hist) = config.histogram {
        println!(
            "  {:<14}{}",
            s.label.apply_to("Histogram"),
            s.path.apply_to(hist.display())
        );
    }
}

pub fn print_comparison_summary(input: &Path, output: &Path, cmp: &Comparison) {
    let s = Styles::new();

    println!();
    println!("  {}", s.header.apply_to("Gamma Correction"));
    println!(
        "    {:<12}{}",
        s.label.apply_to("Input"),
        s.path.apply_to(input.display())
    );
    println!(
        "    {:<12}{}x{}",
        s.label.apply_to("Size"),
        cmp.original.width(),
        cmp.original.height()
    );
    println!(
        "    {:<12}{}",
        s.label.apply_to("Gamma"),
        s.value.apply_to(cmp.gamma.value())
    );
    print_stats_line(&s, "Original", cmp.original_stats.as_ref());
    print_stats_line(&s, "Corrected", cmp.corrected_stats.as_ref());
    println!();

    let style = s.severity(cmp.regime.severity());
    println!("  {}", style.apply_to(cmp.regime.headline(cmp.gamma)).bold());
    println!("  {}", style.apply_to(cmp.regime.advice()));
    println!();
    println!(
        "  {} {}",
        s.label.apply_to("Saved to"),
        s.path.apply_to(output.display())
    );
}

fn print_stats_line(s: &Styles, label: &str, stats: Option<&ImageStats>) {
    if let Some(stats) = stats {
        println!(
            "    {:<12}min {}  max {}  mean {:.1}",
            s.label.apply_to(label),
            s.value.apply_to(stats.min),
            s.value.apply_to(stats.max),
            stats.mean
        );
    }
}
