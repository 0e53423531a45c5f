use std::path::Path;

use console::Style;
use flipdial_core::settings::TransformSettings;
use flipdial_core::transform::ZoomStep;

struct Styles {
    title: Style,
    label: Style,
    value: Style,
    method: Style,
    disabled: Style,
    path: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            method: Style::new().green(),
            disabled: Style::new().dim().yellow(),
            path: Style::new().underlined(),
        }
    }
}

pub struct ApplySummary<'a> {
    pub input: &'a Path,
    pub output: &'a Path,
    pub settings: &'a TransformSettings,
    pub zoom: Option<ZoomStep>,
    pub input_size: (u32, u32),
    pub output_size: (u32, u32),
}

pub fn print_apply_summary(summary: &ApplySummary<'_>) {
    let s = Styles::new();

    println!();
    println!("  {}", s.title.apply_to("Flipdial"));
    println!("  {}", s.title.apply_to("\u{2550}".repeat(8)));
    println!();

    println!(
        "  {:<10}{} {}",
        s.label.apply_to("Input"),
        s.path.apply_to(summary.input.display()),
        s.label.apply_to(format!("({}x{})", summary.input_size.0, summary.input_size.1))
    );

    if summary.settings.mirror.is_empty() {
        println!("  {:<10}{}", s.label.apply_to("Mirror"), s.disabled.apply_to("none"));
    } else {
        println!(
            "  {:<10}{}",
            s.label.apply_to("Mirror"),
            s.method.apply_to(summary.settings.mirror)
        );
    }

    println!(
        "  {:<10}{}",
        s.label.apply_to("Rotate"),
        s.value.apply_to(summary.settings.angle)
    );

    match summary.zoom {
        Some(step) => println!(
            "  {:<10}{} {}",
            s.label.apply_to("Zoom"),
            s.method.apply_to(step),
            s.label.apply_to(format!("(x{:.2})", step.factor()))
        ),
        None => println!("  {:<10}{}", s.label.apply_to("Zoom"), s.disabled.apply_to("none")),
    }

    println!(
        "  {:<10}{} {}",
        s.label.apply_to("Output"),
        s.path.apply_to(summary.output.display()),
        s.label.apply_to(format!("({}x{})", summary.output_size.0, summary.output_size.1))
    );
    println!();
}
