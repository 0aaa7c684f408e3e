use clap::Parser;
use csv::ReaderBuilder;
use plotters::prelude::*;
use std::fs;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Render a histogram of an exported lift-force sample set"
)]
struct Cli {
    /// Samples CSV produced by `lift --samples-csv`
    #[arg(long)]
    input: String,
    #[arg(long, default_value = "artifacts/lift_histogram.png")]
    output: PathBuf,
    #[arg(long, default_value_t = 40)]
    bins: usize,
    #[arg(long, default_value_t = 1000)]
    width: u32,
    #[arg(long, default_value_t = 700)]
    height: u32,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let forces = read_samples(&cli.input)?;
    if forces.is_empty() {
        return Err(anyhow::anyhow!("No finite samples in the provided CSV"));
    }
    let bins = cli.bins.max(1);

    let min_force = forces.iter().copied().fold(f64::INFINITY, f64::min);
    let mut max_force = forces.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if (max_force - min_force).abs() < f64::EPSILON {
        // Degenerate sample set; widen so the axis still has extent.
        max_force = min_force + 1.0;
    }
    let span = max_force - min_force;

    let mut counts = vec![0usize; bins];
    for &force in &forces {
        let mut bin = ((force - min_force) / span * bins as f64) as usize;
        if bin >= bins {
            bin = bins - 1;
        }
        counts[bin] += 1;
    }
    let peak = *counts.iter().max().unwrap_or(&1) as f64;

    if let Some(parent) = cli.output.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let output_str = cli
        .output
        .to_str()
        .ok_or_else(|| anyhow::anyhow!("Output path contains invalid UTF-8"))?;
    let root = BitMapBackend::new(output_str, (cli.width, cli.height)).into_drawing_area();
    root.fill(&WHITE)?;

    let font_family = select_font_family();
    let caption_font = FontDesc::new(font_family, 24.0, FontStyle::Bold);
    let label_font = FontDesc::new(font_family, 18.0, FontStyle::Normal);

    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .caption(
            format!("Lift force distribution ({} samples)", forces.len()),
            caption_font,
        )
        .x_label_area_size(60)
        .y_label_area_size(70)
        .build_cartesian_2d(min_force..max_force, 0.0..peak * 1.05)?;

    chart
        .configure_mesh()
        .x_desc("Lift force (N)")
        .y_desc("Samples per bin")
        .label_style(label_font.clone())
        .x_labels(8)
        .y_labels(6)
        .x_label_formatter(&|v| format!("{v:.1}"))
        .draw()?;

    let bar_color = RGBColor(60, 100, 180);
    for (bin, &count) in counts.iter().enumerate() {
        if count == 0 {
            continue;
        }
        let x0 = min_force + span * bin as f64 / bins as f64;
        let x1 = min_force + span * (bin + 1) as f64 / bins as f64;
        chart.draw_series(std::iter::once(Rectangle::new(
            [(x0, 0.0), (x1, count as f64)],
            bar_color.filled(),
        )))?;
    }

    let mean = forces.iter().sum::<f64>() / forces.len() as f64;
    chart.draw_series(std::iter::once(PathElement::new(
        vec![(mean, 0.0), (mean, peak * 1.05)],
        ShapeStyle::from(&BLACK.mix(0.6)).stroke_width(2),
    )))?;
    chart.draw_series(std::iter::once(Text::new(
        format!("mean = {mean:.2} N"),
        (mean, peak),
        label_font.clone(),
    )))?;

    root.present()?;
    Ok(())
}

fn select_font_family() -> FontFamily<'static> {
    if cfg!(target_os = "macos") {
        FontFamily::Name("Helvetica")
    } else if cfg!(target_os = "windows") {
        FontFamily::Name("Arial")
    } else {
        FontFamily::Name("DejaVu Sans")
    }
}

fn read_samples(path: &str) -> anyhow::Result<Vec<f64>> {
    let mut rdr = ReaderBuilder::new().has_headers(true).from_path(path)?;
    let headers = rdr.headers()?.clone();
    let force_idx = headers
        .iter()
        .position(|h| h.eq_ignore_ascii_case("lift_force_n"))
        .ok_or_else(|| anyhow::anyhow!("CSV missing 'lift_force_n' column"))?;

    let mut forces = Vec::new();
    for rec in rdr.records() {
        let r = rec?;
        let force: f64 = r.get(force_idx).unwrap_or("").parse().unwrap_or(f64::NAN);
        if force.is_finite() {
            forces.push(force);
        }
    }
    Ok(forces)
}
