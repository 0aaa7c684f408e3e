use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use airfoil_lift_calculator::bernoulli::scenario;
use airfoil_lift_calculator::bernoulli::{EstimateConfig, LiftEstimate, estimate_lift};
use airfoil_lift_calculator::coefficients::CoefficientTable;
use airfoil_lift_calculator::config::{find_scenario, load_scenarios};
use airfoil_lift_calculator::export::{report, samples};
use airfoil_lift_calculator::uncertain::Sampler;

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Bernoulli lift estimator for a 2D NACA 2412 airfoil section"
)]
struct Cli {
    /// Scenario to evaluate
    #[arg(long, value_enum, default_value_t = ScenarioKind::Deterministic)]
    scenario: ScenarioKind,

    /// All-angles coefficient table (used by the aoa-uncertain scenario)
    #[arg(long, default_value = "data/naca2412_cp_all_angles.csv")]
    table: PathBuf,

    /// Scenario manifest (YAML file or TOML directory); overrides the
    /// builtin scenario definitions
    #[arg(long)]
    scenarios: Option<PathBuf>,

    /// Seed for the propagation sampler
    #[arg(long, default_value_t = 7)]
    seed: u64,

    /// Monte Carlo draws per distribution combination
    #[arg(long, default_value_t = 1000)]
    draws: usize,

    /// Write a JSON sidecar with the estimate and its sample set
    #[arg(long)]
    export: Option<PathBuf>,

    /// Write the empirical lift samples as CSV (`-` for stdout)
    #[arg(long)]
    samples_csv: Option<PathBuf>,
}

#[derive(Copy, Clone, ValueEnum, Debug)]
enum ScenarioKind {
    Deterministic,
    Environment,
    Aoa,
}

impl ScenarioKind {
    fn name(self) -> &'static str {
        match self {
            ScenarioKind::Deterministic => scenario::DETERMINISTIC,
            ScenarioKind::Environment => scenario::ENVIRONMENT_UNCERTAIN,
            ScenarioKind::Aoa => scenario::AOA_UNCERTAIN,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = build_config(&cli)?;
    let mut sampler = Sampler::seeded(cli.seed, cli.draws);
    let estimate = estimate_lift(&config, &mut sampler)?;

    print_report(&estimate);

    if let Some(path) = &cli.samples_csv {
        let empirical = estimate
            .samples
            .as_deref()
            .ok_or_else(|| anyhow::anyhow!("Scenario '{}' produced a fixed lift force; there are no samples to export", estimate.scenario))?;
        let mut writer = samples::writer_for_path(path)?;
        samples::write_samples(writer.as_mut(), empirical)?;
    }

    if let Some(path) = &cli.export {
        let meta = report::Metadata {
            scenario: &estimate.scenario,
            seed: cli.seed,
            draws: cli.draws,
        };
        report::write_sidecar(
            path,
            &meta,
            estimate.lift_force_n,
            &diagnostics_record(&estimate),
            estimate.samples.as_deref(),
        )?;
    }

    Ok(())
}

fn build_config(cli: &Cli) -> anyhow::Result<EstimateConfig> {
    if let Some(manifest_path) = &cli.scenarios {
        let manifests = load_scenarios(manifest_path)?;
        let manifest = find_scenario(&manifests, cli.scenario.name()).ok_or_else(|| {
            anyhow::anyhow!(
                "Scenario '{}' not found in manifest {}",
                cli.scenario.name(),
                manifest_path.display()
            )
        })?;
        return Ok(scenario::from_manifest(manifest, &cli.table)?);
    }
    Ok(match cli.scenario {
        ScenarioKind::Deterministic => scenario::deterministic(),
        ScenarioKind::Environment => scenario::environment_uncertain()?,
        ScenarioKind::Aoa => scenario::aoa_uncertain(CoefficientTable::from_path(&cli.table)?),
    })
}

fn print_report(estimate: &LiftEstimate) {
    let d = &estimate.diagnostics;
    println!("=== Lift Estimate: {} ===", estimate.scenario);
    println!("T       = {:.6} degC", d.temperature_c);
    println!("h       = {:.6} m", d.elevation_m);
    println!("Rh      = {:.6}", d.relative_humidity);
    println!("Pair    = {:.6} Pa", d.air_pressure_pa);
    println!("Psat    = {:.6} Pa", d.saturation_pressure_pa);
    println!("Pv      = {:.6} Pa", d.vapor_pressure_pa);
    println!("Pd      = {:.6} Pa", d.dry_pressure_pa);
    println!("v_over  = {:.6} m/s", d.v_over_m_s);
    println!("v_under = {:.6} m/s", d.v_under_m_s);
    println!("A       = {:.6} m^2", d.planform_area_m2);
    println!("density = {:.6} kg/m^3", d.density_kg_m3);
    if let Some(samples) = &estimate.samples {
        println!("samples = {}", samples.len());
    }
    println!("Lift force = {:.6} N", estimate.lift_force_n);
}

fn diagnostics_record(estimate: &LiftEstimate) -> report::DiagnosticsRecord {
    let d = &estimate.diagnostics;
    report::DiagnosticsRecord {
        temperature_c: d.temperature_c,
        elevation_m: d.elevation_m,
        relative_humidity: d.relative_humidity,
        air_pressure_pa: d.air_pressure_pa,
        saturation_pressure_pa: d.saturation_pressure_pa,
        vapor_pressure_pa: d.vapor_pressure_pa,
        dry_pressure_pa: d.dry_pressure_pa,
        v_over_m_s: d.v_over_m_s,
        v_under_m_s: d.v_under_m_s,
        planform_area_m2: d.planform_area_m2,
        density_kg_m3: d.density_kg_m3,
    }
}
