//! Export helpers for CSV and JSON lift-estimate artifacts.

pub mod samples {
    use std::fs::{self, File};
    use std::io::{self, BufWriter, Write};
    use std::path::Path;

    const HEADER: &str = "sample_index,lift_force_n";

    /// Create a writer for the target path, handling stdout (`-`) by convention.
    pub fn writer_for_path(path: &Path) -> io::Result<Box<dyn Write>> {
        if path == Path::new("-") {
            return Ok(Box::new(BufWriter::new(io::stdout())));
        }
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let file = File::create(path)?;
        Ok(Box::new(BufWriter::new(file)))
    }

    /// Write the standard samples CSV header.
    pub fn write_header(writer: &mut dyn Write) -> io::Result<()> {
        writeln!(writer, "{}", HEADER)
    }

    /// Write one empirical sample set, in distribution order.
    pub fn write_samples(writer: &mut dyn Write, samples: &[f64]) -> io::Result<()> {
        write_header(writer)?;
        for (index, value) in samples.iter().enumerate() {
            writeln!(writer, "{},{:.9}", index, value)?;
        }
        Ok(())
    }
}

pub mod report {
    use chrono::Utc;
    use serde::Serialize;
    use serde_json::to_writer_pretty;
    use std::fs::{self, File};
    use std::io;
    use std::path::Path;

    /// Representative intermediate quantities carried into the sidecar.
    #[derive(Debug, Clone, Serialize)]
    pub struct DiagnosticsRecord {
        pub temperature_c: f64,
        pub elevation_m: f64,
        pub relative_humidity: f64,
        pub air_pressure_pa: f64,
        pub saturation_pressure_pa: f64,
        pub vapor_pressure_pa: f64,
        pub dry_pressure_pa: f64,
        pub v_over_m_s: f64,
        pub v_under_m_s: f64,
        pub planform_area_m2: f64,
        pub density_kg_m3: f64,
    }

    /// Metadata describing the run that produced the estimate.
    #[derive(Debug, Clone, Copy)]
    pub struct Metadata<'a> {
        pub scenario: &'a str,
        pub seed: u64,
        pub draws: usize,
    }

    #[derive(Serialize)]
    struct LiftSidecar<'a> {
        scenario: &'a str,
        generated_at: String,
        seed: u64,
        draws: usize,
        lift_force_n: f64,
        diagnostics: &'a DiagnosticsRecord,
        #[serde(skip_serializing_if = "Option::is_none")]
        samples: Option<&'a [f64]>,
    }

    /// Write the JSON sidecar for one lift estimate. The seed and draw count
    /// are recorded so a reported distribution can be reproduced exactly.
    pub fn write_sidecar(
        output: &Path,
        meta: &Metadata<'_>,
        lift_force_n: f64,
        diagnostics: &DiagnosticsRecord,
        samples: Option<&[f64]>,
    ) -> io::Result<()> {
        if let Some(parent) = output.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let sidecar = LiftSidecar {
            scenario: meta.scenario,
            generated_at: Utc::now().to_rfc3339(),
            seed: meta.seed,
            draws: meta.draws,
            lift_force_n,
            diagnostics,
            samples,
        };
        to_writer_pretty(File::create(output)?, &sidecar)?;
        Ok(())
    }
}
