// ==========================================
// Salon Color Engine - Demo Entry Point
// ==========================================
// Reads a ConsultationRequest as JSON, runs the full formulation
// pass, prints the plan as JSON. The engine itself performs no I/O;
// this binary is the only place files are touched.
// ==========================================

use anyhow::{bail, Context, Result};
use salon_color_engine::{logging, ConsultationRequest, FormulationApi, SalonConfig};
use std::path::Path;

fn main() -> Result<()> {
    logging::init();

    tracing::info!("{} v{}", salon_color_engine::APP_NAME, salon_color_engine::VERSION);

    let args: Vec<String> = std::env::args().collect();
    let request_path = match args.get(1) {
        Some(path) => path,
        None => bail!("usage: salon-color-engine <request.json> [salon-config.json]"),
    };

    let config = match args.get(2) {
        Some(path) => SalonConfig::load(Path::new(path))
            .with_context(|| format!("loading salon config from {path}"))?,
        None => SalonConfig::default(),
    };

    let raw = std::fs::read_to_string(request_path)
        .with_context(|| format!("reading consultation request from {request_path}"))?;
    let request: ConsultationRequest =
        serde_json::from_str(&raw).context("parsing consultation request JSON")?;

    let api = FormulationApi::new(config);
    let plan = api.formulate(&request);

    if !plan.compatibility.is_compatible {
        tracing::warn!("service blocked: incompatible chemical history");
    }

    println!("{}", serde_json::to_string_pretty(&plan)?);
    Ok(())
}
