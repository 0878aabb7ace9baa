//! reform — plan a squad's change from a line abreast to a wedge, then a circle.
//!
//! Usage: `reform [config.json]`
//!
//! The optional JSON file overrides any subset of `PlannerConfig` fields,
//! e.g. `{ "strategy": "timing", "unit_speed": 4.0 }`.  Set `RUST_LOG`-style
//! verbosity with `REFORM_LOG=debug`.

mod formation;

use std::time::{Duration, Instant};

use anyhow::{Context, Result};

use fp_core::{DVec3, PlannerConfig, UnitId};
use fp_plan::{FormationPlan, FormationPlanner, UnitInput};

use formation::{Shape, slots};

// ── Constants ─────────────────────────────────────────────────────────────────

const UNIT_COUNT: usize = 9;
const SPACING:    f64   = 8.0;  // metres between neighbouring slots
const ALTITUDE:   f64   = 0.0;
const ADVANCE:    f64   = 60.0; // how far forward each new formation forms up

// ── Logging ───────────────────────────────────────────────────────────────────

fn setup_logging() -> Result<()> {
    let level = std::env::var("REFORM_LOG")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(log::LevelFilter::Info);

    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!("[{}][{}] {}", record.level(), record.target(), message))
        })
        .level(level)
        .chain(std::io::stderr())
        .apply()?;
    Ok(())
}

fn load_config() -> Result<PlannerConfig> {
    let Some(path) = std::env::args().nth(1) else {
        return Ok(PlannerConfig::default());
    };
    let text = std::fs::read_to_string(&path).with_context(|| format!("reading {path}"))?;
    let config = serde_json::from_str(&text).with_context(|| format!("parsing {path}"))?;
    log::info!("loaded planner config from {path}");
    Ok(config)
}

// ── Reporting ─────────────────────────────────────────────────────────────────

fn print_plan(units: &[UnitInput], plan: &FormationPlan, elapsed: Duration) {
    println!("Planned in {:.3} ms", elapsed.as_secs_f64() * 1e3);
    println!(
        "  conflicts: {}  |  detoured: {}  |  max delay: {:.2} s  |  total distance: {:.1} m",
        plan.conflicts().len(),
        plan.detoured_count(),
        plan.max_start_delay(),
        plan.total_distance(),
    );
    println!();

    println!("{:<10} {:<24} {:<24} {:>8} {:>7} {:>9}", "Unit", "From", "To", "Dist", "Delay", "Waypts");
    println!("{}", "-".repeat(86));
    for unit in units {
        let Some(path) = plan.get(unit.id) else { continue };
        println!(
            "{:<10} {:<24} {:<24} {:>8.2} {:>7.2} {:>9}",
            unit.id.to_string(),
            path.start.to_string(),
            path.end.to_string(),
            path.total_distance,
            path.start_delay,
            path.waypoints.len(),
        );
    }
    println!();
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    setup_logging()?;

    let config = load_config()?;
    println!("=== reform — line abreast → wedge → circle ===");
    println!("Units: {UNIT_COUNT}  |  Spacing: {SPACING} m  |  Strategy: {:?}", config.strategy);
    println!();

    let planner = FormationPlanner::new(config)?;

    // Start in a line abreast at the origin, unit 0 in the middle.
    let mut positions = slots(Shape::Line, UNIT_COUNT, DVec3::new(0.0, 0.0, ALTITUDE), SPACING);
    let mut leader = DVec3::new(0.0, 0.0, ALTITUDE);

    for shape in [Shape::Wedge, Shape::Circle] {
        leader += DVec3::Y * ADVANCE;
        let targets = slots(shape, UNIT_COUNT, leader, SPACING);

        let units: Vec<UnitInput> = positions
            .iter()
            .enumerate()
            .map(|(i, &pos)| -> Result<UnitInput> {
                let id = UnitId::try_from(i)?;
                Ok(if i == 0 { UnitInput::anchor(id, pos) } else { UnitInput::new(id, pos) })
            })
            .collect::<Result<_>>()?;

        println!("── {shape:?} ──");
        let t0 = Instant::now();
        let plan = planner.plan(&units, |id| targets[id.index()]);
        print_plan(&units, &plan, t0.elapsed());

        // Each unit now stands wherever its path ended.
        for path in &plan {
            positions[path.unit.index()] = path.end;
        }
    }

    Ok(())
}
