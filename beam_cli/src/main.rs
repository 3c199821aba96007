//! # Beamline CLI
//!
//! Runs a beam project and prints the analysis report.
//!
//! ```text
//! beam_cli [PROJECT.json] [--json] [--save PATH]
//! ```
//!
//! Without a project file the built-in demo beam is analyzed. Set `RUST_LOG`
//! (e.g. `RUST_LOG=debug`) to see solver diagnostics.

use std::path::PathBuf;
use std::process::ExitCode;

use beam_core::calculations::{AnalysisResults, BeamConfig, BeamType, Reactions};
use beam_core::errors::{CalcError, CalcResult};
use beam_core::file_io::{load_project, save_project};
use beam_core::loads::{Load, TriangularProfile};
use beam_core::materials::MaterialLibrary;
use beam_core::project::Project;
use beam_core::sections::SectionProfile;
use beam_core::units::{
    KilonewtonMeters, Kilonewtons, KilonewtonsPerMeter, Megapascals, Meters, Millimeters,
    NewtonMeters, Newtons, NewtonsPerMeter, Pascals,
};
use log::info;

const USAGE: &str = "Usage: beam_cli [PROJECT.json] [--json] [--save PATH]";

#[derive(Debug, Default)]
struct Args {
    project: Option<PathBuf>,
    json: bool,
    save: Option<PathBuf>,
}

fn parse_args() -> Result<Option<Args>, String> {
    let mut args = Args::default();
    let mut iter = std::env::args().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "-h" | "--help" => return Ok(None),
            "--json" => args.json = true,
            "--save" => {
                let path = iter.next().ok_or("--save needs a path")?;
                args.save = Some(PathBuf::from(path));
            }
            other if other.starts_with('-') => return Err(format!("Unknown option '{}'", other)),
            other => {
                if args.project.is_some() {
                    return Err("Only one project file can be given".to_string());
                }
                args.project = Some(PathBuf::from(other));
            }
        }
    }
    Ok(Some(args))
}

/// 6.4 m beam on a pin at 1.2 m and a roller at 5.2 m, 2 kN/m between the
/// supports and an 8 kN·m clockwise couple at 3.2 m
fn demo_project() -> CalcResult<Project> {
    let steel = MaterialLibrary::builtin()
        .lookup("Structural Steel (ASTM A36)")?
        .clone();
    let section = SectionProfile::IBeam {
        flange_width: Meters::from(Millimeters(150.0)).value(),
        flange_thickness: Meters::from(Millimeters(12.0)).value(),
        web_height: Meters::from(Millimeters(276.0)).value(),
        web_thickness: Meters::from(Millimeters(8.0)).value(),
    };

    let mut project = Project::new(
        "Demo",
        "DEMO-001",
        "Beamline",
        BeamConfig::simple(6.4, 1.2, 5.2),
        section,
        steel,
    );
    project.add_load(Load::uniform(
        1.2,
        5.2,
        NewtonsPerMeter::from(KilonewtonsPerMeter(-2.0)).value(),
    ));
    project.add_load(Load::moment(3.2, NewtonMeters::from(KilonewtonMeters(-8.0)).value()));
    Ok(project)
}

fn kn(n: f64) -> f64 {
    Kilonewtons::from(Newtons(n)).value()
}

fn knm(nm: f64) -> f64 {
    KilonewtonMeters::from(NewtonMeters(nm)).value()
}

fn mpa(pa: f64) -> f64 {
    Megapascals::from(Pascals(pa)).value()
}

fn mm(m: f64) -> f64 {
    Millimeters::from(Meters(m)).value()
}

fn print_report(project: &Project, results: &AnalysisResults) {
    println!("═══════════════════════════════════════");
    println!("  BEAM ANALYSIS RESULTS");
    println!("═══════════════════════════════════════");
    println!();
    println!("Input:");
    println!("  Job:      {} ({})", project.meta.job_id, project.meta.client);
    println!("  Beam:     {}, L = {:.3} m", project.beam.beam_type, project.beam.length);
    if let BeamType::Simple { pin, roller } = project.beam.beam_type {
        println!("  Supports: pin A = {:.3} m, roller B = {:.3} m", pin, roller);
    }
    println!("  Section:  {}", project.section);
    println!("  Material: {}", project.material);
    println!("  Loads:");
    for (i, load) in project.loads.iter().enumerate() {
        println!("    [{}] {}", i, describe_load(load));
    }
    println!();

    println!("Reactions:");
    match results.reactions {
        Reactions::Simple { va, ha, vb } => {
            println!("  Va = {:.3} kN", kn(va));
            println!("  Ha = {:.3} kN", kn(ha));
            println!("  Vb = {:.3} kN", kn(vb));
        }
        Reactions::Cantilever { va, ha, ma } => {
            println!("  Va = {:.3} kN", kn(va));
            println!("  Ha = {:.3} kN", kn(ha));
            println!("  Ma = {:.3} kN·m", knm(ma));
        }
    }
    println!();

    println!("Demand:");
    println!(
        "  V_max = {:.3} kN at x = {:.3} m",
        kn(results.max_shear.value),
        results.max_shear.position
    );
    println!(
        "  M_max = {:.3} kN·m at x = {:.3} m",
        knm(results.max_moment.value),
        results.max_moment.position
    );
    println!(
        "  M+    = {:.3} kN·m at x = {:.3} m",
        knm(results.max_sagging_moment.value),
        results.max_sagging_moment.position
    );
    println!(
        "  M-    = {:.3} kN·m at x = {:.3} m",
        knm(results.max_hogging_moment.value),
        results.max_hogging_moment.position
    );
    if let Some(y) = results.max_deflection {
        println!("  δ_max = {:.3} mm at x = {:.3} m", mm(y.value), y.position);
    }
    println!();

    if let Some(stress) = &results.stress {
        println!("Stress:");
        println!(
            "  σ_max = {:.2} MPa at x = {:.3} m",
            mpa(stress.max_bending_stress.value),
            stress.max_bending_stress.position
        );
        match stress.max_shear_stress {
            Some(tau) => println!("  τ_max = {:.2} MPa at x = {:.3} m", mpa(tau.value), tau.position),
            None => println!("  τ_max = undefined (zero section width)"),
        }
        println!(
            "  Bending FOS: {} {}",
            stress.bending_fos,
            status_icon(stress.bending_fos.meets(1.0))
        );
        if let Some(fos) = stress.shear_fos {
            println!("  Shear FOS:   {} {}", fos, status_icon(fos.meets(1.0)));
        }
        println!();
    }
    println!("═══════════════════════════════════════");
}

fn describe_load(load: &Load) -> String {
    match load {
        Load::Point(p) => format!(
            "Point load {:.3} kN (Fx {:.3} kN) at x = {:.3} m",
            kn(p.force_y),
            kn(p.force_x),
            p.position
        ),
        Load::Moment(m) => format!("Moment {:.3} kN·m at x = {:.3} m", knm(m.magnitude), m.position),
        Load::Uniform(u) => format!(
            "UDL {:.3} kN/m over [{:.3}, {:.3}] m",
            KilonewtonsPerMeter::from(NewtonsPerMeter(u.intensity)).value(),
            u.start,
            u.end
        ),
        Load::Triangular(t) => format!(
            "{} load {:.3} → {:.3} kN/m over [{:.3}, {:.3}] m",
            profile_name(t.profile()),
            KilonewtonsPerMeter::from(NewtonsPerMeter(t.intensity_start)).value(),
            KilonewtonsPerMeter::from(NewtonsPerMeter(t.intensity_end)).value(),
            t.start,
            t.end
        ),
    }
}

fn profile_name(profile: TriangularProfile) -> &'static str {
    match profile {
        TriangularProfile::Rising => "Rising triangular",
        TriangularProfile::Falling => "Falling triangular",
        TriangularProfile::Trapezoidal => "Trapezoidal",
        TriangularProfile::Empty => "Empty linear",
    }
}

fn status_icon(pass: bool) -> &'static str {
    if pass { "[OK]" } else { "[FAIL]" }
}

fn run(args: &Args) -> CalcResult<()> {
    let project = match &args.project {
        Some(path) => {
            info!("Loading project from {}", path.display());
            load_project(path)?
        }
        None => {
            info!("No project file given, running the demo beam");
            demo_project()?
        }
    };

    let results = project.analyze()?;

    if args.json {
        let json = serde_json::to_string_pretty(&results)
            .map_err(|e| CalcError::serialization(e.to_string()))?;
        println!("{}", json);
    } else {
        print_report(&project, &results);
    }

    if let Some(path) = &args.save {
        save_project(&project, path)?;
        if !args.json {
            println!("Project saved to {}", path.display());
        }
    }

    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    let args = match parse_args() {
        Ok(Some(args)) => args,
        Ok(None) => {
            println!("{}", USAGE);
            return ExitCode::SUCCESS;
        }
        Err(message) => {
            eprintln!("Error: {}", message);
            eprintln!("{}", USAGE);
            return ExitCode::FAILURE;
        }
    };

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            if let Ok(json) = serde_json::to_string_pretty(&e) {
                eprintln!();
                eprintln!("Error JSON:");
                eprintln!("{}", json);
            }
            ExitCode::FAILURE
        }
    }
}
