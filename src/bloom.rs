use std::{
    fs::File,
    io::{ BufWriter, Write },
    path::{ Path, PathBuf },
};
use anyhow::{ Context, Result };
use clap::Parser;
use ndarray as nd;
use qbloom::{
    error::UnknownSystem,
    observe,
    params::{ QuantumSystemKind, SystemParameters },
    record::SavedState,
    session::Session,
};

// evaluate a saved (or default) parameter set and report every observable

#[derive(Parser, Debug)]
#[command(name = "bloom")]
#[command(about = "Evaluate idealized quantum states and their observables")]
#[command(allow_negative_numbers = true)]
struct Args {
    /// Saved state to start from (defaults are used when omitted)
    #[arg(short = 's', long)]
    state: Option<PathBuf>,

    /// System: "box", "qho", "superposition", or a full system name
    #[arg(long, value_parser = parse_system)]
    system: Option<QuantumSystemKind>,

    /// Quantum number (clamped to [1, 10])
    #[arg(short = 'n', long = "quantum-number")]
    n: Option<u32>,

    /// Length scale L (clamped to [5, 20])
    #[arg(short = 'L', long = "scale")]
    scale: Option<f64>,

    /// Superposition slider value (clamped to [0, 1])
    #[arg(short = 'w', long)]
    weight: Option<f64>,

    /// Simulated time
    #[arg(short = 't', long)]
    time: Option<f64>,

    /// Position of the amplitude marker
    #[arg(long, default_value_t = 0.0)]
    marker: f64,

    /// Advance the animation clock this many frames, reporting each one
    #[arg(long, default_value_t = 0)]
    frames: usize,

    /// Write the resulting state to this path
    #[arg(long)]
    save: Option<PathBuf>,

    /// Write the position×time probability heatmap as CSV to this path
    #[arg(long)]
    heatmap: Option<PathBuf>,
}

fn parse_system(s: &str) -> Result<QuantumSystemKind, UnknownSystem> {
    match s.trim().to_ascii_lowercase().as_str() {
        "box" | "pib" => Ok(QuantumSystemKind::ParticleInBox),
        "qho" | "oscillator" => Ok(QuantumSystemKind::HarmonicOscillator),
        "superposition" | "sup" => Ok(QuantumSystemKind::Superposition12),
        _ => s.parse(),
    }
}

fn build_session(args: &Args) -> Result<Session> {
    let saved = match &args.state {
        Some(path) => SavedState::load(path)
            .with_context(|| format!("failed to load {}", path.display()))?,
        None => SavedState::default(),
    };
    let mut session = Session::from_saved(&saved);
    if let Some(system) = args.system { session.set_system(system); }
    if let Some(n) = args.n { session.set_quantum_number(n); }
    if let Some(l) = args.scale { session.set_scale(l); }
    if let Some(w) = args.weight { session.set_weight(w); }
    if let Some(t) = args.time { session.set_time(t); }
    Ok(session)
}

fn report(params: &SystemParameters, marker: f64) {
    let t = params.time();
    let weights = params.weights();
    println!("system: {}", params.kind());
    if params.kind().uses_weights() {
        println!(
            "weights: w1 = {:.4}, w2 = {:.4} (slider {:.2})",
            weights.w1(), weights.w2(), weights.slider(),
        );
    } else {
        println!("n = {}", params.quantum_number());
    }
    println!("L = {}", params.scale());
    println!("t = {t:.2}");

    println!("energy levels:");
    for level in observe::energy_ladder(params) {
        let mark = if level.occupied { '*' } else { ' ' };
        println!("  {mark} E{} = {:.6}", level.rank, level.e);
    }

    let samples = observe::sample_wavefunction(params, t);
    let peak = samples.prob.iter().cloned().fold(0.0_f64, f64::max);
    println!("peak density: {peak:.6}");
    println!(
        "marker: |ψ({marker:.3})| = {:.6}",
        observe::marker_amplitude(params, marker, t),
    );

    let (_, phi) = observe::momentum_series(params);
    let phi_peak = phi.iter().map(|v| v.abs()).fold(0.0_f64, f64::max);
    println!("momentum profile peak: {phi_peak:.6}");

    let z = observe::phase_point(params, t);
    println!("phase point: ({:.6}, {:.6})", z.re, z.im);
    println!("<x> = {:.6}", observe::expectation_position(params, t));
}

fn write_heatmap(path: &Path, heatmap: &nd::Array2<f64>) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("failed to create {}", path.display()))?;
    let mut out = BufWriter::new(file);
    for row in heatmap.rows() {
        let line: Vec<String> = row.iter().map(|rho| rho.to_string()).collect();
        writeln!(out, "{}", line.join(","))?;
    }
    out.flush()?;
    Ok(())
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let mut session = build_session(&args)?;
    let params = session.snapshot();
    report(&params, args.marker);

    if args.frames > 0 {
        println!("frames:");
        session.play();
        for _ in 0..args.frames {
            let frame = session.tick();
            let z = observe::phase_point(&frame, frame.time());
            println!(
                "  t = {:.2}: phase point ({:.6}, {:.6}), <x> = {:.6}",
                frame.time(), z.re, z.im,
                observe::expectation_position(&frame, frame.time()),
            );
        }
        session.pause();
    }

    if let Some(path) = &args.heatmap {
        write_heatmap(path, &observe::probability_heatmap(&params))?;
        log::info!("wrote heatmap to {}", path.display());
    }

    if let Some(path) = &args.save {
        session.to_saved().save(path)
            .with_context(|| format!("failed to save {}", path.display()))?;
        log::info!("saved state to {}", path.display());
    }

    Ok(())
}
