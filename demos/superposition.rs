use std::f64::consts::TAU;
use qbloom::{
    observe,
    params::{ QuantumSystemKind, SystemParameters },
    wavefunction::box_energy,
};

// track the sloshing of an n = 1, 2 superposition across the box and compare
// its period against the level spacing

fn main() {
    const L: f64 = 10.0;

    let params = SystemParameters::new(
        QuantumSystemKind::Superposition12, 1, L, 0.5, 0.0).unwrap();

    // ⟨x⟩ oscillates at the beat frequency of the two modes
    let period = TAU / (box_energy(2, L) - box_energy(1, L));
    println!("expected period: {period:.4}");

    let (t, xexp) = observe::expectation_series(&params);
    let crossings: Vec<f64>
        = t.iter().zip(t.iter().skip(1))
        .zip(xexp.iter().zip(xexp.iter().skip(1)))
        .filter(|(_, (xk, xkp1))| *xk * *xkp1 < 0.0)
        .map(|((tk, tkp1), _)| (tk + tkp1) / 2.0)
        .collect();
    println!("<x> sign changes near t = {crossings:.2?}");
    if let [first, second, ..] = crossings.as_slice() {
        println!("measured period: {:.4}", 2.0 * (second - first));
    }

    let heatmap = observe::probability_heatmap(&params);
    let (imax, jmax) = heatmap.indexed_iter()
        .fold(((0, 0), f64::NEG_INFINITY), |acc, (ij, rho)| {
            if *rho > acc.1 { (ij, *rho) } else { acc }
        })
        .0;
    println!(
        "densest heatmap cell: x = {:.2}, t = {:.1}",
        (imax as f64 - 25.0) * L / 25.0,
        jmax as f64 * observe::HEATMAP_TIME_STEP,
    );
}
