//! Sun–Earth orbit example
//!
//! Builds a two-body system from loader records, advances it one simulated
//! year in one-hour steps and prints energy and trajectory diagnostics.
//!
//! Run with: RUST_LOG=debug cargo run --package orrery --example sun_earth

use rand::SeedableRng;
use rand_chacha::ChaChaRng;
use units::{Length, Mass, Time};

use orrery::prelude::*;
use orrery::prepare::{circular_orbit, CircularOrbit};

fn main() {
    env_logger::init();

    println!("Orrery: Sun and Earth\n");
    println!("{}", "=".repeat(60));

    let sun = BodyRecord::new(
        "Sun",
        Mass::from_solar_masses(1.0).to_kg(),
        Length::from_solar_radii(1.0).to_m(),
        [0.0; 3],
        [0.0; 3],
        [255, 204, 0],
    );

    // Start Earth at a seeded random angle so reruns match
    let mut rng = ChaChaRng::seed_from_u64(42);
    let earth = circular_orbit(
        &sun,
        &CircularOrbit {
            name: "Earth".into(),
            mass: Mass::from_earth_masses(1.0).to_kg(),
            radius: Length::from_earth_radii(1.0).to_m(),
            distance: Length::from_au(1.0).to_m(),
            color: [40, 120, 255],
        },
        G,
        &mut rng,
    );

    println!("\nInitial conditions:");
    println!(
        "  Earth position: ({:.4}, {:.4}) AU",
        Length::from_meters(earth.position[0]).to_au(),
        Length::from_meters(earth.position[1]).to_au()
    );
    println!(
        "  Earth speed: {:.3} km/s",
        earth.velocity[0].hypot(earth.velocity[1]) / 1_000.0
    );

    let config = SimulationConfig::default().with_trajectory_retention(Time::from_days(90.0));
    let mut sim = match Simulation::from_records(vec![sun], vec![earth], config) {
        Ok(sim) => sim,
        Err(err) => {
            eprintln!("invalid system: {err}");
            std::process::exit(1);
        }
    };

    let initial_energy = sim.total_energy();
    println!("  Total energy: {:.6e} J", initial_energy);

    println!("\nIntegrating one year, printing every 30 days...\n");

    let month = Time::from_days(30.0).to_seconds();
    for _ in 0..12 {
        sim.advance(month);

        let earth = &sim.bodies()[1];
        let drift = (sim.total_energy() - initial_energy) / initial_energy;
        println!(
            "  day {:5.0}: r = {:.5} AU, |v| = {:.3} km/s, ΔE/E = {:+.3e}",
            Time::from_seconds(sim.elapsed_time()).to_days(),
            Length::from_meters(earth.position.coords.magnitude()).to_au(),
            earth.speed() / 1_000.0,
            drift
        );
    }

    println!("\n{}", "=".repeat(60));
    println!("Steps taken: {}", sim.steps_taken());

    if let Some(trajectory) = sim.trajectory(BodyId(1)) {
        let span = match (trajectory.oldest(), trajectory.latest()) {
            (Some(oldest), Some(latest)) => latest.timestamp - oldest.timestamp,
            _ => 0.0,
        };
        println!(
            "Earth trajectory: {} samples covering {:.1} days",
            trajectory.len(),
            Time::from_seconds(span).to_days()
        );
    }
}
