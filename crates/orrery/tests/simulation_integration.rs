//! Integration tests for the simulation driver.
//!
//! These run whole systems through many steps and check the conservation
//! laws and clock rules that only show up over long runs.

use approx::assert_relative_eq;
use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaChaRng;
use units::{Length, Mass, Time};

use orrery::prelude::*;
use orrery::prepare::{circular_orbit, CircularOrbit};

fn sun() -> BodyRecord {
    BodyRecord::new(
        "Sun",
        1.989e30,
        Length::from_solar_radii(1.0).to_m(),
        [0.0; 3],
        [0.0; 3],
        [255, 255, 0],
    )
}

fn earth() -> BodyRecord {
    BodyRecord::new(
        "Earth",
        5.972e24,
        Length::from_earth_radii(1.0).to_m(),
        [1.496e11, 0.0, 0.0],
        [0.0, 29.78e3, 0.0],
        [0, 0, 255],
    )
}

fn orbit(name: &str, earth_masses: f64, au: f64) -> CircularOrbit {
    CircularOrbit {
        name: name.into(),
        mass: Mass::from_earth_masses(earth_masses).to_kg(),
        radius: Length::from_earth_radii(1.0).to_m(),
        distance: Length::from_au(au).to_m(),
        color: [200, 200, 200],
    }
}

#[test]
fn sun_earth_one_year() {
    let mut sim =
        Simulation::from_records(vec![sun()], vec![earth()], SimulationConfig::default()).unwrap();
    let initial_energy = sim.total_energy();
    let year = Time::from_days(365.0).to_seconds();

    let steps = sim.advance(year);

    assert_eq!(steps, 8760);
    assert_eq!(sim.elapsed_time(), year);

    let drift = ((sim.total_energy() - initial_energy) / initial_energy).abs();
    println!("relative energy drift after one year: {drift:.3e}");
    assert!(drift < 1e-6);

    // A full year fits exactly inside the default window
    let trajectory = sim.trajectory(BodyId(1)).unwrap();
    assert_eq!(trajectory.len(), 8761);
    assert_eq!(trajectory.oldest().unwrap().timestamp, 0.0);

    // Roughly back where it started
    let earth = sim.system().get_body(BodyId(1)).unwrap();
    let start = nalgebra::Point3::new(1.496e11, 0.0, 0.0);
    assert!((earth.position - start).magnitude() < 0.05 * 1.496e11);
}

#[test]
fn trajectory_window_slides() {
    let config = SimulationConfig::default().with_trajectory_retention(Time::from_days(90.0));
    let mut sim = Simulation::from_records(vec![sun()], vec![earth()], config).unwrap();

    sim.advance(Time::from_days(120.0).to_seconds());

    let now = sim.elapsed_time();
    let window = Time::from_days(90.0).to_seconds();
    for (_, trajectory) in sim.trajectories().iter() {
        assert_eq!(trajectory.len(), 90 * 24 + 1);
        assert_eq!(trajectory.oldest().unwrap().timestamp, now - window);
        assert!(trajectory.samples().all(|s| now - s.timestamp <= window));
    }
}

#[test]
fn seeded_inner_system_conserves_momentum() {
    let mut rng = ChaChaRng::seed_from_u64(42);
    let star = sun();
    let planets: Vec<BodyRecord> = [
        orbit("Mercury", 0.055, 0.387),
        orbit("Venus", 0.815, 0.723),
        orbit("Earth", 1.0, 1.0),
        orbit("Mars", 0.107, 1.524),
    ]
    .iter()
    .map(|o| circular_orbit(&star, o, G, &mut rng))
    .collect();

    let mut sim = Simulation::from_records(vec![star], planets, SimulationConfig::default()).unwrap();
    assert_eq!(sim.system().planets().count(), 4);

    let initial_momentum = sim.system().total_momentum();
    let initial_l = sim.system().total_angular_momentum();
    let scale = sim
        .bodies()
        .iter()
        .map(|b| b.momentum().magnitude())
        .fold(0.0, f64::max);

    sim.advance(Time::from_days(100.0).to_seconds());

    let drift = (sim.system().total_momentum() - initial_momentum).magnitude();
    assert!(drift / scale < 1e-9, "momentum drifted by {drift}");

    // Direct summation with equal and opposite pairs keeps L to rounding
    assert_relative_eq!(
        sim.system().total_angular_momentum().z,
        initial_l.z,
        max_relative = 1e-9
    );
}

#[test]
fn same_seed_same_run() {
    let build = || {
        let mut rng = ChaChaRng::seed_from_u64(2024);
        let planet = circular_orbit(&sun(), &orbit("Earth", 1.0, 1.0), G, &mut rng);
        Simulation::from_records(vec![sun()], vec![planet], SimulationConfig::default()).unwrap()
    };

    let mut a = build();
    let mut b = build();
    a.advance(Time::from_days(10.0).to_seconds());
    b.advance(Time::from_days(10.0).to_seconds());

    assert_eq!(a.snapshots(), b.snapshots());
}

#[test]
fn snapshots_serialize_for_renderers() {
    let sim =
        Simulation::from_records(vec![sun()], vec![earth()], SimulationConfig::default()).unwrap();

    let json = serde_json::to_value(sim.snapshots()).unwrap();

    assert_eq!(json[0]["role"], "star");
    assert_eq!(json[1]["name"], "Earth");
    assert_eq!(json[1]["position"][0], 1.496e11);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn advance_truncates_to_whole_steps(
        dt in 100.0f64..10_000.0,
        duration in 0.0f64..200_000.0,
    ) {
        let config = SimulationConfig::default().with_time_step(Time::from_seconds(dt));
        let mut sim = Simulation::from_records(vec![sun()], vec![], config).unwrap();

        let steps = sim.advance(duration);

        prop_assert_eq!(steps, (duration / dt).floor() as usize);
        prop_assert_eq!(sim.steps_taken(), steps as u64);
        prop_assert!(sim.elapsed_time() <= duration * (1.0 + 1e-12));
        prop_assert!(duration - sim.elapsed_time() < dt * (1.0 + 1e-9));
    }
}
