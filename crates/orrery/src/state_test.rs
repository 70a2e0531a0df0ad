use approx::assert_relative_eq;
use nalgebra::{Point3, Vector3};

use crate::body::{Body, BodyId, BodyRecord, BodyRole};
use crate::error::OrreryError;
use crate::forces::{NewtonianGravity, G};
use crate::state::StarSystem;

fn sun() -> BodyRecord {
    BodyRecord::new("Soleil", 1.99e30, 6.95e8, [0.0; 3], [0.0; 3], [255, 255, 0])
}

fn earth() -> BodyRecord {
    BodyRecord::new(
        "Terre",
        5.97e24,
        6.38e6,
        [1.496e11, 0.0, 0.0],
        [0.0, 29.783e3, 0.0],
        [0, 0, 255],
    )
}

fn mars() -> BodyRecord {
    BodyRecord::new(
        "Mars",
        6.417e23,
        3.39e6,
        [0.0, 2.279e11, 0.0],
        [-24.07e3, 0.0, 0.0],
        [255, 80, 0],
    )
}

fn make_test_system() -> StarSystem {
    StarSystem::from_records(vec![sun()], vec![earth(), mars()]).unwrap()
}

#[test]
fn test_new_system_is_empty() {
    let system = StarSystem::new();

    assert_eq!(system.body_count(), 0);
    assert!(system.is_empty());
    assert!(system.center_of_mass().is_none());
}

#[test]
fn test_from_records_assigns_ids_in_order() {
    let system = make_test_system();

    let ids: Vec<BodyId> = system.ids().collect();
    assert_eq!(ids, vec![BodyId(0), BodyId(1), BodyId(2)]);

    let names: Vec<&str> = system.bodies().iter().map(|b| b.name.as_str()).collect();
    assert_eq!(names, vec!["Soleil", "Terre", "Mars"]);
}

#[test]
fn test_roles_partition_bodies() {
    let system = make_test_system();

    let stars: Vec<&str> = system.stars().map(|b| b.name.as_str()).collect();
    let planets: Vec<&str> = system.planets().map(|b| b.name.as_str()).collect();

    assert_eq!(stars, vec!["Soleil"]);
    assert_eq!(planets, vec!["Terre", "Mars"]);
    assert_eq!(system.with_role(BodyRole::Planet).count(), 2);
}

#[test]
fn test_invalid_record_rejects_whole_system() {
    let bad = BodyRecord {
        mass: 0.0,
        ..mars()
    };

    let result = StarSystem::from_records(vec![sun()], vec![earth(), bad]);
    assert!(matches!(result, Err(OrreryError::NonPositiveMass { .. })));
}

#[test]
fn test_insert_rejects_duplicate_id() {
    let mut system = make_test_system();
    let clash = Body::new(BodyId(1), BodyRole::Planet, mars()).unwrap();

    assert_eq!(
        system.insert(clash).unwrap_err(),
        OrreryError::DuplicateBodyId(BodyId(1))
    );
    assert_eq!(system.body_count(), 3);
}

#[test]
fn test_insert_keeps_ids_unique_afterwards() {
    let mut system = StarSystem::new();
    let custom = Body::new(BodyId(10), BodyRole::Star, sun()).unwrap();
    system.insert(custom).unwrap();

    let next = system.add_body(BodyRole::Planet, earth()).unwrap();
    assert_eq!(next, BodyId(11));
}

#[test]
fn test_insert_validates_body() {
    let mut system = StarSystem::new();
    let mut body = Body::new(BodyId(0), BodyRole::Planet, earth()).unwrap();
    body.mass = -1.0;

    assert!(system.insert(body).is_err());
    assert!(system.is_empty());
}

#[test]
fn test_get_body_and_index() {
    let system = make_test_system();

    assert_eq!(system.get_body(BodyId(2)).unwrap().name, "Mars");
    assert_eq!(system.index_of(BodyId(2)), Some(2));
    assert!(system.get_body(BodyId(999)).is_none());
    assert!(system.index_of(BodyId(999)).is_none());
}

#[test]
fn test_snapshot_matches_bodies() {
    let system = make_test_system();
    let snapshot = system.snapshot();

    assert_eq!(snapshot.len(), 3);
    assert_eq!(snapshot[1].mass, 5.97e24);
    assert_eq!(snapshot[1].position, Point3::new(1.496e11, 0.0, 0.0));
}

#[test]
fn test_total_force_points_toward_sun() {
    let system = StarSystem::from_records(vec![sun()], vec![earth()]).unwrap();
    let gravity = NewtonianGravity::new();

    let force = system.total_force(BodyId(1), &gravity).unwrap();

    assert!(force.x < 0.0);
    assert_eq!(force.y, 0.0);
    assert_eq!(force.z, 0.0);

    let expected = G * 1.99e30 * 5.97e24 / (1.496e11 * 1.496e11);
    assert_relative_eq!(force.magnitude(), expected, max_relative = 1e-12);
}

#[test]
fn test_total_force_unknown_body() {
    let system = make_test_system();
    assert!(system.total_force(BodyId(42), &NewtonianGravity::new()).is_none());
}

#[test]
fn test_total_force_does_not_mutate() {
    let system = make_test_system();
    let before: Vec<_> = system.bodies().iter().map(|b| (b.position, b.velocity)).collect();

    system.total_force(BodyId(0), &NewtonianGravity::new());

    let after: Vec<_> = system.bodies().iter().map(|b| (b.position, b.velocity)).collect();
    assert_eq!(before, after);
}

#[test]
fn test_energy_is_negative_for_bound_system() {
    let system = make_test_system();
    let gravity = NewtonianGravity::new();

    assert!(system.kinetic_energy() > 0.0);
    assert!(system.potential_energy(&gravity) < 0.0);
    assert!(system.total_energy(&gravity) < 0.0);
}

#[test]
fn test_total_momentum() {
    let system = StarSystem::from_records(vec![sun()], vec![earth()]).unwrap();

    let p = system.total_momentum();
    assert_relative_eq!(p, Vector3::new(0.0, 5.97e24 * 29.783e3, 0.0));
}

#[test]
fn test_total_angular_momentum() {
    let system = StarSystem::from_records(vec![sun()], vec![earth()]).unwrap();

    // L = m r v along +z for a counter-clockwise orbit in the xy-plane
    let l = system.total_angular_momentum();
    assert_relative_eq!(l.z, 5.97e24 * 1.496e11 * 29.783e3, max_relative = 1e-12);
    assert_eq!(l.x, 0.0);
    assert_eq!(l.y, 0.0);
}

#[test]
fn test_center_of_mass() {
    let mut system = StarSystem::new();
    system
        .add_body(
            BodyRole::Star,
            BodyRecord::new("A", 3.0, 1.0, [0.0; 3], [0.0; 3], [0, 0, 0]),
        )
        .unwrap();
    system
        .add_body(
            BodyRole::Star,
            BodyRecord::new("B", 1.0, 1.0, [4.0, 0.0, 0.0], [0.0; 3], [0, 0, 0]),
        )
        .unwrap();

    assert_relative_eq!(system.center_of_mass().unwrap(), Point3::new(1.0, 0.0, 0.0));
}
