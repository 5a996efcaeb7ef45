use springnet::{Mass, NoOpStepObserver, Spring, System, SystemConfig, Vec2};

fn pair(a: Vec2<f32>, b: Vec2<f32>) -> Vec<Mass<f32>> {
    vec![Mass::new(a, 1.0), Mass::new(b, 1.0)]
}

fn net_force(m: &Mass<f32>) -> Vec2<f32> {
    m.forces()
        .iter()
        .fold(Vec2::zero(), |acc, f| acc + *f)
}

#[test]
fn force_pair_sums_to_zero() {
    // Stretched spring with moving endpoints: both the elastic and the
    // damping contributions must obey Newton's third law.
    let mut masses = pair(Vec2::new(0.0, 0.0), Vec2::new(3.0, 1.0));
    masses[0].velocity = Vec2::new(1.0, 2.0);
    masses[1].velocity = Vec2::new(-0.5, 0.3);

    let spring = Spring::new(0, 1, 1.0, 50.0, 3.0);
    spring.apply_forces(&mut masses);

    // Elastic plus damping: two contributions per endpoint.
    assert_eq!(masses[0].force_count(), 2);
    assert_eq!(masses[1].force_count(), 2);

    let total = net_force(&masses[0]) + net_force(&masses[1]);
    assert!(total.length() < 1e-4, "net force should vanish, got {:?}", total);
}

#[test]
fn stretched_spring_pulls_endpoints_together() {
    let mut masses = pair(Vec2::new(0.0, 0.0), Vec2::new(3.0, 0.0));
    let spring = Spring::new(0, 1, 1.0, 10.0, 0.0);
    spring.apply_forces(&mut masses);

    assert!(net_force(&masses[0]).x > 0.0, "first endpoint pulled toward second");
    assert!(net_force(&masses[1]).x < 0.0, "second endpoint pulled toward first");
}

#[test]
fn compressed_spring_pushes_endpoints_apart() {
    let mut masses = pair(Vec2::new(0.0, 0.0), Vec2::new(3.0, 0.0));
    let spring = Spring::new(0, 1, 5.0, 10.0, 0.0);
    spring.apply_forces(&mut masses);

    assert!(net_force(&masses[0]).x < 0.0);
    assert!(net_force(&masses[1]).x > 0.0);
}

#[test]
fn elastic_force_is_proportional_to_displacement() {
    let mut masses = pair(Vec2::new(0.0, 0.0), Vec2::new(4.0, 0.0));
    let spring = Spring::new(0, 1, 1.0, 10.0, 0.0);
    spring.apply_forces(&mut masses);

    // displacement = rest - |span| = -3, force on first = k * 3 along +x.
    let f = net_force(&masses[0]);
    assert!((f.x - 30.0).abs() < 1e-4);
    assert!(f.y.abs() < 1e-6);
}

#[test]
fn coincident_endpoints_exert_no_force() {
    let mut masses = pair(Vec2::new(2.0, 2.0), Vec2::new(2.0, 2.0));
    let spring = Spring::new(0, 1, 1.0, 1000.0, 10.0);
    spring.apply_forces(&mut masses);

    assert_eq!(masses[0].force_count(), 0);
    assert_eq!(masses[1].force_count(), 0);
    assert!(masses[0].position.x.is_finite());
}

#[test]
fn damping_opposes_the_closing_rate() {
    // Endpoints at rest length moving apart: no elastic force, but the
    // damper resists the separation.
    let mut masses = pair(Vec2::new(0.0, 0.0), Vec2::new(2.0, 0.0));
    masses[0].velocity = Vec2::new(-1.0, 0.0);
    masses[1].velocity = Vec2::new(1.0, 0.0);

    let spring = Spring::new(0, 1, 2.0, 100.0, 4.0);
    spring.apply_forces(&mut masses);

    assert!(net_force(&masses[0]).x > 0.0, "damper should pull first endpoint back");
    assert!(net_force(&masses[1]).x < 0.0);
}

#[test]
fn rest_length_equilibrium_is_stationary() {
    let config = SystemConfig::new().with_gravity(Vec2::zero());
    let mut system: System<f32> = System::new(config);
    system.add_mass(Mass::fixed(Vec2::new(0.0, 0.0), 1.0)).unwrap();
    system.add_mass(Mass::new(Vec2::new(5.0, 0.0), 1.0)).unwrap();
    system.add_spring(Spring::new(0, 1, 5.0, 100.0, 1.0)).unwrap();

    for _ in 0..50 {
        system.step(1.0 / 60.0, &mut NoOpStepObserver);
    }

    let free = &system.masses()[1];
    assert!((free.position.x - 5.0).abs() < 1e-5);
    assert!(free.position.y.abs() < 1e-5);
    assert!(free.velocity.length() < 1e-5);
}

#[test]
fn damped_oscillation_loses_energy() {
    let config = SystemConfig::new().with_gravity(Vec2::zero());
    let mut system: System<f32> = System::new(config);
    system.add_mass(Mass::fixed(Vec2::new(0.0, 0.0), 1.0)).unwrap();
    // Released from a stretched state: rest 10, start 15.
    system.add_mass(Mass::new(Vec2::new(15.0, 0.0), 1.0)).unwrap();
    system.add_spring(Spring::new(0, 1, 10.0, 10.0, 1.0)).unwrap();

    let energy = |system: &System<f32>| -> f32 {
        let free = &system.masses()[1];
        let ext = system.springs()[0].extension(system.masses());
        0.5 * free.velocity.length_sq() + 0.5 * 10.0 * ext * ext
    };

    let initial = energy(&system);
    for _ in 0..2000 {
        system.step(0.01, &mut NoOpStepObserver);
    }
    let residual = energy(&system);

    assert!(
        residual < initial * 0.1,
        "oscillation should decay: initial {}, residual {}",
        initial,
        residual
    );
    let ext = system.springs()[0].extension(system.masses());
    assert!(ext.abs() < 0.5, "extension should settle near rest, got {}", ext);
}

#[test]
fn from_masses_starts_in_equilibrium() {
    let masses = pair(Vec2::new(0.0, 0.0), Vec2::new(3.0, 4.0));
    let spring = Spring::from_masses(0, 1, &masses, 100.0, 1.0);
    assert!((spring.rest_length - 5.0).abs() < 1e-6);
    assert!(spring.extension(&masses).abs() < 1e-6);
}

#[test]
fn extension_reports_signed_stretch() {
    let masses = pair(Vec2::new(0.0, 0.0), Vec2::new(7.0, 0.0));
    let spring = Spring::new(0, 1, 5.0, 1.0, 0.0);
    assert!((spring.current_length(&masses) - 7.0).abs() < 1e-6);
    assert!((spring.extension(&masses) - 2.0).abs() < 1e-6);

    let compressed = pair(Vec2::new(0.0, 0.0), Vec2::new(3.0, 0.0));
    assert!((spring.extension(&compressed) - (-2.0)).abs() < 1e-6);
}
