//! Starfreight Headless Validation Harness
//!
//! Runs the pure cargo-run logic end to end — no UI, no networking.
//! Validates the bundled trade-route fixture, then sweeps the transfer
//! rules, the co-location gate, movement, and the report formats.
//!
//! Usage:
//!   cargo run -p starfreight-simtest
//!   cargo run -p starfreight-simtest -- --verbose

use serde::Deserialize;
use starfreight_logic::planet::Planet;
use starfreight_logic::position::Position;
use starfreight_logic::transfer::TransferError;
use starfreight_logic::vessel::Vessel;

// ── Trade route fixture ─────────────────────────────────────────────────
const TRADE_ROUTE_JSON: &str = include_str!("../../../data/trade_route.json");

#[derive(Debug, Deserialize)]
struct TradeRoute {
    vessel: VesselSpec,
    planets: Vec<PlanetSpec>,
    legs: Vec<LegSpec>,
}

#[derive(Debug, Deserialize)]
struct VesselSpec {
    name: String,
    position: [f64; 2],
    capacity: f64,
}

#[derive(Debug, Deserialize)]
struct PlanetSpec {
    name: String,
    position: [f64; 2],
    available_cargo: f64,
}

/// One stop on the route: fly to `planet`, unload first, then load.
#[derive(Debug, Deserialize)]
struct LegSpec {
    planet: String,
    unload: f64,
    load: f64,
}

// ── Test harness ────────────────────────────────────────────────────────

struct TestResult {
    name: String,
    passed: bool,
    detail: String,
}

fn check(name: &str, passed: bool, detail: String) -> TestResult {
    TestResult {
        name: name.into(),
        passed,
        detail,
    }
}

fn main() {
    let verbose = std::env::args().any(|a| a == "--verbose");
    println!("=== Starfreight Validation Harness ===\n");

    let mut results = Vec::new();

    // 1. Trade route fixture
    results.extend(validate_trade_route(verbose));

    // 2. Transfer rule sweep
    results.extend(validate_transfer_rules());

    // 3. Co-location gate
    results.extend(validate_colocation_gate());

    // 4. Movement
    results.extend(validate_movement());

    // 5. Report formats
    results.extend(validate_reporting());

    // ── Summary ──
    println!();
    let passed = results.iter().filter(|r| r.passed).count();
    let failed = results.iter().filter(|r| !r.passed).count();
    let total = results.len();

    for r in &results {
        let icon = if r.passed { "✓" } else { "✗" };
        if !r.passed || verbose {
            println!("  {} {}: {}", icon, r.name, r.detail);
        }
    }

    println!(
        "\n=== RESULT: {}/{} passed, {} failed ===",
        passed, total, failed
    );

    if failed > 0 {
        std::process::exit(1);
    }
}

// ── 1. Trade route fixture ──────────────────────────────────────────────

fn validate_trade_route(verbose: bool) -> Vec<TestResult> {
    println!("--- Trade Route ---");
    let mut results = Vec::new();

    let route: TradeRoute = match serde_json::from_str(TRADE_ROUTE_JSON) {
        Ok(r) => r,
        Err(e) => {
            results.push(check(
                "route_parse",
                false,
                format!("JSON parse error: {}", e),
            ));
            return results;
        }
    };

    // Spec validation in lieu of silent clamping.
    let mut problems = Vec::new();
    if route.vessel.capacity < 0.0 || !route.vessel.capacity.is_finite() {
        problems.push(format!("vessel capacity {}", route.vessel.capacity));
    }
    for p in &route.planets {
        if !p.available_cargo.is_finite() {
            problems.push(format!("planet {} cargo {}", p.name, p.available_cargo));
        }
    }
    for leg in &route.legs {
        if !route.planets.iter().any(|p| p.name == leg.planet) {
            problems.push(format!("leg references unknown planet {}", leg.planet));
        }
        if leg.load < 0.0 || leg.unload < 0.0 {
            problems.push(format!("leg at {} has negative weight", leg.planet));
        }
    }
    results.push(check(
        "route_spec_valid",
        problems.is_empty(),
        if problems.is_empty() {
            format!("{} planets, {} legs", route.planets.len(), route.legs.len())
        } else {
            problems.join("; ")
        },
    ));
    if !problems.is_empty() {
        return results;
    }

    // Fly the route: at each leg, unload first, then load.
    let mut vessel = Vessel::new(
        route.vessel.name.clone(),
        route.vessel.position,
        route.vessel.capacity,
    );
    let mut planets: Vec<Planet> = route
        .planets
        .iter()
        .map(|p| Planet::new(p.name.clone(), p.position, p.available_cargo))
        .collect();
    let total_before: f64 =
        planets.iter().map(Planet::available_cargo).sum::<f64>() + vessel.occupied_space();

    let mut route_ok = true;
    for leg in &route.legs {
        let planet = planets
            .iter_mut()
            .find(|p| p.name() == leg.planet)
            .expect("leg planet checked above");
        vessel.fly_to(&*planet);
        if let Err(e) = planet.unload_cargo_from(&mut vessel, leg.unload) {
            route_ok = false;
            println!("  leg {}: unload refused: {}", leg.planet, e);
        }
        if let Err(e) = planet.load_cargo_to(&mut vessel, leg.load) {
            route_ok = false;
            println!("  leg {}: load refused: {}", leg.planet, e);
        }
        if verbose {
            println!("  {}", vessel.status_line());
            println!("  {}", planet.status_line());
        }
    }
    results.push(check(
        "route_runs_clean",
        route_ok,
        format!("{} legs flown", route.legs.len()),
    ));

    let total_after: f64 =
        planets.iter().map(Planet::available_cargo).sum::<f64>() + vessel.occupied_space();
    results.push(check(
        "route_conserves_cargo",
        total_before == total_after,
        format!("{} before, {} after", total_before, total_after),
    ));

    results.push(check(
        "route_invariant_holds",
        vessel.occupied_space() >= 0.0 && vessel.occupied_space() <= vessel.capacity(),
        format!(
            "occupied {} of {}",
            vessel.occupied_space(),
            vessel.capacity()
        ),
    ));

    results
}

// ── 2. Transfer rules ───────────────────────────────────────────────────

fn validate_transfer_rules() -> Vec<TestResult> {
    println!("--- Transfer Rules ---");
    let mut results = Vec::new();

    let mut vessel = Vessel::new("Аврора", [1.0, 1.0], 200.0);
    let mut earth = Planet::new("Земля", [1.0, 1.0], 300.0);

    let ok = earth.load_cargo_to(&mut vessel, 150.0).is_ok();
    results.push(check(
        "valid_load",
        ok && vessel.occupied_space() == 150.0 && earth.available_cargo() == 150.0,
        format!(
            "occupied {}, pool {}",
            vessel.occupied_space(),
            earth.available_cargo()
        ),
    ));

    let err = vessel.load_cargo_from(&mut earth, 100.0);
    results.push(check(
        "overweight_load_refused",
        matches!(err, Err(TransferError::InsufficientFreeSpace { .. }))
            && vessel.occupied_space() == 150.0,
        format!("{:?}", err),
    ));

    let err = vessel.load_cargo_from(&mut earth, -5.0);
    results.push(check(
        "negative_load_refused",
        matches!(err, Err(TransferError::NegativeCargoWeight { .. })),
        format!("{:?}", err),
    ));

    let err = vessel.unload_cargo_to(&mut earth, 151.0);
    results.push(check(
        "over_unload_refused",
        matches!(err, Err(TransferError::InsufficientOccupiedCargo { .. })),
        format!("{:?}", err),
    ));

    let before = (vessel.occupied_space(), earth.available_cargo());
    let zero_ok = earth.load_cargo_to(&mut vessel, 0.0).is_ok()
        && earth.unload_cargo_from(&mut vessel, 0.0).is_ok();
    results.push(check(
        "zero_weight_is_noop",
        zero_ok && before == (vessel.occupied_space(), earth.available_cargo()),
        format!("state {:?}", before),
    ));

    let mut barge = Vessel::new("Баржа", [0.0, 0.0], 500.0);
    let mut ceres = Planet::new("Церера", [0.0, 0.0], 10.0);
    let ok = ceres.load_cargo_to(&mut barge, 100.0).is_ok();
    results.push(check(
        "pool_has_no_lower_bound",
        ok && ceres.available_cargo() == -90.0,
        format!("pool {}", ceres.available_cargo()),
    ));

    results
}

// ── 3. Co-location gate ─────────────────────────────────────────────────

fn validate_colocation_gate() -> Vec<TestResult> {
    println!("--- Co-location Gate ---");
    let mut results = Vec::new();

    let mut vessel = Vessel::new("Аврора", [2.0, 2.0], 200.0);
    let mut earth = Planet::new("Земля", [1.0, 1.0], 300.0);

    let err = earth.load_cargo_to(&mut vessel, 10.0);
    results.push(check(
        "distant_load_refused",
        matches!(err, Err(TransferError::VesselNotColocated { .. }))
            && vessel.occupied_space() == 0.0
            && earth.available_cargo() == 300.0,
        format!("{:?}", err),
    ));

    let err = earth.unload_cargo_from(&mut vessel, 10.0);
    results.push(check(
        "distant_unload_refused",
        matches!(err, Err(TransferError::VesselNotColocated { .. })),
        format!("{:?}", err),
    ));

    vessel.fly_to(&earth);
    results.push(check(
        "landed_load_allowed",
        earth.load_cargo_to(&mut vessel, 10.0).is_ok(),
        format!("occupied {}", vessel.occupied_space()),
    ));

    results
}

// ── 4. Movement ─────────────────────────────────────────────────────────

fn validate_movement() -> Vec<TestResult> {
    println!("--- Movement ---");
    let mut results = Vec::new();

    let mut vessel = Vessel::new("Аврора", [0.0, 0.0], 100.0);
    vessel.fly_to([50.0, 20.0]);
    results.push(check(
        "fly_to_coordinate",
        vessel.position() == Position::new(50.0, 20.0),
        format!("at {}", vessel.position()),
    ));

    let mars = Planet::new("Марс", [6.0, 4.0], 0.0);
    vessel.fly_to(&mars);
    results.push(check(
        "fly_to_planet",
        vessel.position() == mars.position(),
        format!("at {}", vessel.position()),
    ));

    results
}

// ── 5. Report formats ───────────────────────────────────────────────────

fn validate_reporting() -> Vec<TestResult> {
    println!("--- Report Formats ---");
    let mut results = Vec::new();

    let mut vessel = Vessel::new("Аврора", [1.0, 1.0], 200.0);
    let mut earth = Planet::new("Земля", [1.0, 1.0], 300.0);
    earth.load_cargo_to(&mut vessel, 150.0).unwrap();

    let line = vessel.status_line();
    results.push(check(
        "vessel_line",
        line == "Корабль \"Аврора\". Местоположение: 1,1. Занято: 150 из 200т.",
        line.clone(),
    ));

    let line = earth.status_line();
    results.push(check(
        "planet_line",
        line == "Планета \"Земля\". Местоположение: 1,1. Доступно груза: 150т.",
        line.clone(),
    ));

    results
}
