//! Cargo vessel — capacity bookkeeping, movement, load/unload.
//!
//! A vessel owns its occupancy state: `occupied_space` never exceeds
//! `capacity` and never goes negative, and the only way to change it is
//! through the transfer operations, which check before they mutate.
//!
//! The transfer operations here do NOT check that the vessel is actually on
//! the planet — that gate lives in [`crate::planet::Planet`], the only
//! planet-initiated entry point. Calling the vessel operations directly
//! bypasses it.

use serde::{Deserialize, Serialize};

use crate::planet::Planet;
use crate::position::{Destination, Position};
use crate::report;
use crate::transfer::{TransferError, TransferResult};

/// Mobile cargo-carrying entity with bounded capacity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vessel {
    name: String,
    position: Position,
    /// Total cargo weight capacity in tons, fixed at construction.
    capacity: f64,
    /// Cargo weight currently on board, in `[0, capacity]`.
    occupied_space: f64,
}

impl Vessel {
    /// Create a vessel with an empty hold.
    pub fn new(name: impl Into<String>, position: impl Into<Position>, capacity: f64) -> Self {
        debug_assert!(capacity >= 0.0, "vessel capacity must be non-negative");
        Self {
            name: name.into(),
            position: position.into(),
            capacity,
            occupied_space: 0.0,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn capacity(&self) -> f64 {
        self.capacity
    }

    /// Cargo weight currently on board.
    pub fn occupied_space(&self) -> f64 {
        self.occupied_space
    }

    /// Remaining hold capacity.
    pub fn free_space(&self) -> f64 {
        self.capacity - self.occupied_space
    }

    /// Teleport to a destination. No distance, fuel, or reachability model —
    /// this always succeeds.
    pub fn fly_to(&mut self, destination: impl Into<Destination>) {
        self.position = destination.into().position();
    }

    /// Take `weight` tons of cargo from `planet` into the hold.
    ///
    /// Checks run in order: sign first, then free space. On any failure
    /// nothing is mutated. Co-location is NOT checked here.
    pub fn load_cargo_from(&mut self, planet: &mut Planet, weight: f64) -> TransferResult {
        if weight < 0.0 {
            return Err(self.refuse(TransferError::NegativeCargoWeight { weight }));
        }
        if weight > self.free_space() {
            return Err(self.refuse(TransferError::InsufficientFreeSpace {
                weight,
                free_space: self.free_space(),
            }));
        }
        self.occupied_space += weight;
        planet.take_cargo(weight);
        Ok(())
    }

    /// Move `weight` tons of cargo from the hold onto `planet`.
    ///
    /// Mirror of [`Self::load_cargo_from`]: sign first, then occupancy.
    pub fn unload_cargo_to(&mut self, planet: &mut Planet, weight: f64) -> TransferResult {
        if weight < 0.0 {
            return Err(self.refuse(TransferError::NegativeCargoWeight { weight }));
        }
        if weight > self.occupied_space() {
            return Err(self.refuse(TransferError::InsufficientOccupiedCargo {
                weight,
                occupied_space: self.occupied_space(),
            }));
        }
        self.occupied_space -= weight;
        planet.accept_cargo(weight);
        Ok(())
    }

    fn refuse(&self, err: TransferError) -> TransferError {
        log::warn!("{}: {}", self.name, err);
        err
    }

    /// Current status line.
    pub fn status_line(&self) -> String {
        report::vessel_line(&self.name, self.position, self.occupied_space, self.capacity)
    }

    /// Print the status line to stdout.
    pub fn report(&self) {
        println!("{}", self.status_line());
    }
}

impl std::fmt::Display for Vessel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.status_line())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vessel() -> Vessel {
        Vessel::new("Аврора", [1.0, 1.0], 200.0)
    }

    fn planet() -> Planet {
        Planet::new("Земля", [1.0, 1.0], 300.0)
    }

    #[test]
    fn test_new_vessel_is_empty() {
        let v = vessel();
        assert_eq!(v.occupied_space(), 0.0);
        assert_eq!(v.free_space(), 200.0, "free space should equal capacity");
    }

    #[test]
    fn test_fly_to_coordinate() {
        let mut v = vessel();
        v.fly_to([5.0, -3.0]);
        assert_eq!(v.position(), Position::new(5.0, -3.0));
    }

    #[test]
    fn test_fly_to_planet() {
        let mut v = vessel();
        let mars = Planet::new("Марс", [7.0, 9.0], 0.0);
        v.fly_to(&mars);
        assert_eq!(v.position(), mars.position());
    }

    #[test]
    fn test_load_moves_cargo_both_ways() {
        let mut v = vessel();
        let mut p = planet();
        v.load_cargo_from(&mut p, 150.0).unwrap();
        assert_eq!(v.occupied_space(), 150.0);
        assert_eq!(v.free_space(), 50.0);
        assert_eq!(p.available_cargo(), 150.0);
    }

    #[test]
    fn test_load_rejects_overweight() {
        let mut v = vessel();
        let mut p = planet();
        v.load_cargo_from(&mut p, 150.0).unwrap();

        let err = v.load_cargo_from(&mut p, 100.0).unwrap_err();
        assert_eq!(
            err,
            TransferError::InsufficientFreeSpace {
                weight: 100.0,
                free_space: 50.0,
            }
        );
        assert_eq!(v.occupied_space(), 150.0, "failed load must not mutate");
        assert_eq!(p.available_cargo(), 150.0);
    }

    #[test]
    fn test_load_rejects_negative_weight_before_capacity() {
        let mut v = vessel();
        let mut p = planet();
        let err = v.load_cargo_from(&mut p, -5.0).unwrap_err();
        assert_eq!(err, TransferError::NegativeCargoWeight { weight: -5.0 });
        assert_eq!(v.occupied_space(), 0.0);
        assert_eq!(p.available_cargo(), 300.0);
    }

    #[test]
    fn test_unload_moves_cargo_both_ways() {
        let mut v = vessel();
        let mut p = planet();
        v.load_cargo_from(&mut p, 150.0).unwrap();
        v.unload_cargo_to(&mut p, 40.0).unwrap();
        assert_eq!(v.occupied_space(), 110.0);
        assert_eq!(p.available_cargo(), 190.0);
    }

    #[test]
    fn test_unload_rejects_more_than_on_board() {
        let mut v = vessel();
        let mut p = planet();
        v.load_cargo_from(&mut p, 30.0).unwrap();

        let err = v.unload_cargo_to(&mut p, 31.0).unwrap_err();
        assert_eq!(
            err,
            TransferError::InsufficientOccupiedCargo {
                weight: 31.0,
                occupied_space: 30.0,
            }
        );
        assert_eq!(v.occupied_space(), 30.0, "failed unload must not mutate");
        assert_eq!(p.available_cargo(), 270.0);
    }

    #[test]
    fn test_unload_rejects_negative_weight() {
        let mut v = vessel();
        let mut p = planet();
        let err = v.unload_cargo_to(&mut p, -1.0).unwrap_err();
        assert_eq!(err, TransferError::NegativeCargoWeight { weight: -1.0 });
    }

    #[test]
    fn test_zero_weight_transfers_are_noops() {
        let mut v = vessel();
        let mut p = planet();
        v.load_cargo_from(&mut p, 0.0).unwrap();
        v.unload_cargo_to(&mut p, 0.0).unwrap();
        assert_eq!(v.occupied_space(), 0.0);
        assert_eq!(p.available_cargo(), 300.0);
    }

    #[test]
    fn test_load_to_exact_capacity() {
        let mut v = vessel();
        let mut p = planet();
        v.load_cargo_from(&mut p, 200.0).unwrap();
        assert_eq!(v.free_space(), 0.0);
        assert_eq!(p.available_cargo(), 100.0);
    }

    #[test]
    fn test_status_line() {
        let mut v = vessel();
        let mut p = planet();
        v.load_cargo_from(&mut p, 150.0).unwrap();
        assert_eq!(
            v.status_line(),
            "Корабль \"Аврора\". Местоположение: 1,1. Занято: 150 из 200т."
        );
    }
}
