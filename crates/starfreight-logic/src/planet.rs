//! Planet — cargo pool and co-location-gated transfer entry points.
//!
//! A planet is a stationary cargo source/sink. Its transfer operations are
//! the only place co-location is enforced: they compare positions, then
//! delegate to the vessel, which does the capacity bookkeeping.
//!
//! The cargo pool has no enforced lower bound. A planet hands out whatever a
//! vessel asks for and its balance may go negative; the pool is a plain
//! signed balance, not a guarded stockpile.

use serde::{Deserialize, Serialize};

use crate::position::{Destination, Position};
use crate::report;
use crate::transfer::{TransferError, TransferResult};
use crate::vessel::Vessel;

/// Stationary cargo source/sink with a mutable available-cargo pool.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Planet {
    name: String,
    /// Fixed at construction; planets do not move.
    position: Position,
    available_cargo: f64,
}

impl Planet {
    pub fn new(
        name: impl Into<String>,
        position: impl Into<Position>,
        available_cargo: f64,
    ) -> Self {
        Self {
            name: name.into(),
            position: position.into(),
            available_cargo,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn position(&self) -> Position {
        self.position
    }

    /// Cargo weight available for pickup.
    pub fn available_cargo(&self) -> f64 {
        self.available_cargo
    }

    /// Load `weight` tons from this planet onto `vessel`.
    ///
    /// Refuses with [`TransferError::VesselNotColocated`] unless the vessel
    /// is exactly at this planet's position; otherwise delegates to
    /// [`Vessel::load_cargo_from`].
    pub fn load_cargo_to(&mut self, vessel: &mut Vessel, weight: f64) -> TransferResult {
        self.check_colocated(vessel)?;
        vessel.load_cargo_from(self, weight)
    }

    /// Unload `weight` tons from `vessel` onto this planet. Mirror of
    /// [`Self::load_cargo_to`], with the same co-location gate.
    pub fn unload_cargo_from(&mut self, vessel: &mut Vessel, weight: f64) -> TransferResult {
        self.check_colocated(vessel)?;
        vessel.unload_cargo_to(self, weight)
    }

    fn check_colocated(&self, vessel: &Vessel) -> TransferResult {
        if vessel.position() != self.position {
            let err = TransferError::VesselNotColocated {
                vessel_position: vessel.position(),
                planet_position: self.position,
            };
            log::warn!("{}: {}", self.name, err);
            return Err(err);
        }
        Ok(())
    }

    /// Remove cargo from the pool. May drive the balance negative.
    pub(crate) fn take_cargo(&mut self, weight: f64) {
        self.available_cargo -= weight;
    }

    /// Return cargo to the pool.
    pub(crate) fn accept_cargo(&mut self, weight: f64) {
        self.available_cargo += weight;
    }

    /// Current status line.
    pub fn status_line(&self) -> String {
        report::planet_line(&self.name, self.position, self.available_cargo)
    }

    /// Print the status line to stdout.
    pub fn report(&self) {
        println!("{}", self.status_line());
    }
}

impl std::fmt::Display for Planet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.status_line())
    }
}

impl From<&Planet> for Destination {
    /// "Fly to that planet" — captures the planet's position.
    fn from(planet: &Planet) -> Self {
        Destination::Body(planet.position)
    }
}
