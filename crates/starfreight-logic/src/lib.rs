//! Pure cargo-run logic for Starfreight.
//!
//! This crate contains all simulation logic that is independent of any
//! runtime or output surface. Entities take plain data and return typed
//! results, making them unit-testable and portable to any host (CLI tools,
//! a future server, or the headless harness in `starfreight-simtest`).
//!
//! # Module Overview
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`position`] | 2-D map coordinates and movement destinations |
//! | [`transfer`] | Transfer error taxonomy and result type |
//! | [`vessel`] | Cargo vessel — capacity bookkeeping, movement, load/unload |
//! | [`planet`] | Planet — cargo pool and co-location-gated transfer entry points |
//! | [`report`] | Status-line formatting glue |
//!
//! # Example
//!
//! ```rust
//! use starfreight_logic::planet::Planet;
//! use starfreight_logic::vessel::Vessel;
//!
//! let mut vessel = Vessel::new("Аврора", [1.0, 1.0], 200.0);
//! let mut earth = Planet::new("Земля", [1.0, 1.0], 300.0);
//!
//! earth.load_cargo_to(&mut vessel, 150.0).unwrap();
//! assert_eq!(vessel.occupied_space(), 150.0);
//! assert_eq!(earth.available_cargo(), 150.0);
//! ```

pub mod planet;
pub mod position;
pub mod report;
pub mod transfer;
pub mod vessel;
