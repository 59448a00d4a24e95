//! Transfer error taxonomy and result type.
//!
//! Every cargo transfer is a single synchronous all-or-nothing step: the
//! operation either mutates both parties or returns one of these errors and
//! mutates nothing. Callers react to the typed error; the diagnostic text is
//! only a rendering of it.

use serde::{Deserialize, Serialize};

use crate::position::Position;

/// Why a cargo transfer was refused.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum TransferError {
    /// The requested weight is negative.
    NegativeCargoWeight { weight: f64 },
    /// A load would exceed the vessel's free capacity.
    InsufficientFreeSpace { weight: f64, free_space: f64 },
    /// An unload requests more than is currently on board.
    InsufficientOccupiedCargo { weight: f64, occupied_space: f64 },
    /// The vessel is not on the planet that initiated the transfer.
    VesselNotColocated {
        vessel_position: Position,
        planet_position: Position,
    },
}

/// Result of a mutating transfer operation.
pub type TransferResult = Result<(), TransferError>;

impl std::fmt::Display for TransferError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use crate::report::tons;
        match self {
            TransferError::NegativeCargoWeight { weight } => {
                write!(
                    f,
                    "вес груза({}) не должен быть отрицательным",
                    tons(*weight)
                )
            }
            TransferError::InsufficientFreeSpace { weight, free_space } => {
                write!(
                    f,
                    "вес груза({}) превышает свободное место({}) на корабле",
                    tons(*weight),
                    tons(*free_space)
                )
            }
            TransferError::InsufficientOccupiedCargo {
                weight,
                occupied_space,
            } => {
                write!(
                    f,
                    "вес груза({}) превышает количество груза({}) на корабле",
                    tons(*weight),
                    tons(*occupied_space)
                )
            }
            TransferError::VesselNotColocated {
                vessel_position,
                planet_position,
            } => {
                write!(
                    f,
                    "корабля нет на планете (корабль: {}, планета: {})",
                    vessel_position, planet_position
                )
            }
        }
    }
}

impl std::error::Error for TransferError {}
