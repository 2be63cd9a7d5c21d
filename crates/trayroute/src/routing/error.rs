use thiserror::Error;

use super::types::{GridPoint, RackId, RackRole, SegmentId};

/// Failure of a single planning call. None of these are fatal to the process.
#[derive(Debug, Error)]
pub enum RoutingError {
    /// `position` is `None` when the project has no racks or no trays at all.
    #[error("The {rack} rack{} is not connected to any cable tray", located(.position))]
    NotConnected {
        rack: RackRole,
        position: Option<GridPoint>,
    },

    #[error("No path connects {origin} and {destination} through the existing cable trays")]
    NoPath {
        origin: GridPoint,
        destination: GridPoint,
    },

    #[error("Tray segment {segment_id} is neither horizontal nor vertical")]
    InvalidGeometry { segment_id: SegmentId },

    #[error("Rack {0} was not found in this project")]
    RackNotFound(RackId),

    #[error("Tray network covers {cells} cells, exceeding the limit of {limit}")]
    NetworkTooLarge { cells: u64, limit: u64 },

    #[error("Failed to load project data: {0}")]
    Source(#[from] anyhow::Error),
}

fn located(position: &Option<GridPoint>) -> String {
    position.map(|p| format!(" at {p}")).unwrap_or_default()
}

/// Caller-facing class of a routing failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorClass {
    NotFound,
    BadRequest,
    Internal,
}

impl RoutingError {
    pub fn class(&self) -> ErrorClass {
        match self {
            Self::RackNotFound(_) | Self::NoPath { .. } => ErrorClass::NotFound,
            Self::NotConnected { .. }
            | Self::InvalidGeometry { .. }
            | Self::NetworkTooLarge { .. } => ErrorClass::BadRequest,
            Self::Source(_) => ErrorClass::Internal,
        }
    }
}
