//! Project summary figures.

use serde::Serialize;

use crate::project::{ConfirmedRoute, RouteStatus};
use crate::routing::types::{Rack, SegmentId, TraySegment};

/// Occupancy ratio above which a tray needs attention.
pub const ATTENTION_RATIO: f64 = 0.5;
/// Occupancy ratio above which a tray counts as critical in the summary. Independent of the
/// alert thresholds.
pub const BUSY_RATIO: f64 = 0.8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TrayStatus {
    Free,
    Attention,
    Critical,
}

impl TrayStatus {
    pub fn of(tray: &TraySegment) -> Self {
        let ratio = tray.occupancy_ratio();
        if ratio > BUSY_RATIO {
            Self::Critical
        } else if ratio > ATTENTION_RATIO {
            Self::Attention
        } else {
            Self::Free
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StatusCounts {
    pub free: usize,
    pub attention: usize,
    pub critical: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BusiestTray {
    pub segment_id: SegmentId,
    pub name: String,
    pub occupancy: u32,
    pub max_capacity: u32,
    /// Whole percent of capacity in use.
    pub percent: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectStats {
    pub racks: usize,
    pub trays: usize,
    pub tray_status: StatusCounts,
    /// Active routes only.
    pub routes: usize,
    pub route_distance_m: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub busiest_tray: Option<BusiestTray>,
}

/// Summarise one project's records. Callers pass the project's own racks, trays and routes.
///
/// The busiest tray is the one carrying the most cables; on a tie the earliest tray wins.
/// Retired routes are left out of the route count and total distance.
pub fn project_stats(
    racks: &[Rack],
    trays: &[TraySegment],
    routes: &[&ConfirmedRoute],
) -> ProjectStats {
    let mut tray_status = StatusCounts::default();
    for tray in trays {
        match TrayStatus::of(tray) {
            TrayStatus::Free => tray_status.free += 1,
            TrayStatus::Attention => tray_status.attention += 1,
            TrayStatus::Critical => tray_status.critical += 1,
        }
    }

    let active: Vec<&ConfirmedRoute> = routes
        .iter()
        .copied()
        .filter(|r| r.status == RouteStatus::Active)
        .collect();
    let distance: f64 = active.iter().map(|r| r.distance_m).sum();

    let busiest_tray = trays
        .iter()
        .reduce(|max, t| if t.occupancy > max.occupancy { t } else { max })
        .map(|t| BusiestTray {
            segment_id: t.id,
            name: t.display_name(),
            occupancy: t.occupancy,
            max_capacity: t.max_capacity,
            percent: (t.occupancy_ratio() * 100.0).round(),
        });

    ProjectStats {
        racks: racks.len(),
        trays: trays.len(),
        tray_status,
        routes: active.len(),
        route_distance_m: (distance * 100.0).round() / 100.0,
        busiest_tray,
    }
}
