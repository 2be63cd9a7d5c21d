use serde::Serialize;

use crate::routing::types::{SegmentId, TraySegment};

pub const DEFAULT_WARNING_RATIO: f64 = 0.8;
pub const DEFAULT_CRITICAL_RATIO: f64 = 0.95;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum AlertLevel {
    Info,
    Warning,
    Critical,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OccupancyAlert {
    pub level: AlertLevel,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub segment_id: Option<SegmentId>,
}

/// Ratios above which a tray is reported.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AlertThresholds {
    pub warning: f64,
    pub critical: f64,
}

impl Default for AlertThresholds {
    fn default() -> Self {
        Self {
            warning: DEFAULT_WARNING_RATIO,
            critical: DEFAULT_CRITICAL_RATIO,
        }
    }
}

/// Occupancy alerts for a project's trays, in tray order.
///
/// A tray is critical when its occupancy ratio exceeds `critical`, and a warning when it
/// exceeds `warning`. If more than one tray is critical, a summary notice is placed first.
pub fn occupancy_alerts(trays: &[TraySegment], thresholds: AlertThresholds) -> Vec<OccupancyAlert> {
    let mut alerts: Vec<OccupancyAlert> = trays
        .iter()
        .filter_map(|tray| {
            let ratio = tray.occupancy_ratio();
            let percent = (ratio * 100.0).round();
            let name = tray.display_name();
            let (level, message) = if ratio > thresholds.critical {
                (
                    AlertLevel::Critical,
                    format!("Tray \"{name}\" is at {percent}% occupancy (critical capacity)."),
                )
            } else if ratio > thresholds.warning {
                (
                    AlertLevel::Warning,
                    format!(
                        "Tray \"{name}\" is at {percent}% occupancy. Consider planning a new route."
                    ),
                )
            } else {
                return None;
            };
            Some(OccupancyAlert {
                level,
                message,
                segment_id: Some(tray.id),
            })
        })
        .collect();

    let critical = alerts
        .iter()
        .filter(|a| a.level == AlertLevel::Critical)
        .count();
    if critical > 1 {
        alerts.insert(
            0,
            OccupancyAlert {
                level: AlertLevel::Info,
                message: format!("{critical} trays are at critical occupancy."),
                segment_id: None,
            },
        );
    }

    alerts
}
