pub mod coverage;
pub mod error;
pub mod graph;
pub mod search;
pub mod types;

#[cfg(test)]
mod tests;

use tracing::{debug, info_span, warn};

use error::RoutingError;
use graph::{NetworkOptions, TrayNetwork};
use search::find_route;
use types::{ProjectId, Rack, RackId, RackRole, Route, TraySegment};

/// Read access to a project's rack and tray records.
///
/// Each planning call reads both lists once and works on that snapshot.
pub trait ProjectSource {
    fn trays(&self, project: ProjectId) -> anyhow::Result<Vec<TraySegment>>;
    fn racks(&self, project: ProjectId) -> anyhow::Result<Vec<Rack>>;
}

/// Plan the shortest route between two racks of a project.
///
/// The tray network is built fresh from the snapshot for this call and dropped afterwards.
/// Occupancy is read, never changed; recording a confirmed route is the caller's business.
/// A project with no racks or no trays fails with a position-less `NotConnected` before any
/// rack id is resolved.
///
/// # Arguments
/// * `source`: Collaborator supplying the project's records.
/// * `project`: Project whose racks and trays are used.
/// * `from` / `to`: Rack ids of the route endpoints.
/// * `options`: Network build options (strict geometry, size guard).
pub fn plan_route<S: ProjectSource + ?Sized>(
    source: &S,
    project: ProjectId,
    from: RackId,
    to: RackId,
    options: &NetworkOptions,
) -> Result<Route, RoutingError> {
    let _span = info_span!("plan_route", project, from, to).entered();

    let racks = source.racks(project)?;
    let trays = source.trays(project)?;
    debug!(racks = racks.len(), trays = trays.len(), "project snapshot loaded");

    if racks.is_empty() || trays.is_empty() {
        warn!(
            racks = racks.len(),
            trays = trays.len(),
            "project has no racks or no trays"
        );
        return Err(RoutingError::NotConnected {
            rack: RackRole::Source,
            position: None,
        });
    }

    let source_rack = find_rack(&racks, from)?;
    let destination_rack = find_rack(&racks, to)?;

    let network = TrayNetwork::build_with(&trays, options)?;
    find_route(&network, source_rack.position, destination_rack.position)
}

fn find_rack(racks: &[Rack], id: RackId) -> Result<&Rack, RoutingError> {
    racks
        .iter()
        .find(|r| r.id == id)
        .ok_or(RoutingError::RackNotFound(id))
}
