use std::collections::{HashMap, HashSet, VecDeque};

use tracing::{info, warn};

use super::error::RoutingError;
use super::graph::TrayNetwork;
use super::types::{GridPoint, RackRole, Route, SegmentId, TILE_MM, TraySegment};

/// Breadth-first search for a minimum-step path from `source` to `target`.
///
/// All edges weigh one grid unit, so the first time BFS reaches `target` the path is
/// shortest. Among equal-length paths the one found first in neighbour insertion order wins.
/// Returns the visited cells, source first, or `None` if `target` is unreachable.
pub fn shortest_path(
    network: &TrayNetwork<'_>,
    source: GridPoint,
    target: GridPoint,
) -> Option<Vec<GridPoint>> {
    if !network.contains(&source) || !network.contains(&target) {
        return None;
    }
    if source == target {
        return Some(vec![source]);
    }

    let mut came_from: HashMap<GridPoint, GridPoint> = HashMap::new();
    let mut queue = VecDeque::from([source]);

    while let Some(current) = queue.pop_front() {
        for &next in network.neighbors(&current) {
            if next == source || came_from.contains_key(&next) {
                continue;
            }
            came_from.insert(next, current);
            if next == target {
                return Some(reconstruct_path(&came_from, source, target));
            }
            queue.push_back(next);
        }
    }

    None
}

/// Walk `came_from` back from the target and return the path source-first.
fn reconstruct_path(
    came_from: &HashMap<GridPoint, GridPoint>,
    source: GridPoint,
    target: GridPoint,
) -> Vec<GridPoint> {
    let mut path = vec![target];
    let mut current = target;
    while current != source {
        match came_from.get(&current) {
            Some(&parent) => {
                path.push(parent);
                current = parent;
            }
            None => break,
        }
    }
    path.reverse();
    path
}

/// Physical length of a path of `steps` unit edges, in metres rounded to centimetres.
pub fn distance_m(steps: usize) -> f64 {
    let metres = (steps as f64 * f64::from(TILE_MM)) / 1000.0;
    (metres * 100.0).round() / 100.0
}

/// Tray segments crossed by a path, each listed once in the order it is first entered.
pub fn segments_along(network: &TrayNetwork<'_>, path: &[GridPoint]) -> Vec<TraySegment> {
    let mut seen: HashSet<SegmentId> = HashSet::new();
    let mut segments = Vec::new();
    for pair in path.windows(2) {
        if let Some(segment) = network.owner(pair[0], pair[1]) {
            if seen.insert(segment.id) {
                segments.push(segment.clone());
            }
        }
    }
    segments
}

/// Find the shortest route between two rack positions.
///
/// Fails with `NotConnected` when either position is not a network node (source checked
/// first) and with `NoPath` when both are nodes in different components. Never mutates the
/// network or the segments it references.
pub fn find_route(
    network: &TrayNetwork<'_>,
    source: GridPoint,
    destination: GridPoint,
) -> Result<Route, RoutingError> {
    for (rack, position) in [
        (RackRole::Source, source),
        (RackRole::Destination, destination),
    ] {
        if !network.contains(&position) {
            warn!(%rack, %position, "rack position is not on the tray network");
            return Err(RoutingError::NotConnected {
                rack,
                position: Some(position),
            });
        }
    }

    let Some(path) = shortest_path(network, source, destination) else {
        warn!(%source, %destination, "no path between racks");
        return Err(RoutingError::NoPath {
            origin: source,
            destination,
        });
    };

    let steps = path.len() - 1;
    let segments = segments_along(network, &path);
    let route = Route {
        segments,
        steps,
        distance_m: distance_m(steps),
        path,
    };

    info!(
        %source,
        %destination,
        steps = route.steps,
        segments = route.segments.len(),
        distance_m = route.distance_m,
        "route found"
    );

    Ok(route)
}
