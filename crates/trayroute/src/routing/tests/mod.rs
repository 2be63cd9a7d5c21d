mod invalid;

use super::error::RoutingError;
use super::graph::TrayNetwork;
use super::search::find_route;
use super::types::{GridPoint, Rack, Route, TraySegment};

/// Helper to create a GridPoint.
fn pt(x: i32, y: i32) -> GridPoint {
    GridPoint::new(x, y)
}

/// Helper to create a tray segment in project 1.
fn tray(id: i64, a: (i32, i32), b: (i32, i32)) -> TraySegment {
    TraySegment {
        id,
        project_id: 1,
        name: Some(format!("T{id}")),
        a: pt(a.0, a.1),
        b: pt(b.0, b.1),
        max_capacity: 100,
        occupancy: 0,
    }
}

/// Helper to create a rack in project 1.
fn rack(id: i64, x: i32, y: i32) -> Rack {
    Rack {
        id,
        project_id: 1,
        name: Some(format!("R{id}")),
        position: pt(x, y),
    }
}

/// Build a network and route between two points, panicking on failure.
fn route(trays: &[TraySegment], from: GridPoint, to: GridPoint) -> Route {
    let network = TrayNetwork::build(trays).expect("network should build");
    match find_route(&network, from, to) {
        Ok(route) => route,
        Err(e) => panic!("Route {from} -> {to} failed: {e}"),
    }
}

/// Build a network and route between two points, expecting failure.
fn route_err(trays: &[TraySegment], from: GridPoint, to: GridPoint) -> RoutingError {
    let network = TrayNetwork::build(trays).expect("network should build");
    match find_route(&network, from, to) {
        Ok(route) => panic!(
            "Route {from} -> {to} should have failed but took {} steps",
            route.steps
        ),
        Err(e) => e,
    }
}

/// Assert that consecutive path cells are grid-adjacent and joined by a network edge.
fn assert_path_connected(network: &TrayNetwork<'_>, route: &Route) {
    for pair in route.path.windows(2) {
        assert!(
            pair[0].is_adjacent(pair[1]),
            "{} and {} are not adjacent",
            pair[0],
            pair[1]
        );
        assert!(
            network.owner(pair[0], pair[1]).is_some(),
            "no tray between {} and {}",
            pair[0],
            pair[1]
        );
    }
}
