use super::*;
use crate::routing::error::ErrorClass;
use crate::routing::graph::NetworkOptions;
use crate::routing::types::RackRole;

#[test]
fn source_off_network_is_not_connected() {
    let trays = vec![tray(1, (1, 1), (4, 1)), tray(2, (1, 3), (4, 3))];
    match route_err(&trays, pt(9, 9), pt(1, 1)) {
        RoutingError::NotConnected { rack, position } => {
            assert_eq!(rack, RackRole::Source);
            assert_eq!(position, Some(pt(9, 9)));
        }
        other => panic!("Expected NotConnected, got {other:?}"),
    }
}

#[test]
fn destination_off_network_is_not_connected() {
    let trays = vec![tray(1, (1, 1), (4, 1))];
    match route_err(&trays, pt(1, 1), pt(2, 2)) {
        RoutingError::NotConnected { rack, .. } => assert_eq!(rack, RackRole::Destination),
        other => panic!("Expected NotConnected, got {other:?}"),
    }
}

#[test]
fn source_is_checked_before_destination() {
    let trays = vec![tray(1, (1, 1), (4, 1))];
    match route_err(&trays, pt(7, 7), pt(8, 8)) {
        RoutingError::NotConnected { rack, .. } => assert_eq!(rack, RackRole::Source),
        other => panic!("Expected NotConnected, got {other:?}"),
    }
}

#[test]
fn disconnected_components_have_no_path() {
    let trays = vec![tray(1, (1, 1), (4, 1)), tray(2, (1, 3), (4, 3))];
    let err = route_err(&trays, pt(1, 1), pt(4, 3));
    assert!(matches!(err, RoutingError::NoPath { .. }), "got {err:?}");
    assert_eq!(err.class(), ErrorClass::NotFound);
}

#[test]
fn parallel_adjacent_trays_do_not_connect() {
    // Rows 1 and 2 are adjacent cells but no tray joins them.
    let trays = vec![tray(1, (1, 1), (4, 1)), tray(2, (1, 2), (4, 2))];
    let err = route_err(&trays, pt(1, 1), pt(1, 2));
    assert!(matches!(err, RoutingError::NoPath { .. }));
}

#[test]
fn empty_tray_list_degrades_to_not_connected() {
    let err = route_err(&[], pt(1, 1), pt(2, 1));
    assert!(matches!(err, RoutingError::NotConnected { .. }));
    assert_eq!(err.class(), ErrorClass::BadRequest);
}

#[test]
fn rack_on_diagonal_only_is_not_connected() {
    let trays = vec![tray(1, (1, 1), (4, 4)), tray(2, (6, 1), (6, 4))];
    let err = route_err(&trays, pt(1, 1), pt(6, 1));
    assert!(matches!(
        err,
        RoutingError::NotConnected {
            rack: RackRole::Source,
            ..
        }
    ));
}

#[test]
fn strict_mode_rejects_diagonal_segments() {
    let trays = vec![tray(1, (1, 1), (4, 1)), tray(2, (1, 1), (4, 4))];
    let options = NetworkOptions {
        strict: true,
        ..NetworkOptions::default()
    };
    match TrayNetwork::build_with(&trays, &options) {
        Err(RoutingError::InvalidGeometry { segment_id }) => assert_eq!(segment_id, 2),
        Err(other) => panic!("Expected InvalidGeometry, got {other:?}"),
        Ok(_) => panic!("Expected InvalidGeometry"),
    }
}

#[test]
fn oversized_network_is_rejected() {
    let trays = vec![tray(1, (0, 0), (0, 99)), tray(2, (0, 0), (99, 0))];
    let options = NetworkOptions {
        max_cells: 150,
        ..NetworkOptions::default()
    };
    match TrayNetwork::build_with(&trays, &options) {
        Err(RoutingError::NetworkTooLarge { cells, limit }) => {
            assert_eq!(cells, 200);
            assert_eq!(limit, 150);
        }
        Err(other) => panic!("Expected NetworkTooLarge, got {other:?}"),
        Ok(_) => panic!("Expected NetworkTooLarge"),
    }
}

#[test]
fn error_messages_name_the_rack_role() {
    let trays = vec![tray(1, (1, 1), (4, 1))];
    let err = route_err(&trays, pt(1, 1), pt(5, 5));
    let message = err.to_string();
    assert!(message.contains("destination"), "{message}");
    assert!(message.contains("(5,5)"), "{message}");
}
