//! Cable-tray route planning for data-center floors.
//!
//! Racks sit on a grid of 600 mm floor tiles and are linked by straight overhead trays.
//! [`routing`] turns a project's trays into a graph of tiles and finds the shortest route
//! between two racks; [`layout`] proposes a regular tray grid for an empty floor.

pub mod alerts;
pub mod config;
pub mod layout;
pub mod project;
pub mod routing;
pub mod stats;
