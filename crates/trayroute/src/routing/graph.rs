use std::collections::HashMap;

use tracing::{debug, info, warn};

use super::coverage::covered_cells;
use super::error::RoutingError;
use super::types::{EdgeKey, GridPoint, Orientation, SegmentId, TraySegment};

/// Upper bound on the total number of cells covered by a project's trays.
pub const DEFAULT_MAX_CELLS: u64 = 1_000_000;

/// How a tray network treats unusual input.
#[derive(Debug, Clone)]
pub struct NetworkOptions {
    /// Reject diagonal segments instead of skipping them.
    pub strict: bool,
    /// Reject networks covering more cells than this.
    pub max_cells: u64,
}

impl Default for NetworkOptions {
    fn default() -> Self {
        Self {
            strict: false,
            max_cells: DEFAULT_MAX_CELLS,
        }
    }
}

/// Undirected, unit-weight graph of grid cells connected by tray segments.
///
/// Nodes are cells touched by at least one edge. Each edge belongs to exactly one segment:
/// the first one in input order that covers the cell pair.
pub struct TrayNetwork<'a> {
    segments: &'a [TraySegment],
    /// Adjacency list in edge insertion order.
    adjacency: HashMap<GridPoint, Vec<GridPoint>>,
    /// Owning segment of each edge, as an index into `segments`.
    owners: HashMap<EdgeKey, usize>,
    skipped: Vec<SegmentId>,
}

impl<'a> TrayNetwork<'a> {
    /// Build a network with default options.
    pub fn build(segments: &'a [TraySegment]) -> Result<Self, RoutingError> {
        Self::build_with(segments, &NetworkOptions::default())
    }

    /// Build a network from a project's tray segments, processed in slice order.
    pub fn build_with(
        segments: &'a [TraySegment],
        options: &NetworkOptions,
    ) -> Result<Self, RoutingError> {
        let cells: u64 = segments.iter().map(TraySegment::cell_count).sum();
        if cells > options.max_cells {
            return Err(RoutingError::NetworkTooLarge {
                cells,
                limit: options.max_cells,
            });
        }

        let mut network = Self {
            segments,
            adjacency: HashMap::new(),
            owners: HashMap::new(),
            skipped: Vec::new(),
        };

        for (index, segment) in segments.iter().enumerate() {
            if segment.orientation() == Orientation::Diagonal {
                if options.strict {
                    return Err(RoutingError::InvalidGeometry {
                        segment_id: segment.id,
                    });
                }
                warn!(
                    segment_id = segment.id,
                    a = %segment.a,
                    b = %segment.b,
                    "skipping diagonal tray segment"
                );
                network.skipped.push(segment.id);
                continue;
            }

            let covered = covered_cells(segment);
            debug!(segment_id = segment.id, cells = covered.len(), "tray segment covered");
            for pair in covered.windows(2) {
                network.insert_edge(pair[0], pair[1], index);
            }
        }

        info!(
            segments = segments.len(),
            nodes = network.node_count(),
            edges = network.edge_count(),
            skipped = network.skipped.len(),
            "tray network built"
        );

        Ok(network)
    }

    /// Add an edge unless the pair is already owned.
    fn insert_edge(&mut self, a: GridPoint, b: GridPoint, owner: usize) {
        let key = EdgeKey::new(a, b);
        if self.owners.contains_key(&key) {
            return;
        }
        self.owners.insert(key, owner);
        self.adjacency.entry(a).or_default().push(b);
        self.adjacency.entry(b).or_default().push(a);
    }

    /// Check if a cell is a node of the network.
    pub fn contains(&self, point: &GridPoint) -> bool {
        self.adjacency.contains_key(point)
    }

    /// Neighbours of a cell, in edge insertion order.
    pub fn neighbors(&self, point: &GridPoint) -> &[GridPoint] {
        static EMPTY: &[GridPoint] = &[];
        self.adjacency.get(point).map_or(EMPTY, |v| v.as_slice())
    }

    /// The segment owning the edge between two cells, if that edge exists.
    pub fn owner(&self, a: GridPoint, b: GridPoint) -> Option<&'a TraySegment> {
        let segments = self.segments;
        self.owners
            .get(&EdgeKey::new(a, b))
            .map(|&index| &segments[index])
    }

    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn edge_count(&self) -> usize {
        self.owners.len()
    }

    /// Ids of diagonal segments left out of the network.
    pub fn skipped(&self) -> &[SegmentId] {
        &self.skipped
    }
}
