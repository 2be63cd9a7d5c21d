use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Edge length of one raised-floor tile in millimetres. One grid unit equals one tile.
pub const TILE_MM: u32 = 600;

/// Capacity assigned to trays when the record or caller does not provide one.
pub const DEFAULT_CAPACITY: u32 = 100;

pub type ProjectId = i64;
pub type RackId = i64;
pub type SegmentId = i64;

/// Integer floor-grid coordinate. One unit is one 600 mm tile.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridPoint {
    pub x: i32,
    pub y: i32,
}

impl GridPoint {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Convert a millimetre position on the floor plan to the tile that contains it.
    ///
    /// A position exactly on a tile boundary belongs to the lower tile, so 600 mm is
    /// tile 0 and 601 mm is tile 1. The origin itself falls in tile -1.
    pub fn from_mm(x_mm: i64, y_mm: i64) -> Self {
        let to_index = |mm: i64| (mm - 1).div_euclid(i64::from(TILE_MM)) as i32;
        Self {
            x: to_index(x_mm),
            y: to_index(y_mm),
        }
    }

    /// Manhattan distance to another point in grid units.
    pub fn manhattan_to(self, other: GridPoint) -> u64 {
        u64::from(self.x.abs_diff(other.x)) + u64::from(self.y.abs_diff(other.y))
    }

    /// Whether `other` is exactly one step away along a single axis.
    pub fn is_adjacent(self, other: GridPoint) -> bool {
        self.manhattan_to(other) == 1
    }

    /// Floor-plan label in `RR-CC` form: two letters for the row (base 26, `AA`, `AB`, ...)
    /// and a zero-padded column number.
    pub fn tile_label(self) -> String {
        const ALPHABET: &[u8; 26] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
        let row = if self.y < 0 {
            "A".to_string()
        } else {
            let y = self.y as usize;
            let first = ALPHABET[(y / 26) % 26] as char;
            let second = ALPHABET[y % 26] as char;
            format!("{first}{second}")
        };
        format!("{row}-{:02}", self.x)
    }
}

impl Ord for GridPoint {
    fn cmp(&self, other: &Self) -> Ordering {
        self.y.cmp(&other.y).then(self.x.cmp(&other.x))
    }
}

impl PartialOrd for GridPoint {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Debug for GridPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl fmt::Display for GridPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

/// Geometric class of a tray segment, derived from its endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Orientation {
    Horizontal,
    Vertical,
    /// Both endpoints coincide.
    Point,
    /// Neither axis is constant. Not routable.
    Diagonal,
}

/// Canonical identifier of the edge between two adjacent points.
/// `from` is always the lesser point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EdgeKey {
    pub from: GridPoint,
    pub to: GridPoint,
}

impl EdgeKey {
    pub fn new(a: GridPoint, b: GridPoint) -> Self {
        if a <= b {
            Self { from: a, to: b }
        } else {
            Self { from: b, to: a }
        }
    }
}

fn default_capacity() -> u32 {
    DEFAULT_CAPACITY
}

/// A straight, axis-aligned cable-tray run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraySegment {
    pub id: SegmentId,
    pub project_id: ProjectId,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    pub a: GridPoint,
    pub b: GridPoint,

    #[serde(default = "default_capacity")]
    pub max_capacity: u32,

    #[serde(default)]
    pub occupancy: u32,
}

impl TraySegment {
    pub fn orientation(&self) -> Orientation {
        match (self.a.x == self.b.x, self.a.y == self.b.y) {
            (true, true) => Orientation::Point,
            (true, false) => Orientation::Vertical,
            (false, true) => Orientation::Horizontal,
            (false, false) => Orientation::Diagonal,
        }
    }

    /// Number of grid cells the segment covers. Diagonal segments cover none.
    pub fn cell_count(&self) -> u64 {
        match self.orientation() {
            Orientation::Diagonal => 0,
            _ => self.a.manhattan_to(self.b) + 1,
        }
    }

    /// Fraction of capacity in use. Zero-capacity trays report 0.
    pub fn occupancy_ratio(&self) -> f64 {
        if self.max_capacity == 0 {
            0.0
        } else {
            f64::from(self.occupancy) / f64::from(self.max_capacity)
        }
    }

    pub fn display_name(&self) -> String {
        self.name
            .clone()
            .unwrap_or_else(|| format!("tray #{}", self.id))
    }
}

/// Equipment rack placed on the floor grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rack {
    pub id: RackId,
    pub project_id: ProjectId,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    pub position: GridPoint,
}

impl Rack {
    pub fn display_name(&self) -> String {
        self.name
            .clone()
            .unwrap_or_else(|| format!("rack #{}", self.id))
    }
}

/// Which end of a requested route a rack sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum RackRole {
    Source,
    Destination,
}

impl fmt::Display for RackRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Source => write!(f, "source"),
            Self::Destination => write!(f, "destination"),
        }
    }
}

/// A planned route between two racks.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Route {
    /// Tray segments in the order they are first entered along the path.
    pub segments: Vec<TraySegment>,
    /// Grid cells visited, source first.
    pub path: Vec<GridPoint>,
    /// Number of unit edges traversed.
    pub steps: usize,
    pub distance_m: f64,
}

impl Route {
    pub fn segment_ids(&self) -> Vec<SegmentId> {
        self.segments.iter().map(|s| s.id).collect()
    }
}
