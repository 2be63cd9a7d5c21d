//! Project snapshot files.
//!
//! A snapshot holds the racks, trays and confirmed routes of one or more projects. It stands
//! in for the record store: planning reads from it through [`ProjectSource`], and confirming
//! a route writes back through [`RouteSink`].

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::routing::ProjectSource;
use crate::routing::types::{
    GridPoint, ProjectId, Rack, RackId, Route, SegmentId, TraySegment,
};

/// Lifecycle state of a confirmed route. Only active routes count against tray occupancy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RouteStatus {
    #[default]
    Active,
    Retired,
}

impl std::fmt::Display for RouteStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Active => write!(f, "active"),
            Self::Retired => write!(f, "retired"),
        }
    }
}

/// A route the planner proposed and the user accepted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfirmedRoute {
    pub project_id: ProjectId,
    pub name: String,
    pub source_rack: RackId,
    pub destination_rack: RackId,
    pub distance_m: f64,
    pub segment_ids: Vec<SegmentId>,
    pub path: Vec<GridPoint>,
    #[serde(default)]
    pub status: RouteStatus,
}

impl ConfirmedRoute {
    /// Build the record for a planned route. Without a name one is derived from the racks.
    pub fn new(
        project_id: ProjectId,
        source_rack: RackId,
        destination_rack: RackId,
        route: &Route,
        name: Option<String>,
    ) -> Self {
        Self {
            project_id,
            name: name
                .unwrap_or_else(|| format!("Route from {source_rack} to {destination_rack}")),
            source_rack,
            destination_rack,
            distance_m: route.distance_m,
            segment_ids: route.segment_ids(),
            path: route.path.clone(),
            status: RouteStatus::Active,
        }
    }
}

/// Persists confirmed routes.
///
/// Implementations record the route and add one cable to the occupancy of every segment it
/// lists, as a single unit of work.
pub trait RouteSink {
    fn confirm(&mut self, route: ConfirmedRoute) -> Result<()>;

    /// Mark the `number`th route of a project (1-based, in confirmation order) as retired and
    /// release the occupancy it held. Returns the retired record.
    fn retire(&mut self, project: ProjectId, number: usize) -> Result<ConfirmedRoute>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Yaml,
    Json,
}

impl Format {
    fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Self::Json,
            _ => Self::Yaml,
        }
    }
}

/// On-disk project snapshot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectData {
    #[serde(default)]
    pub racks: Vec<Rack>,

    #[serde(default)]
    pub trays: Vec<TraySegment>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub routes: Vec<ConfirmedRoute>,
}

/// A project snapshot bound to the file it was loaded from.
#[derive(Debug, Clone)]
pub struct ProjectFile {
    path: PathBuf,
    format: Format,
    pub data: ProjectData,
}

impl ProjectFile {
    /// Load a snapshot. Files ending in `.json` are read as JSON, anything else as YAML.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                anyhow::anyhow!("Project file not found: {}", path.display())
            } else {
                anyhow::anyhow!("Failed to read project file {}: {e}", path.display())
            }
        })?;
        let format = Format::from_path(path);
        let data = match format {
            Format::Json => serde_json::from_str(&contents)
                .with_context(|| format!("Invalid project JSON in {}", path.display()))?,
            Format::Yaml => serde_yaml::from_str(&contents)
                .with_context(|| format!("Invalid project YAML in {}", path.display()))?,
        };
        Ok(Self {
            path: path.to_path_buf(),
            format,
            data,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn save(&self) -> Result<()> {
        let contents = match self.format {
            Format::Json => serde_json::to_string_pretty(&self.data)?,
            Format::Yaml => serde_yaml::to_string(&self.data)?,
        };
        std::fs::write(&self.path, contents)
            .with_context(|| format!("Failed to write {}", self.path.display()))?;
        Ok(())
    }
}

impl ProjectData {
    /// Confirmed routes of one project, in confirmation order.
    pub fn project_routes(&self, project: ProjectId) -> Vec<&ConfirmedRoute> {
        self.routes
            .iter()
            .filter(|r| r.project_id == project)
            .collect()
    }
}

impl ProjectSource for ProjectData {
    fn trays(&self, project: ProjectId) -> Result<Vec<TraySegment>> {
        Ok(self
            .trays
            .iter()
            .filter(|t| t.project_id == project)
            .cloned()
            .collect())
    }

    fn racks(&self, project: ProjectId) -> Result<Vec<Rack>> {
        Ok(self
            .racks
            .iter()
            .filter(|r| r.project_id == project)
            .cloned()
            .collect())
    }
}

impl ProjectSource for ProjectFile {
    fn trays(&self, project: ProjectId) -> Result<Vec<TraySegment>> {
        self.data.trays(project)
    }

    fn racks(&self, project: ProjectId) -> Result<Vec<Rack>> {
        self.data.racks(project)
    }
}

impl RouteSink for ProjectData {
    fn confirm(&mut self, route: ConfirmedRoute) -> Result<()> {
        for id in &route.segment_ids {
            let tray = self
                .trays
                .iter_mut()
                .find(|t| t.id == *id && t.project_id == route.project_id)
                .with_context(|| format!("Route references unknown tray {id}"))?;
            tray.occupancy = tray.occupancy.saturating_add(1);
        }
        self.routes.push(route);
        Ok(())
    }

    fn retire(&mut self, project: ProjectId, number: usize) -> Result<ConfirmedRoute> {
        let route = number
            .checked_sub(1)
            .and_then(|index| {
                self.routes
                    .iter_mut()
                    .filter(|r| r.project_id == project)
                    .nth(index)
            })
            .with_context(|| format!("Project {project} has no route #{number}"))?;
        if route.status == RouteStatus::Retired {
            anyhow::bail!("Route #{number} (\"{}\") is already retired", route.name);
        }
        route.status = RouteStatus::Retired;
        let retired = route.clone();

        for id in &retired.segment_ids {
            if let Some(tray) = self
                .trays
                .iter_mut()
                .find(|t| t.id == *id && t.project_id == project)
            {
                tray.occupancy = tray.occupancy.saturating_sub(1);
            }
        }
        Ok(retired)
    }
}

impl RouteSink for ProjectFile {
    /// Applies the route to a copy of the snapshot and only keeps it once the file is written.
    fn confirm(&mut self, route: ConfirmedRoute) -> Result<()> {
        let mut staged = self.data.clone();
        let name = route.name.clone();
        let segments = route.segment_ids.len();
        staged.confirm(route)?;

        let previous = std::mem::replace(&mut self.data, staged);
        if let Err(e) = self.save() {
            self.data = previous;
            return Err(e);
        }
        info!(name = %name, segments, path = %self.path.display(), "route confirmed");
        Ok(())
    }

    fn retire(&mut self, project: ProjectId, number: usize) -> Result<ConfirmedRoute> {
        let mut staged = self.data.clone();
        let retired = staged.retire(project, number)?;

        let previous = std::mem::replace(&mut self.data, staged);
        if let Err(e) = self.save() {
            self.data = previous;
            return Err(e);
        }
        info!(name = %retired.name, project, number, path = %self.path.display(), "route retired");
        Ok(retired)
    }
}
