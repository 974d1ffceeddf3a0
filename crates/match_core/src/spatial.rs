//! Spatial candidate discovery: H3-based indexing of driver positions.
//!
//! This module provides:
//!
//! - **Cell conversion**: lat/lng points to H3 cells at a configured resolution
//! - **DriverIndex**: H3 cell → driver-id mappings for "drivers near this
//!   passenger" queries, with an LRU-cached grid-disk expansion
//!
//! Default resolution is 9 (~240m cell size), suitable for city-scale
//! candidate discovery. The index performs no scoring; it only produces the
//! candidate set the ranking step consumes.

use std::collections::HashMap;
use std::num::NonZeroUsize;
use std::sync::Mutex;

use h3o::{CellIndex, LatLng, Resolution};
use lru::LruCache;

use crate::geo::GeoPoint;
use crate::profiles::DriverId;

/// Default H3 resolution for driver indexing (~240m cells).
pub const DEFAULT_RESOLUTION: Resolution = Resolution::Nine;

const GRID_DISK_CACHE_SIZE: usize = 1_000;

/// Convert a point to its H3 cell at the given resolution.
///
/// Returns `None` for out-of-range latitudes/longitudes.
pub fn cell_for_point(point: GeoPoint, resolution: Resolution) -> Option<CellIndex> {
    LatLng::new(point.lat, point.lng)
        .ok()
        .map(|coord| coord.to_cell(resolution))
}

/// H3 cell → driver-id index for candidate discovery.
pub struct DriverIndex {
    resolution: Resolution,
    cells: HashMap<CellIndex, Vec<DriverId>>,
    positions: HashMap<DriverId, CellIndex>,
    disk_cache: Mutex<LruCache<(CellIndex, u32), Vec<CellIndex>>>,
}

impl DriverIndex {
    pub fn new() -> Self {
        Self::with_resolution(DEFAULT_RESOLUTION)
    }

    pub fn with_resolution(resolution: Resolution) -> Self {
        Self {
            resolution,
            cells: HashMap::new(),
            positions: HashMap::new(),
            disk_cache: Mutex::new(LruCache::new(
                NonZeroUsize::new(GRID_DISK_CACHE_SIZE).expect("cache size must be non-zero"),
            )),
        }
    }

    pub fn resolution(&self) -> Resolution {
        self.resolution
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Index a driver at the given position, replacing any previous position.
    ///
    /// Returns `false` (and leaves the index unchanged) if the point cannot
    /// be converted to an H3 cell.
    pub fn insert(&mut self, driver: DriverId, point: GeoPoint) -> bool {
        let Some(cell) = cell_for_point(point, self.resolution) else {
            return false;
        };
        if let Some(old_cell) = self.positions.insert(driver, cell) {
            if old_cell == cell {
                return true;
            }
            self.remove_from_cell(driver, old_cell);
        }
        self.cells.entry(cell).or_default().push(driver);
        true
    }

    /// Drop a driver from the index (e.g. went off duty).
    pub fn remove(&mut self, driver: DriverId) {
        if let Some(cell) = self.positions.remove(&driver) {
            self.remove_from_cell(driver, cell);
        }
    }

    /// The cell a driver is currently indexed in, if any.
    pub fn cell_of(&self, driver: DriverId) -> Option<CellIndex> {
        self.positions.get(&driver).copied()
    }

    /// Driver ids within `k` grid cells of the given point.
    ///
    /// Results follow grid-disk cell order (origin cell first), with insertion
    /// order within a cell. Returns an empty set for unindexable points.
    pub fn candidates_near(&self, point: GeoPoint, k: u32) -> Vec<DriverId> {
        let Some(origin) = cell_for_point(point, self.resolution) else {
            return Vec::new();
        };
        let disk = self.grid_disk(origin, k);
        disk.iter()
            .filter_map(|cell| self.cells.get(cell))
            .flat_map(|drivers| drivers.iter().copied())
            .collect()
    }

    fn grid_disk(&self, origin: CellIndex, k: u32) -> Vec<CellIndex> {
        let mut cache = match self.disk_cache.lock() {
            Ok(guard) => guard,
            // Fallback: compute without cache if mutex poisoned
            Err(_) => return origin.grid_disk::<Vec<_>>(k),
        };
        cache
            .get_or_insert((origin, k), || origin.grid_disk::<Vec<_>>(k))
            .clone()
    }

    fn remove_from_cell(&mut self, driver: DriverId, cell: CellIndex) {
        if let Some(drivers) = self.cells.get_mut(&cell) {
            drivers.retain(|d| *d != driver);
            if drivers.is_empty() {
                self.cells.remove(&cell);
            }
        }
    }
}

impl Default for DriverIndex {
    fn default() -> Self {
        Self::new()
    }
}
