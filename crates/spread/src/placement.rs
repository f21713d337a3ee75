//! Circular de-overlap placement for stacked markers
//!
//! Items whose coordinates round to the same [`CoordinateKey`] would render
//! as a single pin. Every member of such a group is moved onto a circle of
//! fixed radius around the shared position, evenly spaced by angle:
//!
//! ```text
//! θ_i = i · 2π / n
//! display = (lat + r·cos θ_i, lng + r·sin θ_i)
//! ```
//!
//! Singletons keep their raw position exactly. Grouping always uses the raw
//! coordinates, so placing an already-placed set yields the same display
//! positions again.

use crate::config::SpreadConfig;
use crate::coordinate::{Coordinate, CoordinateKey, Located};
use ahash::AHashMap;
use smallvec::SmallVec;
use std::f64::consts::TAU;
use tracing::debug;

/// An item together with its derived map position
#[derive(Debug, Clone, PartialEq)]
pub struct Placed<T> {
    item: T,
    display: Coordinate,
    group_size: usize,
}

impl<T> Placed<T> {
    /// The original item, untouched
    pub fn item(&self) -> &T {
        &self.item
    }

    /// Unwrap the original item
    pub fn into_inner(self) -> T {
        self.item
    }

    /// Position the marker should be drawn at
    pub fn display(&self) -> Coordinate {
        self.display
    }

    /// Display latitude in degrees
    pub fn display_latitude(&self) -> f64 {
        self.display.latitude
    }

    /// Display longitude in degrees
    pub fn display_longitude(&self) -> f64 {
        self.display.longitude
    }

    /// Number of items sharing this item's coordinate key (1 for singletons)
    pub fn group_size(&self) -> usize {
        self.group_size
    }

    /// Whether the marker was moved off its raw position
    pub fn is_offset(&self) -> bool {
        self.group_size > 1
    }
}

/// Placed items still report their raw position so that grouping a second
/// time keys on the original coordinates.
impl<T: Located> Located for Placed<T> {
    fn latitude(&self) -> f64 {
        self.item.latitude()
    }

    fn longitude(&self) -> f64 {
        self.item.longitude()
    }
}

/// Items sharing one coordinate key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoordinateGroup {
    /// Shared key
    pub key: CoordinateKey,
    /// Input indices of the members, in input order
    pub members: SmallVec<[usize; 4]>,
}

impl CoordinateGroup {
    /// Number of members
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Always false for groups produced by [`Spreader::groups`]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

/// Marker placement with a fixed configuration
#[derive(Debug, Clone, Default)]
pub struct Spreader {
    config: SpreadConfig,
}

impl Spreader {
    /// Create a spreader, validating the configuration
    pub fn new(config: SpreadConfig) -> Result<Self, crate::ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Active configuration
    pub fn config(&self) -> &SpreadConfig {
        &self.config
    }

    /// Partition items by coordinate key
    ///
    /// Groups are returned in order of first appearance.
    pub fn groups<T: Located>(&self, items: &[T]) -> Vec<CoordinateGroup> {
        let mut index: AHashMap<CoordinateKey, usize> = AHashMap::with_capacity(items.len());
        let mut groups: Vec<CoordinateGroup> = Vec::new();

        for (i, item) in items.iter().enumerate() {
            let key = CoordinateKey::of(item, self.config.precision);
            let slot = *index.entry(key).or_insert_with(|| {
                groups.push(CoordinateGroup {
                    key,
                    members: SmallVec::new(),
                });
                groups.len() - 1
            });
            groups[slot].members.push(i);
        }

        groups
    }

    /// Offset `(dlat, dlng)` for member `index` of a group of `group_len`
    pub fn offset_for(&self, index: usize, group_len: usize) -> (f64, f64) {
        if group_len <= 1 {
            return (0.0, 0.0);
        }

        let angle = index as f64 * (TAU / group_len as f64);
        let r = self.config.offset_degrees;
        (r * angle.cos(), r * angle.sin())
    }

    /// Place every item, preserving input order
    pub fn spread<T: Located>(&self, items: impl IntoIterator<Item = T>) -> Vec<Placed<T>> {
        let items: Vec<T> = items.into_iter().collect();
        let groups = self.groups(&items);

        let mut placements: Vec<(Coordinate, usize)> = items
            .iter()
            .map(|item| (item.coordinate(), 1))
            .collect();

        let mut stacked = 0usize;
        for group in groups.iter().filter(|g| g.len() > 1) {
            let n = group.len();
            stacked += n;
            for (i, &member) in group.members.iter().enumerate() {
                let raw = items[member].coordinate();
                let (dlat, dlng) = self.offset_for(i, n);
                placements[member] = (
                    Coordinate::new(raw.latitude + dlat, raw.longitude + dlng),
                    n,
                );
            }
        }

        debug!(
            items = items.len(),
            groups = groups.len(),
            stacked,
            "Spread map markers"
        );

        items
            .into_iter()
            .zip(placements)
            .map(|(item, (display, group_size))| Placed {
                item,
                display,
                group_size,
            })
            .collect()
    }
}

/// Place items with the default configuration
pub fn spread<T: Located>(items: impl IntoIterator<Item = T>) -> Vec<Placed<T>> {
    Spreader::default().spread(items)
}

/// Place items with an explicit configuration
///
/// The configuration is not validated here; use [`Spreader::new`] for that.
pub fn spread_with<T: Located>(
    config: &SpreadConfig,
    items: impl IntoIterator<Item = T>,
) -> Vec<Placed<T>> {
    Spreader {
        config: config.clone(),
    }
    .spread(items)
}

/// Recompute placement for items that were already placed
///
/// Display positions from the previous pass are discarded and the raw
/// coordinates are grouped again.
pub fn respread<T: Located>(config: &SpreadConfig, placed: Vec<Placed<T>>) -> Vec<Placed<T>> {
    spread_with(config, placed.into_iter().map(Placed::into_inner))
}
