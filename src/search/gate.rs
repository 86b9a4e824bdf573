use crate::core::config::SearchGateConfig;
use crate::core::geo::GeoRegion;
use geo::Area;
use geo_types::{coord, Rect};
use serde::{Deserialize, Serialize};

/// The region covered by the last search that was actually issued.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchMemo {
    region: Option<GeoRegion>,
}

impl SearchMemo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn region(&self) -> Option<&GeoRegion> {
        self.region.as_ref()
    }

    /// Records a search for `region`. Call once the search is issued, not when
    /// the gate is consulted.
    pub fn record(&mut self, region: GeoRegion) {
        self.region = Some(region);
    }

    /// Forgets the last searched region so the next gate check fires.
    pub fn reset(&mut self) {
        self.region = None;
    }
}

/// Throttles nearby-place searches while the map is panned or zoomed.
///
/// The gate never mutates anything: callers keep the [`SearchMemo`] and
/// update it themselves after a search goes out.
#[derive(Debug, Clone, PartialEq)]
pub struct RegionSearchGate {
    threshold: f64,
}

impl RegionSearchGate {
    pub fn new(config: &SearchGateConfig) -> Self {
        Self {
            threshold: config.overlap_threshold,
        }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Returns `true` when `current` has moved far enough from the memo's
    /// region that a new search is worthwhile. The first search always fires.
    pub fn should_search(&self, current: &GeoRegion, memo: &SearchMemo) -> bool {
        match memo.region() {
            None => true,
            Some(last) => overlap_ratio(last, current) < self.threshold,
        }
    }
}

impl Default for RegionSearchGate {
    fn default() -> Self {
        Self::new(&SearchGateConfig::default())
    }
}

/// Share of the smaller region covered by the intersection of `a` and `b`.
///
/// Returns `1.0` when one region contains the other and `0.0` when they are
/// disjoint. Zero-area regions yield `0.0`, except two identical zero-area
/// regions which yield `1.0`.
pub fn overlap_ratio(a: &GeoRegion, b: &GeoRegion) -> f64 {
    let ra = a.bounds();
    let rb = b.bounds();

    let min_lat = ra.min().y.max(rb.min().y);
    let max_lat = ra.max().y.min(rb.max().y);
    let min_lng = ra.min().x.max(rb.min().x);
    let max_lng = ra.max().x.min(rb.max().x);

    if min_lat > max_lat || min_lng > max_lng {
        return 0.0;
    }

    let area_a = ra.unsigned_area();
    let area_b = rb.unsigned_area();
    let smaller = area_a.min(area_b);

    if smaller <= 0.0 {
        return if area_a == 0.0 && area_b == 0.0 && ra == rb {
            1.0
        } else {
            0.0
        };
    }

    let intersection = Rect::new(
        coord! { x: min_lng, y: min_lat },
        coord! { x: max_lng, y: max_lat },
    );
    intersection.unsigned_area() / smaller
}
