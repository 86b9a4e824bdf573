//! Nearby-search state for one map screen.
//!
//! The map collaborator reports viewport changes and filter toggles; the
//! session answers with a [`SearchRequest`] when a search should go out,
//! and turns the provider's answer into classified places. One search is
//! in flight at a time.

use crate::core::config::NearbySearchOptions;
use crate::core::geo::GeoRegion;
use crate::places::classifier::classify_all;
use crate::places::result::{EmergencyPlace, RawPlaceResult};
use crate::places::types::{resolve_query, PlaceType};
use crate::search::gate::{RegionSearchGate, SearchMemo};
use crate::search::provider::PlaceSearchProvider;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// A search the map collaborator should run against its place provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchRequest {
    pub query: String,
    pub region: GeoRegion,
    pub filter: Option<PlaceType>,
    /// Session generation the request was issued in; bumped by `reset`
    pub generation: u64,
}

#[derive(Debug, Clone)]
pub struct NearbySearchSession {
    options: NearbySearchOptions,
    gate: RegionSearchGate,
    memo: SearchMemo,
    region: GeoRegion,
    in_flight: bool,
    generation: u64,
    filter: Option<PlaceType>,
    search_text: String,
    places: Vec<EmergencyPlace>,
}

impl NearbySearchSession {
    pub fn new(options: NearbySearchOptions) -> Self {
        Self {
            gate: RegionSearchGate::new(&options.gate),
            region: options.initial_region,
            options,
            memo: SearchMemo::new(),
            in_flight: false,
            generation: 0,
            filter: None,
            search_text: String::new(),
            places: Vec::new(),
        }
    }

    pub fn region(&self) -> &GeoRegion {
        &self.region
    }

    pub fn memo(&self) -> &SearchMemo {
        &self.memo
    }

    pub fn gate(&self) -> &RegionSearchGate {
        &self.gate
    }

    pub fn is_searching(&self) -> bool {
        self.in_flight
    }

    pub fn filter(&self) -> Option<PlaceType> {
        self.filter
    }

    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    /// Places from the last completed search
    pub fn places(&self) -> &[EmergencyPlace] {
        &self.places
    }

    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.search_text = text.into();
    }

    /// Handles a viewport change, returning a request if the gate lets one through.
    pub fn on_region_change(&mut self, region: GeoRegion) -> Option<SearchRequest> {
        self.region = region;
        if self.in_flight {
            #[cfg(feature = "debug")]
            log::debug!("region changed while a search is in flight; ignoring");
            return None;
        }
        if !self.gate.should_search(&self.region, &self.memo) {
            #[cfg(feature = "debug")]
            log::debug!(
                "search suppressed: viewport still overlaps the last searched region (threshold {})",
                self.gate.threshold()
            );
            return None;
        }
        self.begin_search()
    }

    /// Toggles a place-type filter.
    ///
    /// Selecting the active filter clears it without searching. Selecting a
    /// new filter forces a search of the current viewport.
    pub fn toggle_filter(&mut self, place_type: PlaceType) -> Option<SearchRequest> {
        if self.filter == Some(place_type) {
            self.filter = None;
            return None;
        }
        self.filter = Some(place_type);
        self.force_search()
    }

    /// Searches the current viewport regardless of the gate.
    pub fn force_search(&mut self) -> Option<SearchRequest> {
        if self.in_flight {
            #[cfg(feature = "debug")]
            log::debug!("forced search skipped: another search is in flight");
            return None;
        }
        self.begin_search()
    }

    fn begin_search(&mut self) -> Option<SearchRequest> {
        let request = SearchRequest {
            query: resolve_query(self.filter, &self.search_text, &self.options.default_query),
            region: self.region,
            filter: self.filter,
            generation: self.generation,
        };
        self.in_flight = true;
        #[cfg(feature = "debug")]
        log::debug!(
            "issuing nearby search {:?} at ({:.5}, {:.5})",
            request.query,
            request.region.center.lat,
            request.region.center.lng
        );
        Some(request)
    }

    fn is_stale(&self, request: &SearchRequest) -> bool {
        request.generation != self.generation
    }

    /// Records a finished search: classifies the hits and remembers the region.
    ///
    /// A request issued before the last `reset` only releases the in-flight
    /// slot; its hits and region are discarded.
    pub fn complete_search(
        &mut self,
        request: &SearchRequest,
        results: Vec<RawPlaceResult>,
    ) -> &[EmergencyPlace] {
        self.in_flight = false;
        if self.is_stale(request) {
            #[cfg(feature = "debug")]
            log::debug!(
                "discarding {} hits from search {:?} issued before reset",
                results.len(),
                request.query
            );
            return &self.places;
        }
        self.places = classify_all(results);
        self.memo.record(request.region);
        #[cfg(feature = "debug")]
        log::debug!(
            "nearby search {:?} returned {} places",
            request.query,
            self.places.len()
        );
        &self.places
    }

    /// Records a failed search. The memo and previous places are kept.
    pub fn fail_search(&mut self, request: &SearchRequest, error: &Error) {
        self.in_flight = false;
        #[cfg(feature = "debug")]
        log::warn!(
            "nearby search {:?} failed{}: {}",
            request.query,
            if self.is_stale(request) { " (issued before reset)" } else { "" },
            error
        );
        #[cfg(not(feature = "debug"))]
        let _ = (request, error);
    }

    /// Runs `request` against `provider` and records the outcome.
    pub async fn run<P>(&mut self, provider: &P, request: SearchRequest) -> Result<&[EmergencyPlace]>
    where
        P: PlaceSearchProvider + ?Sized,
    {
        #[cfg(feature = "debug")]
        log::debug!("dispatching search to provider {}", provider.name());
        match provider.search(&request).await {
            Ok(results) => Ok(self.complete_search(&request, results)),
            Err(e) => {
                self.fail_search(&request, &e);
                Err(e)
            }
        }
    }

    /// Forgets the last search so the next viewport change searches again.
    ///
    /// A search already in flight keeps the slot until it returns, but its
    /// result is ignored.
    pub fn reset(&mut self) {
        self.memo.reset();
        self.places.clear();
        self.generation += 1;
    }
}

impl Default for NearbySearchSession {
    fn default() -> Self {
        Self::new(NearbySearchOptions::default())
    }
}
