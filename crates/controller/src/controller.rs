use std::collections::BTreeMap;

use data::dataset::Dataset;
use data::geometry::{GeometryTier, StateResolution};
use data::horizon::Metric;
use foundation::bounds::GeoBounds;
use layers::boundaries::build_boundary_layer;
use layers::markers::{RenderContext, build_marker_layer};
use runtime::debounce::Debouncer;
use runtime::event_bus::{Event, EventBus};
use runtime::tick::Tick;
use search::SearchIndex;
use spatial::{records_in_boundary, records_in_boundary_and_viewport, visible_records};
use stats::Quintiles;
use streaming::{FetchLedger, ResidencyState, ResourceKey, TierCache};

use crate::events::{Effect, InputEvent, LegendUpdate};
use crate::view_state::{DrawState, ViewScope, ViewState, VisualMode};

pub const DEBOUNCE_MS: u64 = 300;
/// Choropleth shapes are unreadable below this zoom; the boundary view is
/// refused on entry and forced back to bubbles on zoom-out.
pub const BOUNDARIES_MIN_ZOOM: f64 = 6.0;
/// Below this many valued records, local quintiles fall back to global.
pub const MIN_LOCAL_SAMPLE: usize = 2;
/// Below this many valued records, the legend carries a small-sample flag.
pub const SMALL_SAMPLE_LIMIT: usize = 5;
pub const FLY_TO_ZOOM: f64 = 10.0;
pub const FLY_TO_DURATION_MS: u64 = 1_500;
/// Slack after the fixed flight duration before the rebuild and popup.
pub const FLY_TO_SETTLE_SLACK_MS: u64 = 100;

/// The mode/state controller: sole owner of `ViewState`, consumer of host
/// input events, producer of host effects. All I/O stays in the host; the
/// controller asks for fetches and flights via effects and is told the
/// outcome via `deliver`/`fail` and `ViewportSettled`.
pub struct MapController {
    dataset: Dataset,
    search: SearchIndex,
    bus: EventBus,
    ledger: FetchLedger,
    tiers: TierCache,
    state: ViewState,
    viewport: Option<GeoBounds>,
    zoom: f64,
    debounce: Debouncer,
    global_quintiles: BTreeMap<Metric, Option<Quintiles>>,
    /// Metric waiting on the lazy long-horizon blob.
    pending_metric: Option<Metric>,
    /// Popup + rebuild scheduled after a fly-to's fixed duration.
    flight: Option<(Tick, String)>,
}

impl MapController {
    pub fn new(dataset: Dataset, metric: Metric) -> Self {
        let search = SearchIndex::build(&dataset);
        Self {
            dataset,
            search,
            bus: EventBus::new(),
            ledger: FetchLedger::new(),
            tiers: TierCache::new(),
            state: ViewState::new(metric),
            viewport: None,
            zoom: 0.0,
            debounce: Debouncer::new(DEBOUNCE_MS),
            global_quintiles: BTreeMap::new(),
            pending_metric: None,
            flight: None,
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn suggest(&self, query: &str) -> Vec<search::Suggestion> {
        self.search.suggest(query)
    }

    /// Drains the trace event bus for the host's logger.
    pub fn drain_events(&mut self) -> Vec<Event> {
        self.bus.drain()
    }

    /// Advances time. Fires the viewport debounce and any pending fly-to
    /// completion; returns the resulting effects.
    pub fn tick(&mut self, now: Tick) -> Vec<Effect> {
        let mut effects = Vec::new();
        if self.debounce.fire(now) {
            effects.extend(self.refresh(now));
        }
        if let Some((deadline, record_id)) = self.flight.clone() {
            if now >= deadline {
                self.flight = None;
                effects.extend(self.refresh(now));
                effects.push(Effect::ShowPopup { record_id });
            }
        }
        effects
    }

    pub fn handle(&mut self, now: Tick, event: InputEvent) -> Vec<Effect> {
        match event {
            InputEvent::ViewportSettled { bounds, zoom } => {
                self.viewport = Some(bounds);
                self.zoom = zoom;
                self.debounce.arm(now);
                Vec::new()
            }
            InputEvent::ToggleScope => self.toggle_scope(now),
            InputEvent::ToggleVisual => self.toggle_visual(now),
            InputEvent::SetMetric(metric) => self.set_metric(now, metric),
            InputEvent::StartDraw => {
                // Starting a draw discards any previously bound boundary.
                let had_boundary = self.state.boundary.take().is_some();
                self.state.draw = DrawState::Drawing;
                self.bus.emit(now, "draw", "drawing started");
                if had_boundary {
                    self.refresh(now)
                } else {
                    Vec::new()
                }
            }
            InputEvent::CancelDraw => {
                if self.state.draw == DrawState::Drawing {
                    self.state.draw = DrawState::Idle;
                }
                Vec::new()
            }
            InputEvent::DrawCompleted(boundary) => {
                // A new boundary always replaces the old one.
                self.state.boundary = Some(boundary);
                self.state.draw = DrawState::Bound;
                self.state.scope = ViewScope::Local;
                self.bus.emit(now, "draw", "boundary bound, scope forced local");
                self.refresh(now)
            }
            InputEvent::ClearBoundary => {
                self.state.boundary = None;
                self.state.draw = DrawState::Idle;
                self.bus.emit(now, "draw", "boundary cleared");
                self.refresh(now)
            }
            InputEvent::Search(query) => self.search_and_fly(now, &query),
        }
    }

    /// The host delivers the bytes for a previously requested resource.
    pub fn deliver(&mut self, now: Tick, key: ResourceKey, payload: &str) -> Vec<Effect> {
        match key {
            ResourceKey::Tier(tier) => self.deliver_tier(now, tier, payload),
            ResourceKey::StateOverlay(res) => {
                self.ledger.mark_resident(key);
                self.bus
                    .emit(now, "stream", format!("state overlay '{}' resident", res.name()));
                Vec::new()
            }
            ResourceKey::LongHorizons => self.deliver_long_horizons(now, payload),
        }
    }

    /// The host reports that a requested resource could not be fetched.
    /// The resource stays failed for the session; the mode that needed it
    /// goes visually inert while everything else keeps working.
    pub fn fail(&mut self, now: Tick, key: ResourceKey, reason: &str) -> Vec<Effect> {
        self.ledger.mark_failed(key);
        self.bus
            .emit(now, "stream", format!("{} failed: {reason}", key.describe()));
        let mut effects = Vec::new();
        if key == ResourceKey::LongHorizons && self.pending_metric.take().is_some() {
            effects.push(Effect::LoadingFinished);
        }
        effects
    }

    fn deliver_tier(&mut self, now: Tick, tier: GeometryTier, payload: &str) -> Vec<Effect> {
        let key = ResourceKey::Tier(tier);
        let set = match formats::parse_geometry(payload) {
            Ok(set) => set,
            Err(err) => {
                return self.fail(now, key, &err.to_string());
            }
        };
        let hash = formats::content_hash(payload.as_bytes());
        if !self.tiers.store(tier, hash, set) {
            self.bus.emit(
                now,
                "stream",
                format!("geometry tier '{}' re-delivered unchanged", tier.name()),
            );
        }
        self.ledger.mark_resident(key);
        // Only re-render if this tier is the one the current view needs.
        if self.state.visual == VisualMode::Boundaries
            && GeometryTier::for_zoom(self.zoom) == tier
        {
            return self.refresh(now);
        }
        Vec::new()
    }

    fn deliver_long_horizons(&mut self, now: Tick, payload: &str) -> Vec<Effect> {
        let key = ResourceKey::LongHorizons;
        let blob = match formats::parse_long_horizons(payload) {
            Ok(blob) => blob,
            Err(err) => {
                return self.fail(now, key, &err.to_string());
            }
        };
        let merged = self.dataset.merge_long_horizons(&blob);
        self.ledger.mark_resident(key);
        self.bus
            .emit(now, "stream", format!("merged {merged} long-horizon values"));

        let mut effects = Vec::new();
        match self.pending_metric.take() {
            Some(metric) => {
                self.state.metric = metric;
                effects.push(Effect::LoadingFinished);
                effects.extend(self.refresh(now));
            }
            None => {
                // Metric changed while the blob was in flight; keep the
                // merged data but do not re-render a stale view.
                self.bus.emit(now, "stream", "long-horizon delivery was stale");
            }
        }
        effects
    }

    fn toggle_scope(&mut self, now: Tick) -> Vec<Effect> {
        if !self.state.scope_toggle_enabled() {
            self.bus
                .emit(now, "mode", "scope toggle ignored while boundary is bound");
            return Vec::new();
        }
        self.state.scope = match self.state.scope {
            ViewScope::Global => ViewScope::Local,
            ViewScope::Local => ViewScope::Global,
        };
        self.refresh(now)
    }

    fn toggle_visual(&mut self, now: Tick) -> Vec<Effect> {
        match self.state.visual {
            VisualMode::Bubbles => {
                if self.zoom < BOUNDARIES_MIN_ZOOM {
                    self.bus
                        .emit(now, "mode", "boundary view needs a closer zoom");
                    return Vec::new();
                }
                self.state.visual = VisualMode::Boundaries;
                let mut effects = vec![Effect::ClearMarkers];
                effects.extend(self.refresh(now));
                effects
            }
            VisualMode::Boundaries => {
                self.state.visual = VisualMode::Bubbles;
                let mut effects = vec![Effect::ClearBoundaries];
                effects.extend(self.refresh(now));
                effects
            }
        }
    }

    fn set_metric(&mut self, now: Tick, metric: Metric) -> Vec<Effect> {
        let needs_lazy = match metric {
            Metric::Price => false,
            Metric::Change(h) => !h.is_embedded(),
        };
        if !needs_lazy || self.ledger.is_resident(ResourceKey::LongHorizons) {
            let mut effects = Vec::new();
            // An abandoned lazy switch still owes the host its spinner stop.
            if self.pending_metric.take().is_some() {
                effects.push(Effect::LoadingFinished);
            }
            self.state.metric = metric;
            effects.extend(self.refresh(now));
            return effects;
        }
        match self.ledger.state(ResourceKey::LongHorizons) {
            Some(ResidencyState::Failed) => {
                self.bus
                    .emit(now, "mode", "long-horizon data unavailable, metric unchanged");
                Vec::new()
            }
            Some(ResidencyState::Requested) => {
                // The spinner is already running if a switch was pending.
                let was_pending = self.pending_metric.replace(metric).is_some();
                if was_pending {
                    Vec::new()
                } else {
                    vec![Effect::LoadingStarted]
                }
            }
            _ => {
                self.pending_metric = Some(metric);
                self.ledger.begin(ResourceKey::LongHorizons);
                vec![Effect::Fetch(ResourceKey::LongHorizons), Effect::LoadingStarted]
            }
        }
    }

    fn search_and_fly(&mut self, now: Tick, query: &str) -> Vec<Effect> {
        let Some(id) = self.search.resolve(query).map(str::to_string) else {
            self.bus.emit(now, "search", format!("no match for '{query}'"));
            return vec![Effect::NotFound {
                query: query.to_string(),
            }];
        };
        let Some(record) = self.dataset.by_id(&id) else {
            return Vec::new();
        };
        let target = record.pos;
        // Fixed-duration sequencing: the popup and rebuild are scheduled a
        // little after the flight is expected to end. The host still sends
        // its own ViewportSettled once the animation lands.
        self.flight = Some((
            now.plus_ms(FLY_TO_DURATION_MS + FLY_TO_SETTLE_SLACK_MS),
            id,
        ));
        vec![
            Effect::ClearMarkers,
            Effect::FlyTo {
                target,
                zoom: FLY_TO_ZOOM,
                duration_ms: FLY_TO_DURATION_MS,
            },
        ]
    }

    /// Recomputes statistics for the current view and rebuilds the active
    /// layer. The heart of every state transition.
    fn refresh(&mut self, now: Tick) -> Vec<Effect> {
        let Some(bounds) = self.viewport else {
            return Vec::new();
        };
        let mut effects = Vec::new();

        if self.state.visual == VisualMode::Boundaries && self.zoom < BOUNDARIES_MIN_ZOOM {
            self.state.visual = VisualMode::Bubbles;
            self.bus
                .emit(now, "mode", "zoomed out of boundary view, back to bubbles");
            effects.push(Effect::ClearBoundaries);
        }

        effects.extend(self.request_state_overlay(now));

        // The boundary set alone drives the bubble-path statistics; what
        // actually gets drawn is always clipped to the viewport as well.
        let (stat_indices, render_indices) = match (&self.state.boundary, self.state.visual) {
            (Some(boundary), VisualMode::Bubbles) => (
                records_in_boundary(&self.dataset, boundary),
                records_in_boundary_and_viewport(&self.dataset, boundary, bounds),
            ),
            (Some(boundary), VisualMode::Boundaries) => {
                let indices = records_in_boundary_and_viewport(&self.dataset, boundary, bounds);
                (indices.clone(), indices)
            }
            (None, _) => {
                let indices = visible_records(&self.dataset, bounds);
                (indices.clone(), indices)
            }
        };

        let values: Vec<f64> = stat_indices
            .iter()
            .filter_map(|&i| self.dataset.records()[i].value(self.state.metric))
            .collect();

        let (quintiles, global_fallback) = match self.state.scope {
            ViewScope::Global => (self.global_quintiles_for(self.state.metric), false),
            ViewScope::Local => {
                if values.len() < MIN_LOCAL_SAMPLE {
                    self.bus.emit(
                        now,
                        "stats",
                        format!("{} valued records, using global quintiles", values.len()),
                    );
                    (self.global_quintiles_for(self.state.metric), true)
                } else {
                    (Quintiles::nearest_rank(&values), false)
                }
            }
        };

        let Some(quintiles) = quintiles else {
            // Nothing to color by at all (empty dataset for this metric).
            self.state.quintiles = None;
            self.state.pop_range = None;
            effects.push(Effect::ClearMarkers);
            return effects;
        };

        // A global-fallback view sizes by base radius, not by relative
        // population, so the range is withheld. A degenerate range would
        // pin every marker to the midpoint and is withheld the same way.
        let pop_range = match self.population_range(&stat_indices) {
            Some((min, max)) if max > min && !global_fallback => Some((min, max)),
            _ => None,
        };
        self.state.quintiles = Some(quintiles);
        self.state.pop_range = pop_range;

        effects.push(Effect::Legend(LegendUpdate {
            metric_label: self.state.metric.label(),
            quintiles,
            sample_size: values.len(),
            small_sample: self.state.scope == ViewScope::Local
                && !global_fallback
                && values.len() < SMALL_SAMPLE_LIMIT,
            global_fallback,
        }));

        match self.state.visual {
            VisualMode::Bubbles => {
                let ctx = RenderContext {
                    metric: self.state.metric,
                    quintiles,
                    zoom: self.zoom,
                    pop_range: match self.state.scope {
                        ViewScope::Local => pop_range,
                        ViewScope::Global => None,
                    },
                    bounded: self.state.draw == DrawState::Bound,
                };
                let layer = build_marker_layer(&self.dataset, &render_indices, &ctx);
                effects.push(Effect::SwapMarkers(layer));
            }
            VisualMode::Boundaries => {
                let tier = GeometryTier::for_zoom(self.zoom);
                match self.tiers.get(tier) {
                    Some(geometry) => {
                        let layer = build_boundary_layer(
                            &self.dataset,
                            &render_indices,
                            geometry,
                            self.state.metric,
                            &quintiles,
                            self.zoom,
                        );
                        effects.push(Effect::SwapBoundaries(layer));
                    }
                    None => {
                        // Keep the previous layer on screen until the tier
                        // arrives; no flicker to an empty view.
                        let key = ResourceKey::Tier(tier);
                        if self.ledger.begin(key) {
                            effects.push(Effect::Fetch(key));
                        }
                    }
                }
            }
        }
        effects
    }

    fn request_state_overlay(&mut self, now: Tick) -> Vec<Effect> {
        let key = ResourceKey::StateOverlay(StateResolution::for_zoom(self.zoom));
        if self.ledger.begin(key) {
            self.bus.emit(now, "stream", format!("requesting {}", key.describe()));
            return vec![Effect::Fetch(key)];
        }
        Vec::new()
    }

    /// Population min/max over the records that feed the statistics.
    fn population_range(&self, indices: &[usize]) -> Option<(u32, u32)> {
        let mut range: Option<(u32, u32)> = None;
        for &i in indices {
            let record = &self.dataset.records()[i];
            if record.value(self.state.metric).is_none() {
                continue;
            }
            range = Some(match range {
                Some((min, max)) => (min.min(record.population), max.max(record.population)),
                None => (record.population, record.population),
            });
        }
        range
    }

    fn global_quintiles_for(&mut self, metric: Metric) -> Option<Quintiles> {
        if let Some(cached) = self.global_quintiles.get(&metric) {
            return *cached;
        }
        let values: Vec<f64> = self
            .dataset
            .records()
            .iter()
            .filter_map(|r| r.value(metric))
            .collect();
        let quintiles = Quintiles::nearest_rank(&values);
        self.global_quintiles.insert(metric, quintiles);
        quintiles
    }
}
