// `data-*` overrides for the backdrop configuration.
//
// Values arrive as raw attribute strings. Anything unparsable or out of range
// is logged and skipped, leaving the default in place.

use crate::constants::{
    CONNECTION_DISTANCE_ATTRIBUTE, DURATION_MS_ATTRIBUTE, GRAPH_ATTRIBUTE,
    MAX_CONNECTION_DISTANCE, MAX_DURATION_MS, MAX_PARTICLE_COUNT, MIN_DURATION_MS,
    PARTICLE_COUNT_ATTRIBUTE, SEED_ATTRIBUTE,
};
use backdrop_core::{BackdropConfig, SectionGraph};
use std::fmt::Display;
use std::str::FromStr;

/// Raw attribute values read off the canvas element.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Overrides {
    pub particle_count: Option<String>,
    pub connection_distance: Option<String>,
    pub duration_ms: Option<String>,
    pub seed: Option<String>,
    pub graph: Option<String>,
}

pub fn apply_overrides(config: &mut BackdropConfig, raw: &Overrides) {
    if let Some(count) = parse_within(
        PARTICLE_COUNT_ATTRIBUTE,
        raw.particle_count.as_deref(),
        |n: &usize| (1..=MAX_PARTICLE_COUNT).contains(n),
    ) {
        config.field.count = count;
    }
    if let Some(distance) = parse_within(
        CONNECTION_DISTANCE_ATTRIBUTE,
        raw.connection_distance.as_deref(),
        |d: &f32| d.is_finite() && *d > 0.0 && *d <= MAX_CONNECTION_DISTANCE,
    ) {
        config.field.connection_distance = distance;
    }
    if let Some(duration) = parse_within(
        DURATION_MS_ATTRIBUTE,
        raw.duration_ms.as_deref(),
        |d: &f64| (MIN_DURATION_MS..=MAX_DURATION_MS).contains(d),
    ) {
        config.navigation.duration_ms = duration;
    }
    if let Some(seed) = parse_within(SEED_ATTRIBUTE, raw.seed.as_deref(), |_: &u64| true) {
        config.field.seed = Some(seed);
    }
}

/// Section layout named by `data-graph`. Unknown names fall back to the hub.
pub fn graph_for(raw: &Overrides) -> SectionGraph {
    match raw.graph.as_deref().map(|g| g.trim().to_ascii_lowercase()) {
        None => SectionGraph::reference(),
        Some(name) => match name.as_str() {
            "hub" => SectionGraph::reference(),
            "mesh" => {
                log::info!("[config] {}={}", GRAPH_ATTRIBUTE, name);
                SectionGraph::mesh()
            }
            _ => {
                log::warn!("[config] ignoring {}={:?}", GRAPH_ATTRIBUTE, name);
                SectionGraph::reference()
            }
        },
    }
}

fn parse_within<T>(name: &str, raw: Option<&str>, accept: impl Fn(&T) -> bool) -> Option<T>
where
    T: FromStr + Display,
    T::Err: Display,
{
    let raw = raw?;
    match raw.trim().parse::<T>() {
        Ok(value) if accept(&value) => {
            log::info!("[config] {}={}", name, value);
            Some(value)
        }
        Ok(value) => {
            log::warn!("[config] ignoring {}={}: out of range", name, value);
            None
        }
        Err(e) => {
            log::warn!("[config] ignoring {}={:?}: {}", name, raw, e);
            None
        }
    }
}
