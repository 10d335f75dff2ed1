use crate::section::Section;
use thiserror::Error;

/// Errors surfaced to the page that drives the backdrop.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum NavError {
    #[error("unknown section id `{0}` (expected home, music, shows, about or contact)")]
    UnknownSection(String),
    #[error("viewport must be non-empty, got {width}x{height}")]
    InvalidViewport { width: f32, height: f32 },
}

/// Reasons a section graph cannot be built.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    #[error("section `{0}` has no node")]
    MissingSection(Section),
    #[error("section `{0}` is declared more than once")]
    DuplicateSection(Section),
    #[error("edge from `{0}` to itself")]
    SelfLoop(Section),
    #[error("no route from `{from}` to `{to}`")]
    Disconnected { from: Section, to: Section },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AnimatorError {
    #[error("a navigation run is already in progress")]
    Busy,
    #[error("route needs at least two waypoints, got {0}")]
    RouteTooShort(usize),
}
