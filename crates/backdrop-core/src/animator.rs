//! Time-based traversal of a section route.
//!
//! `idle -> running -> idle`. Progress is recomputed from the wall clock on
//! every tick, so dropped frames never desynchronise the animation. A start
//! request while a run is active is rejected; the active run is untouched.

use crate::easing::Easing;
use crate::error::AnimatorError;
use crate::graph::Route;
use crate::section::Section;
use glam::Vec2;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Running,
}

/// Result of advancing a running animator.
#[derive(Clone, Debug, PartialEq)]
pub struct TickOutput {
    /// Linear fraction of the duration elapsed, 0..=1.
    pub progress: f32,
    pub eased: f32,
    /// Interpolated point along the route's waypoints.
    pub position: Vec2,
    /// Set on the single tick that finishes the run.
    pub completed: Option<Section>,
}

#[derive(Clone, Debug)]
struct Run {
    route: Route,
    start_ms: f64,
    duration_ms: f64,
    progress: f32,
}

#[derive(Clone, Debug, Default)]
pub struct NavigationAnimator {
    easing: Easing,
    run: Option<Run>,
}

impl NavigationAnimator {
    pub fn new(easing: Easing) -> Self {
        Self { easing, run: None }
    }

    #[inline]
    pub fn phase(&self) -> Phase {
        if self.run.is_some() {
            Phase::Running
        } else {
            Phase::Idle
        }
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.run.is_some()
    }

    #[inline]
    pub fn easing(&self) -> Easing {
        self.easing
    }

    /// Route of the active run.
    pub fn route(&self) -> Option<&Route> {
        self.run.as_ref().map(|r| &r.route)
    }

    /// Linear progress of the active run as of the last tick.
    pub fn progress(&self) -> Option<f32> {
        self.run.as_ref().map(|r| r.progress)
    }

    /// Begin traversing `route`. Rejected with [`AnimatorError::Busy`] while a
    /// run is active.
    pub fn start(
        &mut self,
        route: Route,
        start_ms: f64,
        duration_ms: f64,
    ) -> Result<(), AnimatorError> {
        if self.run.is_some() {
            return Err(AnimatorError::Busy);
        }
        let hops = route.waypoints.len().min(route.sections.len());
        if hops < 2 {
            return Err(AnimatorError::RouteTooShort(hops));
        }
        self.run = Some(Run {
            route,
            start_ms,
            duration_ms,
            progress: 0.0,
        });
        Ok(())
    }

    /// Advance to `now_ms`. Returns `None` while idle. The tick that reaches
    /// the end reports the target section and leaves the animator idle, so
    /// completion is delivered once.
    pub fn tick(&mut self, now_ms: f64) -> Option<TickOutput> {
        let run = self.run.as_mut()?;
        let linear = elapsed_fraction(now_ms - run.start_ms, run.duration_ms);
        run.progress = run.progress.max(linear);

        let eased = self.easing.apply(run.progress);
        let position = interpolate(&run.route.waypoints, eased);

        if run.progress < 1.0 {
            return Some(TickOutput {
                progress: run.progress,
                eased,
                position,
                completed: None,
            });
        }

        let completed = self.run.take().and_then(|r| r.route.target());
        Some(TickOutput {
            progress: 1.0,
            eased,
            position,
            completed,
        })
    }

    /// Drop the active run without reporting completion. Returns whether a run
    /// was active.
    pub fn cancel(&mut self) -> bool {
        self.run.take().is_some()
    }
}

fn elapsed_fraction(elapsed_ms: f64, duration_ms: f64) -> f32 {
    if duration_ms <= 0.0 || !duration_ms.is_finite() {
        return 1.0;
    }
    (elapsed_ms / duration_ms).clamp(0.0, 1.0) as f32
}

/// Point at fraction `t` of a polyline whose vertices are spaced evenly in
/// parameter space: `t * (n - 1)` picks the segment, the remainder lerps
/// within it.
pub fn interpolate(waypoints: &[Vec2], t: f32) -> Vec2 {
    match waypoints.len() {
        0 => Vec2::ZERO,
        1 => waypoints[0],
        n => {
            let scaled = t.clamp(0.0, 1.0) * (n - 1) as f32;
            let segment = (scaled.floor() as usize).min(n - 2);
            let local = scaled - segment as f32;
            waypoints[segment].lerp(waypoints[segment + 1], local)
        }
    }
}
