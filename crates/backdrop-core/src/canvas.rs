//! Per-frame orchestration of the particle field, the section graph and the
//! navigation animator over a single owned drawing surface.

use crate::animator::NavigationAnimator;
use crate::config::BackdropConfig;
use crate::error::NavError;
use crate::field::ParticleField;
use crate::graph::{SectionGraph, SectionPath};
use crate::overlay::{self, Highlight};
use crate::section::Section;
use crate::surface::Surface;
use glam::Vec2;

pub type SectionListener = Box<dyn FnMut(Section)>;

/// What happened to a navigation request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NavigationOutcome {
    Started { path: SectionPath },
    /// Target is already the current section; nothing to animate.
    AlreadyThere,
    /// A run is in flight; the request was dropped.
    Busy,
}

/// Diagnostics for one rendered frame.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FrameReport {
    /// Simulation delta after clamping.
    pub delta_ms: f32,
    pub respawned: usize,
    pub camera_offset: Vec2,
    /// Navigator position while a run is drawn.
    pub navigator: Option<Vec2>,
    pub completed: Option<Section>,
}

pub struct BackgroundCanvas<S: Surface> {
    surface: S,
    config: BackdropConfig,
    graph: SectionGraph,
    field: ParticleField,
    animator: NavigationAnimator,
    viewport: Vec2,
    current: Section,
    hovered: Option<Section>,
    last_frame_ms: Option<f64>,
    generation: u64,
    listeners: Vec<SectionListener>,
}

impl<S: Surface> BackgroundCanvas<S> {
    /// Fails when the surface reports an empty size.
    pub fn new(surface: S, graph: SectionGraph, config: BackdropConfig) -> Result<Self, NavError> {
        let viewport = surface.size();
        let field = ParticleField::initialize(viewport.x, viewport.y, config.field.clone())?;
        let animator = NavigationAnimator::new(config.navigation.easing);
        log::info!(
            "[backdrop] {:.0}x{:.0}, {} particles, {} section edges",
            viewport.x,
            viewport.y,
            field.len(),
            graph.edges().len()
        );
        Ok(Self {
            surface,
            config,
            graph,
            field,
            animator,
            viewport,
            current: Section::Home,
            hovered: None,
            last_frame_ms: None,
            generation: 0,
            listeners: Vec::new(),
        })
    }

    /// Called with the target section each time a run completes.
    pub fn on_section_change(&mut self, listener: impl FnMut(Section) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Parse `target_id` and request a transition. Unknown ids fail without
    /// touching any state.
    pub fn request_section_change(
        &mut self,
        target_id: &str,
        now_ms: f64,
    ) -> Result<NavigationOutcome, NavError> {
        let target = target_id.parse::<Section>()?;
        Ok(self.request_section(target, now_ms))
    }

    pub fn request_section(&mut self, target: Section, now_ms: f64) -> NavigationOutcome {
        if self.animator.is_running() {
            log::warn!(
                "[nav] request for {} ignored: run already in progress",
                target
            );
            return NavigationOutcome::Busy;
        }
        if target == self.current {
            return NavigationOutcome::AlreadyThere;
        }

        let route = self
            .graph
            .route(self.current, target, self.viewport.x, self.viewport.y);
        let path = route.sections.clone();
        match self
            .animator
            .start(route, now_ms, self.config.navigation.duration_ms)
        {
            Ok(()) => {
                log::info!(
                    "[nav] {} -> {} via {} hop(s)",
                    self.current,
                    target,
                    path.len() - 1
                );
                NavigationOutcome::Started { path }
            }
            Err(e) => {
                log::warn!("[nav] could not start {} -> {}: {}", self.current, target, e);
                NavigationOutcome::Busy
            }
        }
    }

    /// One simulation and render step at wall time `now_ms`.
    pub fn frame(&mut self, now_ms: f64) -> FrameReport {
        let delta_ms = match self.last_frame_ms {
            Some(last) => ((now_ms - last) as f32).clamp(0.0, self.config.max_frame_delta_ms),
            None => 0.0,
        };
        self.last_frame_ms = Some(now_ms);

        let respawned = self.field.step(delta_ms);

        let waypoints = self.animator.route().map(|r| r.waypoints.clone());
        let tick = self.animator.tick(now_ms);

        let mut report = FrameReport {
            delta_ms,
            respawned,
            ..FrameReport::default()
        };
        if let (Some(t), Some(points)) = (&tick, &waypoints) {
            if t.completed.is_none() {
                let start = points.first().copied().unwrap_or(t.position);
                report.camera_offset = (start - t.position) * self.config.camera_parallax;
                report.navigator = Some(t.position);
            }
        }
        if let Some(target) = tick.and_then(|t| t.completed) {
            log::info!("[nav] arrived at {}", target);
            self.current = target;
            report.completed = Some(target);
            for listener in &mut self.listeners {
                listener(target);
            }
        }

        match self.config.fade {
            Some(color) => self.surface.wash(color),
            None => self.surface.clear(),
        }
        self.field
            .render(&mut self.surface, report.camera_offset, &self.config.palette);

        if self.config.show_graph {
            let highlight = Highlight {
                active: report.navigator.is_none().then_some(self.current),
                hovered: self.hovered,
            };
            overlay::draw_graph(
                &mut self.surface,
                &self.graph,
                self.viewport,
                &self.config.palette,
                highlight,
            );
        }
        if let (Some(position), Some(points)) = (report.navigator, &waypoints) {
            overlay::draw_navigator(&mut self.surface, points, position, &self.config.palette);
        }

        report
    }

    /// Rebuild for a new viewport. Any run in flight is cancelled because its
    /// waypoints were projected for the old size.
    pub fn resize(&mut self, width: f32, height: f32) -> Result<(), NavError> {
        if self.animator.cancel() {
            log::info!(
                "[nav] resize to {:.0}x{:.0} cancelled the running transition",
                width,
                height
            );
        }
        self.generation = self.generation.wrapping_add(1);
        let mut field_config = self.config.field.clone();
        field_config.seed = field_config
            .seed
            .map(|s| s ^ self.generation.wrapping_mul(0x9E37_79B9_7F4A_7C15));
        self.field = ParticleField::initialize(width, height, field_config)?;
        self.viewport = Vec2::new(width, height);
        Ok(())
    }

    /// Abort a run without notifying listeners.
    pub fn cancel_navigation(&mut self) -> bool {
        self.animator.cancel()
    }

    /// Section under a pixel position, if any.
    pub fn hit_test(&self, point: Vec2) -> Option<Section> {
        self.graph.hit_test(point, self.viewport.x, self.viewport.y)
    }

    pub fn set_hovered(&mut self, hovered: Option<Section>) {
        self.hovered = hovered;
    }

    #[inline]
    pub fn hovered(&self) -> Option<Section> {
        self.hovered
    }

    #[inline]
    pub fn current_section(&self) -> Section {
        self.current
    }

    #[inline]
    pub fn is_navigating(&self) -> bool {
        self.animator.is_running()
    }

    #[inline]
    pub fn viewport(&self) -> Vec2 {
        self.viewport
    }

    #[inline]
    pub fn field(&self) -> &ParticleField {
        &self.field
    }

    #[inline]
    pub fn animator(&self) -> &NavigationAnimator {
        &self.animator
    }

    #[inline]
    pub fn graph(&self) -> &SectionGraph {
        &self.graph
    }

    #[inline]
    pub fn config(&self) -> &BackdropConfig {
        &self.config
    }

    #[inline]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    #[inline]
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }
}
