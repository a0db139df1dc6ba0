//! Surface engine: per-surface state, debounced redraws and the render pass

use std::cell::{Ref, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};

use surfcrate_core::{
    Error, GridView, Result, RotationMatrix, SurfaceConfig, SurfaceId, Turntable, ViewState,
};

use crate::decorations::{self, DecorationStyle};
use crate::frame::{Bounds, Frame, PathCommand, Transition};
use crate::projection::{self, Projector};
use crate::quad::{depth_sort, extract_quads};
use crate::scheduler::{EventLoop, PendingTask};
use crate::surface::RenderSurface;
use crate::transition::TransitionHandle;

/// Height of a sample: `(sample, row, col) -> height`
pub type HeightFn<T> = Rc<dyn Fn(&T, usize, usize) -> f64>;

/// Fill colour of a sample, e.g. `"rgb(r,g,b)"`
pub type ColorFn<T> = Rc<dyn Fn(&T) -> String>;

struct EngineState<T> {
    view: ViewState,
    turntable: Turntable,
    rotation: RotationMatrix,
    height_fn: Option<HeightFn<T>>,
    color_fn: Option<ColorFn<T>>,
    transition: Option<Transition>,
    pending: PendingTask,
    precision: usize,
    decorations: Option<DecorationStyle>,
    renders: usize,
}

struct Shared<T> {
    id: SurfaceId,
    state: RefCell<EngineState<T>>,
    surface: Rc<RefCell<dyn RenderSurface<T>>>,
    event_loop: EventLoop,
}

/// Handle to the engine rendering one surface.
///
/// Clones share the same state. Every mutator updates its field immediately
/// and re-arms a single deferred render on the engine's [`EventLoop`], so a
/// burst of mutations produces one render on the next turn.
pub struct Engine<T> {
    shared: Rc<Shared<T>>,
}

impl<T> Clone for Engine<T> {
    fn clone(&self) -> Self {
        Self {
            shared: Rc::clone(&self.shared),
        }
    }
}

impl<T> fmt::Debug for Engine<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.shared.state.borrow();
        f.debug_struct("Engine")
            .field("id", &self.shared.id)
            .field("view", &state.view)
            .field("turntable", &state.turntable)
            .field("renders", &state.renders)
            .finish_non_exhaustive()
    }
}

impl<T: 'static> Engine<T> {
    /// Create an engine with the default configuration
    pub fn new<S>(surface: Rc<RefCell<S>>, event_loop: EventLoop) -> Self
    where
        S: RenderSurface<T> + 'static,
    {
        Self::with_config(surface, event_loop, &SurfaceConfig::default())
    }

    /// Create an engine from `config`. An initial render is armed straight away.
    pub fn with_config<S>(surface: Rc<RefCell<S>>, event_loop: EventLoop, config: &SurfaceConfig) -> Self
    where
        S: RenderSurface<T> + 'static,
    {
        let id = surface.borrow().id();
        let turntable = config.turntable();
        let decorations = config.decorations.then(|| DecorationStyle {
            axis_style: config.axis_style.clone(),
            marker_radius: config.marker_radius,
        });

        let state = EngineState {
            view: config.view(),
            turntable,
            rotation: turntable.matrix(),
            height_fn: None,
            color_fn: None,
            transition: None,
            pending: PendingTask::new(),
            precision: config.precision,
            decorations,
            renders: 0,
        };

        let engine = Self {
            shared: Rc::new(Shared {
                id,
                state: RefCell::new(state),
                surface,
                event_loop,
            }),
        };
        log::debug!("{}: engine created", id);
        engine.schedule_render();
        engine
    }

    /// Identity of the bound surface
    pub fn id(&self) -> SurfaceId {
        self.shared.id
    }

    pub fn event_loop(&self) -> &EventLoop {
        &self.shared.event_loop
    }

    pub fn view(&self) -> ViewState {
        self.state().view
    }

    pub fn turntable(&self) -> Turntable {
        self.state().turntable
    }

    /// Rotation derived from the current turntable orientation
    pub fn rotation(&self) -> RotationMatrix {
        self.state().rotation
    }

    /// Number of render passes run so far
    pub fn render_count(&self) -> usize {
        self.state().renders
    }

    /// Whether a deferred render is armed and has not run yet
    pub fn is_render_pending(&self) -> bool {
        self.state().pending.is_armed()
    }

    pub fn has_height_fn(&self) -> bool {
        self.state().height_fn.is_some()
    }

    /// Set yaw and pitch in radians and recompute the rotation.
    /// Non-finite angles are ignored.
    pub fn set_rotation(&self, yaw: f64, pitch: f64) -> &Self {
        if !(yaw.is_finite() && pitch.is_finite()) {
            log::warn!("{}: ignoring invalid rotation ({}, {})", self.id(), yaw, pitch);
            return self;
        }
        log::debug!("{}: set_rotation({}, {})", self.id(), yaw, pitch);
        {
            let mut state = self.shared.state.borrow_mut();
            state.turntable = Turntable::new(yaw, pitch);
            state.rotation = state.turntable.matrix();
        }
        self.schedule_render();
        self
    }

    /// Set the zoom level. Negative or non-finite values are ignored.
    pub fn set_zoom(&self, zoom: f64) -> &Self {
        let accepted = self.shared.state.borrow_mut().view.set_zoom(zoom);
        if accepted {
            log::debug!("{}: set_zoom({})", self.id(), zoom);
            self.schedule_render();
        } else {
            log::warn!("{}: ignoring invalid zoom {}", self.id(), zoom);
        }
        self
    }

    /// Set the display width. Missing or zero widths leave it unchanged.
    pub fn set_width(&self, width: impl Into<Option<f64>>) -> &Self {
        let width = width.into();
        let accepted = self.shared.state.borrow_mut().view.set_width(width);
        if accepted {
            log::debug!("{}: set_width({:?})", self.id(), width);
            self.schedule_render();
        } else {
            log::warn!("{}: ignoring invalid width {:?}", self.id(), width);
        }
        self
    }

    /// Set the display height. Missing or zero heights leave it unchanged.
    pub fn set_height(&self, height: impl Into<Option<f64>>) -> &Self {
        let height = height.into();
        let accepted = self.shared.state.borrow_mut().view.set_height(height);
        if accepted {
            log::debug!("{}: set_height({:?})", self.id(), height);
            self.schedule_render();
        } else {
            log::warn!("{}: ignoring invalid height {:?}", self.id(), height);
        }
        self
    }

    /// Set the function mapping `(sample, row, col)` to a height
    pub fn set_height_fn<F>(&self, height_fn: F) -> &Self
    where
        F: Fn(&T, usize, usize) -> f64 + 'static,
    {
        log::debug!("{}: set_height_fn", self.id());
        self.shared.state.borrow_mut().height_fn = Some(Rc::new(height_fn));
        self.schedule_render();
        self
    }

    /// Set the function mapping a sample to its fill colour
    pub fn set_color_fn<F>(&self, color_fn: F) -> &Self
    where
        F: Fn(&T) -> String + 'static,
    {
        log::debug!("{}: set_color_fn", self.id());
        self.shared.state.borrow_mut().color_fn = Some(Rc::new(color_fn));
        self.schedule_render();
        self
    }

    /// Remove the colour function; later renders leave fills untouched
    pub fn clear_color_fn(&self) -> &Self {
        self.shared.state.borrow_mut().color_fn = None;
        self.schedule_render();
        self
    }

    /// Turn the axis/marker overlay on or off
    pub fn set_decorations(&self, style: Option<DecorationStyle>) -> &Self {
        self.shared.state.borrow_mut().decorations = style;
        self.schedule_render();
        self
    }

    /// Capture a transition for the next render only.
    ///
    /// Delay and duration start from the transition running on the surface,
    /// if any. No render is armed; the next mutation (or a mutator called on
    /// the returned handle) picks the transition up.
    pub fn request_transition(&self) -> TransitionHandle<T> {
        let initial = self
            .shared
            .surface
            .borrow()
            .current_transition()
            .unwrap_or_default();
        log::debug!("{}: transition requested {:?}", self.id(), initial);
        self.shared.state.borrow_mut().transition = Some(initial);
        TransitionHandle::new(self.clone())
    }

    pub(crate) fn update_transition(&self, update: impl FnOnce(&mut Transition)) {
        if let Some(transition) = self.shared.state.borrow_mut().transition.as_mut() {
            update(transition);
        }
    }

    pub(crate) fn pending_transition(&self) -> Option<Transition> {
        self.state().transition
    }

    /// Render immediately and bind the result to the surface.
    ///
    /// No engine state is borrowed while caller callbacks run, so they may
    /// call mutators; those schedule a render for a later turn.
    pub fn render_now(&self) -> Result<Frame> {
        let shared = &self.shared;
        // A transition requested from inside a callback belongs to the next render.
        let (height_fn, color_fn, projector, precision, style, transition) = {
            let mut state = shared.state.borrow_mut();
            state.renders += 1;
            (
                state.height_fn.clone(),
                state.color_fn.clone(),
                Projector::new(state.rotation, state.view),
                state.precision,
                state.decorations.clone(),
                state.transition.take(),
            )
        };

        let Some(height_fn) = height_fn else {
            log::debug!(
                "{}: {}, rendering empty scene",
                shared.id,
                Error::ConfigurationIncomplete("no height function".to_string())
            );
            let frame = Frame::empty(transition);
            shared.surface.borrow_mut().bind(&frame);
            return Ok(frame);
        };

        let datum = shared.surface.borrow().datum();
        let rows: &[Vec<T>] = datum.as_deref().map(Vec::as_slice).unwrap_or(&[]);
        let grid = match GridView::new(rows) {
            Ok(grid) => grid,
            Err(e) => {
                // failed renders leave the transition for the next attempt
                let mut state = shared.state.borrow_mut();
                if state.transition.is_none() {
                    state.transition = transition;
                }
                return Err(e.with_surface(shared.id));
            }
        };

        let heights = projection::heights(&grid, |sample, r, c| height_fn(sample, r, c));
        let projected = projector.project_grid(&grid, &heights);
        let mut quads = extract_quads(&grid, &projected);
        depth_sort(&mut quads);

        let bounds = quads.iter().map(|q| q.extent()).fold(None, |acc: Option<Bounds>, e| {
            Some(match acc {
                Some(b) => b.include(e),
                None => Bounds {
                    min_x: e.0,
                    min_y: e.1,
                    max_x: e.2,
                    max_y: e.3,
                },
            })
        });

        let paths = quads
            .iter()
            .map(|q| PathCommand {
                d: q.path_data(precision),
                fill: color_fn.as_ref().map(|color| color(q.sample)),
                depth: q.depth,
                cell: (q.row, q.col),
            })
            .collect::<Vec<_>>();

        let overlays = style
            .map(|style| decorations::build(&projected, &style))
            .unwrap_or_default();

        let frame = Frame {
            paths,
            overlays,
            transition,
            bounds,
        };
        log::debug!(
            "{}: rendered {} quads from {}x{} grid",
            shared.id,
            frame.paths.len(),
            grid.rows(),
            grid.cols()
        );
        shared.surface.borrow_mut().bind(&frame);
        Ok(frame)
    }

    fn state(&self) -> Ref<'_, EngineState<T>> {
        self.shared.state.borrow()
    }

    fn schedule_render(&self) {
        let weak: Weak<Shared<T>> = Rc::downgrade(&self.shared);
        let mut state = self.shared.state.borrow_mut();
        state.pending.arm(&self.shared.event_loop, move || {
            let Some(shared) = weak.upgrade() else {
                return Ok(());
            };
            shared.state.borrow_mut().pending.disarm();
            Engine { shared }.render_now().map(|_| ())
        });
    }
}
