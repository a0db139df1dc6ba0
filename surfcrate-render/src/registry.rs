//! Idempotent attachment of engines to surfaces

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use surfcrate_core::{SurfaceConfig, SurfaceId};

use crate::engine::Engine;
use crate::scheduler::EventLoop;
use crate::surface::RenderSurface;

/// Registry owning exactly one engine per surface
pub struct SurfaceRegistry<T> {
    event_loop: EventLoop,
    config: SurfaceConfig,
    engines: HashMap<SurfaceId, Engine<T>>,
}

impl<T: 'static> SurfaceRegistry<T> {
    /// Create a registry whose engines run on `event_loop`
    pub fn new(event_loop: EventLoop) -> Self {
        Self::with_config(event_loop, SurfaceConfig::default())
    }

    /// Create a registry whose new engines start from `config`
    pub fn with_config(event_loop: EventLoop, config: SurfaceConfig) -> Self {
        Self {
            event_loop,
            config,
            engines: HashMap::new(),
        }
    }

    /// Return the engine bound to `surface`, creating it on first use.
    ///
    /// Width and height are applied on every call; missing or zero values keep
    /// the current size.
    pub fn attach<S>(
        &mut self,
        surface: &Rc<RefCell<S>>,
        width: impl Into<Option<f64>>,
        height: impl Into<Option<f64>>,
    ) -> Engine<T>
    where
        S: RenderSurface<T> + 'static,
    {
        let id = surface.borrow().id();
        let engine = self
            .engines
            .entry(id)
            .or_insert_with(|| {
                log::info!("{}: attaching new engine", id);
                Engine::with_config(Rc::clone(surface), self.event_loop.clone(), &self.config)
            })
            .clone();

        engine.set_height(height);
        engine.set_width(width);
        engine
    }

    /// Engine bound to `id`, if any
    pub fn get(&self, id: SurfaceId) -> Option<Engine<T>> {
        self.engines.get(&id).cloned()
    }

    /// Remove the engine bound to `id`. Renders it still has queued become no-ops
    /// once every handle is dropped.
    pub fn detach(&mut self, id: SurfaceId) -> Option<Engine<T>> {
        self.engines.remove(&id)
    }

    pub fn len(&self) -> usize {
        self.engines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.engines.is_empty()
    }

    pub fn event_loop(&self) -> &EventLoop {
        &self.event_loop
    }
}
