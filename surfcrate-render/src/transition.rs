//! One-shot animated updates

use std::fmt;

use crate::engine::Engine;
use crate::frame::Transition;

/// Handle returned by [`Engine::request_transition`].
///
/// Adjusts the transition captured for the next render. Once that render has
/// run the handle no longer has any effect on timing, though its callback
/// setters still forward to the engine.
pub struct TransitionHandle<T> {
    engine: Engine<T>,
}

impl<T> Clone for TransitionHandle<T> {
    fn clone(&self) -> Self {
        Self {
            engine: self.engine.clone(),
        }
    }
}

impl<T> fmt::Debug for TransitionHandle<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransitionHandle")
            .field("engine", &self.engine)
            .finish()
    }
}

impl<T: 'static> TransitionHandle<T> {
    pub(crate) fn new(engine: Engine<T>) -> Self {
        Self { engine }
    }

    /// Delay before the update starts, in milliseconds
    pub fn delay(self, delay_ms: u64) -> Self {
        self.engine.update_transition(|t| t.delay_ms = delay_ms);
        self
    }

    /// Duration of the update, in milliseconds
    pub fn duration(self, duration_ms: u64) -> Self {
        self.engine.update_transition(|t| t.duration_ms = duration_ms);
        self
    }

    /// Set the engine's height function; the change is animated
    pub fn height_fn<F>(self, height_fn: F) -> Self
    where
        F: Fn(&T, usize, usize) -> f64 + 'static,
    {
        self.engine.set_height_fn(height_fn);
        self
    }

    /// Set the engine's colour function; the change is animated
    pub fn color_fn<F>(self, color_fn: F) -> Self
    where
        F: Fn(&T) -> String + 'static,
    {
        self.engine.set_color_fn(color_fn);
        self
    }

    /// Transition still waiting for a render, if any
    pub fn pending(&self) -> Option<Transition> {
        self.engine.pending_transition()
    }

    pub fn engine(&self) -> &Engine<T> {
        &self.engine
    }
}
