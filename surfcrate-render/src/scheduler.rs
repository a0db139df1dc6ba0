//! Single-threaded deferred task execution
//!
//! An [`EventLoop`] runs deferred tasks one per turn, in the order they were
//! queued. A [`PendingTask`] is a single slot on top of it: arming the slot
//! cancels whatever it held before, so a burst of requests collapses into one
//! trailing execution.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::fmt;
use std::rc::Rc;

use surfcrate_core::Result;

/// Identifier of a deferred task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskId(u64);

type Task = Box<dyn FnOnce() -> Result<()>>;

#[derive(Default)]
struct LoopInner {
    next_id: u64,
    queue: VecDeque<(TaskId, Task)>,
    executed: usize,
}

/// Cooperative event loop shared by every engine bound to it
#[derive(Clone, Default)]
pub struct EventLoop {
    inner: Rc<RefCell<LoopInner>>,
}

impl fmt::Debug for EventLoop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("EventLoop")
            .field("pending", &inner.queue.len())
            .field("executed", &inner.executed)
            .finish()
    }
}

impl EventLoop {
    /// Create a new, idle event loop
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue `task` to run on a later turn
    pub fn defer<F>(&self, task: F) -> TaskId
    where
        F: FnOnce() -> Result<()> + 'static,
    {
        let mut inner = self.inner.borrow_mut();
        let id = TaskId(inner.next_id);
        inner.next_id += 1;
        inner.queue.push_back((id, Box::new(task)));
        id
    }

    /// Drop a queued task. Returns `false` if it already ran or was cancelled.
    pub fn cancel(&self, id: TaskId) -> bool {
        let mut inner = self.inner.borrow_mut();
        match inner.queue.iter().position(|(queued, _)| *queued == id) {
            Some(index) => {
                inner.queue.remove(index);
                true
            }
            None => false,
        }
    }

    /// Number of queued tasks
    pub fn pending(&self) -> usize {
        self.inner.borrow().queue.len()
    }

    pub fn is_idle(&self) -> bool {
        self.pending() == 0
    }

    /// Number of tasks run so far
    pub fn executed(&self) -> usize {
        self.inner.borrow().executed
    }

    /// Run the next queued task, if any. Returns whether a task ran.
    ///
    /// The loop is not borrowed while the task runs, so the task may defer or
    /// cancel other tasks; anything it defers runs on a later turn.
    pub fn turn(&self) -> Result<bool> {
        let next = {
            let mut inner = self.inner.borrow_mut();
            let next = inner.queue.pop_front();
            if next.is_some() {
                inner.executed += 1;
            }
            next
        };

        match next {
            Some((_, task)) => {
                task()?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Run turns until the queue is empty, stopping at the first failing task.
    /// Returns the number of tasks run.
    pub fn run_until_idle(&self) -> Result<usize> {
        let mut ran = 0;
        while self.turn()? {
            ran += 1;
        }
        Ok(ran)
    }
}

/// Single-slot handle to at most one queued task
#[derive(Debug, Default)]
pub struct PendingTask {
    slot: Option<TaskId>,
}

impl PendingTask {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cancel the task held by the slot, if still queued, and queue `task` in its place
    pub fn arm<F>(&mut self, event_loop: &EventLoop, task: F) -> TaskId
    where
        F: FnOnce() -> Result<()> + 'static,
    {
        if let Some(previous) = self.slot.take() {
            event_loop.cancel(previous);
        }
        let id = event_loop.defer(task);
        self.slot = Some(id);
        id
    }

    /// Empty the slot without cancelling; called by the held task when it starts running
    pub fn disarm(&mut self) -> Option<TaskId> {
        self.slot.take()
    }

    pub fn is_armed(&self) -> bool {
        self.slot.is_some()
    }
}
