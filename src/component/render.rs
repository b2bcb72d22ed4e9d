use std::cell::Cell;
use std::rc::Rc;

#[derive(Debug)]
struct RenderInner {
    name: &'static str,
    dirty: Cell<bool>,
    requests: Cell<u64>,
}

/// Re-render signal for one mounted component.
///
/// Hooks call [`request`](RenderHandle::request) when the data a component
/// shows has changed; the [`Host`](super::Host) re-renders every component
/// whose flag is set on its next flush. Several requests before a flush
/// collapse into one render.
#[derive(Debug, Clone)]
pub struct RenderHandle {
    inner: Rc<RenderInner>,
}

impl RenderHandle {
    pub fn new(name: &'static str) -> Self {
        Self {
            inner: Rc::new(RenderInner {
                name,
                dirty: Cell::new(false),
                requests: Cell::new(0),
            }),
        }
    }

    pub fn name(&self) -> &'static str {
        self.inner.name
    }

    /// Ask for the owning component to be rendered again.
    pub fn request(&self) {
        self.inner.requests.set(self.inner.requests.get() + 1);
        self.inner.dirty.set(true);
        tracing::trace!(component = self.inner.name, "re-render requested");
    }

    pub fn is_dirty(&self) -> bool {
        self.inner.dirty.get()
    }

    /// Clear the flag, returning whether it was set.
    pub fn take_dirty(&self) -> bool {
        self.inner.dirty.replace(false)
    }

    /// Total number of requests since creation.
    pub fn requests(&self) -> u64 {
        self.inner.requests.get()
    }
}
