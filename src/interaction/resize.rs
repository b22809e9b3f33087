use std::cell::Cell;
use std::rc::Rc;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

/// Host-side identity of an observable container element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ElementHandle(pub u64);

/// Registration returned by a `ResizeSource`, used to disconnect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObserverToken(pub u64);

pub type ResizeListener = Box<dyn FnMut(f64)>;

/// Platform layout engine reporting content-box widths.
///
/// Debouncing, if any, belongs to the implementation.
pub trait ResizeSource {
    fn observe(&mut self, target: ElementHandle, listener: ResizeListener) -> ObserverToken;

    fn disconnect(&mut self, token: ObserverToken);
}

/// Observes one container and republishes its width.
///
/// Width reads `0.0` until the first report. Observation is released when
/// the target changes, on `detach`, and on drop.
pub struct ResizeObserver<S: ResizeSource> {
    source: S,
    target: Option<ElementHandle>,
    token: Option<ObserverToken>,
    width: Rc<Cell<f64>>,
}

impl<S: ResizeSource> ResizeObserver<S> {
    #[must_use]
    pub fn new(source: S) -> Self {
        Self {
            source,
            target: None,
            token: None,
            width: Rc::new(Cell::new(0.0)),
        }
    }

    /// Starts observing `target`, forwarding each reported width to `on_width`.
    ///
    /// Re-attaching the current target is a no-op; a different target
    /// replaces the previous observation.
    pub fn attach<F>(&mut self, target: ElementHandle, mut on_width: F)
    where
        F: FnMut(f64) + 'static,
    {
        if self.target == Some(target) {
            return;
        }
        self.detach();

        let width = Rc::clone(&self.width);
        let listener: ResizeListener = Box::new(move |next| {
            trace!(width = next, "container resized");
            width.set(next);
            on_width(next);
        });
        self.token = Some(self.source.observe(target, listener));
        self.target = Some(target);
        debug!(target = target.0, "observing container");
    }

    pub fn detach(&mut self) {
        if let Some(token) = self.token.take() {
            self.source.disconnect(token);
            debug!(target = ?self.target.map(|t| t.0), "stopped observing container");
        }
        self.target = None;
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.width.get()
    }

    #[must_use]
    pub fn target(&self) -> Option<ElementHandle> {
        self.target
    }

    #[must_use]
    pub fn is_observing(&self) -> bool {
        self.token.is_some()
    }

    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }
}

impl<S: ResizeSource> Drop for ResizeObserver<S> {
    fn drop(&mut self) {
        self.detach();
    }
}

/// In-process `ResizeSource` driven by explicit `emit` calls.
///
/// Used by headless hosts and tests.
#[derive(Default)]
pub struct ManualResizeSource {
    next_token: u64,
    listeners: Vec<(ObserverToken, ElementHandle, ResizeListener)>,
}

impl ManualResizeSource {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reports a new width for `target`. Returns the number of listeners notified.
    pub fn emit(&mut self, target: ElementHandle, width: f64) -> usize {
        let mut notified = 0;
        for (_, observed, listener) in &mut self.listeners {
            if *observed == target {
                listener(width);
                notified += 1;
            }
        }
        notified
    }

    #[must_use]
    pub fn active_observations(&self) -> usize {
        self.listeners.len()
    }
}

impl ResizeSource for ManualResizeSource {
    fn observe(&mut self, target: ElementHandle, listener: ResizeListener) -> ObserverToken {
        let token = ObserverToken(self.next_token);
        self.next_token += 1;
        self.listeners.push((token, target, listener));
        token
    }

    fn disconnect(&mut self, token: ObserverToken) {
        self.listeners.retain(|(registered, _, _)| *registered != token);
    }
}
