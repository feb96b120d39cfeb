// Activity flag for the camera/inference loop.
//
// Each activation bumps a generation counter and hands out an
// [`ActivityToken`] bound to it. Async continuations (model load, camera
// permission) and every re-armed inference callback check their token first;
// once the session is deactivated, or reactivated under a newer generation,
// older tokens stay dead forever.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

#[derive(Debug, Default)]
struct Inner {
    active: Cell<bool>,
    generation: Cell<u64>,
}

#[derive(Clone, Debug, Default)]
pub struct ActivityFlag {
    inner: Rc<Inner>,
}

#[derive(Clone, Debug)]
pub struct ActivityToken {
    inner: Rc<Inner>,
    generation: u64,
}

impl ActivityFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.inner.active.get()
    }

    /// Start a new generation and return its token.
    pub fn activate(&self) -> ActivityToken {
        let generation = self.inner.generation.get().wrapping_add(1);
        self.inner.generation.set(generation);
        self.inner.active.set(true);
        ActivityToken {
            inner: self.inner.clone(),
            generation,
        }
    }

    /// Returns whether the flag was active before the call.
    pub fn deactivate(&self) -> bool {
        let was = self.inner.active.replace(false);
        self.inner
            .generation
            .set(self.inner.generation.get().wrapping_add(1));
        was
    }
}

impl ActivityToken {
    #[inline]
    pub fn is_live(&self) -> bool {
        self.inner.active.get() && self.inner.generation.get() == self.generation
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// What a caller of [`SharedLoad::acquire`] should do next.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Acquire<H, V> {
    /// Already loaded.
    Ready(V),
    /// Await this handle, then pass its outcome to [`SharedLoad::settle`].
    Pending(H),
}

/// Single-flight slot for an expensive async resource such as the hand
/// model. Overlapping activations share one in-flight handle; a failed load
/// leaves the slot empty so the next activation starts over.
#[derive(Debug)]
pub struct SharedLoad<H, V> {
    ready: RefCell<Option<V>>,
    pending: RefCell<Option<H>>,
}

impl<H, V> Default for SharedLoad<H, V> {
    fn default() -> Self {
        Self {
            ready: RefCell::new(None),
            pending: RefCell::new(None),
        }
    }
}

impl<H: Clone, V: Clone> SharedLoad<H, V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// `start` runs only when nothing is loaded or loading.
    pub fn acquire(&self, start: impl FnOnce() -> H) -> Acquire<H, V> {
        if let Some(v) = self.ready.borrow().clone() {
            return Acquire::Ready(v);
        }
        if let Some(h) = self.pending.borrow().clone() {
            return Acquire::Pending(h);
        }
        let h = start();
        *self.pending.borrow_mut() = Some(h.clone());
        Acquire::Pending(h)
    }

    /// Record a finished load. The first success is cached; every waiter
    /// gets the cached value back.
    pub fn settle<E>(&self, outcome: Result<V, E>) -> Result<V, E> {
        self.pending.borrow_mut().take();
        let v = outcome?;
        let mut ready = self.ready.borrow_mut();
        Ok(ready.get_or_insert(v).clone())
    }

    pub fn is_loading(&self) -> bool {
        self.pending.borrow().is_some()
    }

    #[allow(dead_code)]
    pub fn is_ready(&self) -> bool {
        self.ready.borrow().is_some()
    }
}
