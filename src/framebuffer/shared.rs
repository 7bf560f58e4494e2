//! Lock-guarded surface for embedders that draw from more than one context.
use spin::{Mutex, MutexGuard};

use crate::framebuffer::surface::Surface;

/// A [`Surface`] behind a spin lock. Every drawing session takes the lock
/// for its whole duration, so calls from different contexts never interleave.
pub struct SharedSurface {
    inner: Mutex<Surface>,
}

impl SharedSurface {
    pub const fn new(surface: Surface) -> Self {
        Self {
            inner: Mutex::new(surface),
        }
    }

    pub fn lock(&self) -> MutexGuard<'_, Surface> {
        self.inner.lock()
    }

    /// Run `f` with exclusive access to the surface.
    pub fn with<R>(&self, f: impl FnOnce(&mut Surface) -> R) -> R {
        let mut guard = self.inner.lock();
        f(&mut *guard)
    }

    pub fn into_inner(self) -> Surface {
        self.inner.into_inner()
    }
}
