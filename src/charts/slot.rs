//! Chart Lifecycle
//!
//! A [`ChartSlot`] owns at most one live chart instance for one drawing
//! surface. Mounting always destroys the previous instance first, and a
//! missing surface skips the render without failing.

use thiserror::Error;

use super::spec::ChartSpec;

/// Errors raised by a chart backend
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ChartError {
    #[error("Drawing surface has no 2d context")]
    SurfaceUnavailable,

    #[error("Backend error: {0}")]
    Backend(String),
}

/// A rendered chart that can be torn down
pub trait ChartHandle {
    /// Release the chart's resources. Called exactly once per handle.
    fn destroy(&mut self);
}

/// Something that can draw a [`ChartSpec`] onto a surface
pub trait ChartBackend {
    type Surface;
    type Handle: ChartHandle;

    fn render(&self, surface: &Self::Surface, spec: &ChartSpec) -> Result<Self::Handle, ChartError>;
}

/// Holds the live chart for one surface
#[derive(Debug)]
pub struct ChartSlot<H: ChartHandle> {
    live: Option<H>,
}

impl<H: ChartHandle> Default for ChartSlot<H> {
    fn default() -> Self {
        Self { live: None }
    }
}

impl<H: ChartHandle> ChartSlot<H> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Render `spec` into `surface`, replacing any chart already here.
    ///
    /// Returns `Ok(false)` when the surface is not available yet.
    pub fn mount<B>(
        &mut self,
        backend: &B,
        surface: Option<&B::Surface>,
        spec: &ChartSpec,
    ) -> Result<bool, ChartError>
    where
        B: ChartBackend<Handle = H>,
    {
        self.unmount();

        let Some(surface) = surface else {
            tracing::debug!(chart = %spec.id, "No surface, skipping render");
            return Ok(false);
        };

        let handle = backend.render(surface, spec)?;
        tracing::debug!(chart = %spec.id, "Chart mounted");
        self.live = Some(handle);
        Ok(true)
    }

    /// Destroy the live chart, if any
    pub fn unmount(&mut self) {
        if let Some(mut handle) = self.live.take() {
            handle.destroy();
            tracing::debug!("Chart destroyed");
        }
    }

    pub fn is_live(&self) -> bool {
        self.live.is_some()
    }

    pub fn handle(&self) -> Option<&H> {
        self.live.as_ref()
    }

    pub fn handle_mut(&mut self) -> Option<&mut H> {
        self.live.as_mut()
    }
}

impl<H: ChartHandle> Drop for ChartSlot<H> {
    fn drop(&mut self) {
        self.unmount();
    }
}
