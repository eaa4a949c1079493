use thiserror::Error;

/// Startup failures - required collaborators could not be acquired.
/// Always fatal; propagated out of `main`.
#[derive(Debug, Error)]
pub enum InitError {
    #[error("failed to create rendering surface: {0}")]
    Surface(#[from] wgpu::CreateSurfaceError),

    #[error("no compatible GPU adapter: {0}")]
    Adapter(#[from] wgpu::RequestAdapterError),

    #[error("failed to acquire GPU device: {0}")]
    Device(#[from] wgpu::RequestDeviceError),
}

/// A single entity failed its per-frame update.
/// Policy: log, skip the entity for this frame, keep the loop running.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("entity '{entity}' failed to update: {reason}")]
pub struct FrameUpdateError {
    pub entity: String,
    pub reason: String,
}

impl FrameUpdateError {
    pub fn new(entity: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            entity: entity.into(),
            reason: reason.into(),
        }
    }
}
