use crate::draw::DrawData;
use crate::gui::GuiIo;
use crate::render::RenderStats;
use crate::texture::TextureId;

use super::{Backend, BackendConfig, BackendError, Devices};

/// Lifecycle state of a [`BackendSlot`].
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum BackendState {
    Uninitialized,
    Ready,
}

/// The "current backend" of one GUI session.
///
/// Holds at most one [`Backend`] and enforces the call contract around it:
/// rendering without a backend is a no-op, while `new_frame` or `shutdown`
/// without one is a caller bug and panics.
#[derive(Debug, Default)]
pub struct BackendSlot {
    backend: Option<Backend>,
}

impl BackendSlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> BackendState {
        match self.backend {
            Some(_) => BackendState::Ready,
            None => BackendState::Uninitialized,
        }
    }

    pub fn is_ready(&self) -> bool {
        self.backend.is_some()
    }

    pub fn init(&mut self, io: &mut dyn GuiIo, devices: Devices, config: BackendConfig) -> Result<(), BackendError> {
        if let Some(backend) = &self.backend {
            let name = backend.config().name;
            log::error!("renderer backend '{name}' is already initialized");
            return Err(BackendError::AlreadyInitialized { name });
        }
        self.backend = Some(Backend::init(io, devices, config)?);
        Ok(())
    }

    /// # Panics
    ///
    /// Panics if no backend is initialized.
    pub fn shutdown(&mut self, io: &mut dyn GuiIo) {
        let Some(backend) = self.backend.take() else {
            panic!("no renderer backend to shutdown; already shut down?");
        };
        backend.shutdown(io);
    }

    /// # Panics
    ///
    /// Panics if no backend is initialized.
    pub fn new_frame(&mut self, io: &mut dyn GuiIo) {
        let Some(backend) = self.backend.as_mut() else {
            panic!("renderer backend not initialized; did you call init?");
        };
        backend.new_frame(io);
    }

    /// Renders a frame. Returns `None` without touching the display when there is
    /// no frame or no backend.
    pub fn render_draw_data(&mut self, draw_data: Option<&DrawData>) -> Option<RenderStats> {
        let backend = self.backend.as_mut()?;
        let draw_data = draw_data?;
        Some(backend.render_draw_data(draw_data))
    }

    pub fn create_texture(&mut self, rgba: &[u8], width: u32, height: u32) -> Result<TextureId, BackendError> {
        self.backend
            .as_mut()
            .ok_or(BackendError::NotInitialized)?
            .create_texture(rgba, width, height)
    }

    /// Frees a texture. A no-op without a backend.
    pub fn delete_texture(&mut self, id: TextureId) {
        if let Some(backend) = self.backend.as_mut() {
            backend.delete_texture(id);
        }
    }

    pub fn backend(&self) -> Option<&Backend> {
        self.backend.as_ref()
    }

    pub fn backend_mut(&mut self) -> Option<&mut Backend> {
        self.backend.as_mut()
    }
}
