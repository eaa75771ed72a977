//! Framebuffer side of the driver: device handle, surface manager,
//! shadow transforms and colormap handling.

pub mod colormap;
pub mod device;
pub mod palette;
pub mod shadow;
pub mod surface;

pub use device::FbDevice;
pub use shadow::ShadowUpdate;
pub use surface::{Rotation, Surface, SurfaceConfig, VisualClass};
