//! Error types for the windowed launcher.
//!
//! Only launcher startup can fail loudly. Once a window is up, environmental
//! problems (no surface, no scheduling) are downgraded to the quiet
//! complete-with-no-effect path; a decorative effect never propagates a
//! fault into the action that triggered it.

use std::fmt;

/// Errors that can occur while bringing up the windowed launcher.
#[derive(Debug)]
pub enum LaunchError {
    /// Failed to create the event loop.
    EventLoop(winit::error::EventLoopError),
    /// Failed to create the window.
    Window(winit::error::OsError),
    /// Failed to create a presentation surface.
    SurfaceCreation(wgpu::CreateSurfaceError),
    /// No compatible GPU adapter found.
    NoAdapter,
    /// Failed to create the GPU device.
    DeviceCreation(wgpu::RequestDeviceError),
}

impl fmt::Display for LaunchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LaunchError::EventLoop(e) => write!(f, "Failed to create event loop: {}", e),
            LaunchError::Window(e) => write!(f, "Failed to create window: {}", e),
            LaunchError::SurfaceCreation(e) => {
                write!(f, "Failed to create presentation surface: {}", e)
            }
            LaunchError::NoAdapter => {
                write!(f, "No compatible GPU adapter found for presenting the overlay.")
            }
            LaunchError::DeviceCreation(e) => write!(f, "Failed to create GPU device: {}", e),
        }
    }
}

impl std::error::Error for LaunchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LaunchError::EventLoop(e) => Some(e),
            LaunchError::Window(e) => Some(e),
            LaunchError::SurfaceCreation(e) => Some(e),
            LaunchError::DeviceCreation(e) => Some(e),
            LaunchError::NoAdapter => None,
        }
    }
}

impl From<winit::error::EventLoopError> for LaunchError {
    fn from(e: winit::error::EventLoopError) -> Self {
        LaunchError::EventLoop(e)
    }
}

impl From<winit::error::OsError> for LaunchError {
    fn from(e: winit::error::OsError) -> Self {
        LaunchError::Window(e)
    }
}

impl From<wgpu::CreateSurfaceError> for LaunchError {
    fn from(e: wgpu::CreateSurfaceError) -> Self {
        LaunchError::SurfaceCreation(e)
    }
}

impl From<wgpu::RequestDeviceError> for LaunchError {
    fn from(e: wgpu::RequestDeviceError) -> Self {
        LaunchError::DeviceCreation(e)
    }
}
