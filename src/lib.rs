//! Enumerate video input devices registered with the system device
//! enumerator.
//!
//! The enumeration core is generic over [`DeviceEnumerationService`]; the
//! native DirectShow backend lives in [`platform::windows`].

pub mod config;
pub mod device;
pub mod enumerator;
pub mod error;
pub mod identity;
pub mod platform;
pub mod types;

// Re-exports
pub use config::*;
pub use device::*;
pub use enumerator::*;
pub use error::{Error, PlatformError};
pub use identity::*;
pub use types::*;

#[cfg(windows)]
pub use platform::windows::WindowsDeviceService;
