//! DirectShow system device enumerator backend.

use crate::config::EnumeratorConfig;
use crate::enumerator::SystemDeviceEnumerator;
use crate::error::Error;
use crate::types::Guid;

pub mod apartment;
pub mod service;

pub use service::{WindowsDeviceService, WindowsMoniker, WindowsMonikers, WindowsPropertyBag};

impl SystemDeviceEnumerator<WindowsDeviceService> {
    /// Connect to the system device enumerator with the default configuration.
    pub fn new() -> Result<Self, Error> {
        Self::with_config(&EnumeratorConfig::default())
    }

    pub fn with_config(config: &EnumeratorConfig) -> Result<Self, Error> {
        Self::open_with(|| WindowsDeviceService::new(config))
    }
}

fn to_win_guid(guid: Guid) -> windows::core::GUID {
    windows::core::GUID::from_u128(guid.as_u128())
}
