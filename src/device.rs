use crate::error::PlatformError;
use crate::types::DeviceCategory;

/// Handle to the system's device-category enumeration service.
///
/// Implementations release the underlying native handle when dropped.
pub trait DeviceEnumerationService {
    type Moniker: DeviceMoniker;
    type Monikers: Iterator<Item = Self::Moniker>;

    /// Open an enumerator over the devices registered under `category`.
    ///
    /// A category with no registered devices yields an empty iterator. The
    /// iterator ends at the first step that does not produce a device.
    fn class_enumerator(&self, category: DeviceCategory) -> Result<Self::Monikers, PlatformError>;
}

/// Opaque per-device handle, released when dropped.
pub trait DeviceMoniker {
    type PropertyBag: PropertyBag;

    fn bind_property_bag(&self) -> Result<Self::PropertyBag, PlatformError>;
}

/// Named, loosely typed properties of one device.
pub trait PropertyBag {
    /// Read a property as a string. `Ok(None)` means the property holds no
    /// string value.
    fn read_string(&self, name: &str) -> Result<Option<String>, PlatformError>;
}
