use crate::device::{DeviceEnumerationService, DeviceMoniker, PropertyBag};
use crate::error::{Error, PlatformError, PropertyError};
use crate::identity::Identity;
use crate::types::{DEVICE_PATH_PROPERTY, DeviceCategory, FRIENDLY_NAME_PROPERTY};

/// Devices found by one listing, keyed by zero-based enumeration order.
///
/// Indices are only meaningful within a single listing. To recognise a device
/// across listings, compare [`Identity::instance_id`] instead.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnumerationResult {
    entries: Vec<Identity>,
}

impl EnumerationResult {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Identity> {
        self.entries.get(index)
    }

    /// Entries in index order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &Identity)> {
        self.entries.iter().enumerate()
    }

    /// First device whose normalized instance id equals `instance_id`.
    pub fn find_by_instance_id(&self, instance_id: &str) -> Option<(usize, &Identity)> {
        self.iter().find(|(_, identity)| identity.instance_id() == instance_id)
    }

    fn push(&mut self, identity: Identity) {
        self.entries.push(identity);
    }
}

impl IntoIterator for EnumerationResult {
    type Item = (usize, Identity);
    type IntoIter = core::iter::Enumerate<std::vec::IntoIter<Identity>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter().enumerate()
    }
}

/// Lists devices registered with the system device enumerator.
///
/// Owns the service handle until [`dispose`](Self::dispose) is called or the
/// enumerator is dropped. Not meant for concurrent use.
pub struct SystemDeviceEnumerator<S: DeviceEnumerationService> {
    service: Option<S>,
}

impl<S: DeviceEnumerationService> SystemDeviceEnumerator<S> {
    /// Wrap an already acquired service handle.
    pub fn with_service(service: S) -> Self {
        SystemDeviceEnumerator {
            service: Some(service),
        }
    }

    /// Acquire the service handle with `connect`.
    pub fn open_with<F>(connect: F) -> Result<Self, Error>
    where
        F: FnOnce() -> Result<S, PlatformError>,
    {
        let service = connect().map_err(Error::Initialization)?;
        log::debug!("system device enumerator acquired");
        Ok(Self::with_service(service))
    }

    /// List the video input devices currently attached to the system.
    pub fn list_video_input_devices(&self) -> Result<EnumerationResult, Error> {
        self.list_devices(DeviceCategory::VideoInput)
    }

    /// List the devices registered under `category`.
    ///
    /// A device whose properties cannot be read is still listed, as an
    /// empty [`Identity`].
    pub fn list_devices(&self, category: DeviceCategory) -> Result<EnumerationResult, Error> {
        let service = self.service.as_ref().ok_or(Error::Disposed)?;
        let monikers = service
            .class_enumerator(category)
            .map_err(|source| Error::CategoryEnumeration { category, source })?;

        let mut result = EnumerationResult::default();
        for moniker in monikers {
            let identity = read_identity(&moniker).unwrap_or_else(|err| {
                log::warn!("device {} of the {category} category is unreadable: {err}", result.len());
                Identity::default()
            });
            drop(moniker);
            log::trace!("{category} device {}: {identity}", result.len());
            result.push(identity);
        }

        log::debug!("found {} {category} device(s)", result.len());
        Ok(result)
    }

    /// Release the service handle. Later calls are no-ops.
    pub fn dispose(&mut self) {
        if self.service.take().is_some() {
            log::debug!("system device enumerator released");
        }
    }

    pub fn is_disposed(&self) -> bool {
        self.service.is_none()
    }
}

/// Read the identity of one device. The property bag is released before
/// returning on every path.
fn read_identity<M: DeviceMoniker>(moniker: &M) -> Result<Identity, PropertyError> {
    let bag = moniker.bind_property_bag().map_err(PropertyError::Bind)?;

    let device_path = match bag.read_string(DEVICE_PATH_PROPERTY) {
        Ok(path) => path.unwrap_or_default(),
        Err(err) => {
            log::debug!("ignoring unreadable {DEVICE_PATH_PROPERTY}: {err}");
            String::new()
        }
    };

    let name = bag
        .read_string(FRIENDLY_NAME_PROPERTY)
        .map_err(|source| PropertyError::Read {
            property: FRIENDLY_NAME_PROPERTY,
            source,
        })?
        .unwrap_or_default();

    Ok(Identity::new(device_path, name))
}
