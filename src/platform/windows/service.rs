use windows::Win32::Foundation::S_OK;
use windows::Win32::Media::DirectShow::ICreateDevEnum;
use windows::Win32::System::Com::StructuredStorage::IPropertyBag;
use windows::Win32::System::Com::{CLSCTX_INPROC_SERVER, CoCreateInstance, IEnumMoniker, IMoniker};
use windows::core::{BSTR, HSTRING, VARIANT};

use crate::config::EnumeratorConfig;
use crate::device::{DeviceEnumerationService, DeviceMoniker, PropertyBag};
use crate::error::PlatformError;
use crate::platform::windows::apartment::ComApartment;
use crate::platform::windows::to_win_guid;
use crate::types::{CLSID_SYSTEM_DEVICE_ENUM, DeviceCategory};

/// Wraps `ICreateDevEnum`, the system device enumerator.
pub struct WindowsDeviceService {
    // Fields drop in order: the interface must be released before COM is
    // uninitialized.
    dev_enum: ICreateDevEnum,
    _apartment: ComApartment,
}

impl WindowsDeviceService {
    pub fn new(config: &EnumeratorConfig) -> Result<Self, PlatformError> {
        let apartment = ComApartment::enter(config.threading())?;
        let clsid = to_win_guid(CLSID_SYSTEM_DEVICE_ENUM);
        let dev_enum: ICreateDevEnum =
            unsafe { CoCreateInstance(&clsid, None, CLSCTX_INPROC_SERVER) }?;

        Ok(WindowsDeviceService {
            dev_enum,
            _apartment: apartment,
        })
    }

    /// Access the underlying `ICreateDevEnum`.
    pub fn dev_enum(&self) -> &ICreateDevEnum {
        &self.dev_enum
    }
}

impl DeviceEnumerationService for WindowsDeviceService {
    type Moniker = WindowsMoniker;
    type Monikers = WindowsMonikers;

    fn class_enumerator(&self, category: DeviceCategory) -> Result<WindowsMonikers, PlatformError> {
        let clsid = to_win_guid(category.guid());
        let mut inner: Option<IEnumMoniker> = None;
        // S_FALSE leaves `inner` empty: the category has no devices.
        unsafe { self.dev_enum.CreateClassEnumerator(&clsid, &mut inner, 0) }?;
        Ok(WindowsMonikers { inner })
    }
}

/// Iterates an `IEnumMoniker` one device at a time.
pub struct WindowsMonikers {
    inner: Option<IEnumMoniker>,
}

impl Iterator for WindowsMonikers {
    type Item = WindowsMoniker;

    fn next(&mut self) -> Option<WindowsMoniker> {
        let (hr, moniker) = {
            let inner = self.inner.as_ref()?;
            let mut slot: [Option<IMoniker>; 1] = [None];
            let mut fetched = 0u32;
            let hr = unsafe { inner.Next(&mut slot, Some(&mut fetched as *mut u32)) };
            let [moniker] = slot;
            (hr, moniker.filter(|_| fetched == 1))
        };

        match moniker {
            Some(moniker) if hr == S_OK => Some(WindowsMoniker(moniker)),
            _ => {
                // S_FALSE or any failure ends the sequence.
                self.inner = None;
                None
            }
        }
    }
}

/// Wraps one device's `IMoniker`.
pub struct WindowsMoniker(IMoniker);

impl WindowsMoniker {
    pub fn moniker(&self) -> &IMoniker {
        &self.0
    }
}

impl DeviceMoniker for WindowsMoniker {
    type PropertyBag = WindowsPropertyBag;

    fn bind_property_bag(&self) -> Result<WindowsPropertyBag, PlatformError> {
        let bag: IPropertyBag = unsafe { self.0.BindToStorage(None, None) }?;
        Ok(WindowsPropertyBag(bag))
    }
}

/// Wraps a device's `IPropertyBag`.
pub struct WindowsPropertyBag(IPropertyBag);

impl PropertyBag for WindowsPropertyBag {
    fn read_string(&self, name: &str) -> Result<Option<String>, PlatformError> {
        let name = HSTRING::from(name);
        let mut value = VARIANT::default();
        unsafe { self.0.Read(&name, &mut value, None) }?;
        if value.is_empty() {
            return Ok(None);
        }
        let text = BSTR::try_from(&value)?;
        Ok(Some(text.to_string()))
    }
}
