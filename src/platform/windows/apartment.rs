use core::marker::PhantomData;

use windows::Win32::Foundation::RPC_E_CHANGED_MODE;
use windows::Win32::System::Com::{
    COINIT_APARTMENTTHREADED, COINIT_MULTITHREADED, CoInitializeEx, CoUninitialize,
};

use crate::config::ComThreading;
use crate::error::PlatformError;

/// RAII guard for COM initialization on the current thread.
pub struct ComApartment {
    /// Whether this guard must balance its `CoInitializeEx` call.
    owned: bool,
    // COM initialization is per thread.
    _not_send: PhantomData<*const ()>,
}

impl ComApartment {
    pub fn enter(threading: ComThreading) -> Result<Self, PlatformError> {
        let coinit = match threading {
            ComThreading::Apartment => COINIT_APARTMENTTHREADED,
            ComThreading::MultiThreaded => COINIT_MULTITHREADED,
        };

        let hr = unsafe { CoInitializeEx(None, coinit) };
        if hr == RPC_E_CHANGED_MODE {
            log::debug!("COM already initialized with another threading model, reusing it");
            return Ok(ComApartment {
                owned: false,
                _not_send: PhantomData,
            });
        }
        hr.ok()?;

        Ok(ComApartment {
            owned: true,
            _not_send: PhantomData,
        })
    }
}

impl Drop for ComApartment {
    fn drop(&mut self) {
        if self.owned {
            unsafe { CoUninitialize() };
        }
    }
}
