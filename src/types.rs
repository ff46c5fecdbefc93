use core::fmt;

/// A 128-bit platform identifier (CLSID / category id).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Guid(u128);

impl Guid {
    pub const fn from_u128(value: u128) -> Self {
        Guid(value)
    }

    pub const fn as_u128(&self) -> u128 {
        self.0
    }
}

/// Formats in registry form, e.g. `{860BB310-5D01-11D0-BD3B-00A0C911CE86}`.
impl fmt::Display for Guid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let v = self.0;
        write!(
            f,
            "{{{:08X}-{:04X}-{:04X}-{:04X}-{:012X}}}",
            (v >> 96) as u32,
            (v >> 80) as u16,
            (v >> 64) as u16,
            (v >> 48) as u16,
            v & 0xFFFF_FFFF_FFFF,
        )
    }
}

/// CLSID of the system device enumerator service.
pub const CLSID_SYSTEM_DEVICE_ENUM: Guid =
    Guid::from_u128(0x62be5d10_60eb_11d0_bd3b_00a0c911ce86);

/// Property holding the device's path-like instance identifier.
pub const DEVICE_PATH_PROPERTY: &str = "DevicePath";

/// Property holding the device's display name.
pub const FRIENDLY_NAME_PROPERTY: &str = "FriendlyName";

/// Device categories registered with the system device enumerator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum DeviceCategory {
    VideoInput,
    AudioInput,
    AudioRenderer,
    VideoCompressor,
    AudioCompressor,
    LegacyFilter,
    MidiRenderer,
}

impl DeviceCategory {
    pub const fn guid(&self) -> Guid {
        match self {
            Self::VideoInput => Guid::from_u128(0x860bb310_5d01_11d0_bd3b_00a0c911ce86),
            Self::AudioInput => Guid::from_u128(0x33d9a762_90c8_11d0_bd43_00a0c911ce86),
            Self::AudioRenderer => Guid::from_u128(0xe0f158e1_cb04_11d0_bd4e_00a0c911ce86),
            Self::VideoCompressor => Guid::from_u128(0x33d9a760_90c8_11d0_bd43_00a0c911ce86),
            Self::AudioCompressor => Guid::from_u128(0x33d9a761_90c8_11d0_bd43_00a0c911ce86),
            Self::LegacyFilter => Guid::from_u128(0x083863f1_70de_11d0_bd40_00a0c911ce86),
            Self::MidiRenderer => Guid::from_u128(0x4efe2452_168a_11d1_bc76_00c04fb9453b),
        }
    }

    pub const fn name(&self) -> &'static str {
        match self {
            Self::VideoInput => "video input",
            Self::AudioInput => "audio input",
            Self::AudioRenderer => "audio renderer",
            Self::VideoCompressor => "video compressor",
            Self::AudioCompressor => "audio compressor",
            Self::LegacyFilter => "legacy filter",
            Self::MidiRenderer => "MIDI renderer",
        }
    }
}

impl fmt::Display for DeviceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guid_displays_in_registry_form() {
        assert_eq!(
            CLSID_SYSTEM_DEVICE_ENUM.to_string(),
            "{62BE5D10-60EB-11D0-BD3B-00A0C911CE86}"
        );
        assert_eq!(
            DeviceCategory::VideoInput.guid().to_string(),
            "{860BB310-5D01-11D0-BD3B-00A0C911CE86}"
        );
    }

    #[test]
    fn guid_keeps_leading_zeros() {
        assert_eq!(
            DeviceCategory::LegacyFilter.guid().to_string(),
            "{083863F1-70DE-11D0-BD40-00A0C911CE86}"
        );
    }
}
