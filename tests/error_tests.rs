use std::error::Error as _;

use video_input_devices::{ComThreading, DeviceCategory, EnumeratorConfig, Error, PlatformError};

#[test]
fn test_error_display() {
    let init = Error::Initialization(PlatformError::Message("class not registered".into()));
    assert!(init.to_string().contains("class not registered"));

    let category = Error::CategoryEnumeration {
        category: DeviceCategory::AudioRenderer,
        source: "E_FAIL".into(),
    };
    assert!(category.to_string().contains("audio renderer"));
    assert!(category.to_string().contains("E_FAIL"));

    assert_eq!(Error::Disposed.to_string(), "device enumerator already disposed");
}

#[test]
fn test_error_source_is_platform_error() {
    let err = Error::CategoryEnumeration {
        category: DeviceCategory::VideoInput,
        source: "E_FAIL".into(),
    };
    let source = err.source().expect("category errors carry their cause");
    assert_eq!(source.to_string(), "E_FAIL");

    assert!(Error::Disposed.source().is_none());
}

#[test]
fn test_config_defaults_to_multithreaded() {
    let config = EnumeratorConfig::default();
    assert_eq!(config.threading(), ComThreading::MultiThreaded);

    let config = config.with_threading(ComThreading::Apartment);
    assert_eq!(config.threading(), ComThreading::Apartment);
}
