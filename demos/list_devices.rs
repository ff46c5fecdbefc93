fn main() {
    #[cfg(windows)]
    {
        use video_input_devices::{DeviceCategory, EnumeratorConfig, SystemDeviceEnumerator};

        let mut enumerator = SystemDeviceEnumerator::with_config(&EnumeratorConfig::default())
            .expect("failed to open the system device enumerator");

        let devices = enumerator
            .list_video_input_devices()
            .expect("failed to list video input devices");
        println!("Found {} video input device(s):", devices.len());
        for (i, device) in devices.iter() {
            println!("  [{}] {}", i, device);
            println!("       path: {}", device.raw_instance_id());
        }

        // Same device list again, looked up by its stable id.
        if let Some((_, first)) = devices.iter().next() {
            let again = enumerator
                .list_video_input_devices()
                .expect("failed to list video input devices");
            match again.find_by_instance_id(first.instance_id()) {
                Some((i, device)) => println!("\n{} is still present at index {}", device.name(), i),
                None => println!("\n{} disappeared", first.name()),
            }
        }

        match enumerator.list_devices(DeviceCategory::AudioInput) {
            Ok(audio) => println!("\nFound {} audio input device(s)", audio.len()),
            Err(e) => println!("\nAudio inputs unavailable: {e}"),
        }

        enumerator.dispose();
    }

    #[cfg(not(windows))]
    {
        println!("This example only works on Windows.");
    }
}
