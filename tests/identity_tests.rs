use video_input_devices::{Identity, normalize_instance_id};

#[test]
fn test_delimited_token_is_extracted() {
    let cases = [
        ("#abc#", "abc"),
        ("prefix#A1&b2#suffix", "A1&b2"),
        (r"\\?\root#image#0000#{65e8773d-8f56-11d0-a3b9-00a0c9223196}", "image"),
        ("x#&&#y", "&&"),
    ];
    for (raw, expected) in cases {
        assert_eq!(normalize_instance_id(raw), expected, "input: {raw}");
    }
}

#[test]
fn test_input_without_delimited_token_is_unchanged() {
    let cases = [
        "",
        "plain name",
        "single # only",
        "#has space#",
        "#dash-ed#",
        "{65e8773d-8f56-11d0-a3b9-00a0c9223196}",
    ];
    for raw in cases {
        assert_eq!(normalize_instance_id(raw), raw);
    }
}

#[test]
fn test_empty_identity_display() {
    let identity = Identity::new("", "");
    assert_eq!(identity.to_string(), " ()");
    assert_eq!(identity, Identity::default());
    assert!(identity.is_empty());
}

#[test]
fn test_first_matching_pair_wins() {
    // `VID_1234&PID_5678` contains `_`, so the first pair that qualifies is
    // the instance segment.
    let identity = Identity::new("USB#VID_1234&PID_5678#6&abc#{guid}", "My Camera");
    assert_eq!(identity.instance_id(), "6&abc");
    assert_eq!(identity.name(), "My Camera");
    assert_eq!(identity.to_string(), "My Camera (6&abc)");
}

#[test]
fn test_identity_from_real_device_path() {
    let path = r"\\?\usb#vid_046d&pid_0825&mi_00#6&2a1b3c&0&0000#{65e8773d-8f56-11d0-a3b9-00a0c9223196}\global";
    let identity = Identity::new(path, "HD Webcam C270");

    assert_eq!(identity.raw_instance_id(), path);
    assert_eq!(identity.instance_id(), "6&2a1b3c&0&0000");
    assert_eq!(identity.to_string(), "HD Webcam C270 (6&2a1b3c&0&0000)");
    assert!(!identity.is_empty());
}

#[test]
fn test_unmatched_path_is_kept_as_instance_id() {
    let identity = Identity::new("OBS Virtual Camera", "OBS Virtual Camera");
    assert_eq!(identity.instance_id(), "OBS Virtual Camera");
    assert_eq!(identity.to_string(), "OBS Virtual Camera (OBS Virtual Camera)");
}
