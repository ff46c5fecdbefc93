use core::fmt;

/// Name and instance identifier of one enumerated device.
///
/// The default value, with every field empty, stands in for a device whose
/// properties could not be read.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Identity {
    raw_instance_id: String,
    instance_id: String,
    name: String,
}

impl Identity {
    /// Build an identity from a raw device path and a friendly name.
    ///
    /// The instance id is derived from `raw_instance_id` with
    /// [`normalize_instance_id`].
    pub fn new(raw_instance_id: impl Into<String>, name: impl Into<String>) -> Self {
        let raw_instance_id = raw_instance_id.into();
        let instance_id = normalize_instance_id(&raw_instance_id).to_owned();
        Identity {
            raw_instance_id,
            instance_id,
            name: name.into(),
        }
    }

    /// The device path exactly as the OS reported it.
    pub fn raw_instance_id(&self) -> &str {
        &self.raw_instance_id
    }

    /// Short token identifying the physical device instance.
    ///
    /// Stable across reconnects on the same port, so it can be persisted and
    /// used to find the device again in a later listing.
    pub fn instance_id(&self) -> &str {
        &self.instance_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// True for the placeholder produced when a device could not be read.
    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.instance_id.is_empty()
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.instance_id)
    }
}

/// Extract the instance token from a device path.
///
/// Returns the interior of the first `#...#` pair whose interior consists
/// only of ASCII letters, digits and `&` (it may be empty). Paths without
/// such a pair are returned unchanged.
///
/// ```
/// use video_input_devices::normalize_instance_id;
///
/// let path = r"\\?\usb#vid_046d&pid_0825&mi_00#6&2a1b3c&0&0000#{65e8773d-8f56-11d0-a3b9-00a0c9223196}\global";
/// assert_eq!(normalize_instance_id(path), "6&2a1b3c&0&0000");
/// assert_eq!(normalize_instance_id("no delimiters"), "no delimiters");
/// ```
pub fn normalize_instance_id(raw: &str) -> &str {
    let bytes = raw.as_bytes();
    let mut start = 0;
    while let Some(offset) = bytes[start..].iter().position(|&b| b == b'#') {
        let open = start + offset;
        let interior = open + 1;
        let len = bytes[interior..]
            .iter()
            .take_while(|&&b| is_token_byte(b))
            .count();
        let close = interior + len;
        if bytes.get(close) == Some(&b'#') {
            return &raw[interior..close];
        }
        // The run stopped at a non-token byte, so no pair can open inside it.
        start = close;
    }
    raw
}

fn is_token_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'&'
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_valid_pair_wins() {
        assert_eq!(normalize_instance_id("a#one#two#"), "one");
        assert_eq!(normalize_instance_id("#x_y#ok&1#rest"), "ok&1");
    }

    #[test]
    fn empty_interior_matches() {
        assert_eq!(normalize_instance_id("abc##def"), "");
    }

    #[test]
    fn closing_hash_opens_next_candidate() {
        // `#a-b#` fails on `-`; the second `#` starts `#c#`.
        assert_eq!(normalize_instance_id("#a-b#c#"), "c");
    }

    #[test]
    fn unmatched_input_is_returned_unchanged() {
        assert_eq!(normalize_instance_id(""), "");
        assert_eq!(normalize_instance_id("#"), "#");
        assert_eq!(normalize_instance_id("#open only"), "#open only");
        assert_eq!(normalize_instance_id("#under_score#"), "#under_score#");
    }

    #[test]
    fn non_ascii_text_is_left_alone() {
        assert_eq!(normalize_instance_id("#ünï#"), "#ünï#");
        assert_eq!(normalize_instance_id("é#ok#"), "ok");
    }

    #[test]
    fn letters_match_in_either_case() {
        assert_eq!(normalize_instance_id("X#AbC&12#Y"), "AbC&12");
    }
}
