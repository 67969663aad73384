//! Display labels for project paths.

/// Shorten `full_path` for display by stripping the first matching
/// prefix, checked in the order given.
///
/// The first prefix `full_path` starts with wins, so callers must order
/// overlapping prefixes from most- to least-specific. Matching is on raw
/// strings; no normalization or case folding happens here. A path no
/// prefix matches is returned unchanged.
pub fn display_label(full_path: &str, known_prefixes: &[String]) -> String {
    for prefix in known_prefixes {
        if full_path.starts_with(prefix.as_str()) {
            return full_path[prefix.len()..].to_string();
        }
    }
    full_path.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prefixes() -> Vec<String> {
        vec!["/home/alice/projects/".to_string(), "/mnt/".to_string()]
    }

    #[test]
    fn strips_first_matching_prefix() {
        assert_eq!(display_label("/home/alice/projects/app1", &prefixes()), "app1");
        assert_eq!(display_label("/mnt/usb/app2", &prefixes()), "usb/app2");
    }

    #[test]
    fn unmatched_path_is_unchanged() {
        assert_eq!(display_label("/etc/app3", &prefixes()), "/etc/app3");
    }

    #[test]
    fn first_prefix_wins_on_overlap() {
        let overlapping = vec!["/mnt/usb/".to_string(), "/mnt/".to_string()];
        assert_eq!(display_label("/mnt/usb/app2", &overlapping), "app2");

        // Reversed order: the broader prefix matches first.
        let reversed = vec!["/mnt/".to_string(), "/mnt/usb/".to_string()];
        assert_eq!(display_label("/mnt/usb/app2", &reversed), "usb/app2");
    }

    #[test]
    fn strips_only_from_the_start() {
        // The prefix string also appears later in the path; only the
        // leading occurrence is removed.
        assert_eq!(
            display_label("/mnt/backups/mnt/app4", &prefixes()),
            "backups/mnt/app4"
        );
    }

    #[test]
    fn no_prefixes_means_no_shortening() {
        assert_eq!(display_label("/home/alice/projects/app1", &[]), "/home/alice/projects/app1");
    }
}
