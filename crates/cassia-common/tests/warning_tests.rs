//! Tests for warning deduplication.

use cassia_common::warning::{clear_warnings, has_warned, set_color_enabled, warn_once};

#[test]
fn test_warn_once_records_and_clears() {
    set_color_enabled(false);

    assert!(!has_warned("Test", "dedup message"));
    warn_once("Test", "dedup message");
    warn_once("Test", "dedup message");
    assert!(has_warned("Test", "dedup message"));

    // Same message under a different component is a different warning
    assert!(!has_warned("Other", "dedup message"));

    clear_warnings();
    assert!(!has_warned("Test", "dedup message"));
}
