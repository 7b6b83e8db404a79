//! Default values for configuration fields.
//!
//! These functions are used by serde for default deserialization.

// ============================================================================
// Common Defaults
// ============================================================================

pub fn r#false() -> bool {
    false
}

// ============================================================================
// [content] Section Defaults
// ============================================================================

pub mod content {
    use std::path::PathBuf;

    pub fn dir() -> Option<PathBuf> {
        None
    }

    pub fn locale() -> String {
        "en".into()
    }
}

// ============================================================================
// [reveal] Section Defaults
// ============================================================================

pub mod reveal {
    pub fn threshold() -> f64 {
        0.1
    }

    pub fn stagger_ms() -> u64 {
        100
    }
}

// ============================================================================
// [loader] Section Defaults
// ============================================================================

pub mod loader {
    pub fn duration_ms() -> u64 {
        2500
    }

    pub fn settle_ms() -> u64 {
        260
    }

    pub fn reduced_motion_settle_ms() -> u64 {
        120
    }

    pub fn frame_ms() -> u64 {
        16
    }
}

// ============================================================================
// [navigation] Section Defaults
// ============================================================================

pub mod navigation {
    pub fn scrolled_offset() -> f64 {
        20.0
    }
}
