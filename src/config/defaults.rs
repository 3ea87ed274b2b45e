//! Default values for configuration fields.
//!
//! These functions are used by serde for default deserialization.

// ============================================================================
// [site] Section Defaults
// ============================================================================

pub mod site {
    pub fn title() -> String {
        "Atilla Learn".into()
    }

    pub fn url() -> String {
        "http://learn.atilla.org".into()
    }
}

// ============================================================================
// [build] Section Defaults
// ============================================================================

pub mod build {
    use std::path::PathBuf;

    pub fn root() -> Option<PathBuf> {
        None
    }

    pub fn content() -> PathBuf {
        "content".into()
    }

    pub fn output() -> PathBuf {
        "web".into()
    }

    pub fn templates() -> PathBuf {
        "templates".into()
    }
}

// ============================================================================
// [landing] Section Defaults
// ============================================================================

pub mod landing {
    pub fn conferences() -> String {
        "Conférences".into()
    }

    pub fn trainings() -> String {
        "Formations".into()
    }

    pub fn talks() -> String {
        "Talks".into()
    }
}
