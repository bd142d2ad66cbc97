//! Platform-specific configuration

/// Submit shortcut display for form help text
/// Ctrl+S works on all platforms
pub const SUBMIT_SHORTCUT: &str = "Ctrl+S";

/// Copy response shortcut display on the success view
pub const COPY_SHORTCUT: &str = "y";
