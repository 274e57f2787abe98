//! Platform-wide limits

/// Minimum number of outcome options a slot must declare.
pub const MIN_SLOT_OPTIONS: usize = 2;

/// Maximum number of outcome options a slot may declare. Option indices are
/// stored as `u8`, so this must stay within 256.
pub const MAX_SLOT_OPTIONS: usize = 32;
