// Scale constants for decimal numbers

/// Maximum number of fractional digits a stored number keeps.
/// Anything finer is rounded half-to-even on construction.
pub const DEFAULT_SCALE: u32 = 16;

/// Maximum number of fractional digits shown when a number is displayed
pub const DISPLAY_SCALE: u32 = 10;
