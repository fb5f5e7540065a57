pub const SCREEN_WIDTH: i32 = 320;
pub const FEATURE_COUNT: usize = 12;

/// Distance reported when there is no shield to measure against.
pub const NO_SHIELD_DISTANCE: i32 = SCREEN_WIDTH;
