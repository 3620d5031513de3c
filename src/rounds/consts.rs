pub const TARGET_MARKER_COLOR: &str = "#FF0000";
pub const LINE_COLOR: &str = "#000000";
pub const LINE_WIDTH: u32 = 5;
