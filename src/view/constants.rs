//! Layout constants for the terminal preview.

/// Horizontal pixels represented by one terminal column.
pub const PX_PER_COL: f64 = 8.0;

/// Height of the status bar in lines.
pub const STATUS_BAR_HEIGHT: u16 = 1;

/// Width of a toast, in columns.
pub const TOAST_WIDTH: u16 = 44;

/// Poll timeout of the input loop; one animation frame.
pub const FRAME_INTERVAL: std::time::Duration = std::time::Duration::from_millis(16);
