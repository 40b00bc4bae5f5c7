//! Constants for the interactive TUI module

// Timing constants
/// Status-message auto-clear delay in milliseconds
pub const STATUS_CLEAR_DELAY_MS: u64 = 3000;

/// Event polling interval in milliseconds
pub const EVENT_POLL_INTERVAL_MS: u64 = 50;

/// Double Ctrl+C timeout in seconds
pub const DOUBLE_CTRL_C_TIMEOUT_SECS: u64 = 1;

// Navigation
/// Page size for PageUp/PageDown navigation
pub const PAGE_SIZE: usize = 10;

// Layout
/// Transcript list share of the horizontal split, in percent
pub const TRANSCRIPT_PANE_PERCENT: u16 = 40;

/// Timestamp column width in the transcript list ("HH:MM:SS" + padding)
pub const TIMESTAMP_COLUMN_WIDTH: usize = 9;

/// Role column width in the transcript list (with padding)
pub const ROLE_COLUMN_WIDTH: usize = 10;

// Help dialog dimensions
/// Maximum width for the help dialog
pub const HELP_DIALOG_MAX_WIDTH: u16 = 70;

/// Minimum margin around the help dialog
pub const HELP_DIALOG_MARGIN: u16 = 4;
