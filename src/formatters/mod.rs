pub mod content;
pub mod truncation;

pub use content::{
    ARRAY_PREVIEW_LEN, DisplayContent, can_toggle, display_string, is_complex,
    parse_result_content, table_rows,
};
pub use truncation::{
    MAX_DISPLAY_CHARS, MAX_DISPLAY_LINES, TRUNCATION_MARKER, display_slice, should_truncate,
};
