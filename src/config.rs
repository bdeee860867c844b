//! Application-wide constants and compile-time configuration.
//!
//! Layout offsets, default texts, value ranges and input timings live here
//! so they can be tuned in one place.

// Render buffers

/// Maximum length (bytes) of a single rendered text field.
pub const LABEL_CAPACITY: usize = 24;

/// Maximum number of value fields a widget renders below its title.
/// The date and time adjusters use all five (3 values + 2 separators).
pub const MAX_FIELDS: usize = 5;

// Layout (pixels)

/// Vertical padding around highlighted text boxes.
pub const PADDING_V_PX: i32 = 1;

/// Horizontal padding around highlighted text boxes.
pub const PADDING_H_PX: i32 = 4;

/// Shift applied to the date row so the whole `YYYY-MM-DD` string sits
/// centered on the screen.
pub const DATE_X_OFFSET: i32 = 7;

/// Date row offsets relative to the horizontal screen center.
pub const DATE_YEAR_DX: i32 = -15 + DATE_X_OFFSET;
pub const DATE_YM_SEP_DX: i32 = -7 + DATE_X_OFFSET;
pub const DATE_MONTH_DX: i32 = DATE_X_OFFSET;
pub const DATE_MD_SEP_DX: i32 = 7 + DATE_X_OFFSET;
pub const DATE_DAY_DX: i32 = 15 + DATE_X_OFFSET;

/// Time row offsets relative to the horizontal screen center
/// (`HH:MM:SS`, 6 px glyphs, all left-aligned).
pub const TIME_HOUR_DX: i32 = -24;
pub const TIME_HM_SEP_DX: i32 = -12;
pub const TIME_MINUTE_DX: i32 = -6;
pub const TIME_MS_SEP_DX: i32 = 6;
pub const TIME_SECOND_DX: i32 = 12;

// Texts

/// Default texts for the boolean toggle.
pub const DEFAULT_TRUE_TEXT: &str = "True";
pub const DEFAULT_FALSE_TEXT: &str = "False";

/// Separator between date fields.
pub const DATE_SEPARATOR: &str = "-";

/// Separator between time fields.
pub const TIME_SEPARATOR: &str = ":";

// Value ranges

/// Years reachable by scrolling a date adjuster. Four digits keep the date
/// row within its layout and well inside chrono's supported range.
pub const YEAR_MIN: i32 = 1;
pub const YEAR_MAX: i32 = 9999;

pub const HOUR_MAX: i32 = 23;
pub const MINUTE_MAX: i32 = 59;
pub const SECOND_MAX: i32 = 59;

// Input

/// Quadrature transitions per mechanical detent of the rotary encoder.
pub const ENCODER_STEPS_PER_DETENT: i8 = 4;

/// Button debounce time (ms).
pub const BUTTON_DEBOUNCE_MS: u64 = 50;

/// Depth of the input event queue between input tasks and the UI loop.
pub const INPUT_QUEUE_DEPTH: usize = 8;

// GPIO pin assignments (nRF52840-DK defaults)
//
// These are logical names; actual `embassy_nrf::peripherals::*` types are
// selected in `main.rs`.  Adjust for your custom PCB.
//
//   Encoder A      → P0.11
//   Encoder B      → P0.12
//   Encoder push   → P0.24
//   I²C SDA        → P0.26
//   I²C SCL        → P0.27
