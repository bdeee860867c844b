//! User interface subsystem - input events, rendering, and (with the
//! `embedded` feature) the OLED display and input tasks.
//!
//! ## Components
//!
//! - **Render**: draws a widget [`Render`](crate::adjust::Render) onto any
//!   monochrome `embedded-graphics` target
//! - **Input logic**: rotary-encoder quadrature decoding
//! - **Display** (embedded): SSD1306 128×64 OLED via I²C
//! - **Buttons** (embedded): debounced push button + encoder pin tasks

#[cfg(feature = "embedded")]
pub mod buttons;
#[cfg(feature = "embedded")]
pub mod display;
pub mod input_logic;
pub mod render;

/// Input delivered to the active widget.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InputEvent {
    /// Relative movement; positive = clockwise / up.
    Scroll(i32),
    /// Confirm / advance.
    Click,
}

/// Physical button events (after debouncing).
///
/// For boards with a 3-button pad instead of a rotary encoder:
///   - UP/DOWN: scroll by one
///   - SELECT: click
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonEvent {
    Up,
    Down,
    Select,
}

impl From<ButtonEvent> for InputEvent {
    fn from(event: ButtonEvent) -> Self {
        match event {
            ButtonEvent::Up => InputEvent::Scroll(1),
            ButtonEvent::Down => InputEvent::Scroll(-1),
            ButtonEvent::Select => InputEvent::Click,
        }
    }
}
