//! SSD1306 OLED display wrapper.

use crate::adjust::Render;
use crate::ui::render;
use embedded_graphics::mono_font::ascii::FONT_6X10;
use embedded_graphics::mono_font::MonoTextStyleBuilder;
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::text::{Alignment, Baseline, Text, TextStyleBuilder};
use ssd1306::mode::BufferedGraphicsMode;
use ssd1306::prelude::*;
use ssd1306::I2CDisplayInterface;
use ssd1306::Ssd1306;

/// Type alias for the concrete display driver.
///
/// Generic over the I²C implementation so callers pass in their HAL's
/// I²C peripheral.
pub type Display<I2C> =
    Ssd1306<I2CInterface<I2C>, DisplaySize128x64, BufferedGraphicsMode<DisplaySize128x64>>;

/// Initialise the SSD1306 display and clear the screen.
pub fn init<I2C>(i2c: I2C) -> Display<I2C>
where
    I2C: embedded_hal::i2c::I2c,
{
    let interface = I2CDisplayInterface::new(i2c);
    let mut display = Ssd1306::new(interface, DisplaySize128x64, DisplayRotation::Rotate0)
        .into_buffered_graphics_mode();
    if display.init().is_err() {
        defmt::warn!("display: init failed");
    }
    display.clear_buffer();
    let _ = display.flush();
    display
}

/// Replace the screen contents with a widget render.
pub fn show<I2C>(display: &mut Display<I2C>, view: &Render)
where
    I2C: embedded_hal::i2c::I2c,
{
    display.clear_buffer();
    if render::draw(view, display).is_err() {
        defmt::warn!("display: draw failed");
    }
    let _ = display.flush();
}

/// Render a one-line centered message (e.g. after a commit).
pub fn show_message<I2C>(display: &mut Display<I2C>, message: &str)
where
    I2C: embedded_hal::i2c::I2c,
{
    display.clear_buffer();

    let character_style = MonoTextStyleBuilder::new()
        .font(&FONT_6X10)
        .text_color(BinaryColor::On)
        .build();
    let text_style = TextStyleBuilder::new()
        .alignment(Alignment::Center)
        .baseline(Baseline::Middle)
        .build();
    let center = display.bounding_box().center();
    let _ = Text::with_text_style(message, center, character_style, text_style).draw(display);

    let _ = display.flush();
}
