//! SSD1306 OLED as the character display collaborator
//!
//! Thin adapter from the `ssd1306` buffered-graphics driver to the
//! `TextDisplay` trait the core renders through.

use display_interface::DisplayError;
use embassy_rp::i2c::{Blocking, I2c};
use embassy_rp::peripherals::I2C1;
use embedded_graphics::mono_font::ascii::FONT_6X10;
use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::text::{Baseline, Text};
use ssd1306::mode::BufferedGraphicsMode;
use ssd1306::prelude::*;
use ssd1306::{I2CDisplayInterface, Ssd1306};

type OledI2c = I2c<'static, I2C1, Blocking>;
type OledDriver = Ssd1306<
    I2CInterface<OledI2c>,
    DisplaySize128x64,
    BufferedGraphicsMode<DisplaySize128x64>,
>;

/// The board's 128x64 OLED behind the `TextDisplay` contract
pub struct Oled {
    driver: OledDriver,
}

impl Oled {
    /// Initialize the panel and blank it
    pub fn new(i2c: OledI2c) -> Result<Self, DisplayError> {
        let interface = I2CDisplayInterface::new(i2c);
        let mut driver = Ssd1306::new(interface, DisplaySize128x64, DisplayRotation::Rotate0)
            .into_buffered_graphics_mode();
        driver.init()?;
        driver.clear_buffer();
        driver.flush()?;
        Ok(Self { driver })
    }

    fn draw_str(&mut self, text: &str, x: u8, y: u8) -> Result<(), DisplayError> {
        let style = MonoTextStyle::new(&FONT_6X10, BinaryColor::On);
        Text::with_baseline(
            text,
            Point::new(i32::from(x), i32::from(y)),
            style,
            Baseline::Top,
        )
        .draw(&mut self.driver)?;
        Ok(())
    }
}

impl lumo_core::traits::TextDisplay for Oled {
    type Error = DisplayError;

    fn clear(&mut self) -> Result<(), DisplayError> {
        self.driver.clear_buffer();
        Ok(())
    }

    fn draw_text(&mut self, text: &str, x: u8, y: u8) -> Result<(), DisplayError> {
        self.draw_str(text, x, y)
    }

    fn draw_char(&mut self, c: char, x: u8, y: u8) -> Result<(), DisplayError> {
        let mut buf = [0u8; 4];
        self.draw_str(c.encode_utf8(&mut buf), x, y)
    }

    fn flush(&mut self) -> Result<(), DisplayError> {
        self.driver.flush()
    }
}
