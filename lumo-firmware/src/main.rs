//! Lumo - BitDogLab serial/button demo firmware
//!
//! Turns two classes of asynchronous input - button edges and bytes
//! arriving over USB serial - into debounced state changes on the
//! board's outputs: the RGB indicator LEDs, the SSD1306 OLED, and the
//! 5x5 WS2812 matrix.
//!
//! Esperanto "lumo" (light): every handled input ends up as light
//! somewhere.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::bind_interrupts;
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_rp::i2c::{self, I2c};
use embassy_rp::peripherals::{PIO0, USB};
use embassy_rp::pio::{InterruptHandler as PioInterruptHandler, Pio};
use embassy_rp::pio_programs::ws2812::{PioWs2812, PioWs2812Program};
use embassy_rp::usb::{Driver, InterruptHandler as UsbInterruptHandler};
use embassy_time::Timer;
use embassy_usb::class::cdc_acm::{CdcAcmClass, State};
use embassy_usb::Builder;
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use lumo_core::input::ButtonId;
use lumo_drivers::GpioIndicators;

use crate::display::Oled;

mod channels;
mod display;
mod serial_link;
mod tasks;

bind_interrupts!(struct Irqs {
    USBCTRL_IRQ => UsbInterruptHandler<USB>;
    PIO0_IRQ_0 => PioInterruptHandler<PIO0>;
});

// Static cells for USB descriptor buffers (must live forever)
static CONFIG_DESCRIPTOR: StaticCell<[u8; 256]> = StaticCell::new();
static BOS_DESCRIPTOR: StaticCell<[u8; 256]> = StaticCell::new();
static CONTROL_BUF: StaticCell<[u8; 64]> = StaticCell::new();
static CDC_STATE: StaticCell<State> = StaticCell::new();

// The loaded PIO program must outlive the matrix driver
static WS2812_PROGRAM: StaticCell<PioWs2812Program<'static, PIO0>> = StaticCell::new();

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Lumo firmware starting...");

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    // OLED on I2C1 (BitDogLab: SDA=GPIO14, SCL=GPIO15, addr 0x3C)
    let mut i2c_config = i2c::Config::default();
    i2c_config.frequency = 400_000;
    let i2c = I2c::new_blocking(p.I2C1, p.PIN_15, p.PIN_14, i2c_config);
    let oled = match Oled::new(i2c) {
        Ok(oled) => oled,
        Err(_) => defmt::panic!("SSD1306 init failed"),
    };
    info!("OLED initialized");

    // RGB indicator LEDs (BitDogLab: green=GPIO11, blue=GPIO12,
    // red=GPIO13). The red channel is not used by this demo; it is
    // brought up driven low and left alone.
    let indicators = GpioIndicators::new(
        Output::new(p.PIN_11, Level::Low),
        Output::new(p.PIN_12, Level::Low),
    );
    let _red = Output::new(p.PIN_13, Level::Low);

    // Buttons (BitDogLab: A=GPIO5, B=GPIO6), wired to ground with
    // internal pull-ups; a press is a falling edge
    let button_a = Input::new(p.PIN_5, Pull::Up);
    let button_b = Input::new(p.PIN_6, Pull::Up);

    // WS2812 5x5 matrix on GPIO7 via PIO0
    let Pio {
        mut common, sm0, ..
    } = Pio::new(p.PIO0, Irqs);
    let program = WS2812_PROGRAM.init(PioWs2812Program::new(&mut common));
    let matrix = PioWs2812::new(&mut common, sm0, p.DMA_CH0, p.PIN_7, program);
    info!("WS2812 matrix initialized");

    // USB CDC serial (the Pico SDK CDC VID/PID)
    let usb_driver = Driver::new(p.USB, Irqs);
    let mut usb_config = embassy_usb::Config::new(0x2e8a, 0x000a);
    usb_config.manufacturer = Some("BitDogLab");
    usb_config.product = Some("Lumo serial");
    usb_config.max_power = 100;
    usb_config.max_packet_size_0 = 64;

    let mut builder = Builder::new(
        usb_driver,
        usb_config,
        CONFIG_DESCRIPTOR.init([0; 256]),
        BOS_DESCRIPTOR.init([0; 256]),
        &mut [], // no msos descriptors
        CONTROL_BUF.init([0; 64]),
    );
    let cdc = CdcAcmClass::new(&mut builder, CDC_STATE.init(State::new()), 64);
    let usb = builder.build();
    info!("USB serial initialized");

    // Spawn tasks
    spawner.spawn(tasks::usb_task(usb)).unwrap();
    spawner.spawn(tasks::serial_rx_task(cdc)).unwrap();
    spawner.spawn(tasks::button_task(button_a, ButtonId::A)).unwrap();
    spawner.spawn(tasks::button_task(button_b, ButtonId::B)).unwrap();
    spawner
        .spawn(tasks::controller_task(oled, matrix, indicators))
        .unwrap();

    info!("All tasks spawned, firmware running");

    // Main task has nothing else to do - all work happens in spawned
    // tasks. Keeps the red LED binding alive.
    loop {
        Timer::after_secs(60).await;
        trace!("Main loop heartbeat");
    }
}
