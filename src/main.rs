//! Demo firmware: set the date, then the time, with a rotary encoder on an
//! SSD1306 OLED (nRF52840).

#![no_std]
#![no_main]

use chrono::{Datelike, NaiveDate, NaiveTime, Timelike};
use defmt::{info, unwrap};
use embassy_executor::Spawner;
use embassy_nrf::gpio::{AnyPin, Pin};
use embassy_nrf::twim::{self, Twim};
use embassy_nrf::{bind_interrupts, peripherals};
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;
use menu_adjust::config::INPUT_QUEUE_DEPTH;
use menu_adjust::ui::buttons::{button_task, encoder_task};
use menu_adjust::ui::display::{self, Display};
use menu_adjust::{Adjust, DateAdjust, InputEvent, Session, TimeAdjust};

use defmt_rtt as _;
use panic_probe as _;

bind_interrupts!(struct Irqs {
    SPIM0_SPIS0_TWIM0_TWIS0_SPI0_TWI0 => twim::InterruptHandler<peripherals::TWISPI0>;
});

static INPUT: Channel<CriticalSectionRawMutex, InputEvent, INPUT_QUEUE_DEPTH> = Channel::new();

#[embassy_executor::task]
async fn click(pin: AnyPin) {
    let tx = INPUT.sender();
    button_task(pin, &tx).await
}

#[embassy_executor::task]
async fn encoder(a: AnyPin, b: AnyPin) {
    let tx = INPUT.sender();
    encoder_task(a, b, &tx).await
}

/// Drive one widget until it commits.
async fn run<I2C, W>(display: &mut Display<I2C>, widget: W)
where
    I2C: embedded_hal::i2c::I2c,
    W: Adjust,
{
    let mut session = Session::new();
    session.open(widget);
    let Some(first) = session.render() else {
        return;
    };
    display::show(display, &first);

    loop {
        let event = INPUT.receive().await;
        match session.handle(event) {
            Some(view) => display::show(display, &view),
            None => return,
        }
    }
}

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    let p = embassy_nrf::init(Default::default());
    info!("menu-adjust demo starting");

    let i2c = Twim::new(p.TWISPI0, Irqs, p.P0_26, p.P0_27, twim::Config::default());
    let mut oled = display::init(i2c);

    unwrap!(spawner.spawn(encoder(p.P0_11.degrade(), p.P0_12.degrade())));
    unwrap!(spawner.spawn(click(p.P0_24.degrade())));

    let start = unwrap!(NaiveDate::from_ymd_opt(2025, 1, 1));
    let mut on_date = |d: NaiveDate| info!("date set: {}-{}-{}", d.year(), d.month(), d.day());
    run(&mut oled, DateAdjust::new("Set date", start).on_commit(&mut on_date)).await;

    let mut on_time = |t: NaiveTime| info!("time set: {}:{}:{}", t.hour(), t.minute(), t.second());
    run(&mut oled, TimeAdjust::new("Set time", NaiveTime::default()).on_commit(&mut on_time)).await;

    display::show_message(&mut oled, "Saved");
    core::future::pending::<()>().await;
}
