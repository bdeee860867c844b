//! GPIO input tasks: rotary encoder and its push button.
//!
//! Both pins are active-low with internal pull-ups:
//!   - Encoder A/B - quadrature pair, decoded into scroll deltas
//!   - Push button - click, debounced
//!
//! Each task waits for a GPIO edge and sends an `InputEvent` to the UI
//! channel.

use crate::config::{BUTTON_DEBOUNCE_MS, INPUT_QUEUE_DEPTH};
use crate::ui::input_logic::Quadrature;
use crate::ui::InputEvent;
use defmt::info;
use embassy_futures::select::select;
use embassy_nrf::gpio::{AnyPin, Input, Pull};
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Sender;
use embassy_time::{Duration, Timer};

pub type InputSender = Sender<'static, CriticalSectionRawMutex, InputEvent, INPUT_QUEUE_DEPTH>;

/// Run the push-button loop.
///
/// Waits for the pin to go low (pressed), debounces, sends `Click`,
/// then waits for release before repeating.
pub async fn button_task(pin: AnyPin, tx: &InputSender) -> ! {
    let mut btn = Input::new(pin, Pull::Up);

    loop {
        // Wait for falling edge (button press, active-low).
        btn.wait_for_falling_edge().await;

        // Debounce: wait and re-check.
        Timer::after(Duration::from_millis(BUTTON_DEBOUNCE_MS)).await;

        if btn.is_low() {
            info!("Button: click");
            tx.send(InputEvent::Click).await;

            // Wait for release to avoid repeat triggers.
            btn.wait_for_rising_edge().await;
            Timer::after(Duration::from_millis(BUTTON_DEBOUNCE_MS)).await;
        }
    }
}

/// Run the encoder loop: decode every edge on A or B into detents.
pub async fn encoder_task(pin_a: AnyPin, pin_b: AnyPin, tx: &InputSender) -> ! {
    let mut a = Input::new(pin_a, Pull::Up);
    let mut b = Input::new(pin_b, Pull::Up);
    let mut decoder = Quadrature::new(a.is_high(), b.is_high());

    loop {
        select(a.wait_for_any_edge(), b.wait_for_any_edge()).await;

        if let Some(delta) = decoder.update(a.is_high(), b.is_high()) {
            info!("Encoder: {}", delta);
            tx.send(InputEvent::Scroll(delta)).await;
        }
    }
}
