//! Button and encoder sampling

use embassy_rp::gpio::Input;
use embassy_time::Timer;
use tipctl_core::mode::InputEvent;
use tipctl_drivers::input::{ButtonDebouncer, InputQueue, RotaryDecoder};

/// Pull-up settling time before the boot-time button check
const BOOT_SETTLE_MS: u64 = 5;

/// Samples taken for the boot-time button check
const BOOT_SAMPLES: u8 = 8;
const BOOT_SAMPLE_MS: u64 = 2;

/// One debounced push button and the event it produces
pub struct Button {
    pin: Input<'static>,
    debouncer: ButtonDebouncer,
    event: InputEvent,
}

impl Button {
    /// Active-low button
    pub fn new(pin: Input<'static>, event: InputEvent) -> Self {
        Self {
            pin,
            debouncer: ButtonDebouncer::default(),
            event,
        }
    }

    /// Check if the button is held right now (undebounced)
    pub fn is_held(&self) -> bool {
        self.pin.is_low()
    }

    /// Check if the button is held down through power-up
    ///
    /// Waits for the pull-up to settle, then needs a debounced press
    /// within `BOOT_SAMPLES` samples.
    pub async fn held_at_boot(&self) -> bool {
        Timer::after_millis(BOOT_SETTLE_MS).await;

        let mut debouncer = ButtonDebouncer::default();
        for _ in 0..BOOT_SAMPLES {
            debouncer.update(self.is_held());
            Timer::after_millis(BOOT_SAMPLE_MS).await;
        }
        debouncer.is_pressed()
    }
}

/// Turns pin levels into queued `InputEvent`s
pub struct InputScanner {
    buttons: [Button; 4],
    encoder_a: Input<'static>,
    encoder_b: Input<'static>,
    rotary: RotaryDecoder,
}

impl InputScanner {
    pub fn new(buttons: [Button; 4], encoder_a: Input<'static>, encoder_b: Input<'static>, steps_per_detent: i8) -> Self {
        let rotary = RotaryDecoder::new(encoder_a.is_high(), encoder_b.is_high(), steps_per_detent);
        Self {
            buttons,
            encoder_a,
            encoder_b,
            rotary,
        }
    }

    /// Sample the buttons; call once per tick so the debounce spans ticks
    pub fn poll_buttons(&mut self, queue: &mut InputQueue) {
        for button in self.buttons.iter_mut() {
            let held = button.is_held();
            if button.debouncer.update(held) {
                queue.push(button.event);
            }
        }
    }

    /// Sample the encoder; call as often as possible
    pub fn poll_encoder(&mut self, queue: &mut InputQueue) {
        if let Some(event) = self.rotary.update(self.encoder_a.is_high(), self.encoder_b.is_high()) {
            queue.push(event);
        }
    }
}
