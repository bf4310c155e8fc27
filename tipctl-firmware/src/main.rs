//! tipctl - Soldering Iron Supervisor Firmware
//!
//! Main firmware binary for battery-powered RP2040 soldering irons.
//! One cooperative loop owns the iron: every pass acknowledges the
//! watchdog, runs the safety interlock and the mode controller, then does
//! the platform housekeeping (tip regulation, input sampling) and yields.
//! A watchdog reset lands in the fault trap instead, with the heater
//! latched off until the iron is power cycled.

#![no_std]
#![no_main]

use core::cell::RefCell;

use defmt::*;
use embassy_executor::Spawner;
use embassy_futures::yield_now;
use embassy_rp::adc::{Adc, Channel, Config as AdcConfig};
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_rp::peripherals::PIN_13;
use embassy_rp::uart::{Blocking, Config as UartConfig, UartTx};
use embassy_rp::Peri;
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use tipctl_core::config::{commit, load_or_reset, ConfigSource};
use tipctl_core::control::{BootSequence, Peripherals};
use tipctl_core::mode::InputEvent;
use tipctl_core::time::Tick;
use tipctl_core::tip::Tip;
use tipctl_core::watchdog::{FaultTrap, Startup, TrippedWatchdog};
use tipctl_drivers::diag::LineWriter;
use tipctl_drivers::display::SegmentFrame;
use tipctl_drivers::heater::GpioHeater;
use tipctl_drivers::input::InputQueue;
use tipctl_drivers::tip::TipController;
use tipctl_hal_rp2040::{BoardSensing, FlashConfigStore, RpWatchdog, SegmentMux, SharedAdc, ThermocoupleInput};

use crate::display::SharedFrame;
use crate::input::{Button, InputScanner};
use crate::tasks::TICKS;

mod board;
mod display;
mod input;
mod tasks;

type Heater = GpioHeater<Output<'static>>;
type Display = SegmentFrame<SharedFrame>;
type Log = LineWriter<UartTx<'static, Blocking>>;

// The ADC is shared by the thermocouple and battery channels
static ADC: StaticCell<SharedAdc<'static>> = StaticCell::new();

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("tipctl firmware starting...");

    let p = embassy_rp::init(Default::default());

    // Heater gate low before anything else can run
    let heater = heater_output(p.PIN_13);

    let watchdog = RpWatchdog::new(p.WATCHDOG);
    let startup = Startup::check(watchdog);
    info!("Watchdog armed, state: {:?}", startup.state());

    // Display multiplexing (GPIO2..=9 segments, GPIO10..=12 digits)
    let segments = [
        Output::new(p.PIN_2, Level::Low),
        Output::new(p.PIN_3, Level::Low),
        Output::new(p.PIN_4, Level::Low),
        Output::new(p.PIN_5, Level::Low),
        Output::new(p.PIN_6, Level::Low),
        Output::new(p.PIN_7, Level::Low),
        Output::new(p.PIN_8, Level::Low),
        Output::new(p.PIN_9, Level::Low),
    ];
    let digits = [
        Output::new(p.PIN_10, Level::High),
        Output::new(p.PIN_11, Level::High),
        Output::new(p.PIN_12, Level::High),
    ];
    spawner.spawn(tasks::tick_task()).unwrap();
    spawner.spawn(tasks::display_mux_task(SegmentMux::new(segments, digits))).unwrap();

    // Diagnostic log on UART0 TX (GPIO0)
    let mut uart_config = UartConfig::default();
    uart_config.baudrate = board::UART_BAUD;
    let log: Log = LineWriter::new(UartTx::new_blocking(p.UART0, p.PIN_0, uart_config));
    let display: Display = SegmentFrame::new(SharedFrame);

    let mut supervisor = match startup {
        Startup::Tripped(watchdog) => {
            error!("Watchdog reset detected, heater locked off");
            fault_trap(watchdog, heater, display, log).await
        }
        Startup::Normal(supervisor) => supervisor,
    };

    // Inputs (active-low buttons, quadrature encoder)
    let menu = Button::new(Input::new(p.PIN_17, Pull::Up), InputEvent::Menu);
    let force_defaults = board::FORCE_DEFAULT_CONFIG || menu.held_at_boot().await;
    let mut scanner = InputScanner::new(
        [
            Button::new(Input::new(p.PIN_14, Pull::Up), InputEvent::Up),
            Button::new(Input::new(p.PIN_15, Pull::Up), InputEvent::Down),
            Button::new(Input::new(p.PIN_16, Pull::Up), InputEvent::Select),
            menu,
        ],
        Input::new(p.PIN_20, Pull::Up),
        Input::new(p.PIN_21, Pull::Up),
        board::ENCODER_STEPS_PER_DETENT,
    );
    let mut queue = InputQueue::new();

    // Configuration, read once
    let mut store = FlashConfigStore::new(p.FLASH, p.DMA_CH0);
    let (config, source) = load_or_reset(&mut store, force_defaults).await;
    match source {
        ConfigSource::Stored => info!("Config loaded from flash"),
        ConfigSource::Requested => info!("Config reset to defaults on request"),
        ConfigSource::Missing => info!("No stored config, using defaults"),
        ConfigSource::Rejected(e) => warn!("Stored config rejected ({:?}), using defaults", e),
    }
    supervisor.acknowledge();

    // Sensing: thermocouple on ADC0 (GPIO26), battery on ADC1 (GPIO27)
    let adc: &'static SharedAdc<'static> = ADC.init(RefCell::new(Adc::new_blocking(p.ADC, AdcConfig::default())));
    let thermocouple = ThermocoupleInput::new(adc, Channel::new_pin(p.PIN_26, Pull::None));
    let sensing = BoardSensing::new(
        adc,
        Channel::new_pin(p.PIN_27, Pull::None),
        board::battery_gauge(),
        Input::new(p.PIN_22, Pull::Up),
    );

    let driver = TipController::new(thermocouple, heater, board::tip_config());
    let mut io = Peripherals {
        tip: Tip::new(driver, config.min_temp, config.max_temp),
        display,
        sensing,
        log,
    };
    info!("Peripherals initialized");

    // Warm-up
    let mut last_tick: Tick = TICKS.now();
    let mut boot = BootSequence::begin(config, last_tick, &mut supervisor, &mut io);
    loop {
        let now = TICKS.now();
        if boot.poll(now, &mut supervisor, &mut io) {
            break;
        }
        if now != last_tick {
            last_tick = now;
            io.tip.driver_mut().regulate();
        }
        yield_now().await;
    }
    let mut controller = boot.finish(TICKS.now(), &mut supervisor, &mut io);
    info!("Boot complete, setpoint {}", controller.setpoint());

    loop {
        let now = TICKS.now();
        let outcome = controller.step(now, &mut supervisor, &mut io, queue.drain());

        if let Some(edge) = outcome.battery {
            info!("Battery interlock: {:?}", edge);
        }
        if let Some(mode) = outcome.mode {
            info!("Mode -> {:?}", mode);
        }
        if let Some(config) = outcome.commit {
            match commit(&mut store, &mut supervisor, &config).await {
                Ok(()) => info!("Config saved"),
                Err(e) => warn!("Config save failed: {:?}", e),
            }
        }

        // Housekeeping
        scanner.poll_encoder(&mut queue);
        if now != last_tick {
            last_tick = now;
            io.tip.driver_mut().regulate();
            scanner.poll_buttons(&mut queue);
        }
        yield_now().await;
    }
}

fn heater_output(pin: Peri<'static, PIN_13>) -> Heater {
    let level = if board::HEATER_INVERTED { Level::High } else { Level::Low };
    GpioHeater::new(Output::new(pin, level), board::HEATER_INVERTED)
}

/// Fault trap loop, left only by power cycling
async fn fault_trap(watchdog: TrippedWatchdog<RpWatchdog>, heater: Heater, mut display: Display, mut log: Log) -> ! {
    let mut trap = FaultTrap::engage(watchdog, heater, TICKS.now());
    loop {
        trap.service(TICKS.now(), &mut display, &mut log);
        yield_now().await;
    }
}
