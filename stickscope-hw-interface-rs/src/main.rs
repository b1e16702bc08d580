//! stickscope-hw-interface
//!
//! Joystick → LEDs + OLED firmware for the Raspberry Pi Pico (RP2040) on a
//! BitDogLab-style carrier board. Two tasks share one [`SharedMode`]:
//!
//! 1. `input_task` waits for a falling edge on any of the three buttons and
//!    routes it through [`SharedMode::handle_edge`]: button A toggles the
//!    red/blue brightness output, the joystick switch advances the border and
//!    flips the green LED, button B reboots into the USB bootloader.
//! 2. `control_task` runs every 50 ms: sample both joystick axes, take one
//!    mode snapshot, drive the PWM LEDs, move the cursor on the OLED and,
//!    once a second, log a diagnostic snapshot over RTT.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_futures::select::{select3, Either3};
use embassy_rp::adc::{self, Adc, Channel};
use embassy_rp::bind_interrupts;
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_rp::i2c::{self, I2c};
use embassy_rp::peripherals::I2C1;
use embassy_rp::pwm::{self, Pwm};
use embassy_time::{Instant, Timer};
use embedded_graphics::prelude::Point;
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use stickscope::{AxisPair, ControlConfig, ControlLoop, EdgeOutcome, InputSource, SharedMode, Tick};
use stickscope_oled_display_rs::{
    cursor_position, DisplayConfig, OledDriver, Renderer, DEFAULT_ADDRESS,
};

// ---------------------------------------------------------------------------
// Interrupt binding
// ---------------------------------------------------------------------------

bind_interrupts!(struct Irqs {
    I2C1_IRQ => i2c::InterruptHandler<I2C1>;
    ADC_IRQ_FIFO => adc::InterruptHandler;
});

// ---------------------------------------------------------------------------
// Static storage
// ---------------------------------------------------------------------------

/// Mode state: written by the input task, snapshotted by the control task.
static MODE: StaticCell<SharedMode> = StaticCell::new();

// ---------------------------------------------------------------------------
// Peripheral wrappers
// ---------------------------------------------------------------------------

/// Concrete I2C type for the OLED display (sole device on I2C1).
type OledI2c = I2c<'static, I2C1, i2c::Async>;

/// Both joystick axes on the ADC.
struct Joystick {
    adc: Adc<'static, adc::Async>,
    x: Channel<'static>,
    y: Channel<'static>,
    last: AxisPair<u16>,
}

impl Joystick {
    /// Read both axes. A failed conversion keeps that axis' previous value
    /// so the loop always has a sample to work with.
    async fn sample(&mut self) -> AxisPair<u16> {
        match self.adc.read(&mut self.x).await {
            Ok(v) => self.last.x = v,
            Err(e) => warn!("VRX read failed: {}", Debug2Format(&e)),
        }
        match self.adc.read(&mut self.y).await {
            Ok(v) => self.last.y = v,
            Err(e) => warn!("VRY read failed: {}", Debug2Format(&e)),
        }
        self.last
    }
}

/// Red (channel B, X axis) and blue (channel A, Y axis) LEDs on one slice.
struct BrightnessLeds {
    pwm: Pwm<'static>,
    config: pwm::Config,
}

impl BrightnessLeds {
    fn set(&mut self, duty: AxisPair<u16>) {
        if self.config.compare_b == duty.x && self.config.compare_a == duty.y {
            return;
        }
        self.config.compare_b = duty.x;
        self.config.compare_a = duty.y;
        self.pwm.set_config(&self.config);
    }
}

/// The three active-low push-buttons.
struct Buttons {
    brightness: Input<'static>,
    mode: Input<'static>,
    reflash: Input<'static>,
}

impl Buttons {
    /// Wait for the next falling edge on any button.
    async fn next_edge(&mut self) -> InputSource {
        match select3(
            self.brightness.wait_for_falling_edge(),
            self.mode.wait_for_falling_edge(),
            self.reflash.wait_for_falling_edge(),
        )
        .await
        {
            Either3::First(()) => InputSource::BrightnessButton,
            Either3::Second(()) => InputSource::ModeButton,
            Either3::Third(()) => InputSource::ReflashButton,
        }
    }
}

/// Hand control to the boot ROM's USB mass-storage loader.
fn enter_usb_bootloader() -> ! {
    embassy_rp::rom_data::reset_to_usb_boot(0, 0);
    loop {
        cortex_m::asm::wfi();
    }
}

// ---------------------------------------------------------------------------
// Tasks
// ---------------------------------------------------------------------------

/// Edge router.
///
/// One read-modify-write of the shared mode per edge; the green LED is
/// updated right after a mode event, outside the critical section.
#[embassy_executor::task]
async fn input_task(
    mut buttons: Buttons,
    mut indicator: Output<'static>,
    mode: &'static SharedMode,
) {
    info!("Input task started");

    loop {
        let source = buttons.next_edge().await;

        match mode.handle_edge(source, Instant::now().as_millis()) {
            EdgeOutcome::Debounced => {}
            EdgeOutcome::BrightnessToggled { enabled } => {
                info!("Brightness output {}", if enabled { "on" } else { "off" });
            }
            EdgeOutcome::ModeAdvanced { border, indicator: level } => {
                indicator.set_level(Level::from(level));
                info!("Border style {}", border.index());
            }
            EdgeOutcome::Reflash => {
                info!("BOOTSEL activated");
                enter_usb_bootloader();
            }
        }
    }
}

/// Fixed-cadence sensor → output loop. Never returns.
#[embassy_executor::task]
async fn control_task(
    mut joystick: Joystick,
    mut leds: BrightnessLeds,
    mut oled: OledDriver<OledI2c>,
    mode: &'static SharedMode,
    config: ControlConfig,
) {
    // Blank the panel before the first frame. Without a display the loop
    // still drives the LEDs and logs diagnostics.
    match oled.init().await {
        Ok(()) => info!("OLED initialised"),
        Err(e) => error!("OLED init failed: {}", e),
    }

    // The stick must be at rest here: this sample becomes the centre.
    let baseline = joystick.sample().await;
    info!("Calibration baseline: x={} y={}", baseline.x, baseline.y);

    let mut control = ControlLoop::new(baseline, &config);
    let mut renderer = Renderer::new(DisplayConfig::default());

    loop {
        let raw = joystick.sample().await;
        let tick = control.step(raw, mode.snapshot(), Instant::now().as_millis());

        leds.set(tick.duty);
        let drawn = draw_frame(&mut oled, &mut renderer, &tick).await;

        if tick.diagnostics_due {
            // No display: report where the cursor would have gone.
            let cursor = drawn
                .unwrap_or_else(|| cursor_position(tick.frame.deviation, renderer.config()));
            info!("{}", control.snapshot(&tick, (cursor.x, cursor.y)));
        }

        Timer::after_millis(config.tick_period_ms).await;
    }
}

/// Render one frame and send it, returning the cursor that was drawn.
///
/// `None` when the display is not initialised or rendering failed. Errors
/// are logged and the tick goes on; a failed send still returns the cursor
/// since the buffer holds it.
async fn draw_frame(
    oled: &mut OledDriver<OledI2c>,
    renderer: &mut Renderer,
    tick: &Tick,
) -> Option<Point> {
    let canvas = oled.canvas()?;
    let cursor = match renderer.render(canvas, tick.mode.border, tick.frame.deviation) {
        Ok(cursor) => cursor,
        Err(e) => {
            error!("Render failed: {}", Debug2Format(&e));
            return None;
        }
    };
    if let Err(e) = oled.send().await {
        error!("Send failed: {}", e);
    }
    Some(cursor)
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    let p = embassy_rp::init(Default::default());
    info!("stickscope-hw-interface starting");

    // —— Pin assignments ————————————————————————————————————————————————————
    // I2C1_SDA → GP14  OLED, 400 kHz, address 0x3C
    // I2C1_SCL → GP15
    // VRX      → GP27  (ADC1)
    // VRY      → GP26  (ADC0)
    // BTN_A    → GP5   brightness toggle, active-low, pull-up
    // BTN_B    → GP6   USB bootloader, active-low, pull-up
    // STICK_SW → GP22  border / green LED, active-low, pull-up
    // LED_R    → GP13  PWM6 B
    // LED_B    → GP12  PWM6 A
    // LED_G    → GP11  plain output
    // ———————————————————————————————————————————————————————————————————————

    let config = ControlConfig::default();
    let mode = MODE.init(SharedMode::new(config.initial_mode()));

    // Joystick on the ADC.
    let joystick = Joystick {
        adc: Adc::new(p.ADC, Irqs, adc::Config::default()),
        x: Channel::new_pin(p.PIN_27, Pull::None),
        y: Channel::new_pin(p.PIN_26, Pull::None),
        last: AxisPair::default(),
    };

    // Red/blue LEDs share PWM slice 6; both start dark.
    let mut pwm_config = pwm::Config::default();
    pwm_config.top = config.pwm_top;
    pwm_config.compare_a = 0;
    pwm_config.compare_b = 0;
    let leds = BrightnessLeds {
        pwm: Pwm::new_output_ab(p.PWM_SLICE6, p.PIN_12, p.PIN_13, pwm_config.clone()),
        config: pwm_config,
    };

    // OLED on I2C1.
    let mut i2c_config = i2c::Config::default();
    i2c_config.frequency = 400_000;
    let i2c = I2c::new_async(
        p.I2C1,
        p.PIN_15, // SCL
        p.PIN_14, // SDA
        Irqs,
        i2c_config,
    );
    let oled = OledDriver::new(i2c, DEFAULT_ADDRESS);

    let buttons = Buttons {
        brightness: Input::new(p.PIN_5, Pull::Up),
        mode: Input::new(p.PIN_22, Pull::Up),
        reflash: Input::new(p.PIN_6, Pull::Up),
    };
    let indicator = Output::new(p.PIN_11, Level::Low);

    // —— Spawn tasks ————————————————————————————————————————————————————————

    spawner.spawn(input_task(buttons, indicator, mode)).unwrap();
    spawner
        .spawn(control_task(joystick, leds, oled, mode, config))
        .unwrap();

    info!("All tasks spawned");
}
