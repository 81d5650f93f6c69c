pub mod buttons;
pub mod leds;

pub use daisy::hal;

use daisy::led::LedUser;
use hal::pac::CorePeripherals;
use hal::pac::Peripherals as DevicePeripherals;
use systick_monotonic::Systick;

use buttons::{Buttons, Config as ButtonsConfig, Pins as ButtonsPins};
use leds::{Leds, Pins as LedsPins};

pub struct System {
    pub mono: Systick<1000>,
    pub status_led: LedUser,
    pub buttons: Buttons,
    pub leds: Leds,
}

impl System {
    /// Initialize system abstraction
    ///
    /// # Panics
    ///
    /// The system can be initialized only once. It panics otherwise.
    #[must_use]
    pub fn init(mut cp: CorePeripherals, dp: DevicePeripherals) -> Self {
        enable_cache(&mut cp);

        let board = daisy::Board::take().unwrap();
        let ccdr = daisy::board_freeze_clocks!(board, dp);
        let pins = daisy::board_split_gpios!(board, ccdr, dp);

        let mono = Systick::new(cp.SYST, 480_000_000);
        let status_led = daisy::board_split_leds!(pins).USER;

        let mut syscfg = dp.SYSCFG;
        let buttons = Buttons::new(
            ButtonsConfig {
                pins: ButtonsPins {
                    button_0: pins.GPIO.PIN_B7.into_pull_up_input(),
                    button_1: pins.GPIO.PIN_B8.into_pull_up_input(),
                    button_2: pins.GPIO.PIN_B6.into_pull_up_input(),
                    button_3: pins.GPIO.PIN_B9.into_pull_up_input(),
                },
                exti: dp.EXTI,
            },
            &mut syscfg,
        );
        let leds = Leds::new(LedsPins {
            display: (
                pins.GPIO.PIN_D9.into_push_pull_output(),
                pins.GPIO.PIN_D7.into_push_pull_output(),
                pins.GPIO.PIN_D4.into_push_pull_output(),
                pins.GPIO.PIN_D2.into_push_pull_output(),
                pins.GPIO.PIN_D10.into_push_pull_output(),
                pins.GPIO.PIN_D8.into_push_pull_output(),
                pins.GPIO.PIN_D3.into_push_pull_output(),
                pins.GPIO.PIN_D1.into_push_pull_output(),
            ),
        });

        Self {
            mono,
            status_led,
            buttons,
            leds,
        }
    }
}

/// AN5212: Improve application performance when fetching instruction and
/// data, from both internal andexternal memories.
fn enable_cache(cp: &mut CorePeripherals) {
    cp.SCB.enable_icache();
    // NOTE: This requires cache management around all use of DMA.
    cp.SCB.enable_dcache(&mut cp.CPUID);
}
