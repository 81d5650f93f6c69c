//! Diagnostics run on the board, one per entry of the main menu.
//!
//! The board has no console input, so all entries run in the order of the
//! menu and the operator interacts through buttons only.

use board_diag_control::button_test::DEFAULT_LINES;
use board_diag_control::led::{Walk, ALL_OFF, ALL_ON};
use board_diag_control::menu::{self, MainAction, MAIN_MENU};
use board_diag_control::showcase::{self, Showcase};
use board_diag_control::{arm, disarm, EdgeCapture, Error, State};
use heapless::String;
use rtic::Mutex;

use crate::report::LogReport;
use crate::system::buttons::Buttons;
use crate::system::leds::Leds;

const MILLISECOND: u32 = 480_000_000 / 1000;
const WALK_STEP_MS: u32 = 100;
const SHOWCASE_STEP_MS: u32 = 50;

pub fn run(
    leds: &mut Leds,
    buttons: &mut impl Mutex<T = Buttons>,
    capture: &'static EdgeCapture,
) {
    let mut text = String::<512>::new();
    if MAIN_MENU.render(&mut text).is_ok() {
        defmt::info!("{=str}", text.as_str());
    }

    for item in MAIN_MENU.items {
        defmt::info!("Running: {=str}", item.name);
        match item.action {
            MainAction::TestLeds => test_leds(leds),
            MainAction::TestButtons => match test_buttons(buttons, capture) {
                Ok(State::Complete) => defmt::info!("Button test passed"),
                Ok(State::Running) => defmt::warn!("Button test was stopped"),
                Err(error) => defmt::error!("Button test failed: {}", error),
            },
            MainAction::ProjectModification => run_showcase(leds, buttons),
            MainAction::SevenSegmentMenu | MainAction::UartMenu => {
                defmt::warn!("{=str} is not available on this board", item.name);
            }
        }
    }

    let mut text = String::<64>::new();
    if menu::write_farewell(&mut text).is_ok() {
        defmt::info!("{=str}", text.trim());
    }
}

pub fn test_leds(leds: &mut Leds) {
    defmt::info!("All LEDs should be lit up");
    leds.set_pattern(ALL_ON);
    delay_ms(2000);

    defmt::info!("All LEDs should be dimmed");
    leds.set_pattern(ALL_OFF);
    delay_ms(1000);

    defmt::info!("A single LED should walk to the end and back");
    let mut walk = Walk::default();
    for _ in 0..15 {
        leds.set_pattern(walk.pattern());
        delay_ms(WALK_STEP_MS);
        walk.tick();
    }
    leds.set_pattern(ALL_OFF);
}

/// Drive LEDs by the held buttons until SW3 is pressed.
pub fn run_showcase(leds: &mut Leds, buttons: &mut impl Mutex<T = Buttons>) {
    let mut text = String::<256>::new();
    if showcase::write_instructions(&mut text).is_ok() {
        defmt::info!("{=str}", text.as_str());
    }

    let mut showcase = Showcase::default();
    loop {
        let pressed = buttons.lock(|buttons| buttons.pressed_lines());
        let Some(pattern) = showcase.step(pressed) else {
            break;
        };
        leds.set_pattern(pattern);
        delay_ms(SHOWCASE_STEP_MS);
    }
    leds.set_pattern(ALL_OFF);
}

/// Block until every button was pressed at least once.
///
/// # Errors
///
/// Fails when the button port cannot be armed.
pub fn test_buttons(
    buttons: &mut impl Mutex<T = Buttons>,
    capture: &'static EdgeCapture,
) -> Result<State, Error> {
    let mut report = LogReport;
    report.introduce();

    let mut test = buttons.lock(|buttons| arm::<DEFAULT_LINES>(buttons, capture))?;
    let state = test.run_until(&mut report, || false);
    buttons.lock(|buttons| disarm(buttons, capture));

    Ok(state)
}

fn delay_ms(ms: u32) {
    for _ in 0..ms {
        cortex_m::asm::delay(MILLISECOND);
    }
}
