#![no_std]
#![no_main]

use board_diag_firmware as _; // memory layout + panic handler

#[defmt_test::tests]
mod tests {
    use board_diag_control::led::{Walk, ALL_OFF, ALL_ON};
    use board_diag_firmware::diagnostics::run_showcase;
    use board_diag_firmware::system::System;
    use board_diag_firmware::testlib::wait_until_button_is_clicked;

    #[init]
    fn init() -> System {
        let cp = cortex_m::Peripherals::take().unwrap();
        let dp = daisy::pac::Peripherals::take().unwrap();

        System::init(cp, dp)
    }

    #[test]
    fn leds_go_on_and_off(system: &mut System) {
        defmt::info!("Click the button SW0");
        wait_until_button_is_clicked(&system.buttons);

        system.leds.set_pattern(ALL_OFF);
        defmt::info!("Click the button if all leds are dimmed");
        wait_until_button_is_clicked(&system.buttons);

        system.leds.set_pattern(ALL_ON);
        defmt::info!("Click the button if all leds are lit up");
        wait_until_button_is_clicked(&system.buttons);
    }

    #[test]
    fn single_led_walks_on_click(system: &mut System) {
        let mut walk = Walk::default();
        for _ in 0..8 {
            system.leds.set_pattern(walk.pattern());
            let led = walk.pattern().trailing_zeros() + 1;
            defmt::info!("Click the button if only LED {} is lit up", led);
            wait_until_button_is_clicked(&system.buttons);
            walk.tick();
        }
        system.leds.set_pattern(ALL_OFF);
    }

    #[test]
    fn showcase_follows_held_buttons(system: &mut System) {
        defmt::info!("Hold SW0 and SW1 in turns, then press SW3 if the LEDs followed");
        run_showcase(&mut system.leds, &mut rtic::Exclusive(&mut system.buttons));
    }
}
