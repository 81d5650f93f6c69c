#![no_main]
#![no_std]

use board_diag_firmware as _; // global logger + panicking-behavior

#[rtic::app(device = stm32h7xx_hal::pac, peripherals = true, dispatchers = [EXTI0, EXTI1, EXTI2])]
mod app {
    use daisy::led::{Led, LedUser};
    use fugit::ExtU64;
    use systick_monotonic::Systick;

    use board_diag_control::EdgeCapture;
    use board_diag_firmware::diagnostics;
    use board_diag_firmware::system::buttons::Buttons;
    use board_diag_firmware::system::leds::Leds;
    use board_diag_firmware::system::System;

    const BLINKS: u8 = 1;

    #[monotonic(binds = SysTick, default = true)]
    type Mono = Systick<1000>; // 1 kHz / 1 ms granularity

    #[shared]
    struct Shared {
        buttons: Buttons,
    }

    #[local]
    struct Local {
        status_led: LedUser,
        leds: Leds,
        capture: &'static EdgeCapture,
    }

    #[init(local = [capture: EdgeCapture = EdgeCapture::new()])]
    fn init(cx: init::Context) -> (Shared, Local, init::Monotonics) {
        defmt::info!("INIT");

        let system = System::init(cx.core, cx.device);
        let mono = system.mono;
        let status_led = system.status_led;
        let buttons = system.buttons;
        let leds = system.leds;
        let capture: &'static EdgeCapture = cx.local.capture;

        blink::spawn(true, BLINKS).unwrap();

        (
            Shared { buttons },
            Local {
                status_led,
                leds,
                capture,
            },
            init::Monotonics(mono),
        )
    }

    #[idle(local = [leds, capture], shared = [buttons])]
    fn idle(mut cx: idle::Context) -> ! {
        diagnostics::run(cx.local.leds, &mut cx.shared.buttons, *cx.local.capture);

        loop {
            cortex_m::asm::nop();
        }
    }

    // Buttons 0 and 1 sit on lines 8 and 9, buttons 2 and 3 on 13 and 14.
    #[task(binds = EXTI9_5, shared = [buttons], priority = 2)]
    fn buttons_low(mut cx: buttons_low::Context) {
        cx.shared.buttons.lock(|buttons| buttons.interrupt());
    }

    #[task(binds = EXTI15_10, shared = [buttons], priority = 2)]
    fn buttons_high(mut cx: buttons_high::Context) {
        cx.shared.buttons.lock(|buttons| buttons.interrupt());
    }

    #[task(local = [status_led])]
    fn blink(cx: blink::Context, on: bool, blinks: u8) {
        let time_on = 200.millis();
        let time_off_short = 200.millis();
        let time_off_long = 2.secs();

        if on {
            cx.local.status_led.on();
            blink::spawn_after(time_on, false, blinks).unwrap();
        } else {
            cx.local.status_led.off();
            if blinks > 1 {
                blink::spawn_after(time_off_short, true, blinks - 1).unwrap();
            } else {
                blink::spawn_after(time_off_long, true, BLINKS).unwrap();
            }
        }
    }
}
