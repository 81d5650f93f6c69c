use crate::system::buttons::Buttons;

const MILLISECOND: u32 = 480_000_000 / 1000;

/// Block until the first button is pressed and released.
pub fn wait_until_button_is_clicked(buttons: &Buttons) {
    let mut was_down = false;
    loop {
        let is_down = buttons.pressed()[0];
        if was_down && !is_down {
            break;
        }
        was_down = is_down;
        cortex_m::asm::delay(MILLISECOND);
    }
    // Let the contact settle before it is sampled again.
    cortex_m::asm::delay(50 * MILLISECOND);
}
