//! Tell the operator how the button test progresses.

use core::fmt::{self, Write};

use crate::button_test::Line;

/// Sink of button test notifications.
pub trait Report {
    /// Line was observed for the first time during this run.
    fn line_pressed(&mut self, line: Line);

    /// All `lines` were observed at least once.
    fn all_lines_tested(&mut self, lines: usize);
}

/// Render notifications as the text shown on the operator's console.
///
/// Formatting failures are remembered and returned by `finish`. Nothing more
/// gets written once one occurred.
pub struct TextReport<W> {
    writer: W,
    result: fmt::Result,
}

impl<W: Write> TextReport<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            result: Ok(()),
        }
    }

    /// Explain the test before it starts.
    pub fn introduce(&mut self) {
        self.emit(format_args!(
            "\nA loop will be run until all buttons/switches have been pressed.\n\n"
        ));
        self.emit(format_args!(
            "\n\tNOTE:  Once a button press has been detected, for a particular button,\n\tany further presses will be ignored!\n\n"
        ));
    }

    /// # Errors
    ///
    /// Returns the first error raised by the writer.
    pub fn finish(self) -> Result<W, fmt::Error> {
        self.result.map(|()| self.writer)
    }

    fn emit(&mut self, args: fmt::Arguments) {
        if self.result.is_ok() {
            self.result = self.writer.write_fmt(args);
        }
    }
}

impl<W: Write> Report for TextReport<W> {
    fn line_pressed(&mut self, line: Line) {
        self.emit(format_args!(
            "\nButton {} (SW{}) Pressed.\n",
            line.number(),
            line.index()
        ));
    }

    fn all_lines_tested(&mut self, lines: usize) {
        self.emit(format_args!(
            "\nAll Buttons (SW0-SW{}) were pressed, at least, once.\n",
            lines.saturating_sub(1)
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use heapless::String;

    #[test]
    fn when_line_is_pressed_it_names_button_and_switch() {
        let mut report = TextReport::new(String::<64>::new());
        report.line_pressed(Line::new(2));
        let text = report.finish().unwrap();
        assert_eq!(text.as_str(), "\nButton 3 (SW2) Pressed.\n");
    }

    #[test]
    fn when_all_lines_are_tested_it_names_the_switch_range() {
        let mut report = TextReport::new(String::<64>::new());
        report.all_lines_tested(4);
        let text = report.finish().unwrap();
        assert_eq!(
            text.as_str(),
            "\nAll Buttons (SW0-SW3) were pressed, at least, once.\n"
        );
    }

    #[test]
    fn when_writer_overflows_it_reports_the_error() {
        let mut report = TextReport::new(String::<8>::new());
        report.line_pressed(Line::new(0));
        report.line_pressed(Line::new(1));
        assert!(report.finish().is_err());
    }

    #[test]
    fn introduction_warns_about_ignored_presses() {
        let mut report = TextReport::new(String::<256>::new());
        report.introduce();
        let text = report.finish().unwrap();
        assert!(text.contains("any further presses will be ignored!"));
    }
}
