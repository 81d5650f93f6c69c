//! Operator messages sent over the defmt log.

use board_diag_control::{Line, Report, TextReport};
use heapless::String;

/// Render each message as console text and log it as one record.
pub struct LogReport;

impl LogReport {
    pub fn introduce(&mut self) {
        log(TextReport::introduce);
    }
}

impl Report for LogReport {
    fn line_pressed(&mut self, line: Line) {
        log(|report| report.line_pressed(line));
    }

    fn all_lines_tested(&mut self, lines: usize) {
        log(|report| report.all_lines_tested(lines));
    }
}

fn log(render: impl FnOnce(&mut TextReport<String<256>>)) {
    let mut report = TextReport::new(String::new());
    render(&mut report);
    match report.finish() {
        Ok(text) => defmt::info!("{=str}", text.trim()),
        Err(_) => defmt::warn!("Message did not fit the buffer"),
    }
}
