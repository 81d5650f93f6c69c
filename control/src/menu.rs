//! Text menus offered to the operator on the console.

use core::fmt::{self, Write};

const RULE: &str = "----------------------------------";
const ESCAPE: char = '\u{1b}';
const QUIT: char = 'q';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Item<A> {
    pub key: char,
    pub name: &'static str,
    pub action: A,
}

/// Menu mapping single keys to actions.
///
/// The key `q` is reserved for leaving the menu.
#[derive(Debug, Clone, Copy)]
pub struct Menu<A: 'static> {
    pub title: &'static str,
    pub items: &'static [Item<A>],
}

/// What the operator asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Selection<A> {
    Action(A),
    Quit,
    Invalid(char),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MainAction {
    TestLeds,
    TestButtons,
    SevenSegmentMenu,
    UartMenu,
    ProjectModification,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SevenSegmentAction {
    Count,
    Control,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum UartAction {
    SendLots,
    ReceiveChars,
}

pub const MAIN_MENU: Menu<MainAction> = Menu {
    title: "Main Menu",
    items: &[
        Item {
            key: 'a',
            name: "Test LEDs",
            action: MainAction::TestLeds,
        },
        Item {
            key: 'c',
            name: "Button/Switch Test",
            action: MainAction::TestButtons,
        },
        Item {
            key: 'd',
            name: "Seven Segment Menu",
            action: MainAction::SevenSegmentMenu,
        },
        Item {
            key: 'e',
            name: "UART Menu",
            action: MainAction::UartMenu,
        },
        Item {
            key: 'f',
            name: "Project Modification",
            action: MainAction::ProjectModification,
        },
    ],
};

pub const SEVEN_SEGMENT_MENU: Menu<SevenSegmentAction> = Menu {
    title: "Seven Segment Menu",
    items: &[
        Item {
            key: 'a',
            name: "Count From 0 to FF.",
            action: SevenSegmentAction::Count,
        },
        Item {
            key: 'b',
            name: "Control Individual Segments.",
            action: SevenSegmentAction::Control,
        },
    ],
};

pub const UART_MENU: Menu<UartAction> = Menu {
    title: "UART Menu",
    items: &[
        Item {
            key: 'a',
            name: "Send Lots",
            action: UartAction::SendLots,
        },
        Item {
            key: 'b',
            name: "Receive Chars",
            action: UartAction::ReceiveChars,
        },
    ],
};

impl<A: Copy + 'static> Menu<A> {
    /// Write the menu followed by the selection prompt.
    ///
    /// # Errors
    ///
    /// Passes through any error of the writer.
    pub fn render(&self, writer: &mut impl Write) -> fmt::Result {
        write!(writer, "\n\n{RULE}\nBoard Diagnostics\n{RULE}\n {}\n", self.title)?;
        for item in self.items {
            writeln!(writer, "     {}:  {}", item.key, item.name)?;
        }
        write!(writer, "     {QUIT}:  Exit\n{RULE}\n")?;
        let (low, high) = self.key_range();
        write!(writer, "\nSelect Choice ({low}-{high}): [Followed by <enter>]")
    }

    #[must_use]
    pub fn select(&self, key: char) -> Selection<A> {
        if key == QUIT {
            return Selection::Quit;
        }
        self.items
            .iter()
            .find(|item| item.key == key)
            .map_or(Selection::Invalid(key), |item| Selection::Action(item.action))
    }

    fn key_range(&self) -> (char, char) {
        let low = self.items.iter().map(|i| i.key).min().unwrap_or(QUIT);
        let high = self.items.iter().map(|i| i.key).max().unwrap_or(QUIT);
        (low, high)
    }
}

/// Pick the choice out of a line entered by the operator.
///
/// Carriage returns are dropped and only the first character counts. Upper
/// case is folded to lower case and Escape means quit. An empty line
/// carries no choice.
#[must_use]
pub fn read_choice(line: &str) -> Option<char> {
    let key = line.chars().find(|c| *c != '\r').filter(|c| *c != '\n')?;
    if key == ESCAPE {
        return Some(QUIT);
    }
    Some(key.to_ascii_lowercase())
}

/// # Errors
///
/// Passes through any error of the writer.
pub fn write_invalid_entry(writer: &mut impl Write, key: char) -> fmt::Result {
    writeln!(writer, "\n -ERROR: {key} is an invalid entry.  Please try again")
}

/// # Errors
///
/// Passes through any error of the writer.
pub fn write_farewell(writer: &mut impl Write) -> fmt::Result {
    writeln!(writer, "\nExiting from Board Diagnostics.")
}

#[cfg(test)]
mod tests {
    use super::*;
    use heapless::String;

    #[test]
    fn when_main_menu_is_rendered_it_lists_items_and_prompt() {
        let mut text = String::<512>::new();
        MAIN_MENU.render(&mut text).unwrap();

        assert!(text.starts_with("\n\n----------------------------------\nBoard Diagnostics\n"));
        assert!(text.contains(" Main Menu\n"));
        assert!(text.contains("     a:  Test LEDs\n"));
        assert!(text.contains("     c:  Button/Switch Test\n"));
        assert!(text.contains("     f:  Project Modification\n"));
        assert!(text.contains("     q:  Exit\n"));
        assert!(text.ends_with("\nSelect Choice (a-f): [Followed by <enter>]"));
    }

    #[test]
    fn when_submenu_is_rendered_its_prompt_covers_its_keys() {
        let mut text = String::<512>::new();
        SEVEN_SEGMENT_MENU.render(&mut text).unwrap();
        assert!(text.contains("     b:  Control Individual Segments.\n"));
        assert!(text.ends_with("(a-b): [Followed by <enter>]"));
    }

    #[test]
    fn when_writer_is_too_small_rendering_fails() {
        let mut text = String::<16>::new();
        assert!(MAIN_MENU.render(&mut text).is_err());
    }

    #[test]
    fn when_key_matches_an_item_its_action_is_selected() {
        assert_eq!(
            MAIN_MENU.select('c'),
            Selection::Action(MainAction::TestButtons)
        );
        assert_eq!(UART_MENU.select('b'), Selection::Action(UartAction::ReceiveChars));
        assert_eq!(
            MAIN_MENU.select('f'),
            Selection::Action(MainAction::ProjectModification)
        );
    }

    #[test]
    fn when_key_is_unknown_it_is_invalid() {
        assert_eq!(MAIN_MENU.select('b'), Selection::Invalid('b'));
        assert_eq!(MAIN_MENU.select('z'), Selection::Invalid('z'));
    }

    #[test]
    fn when_q_is_pressed_any_menu_quits() {
        assert_eq!(MAIN_MENU.select('q'), Selection::Quit);
        assert_eq!(SEVEN_SEGMENT_MENU.select('q'), Selection::Quit);
    }

    #[test]
    fn when_reading_choice_it_takes_the_first_character() {
        assert_eq!(read_choice("c\n"), Some('c'));
        assert_eq!(read_choice("\r\nd"), None);
        assert_eq!(read_choice("\rd\r\n"), Some('d'));
        assert_eq!(read_choice("ab\n"), Some('a'));
    }

    #[test]
    fn when_reading_choice_upper_case_is_folded() {
        assert_eq!(read_choice("C\n"), Some('c'));
        assert_eq!(read_choice("Q"), Some('q'));
    }

    #[test]
    fn when_reading_escape_it_means_quit() {
        assert_eq!(read_choice("\u{1b}\n"), Some('q'));
    }

    #[test]
    fn when_line_is_empty_there_is_no_choice() {
        assert_eq!(read_choice(""), None);
        assert_eq!(read_choice("\n"), None);
        assert_eq!(read_choice("\r\r\n"), None);
    }

    #[test]
    fn invalid_entry_and_farewell_have_fixed_wording() {
        let mut text = String::<128>::new();
        write_invalid_entry(&mut text, 'x').unwrap();
        write_farewell(&mut text).unwrap();
        assert_eq!(
            text.as_str(),
            "\n -ERROR: x is an invalid entry.  Please try again\n\nExiting from Board Diagnostics.\n"
        );
    }
}
