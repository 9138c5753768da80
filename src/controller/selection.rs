use crate::error::MenuError;
use crate::ui::{Action, Menu};

/// A line of user input resolved against the menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// 0-based index into the menu options
    Option(usize),
    Exit,
}

impl Selection {
    /// Parse a raw input line into a selection for the given menu
    pub fn parse(input: &str, menu: &Menu) -> Result<Self, MenuError> {
        let input = input.trim();

        if input.eq_ignore_ascii_case("exit") {
            return Ok(Selection::Exit);
        }

        let option = input
            .parse::<usize>()
            .ok()
            .and_then(|number| menu.option(number).map(|option| (number, option)));

        match option {
            Some((_, option)) if matches!(option.action, Action::Exit) => Ok(Selection::Exit),
            Some((number, _)) => Ok(Selection::Option(number - 1)),
            None => Err(MenuError::InvalidSelection {
                input: input.to_string(),
                max: menu.len(),
            }),
        }
    }
}
