#![allow(clippy::module_inception)]

use std::rc::Rc;

use crate::errors::errors::{Error, ErrorTip};

pub mod errors;
pub mod lexer;
pub mod macros;

#[derive(Debug, Clone)]
pub struct Position {
    pub line: u32,
    pub column: u32,
    pub file: Rc<String>,
}

impl Position {
    pub fn null() -> Self {
        Position {
            line: 0,
            column: 0,
            file: Rc::new(String::from("<null>")),
        }
    }
}

pub fn get_line(source: &str, line: u32) -> Option<String> {
    source
        .split('\n')
        .nth(line.saturating_sub(1) as usize)
        .map(String::from)
}

pub fn display_error(error: &Error, source: &str) {
    /*
        error: message
        -> final.mpl
           |
        20 | let a = #;
           | --------^
    */

    let position = error.get_position();
    let line_text = get_line(source, position.line).unwrap_or_default();

    let line_string = position.line.to_string();
    let padding = line_string.len() + 2;

    if let ErrorTip::None = error.get_tip() {
        println!("Error: {}", error.get_error_name());
    } else {
        println!("Error: {} ({})", error.get_error_name(), error.get_tip());
    }
    println!("-> {}", position.file);
    println!("{:>padding$}", "|");

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    println!("{} | {}", line_string, line_text_removed.trim());

    let arrows = (position.column as usize)
        .saturating_sub(removed_whitespace)
        .max(1);

    println!("{:>padding$} {:->arrows$}", "|", "^");
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let mut start = 0;
    for c in string.chars() {
        if c == ' ' {
            start += 1;
        } else {
            break;
        }
    }

    (String::from(&string[start..]), start)
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_get_line() {
        let source = "Hello, world!\nSecond line\n\nTesting { }\n";

        assert_eq!(super::get_line(source, 1), Some(String::from("Hello, world!")));
        assert_eq!(super::get_line(source, 2), Some(String::from("Second line")));
        assert_eq!(super::get_line(source, 4), Some(String::from("Testing { }")));
        assert_eq!(super::get_line(source, 10), None);
    }

    #[test]
    fn test_remove_starting_whitespace() {
        let (text, removed) = super::remove_starting_whitespace("    let a = 1;");
        assert_eq!(text, "let a = 1;");
        assert_eq!(removed, 4);

        let (text, removed) = super::remove_starting_whitespace("let a = 1;");
        assert_eq!(text, "let a = 1;");
        assert_eq!(removed, 0);
    }
}
