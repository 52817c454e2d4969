use super::constants::{CMD_HELP, CMD_QUIT, CMD_THEME};

/// What a line typed at the prompt asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Scan the given text as a repository URL.
    Submit(String),
    ToggleTheme,
    Help,
    Quit,
    /// Blank line; the input box is required, so nothing is submitted.
    Empty,
}

/// Commands match case-insensitively on the trimmed line; anything else is
/// submitted as typed, minus the line ending.
pub fn parse_command(line: &str) -> Command {
    let typed = line.trim_end_matches(['\n', '\r']);
    let trimmed = typed.trim();
    if trimmed.is_empty() {
        return Command::Empty;
    }
    match trimmed.to_ascii_lowercase().as_str() {
        CMD_THEME => Command::ToggleTheme,
        CMD_HELP => Command::Help,
        CMD_QUIT | ":q" => Command::Quit,
        _ => Command::Submit(typed.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commands_are_recognized() {
        assert_eq!(parse_command(":theme"), Command::ToggleTheme);
        assert_eq!(parse_command("  :HELP "), Command::Help);
        assert_eq!(parse_command(":q"), Command::Quit);
        assert_eq!(parse_command(":quit\n"), Command::Quit);
    }

    #[test]
    fn anything_else_is_submitted_verbatim() {
        assert_eq!(
            parse_command(" https://github.com/acme/widgets \r\n"),
            Command::Submit(" https://github.com/acme/widgets ".to_string())
        );
        assert_eq!(
            parse_command("not-a-url"),
            Command::Submit("not-a-url".to_string())
        );
        assert_eq!(parse_command("   "), Command::Empty);
    }
}
