//! Operator input — one command per stdin line, `<type> [number]`.

use wraphmi_domain::command::Command;

/// Why an input line is not a command.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum InputError {
    #[error("{0:?} is not a number")]
    NotANumber(String),
    #[error("{0:?} is not a finite number")]
    NotFinite(String),
    #[error("unexpected {0:?} after the value")]
    Trailing(String),
}

/// Parse one input line. Blank lines yield `Ok(None)`.
///
/// # Errors
///
/// Returns an error when the value is not a finite number or the line has
/// more than two words.
pub fn parse_line(line: &str) -> Result<Option<Command>, InputError> {
    let mut words = line.split_whitespace();
    let Some(kind) = words.next() else {
        return Ok(None);
    };
    let data = match words.next() {
        Some(raw) => {
            let value: f64 = raw
                .parse()
                .map_err(|_| InputError::NotANumber(raw.to_string()))?;
            if !value.is_finite() {
                return Err(InputError::NotFinite(raw.to_string()));
            }
            Some(value)
        }
        None => None,
    };
    if let Some(extra) = words.next() {
        return Err(InputError::Trailing(extra.to_string()));
    }
    Ok(Some(Command::new(kind, data)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_parse_bare_command() {
        let command = parse_line("start").unwrap().unwrap();
        assert_eq!(command.kind, "start");
        assert_eq!(command.data, None);
    }

    #[test]
    fn should_parse_command_with_value() {
        let command = parse_line("  layers 5 ").unwrap().unwrap();
        assert_eq!(command.kind, "layers");
        assert_eq!(command.data, Some(5.0));
    }

    #[test]
    fn should_accept_fractional_values() {
        let command = parse_line("tension -2.5").unwrap().unwrap();
        assert_eq!(command.data, Some(-2.5));
    }

    #[test]
    fn should_skip_blank_lines() {
        assert_eq!(parse_line("   "), Ok(None));
        assert_eq!(parse_line(""), Ok(None));
    }

    #[test]
    fn should_reject_non_numeric_value() {
        assert_eq!(
            parse_line("layers five"),
            Err(InputError::NotANumber("five".to_string()))
        );
    }

    #[test]
    fn should_reject_non_finite_value() {
        assert_eq!(
            parse_line("layers inf"),
            Err(InputError::NotFinite("inf".to_string()))
        );
    }

    #[test]
    fn should_reject_extra_words() {
        assert_eq!(
            parse_line("layers 5 6"),
            Err(InputError::Trailing("6".to_string()))
        );
    }
}
