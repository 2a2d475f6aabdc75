//! Interactive command - Edits the form from stdin.
//!
//! Accepted lines:
//!
//! ```text
//! username=<value>    password=<value>    confirm=<value>
//! submit              state               quit
//! ```

use tokio::io::{AsyncBufReadExt, BufReader};

use common::{AppResult, FormConfig};
use domain::Field;
use signup_form_lib::SignupForm;

use super::render_state;
use crate::args::InteractiveArgs;

/// One parsed stdin line
#[derive(Debug, PartialEq, Eq)]
enum Line {
    Set(Field, String),
    Submit,
    State,
    Quit,
    Blank,
    Unknown(String),
}

impl Line {
    fn parse(line: &str) -> Self {
        let trimmed = line.trim_end_matches('\r');
        if let Some((key, value)) = trimmed.split_once('=') {
            return match key.trim().parse::<Field>() {
                Ok(field) => Line::Set(field, value.to_string()),
                Err(_) => Line::Unknown(trimmed.to_string()),
            };
        }

        match trimmed.trim() {
            "" => Line::Blank,
            "submit" => Line::Submit,
            "state" => Line::State,
            "quit" | "exit" => Line::Quit,
            other => Line::Unknown(other.to_string()),
        }
    }
}

/// Execute the interactive command
pub async fn execute(args: InteractiveArgs, config: FormConfig) -> AppResult<()> {
    let mut form = SignupForm::spawn(config)?;
    let mut states = form.subscribe();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    tracing::info!("Reading form edits from stdin");

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else {
                    break;
                };

                match Line::parse(&line) {
                    Line::Set(field, value) => form.set(field, value),
                    Line::Submit => match form.submit().await {
                        Ok(confirmation) => println!("{}", confirmation),
                        Err(e) => println!("{}", e.user_message()),
                    },
                    Line::State => println!("{}", render_state(&form.state(), args.json)?),
                    Line::Quit => break,
                    Line::Blank => {}
                    Line::Unknown(other) => {
                        eprintln!("Unrecognized input '{}'", other);
                    }
                }
            }
            changed = states.changed() => {
                if changed.is_err() {
                    tracing::debug!("State channel closed");
                    break;
                }
                let state = states.borrow_and_update().clone();
                println!("{}", render_state(&state, args.json)?);
            }
        }
    }

    form.close();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_field_assignments() {
        assert_eq!(
            Line::parse("username=alice"),
            Line::Set(Field::Username, "alice".to_string())
        );
        assert_eq!(
            Line::parse("confirm=a=b \r"),
            Line::Set(Field::Confirmation, "a=b ".to_string())
        );
        assert_eq!(Line::parse("password="), Line::Set(Field::Password, String::new()));
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(Line::parse("submit"), Line::Submit);
        assert_eq!(Line::parse(" state "), Line::State);
        assert_eq!(Line::parse("quit"), Line::Quit);
        assert_eq!(Line::parse(""), Line::Blank);
        assert_eq!(Line::parse("email=a@b.c"), Line::Unknown("email=a@b.c".to_string()));
        assert_eq!(Line::parse("dance"), Line::Unknown("dance".to_string()));
    }
}
