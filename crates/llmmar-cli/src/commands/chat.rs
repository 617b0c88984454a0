//! Chat command - interactive prompt loop.

use std::io::Write;

use llmmar_chat::{ChatSession, Settings};
use tokio::io::{AsyncBufReadExt, BufReader};

use super::{describe_status, print_entries, settings::render};

const HELP: &str = "\
Type a message and press enter to send it. Commands:
  /status                 check the server again
  /settings               show settings
  /set ip <host>          set the server host (omit <host> to unset)
  /set model <name>       set the model
  /set verbose <on|off>   request streamed responses
  /set dark <on|off>      dark mode preference
  /clear                  delete the log
  /log                    print the whole log
  /help                   show this help
  /quit                   exit";

/// One line of user input.
#[derive(Debug, PartialEq, Eq)]
enum Input {
    Message(String),
    Status,
    ShowSettings,
    Set(String, String),
    Clear,
    Log,
    Help,
    Quit,
    Invalid(String),
}

fn parse_input(line: &str) -> Input {
    let trimmed = line.trim();
    let Some(command) = trimmed.strip_prefix('/') else {
        return Input::Message(line.trim_end_matches(['\r', '\n']).to_string());
    };

    let mut words = command.splitn(3, char::is_whitespace);
    match words.next().unwrap_or_default() {
        "status" | "refresh" => Input::Status,
        "settings" => Input::ShowSettings,
        "set" => match words.next() {
            Some(field) if !field.is_empty() => Input::Set(
                field.to_string(),
                words.next().unwrap_or_default().trim().to_string(),
            ),
            _ => Input::Invalid("Usage: /set <ip|model|verbose|dark> <value>".to_string()),
        },
        "clear" => Input::Clear,
        "log" => Input::Log,
        "help" | "?" => Input::Help,
        "quit" | "exit" | "q" => Input::Quit,
        other => Input::Invalid(format!("Unknown command '/{}'. Type /help", other)),
    }
}

fn parse_flag(value: &str) -> Result<bool, String> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "on" | "yes" | "1" => Ok(true),
        "false" | "off" | "no" | "0" => Ok(false),
        _ => Err(format!("Expected on or off, got '{}'", value)),
    }
}

fn apply_setting(settings: &mut Settings, field: &str, value: &str) -> Result<(), String> {
    match field {
        "ip" | "host" => settings.ip_address = value.to_string(),
        "model" => settings.model_name = value.to_string(),
        "verbose" | "stream" => settings.verbose = parse_flag(value)?,
        "dark" | "dark-mode" => settings.dark_mode = parse_flag(value)?,
        other => return Err(format!("Unknown setting '{}'", other)),
    }
    Ok(())
}

pub(crate) async fn run(session: &ChatSession) -> miette::Result<()> {
    println!("llmmar {} - type /help for commands", env!("CARGO_PKG_VERSION"));
    let status = session.refresh_status().await;
    println!("{}", describe_status(session.endpoint().as_ref(), status));
    println!();

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        print!("> ");
        std::io::stdout().flush().ok();

        let Some(line) = lines
            .next_line()
            .await
            .map_err(|e| miette::miette!("Failed to read input: {}", e))?
        else {
            break;
        };

        match parse_input(&line) {
            Input::Message(text) => {
                let before = session.log().len();
                session.submit(&text).await;
                print_entries(&session.log().entries_since(before));
            }
            Input::Status => {
                let status = session.refresh_status().await;
                println!("{}", describe_status(session.endpoint().as_ref(), status));
            }
            Input::ShowSettings => print!("{}", render(&session.settings())),
            Input::Set(field, value) => {
                let mut settings = session.settings();
                if let Err(message) = apply_setting(&mut settings, &field, &value) {
                    eprintln!("{}", message);
                    continue;
                }
                let host_changed = settings.ip_address != session.settings().ip_address;
                let before = session.log().len();
                if let Err(e) = session.save_settings(settings).await {
                    eprintln!("Failed to save settings: {}", e);
                }
                print_entries(&session.log().entries_since(before));
                if host_changed {
                    let status = session.monitor().status();
                    println!("{}", describe_status(session.endpoint().as_ref(), status));
                }
            }
            Input::Clear => {
                session.delete_logs();
                print_entries(&session.log().entries());
            }
            Input::Log => print_entries(&session.log().entries()),
            Input::Help => println!("{}", HELP),
            Input::Quit => break,
            Input::Invalid(message) => eprintln!("{}", message),
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_is_a_message() {
        assert_eq!(
            parse_input("why is the sky blue?\n"),
            Input::Message("why is the sky blue?".to_string())
        );
        // Blank input is left for the session to ignore
        assert_eq!(parse_input("   "), Input::Message("   ".to_string()));
    }

    #[test]
    fn test_commands() {
        assert_eq!(parse_input("/status"), Input::Status);
        assert_eq!(parse_input(" /settings "), Input::ShowSettings);
        assert_eq!(parse_input("/clear"), Input::Clear);
        assert_eq!(parse_input("/log"), Input::Log);
        assert_eq!(parse_input("/quit"), Input::Quit);
        assert!(matches!(parse_input("/bogus"), Input::Invalid(_)));
    }

    #[test]
    fn test_set_command() {
        assert_eq!(
            parse_input("/set model qwen3:4b"),
            Input::Set("model".to_string(), "qwen3:4b".to_string())
        );
        assert_eq!(
            parse_input("/set ip"),
            Input::Set("ip".to_string(), String::new())
        );
        assert!(matches!(parse_input("/set"), Input::Invalid(_)));
    }

    #[test]
    fn test_apply_setting() {
        let mut settings = Settings::default();

        apply_setting(&mut settings, "ip", "192.168.1.20").unwrap();
        apply_setting(&mut settings, "verbose", "on").unwrap();
        apply_setting(&mut settings, "dark", "TRUE").unwrap();

        assert_eq!(settings.ip_address, "192.168.1.20");
        assert!(settings.verbose);
        assert!(settings.dark_mode);

        assert!(apply_setting(&mut settings, "verbose", "maybe").is_err());
        assert!(apply_setting(&mut settings, "theme", "dark").is_err());
    }
}
