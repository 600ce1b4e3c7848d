use std::io::{self, BufRead, Write};

use colored::Colorize;
use log::{info, warn};

use crate::controller::generate::QuestionPicker;
use crate::view::SelectOption;

/// Asks on the terminal which question to answer.
pub struct TerminalPicker;

impl QuestionPicker for TerminalPicker {
    fn pick(&self, options: &[SelectOption]) -> Option<usize> {
        if options.len() < 2 {
            return None;
        }

        println!("\n{}", "=== Question Selection ===".cyan().bold());
        for option in options {
            println!("{}", option.label);
        }

        let stdin = io::stdin();
        loop {
            prompt(&mut io::stdout(), options.len());

            let mut input = String::new();
            match stdin.lock().read_line(&mut input) {
                Ok(0) => return None,
                Ok(_) => {}
                Err(_) => {
                    println!("{}", "Error reading input. Please try again.".red());
                    continue;
                }
            }

            match parse_choice(&input, options.len()) {
                Ok(choice) => {
                    if let Some(index) = choice {
                        info!("answering question #{}", index + 1);
                    }
                    return choice;
                }
                Err(message) => println!("{}", message.red()),
            }
        }
    }
}

fn prompt<W: Write>(out: &mut W, count: usize) {
    let text = format!("Question to answer (1-{}, Enter for 1): ", count).cyan();
    if let Err(e) = write!(out, "\n{}", text).and_then(|_| out.flush()) {
        warn!("failed to write question prompt: {}", e);
    }
}

/// Maps a 1-based answer to an option index; blank input keeps the default.
fn parse_choice(input: &str, count: usize) -> Result<Option<usize>, String> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(None);
    }

    match input.parse::<usize>() {
        Ok(n) if (1..=count).contains(&n) => Ok(Some(n - 1)),
        Ok(n) => Err(format!("Invalid number: {}. Pick 1-{}.", n, count)),
        Err(_) => Err(format!("Invalid input: '{}'. Please enter a number.", input)),
    }
}
