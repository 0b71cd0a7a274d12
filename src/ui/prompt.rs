//! Line-based prompts over any `BufRead`, so the menu can be driven from a
//! terminal or from piped input.

use crate::errors::AppResult;
use std::io::{self, BufRead, Write};

/// Print `prompt` and read one trimmed line. `None` on end of input.
pub fn ask(input: &mut impl BufRead, prompt: &str) -> AppResult<Option<String>> {
    print!("{}", prompt);
    io::stdout().flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        println!();
        return Ok(None);
    }

    Ok(Some(line.trim().to_string()))
}

/// Ask a yes/no confirmation; anything but `y`/`yes` (or EOF) is a no.
pub fn confirm(input: &mut impl BufRead, prompt: &str) -> AppResult<bool> {
    let answer = ask(input, &format!("{} (y/N): ", prompt))?;
    Ok(matches!(
        answer.map(|a| a.to_lowercase()).as_deref(),
        Some("y") | Some("yes")
    ))
}
