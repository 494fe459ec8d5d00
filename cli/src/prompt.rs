//! Line-oriented prompts over arbitrary reader/writer pairs.

#[cfg(test)]
#[path = "prompt_test.rs"]
mod prompt_test;

use std::io::{self, BufRead, Write};

/// Print `label` and read one line, without its line ending. EOF yields an
/// empty string.
pub fn read_line(input: &mut impl BufRead, out: &mut impl Write, label: &str) -> io::Result<String> {
    write!(out, "{label}")?;
    out.flush()?;
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_owned())
}

/// Ask a yes/no question. Only `y` or `yes` (any case) confirms.
pub fn confirm(input: &mut impl BufRead, out: &mut impl Write, question: &str) -> io::Result<bool> {
    let answer = read_line(input, out, &format!("{question} [y/N] "))?;
    Ok(matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes"))
}
