use anyhow::{Context, Result};
use std::io::{BufRead, Write};

/// Writes `label` and reads one line of answer.
///
/// Returns `None` when the input is closed before a line arrives.
pub fn prompt_line<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    label: &str,
) -> Result<Option<String>> {
    write!(output, "{label}").context("writing prompt")?;
    output.flush().context("flushing prompt")?;

    let mut line = String::new();
    let read = input.read_line(&mut line).context("reading answer")?;
    if read == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\n', '\r']).to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn reads_one_line_without_newline() {
        let mut input = Cursor::new("travel, family\nnext\n");
        let mut output = Vec::new();

        let answer = prompt_line(&mut input, &mut output, "Tags: ").unwrap();

        assert_eq!(answer.as_deref(), Some("travel, family"));
        assert_eq!(output, b"Tags: ");
    }

    #[test]
    fn strips_windows_line_endings() {
        let mut input = Cursor::new("hello\r\n");
        let answer = prompt_line(&mut input, &mut Vec::new(), "> ").unwrap();
        assert_eq!(answer.as_deref(), Some("hello"));
    }

    #[test]
    fn empty_line_is_some_empty() {
        let mut input = Cursor::new("\n");
        let answer = prompt_line(&mut input, &mut Vec::new(), "> ").unwrap();
        assert_eq!(answer.as_deref(), Some(""));
    }

    #[test]
    fn closed_input_is_none() {
        let mut input = Cursor::new("");
        let answer = prompt_line(&mut input, &mut Vec::new(), "> ").unwrap();
        assert!(answer.is_none());
    }
}
