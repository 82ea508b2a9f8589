//! Yes/no confirmation on an interactive stream.

use std::io::{BufRead, Write};

use thiserror::Error;

/// Errors raised while asking for confirmation.
#[derive(Debug, Error)]
pub enum PromptError {
    /// Input ended before a yes or no answer was given.
    #[error("no answer given (unexpected end of input)")]
    UnexpectedEof,

    /// Reading the answer or writing the prompt failed.
    #[error("prompt I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Ask `prompt` until the user answers yes or no.
///
/// Prints `"<prompt> [y/N] "` (or `[Y/n]` when `default` is true) and reads
/// one line per attempt. An empty line selects `default`; `y` and `n` are
/// accepted in either case. Anything else prints a hint and asks again.
///
/// # Errors
///
/// - [`PromptError::UnexpectedEof`] if `input` ends before an answer
/// - [`PromptError::Io`] if reading or writing fails
///
/// # Example
///
/// ```
/// use rawtx::prompt::confirm;
///
/// let mut output = Vec::new();
/// let answer = confirm("submit?", false, &b"maybe\ny\n"[..], &mut output).unwrap();
///
/// assert!(answer);
/// assert_eq!(
///     String::from_utf8(output).unwrap(),
///     "submit? [y/N] please type 'y' or 'n'\nsubmit? [y/N] "
/// );
/// ```
pub fn confirm<R, W>(
    prompt: &str,
    default: bool,
    mut input: R,
    mut output: W,
) -> Result<bool, PromptError>
where
    R: BufRead,
    W: Write,
{
    let choices = if default { "[Y/n]" } else { "[y/N]" };
    let mut line = String::new();

    loop {
        write!(output, "{prompt} {choices} ")?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Err(PromptError::UnexpectedEof);
        }

        match line.trim_end_matches(['\r', '\n']).to_lowercase().as_str() {
            "" => return Ok(default),
            "y" => return Ok(true),
            "n" => return Ok(false),
            _ => writeln!(output, "please type 'y' or 'n'")?,
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    fn ask(default: bool, input: &str) -> (Result<bool, PromptError>, String) {
        let mut output = Vec::new();
        let result = confirm("submit?", default, input.as_bytes(), &mut output);
        (result, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_yes_and_no() {
        assert!(ask(false, "y\n").0.unwrap());
        assert!(ask(false, "Y\n").0.unwrap());
        assert!(!ask(true, "n\n").0.unwrap());
        assert!(!ask(true, "N\r\n").0.unwrap());
    }

    #[test]
    fn test_empty_line_selects_default() {
        let (result, output) = ask(false, "\n");
        assert!(!result.unwrap());
        assert_eq!(output, "submit? [y/N] ");

        let (result, output) = ask(true, "\n");
        assert!(result.unwrap());
        assert_eq!(output, "submit? [Y/n] ");
    }

    #[test]
    fn test_reprompts_on_other_input() {
        let (result, output) = ask(false, "yes\nnope\n n\nn\n");
        assert!(!result.unwrap());
        assert_eq!(output.matches("please type 'y' or 'n'").count(), 3);
        assert_eq!(output.matches("submit? [y/N] ").count(), 4);
    }

    #[test]
    fn test_eof_without_answer() {
        assert!(matches!(ask(false, "").0, Err(PromptError::UnexpectedEof)));
        assert!(matches!(
            ask(true, "what\n").0,
            Err(PromptError::UnexpectedEof)
        ));
    }

    #[test]
    fn test_last_line_without_newline() {
        assert!(ask(false, "y").0.unwrap());
    }
}
