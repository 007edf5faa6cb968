//! Yes/no prompt

use std::io::{self, BufRead, Write};

/// Ask a yes/no question, defaulting to yes
///
/// `y`, `yes` (any case) and an empty line accept. Anything else declines,
/// and so does a closed input stream.
pub fn confirm<R, W>(input: &mut R, output: &mut W, question: &str) -> io::Result<bool>
where
    R: BufRead,
    W: Write,
{
    write!(output, "{}", question)?;
    output.flush()?;

    let mut answer = String::new();
    if input.read_line(&mut answer)? == 0 {
        tracing::debug!("Input closed before an answer was given");
        return Ok(false);
    }

    Ok(is_affirmative(answer.trim_end_matches(['\r', '\n'])))
}

fn is_affirmative(answer: &str) -> bool {
    let answer = answer.to_lowercase();
    answer.is_empty() || answer == "y" || answer == "yes"
}
