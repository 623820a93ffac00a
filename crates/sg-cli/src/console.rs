//! Line-oriented console front end for a consultation.

use std::io::{BufRead, Write};

use sg_core::{AnswerSource, DecisionNode, GuideError};

/// Reads answers from a line reader and writes questions to a writer.
///
/// Input is trimmed and lower-cased before matching. Unknown keys print the
/// valid ones and prompt again on the same question.
pub struct ConsoleAnswers<R, W> {
    input: R,
    output: W,
    prompt: String,
}

impl<R: BufRead, W: Write> ConsoleAnswers<R, W> {
    pub fn new(input: R, output: W, prompt: impl Into<String>) -> Self {
        Self {
            input,
            output,
            prompt: prompt.into(),
        }
    }

    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }

    /// Read one line; `None` at end of input. Bytes that are not UTF-8 are
    /// replaced, so a garbled line is just an unknown key.
    fn read_line(&mut self) -> Result<Option<String>, GuideError> {
        let mut line = Vec::new();
        if self.input.read_until(b'\n', &mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(String::from_utf8_lossy(&line).into_owned()))
    }

    /// Print `message` and wait for one line. End of input counts as an
    /// acknowledgment.
    pub fn pause(&mut self, message: &str) -> Result<(), GuideError> {
        write!(self.output, "{message}")?;
        self.output.flush()?;
        self.read_line()?;
        Ok(())
    }
}

impl<R: BufRead, W: Write> AnswerSource for ConsoleAnswers<R, W> {
    fn choose(&mut self, node: &DecisionNode) -> Result<String, GuideError> {
        writeln!(self.output, "\n{}", node.question)?;
        for option in &node.options {
            writeln!(self.output, "  {}) {}", option.key, option.label)?;
        }

        loop {
            write!(self.output, "{}", self.prompt)?;
            self.output.flush()?;

            let Some(line) = self.read_line()? else {
                return Err(GuideError::InputClosed);
            };
            let choice = line.trim().to_lowercase();
            if node.has_option(&choice) {
                return Ok(choice);
            }

            tracing::debug!(
                node = node.id,
                key = choice.as_str(),
                "rejected console input"
            );
            let error = GuideError::InvalidOption {
                key: choice,
                valid: node.keys().map(str::to_string).collect(),
            };
            writeln!(self.output, "{error}")?;
        }
    }
}
