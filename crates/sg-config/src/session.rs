//! Interactive session configuration.

use serde::{Deserialize, Serialize};

const fn default_true() -> bool {
    true
}

fn default_prompt() -> String {
    "Your choice: ".to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SessionConfig {
    /// Print the welcome banner and usage notes before the first question.
    #[serde(default = "default_true")]
    pub show_banner: bool,

    /// Wait for one line of input after the closing reminder.
    #[serde(default = "default_true")]
    pub pause_on_exit: bool,

    /// Text printed before reading each answer.
    #[serde(default = "default_prompt")]
    pub prompt: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            show_banner: default_true(),
            pause_on_exit: default_true(),
            prompt: default_prompt(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = SessionConfig::default();
        assert!(config.show_banner);
        assert!(config.pause_on_exit);
        assert_eq!(config.prompt, "Your choice: ");
    }
}
