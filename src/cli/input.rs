//! Reading messages, envelopes and passwords for CLI commands

use std::io::Read;
use std::path::PathBuf;

use crate::crypto::SecureString;
use crate::error::{SealError, SealResult};

/// Environment variable consulted before prompting for a password
pub const PASSWORD_ENV: &str = "SEALNOTE_PASSWORD";

/// Where a command's text argument comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextSource {
    Inline(String),
    File(PathBuf),
    Stdin,
}

impl TextSource {
    /// Inline text wins over a file; with neither, read stdin
    pub fn from_args(inline: Option<String>, file: Option<PathBuf>) -> Self {
        match (inline, file) {
            (Some(text), _) => Self::Inline(text),
            (None, Some(path)) => Self::File(path),
            (None, None) => Self::Stdin,
        }
    }

    /// Read the text; a single trailing newline from files and pipes is dropped
    pub fn read(self) -> SealResult<String> {
        match self {
            Self::Inline(text) => Ok(text),
            Self::File(path) => {
                let contents = std::fs::read_to_string(&path).map_err(|e| {
                    SealError::Io(format!("Failed to read {}: {}", path.display(), e))
                })?;
                Ok(strip_trailing_newline(contents))
            }
            Self::Stdin => {
                let mut contents = String::new();
                std::io::stdin()
                    .read_to_string(&mut contents)
                    .map_err(|e| SealError::Io(format!("Failed to read stdin: {}", e)))?;
                Ok(strip_trailing_newline(contents))
            }
        }
    }
}

pub fn strip_trailing_newline(mut text: String) -> String {
    if text.ends_with('\n') {
        text.pop();
        if text.ends_with('\r') {
            text.pop();
        }
    }
    text
}

/// Read the password from `SEALNOTE_PASSWORD` or a hidden prompt
///
/// With `confirm`, an interactive prompt asks twice and must match.
pub fn read_password(confirm: bool) -> SealResult<SecureString> {
    if let Ok(password) = std::env::var(PASSWORD_ENV) {
        return Ok(SecureString::new(password));
    }

    let password = prompt_password("Password: ")?;
    if confirm {
        let again = prompt_password("Confirm password: ")?;
        if password != again {
            return Err(SealError::Config("Passwords do not match".to_string()));
        }
    }
    Ok(password)
}

fn prompt_password(prompt: &str) -> SealResult<SecureString> {
    rpassword::prompt_password(prompt)
        .map(SecureString::new)
        .map_err(|e| SealError::Io(format!("Failed to read password: {}", e)))
}

/// Reject empty values where the command has nothing to work with
pub fn require(value: &str, what: &'static str) -> SealResult<()> {
    if value.is_empty() {
        return Err(SealError::MissingInput(what));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_source_precedence() {
        let path = PathBuf::from("note.txt");
        assert_eq!(
            TextSource::from_args(Some("hi".into()), Some(path.clone())),
            TextSource::Inline("hi".into())
        );
        assert_eq!(
            TextSource::from_args(None, Some(path.clone())),
            TextSource::File(path)
        );
        assert_eq!(TextSource::from_args(None, None), TextSource::Stdin);
    }

    #[test]
    fn test_inline_kept_verbatim() {
        let text = TextSource::Inline("line\n".into()).read().unwrap();
        assert_eq!(text, "line\n");
    }

    #[test]
    fn test_file_trailing_newline_dropped() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("msg.txt");
        std::fs::write(&path, "first\nsecond\r\n").unwrap();

        let text = TextSource::File(path).read().unwrap();
        assert_eq!(text, "first\nsecond");
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let temp_dir = TempDir::new().unwrap();
        let result = TextSource::File(temp_dir.path().join("absent")).read();
        assert!(matches!(result, Err(SealError::Io(_))));
    }

    #[test]
    fn test_strip_only_one_newline() {
        assert_eq!(strip_trailing_newline("a\n\n".into()), "a\n");
        assert_eq!(strip_trailing_newline("a".into()), "a");
        assert_eq!(strip_trailing_newline(String::new()), "");
    }

    #[test]
    fn test_require() {
        assert!(require("x", "message").is_ok());
        assert!(matches!(
            require("", "message"),
            Err(SealError::MissingInput("message"))
        ));
    }
}
