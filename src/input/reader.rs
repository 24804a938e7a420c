use anyhow::{Context, Result, bail};
use std::io::{self, Read};

// A chat message, not a document.
const MAX_INPUT_SIZE: usize = 64 * 1024; // 64KB

pub struct InputReader;

impl InputReader {
    /// Returns the message from the argument if present, otherwise reads it
    /// from stdin.
    pub fn read(message: Option<&str>) -> Result<String> {
        message.map_or_else(Self::read_stdin, |m| Ok(m.to_string()))
    }

    #[allow(clippy::significant_drop_tightening)]
    fn read_stdin() -> Result<String> {
        let mut buffer = Vec::new();
        let mut chunk = [0u8; 8192];
        let mut stdin = io::stdin().lock();

        loop {
            let bytes_read = stdin
                .read(&mut chunk)
                .context("Failed to read from stdin")?;

            if bytes_read == 0 {
                break;
            }

            buffer.extend_from_slice(&chunk[..bytes_read]);

            if buffer.len() > MAX_INPUT_SIZE {
                bail!(
                    "Error: Input size ({:.1} KB) exceeds maximum allowed size (64 KB).",
                    buffer.len() as f64 / 1024.0
                );
            }
        }

        String::from_utf8(buffer).context("Input is not valid UTF-8")
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_read_argument_passthrough() {
        let message = InputReader::read(Some("hello there")).unwrap();
        assert_eq!(message, "hello there");
    }

    #[test]
    fn test_read_argument_preserves_unicode() {
        let message = InputReader::read(Some("こんにちは 🌍")).unwrap();
        assert_eq!(message, "こんにちは 🌍");
    }

    #[test]
    fn test_max_input_size_constant() {
        assert_eq!(MAX_INPUT_SIZE, 64 * 1024);
    }
}
