//! Rendering of a failure onto the diagnostic channel.

use crate::core::AssertionFailure;
use std::io::{self, Write};

/// Write the one-line diagnostic for `failure` and flush the writer.
pub fn write_diagnostic<W: Write>(out: &mut W, failure: &AssertionFailure) -> io::Result<()> {
    writeln!(out, "{failure}")?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::SourceLocation;

    #[test]
    fn diagnostic_is_single_terminated_line() {
        let mut buf = Vec::new();
        write_diagnostic(&mut buf, &AssertionFailure::new()).unwrap();

        assert_eq!(String::from_utf8(buf).unwrap(), "Assertion failed\n");
    }

    #[test]
    fn diagnostic_carries_enrichment() {
        let failure = AssertionFailure::new()
            .with_expression("a == b")
            .at(SourceLocation {
                file: "src/main.rs".to_string(),
                line: 15,
                column: 5,
            });

        let mut buf = Vec::new();
        write_diagnostic(&mut buf, &failure).unwrap();

        let text = String::from_utf8(buf).unwrap();
        assert!(text.starts_with("Assertion failed"));
        assert!(text.contains("`a == b`"));
        assert!(text.trim_end().ends_with("src/main.rs:15:5"));
    }

    struct ClosedChannel;

    impl Write for ClosedChannel {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn closed_channel_reports_error() {
        let result = write_diagnostic(&mut ClosedChannel, &AssertionFailure::new());
        assert_eq!(result.unwrap_err().kind(), io::ErrorKind::BrokenPipe);
    }
}
