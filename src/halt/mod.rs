//! Imperative shell: report a failure and end the process.
//!
//! Everything that touches the outside world on the failure path lives here.
//! [`halt`] never returns; it exits with [`FAILURE_EXIT_CODE`] and no
//! destructors, unwinding or other threads get a chance to run.

mod diagnostic;

pub use diagnostic::write_diagnostic;

use crate::core::AssertionFailure;
use std::io::{self, Write};
use std::process;

/// Exit status used when an assertion fails.
pub const FAILURE_EXIT_CODE: i32 = 1;

/// Emit the diagnostic for `failure` on stderr and terminate the process.
///
/// Output errors are ignored: a closed stderr must not keep the process
/// alive.
pub fn halt(failure: AssertionFailure) -> ! {
    // Earlier caller output goes out before the diagnostic.
    let _ = io::stdout().flush();

    if log::log_enabled!(log::Level::Debug) {
        match serde_json::to_string(&failure) {
            Ok(record) => log::debug!("assertion failure: {record}"),
            Err(e) => log::debug!("assertion failure (unserializable: {e}): {failure}"),
        }
    }

    let stderr = io::stderr();
    let mut out = stderr.lock();
    let _ = write_diagnostic(&mut out, &failure);

    process::exit(FAILURE_EXIT_CODE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failure_exit_code_is_distinguishable_from_success() {
        assert_ne!(FAILURE_EXIT_CODE, 0);
        assert!(FAILURE_EXIT_CODE > 0);
    }
}
