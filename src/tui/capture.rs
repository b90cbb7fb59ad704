//! Terminal mouse reporting modes.
//!
//! The board normally asks the terminal for button press and release reports
//! only. While a note is being dragged or resized, a [`PointerCapture`] guard
//! additionally enables motion reports for held buttons; dropping the guard
//! turns them off again.

use crossterm::{execute, Command};
use std::fmt;
use std::io::{self, Write};

/// Enables press/release reporting in SGR encoding (`?1000h`, `?1006h`).
#[derive(Debug, Clone, Copy)]
pub struct EnableClickTracking;

impl Command for EnableClickTracking {
    fn write_ansi(&self, f: &mut impl fmt::Write) -> fmt::Result {
        f.write_str("\x1b[?1000h\x1b[?1006h")
    }

    #[cfg(windows)]
    fn execute_winapi(&self) -> io::Result<()> {
        Ok(())
    }
}

/// Enables motion reporting while a button is held (`?1002h`).
#[derive(Debug, Clone, Copy)]
pub struct EnableMotionTracking;

impl Command for EnableMotionTracking {
    fn write_ansi(&self, f: &mut impl fmt::Write) -> fmt::Result {
        f.write_str("\x1b[?1002h")
    }

    #[cfg(windows)]
    fn execute_winapi(&self) -> io::Result<()> {
        Ok(())
    }
}

/// Disables motion reporting, leaving press/release reporting on (`?1002l`).
#[derive(Debug, Clone, Copy)]
pub struct DisableMotionTracking;

impl Command for DisableMotionTracking {
    fn write_ansi(&self, f: &mut impl fmt::Write) -> fmt::Result {
        f.write_str("\x1b[?1002l")
    }

    #[cfg(windows)]
    fn execute_winapi(&self) -> io::Result<()> {
        Ok(())
    }
}

/// Motion tracking held for the duration of a drag or resize.
pub struct PointerCapture {
    out: Box<dyn Write>,
}

impl PointerCapture {
    /// Turns motion tracking on by writing to `out`.
    pub fn acquire(mut out: Box<dyn Write>) -> io::Result<Self> {
        execute!(out, EnableMotionTracking)?;
        tracing::trace!("pointer motion tracking enabled");
        Ok(Self { out })
    }
}

impl Drop for PointerCapture {
    fn drop(&mut self) {
        match execute!(self.out, DisableMotionTracking) {
            Ok(()) => tracing::trace!("pointer motion tracking disabled"),
            Err(e) => tracing::warn!("failed to disable pointer motion tracking: {}", e),
        }
    }
}

impl fmt::Debug for PointerCapture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PointerCapture").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Clone, Default)]
    struct SharedBuf(Rc<RefCell<Vec<u8>>>);

    impl Write for SharedBuf {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.borrow_mut().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl SharedBuf {
        fn contents(&self) -> String {
            String::from_utf8(self.0.borrow().clone()).expect("escape codes are utf-8")
        }
    }

    #[test]
    fn acquire_enables_and_drop_disables_motion_tracking() {
        let buf = SharedBuf::default();
        let capture = PointerCapture::acquire(Box::new(buf.clone())).expect("acquire");
        assert_eq!(buf.contents(), "\x1b[?1002h");
        drop(capture);
        assert_eq!(buf.contents(), "\x1b[?1002h\x1b[?1002l");
    }

    #[test]
    fn release_happens_during_unwinding() {
        let buf = SharedBuf::default();
        let inner = buf.clone();
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(move || {
            let _capture = PointerCapture::acquire(Box::new(inner)).expect("acquire");
            panic!("teardown mid-drag");
        }));
        assert!(result.is_err());
        assert!(buf.contents().ends_with("\x1b[?1002l"));
    }

    #[test]
    fn click_tracking_uses_sgr_encoding() {
        let mut out = String::new();
        EnableClickTracking
            .write_ansi(&mut out)
            .expect("write to string");
        assert_eq!(out, "\x1b[?1000h\x1b[?1006h");
    }
}
