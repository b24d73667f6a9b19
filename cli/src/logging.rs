//! Logging init: stderr, held back while the checklist owns the terminal.

use std::io::{self, Write};
use std::sync::{Mutex, MutexGuard};
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::EnvFilter;

/// Stderr sink that can buffer output instead of writing it.
pub struct Gate {
    held: Mutex<Option<Vec<u8>>>,
}

impl Gate {
    pub const fn new() -> Self {
        Self {
            held: Mutex::new(None),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Option<Vec<u8>>> {
        self.held.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Buffer every write until the next release.
    pub fn hold(&self) {
        let mut held = self.lock();
        if held.is_none() {
            *held = Some(Vec::new());
        }
    }

    /// Stop buffering and flush what was held into `out`.
    pub fn release_into(&self, out: &mut impl Write) -> io::Result<()> {
        let pending = self.lock().take();
        match pending {
            Some(bytes) if !bytes.is_empty() => {
                out.write_all(&bytes)?;
                out.flush()
            }
            _ => Ok(()),
        }
    }
}

static STDERR_GATE: Gate = Gate::new();

pub struct GatedWriter<'a>(&'a Gate);

impl Write for GatedWriter<'_> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if let Some(pending) = self.0.lock().as_mut() {
            pending.extend_from_slice(buf);
            return Ok(buf.len());
        }
        io::stderr().lock().write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        if self.0.lock().is_some() {
            return Ok(());
        }
        io::stderr().lock().flush()
    }
}

struct GatedStderr;

impl<'a> MakeWriter<'a> for GatedStderr {
    type Writer = GatedWriter<'static>;

    fn make_writer(&'a self) -> Self::Writer {
        GatedWriter(&STDERR_GATE)
    }
}

pub fn init() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(GatedStderr)
        .init();
}

/// Keep log lines off the screen while raw mode and the alternate screen
/// are active.
pub fn hold() {
    STDERR_GATE.hold();
}

/// Write out everything logged since [`hold`].
pub fn release() {
    // Nowhere left to report a failing stderr.
    let _ = STDERR_GATE.release_into(&mut io::stderr());
}
