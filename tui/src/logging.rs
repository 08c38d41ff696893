//! Log output that can be silenced while the session owns the screen
//!
//! Lines written to stderr during a session land on the alternate screen and
//! stay there, since ratatui only repaints cells it changed. The binary wraps
//! its stderr writer in a [`Gated`] writer and mutes the [`LogGate`] for the
//! lifetime of the session.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tracing_subscriber::fmt::writer::{MakeWriter, OptionalWriter};

/// Shared on/off switch for a [`Gated`] writer
#[derive(Clone, Debug, Default)]
pub struct LogGate(Arc<AtomicBool>);

impl LogGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mute(&self) {
        self.0.store(true, Ordering::Release);
    }

    pub fn unmute(&self) {
        self.0.store(false, Ordering::Release);
    }

    pub fn is_muted(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }

    /// Wrap `inner` so its output is discarded while this gate is muted
    pub fn wrap<M>(&self, inner: M) -> Gated<M> {
        Gated {
            inner,
            gate: self.clone(),
        }
    }
}

/// `MakeWriter` that writes through `inner` unless its gate is muted
#[derive(Debug)]
pub struct Gated<M> {
    inner: M,
    gate: LogGate,
}

impl<'a, M: MakeWriter<'a>> MakeWriter<'a> for Gated<M> {
    type Writer = OptionalWriter<M::Writer>;

    fn make_writer(&'a self) -> Self::Writer {
        if self.gate.is_muted() {
            OptionalWriter::none()
        } else {
            OptionalWriter::some(self.inner.make_writer())
        }
    }
}
