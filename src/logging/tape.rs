//! A logger that records quiet entries and plays them back only when
//! something goes wrong.
use super::{LogLevel, Logger, Message, NilLogger, SharedLogger};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// A deferred write, replayable against any sink.
type Entry = Box<dyn FnOnce(&dyn Logger) + Send>;

/// Records low-severity entries and dumps them once a loud entry arrives.
///
/// - Entries at or below the suppress level are stored, unrendered.
/// - An entry at or above the dump level is written to the unsuppressed sink,
///   then every stored entry is replayed, oldest first, to the suppressed sink
///   and the store is emptied.
/// - Anything in between goes straight to the unsuppressed sink.
///
/// The suppress check runs first, so with `suppress >= dump` a level matching
/// both is stored rather than dumped.
///
/// One tape is meant to cover one logical operation, e.g. a single request:
///
/// 1. `tape.debug(...)` for every small detail
/// 2. `tape.error(...)` when the request fails
/// 3. the error is printed, followed by all the details that led to it
///
/// If no error happens the tape is simply dropped along with its entries.
///
/// Each call is handled under one lock, so a tape shared between threads keeps
/// its entries in arrival order. A tape must not be one of its own sinks.
pub struct Tape {
    suppressed: SharedLogger,
    unsuppressed: SharedLogger,
    suppress: LogLevel,
    dump: LogLevel,
    entries: Mutex<Vec<Entry>>,
}

impl Tape {
    /// Creates a tape. Missing sinks are replaced with [`NilLogger`].
    pub fn new(
        suppress: LogLevel,
        suppressed: Option<SharedLogger>,
        dump: LogLevel,
        unsuppressed: Option<SharedLogger>,
    ) -> Self {
        Self {
            suppressed: suppressed.unwrap_or_else(|| Arc::new(NilLogger)),
            unsuppressed: unsuppressed.unwrap_or_else(|| Arc::new(NilLogger)),
            suppress,
            dump,
            entries: Mutex::new(Vec::new()),
        }
    }

    /// Number of entries waiting for a dump.
    pub fn buffered(&self) -> usize {
        self.lock().len()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Entry>> {
        // A fatal entry panics while the lock is held; the buffer is still sound.
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn decide(&self, level: LogLevel, entry: Entry) {
        let mut entries = self.lock();

        if level <= self.suppress {
            entries.push(entry);
            return;
        }

        if level >= self.dump {
            self.dump_tape(level, entry, &mut entries);
            return;
        }

        entry(&*self.unsuppressed);
    }

    /// Writes `header`, then replays and clears the stored entries.
    ///
    /// A fatal header ends the process when written, so in that case the
    /// history is replayed before it.
    fn dump_tape(&self, level: LogLevel, header: Entry, entries: &mut Vec<Entry>) {
        if level == LogLevel::Fatal {
            self.replay(entries);
            header(&*self.unsuppressed);
            return;
        }

        header(&*self.unsuppressed);
        self.replay(entries);
    }

    fn replay(&self, entries: &mut Vec<Entry>) {
        for entry in std::mem::take(entries) {
            entry(&*self.suppressed);
        }
    }
}

impl Logger for Tape {
    fn log(&self, level: LogLevel, message: Message) {
        self.decide(
            level,
            Box::new(move |sink: &dyn Logger| sink.log(level, message)),
        );
    }
}
