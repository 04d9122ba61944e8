//! Scoped acquisition of document-wide listeners
//!
//! The outside-click listener is attached on mount and must be released on
//! unmount, exactly once, no matter how the shell goes away. A
//! [`ScopedListener`] owns the release action and runs it on `release()` or
//! on drop, whichever comes first.

use std::fmt;

type Release = Box<dyn FnOnce() + Send + Sync>;

/// Registers the dismissal listener with whatever owns the event stream
pub trait ListenerHost {
    /// Attach the pointer listener; the guard detaches it
    fn attach_dismissal(&self) -> ScopedListener;
}

/// RAII guard for an attached listener
#[must_use = "dropping the guard detaches the listener immediately"]
pub struct ScopedListener {
    label: &'static str,
    release: Option<Release>,
}

impl ScopedListener {
    pub fn new(label: &'static str, release: impl FnOnce() + Send + Sync + 'static) -> Self {
        tracing::debug!(listener = label, "Listener attached");
        Self {
            label,
            release: Some(Box::new(release)),
        }
    }

    pub fn is_attached(&self) -> bool {
        self.release.is_some()
    }

    /// Detach now
    pub fn release(mut self) {
        self.run_release();
    }

    fn run_release(&mut self) {
        if let Some(release) = self.release.take() {
            tracing::debug!(listener = self.label, "Listener detached");
            release();
        }
    }
}

impl Drop for ScopedListener {
    fn drop(&mut self) {
        self.run_release();
    }
}

impl fmt::Debug for ScopedListener {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScopedListener")
            .field("label", &self.label)
            .field("attached", &self.is_attached())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn counted(counter: &Arc<AtomicUsize>) -> ScopedListener {
        let counter = Arc::clone(counter);
        ScopedListener::new("click", move || {
            counter.fetch_add(1, Ordering::SeqCst);
        })
    }

    #[test]
    fn test_release_runs_once() {
        let released = Arc::new(AtomicUsize::new(0));
        let guard = counted(&released);
        assert!(guard.is_attached());
        guard.release();
        assert_eq!(released.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_drop_releases() {
        let released = Arc::new(AtomicUsize::new(0));
        {
            let _guard = counted(&released);
        }
        assert_eq!(released.load(Ordering::SeqCst), 1);
    }
}
