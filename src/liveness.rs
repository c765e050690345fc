//! Explicit liveness tokens for gating late callbacks.
//!
//! A loader owns a [`Liveness`] and hands a [`LivenessWatch`] to every
//! callback it gives to a capability.  Once the loader is dropped the watch
//! reports dead and the callback returns without doing anything.  The
//! underlying request is not cancelled; only its delivery is suppressed.

use std::sync::{Arc, Weak};

/// Owner side of the token.  Deliberately not `Clone`: exactly one owner
/// decides when callbacks stop being delivered.
#[derive(Debug, Default)]
pub struct Liveness(Arc<()>);

impl Liveness {
    pub fn new() -> Self {
        Self::default()
    }

    /// A weak observer to move into a callback.
    pub fn watch(&self) -> LivenessWatch {
        LivenessWatch(Arc::downgrade(&self.0))
    }
}

/// Observer side of the token.
#[derive(Debug, Clone)]
pub struct LivenessWatch(Weak<()>);

impl LivenessWatch {
    pub fn is_alive(&self) -> bool {
        self.0.strong_count() > 0
    }
}
