//! Per-project launch serialization
//!
//! Two concurrent deploys of one project must not both observe "no running
//! instance" and double-launch. The registry hands out one mutex per image
//! name; the orchestrator holds it across the reconcile and launch stages.
//! Deploys of different projects never contend.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Registry of per-image-name launch locks
#[derive(Debug, Default)]
pub struct LaunchLocks {
    locks: Mutex<HashMap<String, Arc<Mutex<()>>>>,
}

impl LaunchLocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the lock guarding `image_name`, creating it on first use
    pub fn for_image(&self, image_name: &str) -> Arc<Mutex<()>> {
        let mut locks = self.locks.lock().unwrap();
        locks.entry(image_name.to_string()).or_default().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_image_shares_one_lock() {
        let locks = LaunchLocks::new();
        let first = locks.for_image("github.com/acme/app");
        let second = locks.for_image("github.com/acme/app");
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn test_different_images_do_not_contend() {
        let locks = LaunchLocks::new();
        let app = locks.for_image("github.com/acme/app");
        let other = locks.for_image("github.com/acme/other");
        assert!(!Arc::ptr_eq(&app, &other));

        let _held = app.lock().unwrap();
        // Must not block
        let _other = other.try_lock().unwrap();
    }

    #[test]
    fn test_held_lock_blocks_second_deploy() {
        let locks = LaunchLocks::new();
        let lock = locks.for_image("github.com/acme/app");

        let guard = lock.lock().unwrap();
        assert!(locks.for_image("github.com/acme/app").try_lock().is_err());
        drop(guard);
        assert!(locks.for_image("github.com/acme/app").try_lock().is_ok());
    }
}
