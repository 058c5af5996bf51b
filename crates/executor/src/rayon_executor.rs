//! Rayon-based parallel executor.
//!
//! Uses rayon's global work-stealing pool. Configure its size with
//! `rayon::ThreadPoolBuilder::build_global` before the first executor is
//! created.

use folio_traits::Executor;

#[derive(Debug, Clone)]
pub struct RayonExecutor {
    /// Global pool size at construction.
    num_threads: usize,
}

impl RayonExecutor {
    pub fn new() -> Self {
        Self {
            num_threads: rayon::current_num_threads(),
        }
    }
}

impl Default for RayonExecutor {
    fn default() -> Self {
        Self::new()
    }
}

impl Executor for RayonExecutor {
    fn join<A, B, RA, RB>(&self, a: A, b: B) -> (RA, RB)
    where
        A: FnOnce() -> RA + Send,
        B: FnOnce() -> RB + Send,
        RA: Send,
        RB: Send,
    {
        rayon::join(a, b)
    }

    fn parallelism(&self) -> usize {
        self.num_threads
    }

    fn name(&self) -> &'static str {
        "RayonExecutor"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_join_keeps_sides_apart() {
        let (cv, letter) = RayonExecutor::new().join(|| vec![1u8; 3], || "letter");
        assert_eq!(cv, vec![1, 1, 1]);
        assert_eq!(letter, "letter");
    }

    #[test]
    fn test_parallelism_is_positive() {
        assert!(RayonExecutor::new().parallelism() > 0);
    }

    #[test]
    fn test_join_runs_both_closures() {
        let counter = Arc::new(AtomicUsize::new(0));
        let (left, right) = {
            let c1 = Arc::clone(&counter);
            let c2 = Arc::clone(&counter);
            RayonExecutor::new().join(
                move || c1.fetch_add(1, Ordering::SeqCst),
                move || c2.fetch_add(1, Ordering::SeqCst),
            )
        };
        assert_eq!(counter.load(Ordering::SeqCst), 2);
        assert_ne!(left, right);
    }
}
