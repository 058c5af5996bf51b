//! Executor abstraction for running independent fits side by side.

use std::fmt::Debug;

/// Runs independent pieces of work, possibly in parallel.
pub trait Executor: Send + Sync + Debug {
    /// Runs two closures and returns both results, left first.
    fn join<A, B, RA, RB>(&self, a: A, b: B) -> (RA, RB)
    where
        A: FnOnce() -> RA + Send,
        B: FnOnce() -> RB + Send,
        RA: Send,
        RB: Send;

    /// 1 for sequential executors.
    fn parallelism(&self) -> usize;

    fn name(&self) -> &'static str;
}

/// Sequential executor with no threading.
#[derive(Debug, Clone, Copy, Default)]
pub struct SyncExecutor;

impl SyncExecutor {
    pub fn new() -> Self {
        Self
    }
}

impl Executor for SyncExecutor {
    fn join<A, B, RA, RB>(&self, a: A, b: B) -> (RA, RB)
    where
        A: FnOnce() -> RA + Send,
        B: FnOnce() -> RB + Send,
        RA: Send,
        RB: Send,
    {
        let ra = a();
        (ra, b())
    }

    fn parallelism(&self) -> usize {
        1
    }

    fn name(&self) -> &'static str {
        "SyncExecutor"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[test]
    fn join_runs_left_then_right() {
        let trace = Mutex::new(Vec::new());
        let (a, b) = SyncExecutor::new().join(
            || {
                trace.lock().unwrap().push("cv");
                1
            },
            || {
                trace.lock().unwrap().push("letter");
                "two"
            },
        );
        assert_eq!((a, b), (1, "two"));
        assert_eq!(*trace.lock().unwrap(), vec!["cv", "letter"]);
    }

    #[test]
    fn sequential_parallelism_is_one() {
        assert_eq!(SyncExecutor::new().parallelism(), 1);
        assert_eq!(SyncExecutor::new().name(), "SyncExecutor");
    }
}
