//! Earliest-Deadline-First dispatch policy.

use super::{Decision, DispatchPolicy};
use crate::models::ReadyQueue;
use crate::Tick;

/// Preemptive Earliest-Deadline-First.
///
/// The instance with the smallest absolute deadline runs. Two ordering
/// guarantees are part of the contract:
///
/// - **Tie-break**: when no instance is running and several share the
///   smallest deadline, the one earliest in queue (insertion) order wins —
///   i.e. the instance that has been ready longest.
/// - **Anti-thrashing**: a running instance is preempted only by a STRICTLY
///   smaller deadline. Equal deadlines never trigger preemption.
#[derive(Debug, Clone, Copy)]
pub struct EarliestDeadlineFirst;

impl EarliestDeadlineFirst {
    /// Index of the first instance whose deadline is strictly below `bound`,
    /// scanning in queue order and keeping the first occurrence of the
    /// minimum.
    fn earliest_below(queue: &ReadyQueue, bound: Tick) -> Option<usize> {
        let mut best_deadline = bound;
        let mut best = None;
        for (idx, inst) in queue.iter().enumerate() {
            if inst.deadline < best_deadline {
                best_deadline = inst.deadline;
                best = Some(idx);
            }
        }
        best
    }
}

impl DispatchPolicy for EarliestDeadlineFirst {
    fn name(&self) -> &'static str {
        "EDF"
    }

    fn decide(&self, queue: &ReadyQueue, current: Option<usize>) -> Decision {
        if queue.is_empty() {
            return Decision::Idle;
        }

        match current {
            None => match Self::earliest_below(queue, Tick::MAX) {
                Some(idx) => Decision::Start(idx),
                None => Decision::Idle,
            },
            Some(cur) => match Self::earliest_below(queue, queue[cur].deadline) {
                Some(idx) => Decision::Preempt { from: cur, to: idx },
                None => Decision::Keep,
            },
        }
    }

    fn description(&self) -> &'static str {
        "Earliest Deadline First"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{TaskDescriptor, TaskInstance};

    fn queue_with_deadlines(deadlines: &[(u32, Tick)]) -> ReadyQueue {
        let mut q = ReadyQueue::new();
        for &(id, deadline) in deadlines {
            let mut inst = TaskInstance::release(&TaskDescriptor::new(id, 1, 1), 0);
            inst.deadline = deadline;
            q.push(inst);
        }
        q
    }

    #[test]
    fn test_name_and_description() {
        assert_eq!(EarliestDeadlineFirst.name(), "EDF");
        assert_eq!(
            EarliestDeadlineFirst.description(),
            "Earliest Deadline First"
        );
    }

    #[test]
    fn test_idle_on_empty_queue() {
        let q = ReadyQueue::new();
        assert_eq!(EarliestDeadlineFirst.decide(&q, None), Decision::Idle);
    }

    #[test]
    fn test_starts_earliest_deadline() {
        let q = queue_with_deadlines(&[(1, 10), (2, 4), (3, 7)]);
        assert_eq!(EarliestDeadlineFirst.decide(&q, None), Decision::Start(1));
    }

    #[test]
    fn test_tie_goes_to_oldest() {
        // Instances 1 and 3 share the smallest deadline; the one earlier in
        // queue order (index 0) has been ready longest and must win.
        let q = queue_with_deadlines(&[(1, 5), (2, 9), (3, 5)]);
        assert_eq!(EarliestDeadlineFirst.decide(&q, None), Decision::Start(0));
    }

    #[test]
    fn test_keep_when_current_is_earliest() {
        let q = queue_with_deadlines(&[(1, 4), (2, 10)]);
        assert_eq!(EarliestDeadlineFirst.decide(&q, Some(0)), Decision::Keep);
    }

    #[test]
    fn test_preempts_on_strictly_smaller_deadline() {
        let q = queue_with_deadlines(&[(1, 10), (2, 4)]);
        assert_eq!(
            EarliestDeadlineFirst.decide(&q, Some(0)),
            Decision::Preempt { from: 0, to: 1 }
        );
    }

    #[test]
    fn test_equal_deadline_never_preempts() {
        let q = queue_with_deadlines(&[(1, 6), (2, 6), (3, 6)]);
        assert_eq!(EarliestDeadlineFirst.decide(&q, Some(1)), Decision::Keep);
    }

    #[test]
    fn test_preempts_to_minimum_among_candidates() {
        let q = queue_with_deadlines(&[(1, 10), (2, 7), (3, 3)]);
        assert_eq!(
            EarliestDeadlineFirst.decide(&q, Some(0)),
            Decision::Preempt { from: 0, to: 2 }
        );
    }
}
