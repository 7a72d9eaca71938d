//! Tick arithmetic: GCD, LCM, and the simulation horizon.
//!
//! The simulation runs over one hyperperiod — the least common multiple of
//! all task periods — after which the arrival pattern repeats exactly.
//! LCMs grow multiplicatively, so all arithmetic is 64-bit and checked:
//! overflow yields `None` rather than a silently wrapped horizon.

use crate::models::TaskDescriptor;
use crate::Tick;

/// Greatest common divisor (Euclid).
pub fn gcd(x: Tick, y: Tick) -> Tick {
    if y == 0 {
        x
    } else {
        gcd(y, x % y)
    }
}

/// Least common multiple, or `None` on overflow.
pub fn lcm(x: Tick, y: Tick) -> Option<Tick> {
    (x / gcd(x, y)).checked_mul(y)
}

/// LCM of all task periods, the natural run length of the simulation.
///
/// Returns `None` for an empty task set (the hyperperiod is undefined) or
/// when the LCM overflows 64 bits.
pub fn hyperperiod(tasks: &[TaskDescriptor]) -> Option<Tick> {
    let (first, rest) = tasks.split_first()?;
    rest.iter()
        .try_fold(first.period, |acc, task| lcm(acc, task.period))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gcd() {
        assert_eq!(gcd(12, 8), 4);
        assert_eq!(gcd(8, 12), 4);
        assert_eq!(gcd(7, 13), 1);
        assert_eq!(gcd(5, 0), 5);
        assert_eq!(gcd(0, 5), 5);
    }

    #[test]
    fn test_lcm() {
        assert_eq!(lcm(2, 5), Some(10));
        assert_eq!(lcm(4, 6), Some(12));
        assert_eq!(lcm(3, 3), Some(3));
    }

    #[test]
    fn test_lcm_overflow() {
        // Adjacent integers are coprime, so the LCM is their product.
        assert_eq!(lcm(u64::MAX, u64::MAX - 1), None);
    }

    #[test]
    fn test_hyperperiod() {
        let tasks = vec![
            TaskDescriptor::new(1, 1, 2),
            TaskDescriptor::new(2, 1, 5),
            TaskDescriptor::new(3, 1, 4),
        ];
        assert_eq!(hyperperiod(&tasks), Some(20));
    }

    #[test]
    fn test_hyperperiod_single_task() {
        let tasks = vec![TaskDescriptor::new(1, 3, 7)];
        assert_eq!(hyperperiod(&tasks), Some(7));
    }

    #[test]
    fn test_hyperperiod_empty() {
        assert_eq!(hyperperiod(&[]), None);
    }

    #[test]
    fn test_hyperperiod_overflow() {
        let tasks = vec![
            TaskDescriptor::new(1, 1, u64::MAX),
            TaskDescriptor::new(2, 1, u64::MAX - 1),
        ];
        assert_eq!(hyperperiod(&tasks), None);
    }
}
