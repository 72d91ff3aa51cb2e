//! Schedule quality metrics (KPIs).
//!
//! Reduces a completed process set and clock totals to the aggregate
//! figures reported with every schedule.
//!
//! # Metrics
//!
//! | Metric | Definition | Rounding |
//! |--------|-----------|----------|
//! | Avg Turnaround | mean(finish - arrival) | 2 decimals |
//! | Avg Waiting | mean(turnaround - burst) | 2 decimals |
//! | CPU Utilization | (total - idle) / total * 100 | 1 decimal |
//!
//! Rounding is half-to-even on the exact binary value of the `f64`, so
//! `2.675` (stored as 2.67499...) rounds to `2.67` and the exact tie
//! `0.125` rounds to `0.12`.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.2: Scheduling Criteria

use crate::models::Process;

/// Aggregate schedule performance indicators.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScheduleMetrics {
    /// Mean turnaround time, rounded to 2 decimals.
    pub average_turnaround_time: f64,
    /// Mean waiting time, rounded to 2 decimals.
    pub average_waiting_time: f64,
    /// CPU utilization in percent, rounded to 1 decimal.
    pub cpu_utilization: f64,
}

impl ScheduleMetrics {
    /// Computes metrics from completed processes and clock totals.
    ///
    /// Averages are 0 for an empty process set; utilization is 0 when
    /// `total_time` is 0.
    pub fn calculate(processes: &[Process], total_time: i64, total_idle_time: i64) -> Self {
        let n = processes.len();
        // Per-process values fit in i64; their sums may not
        let total_turnaround: i128 = processes.iter().map(|p| i128::from(p.turnaround_time)).sum();
        let total_waiting: i128 = processes.iter().map(|p| i128::from(p.waiting_time)).sum();

        let (avg_turnaround, avg_waiting) = if n == 0 {
            (0.0, 0.0)
        } else {
            (
                total_turnaround as f64 / n as f64,
                total_waiting as f64 / n as f64,
            )
        };

        let cpu_utilization = if total_time > 0 {
            ((total_time - total_idle_time) as f64 / total_time as f64) * 100.0
        } else {
            0.0
        };

        Self {
            average_turnaround_time: round_half_even(avg_turnaround, 2),
            average_waiting_time: round_half_even(avg_waiting, 2),
            cpu_utilization: round_half_even(cpu_utilization, 1),
        }
    }
}

/// Rounds `value` to `decimals` places, ties to even.
///
/// Works on the exact binary expansion of `value`: the decision is made
/// with integer arithmetic on the mantissa, so no intermediate `value *
/// 10^decimals` rounding can flip a result. `decimals` must be at most 9.
pub fn round_half_even(value: f64, decimals: u32) -> f64 {
    debug_assert!(decimals <= 9);
    if !value.is_finite() || value == 0.0 {
        return value;
    }

    let bits = value.to_bits();
    let negative = bits >> 63 == 1;
    let exp_bits = ((bits >> 52) & 0x7ff) as i32;
    let fraction = bits & ((1u64 << 52) - 1);
    let (mantissa, exp) = if exp_bits == 0 {
        (fraction, -1074)
    } else {
        (fraction | (1u64 << 52), exp_bits - 1075)
    };

    // value = mantissa * 2^exp; non-negative exponents are integers already
    if exp >= 0 {
        return value;
    }

    let scale = 10u128.pow(decimals);
    let scaled = mantissa as u128 * scale;
    let shift = exp.unsigned_abs();
    let rounded = if shift >= 127 {
        0
    } else {
        let quotient = scaled >> shift;
        let remainder = scaled & ((1u128 << shift) - 1);
        let half = 1u128 << (shift - 1);
        if remainder > half || (remainder == half && quotient & 1 == 1) {
            quotient + 1
        } else {
            quotient
        }
    };

    let magnitude = rounded as f64 / scale as f64;
    if negative {
        -magnitude
    } else {
        magnitude
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn completed(id: &str, arrival: i64, burst: i64, finish: i64) -> Process {
        let mut p = Process::new(id, arrival, burst);
        p.complete_at(finish);
        p
    }

    #[test]
    fn test_metrics_basic() {
        let processes = vec![completed("A", 0, 5, 5), completed("B", 2, 3, 8)];
        let m = ScheduleMetrics::calculate(&processes, 8, 0);
        // turnaround (5 + 6) / 2, waiting (0 + 3) / 2
        assert_eq!(m.average_turnaround_time, 5.5);
        assert_eq!(m.average_waiting_time, 1.5);
        assert_eq!(m.cpu_utilization, 100.0);
    }

    #[test]
    fn test_metrics_with_idle() {
        let processes = vec![completed("A", 0, 2, 2), completed("B", 5, 1, 6)];
        let m = ScheduleMetrics::calculate(&processes, 6, 3);
        // 3 / 6 busy
        assert_eq!(m.cpu_utilization, 50.0);
    }

    #[test]
    fn test_metrics_repeating_fraction() {
        let processes = vec![
            completed("A", 0, 1, 1),
            completed("B", 0, 1, 2),
            completed("C", 0, 1, 4),
        ];
        // turnaround 7/3, waiting 4/3
        let m = ScheduleMetrics::calculate(&processes, 4, 1);
        assert_eq!(m.average_turnaround_time, 2.33);
        assert_eq!(m.average_waiting_time, 1.33);
        assert_eq!(m.cpu_utilization, 75.0);

        let m = ScheduleMetrics::calculate(&processes, 3, 1);
        assert_eq!(m.cpu_utilization, 66.7);
    }

    #[test]
    fn test_metrics_empty() {
        let m = ScheduleMetrics::calculate(&[], 0, 0);
        assert_eq!(m.average_turnaround_time, 0.0);
        assert_eq!(m.average_waiting_time, 0.0);
        assert_eq!(m.cpu_utilization, 0.0);
    }

    #[test]
    fn test_round_half_even_ties() {
        // Exact binary ties go to the even neighbour
        assert_eq!(round_half_even(0.125, 2), 0.12);
        assert_eq!(round_half_even(0.375, 2), 0.38);
        assert_eq!(round_half_even(2.5, 0), 2.0);
        assert_eq!(round_half_even(3.5, 0), 4.0);
        assert_eq!(round_half_even(0.25, 1), 0.2);
    }

    #[test]
    fn test_round_uses_binary_value() {
        // 2.675 is stored slightly below the tie
        assert_eq!(round_half_even(2.675, 2), 2.67);
        // 1.005 is stored slightly below the tie
        assert_eq!(round_half_even(1.005, 2), 1.0);
        // 2.345 is stored slightly above the tie
        assert_eq!(round_half_even(2.345, 2), 2.35);
        assert_eq!(round_half_even(0.035, 2), 0.04);
    }

    #[test]
    fn test_round_passthrough() {
        assert_eq!(round_half_even(42.0, 2), 42.0);
        assert_eq!(round_half_even(0.0, 1), 0.0);
        assert_eq!(round_half_even(-1.25, 1), -1.2);
        assert_eq!(round_half_even(66.66666666666667, 1), 66.7);
    }
}
