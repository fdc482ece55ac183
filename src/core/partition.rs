use crate::core::primality::is_prime;

/// Indices visited by one worker: `start, start + stride, ...` up to `bound` inclusive.
///
/// Worker `i` of `n` gets residue class `i mod n`, so the `n` strides together
/// cover `0..=bound` exactly once.
///
/// # Panics
///
/// Panics if `stride` is zero.
pub fn stride_indices(start: u64, bound: u64, stride: u64) -> impl Iterator<Item = u64> {
    debug_assert!(stride > 0, "stride must be non-zero");
    // step_by on an inclusive range stops cleanly at u64::MAX
    (start..=bound).step_by(stride as usize)
}

/// One worker's pass: the primes in its residue class, owned by the caller.
///
/// # Panics
///
/// Panics if `stride` is zero. `search_primes` rejects a zero worker count
/// before any worker runs.
pub fn find_primes_in_stride(start: u64, bound: u64, stride: u64) -> Vec<u64> {
    stride_indices(start, bound, stride)
        .filter(|&n| is_prime(n))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_index_visited_exactly_once() {
        for bound in [0u64, 1, 2, 17, 100, 1_001] {
            for workers in 1u64..=9 {
                let mut visits = vec![0u32; bound as usize + 1];
                for worker in 0..workers {
                    for i in stride_indices(worker, bound, workers) {
                        visits[i as usize] += 1;
                    }
                }
                assert!(
                    visits.iter().all(|&v| v == 1),
                    "bound={} workers={}",
                    bound,
                    workers
                );
            }
        }
    }

    #[test]
    #[should_panic]
    fn test_zero_stride_panics() {
        find_primes_in_stride(0, 10, 0);
    }

    #[test]
    fn test_worker_past_bound_visits_nothing() {
        assert_eq!(stride_indices(5, 3, 8).count(), 0);
    }

    #[test]
    fn test_stride_near_u64_max_terminates() {
        let visited: Vec<u64> = stride_indices(u64::MAX - 4, u64::MAX, 2).collect();
        assert_eq!(visited, vec![u64::MAX - 4, u64::MAX - 2, u64::MAX]);
    }

    #[test]
    fn test_single_stride_up_to_thirty() {
        assert_eq!(
            find_primes_in_stride(0, 30, 1),
            vec![2, 3, 5, 7, 11, 13, 17, 19, 23, 29]
        );
    }

    #[test]
    fn test_residue_class_of_even_worker() {
        // worker 0 of 2 only sees even numbers, so just 2
        assert_eq!(find_primes_in_stride(0, 50, 2), vec![2]);
    }
}
