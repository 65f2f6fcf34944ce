//! Unit tests for qn-core primitives.

#[cfg(test)]
mod ids {
    use crate::{LaneId, PassengerId};

    #[test]
    fn index_roundtrip() {
        let id = PassengerId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(PassengerId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn ordering() {
        assert!(PassengerId(0) < PassengerId(1));
        assert!(LaneId(3) > LaneId(2));
    }

    #[test]
    fn display() {
        assert_eq!(LaneId(7).to_string(), "LaneId(7)");
    }

    #[test]
    fn narrow_conversion_fails_loudly() {
        assert!(LaneId::try_from(usize::MAX).is_err());
    }
}

#[cfg(test)]
mod time {
    use std::cmp::Ordering;

    use crate::SimTime;

    #[test]
    fn after_and_since() {
        let t = SimTime::ZERO.after(2.5);
        assert_eq!(t.minutes(), 2.5);
        assert_eq!(t.since(SimTime::ZERO), 2.5);
        assert_eq!(t.after(0.5).since(t), 0.5);
    }

    #[test]
    fn total_cmp_orders_instants() {
        let a = SimTime(1.0);
        let b = SimTime(2.0);
        assert_eq!(a.total_cmp(&b), Ordering::Less);
        assert_eq!(b.total_cmp(&a), Ordering::Greater);
        assert_eq!(a.total_cmp(&a), Ordering::Equal);
    }

    #[test]
    fn display_two_decimals() {
        assert_eq!(SimTime(4.219).to_string(), "4.22 min");
    }
}

#[cfg(test)]
mod rng {
    use crate::SimRng;

    #[test]
    fn uniform_stays_in_bounds() {
        let mut rng = SimRng::new(42);
        for _ in 0..1_000 {
            let x = rng.uniform(0.3, 0.7);
            assert!((0.3..=0.7).contains(&x), "got {x}");
        }
    }

    #[test]
    fn uniform_degenerate_bounds_return_low() {
        let mut rng = SimRng::new(42);
        assert_eq!(rng.uniform(5.0, 5.0), 5.0);
        assert_eq!(rng.uniform(5.0, 4.0), 5.0);
    }

    #[test]
    fn exponential_is_positive_with_roughly_right_mean() {
        let mut rng = SimRng::new(7);
        let n = 20_000;
        let mut sum = 0.0;
        for _ in 0..n {
            let x = rng.exponential(0.5);
            assert!(x >= 0.0);
            sum += x;
        }
        let mean = sum / n as f64;
        // Standard error of the mean at n=20k is ~0.0035; 10σ band.
        assert!((mean - 0.5).abs() < 0.035, "sample mean {mean}");
    }

    #[test]
    fn same_seed_same_stream() {
        let mut a = SimRng::new(99);
        let mut b = SimRng::new(99);
        for _ in 0..100 {
            assert_eq!(a.uniform(0.0, 1.0), b.uniform(0.0, 1.0));
            assert_eq!(a.pick(4), b.pick(4));
        }
    }

    #[test]
    fn pick_covers_all_indices() {
        let mut rng = SimRng::new(1);
        let mut seen = [false; 4];
        for _ in 0..200 {
            seen[rng.pick(4)] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }
}
