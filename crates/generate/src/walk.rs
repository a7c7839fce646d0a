//! The bounded random-walk step.

use notos_ranges::ParamRange;
use rand::Rng;

/// Advances one value by a uniform draw in `[-step, step]`, clamped to the
/// range bounds.
///
/// A zero step degenerates to a pure clamp of the current value.
pub(crate) fn walk_step(current: f64, range: ParamRange, rng: &mut impl Rng) -> f64 {
    let change = if range.step > 0.0 {
        rng.random_range(-range.step..=range.step)
    } else {
        0.0
    };
    (current + change).clamp(range.min, range.max)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn stays_within_bounds() {
        let range = ParamRange::new(0.0, 10.0, 3.0);
        let mut rng = StdRng::seed_from_u64(7);
        let mut value = 5.0;
        for _ in 0..10_000 {
            value = walk_step(value, range, &mut rng);
            assert!((0.0..=10.0).contains(&value), "escaped bounds: {value}");
        }
    }

    #[test]
    fn change_never_exceeds_step() {
        let range = ParamRange::new(-100.0, 100.0, 0.5);
        let mut rng = StdRng::seed_from_u64(11);
        let mut value = 0.0;
        for _ in 0..10_000 {
            let next = walk_step(value, range, &mut rng);
            assert!(
                (next - value).abs() <= 0.5 + f64::EPSILON,
                "step too large: {value} -> {next}"
            );
            value = next;
        }
    }

    #[test]
    fn zero_step_holds_value() {
        let range = ParamRange::new(0.0, 10.0, 0.0);
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(walk_step(4.0, range, &mut rng), 4.0);
    }

    #[test]
    fn zero_step_still_clamps() {
        let range = ParamRange::new(0.0, 10.0, 0.0);
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(walk_step(15.0, range, &mut rng), 10.0);
    }

    #[test]
    fn out_of_range_start_is_pulled_in() {
        let range = ParamRange::new(0.0, 1.0, 0.1);
        let mut rng = StdRng::seed_from_u64(3);
        let value = walk_step(5.0, range, &mut rng);
        assert!((0.0..=1.0).contains(&value));
    }

    #[test]
    fn seeded_walk_is_reproducible() {
        let range = ParamRange::new(0.0, 50.0, 2.0);
        let mut a = StdRng::seed_from_u64(42);
        let mut b = StdRng::seed_from_u64(42);
        let mut va = 25.0;
        let mut vb = 25.0;
        for _ in 0..100 {
            va = walk_step(va, range, &mut a);
            vb = walk_step(vb, range, &mut b);
            assert_eq!(va, vb);
        }
    }
}
