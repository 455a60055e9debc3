use nanorand::{Rng, WyRand};

/// Chooses a rotation for one word.
///
/// A uniform draw above `probability` keeps the word upright; otherwise one of
/// `angles` is picked uniformly.
pub fn rotation_for(rng: &mut WyRand, angles: &[f32], probability: f32) -> f32 {
    let draw: f32 = rng.generate();
    if draw > probability || angles.is_empty() {
        return 0.0;
    }

    angles[rng.generate_range(0..angles.len())]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_probability_never_rotates() {
        let mut rng = WyRand::new_seed(7);
        for _ in 0..200 {
            assert_eq!(rotation_for(&mut rng, &[90.0, 45.0], 0.0), 0.0);
        }
    }

    #[test]
    fn full_probability_always_picks_an_angle() {
        let mut rng = WyRand::new_seed(7);
        let mut seen_90 = false;
        let mut seen_45 = false;
        for _ in 0..200 {
            let angle = rotation_for(&mut rng, &[90.0, 45.0], 1.0);
            assert!(angle == 90.0 || angle == 45.0);
            seen_90 |= angle == 90.0;
            seen_45 |= angle == 45.0;
        }
        assert!(seen_90 && seen_45);
    }

    #[test]
    fn same_seed_same_rotations() {
        let draw = |seed| {
            let mut rng = WyRand::new_seed(seed);
            (0..50)
                .map(|_| rotation_for(&mut rng, &[0.0, 90.0], 0.3))
                .collect::<Vec<_>>()
        };
        assert_eq!(draw(42), draw(42));
    }
}
