use rand::Rng;

pub struct IntegerUtils;

impl IntegerUtils {
    /// Random integer in [min, max] inclusive
    pub fn random(min: i32, max: i32) -> i32 {
        if min >= max {
            return min;
        }

        rand::rng().random_range(min..=max)
    }

    pub fn random_u16(min: u16, max: u16) -> u16 {
        if min >= max {
            return min;
        }

        rand::rng().random_range(min..=max)
    }
}

pub struct FloatUtils;

impl FloatUtils {
    /// Random float in [min, max)
    pub fn random(min: f32, max: f32) -> f32 {
        if min >= max {
            return min;
        }

        rand::rng().random_range(min..max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_integer_in_range() {
        for _ in 0..100 {
            let val = IntegerUtils::random(10, 20);
            assert!(val >= 10 && val <= 20);
        }
    }

    #[test]
    fn test_random_integer_degenerate_range() {
        assert_eq!(IntegerUtils::random(5, 5), 5);
        assert_eq!(IntegerUtils::random(7, 3), 7);
    }

    #[test]
    fn test_random_float_in_range() {
        for _ in 0..100 {
            let val = FloatUtils::random(0.5, 1.5);
            assert!(val >= 0.5 && val < 1.5);
        }
    }
}
