use std::time::Instant;

pub struct TimeEstimation;

impl TimeEstimation {
    pub fn estimate<F, R>(action: F) -> (R, u64)
    where
        F: FnOnce() -> R,
    {
        let now = Instant::now();

        let result = action();

        (result, now.elapsed().as_millis() as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_estimate_returns_action_result() {
        let (result, elapsed) = TimeEstimation::estimate(|| 2 + 2);

        assert_eq!(result, 4);
        assert!(elapsed < 1000);
    }
}
