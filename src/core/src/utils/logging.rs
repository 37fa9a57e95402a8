use crate::utils::TimeEstimation;
use log::debug;

pub struct Logging;

impl Logging {
    pub fn estimate_result<F, R>(action: F, message: &str) -> R
    where
        F: FnOnce() -> R,
    {
        let (result, elapsed) = TimeEstimation::estimate(action);

        debug!("{}, {} ms", message, elapsed);

        result
    }

    pub fn estimate<F>(action: F, message: &str)
    where
        F: FnOnce(),
    {
        let (_, elapsed) = TimeEstimation::estimate(action);

        debug!("{}, {} ms", message, elapsed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_estimate_result_passes_value_through() {
        let value = Logging::estimate_result(|| String::from("boxscore"), "test action");

        assert_eq!(value, "boxscore");
    }
}
