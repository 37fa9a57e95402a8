use chrono::{Datelike, NaiveDate};

pub struct DateUtils;

impl DateUtils {
    pub fn age(birth_date: NaiveDate, now: NaiveDate) -> u8 {
        let mut age = now.year() - birth_date.year();

        if (now.month(), now.day()) < (birth_date.month(), birth_date.day()) {
            age -= 1;
        }

        age.max(0) as u8
    }

    pub fn is_birthday(birth_date: NaiveDate, now: NaiveDate) -> bool {
        birth_date.month() == now.month() && birth_date.day() == now.day()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_age_before_birthday() {
        let birth = NaiveDate::from_ymd_opt(2004, 9, 15).unwrap();
        let now = NaiveDate::from_ymd_opt(2025, 9, 14).unwrap();

        assert_eq!(DateUtils::age(birth, now), 20);
    }

    #[test]
    fn test_age_on_birthday() {
        let birth = NaiveDate::from_ymd_opt(2004, 9, 15).unwrap();
        let now = NaiveDate::from_ymd_opt(2025, 9, 15).unwrap();

        assert_eq!(DateUtils::age(birth, now), 21);
        assert!(DateUtils::is_birthday(birth, now));
    }

    #[test]
    fn test_is_not_birthday() {
        let birth = NaiveDate::from_ymd_opt(2004, 9, 15).unwrap();
        let now = NaiveDate::from_ymd_opt(2025, 9, 16).unwrap();

        assert!(!DateUtils::is_birthday(birth, now));
    }
}
