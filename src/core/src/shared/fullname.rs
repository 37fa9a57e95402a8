use serde::Serialize;
use std::fmt::{Display, Formatter, Result};

#[derive(Debug, Clone, Serialize)]
pub struct FullName {
    pub first_name: String,
    pub last_name: String,
}

impl FullName {
    pub fn with_full(first_name: String, last_name: String) -> Self {
        FullName {
            first_name,
            last_name,
        }
    }
}

impl Display for FullName {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{} {}", self.first_name, self.last_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_name_display() {
        let name = FullName::with_full(String::from("Marcus"), String::from("Reed"));

        assert_eq!(format!("{}", name), "Marcus Reed");
    }
}
