use crate::domain::model::BirthInfo;
use crate::utils::error::{Result, SajuError};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(SajuError::InvalidBirthInfo {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("must be between {} and {}", min, max),
        });
    }
    Ok(())
}

pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Month lengths are checked here instead of being delegated to chrono, so an
/// impossible date is rejected with a field-level message before any date
/// arithmetic runs.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        _ => 28,
    }
}

impl Validate for BirthInfo {
    fn validate(&self) -> Result<()> {
        validate_range("month", self.month, 1, 12)?;
        validate_range("day", self.day, 1, days_in_month(self.year, self.month))?;
        if let Some(hour) = self.hour {
            validate_range("hour", hour, 0, 23)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_range() {
        assert!(validate_range("month", 5u32, 1, 12).is_ok());
        assert!(validate_range("month", 0u32, 1, 12).is_err());
        assert!(validate_range("month", 13u32, 1, 12).is_err());
    }

    #[test]
    fn test_leap_years() {
        assert!(is_leap_year(2000));
        assert!(is_leap_year(1996));
        assert!(!is_leap_year(1900));
        assert!(!is_leap_year(1999));
    }

    #[test]
    fn test_days_in_month() {
        assert_eq!(days_in_month(1990, 1), 31);
        assert_eq!(days_in_month(1990, 4), 30);
        assert_eq!(days_in_month(1990, 2), 28);
        assert_eq!(days_in_month(1992, 2), 29);
    }

    #[test]
    fn test_birth_info_validation() {
        assert!(BirthInfo::new(1990, 5, 15, None).validate().is_ok());
        assert!(BirthInfo::new(1990, 5, 15, Some(23)).validate().is_ok());
        assert!(BirthInfo::new(1990, 2, 29, None).validate().is_err());
        assert!(BirthInfo::new(1992, 2, 29, None).validate().is_ok());
        assert!(BirthInfo::new(1990, 13, 1, None).validate().is_err());
        assert!(BirthInfo::new(1990, 5, 15, Some(24)).validate().is_err());
    }
}
