//! Parsing and validation of user-supplied values
//!
//! The repository trusts its inputs, so everything typed by the user is
//! checked here first.

use chrono::{NaiveDate, NaiveDateTime};

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::Money;

const DATE_FORMAT: &str = "%Y-%m-%d";
const DATE_TIME_FORMATS: [&str; 3] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M", "%Y-%m-%dT%H:%M:%S"];

/// Parse a strictly positive amount
pub fn parse_amount(s: &str) -> ExpenseResult<Money> {
    let amount = Money::parse(s).map_err(|e| ExpenseError::Validation(e.to_string()))?;

    if !amount.is_positive() {
        return Err(ExpenseError::Validation(format!(
            "Amount must be greater than zero: {}",
            s.trim()
        )));
    }

    Ok(amount)
}

/// Parse a calendar date (`YYYY-MM-DD`)
pub fn parse_date(s: &str) -> ExpenseResult<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), DATE_FORMAT).map_err(|_| {
        ExpenseError::Validation(format!("Invalid date '{}', expected YYYY-MM-DD", s.trim()))
    })
}

/// Parse a timestamp; a bare date means midnight of that day
pub fn parse_date_time(s: &str) -> ExpenseResult<NaiveDateTime> {
    let s = s.trim();

    for format in DATE_TIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, format) {
            return Ok(dt);
        }
    }

    parse_date(s)
        .map(|d| d.and_time(chrono::NaiveTime::MIN))
        .map_err(|_| {
            ExpenseError::Validation(format!(
                "Invalid date '{}', expected YYYY-MM-DD or YYYY-MM-DD HH:MM[:SS]",
                s
            ))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("12.50").unwrap().amount(), dec!(12.50));
        assert_eq!(parse_amount(" $4 ").unwrap().amount(), dec!(4));
        assert!(parse_amount("0").unwrap_err().to_string().contains("greater than zero"));
        assert!(parse_amount("-1").is_err());
        assert!(parse_amount("lots").is_err());
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(
            parse_date("2024-02-29").unwrap(),
            NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()
        );
        assert!(parse_date("2023-02-29").is_err());
        assert!(parse_date("02/29/2024").is_err());
    }

    #[test]
    fn test_parse_date_time() {
        let day = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        assert_eq!(
            parse_date_time("2024-01-15").unwrap(),
            day.and_hms_opt(0, 0, 0).unwrap()
        );
        assert_eq!(
            parse_date_time("2024-01-15 10:30").unwrap(),
            day.and_hms_opt(10, 30, 0).unwrap()
        );
        assert_eq!(
            parse_date_time("2024-01-15T10:30:05").unwrap(),
            day.and_hms_opt(10, 30, 5).unwrap()
        );
        assert!(parse_date_time("yesterday").is_err());
    }
}
