use chrono::{Duration, NaiveDate, ParseError};

pub const DATE_FMT: &str = "%Y-%m-%d";

// due date for a borrow period, rendered in the same shape as the input date
pub fn due_date(borrow_date: &str, borrow_period_days: i64) -> Result<String, ParseError> {
    let borrowed = NaiveDate::parse_from_str(borrow_date, DATE_FMT)?;
    let due = borrowed + Duration::days(borrow_period_days);
    Ok(due.format(DATE_FMT).to_string())
}

// linear fee, no cap and no grace period
pub fn late_fee(days_late: i64, daily_fee: i64) -> i64 {
    daily_fee * days_late
}

pub fn average_borrowed(counts: &[usize]) -> f64 {
    if counts.is_empty() {
        return 0.0;
    }
    counts.iter().sum::<usize>() as f64 / counts.len() as f64
}

#[cfg(test)]
mod tests {
    use crate::utils::date::{average_borrowed, due_date, late_fee};

    #[test]
    fn test_should_calculate_due_date() {
        assert_eq!("2024-01-16", due_date("2024-01-01", 15).expect("should parse date"));
    }

    #[test]
    fn test_should_calculate_due_date_across_month_end() {
        assert_eq!("2024-03-05", due_date("2024-02-19", 15).expect("should parse date"));
    }

    #[test]
    fn test_should_reject_malformed_borrow_date() {
        assert!(due_date("01/01/2024", 15).is_err());
    }

    #[test]
    fn test_should_calculate_late_fee() {
        assert_eq!(0, late_fee(0, 1));
        assert_eq!(7, late_fee(7, 1));
        assert_eq!(14, late_fee(7, 2));
    }

    #[test]
    fn test_should_calculate_average_borrowed() {
        assert_eq!(0.0, average_borrowed(&[]));
        assert_eq!(2.0, average_borrowed(&[1, 2, 3]));
        assert_eq!(2.5, average_borrowed(&[2, 3]));
    }
}
