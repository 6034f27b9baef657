use chrono::NaiveDate;

use crate::errors::ParseError;

/// The only accepted textual date layout (`DD/MM/YYYY`).
pub const DATE_FORMAT: &str = "%d/%m/%Y";

pub fn parse_date(token: &str) -> Result<NaiveDate, ParseError> {
    let trimmed = token.trim();
    NaiveDate::parse_from_str(trimmed, DATE_FORMAT)
        .map_err(|_| ParseError::InvalidDate(trimmed.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_day_month_year() {
        let date = parse_date(" 10/10/2023 ").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2023, 10, 10).unwrap());
    }

    #[test]
    fn rejects_other_layouts_and_impossible_dates() {
        for token in ["2023-10-10", "31/02/2023", "tomorrow", ""] {
            assert_eq!(
                parse_date(token).unwrap_err(),
                ParseError::InvalidDate(token.to_string()),
                "`{token}` should not parse"
            );
        }
    }
}
