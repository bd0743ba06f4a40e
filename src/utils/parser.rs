use crate::error::SuiteError;
use chrono::NaiveDate;
use regex::Regex;

/// "(3) Records Found" biçimindeki metinden kayıt sayısını çıkarır.
/// Örnekler: "(1) Record Found", "(12) Records Found"
/// Parantezli sayı yoksa 0 döner.
pub fn parse_record_count(text: &str) -> Result<usize, SuiteError> {
    let re = Regex::new(r"\((\d+)\)").map_err(|e| SuiteError::ParseError(e.to_string()))?;

    if let Some(captures) = re.captures(text) {
        if let Some(matched) = captures.get(1) {
            return matched
                .as_str()
                .parse::<usize>()
                .map_err(|e| SuiteError::ParseError(format!("Kayıt sayısı parse hatası: {}", e)));
        }
    }

    Ok(0)
}

/// Tablo hücresindeki "YYYY-MM-DD to YYYY-MM-DD" aralığını parse eder.
/// Tek tarih varsa bitiş tarihi başlangıçla aynı kabul edilir.
pub fn parse_date_range(text: &str) -> Result<(NaiveDate, NaiveDate), SuiteError> {
    let mut parts = text.splitn(2, " to ");

    let from_text = parts.next().unwrap_or("").trim();
    let from_date = NaiveDate::parse_from_str(from_text, "%Y-%m-%d")?;

    let to_date = match parts.next() {
        Some(to_text) => NaiveDate::parse_from_str(to_text.trim(), "%Y-%m-%d")?,
        None => from_date,
    };

    Ok((from_date, to_date))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_record_count() {
        assert_eq!(parse_record_count("(1) Record Found").unwrap(), 1);
        assert_eq!(parse_record_count("(12) Records Found").unwrap(), 12);
        assert_eq!(parse_record_count("No Records Found").unwrap(), 0);
        assert_eq!(parse_record_count("").unwrap(), 0);
    }

    #[test]
    fn test_parse_date_range() {
        let (from, to) = parse_date_range("2025-03-10 to 2025-03-12").unwrap();
        assert_eq!(from, NaiveDate::from_ymd_opt(2025, 3, 10).unwrap());
        assert_eq!(to, NaiveDate::from_ymd_opt(2025, 3, 12).unwrap());
    }

    #[test]
    fn test_parse_date_range_single_date() {
        let (from, to) = parse_date_range("2025-03-10").unwrap();
        assert_eq!(from, to);
    }

    #[test]
    fn test_parse_date_range_errors() {
        assert!(parse_date_range("").is_err());
        assert!(parse_date_range("10/03/2025 to 12/03/2025").is_err());
    }
}
