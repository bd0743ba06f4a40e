pub mod parser;

pub use parser::{parse_date_range, parse_record_count};

/// Kimlik bilgilerini log'larda maskeler, ilk iki karakter görünür kalır
pub fn mask_sensitive(value: &str) -> String {
    let len = value.chars().count();
    if len == 0 {
        return String::new();
    }
    if len <= 4 {
        return "*".repeat(len);
    }

    let visible: String = value.chars().take(2).collect();
    format!("{}{}", visible, "*".repeat(len - 2))
}

/// Durum dosyası alanları için ISO-8601 zaman damgası
pub fn now_iso() -> String {
    chrono::Utc::now().to_rfc3339()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_credentials() {
        assert_eq!(mask_sensitive("TestPass123!"), "Te**********");
        assert_eq!(mask_sensitive("abc"), "***");
        assert_eq!(mask_sensitive(""), "");
    }
}
