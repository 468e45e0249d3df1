#[derive(Debug, Clone, PartialEq)]
pub struct Employee {
    pub id: String,
    pub name: String,
    pub basic_salary: f64,
}

/// One processed month for one employee. `name` is copied from the
/// employee master at processing time and never refreshed.
#[derive(Debug, Clone, PartialEq)]
pub struct PayrollRecord {
    pub employee_id: String,
    pub name: String,
    pub month: String,
    pub year: String,
    pub basic: f64,
    pub hra: f64,
    pub gross: f64,
}

impl PayrollRecord {
    /// Numeric month, tolerating zero-padded values such as `"03"`.
    pub fn month_number(&self) -> Option<u32> {
        self.month.trim().parse().ok()
    }

    pub fn is_period(&self, month: u32, year: &str) -> bool {
        self.month_number() == Some(month) && self.year.trim() == year.trim()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(month: &str, year: &str) -> PayrollRecord {
        PayrollRecord {
            employee_id: "E1".to_string(),
            name: "Asha".to_string(),
            month: month.to_string(),
            year: year.to_string(),
            basic: 100.0,
            hra: 20.0,
            gross: 120.0,
        }
    }

    #[test]
    fn test_is_period_matches_padded_month() {
        assert!(record("03", "2025").is_period(3, "2025"));
        assert!(record("3", "2025").is_period(3, "2025"));
    }

    #[test]
    fn test_is_period_rejects_other_year_or_month() {
        assert!(!record("3", "2024").is_period(3, "2025"));
        assert!(!record("4", "2025").is_period(3, "2025"));
        assert!(!record("march", "2025").is_period(3, "2025"));
    }
}
