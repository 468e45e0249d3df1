use crate::models::PayrollRecord;
use crate::payroll::Period;

// ---------------------------------------------------------------------------
// Employee history
// ---------------------------------------------------------------------------

/// Every ledger line for one employee, in file order.
pub fn employee_history<'a>(records: &'a [PayrollRecord], employee_id: &str) -> Vec<&'a PayrollRecord> {
    let employee_id = employee_id.trim();
    records
        .iter()
        .filter(|r| r.employee_id == employee_id)
        .collect()
}

// ---------------------------------------------------------------------------
// Monthly report
// ---------------------------------------------------------------------------

pub struct MonthlyReport<'a> {
    pub period: Period,
    pub records: Vec<&'a PayrollRecord>,
    pub total_basic: f64,
    pub total_hra: f64,
    pub total_gross: f64,
}

pub fn monthly_report<'a>(records: &'a [PayrollRecord], period: &Period) -> MonthlyReport<'a> {
    let records: Vec<_> = records
        .iter()
        .filter(|r| r.is_period(period.month, &period.year))
        .collect();

    MonthlyReport {
        period: period.clone(),
        total_basic: records.iter().map(|r| r.basic).sum(),
        total_hra: records.iter().map(|r| r.hra).sum(),
        total_gross: records.iter().map(|r| r.gross).sum(),
        records,
    }
}
