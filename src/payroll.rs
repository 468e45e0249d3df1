use crate::employees::{self, required_field};
use crate::error::{PayrollError, Result};
use crate::models::{Employee, PayrollRecord};
use crate::settings::DataFiles;
use crate::store;

/// House Rent Allowance as a fraction of basic salary.
pub const HRA_RATE: f64 = 0.20;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SalaryBreakdown {
    pub basic: f64,
    pub hra: f64,
    pub gross: f64,
}

pub fn calculate_salary(basic: f64) -> SalaryBreakdown {
    let hra = basic * HRA_RATE;
    SalaryBreakdown {
        basic,
        hra,
        gross: basic + hra,
    }
}

pub fn parse_month(raw: &str) -> Result<u32> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(PayrollError::MissingField("Month"));
    }
    let month: i64 = raw
        .parse()
        .map_err(|_| PayrollError::InvalidMonth(raw.to_string()))?;
    if !(1..=12).contains(&month) {
        return Err(PayrollError::MonthOutOfRange(month));
    }
    Ok(month as u32)
}

/// A validated pay period. The month is kept numerically so `"03"` and `"3"`
/// refer to the same period.
#[derive(Debug, Clone, PartialEq)]
pub struct Period {
    pub month: u32,
    pub year: String,
}

impl Period {
    pub fn parse(month: &str, year: &str) -> Result<Self> {
        let month = parse_month(month)?;
        let year = required_field("Year", year)?;
        Ok(Self { month, year })
    }

    pub fn current() -> Self {
        use chrono::Datelike;
        let today = chrono::Local::now().date_naive();
        Self {
            month: today.month(),
            year: today.year().to_string(),
        }
    }
}

impl std::fmt::Display for Period {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.month, self.year)
    }
}

pub fn build_record(employee: &Employee, period: &Period) -> PayrollRecord {
    let salary = calculate_salary(employee.basic_salary);
    PayrollRecord {
        employee_id: employee.id.clone(),
        name: employee.name.clone(),
        month: period.month.to_string(),
        year: period.year.clone(),
        basic: salary.basic,
        hra: salary.hra,
        gross: salary.gross,
    }
}

pub struct ProcessResult {
    pub record: PayrollRecord,
    /// Ledger lines for the same employee and period written before this one.
    pub previous_runs: usize,
}

fn count_runs(ledger: &[PayrollRecord], employee_id: &str, period: &Period) -> usize {
    ledger
        .iter()
        .filter(|r| r.employee_id == employee_id && r.is_period(period.month, &period.year))
        .count()
}

/// Compute one employee's salary for a period and append it to the ledger.
pub fn process(files: &DataFiles, id: &str, period: &Period) -> Result<ProcessResult> {
    let employee = employees::lookup(files, id)?;
    let ledger = store::load_payroll(&files.payroll)?;
    let previous_runs = count_runs(&ledger, &employee.id, period);
    if previous_runs > 0 {
        log::warn!(
            "payroll for {} in {period} already recorded {previous_runs} time(s)",
            employee.id
        );
    }

    let record = build_record(&employee, period);
    store::append_payroll(&files.payroll, &record)?;
    log::info!(
        "processed payroll for {} {period}: gross {}",
        record.employee_id,
        record.gross
    );
    Ok(ProcessResult {
        record,
        previous_runs,
    })
}

/// Process a period for every employee on file, in file order.
pub fn process_all(files: &DataFiles, period: &Period) -> Result<Vec<ProcessResult>> {
    let staff = store::load_employees(&files.employees)?;
    let ledger = store::load_payroll(&files.payroll)?;
    let mut results = Vec::with_capacity(staff.len());
    for employee in &staff {
        let previous_runs = count_runs(&ledger, &employee.id, period);
        let record = build_record(employee, period);
        store::append_payroll(&files.payroll, &record)?;
        results.push(ProcessResult {
            record,
            previous_runs,
        });
    }
    log::info!("processed payroll for {} employees in {period}", results.len());
    Ok(results)
}
