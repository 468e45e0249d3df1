use colored::Colorize;
use comfy_table::{Cell, CellAlignment, Table};

use crate::error::Result;
use crate::fmt::money;
use crate::payroll::{self, Period, ProcessResult, HRA_RATE};
use crate::settings::{load_settings, DataFiles};

fn resolve_period(month: Option<&str>, year: Option<&str>) -> Result<Period> {
    let current = Period::current();
    let month = month.map(str::to_string).unwrap_or_else(|| current.month.to_string());
    let year = year.map(str::to_string).unwrap_or(current.year);
    Period::parse(&month, &year)
}

fn print_breakdown(result: &ProcessResult, period: &Period, currency: &str) {
    let rec = &result.record;
    let hra_label = format!("HRA ({:.0}%)", HRA_RATE * 100.0);

    let mut table = Table::new();
    table.set_header(vec!["Salary Breakdown", ""]);
    table.add_row(vec![Cell::new("Employee ID"), Cell::new(&rec.employee_id)]);
    table.add_row(vec![Cell::new("Name"), Cell::new(&rec.name)]);
    table.add_row(vec![Cell::new("Month/Year"), Cell::new(period)]);
    table.add_row(vec![
        Cell::new("Basic Salary"),
        Cell::new(money(rec.basic, currency)).set_alignment(CellAlignment::Right),
    ]);
    table.add_row(vec![
        Cell::new(hra_label),
        Cell::new(money(rec.hra, currency)).set_alignment(CellAlignment::Right),
    ]);
    table.add_row(vec![
        Cell::new("Gross Salary".bold()),
        Cell::new(money(rec.gross, currency).bold()).set_alignment(CellAlignment::Right),
    ]);
    println!("{table}");
}

fn warn_repeat(result: &ProcessResult, period: &Period) {
    if result.previous_runs > 0 {
        println!(
            "{}",
            format!(
                "Note: {} already had payroll recorded for {period} ({} earlier entr{}).",
                result.record.employee_id,
                result.previous_runs,
                if result.previous_runs == 1 { "y" } else { "ies" }
            )
            .yellow()
        );
    }
}

pub fn run(files: &DataFiles, id: &str, month: Option<&str>, year: Option<&str>) -> Result<()> {
    let period = resolve_period(month, year)?;
    let result = payroll::process(files, id, &period)?;
    let currency = load_settings().currency;
    print_breakdown(&result, &period, &currency);
    warn_repeat(&result, &period);
    println!("{}", "Payroll processed successfully.".green());
    Ok(())
}

pub fn run_all(files: &DataFiles, month: Option<&str>, year: Option<&str>) -> Result<()> {
    let period = resolve_period(month, year)?;
    let results = payroll::process_all(files, &period)?;
    if results.is_empty() {
        println!("No employees found.");
        return Ok(());
    }

    let currency = load_settings().currency;
    let mut table = Table::new();
    table.set_header(vec!["Emp ID", "Name", "Basic Salary", "HRA", "Gross Salary"]);
    let mut total_gross = 0.0;
    for result in &results {
        let rec = &result.record;
        total_gross += rec.gross;
        table.add_row(vec![
            Cell::new(&rec.employee_id),
            Cell::new(&rec.name),
            Cell::new(money(rec.basic, &currency)).set_alignment(CellAlignment::Right),
            Cell::new(money(rec.hra, &currency)).set_alignment(CellAlignment::Right),
            Cell::new(money(rec.gross, &currency)).set_alignment(CellAlignment::Right),
        ]);
    }
    println!("Payroll {period}\n{table}");
    println!("Total Gross Salary: {}", money(total_gross, &currency).bold());
    for result in &results {
        warn_repeat(result, &period);
    }
    println!(
        "{}",
        format!("Payroll processed for {} employees.", results.len()).green()
    );
    Ok(())
}
