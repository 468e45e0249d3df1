use colored::Colorize;
use comfy_table::{Cell, CellAlignment, Table};

use crate::error::Result;
use crate::fmt::money;
use crate::payroll::Period;
use crate::reports;
use crate::settings::{load_settings, DataFiles};
use crate::store;

pub fn monthly(files: &DataFiles, month: &str, year: &str) -> Result<()> {
    let period = Period::parse(month, year)?;
    let ledger = store::load_payroll(&files.payroll)?;
    let report = reports::monthly_report(&ledger, &period);

    if report.records.is_empty() {
        println!("No payroll records found for {period}.");
        return Ok(());
    }

    let currency = load_settings().currency;
    let amount_cell = |v: f64| Cell::new(money(v, &currency)).set_alignment(CellAlignment::Right);

    let mut table = Table::new();
    table.set_header(vec!["Emp ID", "Name", "Basic Salary", "HRA", "Gross Salary"]);
    for rec in &report.records {
        table.add_row(vec![
            Cell::new(&rec.employee_id),
            Cell::new(&rec.name),
            amount_cell(rec.basic),
            amount_cell(rec.hra),
            amount_cell(rec.gross),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL".bold()),
        Cell::new(""),
        amount_cell(report.total_basic),
        amount_cell(report.total_hra),
        amount_cell(report.total_gross),
    ]);

    println!("Monthly Payroll Report {}\n{table}", report.period);
    println!(
        "Total Gross Salary: {}",
        money(report.total_gross, &currency).bold()
    );
    Ok(())
}
