use comfy_table::{Cell, CellAlignment, Table};

use crate::employees::required_field;
use crate::error::Result;
use crate::fmt::money;
use crate::reports;
use crate::settings::{load_settings, DataFiles};
use crate::store;

pub fn run(files: &DataFiles, id: &str) -> Result<()> {
    let id = required_field("Employee ID", id)?;
    let ledger = store::load_payroll(&files.payroll)?;
    let history = reports::employee_history(&ledger, &id);

    if history.is_empty() {
        println!("No payroll records found for employee {id}.");
        return Ok(());
    }

    let currency = load_settings().currency;
    let mut table = Table::new();
    table.set_header(vec!["Month", "Year", "Basic Salary", "HRA", "Gross Salary"]);
    for rec in &history {
        table.add_row(vec![
            Cell::new(&rec.month).set_alignment(CellAlignment::Center),
            Cell::new(&rec.year).set_alignment(CellAlignment::Center),
            Cell::new(money(rec.basic, &currency)).set_alignment(CellAlignment::Right),
            Cell::new(money(rec.hra, &currency)).set_alignment(CellAlignment::Right),
            Cell::new(money(rec.gross, &currency)).set_alignment(CellAlignment::Right),
        ]);
    }
    println!("Payroll History: {} ({id})\n{table}", history[0].name);
    Ok(())
}
