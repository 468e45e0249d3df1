use colored::Colorize;
use comfy_table::{Cell, CellAlignment, Table};

use crate::employees;
use crate::error::Result;
use crate::fmt::money;
use crate::models::Employee;
use crate::settings::{load_settings, DataFiles};

pub fn add(files: &DataFiles, id: &str, name: &str, salary: &str) -> Result<()> {
    let employee = Employee::new(id, name, salary)?;
    let name = employee.name.clone();
    employees::add(files, employee)?;
    println!("Employee '{name}' added successfully.");
    Ok(())
}

pub fn list(files: &DataFiles) -> Result<()> {
    let staff = employees::list(files)?;
    if staff.is_empty() {
        println!("No employees found.");
        return Ok(());
    }

    let currency = load_settings().currency;
    let mut table = Table::new();
    table.set_header(vec!["Employee ID", "Name", "Basic Salary"]);
    for emp in &staff {
        table.add_row(vec![
            Cell::new(&emp.id),
            Cell::new(&emp.name),
            Cell::new(money(emp.basic_salary, &currency)).set_alignment(CellAlignment::Right),
        ]);
    }
    println!("All Employees\n{table}");
    Ok(())
}

pub fn show(files: &DataFiles, id: &str) -> Result<()> {
    let emp = employees::lookup(files, id)?;
    let currency = load_settings().currency;
    println!("{}", "Employee found".green().bold());
    println!("  ID:           {}", emp.id);
    println!("  Name:         {}", emp.name);
    println!("  Basic Salary: {}", money(emp.basic_salary, &currency));
    Ok(())
}

pub fn remove(files: &DataFiles, id: &str) -> Result<()> {
    let removed = employees::remove(files, id)?;
    println!("Removed employee {} ({}). Payroll history is kept.", removed.id, removed.name);
    Ok(())
}
