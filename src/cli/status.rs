use crate::error::Result;
use crate::settings::DataFiles;
use crate::store;

pub fn run(files: &DataFiles) -> Result<()> {
    println!("Data dir:   {}", files.dir.display());
    println!("Employees:  {}", files.employees.display());
    println!("Ledger:     {}", files.payroll.display());

    if !files.employees.exists() && !files.payroll.exists() {
        println!();
        println!("No data yet. Add an employee with `payroll employees add`.");
        return Ok(());
    }

    let staff = store::load_employees(&files.employees)?;
    let ledger = store::load_payroll(&files.payroll)?;
    let orphaned = ledger
        .iter()
        .filter(|r| !staff.iter().any(|e| e.id == r.employee_id))
        .count();

    println!();
    println!("Employees on file:  {}", staff.len());
    println!("Payroll entries:    {}", ledger.len());
    if orphaned > 0 {
        println!("Entries for removed employees: {orphaned}");
    }
    if let Some(last) = ledger.last() {
        println!("Last processed:     {} for {}/{}", last.employee_id, last.month, last.year);
    }
    Ok(())
}
