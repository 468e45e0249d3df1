use crate::error::{PayrollError, Result};
use crate::models::Employee;
use crate::settings::DataFiles;
use crate::store;

/// Trimmed, non-empty text that can be stored in an unquoted delimited line.
pub(crate) fn required_field(field: &'static str, raw: &str) -> Result<String> {
    let value = raw.trim();
    if value.is_empty() {
        return Err(PayrollError::MissingField(field));
    }
    if value.contains([',', '\n', '\r']) {
        return Err(PayrollError::InvalidField {
            field,
            value: value.to_string(),
        });
    }
    Ok(value.to_string())
}

pub fn parse_salary(raw: &str) -> Result<f64> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(PayrollError::MissingField("Basic salary"));
    }
    let salary: f64 = raw
        .parse()
        .map_err(|_| PayrollError::InvalidSalary(raw.to_string()))?;
    if !salary.is_finite() {
        return Err(PayrollError::InvalidSalary(raw.to_string()));
    }
    if salary <= 0.0 {
        return Err(PayrollError::NonPositiveSalary);
    }
    Ok(salary)
}

impl Employee {
    /// Validate raw form input into an employee.
    pub fn new(id: &str, name: &str, salary: &str) -> Result<Self> {
        Ok(Self {
            id: required_field("Employee ID", id)?,
            name: required_field("Name", name)?,
            basic_salary: parse_salary(salary)?,
        })
    }
}

pub fn find<'a>(employees: &'a [Employee], id: &str) -> Option<&'a Employee> {
    let id = id.trim();
    employees.iter().find(|e| e.id == id)
}

pub fn list(files: &DataFiles) -> Result<Vec<Employee>> {
    store::load_employees(&files.employees)
}

pub fn lookup(files: &DataFiles, id: &str) -> Result<Employee> {
    let id = required_field("Employee ID", id)?;
    let employees = store::load_employees(&files.employees)?;
    find(&employees, &id)
        .cloned()
        .ok_or(PayrollError::UnknownEmployee(id))
}

/// Add a new employee, rejecting an id that is already on file.
pub fn add(files: &DataFiles, employee: Employee) -> Result<()> {
    let mut employees = store::load_employees(&files.employees)?;
    if find(&employees, &employee.id).is_some() {
        return Err(PayrollError::DuplicateEmployee(employee.id));
    }
    log::info!("adding employee {} ({})", employee.id, employee.name);
    employees.push(employee);
    store::save_employees(&files.employees, &employees)
}

/// Drop an employee from the master file. Ledger entries are kept.
pub fn remove(files: &DataFiles, id: &str) -> Result<Employee> {
    let id = required_field("Employee ID", id)?;
    let mut employees = store::load_employees(&files.employees)?;
    let pos = employees
        .iter()
        .position(|e| e.id == id)
        .ok_or_else(|| PayrollError::UnknownEmployee(id.clone()))?;
    let removed = employees.remove(pos);
    store::save_employees(&files.employees, &employees)?;
    log::info!("removed employee {}", removed.id);
    Ok(removed)
}
