use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use csv::{QuoteStyle, ReaderBuilder, StringRecord, Trim, WriterBuilder};

use crate::error::Result;
use crate::fmt::amount;
use crate::models::{Employee, PayrollRecord};

const EMPLOYEE_FIELDS: usize = 3;
const PAYROLL_FIELDS: usize = 7;

// ---------------------------------------------------------------------------
// Readers
// ---------------------------------------------------------------------------

/// Read every non-blank line of a comma-delimited file with no quoting.
/// Lines that are not valid UTF-8 are skipped. Returns an empty list when
/// the file does not exist.
fn read_records(path: &Path) -> Result<Vec<StringRecord>> {
    if !path.exists() {
        log::debug!("{} does not exist yet", path.display());
        return Ok(Vec::new());
    }
    let mut rdr = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .trim(Trim::All)
        .from_path(path)?;
    let mut out = Vec::new();
    for record in rdr.byte_records() {
        let record = record?;
        let line = record.position().map(|p| p.line()).unwrap_or(0);
        match StringRecord::from_byte_record(record) {
            Ok(record) => out.push(record),
            Err(e) => log::warn!(
                "{}:{line}: skipping line that is not valid UTF-8: {}",
                path.display(),
                e.utf8_error()
            ),
        }
    }
    Ok(out)
}

fn line_of(record: &StringRecord) -> u64 {
    record.position().map(|p| p.line()).unwrap_or(0)
}

fn parse_number(record: &StringRecord, idx: usize, path: &Path) -> Option<f64> {
    let raw = record.get(idx)?;
    match raw.parse::<f64>() {
        Ok(v) if v.is_finite() => Some(v),
        _ => {
            log::warn!(
                "{}:{}: skipping line with non-numeric amount {raw:?}",
                path.display(),
                line_of(record)
            );
            None
        }
    }
}

pub fn load_employees(path: &Path) -> Result<Vec<Employee>> {
    let mut employees = Vec::new();
    for record in read_records(path)? {
        if record.len() != EMPLOYEE_FIELDS {
            log::warn!(
                "{}:{}: skipping line with {} fields, expected {EMPLOYEE_FIELDS}",
                path.display(),
                line_of(&record),
                record.len()
            );
            continue;
        }
        let Some(basic_salary) = parse_number(&record, 2, path) else {
            continue;
        };
        if basic_salary <= 0.0 {
            log::warn!(
                "{}:{}: skipping employee with non-positive salary {basic_salary}",
                path.display(),
                line_of(&record)
            );
            continue;
        }
        employees.push(Employee {
            id: record[0].to_string(),
            name: record[1].to_string(),
            basic_salary,
        });
    }
    log::debug!("loaded {} employees from {}", employees.len(), path.display());
    Ok(employees)
}

pub fn load_payroll(path: &Path) -> Result<Vec<PayrollRecord>> {
    let mut records = Vec::new();
    for record in read_records(path)? {
        if record.len() != PAYROLL_FIELDS {
            log::warn!(
                "{}:{}: skipping line with {} fields, expected {PAYROLL_FIELDS}",
                path.display(),
                line_of(&record),
                record.len()
            );
            continue;
        }
        let (Some(basic), Some(hra), Some(gross)) = (
            parse_number(&record, 4, path),
            parse_number(&record, 5, path),
            parse_number(&record, 6, path),
        ) else {
            continue;
        };
        records.push(PayrollRecord {
            employee_id: record[0].to_string(),
            name: record[1].to_string(),
            month: record[2].to_string(),
            year: record[3].to_string(),
            basic,
            hra,
            gross,
        });
    }
    log::debug!("loaded {} payroll records from {}", records.len(), path.display());
    Ok(records)
}

// ---------------------------------------------------------------------------
// Writers
// ---------------------------------------------------------------------------

fn write_rows<W: Write>(out: W, rows: &[Vec<String>]) -> Result<()> {
    let mut wtr = WriterBuilder::new()
        .has_headers(false)
        .quote_style(QuoteStyle::Never)
        .from_writer(out);
    for row in rows {
        wtr.write_record(row)?;
    }
    wtr.flush()?;
    Ok(())
}

fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(dir) = path.parent() {
        if !dir.as_os_str().is_empty() {
            std::fs::create_dir_all(dir)?;
        }
    }
    Ok(())
}

fn employee_row(emp: &Employee) -> Vec<String> {
    vec![emp.id.clone(), emp.name.clone(), amount(emp.basic_salary)]
}

fn payroll_row(rec: &PayrollRecord) -> Vec<String> {
    vec![
        rec.employee_id.clone(),
        rec.name.clone(),
        rec.month.clone(),
        rec.year.clone(),
        amount(rec.basic),
        amount(rec.hra),
        amount(rec.gross),
    ]
}

/// `employees.txt` -> `employees.txt.tmp` in the same directory, so the
/// final rename never crosses filesystems.
fn sibling_tmp(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".tmp");
    path.with_file_name(name)
}

fn write_then_rename(tmp: &Path, path: &Path, rows: &[Vec<String>]) -> Result<()> {
    let file = std::fs::File::create(tmp)?;
    write_rows(&file, rows)?;
    file.sync_all()?;
    std::fs::rename(tmp, path)?;
    Ok(())
}

/// Rewrite the employee master with exactly `employees`.
pub fn save_employees(path: &Path, employees: &[Employee]) -> Result<()> {
    ensure_parent(path)?;
    let tmp = sibling_tmp(path);
    let rows: Vec<_> = employees.iter().map(employee_row).collect();
    let written = write_then_rename(&tmp, path, &rows);
    if written.is_err() {
        let _ = std::fs::remove_file(&tmp);
    }
    written?;
    log::debug!("saved {} employees to {}", employees.len(), path.display());
    Ok(())
}

/// Append one line to the payroll ledger.
pub fn append_payroll(path: &Path, record: &PayrollRecord) -> Result<()> {
    ensure_parent(path)?;
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    write_rows(file, &[payroll_row(record)])?;
    log::debug!(
        "appended payroll for {} {}/{} to {}",
        record.employee_id,
        record.month,
        record.year,
        path.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn emp(id: &str, name: &str, salary: f64) -> Employee {
        Employee {
            id: id.to_string(),
            name: name.to_string(),
            basic_salary: salary,
        }
    }

    fn rec(id: &str, month: &str, year: &str, basic: f64) -> PayrollRecord {
        PayrollRecord {
            employee_id: id.to_string(),
            name: "Someone".to_string(),
            month: month.to_string(),
            year: year.to_string(),
            basic,
            hra: basic * 0.2,
            gross: basic * 1.2,
        }
    }

    #[test]
    fn test_missing_files_load_empty() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_employees(&dir.path().join("employees.txt")).unwrap().is_empty());
        assert!(load_payroll(&dir.path().join("payroll.txt")).unwrap().is_empty());
    }

    #[test]
    fn test_save_employees_writes_plain_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("employees.txt");
        save_employees(&path, &[emp("E1", "Asha Rao", 50000.0), emp("E2", "Ben", 1234.5)]).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, "E1,Asha Rao,50000.0\nE2,Ben,1234.5\n");
    }

    #[test]
    fn test_save_employees_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("employees.txt");
        save_employees(&path, &[emp("E1", "Asha", 100.0), emp("E2", "Ben", 200.0)]).unwrap();
        save_employees(&path, &[emp("E2", "Ben", 200.0)]).unwrap();
        let loaded = load_employees(&path).unwrap();
        assert_eq!(loaded, vec![emp("E2", "Ben", 200.0)]);
    }

    #[test]
    fn test_load_employees_skips_blank_and_malformed_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("employees.txt");
        std::fs::write(
            &path,
            "E1,Asha,50000.0\n\n  E2 , Ben , 3000 \nbroken,line\nE3,Cara,lots\nE4,Dev,10.5,extra\n\
             E5,Eve,NaN\nE6,Fay,-5\nE7,Gus,0\nE8,Hal,inf\n",
        )
        .unwrap();
        let loaded = load_employees(&path).unwrap();
        assert_eq!(loaded, vec![emp("E1", "Asha", 50000.0), emp("E2", "Ben", 3000.0)]);
    }

    #[test]
    fn test_append_payroll_keeps_file_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("payroll.txt");
        append_payroll(&path, &rec("E1", "1", "2025", 1000.0)).unwrap();
        append_payroll(&path, &rec("E2", "1", "2025", 2000.0)).unwrap();
        append_payroll(&path, &rec("E1", "2", "2025", 1000.0)).unwrap();
        let loaded = load_payroll(&path).unwrap();
        assert_eq!(loaded.len(), 3);
        assert_eq!(loaded[0].employee_id, "E1");
        assert_eq!(loaded[1].employee_id, "E2");
        assert_eq!(loaded[2].month, "2");
        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content.lines().next().unwrap(), "E1,Someone,1,2025,1000.0,200.0,1200.0");
    }

    #[test]
    fn test_load_payroll_reads_legacy_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("payroll.txt");
        std::fs::write(
            &path,
            "E1,Asha,03,2024,50000.0,10000.0,60000.0\r\nE1,Asha,3,2024\nE2,Ben,4,2024,x,1,2\n",
        )
        .unwrap();
        let loaded = load_payroll(&path).unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].month, "03");
        assert_eq!(loaded[0].gross, 60000.0);
    }

    #[test]
    fn test_invalid_utf8_line_is_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("payroll.txt");
        let mut bytes = b"E1,Asha,1,2025,100.0,20.0,120.0\n".to_vec();
        bytes.extend_from_slice(b"E2,Jos\xe9,1,2025,200.0,40.0,240.0\n");
        bytes.extend_from_slice(b"E3,Cara,1,2025,300.0,60.0,360.0\n");
        std::fs::write(&path, &bytes).unwrap();
        let loaded = load_payroll(&path).unwrap();
        let ids: Vec<_> = loaded.iter().map(|r| r.employee_id.as_str()).collect();
        assert_eq!(ids, ["E1", "E3"]);
    }

    #[test]
    fn test_non_finite_ledger_amounts_are_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("payroll.txt");
        std::fs::write(&path, "E1,Asha,1,2025,NaN,NaN,NaN\nE2,Ben,1,2025,10.0,2.0,12.0\n").unwrap();
        let loaded = load_payroll(&path).unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].employee_id, "E2");
    }

    #[test]
    fn test_save_employees_leaves_no_temp_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("employees.txt");
        std::fs::write(&path, "OLD,Old,1.0\n").unwrap();
        save_employees(&path, &[emp("E1", "Asha", 100.0)]).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "E1,Asha,100.0\n");
        assert!(!dir.path().join("employees.txt.tmp").exists());
    }

    #[test]
    fn test_failed_save_keeps_existing_master() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("employees.txt");
        std::fs::write(&path, "E1,Asha,100.0\n").unwrap();
        // A directory where the temp file should go makes the write fail.
        std::fs::create_dir(dir.path().join("employees.txt.tmp")).unwrap();
        assert!(save_employees(&path, &[]).is_err());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "E1,Asha,100.0\n");
    }

    #[test]
    fn test_writes_create_missing_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("payroll.txt");
        append_payroll(&path, &rec("E1", "1", "2025", 10.0)).unwrap();
        assert!(path.exists());
    }
}
