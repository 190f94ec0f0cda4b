//! Per-company employee ledger.
//!
//! Ledgers are kept in an arena keyed by a sequential company id. Each
//! record carries a running `(employee_count, salary_sum)` pair that is
//! adjusted on every add, update and remove so averages are O(1).

use soroban_sdk::{log, Address, Env, String};

use crate::storage_types::{
    CompanyRecord, DataKey, Employee, SalaryInfo, PERSISTENT_BUMP_AMOUNT,
    PERSISTENT_BUMP_THRESHOLD,
};
use crate::{events, registry, Error};

pub(crate) fn read_company(e: &Env, company_id: u32) -> Result<CompanyRecord, Error> {
    e.storage()
        .persistent()
        .get(&DataKey::Company(company_id))
        .ok_or(Error::NotRegistered)
}

fn write_company(e: &Env, company_id: u32, record: &CompanyRecord) {
    let key = DataKey::Company(company_id);
    e.storage().persistent().set(&key, record);
    e.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_BUMP_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

fn read_employee(e: &Env, company_id: u32, employee: &Address) -> Option<Employee> {
    e.storage()
        .persistent()
        .get(&DataKey::Employee(company_id, employee.clone()))
}

fn write_employee(e: &Env, company_id: u32, employee: &Address, record: &Employee) {
    let key = DataKey::Employee(company_id, employee.clone());
    e.storage().persistent().set(&key, record);
    e.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_BUMP_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

/// Loads the company and checks `caller` is its admin.
fn require_admin(e: &Env, caller: &Address, company_id: u32) -> Result<CompanyRecord, Error> {
    let record = read_company(e, company_id)?;
    caller.require_auth();
    if *caller != record.admin {
        return Err(Error::Unauthorized);
    }
    Ok(record)
}

/// Allocates the next company id and stores an empty ledger under it.
pub(crate) fn create(e: &Env, admin: &Address, name: &String, sector: &String) -> u32 {
    let company_id: u32 = e
        .storage()
        .instance()
        .get(&DataKey::CompanyCount)
        .unwrap_or(0);

    let record = CompanyRecord {
        admin: admin.clone(),
        name: name.clone(),
        sector: sector.clone(),
        employee_count: 0,
        salary_sum: 0,
    };
    write_company(e, company_id, &record);
    e.storage()
        .instance()
        .set(&DataKey::CompanyCount, &(company_id + 1));

    company_id
}

pub(crate) fn add_employee(
    e: &Env,
    caller: &Address,
    company_id: u32,
    employee: &Address,
    title: String,
    salary: u64,
) -> Result<(), Error> {
    let mut company = require_admin(e, caller, company_id)?;

    // a zero salary is fine on its own
    if registry::is_null(e, employee) || title.is_empty() {
        return Err(Error::InvalidInput);
    }
    if read_employee(e, company_id, employee).is_some() {
        return Err(Error::AlreadyEmployee);
    }

    let record = Employee {
        title,
        salary,
        is_employee: true,
        salary_verified: false,
    };
    write_employee(e, company_id, employee, &record);

    company.employee_count += 1;
    company.salary_sum += u128::from(salary);
    write_company(e, company_id, &company);

    log!(e, "employee added", company_id, employee.clone());
    events::employee_added(e, company_id, employee, &record.title, salary);
    Ok(())
}

pub(crate) fn remove_employee(
    e: &Env,
    caller: &Address,
    company_id: u32,
    employee: &Address,
) -> Result<(), Error> {
    let mut company = require_admin(e, caller, company_id)?;
    let old = read_employee(e, company_id, employee).ok_or(Error::NotEmployee)?;

    company.employee_count -= 1;
    company.salary_sum -= u128::from(old.salary);
    write_company(e, company_id, &company);

    // an absent entry reads back as `Employee::vacant`
    e.storage()
        .persistent()
        .remove(&DataKey::Employee(company_id, employee.clone()));

    log!(e, "employee removed", company_id, employee.clone());
    events::employee_removed(e, company_id, employee, &old.title, old.salary);
    Ok(())
}

pub(crate) fn update_employee(
    e: &Env,
    caller: &Address,
    company_id: u32,
    employee: &Address,
    new_title: String,
    new_salary: u64,
) -> Result<(), Error> {
    let mut company = require_admin(e, caller, company_id)?;
    let mut record = read_employee(e, company_id, employee).ok_or(Error::NotEmployee)?;
    if new_title.is_empty() {
        return Err(Error::InvalidInput);
    }

    let old_title = record.title.clone();
    let old_salary = record.salary;

    company.salary_sum = company.salary_sum - u128::from(old_salary) + u128::from(new_salary);
    write_company(e, company_id, &company);

    // update never touches salary_verified
    record.title = new_title;
    record.salary = new_salary;
    write_employee(e, company_id, employee, &record);

    log!(e, "employee updated", company_id, employee.clone());
    events::employee_updated(
        e,
        company_id,
        employee,
        &old_title,
        &record.title,
        old_salary,
        new_salary,
    );
    Ok(())
}

/// Self-service: only the employee can flag their own salary as verified.
pub(crate) fn verify_salary(e: &Env, company_id: u32, employee: &Address) -> Result<(), Error> {
    read_company(e, company_id)?;
    employee.require_auth();

    let mut record = read_employee(e, company_id, employee).ok_or(Error::NotEmployee)?;
    if record.salary_verified {
        return Err(Error::AlreadyVerified);
    }

    record.salary_verified = true;
    write_employee(e, company_id, employee, &record);

    log!(e, "salary verified", company_id, employee.clone());
    events::salary_verified(e, company_id, employee);
    Ok(())
}

pub(crate) fn get_salary(e: &Env, company_id: u32, employee: &Address) -> Result<SalaryInfo, Error> {
    read_company(e, company_id)?;
    let record = read_employee(e, company_id, employee).ok_or(Error::NotEmployee)?;
    Ok(SalaryInfo {
        title: record.title,
        salary: record.salary,
        salary_verified: record.salary_verified,
    })
}

pub(crate) fn get_employee(e: &Env, company_id: u32, employee: &Address) -> Employee {
    read_employee(e, company_id, employee).unwrap_or_else(|| Employee::vacant(e))
}

pub(crate) fn is_employee(e: &Env, company_id: u32, employee: &Address) -> bool {
    e.storage()
        .persistent()
        .has(&DataKey::Employee(company_id, employee.clone()))
}

pub(crate) fn average_salary(e: &Env, company_id: u32) -> u64 {
    read_company(e, company_id)
        .map(|record| record.average_salary())
        .unwrap_or(0)
}
