//! Contract events. Topic symbols are what indexers filter on.

use soroban_sdk::{symbol_short, Address, Env, String, Symbol};

use crate::storage_types::RegistryRight;

pub const RIGHT_CHANGED: Symbol = symbol_short!("right_chg");
pub const COMPANY_REGISTERED: Symbol = symbol_short!("co_reg");
pub const COMPANY_REMOVED: Symbol = symbol_short!("co_rm");
pub const EMPLOYEE_ADDED: Symbol = symbol_short!("emp_add");
pub const EMPLOYEE_REMOVED: Symbol = symbol_short!("emp_rm");
pub const EMPLOYEE_UPDATED: Symbol = symbol_short!("emp_upd");
pub const SALARY_VERIFIED: Symbol = symbol_short!("sal_ver");

pub(crate) fn right_changed(e: &Env, identity: &Address, right: &RegistryRight) {
    e.events().publish(
        (RIGHT_CHANGED, identity.clone()),
        (
            right.name.clone(),
            right.sector.clone(),
            right.granted,
            right.registered,
        ),
    );
}

pub(crate) fn company_registered(
    e: &Env,
    identity: &Address,
    company_id: u32,
    name: &String,
    sector: &String,
) {
    e.events().publish(
        (COMPANY_REGISTERED, identity.clone()),
        (company_id, name.clone(), sector.clone()),
    );
}

pub(crate) fn company_removed(e: &Env, identity: &Address, company_id: u32) {
    e.events()
        .publish((COMPANY_REMOVED, identity.clone()), company_id);
}

pub(crate) fn employee_added(
    e: &Env,
    company_id: u32,
    employee: &Address,
    title: &String,
    salary: u64,
) {
    e.events().publish(
        (EMPLOYEE_ADDED, company_id, employee.clone()),
        (title.clone(), salary),
    );
}

pub(crate) fn employee_removed(
    e: &Env,
    company_id: u32,
    employee: &Address,
    title: &String,
    salary: u64,
) {
    e.events().publish(
        (EMPLOYEE_REMOVED, company_id, employee.clone()),
        (title.clone(), salary),
    );
}

pub(crate) fn employee_updated(
    e: &Env,
    company_id: u32,
    employee: &Address,
    old_title: &String,
    new_title: &String,
    old_salary: u64,
    new_salary: u64,
) {
    e.events().publish(
        (EMPLOYEE_UPDATED, company_id, employee.clone()),
        (old_title.clone(), new_title.clone(), old_salary, new_salary),
    );
}

pub(crate) fn salary_verified(e: &Env, company_id: u32, employee: &Address) {
    e.events()
        .publish((SALARY_VERIFIED, company_id, employee.clone()), ());
}
