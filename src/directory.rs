//! Directory of attached companies.
//!
//! Two structures are kept in step: `CompanyOf(identity) -> company id`
//! and `Sector(name) -> Vec<identity>` in registration order. Both are
//! only ever written by `attach` and `remove_company`.

use soroban_sdk::{log, Address, Env, String, Vec};

use crate::storage_types::{
    average, CompanyDetails, DataKey, PERSISTENT_BUMP_AMOUNT, PERSISTENT_BUMP_THRESHOLD,
};
use crate::{events, ledger, registry, Error};

pub(crate) fn company_of(e: &Env, identity: &Address) -> Option<u32> {
    e.storage()
        .persistent()
        .get(&DataKey::CompanyOf(identity.clone()))
}

pub(crate) fn list_sector(e: &Env, sector: &String) -> Vec<Address> {
    e.storage()
        .persistent()
        .get(&DataKey::Sector(sector.clone()))
        .unwrap_or_else(|| Vec::new(e))
}

fn write_sector(e: &Env, sector: &String, members: &Vec<Address>) {
    let key = DataKey::Sector(sector.clone());
    if members.is_empty() {
        e.storage().persistent().remove(&key);
        return;
    }
    e.storage().persistent().set(&key, members);
    e.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_BUMP_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

pub(crate) fn attach(e: &Env, identity: &Address, company_id: u32, sector: &String) {
    let key = DataKey::CompanyOf(identity.clone());
    e.storage().persistent().set(&key, &company_id);
    e.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_BUMP_THRESHOLD, PERSISTENT_BUMP_AMOUNT);

    let mut members = list_sector(e, sector);
    members.push_back(identity.clone());
    write_sector(e, sector, &members);
}

/// Detaches the company registered for `identity`. The ledger itself and
/// the registry right are left untouched.
pub(crate) fn remove_company(e: &Env, caller: &Address, identity: &Address) -> Result<(), Error> {
    caller.require_auth();
    let owner = registry::read_owner(e)?;
    if caller != identity && *caller != owner {
        return Err(Error::Unauthorized);
    }

    let company_id = company_of(e, identity).ok_or(Error::NotRegistered)?;
    let company = ledger::read_company(e, company_id)?;

    let mut members = list_sector(e, &company.sector);
    if let Some(pos) = members.iter().position(|a| a == *identity) {
        // Vec::remove shifts the tail, keeping registration order
        members.remove(pos as u32);
        write_sector(e, &company.sector, &members);
    }
    e.storage()
        .persistent()
        .remove(&DataKey::CompanyOf(identity.clone()));

    log!(e, "company removed", identity.clone(), company_id);
    events::company_removed(e, identity, company_id);
    Ok(())
}

pub(crate) fn get_details(e: &Env, identity: &Address) -> Result<CompanyDetails, Error> {
    let company_id = company_of(e, identity).ok_or(Error::NotRegistered)?;
    let company = ledger::read_company(e, company_id)?;
    Ok(CompanyDetails {
        average_salary: company.average_salary(),
        name: company.name,
        sector: company.sector,
        employee_count: company.employee_count,
    })
}

/// Employee-weighted average over every company indexed under `sector`.
pub(crate) fn average_salary_in_sector(e: &Env, sector: &String) -> u64 {
    let mut total_sum: u128 = 0;
    let mut total_count: u128 = 0;

    for identity in list_sector(e, sector).iter() {
        let Some(company_id) = company_of(e, &identity) else {
            continue;
        };
        if let Ok(company) = ledger::read_company(e, company_id) {
            total_sum += company.salary_sum;
            total_count += u128::from(company.employee_count);
        }
    }

    average(total_sum, total_count)
}
