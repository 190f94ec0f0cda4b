#![no_std]
use soroban_sdk::{contract, contracterror, contractimpl, Address, Env, String, Vec};

mod directory;
mod events;
mod ledger;
mod registry;
mod storage_types;

pub use storage_types::{CompanyDetails, CompanyRecord, Employee, RegistryRight, SalaryInfo};
use storage_types::{INSTANCE_BUMP_AMOUNT, INSTANCE_BUMP_THRESHOLD};

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    Unauthorized = 3,
    InvalidInput = 4,
    AlreadyGranted = 5,
    AlreadyRegistered = 6,
    NoAccessGranted = 7,
    NotRegistered = 8,
    AlreadyEmployee = 9,
    NotEmployee = 10,
    AlreadyVerified = 11,
}

fn bump_instance(e: &Env) {
    e.storage()
        .instance()
        .extend_ttl(INSTANCE_BUMP_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

#[contract]
pub struct CompanyFactoryContract;

#[contractimpl]
impl CompanyFactoryContract {
    /// Initialize the factory with its owner. Only can be called once.
    pub fn initialize(e: Env, owner: Address) -> Result<(), Error> {
        if registry::has_owner(&e) {
            return Err(Error::AlreadyInitialized);
        }

        registry::write_owner(&e, &owner);
        bump_instance(&e);
        Ok(())
    }

    pub fn owner(e: Env) -> Result<Address, Error> {
        registry::read_owner(&e)
    }

    // ---------------------------------------------------------------
    // Registration rights
    // ---------------------------------------------------------------

    /// Grant `identity` the right to register a company. Owner only.
    ///
    /// # Arguments
    /// * `caller` - Must be the factory owner
    /// * `identity` - The future company admin
    /// * `name` - Company name, non-empty
    /// * `sector` - Sector the company will be indexed under, non-empty
    pub fn grant_right(
        e: Env,
        caller: Address,
        identity: Address,
        name: String,
        sector: String,
    ) -> Result<(), Error> {
        registry::grant_right(&e, &caller, &identity, name, sector)?;
        bump_instance(&e);
        Ok(())
    }

    /// Withdraw a grant that has not been used to register yet. Owner only.
    pub fn revoke_right(e: Env, caller: Address, identity: Address) -> Result<(), Error> {
        registry::revoke_right(&e, &caller, &identity)?;
        bump_instance(&e);
        Ok(())
    }

    /// Register the company for a granted `identity`, callable by the
    /// identity itself or the owner. Returns the new company id.
    pub fn register(e: Env, caller: Address, identity: Address) -> Result<u32, Error> {
        let company_id = registry::register(&e, &caller, &identity)?;
        bump_instance(&e);
        Ok(company_id)
    }

    /// Raw right record; never-granted identities read as all false/empty.
    pub fn get_right(e: Env, identity: Address) -> RegistryRight {
        registry::read_right(&e, &identity)
    }

    // ---------------------------------------------------------------
    // Company directory
    // ---------------------------------------------------------------

    pub fn company_of(e: Env, identity: Address) -> Option<u32> {
        directory::company_of(&e, &identity)
    }

    /// Name, sector, head count and average salary of a registered company.
    pub fn get_details(e: Env, identity: Address) -> Result<CompanyDetails, Error> {
        directory::get_details(&e, &identity)
    }

    /// Detach the company of `identity` from the directory. Callable by
    /// the company admin or the owner.
    pub fn remove_company(e: Env, caller: Address, identity: Address) -> Result<(), Error> {
        directory::remove_company(&e, &caller, &identity)?;
        bump_instance(&e);
        Ok(())
    }

    /// Identities indexed under `sector`, in registration order.
    pub fn list_sector(e: Env, sector: String) -> Vec<Address> {
        directory::list_sector(&e, &sector)
    }

    pub fn average_salary_in_sector(e: Env, sector: String) -> u64 {
        directory::average_salary_in_sector(&e, &sector)
    }

    // ---------------------------------------------------------------
    // Company ledger
    // ---------------------------------------------------------------

    pub fn get_company(e: Env, company_id: u32) -> Result<CompanyRecord, Error> {
        ledger::read_company(&e, company_id)
    }

    pub fn admin(e: Env, company_id: u32) -> Result<Address, Error> {
        Ok(ledger::read_company(&e, company_id)?.admin)
    }

    pub fn company_name(e: Env, company_id: u32) -> Result<String, Error> {
        Ok(ledger::read_company(&e, company_id)?.name)
    }

    pub fn company_sector(e: Env, company_id: u32) -> Result<String, Error> {
        Ok(ledger::read_company(&e, company_id)?.sector)
    }

    pub fn total_employees(e: Env, company_id: u32) -> Result<u32, Error> {
        Ok(ledger::read_company(&e, company_id)?.employee_count)
    }

    /// Add `employee` to a company. Admin only.
    ///
    /// # Arguments
    /// * `caller` - Must be the company admin
    /// * `company_id` - Id returned by `register`
    /// * `employee` - The employee's address
    /// * `title` - Job title, non-empty
    /// * `salary` - Salary; zero is accepted
    pub fn add_employee(
        e: Env,
        caller: Address,
        company_id: u32,
        employee: Address,
        title: String,
        salary: u64,
    ) -> Result<(), Error> {
        ledger::add_employee(&e, &caller, company_id, &employee, title, salary)
    }

    pub fn remove_employee(
        e: Env,
        caller: Address,
        company_id: u32,
        employee: Address,
    ) -> Result<(), Error> {
        ledger::remove_employee(&e, &caller, company_id, &employee)
    }

    /// Overwrite title and salary. The verification flag is kept.
    pub fn update_employee(
        e: Env,
        caller: Address,
        company_id: u32,
        employee: Address,
        new_title: String,
        new_salary: u64,
    ) -> Result<(), Error> {
        ledger::update_employee(&e, &caller, company_id, &employee, new_title, new_salary)
    }

    /// Mark the caller's own salary as verified. Requires `employee` auth.
    pub fn verify_salary(e: Env, company_id: u32, employee: Address) -> Result<(), Error> {
        ledger::verify_salary(&e, company_id, &employee)
    }

    pub fn get_salary(e: Env, company_id: u32, employee: Address) -> Result<SalaryInfo, Error> {
        ledger::get_salary(&e, company_id, &employee)
    }

    pub fn get_employee(e: Env, company_id: u32, employee: Address) -> Employee {
        ledger::get_employee(&e, company_id, &employee)
    }

    pub fn is_employee(e: Env, company_id: u32, employee: Address) -> bool {
        ledger::is_employee(&e, company_id, &employee)
    }

    /// `salary_sum / employee_count`, or 0 for an empty or unknown company.
    pub fn get_average_salary(e: Env, company_id: u32) -> u64 {
        ledger::average_salary(&e, company_id)
    }
}
