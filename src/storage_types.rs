use soroban_sdk::{contracttype, Address, Env, String};

/// Instance storage is bumped on every mutating call.
pub(crate) const INSTANCE_BUMP_THRESHOLD: u32 = 17_280; // ~1 day
pub(crate) const INSTANCE_BUMP_AMOUNT: u32 = 518_400; // ~30 days

pub(crate) const PERSISTENT_BUMP_THRESHOLD: u32 = 518_400; // ~30 days
pub(crate) const PERSISTENT_BUMP_AMOUNT: u32 = 2_592_000; // ~150 days

/// Registration right held by a company identity.
///
/// An identity that was never granted reads as `{false, false, "", ""}`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RegistryRight {
    pub granted: bool,
    pub registered: bool,
    pub name: String,
    pub sector: String,
}

impl RegistryRight {
    pub fn vacant(e: &Env) -> Self {
        RegistryRight {
            granted: false,
            registered: false,
            name: String::from_str(e, ""),
            sector: String::from_str(e, ""),
        }
    }
}

/// A company ledger. Lives in the arena under `DataKey::Company(id)`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CompanyRecord {
    pub admin: Address,
    pub name: String,
    pub sector: String,
    pub employee_count: u32,
    pub salary_sum: u128,
}

impl CompanyRecord {
    pub fn average_salary(&self) -> u64 {
        average(self.salary_sum, u128::from(self.employee_count))
    }
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Employee {
    pub title: String,
    pub salary: u64,
    pub is_employee: bool,
    pub salary_verified: bool,
}

impl Employee {
    /// The record every non-member reads as.
    pub fn vacant(e: &Env) -> Self {
        Employee {
            title: String::from_str(e, ""),
            salary: 0,
            is_employee: false,
            salary_verified: false,
        }
    }
}

/// Read-through view returned by `get_details`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CompanyDetails {
    pub name: String,
    pub sector: String,
    pub employee_count: u32,
    pub average_salary: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SalaryInfo {
    pub title: String,
    pub salary: u64,
    pub salary_verified: bool,
}

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Owner,
    CompanyCount,
    Right(Address),
    // identity -> company id, present only while attached
    CompanyOf(Address),
    Company(u32),
    Employee(u32, Address),
    Sector(String),
}

/// Floor division that treats an empty population as zero.
///
/// `sum` is a total of `u64` salaries, so the mean never exceeds
/// `u64::MAX`; the saturating conversion only guards a corrupted sum.
pub(crate) fn average(sum: u128, count: u128) -> u64 {
    if count == 0 {
        return 0;
    }
    u64::try_from(sum / count).unwrap_or(u64::MAX)
}
