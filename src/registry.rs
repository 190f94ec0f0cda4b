//! Owner-gated registration rights.
//!
//! A right moves `vacant -> granted -> registered`. `revoke_right` only
//! undoes a grant that has not been used yet; once an identity is
//! registered the right is permanent and the company can only be detached
//! through `directory::remove_company`.

use soroban_sdk::{log, Address, Env, String};

use crate::storage_types::{
    DataKey, RegistryRight, PERSISTENT_BUMP_AMOUNT, PERSISTENT_BUMP_THRESHOLD,
};
use crate::{directory, events, ledger, Error};

// All-zero ed25519 account key and all-zero contract id.
const NULL_ACCOUNT: &str = "GAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAWHF";
const NULL_CONTRACT: &str = "CAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAABSC4";

pub(crate) fn has_owner(e: &Env) -> bool {
    e.storage().instance().has(&DataKey::Owner)
}

pub(crate) fn write_owner(e: &Env, owner: &Address) {
    e.storage().instance().set(&DataKey::Owner, owner);
}

pub(crate) fn read_owner(e: &Env) -> Result<Address, Error> {
    e.storage()
        .instance()
        .get(&DataKey::Owner)
        .ok_or(Error::NotInitialized)
}

/// Authenticates `caller` and checks it is the factory owner.
pub(crate) fn require_owner(e: &Env, caller: &Address) -> Result<(), Error> {
    caller.require_auth();
    if *caller != read_owner(e)? {
        return Err(Error::Unauthorized);
    }
    Ok(())
}

pub(crate) fn is_null(e: &Env, identity: &Address) -> bool {
    *identity == Address::from_string(&String::from_str(e, NULL_ACCOUNT))
        || *identity == Address::from_string(&String::from_str(e, NULL_CONTRACT))
}

pub(crate) fn read_right(e: &Env, identity: &Address) -> RegistryRight {
    e.storage()
        .persistent()
        .get(&DataKey::Right(identity.clone()))
        .unwrap_or_else(|| RegistryRight::vacant(e))
}

fn write_right(e: &Env, identity: &Address, right: &RegistryRight) {
    let key = DataKey::Right(identity.clone());
    e.storage().persistent().set(&key, right);
    e.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_BUMP_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

pub(crate) fn grant_right(
    e: &Env,
    caller: &Address,
    identity: &Address,
    name: String,
    sector: String,
) -> Result<(), Error> {
    require_owner(e, caller)?;

    if is_null(e, identity) || name.is_empty() || sector.is_empty() {
        return Err(Error::InvalidInput);
    }

    let right = read_right(e, identity);
    if right.registered {
        return Err(Error::AlreadyRegistered);
    }
    if right.granted {
        return Err(Error::AlreadyGranted);
    }

    let right = RegistryRight {
        granted: true,
        registered: false,
        name,
        sector,
    };
    write_right(e, identity, &right);

    log!(e, "registry right granted", identity.clone());
    events::right_changed(e, identity, &right);
    Ok(())
}

pub(crate) fn revoke_right(e: &Env, caller: &Address, identity: &Address) -> Result<(), Error> {
    require_owner(e, caller)?;

    let mut right = read_right(e, identity);
    if !right.granted || right.registered {
        return Err(Error::NoAccessGranted);
    }

    right.granted = false;
    write_right(e, identity, &right);

    log!(e, "registry right revoked", identity.clone());
    events::right_changed(e, identity, &right);
    Ok(())
}

/// Creates the company ledger for `identity` and indexes it by sector.
/// Callable by the identity itself or by the owner.
pub(crate) fn register(e: &Env, caller: &Address, identity: &Address) -> Result<u32, Error> {
    caller.require_auth();
    let owner = read_owner(e)?;
    if caller != identity && *caller != owner {
        return Err(Error::Unauthorized);
    }

    let mut right = read_right(e, identity);
    if !right.granted {
        return Err(Error::NoAccessGranted);
    }
    if right.registered {
        return Err(Error::AlreadyRegistered);
    }

    let company_id = ledger::create(e, identity, &right.name, &right.sector);
    directory::attach(e, identity, company_id, &right.sector);

    right.registered = true;
    write_right(e, identity, &right);

    log!(e, "company registered", identity.clone(), company_id);
    events::company_registered(e, identity, company_id, &right.name, &right.sector);
    Ok(company_id)
}
