use crate::entities::*;
use crate::errors::*;
use soroban_sdk::Env;

const DAY_IN_LEDGERS: u32 = 17280;
pub const LISTING_TTL_THRESHOLD: u32 = 30 * DAY_IN_LEDGERS;
pub const LISTING_TTL_EXTEND_TO: u32 = 120 * DAY_IN_LEDGERS;
pub const INSTANCE_TTL_THRESHOLD: u32 = 30 * DAY_IN_LEDGERS;
pub const INSTANCE_TTL_EXTEND_TO: u32 = 120 * DAY_IN_LEDGERS;

fn extend_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_TTL_THRESHOLD, INSTANCE_TTL_EXTEND_TO);
}

pub fn read_config(env: &Env) -> Result<EscrowConfig, Error> {
    env.storage()
        .instance()
        .get(&DataKey::Config)
        .ok_or(Error::NotInitialized)
}

pub fn write_config(env: &Env, config: &EscrowConfig) {
    env.storage().instance().set(&DataKey::Config, config);
    extend_instance(env);
}

pub fn has_config(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Config)
}

pub fn get_listing(env: &Env, token_id: u32) -> Option<Listing> {
    env.storage().persistent().get(&DataKey::Listing(token_id))
}

pub fn set_listing(env: &Env, token_id: u32, listing: &Listing) {
    let key = DataKey::Listing(token_id);
    env.storage().persistent().set(&key, listing);
    env.storage()
        .persistent()
        .extend_ttl(&key, LISTING_TTL_THRESHOLD, LISTING_TTL_EXTEND_TO);
    extend_instance(env);
}

pub fn listing_exists(env: &Env, token_id: u32) -> bool {
    env.storage().persistent().has(&DataKey::Listing(token_id))
}

pub fn load_listing(env: &Env, token_id: u32) -> Result<Listing, Error> {
    get_listing(env, token_id).ok_or(Error::ListingNotFound)
}

/// Like [`load_listing`], but rejects settled or cancelled entries.
pub fn load_open_listing(env: &Env, token_id: u32) -> Result<Listing, Error> {
    let listing = load_listing(env, token_id)?;
    if !listing.is_listed() {
        return Err(Error::NotListed);
    }
    Ok(listing)
}

pub fn read_committed(env: &Env) -> i128 {
    env.storage()
        .instance()
        .get(&DataKey::Committed)
        .unwrap_or(0)
}

pub fn write_committed(env: &Env, committed: i128) {
    env.storage().instance().set(&DataKey::Committed, &committed);
    extend_instance(env);
}
