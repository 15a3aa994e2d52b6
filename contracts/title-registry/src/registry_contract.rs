use crate::entities::*;
use crate::errors::*;
use soroban_sdk::{contract, contractimpl, log, symbol_short, Address, Env, String};

/// Minimal property title registry: one owner and at most one approved
/// custodian per title.
#[contract]
pub struct TitleRegistry;

#[contractimpl]
impl TitleRegistry {
    /// Mints the next title to `to`. Ids start at 1.
    pub fn mint(env: Env, to: Address, uri: String) -> Result<u32, Error> {
        to.require_auth();
        let token_id = env
            .storage()
            .persistent()
            .get(&DataKey::TokenCounter)
            .unwrap_or(0u32)
            .checked_add(1)
            .ok_or(Error::SupplyExhausted)?;

        env.storage()
            .persistent()
            .set(&DataKey::TokenCounter, &token_id);
        env.storage().persistent().set(&DataKey::Owner(token_id), &to);
        env.storage().persistent().set(&DataKey::Uri(token_id), &uri);

        env.events()
            .publish((symbol_short!("mint"),), (token_id, to));
        Ok(token_id)
    }

    pub fn owner_of(env: Env, token_id: u32) -> Result<Address, Error> {
        env.storage()
            .persistent()
            .get(&DataKey::Owner(token_id))
            .ok_or(Error::TokenNotFound)
    }

    pub fn token_uri(env: Env, token_id: u32) -> Result<String, Error> {
        env.storage()
            .persistent()
            .get(&DataKey::Uri(token_id))
            .ok_or(Error::TokenNotFound)
    }

    pub fn total_supply(env: Env) -> u32 {
        env.storage()
            .persistent()
            .get(&DataKey::TokenCounter)
            .unwrap_or(0)
    }

    /// Grants `operator` custody rights over a single title until its next transfer.
    pub fn approve(env: Env, owner: Address, operator: Address, token_id: u32) -> Result<(), Error> {
        owner.require_auth();
        if Self::owner_of(env.clone(), token_id)? != owner {
            return Err(Error::NotOwner);
        }
        env.storage()
            .persistent()
            .set(&DataKey::Approved(token_id), &operator);

        env.events()
            .publish((symbol_short!("approve"),), (token_id, owner, operator));
        Ok(())
    }

    pub fn get_approved(env: Env, token_id: u32) -> Option<Address> {
        env.storage().persistent().get(&DataKey::Approved(token_id))
    }

    pub fn transfer(env: Env, from: Address, to: Address, token_id: u32) -> Result<(), Error> {
        from.require_auth();
        if Self::owner_of(env.clone(), token_id)? != from {
            return Err(Error::NotOwner);
        }
        Self::move_title(&env, from, to, token_id);
        Ok(())
    }

    pub fn transfer_from(
        env: Env,
        spender: Address,
        from: Address,
        to: Address,
        token_id: u32,
    ) -> Result<(), Error> {
        spender.require_auth();
        if Self::owner_of(env.clone(), token_id)? != from {
            return Err(Error::NotOwner);
        }
        if spender != from && Self::get_approved(env.clone(), token_id) != Some(spender) {
            return Err(Error::NotApproved);
        }
        Self::move_title(&env, from, to, token_id);
        Ok(())
    }

    fn move_title(env: &Env, from: Address, to: Address, token_id: u32) {
        env.storage().persistent().set(&DataKey::Owner(token_id), &to);
        env.storage()
            .persistent()
            .remove(&DataKey::Approved(token_id));

        log!(env, "Title {} moved from {} to {}", token_id, from, to);
        env.events()
            .publish((symbol_short!("transfer"),), (token_id, from, to));
    }
}
