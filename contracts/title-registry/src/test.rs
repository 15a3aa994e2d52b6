#![cfg(test)]

use super::*;
use soroban_sdk::{testutils::Address as _, Address, Env, String};

fn setup<'a>() -> (Env, TitleRegistryClient<'a>) {
    let env = Env::default();
    env.mock_all_auths();
    let id = env.register(TitleRegistry, ());
    let client = TitleRegistryClient::new(&env, &id);
    (env, client)
}

#[test]
fn test_mint_assigns_sequential_ids() {
    let (env, registry) = setup();
    let owner = Address::generate(&env);
    let uri = String::from_str(&env, "ipfs://house-1");

    assert_eq!(registry.mint(&owner, &uri), 1);
    assert_eq!(registry.mint(&owner, &uri), 2);
    assert_eq!(registry.total_supply(), 2);
    assert_eq!(registry.owner_of(&1), owner);
    assert_eq!(registry.token_uri(&1), uri);
}

#[test]
fn test_unknown_title() {
    let (_env, registry) = setup();
    assert_eq!(registry.try_owner_of(&9), Err(Ok(Error::TokenNotFound)));
}

#[test]
fn test_transfer_from_needs_approval() {
    let (env, registry) = setup();
    let owner = Address::generate(&env);
    let custodian = Address::generate(&env);
    let id = registry.mint(&owner, &String::from_str(&env, "ipfs://house"));

    let result = registry.try_transfer_from(&custodian, &owner, &custodian, &id);
    assert_eq!(result, Err(Ok(Error::NotApproved)));

    registry.approve(&owner, &custodian, &id);
    assert_eq!(registry.get_approved(&id), Some(custodian.clone()));
    registry.transfer_from(&custodian, &owner, &custodian, &id);
    assert_eq!(registry.owner_of(&id), custodian);
    assert_eq!(registry.get_approved(&id), None);
}

#[test]
fn test_only_owner_moves_title() {
    let (env, registry) = setup();
    let owner = Address::generate(&env);
    let other = Address::generate(&env);
    let id = registry.mint(&owner, &String::from_str(&env, "ipfs://house"));

    assert_eq!(
        registry.try_transfer(&other, &other, &id),
        Err(Ok(Error::NotOwner))
    );
    assert_eq!(
        registry.try_approve(&other, &other, &id),
        Err(Ok(Error::NotOwner))
    );

    registry.transfer(&owner, &other, &id);
    assert_eq!(registry.owner_of(&id), other);
}
