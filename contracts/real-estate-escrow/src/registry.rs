use soroban_sdk::{contractclient, Address, Env};

/// Custody surface the escrow needs from a title registry. Any contract
/// exposing these functions can be configured as `nft_address`.
#[contractclient(name = "TitleRegistryClient")]
pub trait TitleRegistryInterface {
    fn owner_of(env: Env, token_id: u32) -> Address;
    fn transfer(env: Env, from: Address, to: Address, token_id: u32);
    fn transfer_from(env: Env, spender: Address, from: Address, to: Address, token_id: u32);
}
