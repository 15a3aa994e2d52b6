use soroban_sdk::contracttype;

#[contracttype]
#[derive(Debug, Eq, PartialEq)]
pub enum DataKey {
    Owner(u32),
    Approved(u32),
    Uri(u32),
    TokenCounter,
}
