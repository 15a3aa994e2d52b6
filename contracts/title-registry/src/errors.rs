use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
pub enum Error {
    TokenNotFound = 1,
    NotOwner = 2,
    NotApproved = 3,
    SupplyExhausted = 4,
}
