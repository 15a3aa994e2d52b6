use soroban_sdk::{contracttype, Address, Map};

/// Roles and collaborators fixed for the whole deployment.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EscrowConfig {
    pub nft_address: Address,
    pub token: Address,
    pub seller: Address,
    pub inspector: Address,
    pub lender: Address,
}

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ListingStatus {
    Listed,
    Settled,
    Cancelled,
}

/// Per-listing state. Entries outlive settlement and are left inert
/// (`status != Listed`) until the token id is listed again.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Listing {
    pub status: ListingStatus,
    pub seller: Address,
    pub buyer: Address,
    pub purchase_price: i128,
    pub escrow_amount: i128,
    pub inspection_passed: bool,
    pub approvals: Map<Address, bool>,
    pub earnest: i128,
    pub financing: i128,
}

impl Listing {
    pub fn is_listed(&self) -> bool {
        self.status == ListingStatus::Listed
    }

    pub fn is_approved_by(&self, party: &Address) -> bool {
        self.approvals.get(party.clone()).unwrap_or(false)
    }

    /// Funds credited to this listing, as opposed to unallocated contract balance.
    pub fn contributions(&self) -> i128 {
        self.earnest + self.financing
    }
}

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SaleOutcome {
    Settled,
    RefundedToBuyer,
    ForfeitedToSeller,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    Config,
    Listing(u32),
    Committed,
}
