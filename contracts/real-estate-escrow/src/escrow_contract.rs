use crate::entities::*;
use crate::errors::*;
use crate::registry::TitleRegistryClient;
use crate::storage;
use soroban_sdk::{contract, contractimpl, log, symbol_short, token, Address, Env, Map};

#[contract]
pub struct RealEstateEscrow;

#[contractimpl]
impl RealEstateEscrow {
    pub fn initialize(
        env: Env,
        nft_address: Address,
        token: Address,
        seller: Address,
        inspector: Address,
        lender: Address,
    ) -> Result<(), Error> {
        seller.require_auth();
        if storage::has_config(&env) {
            return Err(Error::AlreadyInitialized);
        }

        let config = EscrowConfig {
            nft_address,
            token,
            seller,
            inspector,
            lender,
        };
        storage::write_config(&env, &config);
        storage::write_committed(&env, 0);

        log!(
            &env,
            "Escrow initialized for registry {} with inspector {} and lender {}",
            config.nft_address,
            config.inspector,
            config.lender
        );
        Ok(())
    }

    /// Takes custody of `token_id` and opens a listing for `buyer`.
    ///
    /// The seller must currently own the title and must have approved this
    /// contract as custodian on the registry.
    pub fn list(
        env: Env,
        seller: Address,
        token_id: u32,
        buyer: Address,
        purchase_price: i128,
        escrow_amount: i128,
    ) -> Result<(), Error> {
        seller.require_auth();
        let config = storage::read_config(&env)?;

        if storage::listing_exists(&env, token_id)
            && storage::load_listing(&env, token_id)?.is_listed()
        {
            return Err(Error::AlreadyListed);
        }
        if purchase_price <= 0 || escrow_amount < 0 || escrow_amount > purchase_price {
            return Err(Error::InvalidAmount);
        }
        if buyer == seller {
            return Err(Error::InvalidBuyer);
        }

        let registry = TitleRegistryClient::new(&env, &config.nft_address);
        if registry.owner_of(&token_id) != seller {
            return Err(Error::Unauthorized);
        }
        let escrow = env.current_contract_address();
        registry.transfer_from(&escrow, &seller, &escrow, &token_id);

        let listing = Listing {
            status: ListingStatus::Listed,
            seller: seller.clone(),
            buyer: buyer.clone(),
            purchase_price,
            escrow_amount,
            inspection_passed: false,
            approvals: Map::new(&env),
            earnest: 0,
            financing: 0,
        };
        storage::set_listing(&env, token_id, &listing);

        env.events().publish(
            (symbol_short!("listed"),),
            (token_id, seller, buyer, purchase_price, escrow_amount),
        );
        log!(
            &env,
            "Title {} listed at {} with earnest {}",
            token_id,
            purchase_price,
            escrow_amount
        );
        Ok(())
    }

    pub fn deposit_earnest(env: Env, buyer: Address, token_id: u32, amount: i128) -> Result<(), Error> {
        buyer.require_auth();
        let config = storage::read_config(&env)?;
        let mut listing = storage::load_open_listing(&env, token_id)?;

        if listing.buyer != buyer {
            return Err(Error::Unauthorized);
        }
        if amount < listing.escrow_amount {
            return Err(Error::InsufficientDeposit);
        }
        Self::check_contribution(amount, listing.purchase_price - listing.contributions())?;

        let token_client = token::Client::new(&env, &config.token);
        token_client.transfer(&buyer, &env.current_contract_address(), &amount);

        listing.earnest += amount;
        storage::set_listing(&env, token_id, &listing);
        Self::commit(&env, amount)?;

        env.events()
            .publish((symbol_short!("earnest"),), (token_id, buyer, amount));
        Ok(())
    }

    /// Lender contribution credited to a single listing. Funds sent to the
    /// contract by a plain token transfer stay unallocated instead.
    pub fn fund_sale(env: Env, lender: Address, token_id: u32, amount: i128) -> Result<(), Error> {
        lender.require_auth();
        let config = storage::read_config(&env)?;
        if lender != config.lender {
            return Err(Error::Unauthorized);
        }
        let mut listing = storage::load_open_listing(&env, token_id)?;
        // Room for the earnest stays reserved whatever order the parties act in.
        let reserved_for_earnest = listing.earnest.max(listing.escrow_amount);
        Self::check_contribution(
            amount,
            listing.purchase_price - reserved_for_earnest - listing.financing,
        )?;

        let token_client = token::Client::new(&env, &config.token);
        token_client.transfer(&lender, &env.current_contract_address(), &amount);

        listing.financing += amount;
        storage::set_listing(&env, token_id, &listing);
        Self::commit(&env, amount)?;

        env.events()
            .publish((symbol_short!("funded"),), (token_id, lender, amount));
        Ok(())
    }

    pub fn update_inspection_status(
        env: Env,
        inspector: Address,
        token_id: u32,
        passed: bool,
    ) -> Result<(), Error> {
        inspector.require_auth();
        let config = storage::read_config(&env)?;
        if inspector != config.inspector {
            return Err(Error::Unauthorized);
        }
        let mut listing = storage::load_open_listing(&env, token_id)?;

        listing.inspection_passed = passed;
        storage::set_listing(&env, token_id, &listing);

        env.events()
            .publish((symbol_short!("inspect"),), (token_id, passed));
        Ok(())
    }

    pub fn approve_sale(env: Env, approver: Address, token_id: u32) -> Result<(), Error> {
        approver.require_auth();
        let config = storage::read_config(&env)?;
        let mut listing = storage::load_open_listing(&env, token_id)?;

        if approver != listing.buyer && approver != listing.seller && approver != config.lender {
            return Err(Error::Unauthorized);
        }
        if listing.is_approved_by(&approver) {
            return Ok(());
        }

        listing.approvals.set(approver.clone(), true);
        storage::set_listing(&env, token_id, &listing);

        env.events()
            .publish((symbol_short!("approved"),), (token_id, approver));
        Ok(())
    }

    /// Pays the seller and hands the title to the buyer. Anyone may trigger
    /// settlement once inspection, approvals and funding are all in place.
    pub fn finalize_sale(env: Env, token_id: u32) -> Result<SaleOutcome, Error> {
        let config = storage::read_config(&env)?;
        let mut listing = storage::load_open_listing(&env, token_id)?;

        if !listing.inspection_passed {
            return Err(Error::InspectionNotPassed);
        }
        if !listing.is_approved_by(&listing.buyer)
            || !listing.is_approved_by(&listing.seller)
            || !listing.is_approved_by(&config.lender)
        {
            return Err(Error::ApprovalIncomplete);
        }

        let escrow = env.current_contract_address();
        let token_client = token::Client::new(&env, &config.token);
        let committed = storage::read_committed(&env);
        // Contributions credited to other open listings are never spendable here.
        let reserved_elsewhere = committed - listing.contributions();
        let available = token_client.balance(&escrow) - reserved_elsewhere;
        if available < listing.purchase_price {
            return Err(Error::InsufficientFunds);
        }

        listing.status = ListingStatus::Settled;
        storage::set_listing(&env, token_id, &listing);
        storage::write_committed(&env, reserved_elsewhere);

        token_client.transfer(&escrow, &listing.seller, &listing.purchase_price);
        TitleRegistryClient::new(&env, &config.nft_address).transfer(
            &escrow,
            &listing.buyer,
            &token_id,
        );

        env.events().publish(
            (symbol_short!("settled"),),
            (
                token_id,
                listing.seller,
                listing.buyer,
                listing.purchase_price,
            ),
        );
        log!(&env, "Title {} settled", token_id);
        Ok(SaleOutcome::Settled)
    }

    /// Aborts an open listing. Earnest is forfeited to the seller only when the
    /// buyer backs out after a passed inspection; otherwise it is refunded.
    /// Lender financing is always returned and the title goes back to the seller.
    pub fn cancel_sale(env: Env, caller: Address, token_id: u32) -> Result<SaleOutcome, Error> {
        caller.require_auth();
        let config = storage::read_config(&env)?;
        let mut listing = storage::load_open_listing(&env, token_id)?;

        if caller != listing.buyer && caller != listing.seller {
            return Err(Error::Unauthorized);
        }

        let (outcome, earnest_recipient) = if listing.inspection_passed && caller == listing.buyer {
            (SaleOutcome::ForfeitedToSeller, listing.seller.clone())
        } else {
            (SaleOutcome::RefundedToBuyer, listing.buyer.clone())
        };

        let committed = storage::read_committed(&env);
        listing.status = ListingStatus::Cancelled;
        storage::set_listing(&env, token_id, &listing);
        storage::write_committed(&env, committed - listing.contributions());

        let escrow = env.current_contract_address();
        let token_client = token::Client::new(&env, &config.token);
        if listing.earnest > 0 {
            token_client.transfer(&escrow, &earnest_recipient, &listing.earnest);
        }
        if listing.financing > 0 {
            token_client.transfer(&escrow, &config.lender, &listing.financing);
        }
        TitleRegistryClient::new(&env, &config.nft_address).transfer(
            &escrow,
            &listing.seller,
            &token_id,
        );

        env.events().publish(
            (symbol_short!("cancel"),),
            (token_id, outcome, listing.earnest),
        );
        log!(&env, "Title {} cancelled, earnest {}", token_id, listing.earnest);
        Ok(outcome)
    }

    fn check_contribution(amount: i128, room: i128) -> Result<(), Error> {
        if amount <= 0 {
            return Err(Error::InvalidAmount);
        }
        if amount > room {
            return Err(Error::Overfunded);
        }
        Ok(())
    }

    fn commit(env: &Env, amount: i128) -> Result<(), Error> {
        let committed = storage::read_committed(env)
            .checked_add(amount)
            .ok_or(Error::InvalidAmount)?;
        storage::write_committed(env, committed);
        Ok(())
    }

    pub fn nft_address(env: Env) -> Result<Address, Error> {
        Ok(storage::read_config(&env)?.nft_address)
    }

    pub fn token(env: Env) -> Result<Address, Error> {
        Ok(storage::read_config(&env)?.token)
    }

    pub fn seller(env: Env) -> Result<Address, Error> {
        Ok(storage::read_config(&env)?.seller)
    }

    pub fn inspector(env: Env) -> Result<Address, Error> {
        Ok(storage::read_config(&env)?.inspector)
    }

    pub fn lender(env: Env) -> Result<Address, Error> {
        Ok(storage::read_config(&env)?.lender)
    }

    pub fn is_listed(env: Env, token_id: u32) -> bool {
        storage::get_listing(&env, token_id)
            .map(|listing| listing.is_listed())
            .unwrap_or(false)
    }

    pub fn buyer(env: Env, token_id: u32) -> Result<Address, Error> {
        Ok(storage::load_listing(&env, token_id)?.buyer)
    }

    pub fn purchase_price(env: Env, token_id: u32) -> Result<i128, Error> {
        Ok(storage::load_listing(&env, token_id)?.purchase_price)
    }

    pub fn escrow_amount(env: Env, token_id: u32) -> Result<i128, Error> {
        Ok(storage::load_listing(&env, token_id)?.escrow_amount)
    }

    pub fn inspection_passed(env: Env, token_id: u32) -> bool {
        storage::get_listing(&env, token_id)
            .map(|listing| listing.inspection_passed)
            .unwrap_or(false)
    }

    pub fn approval(env: Env, token_id: u32, party: Address) -> bool {
        storage::get_listing(&env, token_id)
            .map(|listing| listing.is_approved_by(&party))
            .unwrap_or(false)
    }

    pub fn get_listing(env: Env, token_id: u32) -> Result<Listing, Error> {
        storage::load_listing(&env, token_id)
    }

    pub fn get_balance(env: Env) -> Result<i128, Error> {
        let config = storage::read_config(&env)?;
        Ok(token::Client::new(&env, &config.token).balance(&env.current_contract_address()))
    }

    pub fn committed_balance(env: Env) -> i128 {
        storage::read_committed(&env)
    }

    /// Held funds not credited to any open listing, such as plain transfers
    /// into the contract. Any listing's settlement may draw on them.
    pub fn unallocated_balance(env: Env) -> Result<i128, Error> {
        let held = Self::get_balance(env.clone())?;
        Ok(held - storage::read_committed(&env))
    }
}
