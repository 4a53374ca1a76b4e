#![cfg_attr(not(feature = "std"), no_std)]
// Allow deprecated weight constants for MVP (will be replaced by benchmarks post-launch)
#![allow(deprecated)]
#![allow(clippy::let_unit_value)]

use frame_support::{dispatch::DispatchResult, ensure, pallet_prelude::*};
use frame_system::{ensure_signed, pallet_prelude::*};
use sp_runtime::traits::StaticLookup;
use sp_std::prelude::*;

pub use pallet::*;

#[cfg(test)]
mod mock;


#[cfg(feature = "runtime-benchmarks")]
mod benchmarking;

pub mod migrations;

/// The current storage version.
const STORAGE_VERSION: StorageVersion = StorageVersion::new(1);

type AccountIdLookupOf<T> = <<T as frame_system::Config>::Lookup as StaticLookup>::Source;

#[frame_support::pallet]
pub mod pallet {
    use super::*;

    #[pallet::config]
    pub trait Config: frame_system::Config {
        type RuntimeEvent: From<Event<Self>> + IsType<<Self as frame_system::Config>::RuntimeEvent>;
    }

    #[pallet::pallet]
    #[pallet::storage_version(STORAGE_VERSION)]
    pub struct Pallet<T>(_);

    /// The account allowed to configure issuance and airdrop tokens.
    /// Set at genesis and never changed afterwards.
    #[pallet::storage]
    #[pallet::getter(fn owner)]
    pub type Owner<T: Config> = StorageValue<_, T::AccountId, OptionQuery>;

    /// Collection name (e.g., "BBOX")
    #[pallet::storage]
    #[pallet::getter(fn token_name)]
    pub type TokenName<T> = StorageValue<_, BoundedVec<u8, ConstU32<64>>, ValueQuery>;

    /// Collection symbol (e.g., "BOX")
    #[pallet::storage]
    #[pallet::getter(fn token_symbol)]
    pub type TokenSymbol<T> = StorageValue<_, BoundedVec<u8, ConstU32<16>>, ValueQuery>;

    /// Maximum number of tokens that may ever be issued.
    /// Starts at zero, so nothing can be minted until the owner raises it.
    #[pallet::storage]
    #[pallet::getter(fn opening_max)]
    pub type OpeningMax<T> = StorageValue<_, u128, ValueQuery>;

    /// Whether self-service minting is currently open.
    #[pallet::storage]
    #[pallet::getter(fn purchase_open)]
    pub type PurchaseOpen<T> = StorageValue<_, bool, ValueQuery>;

    /// Total tokens issued so far. Never decreases (no burn).
    #[pallet::storage]
    #[pallet::getter(fn total_supply)]
    pub type TotalSupply<T> = StorageValue<_, u128, ValueQuery>;

    /// Per-holder token counts
    #[pallet::storage]
    #[pallet::getter(fn balance_of)]
    pub type Balances<T: Config> = StorageMap<_, Blake2_128Concat, T::AccountId, u128, ValueQuery>;

    #[pallet::event]
    #[pallet::generate_deposit(pub(super) fn deposit_event)]
    pub enum Event<T: Config> {
        /// Supply cap updated by the owner
        OpeningMaxSet { max: u128 },
        /// Self-service minting opened or closed by the owner
        PurchaseStatusSet { open: bool },
        /// Caller minted one token for themself
        Minted { who: T::AccountId },
        /// Owner allocated tokens directly to a recipient
        Airdropped { to: T::AccountId, amount: u128 },
    }

    #[pallet::error]
    pub enum Error<T> {
        /// Caller is not the configured owner
        AccessDenied,
        /// Self-service minting is closed
        PurchaseNotOpen,
        /// Requested amount would push total supply above the cap
        SupplyExhausted,
        /// Airdrop recipient could not be resolved to an account
        InvalidRecipient,
        /// Supply arithmetic overflowed
        Overflow,
    }

    #[pallet::call]
    impl<T: Config> Pallet<T> {
        /// Set the maximum issuable supply. Owner only.
        ///
        /// The new cap is applied unconditionally; setting it below the
        /// current total supply is allowed and simply blocks further
        /// issuance until the cap is raised again.
        #[pallet::call_index(0)]
        #[pallet::weight(10_000)]
        pub fn set_opening_max(origin: OriginFor<T>, new_max: u128) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::ensure_owner(&who)?;
            OpeningMax::<T>::put(new_max);
            Self::deposit_event(Event::OpeningMaxSet { max: new_max });
            Ok(())
        }

        /// Open or close self-service minting. Owner only.
        #[pallet::call_index(1)]
        #[pallet::weight(10_000)]
        pub fn set_purchase_status(origin: OriginFor<T>, open: bool) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::ensure_owner(&who)?;
            PurchaseOpen::<T>::put(open);
            Self::deposit_event(Event::PurchaseStatusSet { open });
            Ok(())
        }

        /// Mint one token for the caller.
        ///
        /// Open to any signed account while minting is open and capacity
        /// remains under the cap.
        #[pallet::call_index(2)]
        #[pallet::weight(10_000)]
        pub fn mint_nft(origin: OriginFor<T>) -> DispatchResult {
            let who = ensure_signed(origin)?;
            ensure!(PurchaseOpen::<T>::get(), Error::<T>::PurchaseNotOpen);
            let new_total = Self::ensure_capacity(1)?;
            Self::credit(&who, 1, new_total);
            Self::deposit_event(Event::Minted { who });
            Ok(())
        }

        /// Allocate `amount` tokens directly to `recipient`. Owner only.
        ///
        /// Bypasses the purchase gate but not the supply cap.
        #[pallet::call_index(3)]
        #[pallet::weight(10_000)]
        pub fn airdrop(
            origin: OriginFor<T>,
            recipient: AccountIdLookupOf<T>,
            amount: u128,
        ) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::ensure_owner(&who)?;
            let recipient =
                T::Lookup::lookup(recipient).map_err(|_| Error::<T>::InvalidRecipient)?;
            let new_total = Self::ensure_capacity(amount)?;
            Self::credit(&recipient, amount, new_total);
            Self::deposit_event(Event::Airdropped { to: recipient, amount });
            Ok(())
        }
    }

    impl<T: Config> Pallet<T> {
        /// Guard for owner-gated calls. Evaluated before any state mutation.
        fn ensure_owner(who: &T::AccountId) -> Result<(), Error<T>> {
            match Owner::<T>::get() {
                Some(owner) if owner == *who => Ok(()),
                _ => Err(Error::<T>::AccessDenied),
            }
        }

        /// Check that issuing `amount` more tokens stays within the cap.
        /// Returns the post-issuance total supply.
        fn ensure_capacity(amount: u128) -> Result<u128, Error<T>> {
            let new_total = TotalSupply::<T>::get()
                .checked_add(amount)
                .ok_or(Error::<T>::Overflow)?;
            ensure!(new_total <= OpeningMax::<T>::get(), Error::<T>::SupplyExhausted);
            Ok(new_total)
        }

        /// Bookkeeping primitive: record `amount` new tokens for `holder`.
        /// Only called after all guards have passed, within the same dispatch.
        fn credit(holder: &T::AccountId, amount: u128, new_total: u128) {
            TotalSupply::<T>::put(new_total);
            Balances::<T>::mutate(holder, |bal| *bal = bal.saturating_add(amount));
        }
    }

    #[pallet::genesis_config]
    #[derive(frame_support::DefaultNoBound)]
    pub struct GenesisConfig<T: Config> {
        /// Account that controls issuance configuration and airdrops
        pub owner: Option<T::AccountId>,
        /// Collection name
        pub token_name: Vec<u8>,
        /// Collection symbol
        pub token_symbol: Vec<u8>,
    }

    #[pallet::genesis_build]
    impl<T: Config> BuildGenesisConfig for GenesisConfig<T> {
        fn build(&self) {
            let name: BoundedVec<u8, ConstU32<64>> =
                self.token_name.clone().try_into().expect("Token name too long (max 64 bytes)");
            TokenName::<T>::put(name);

            let symbol: BoundedVec<u8, ConstU32<16>> =
                self.token_symbol.clone().try_into().expect("Token symbol too long (max 16 bytes)");
            TokenSymbol::<T>::put(symbol);

            if let Some(ref owner) = self.owner {
                Owner::<T>::put(owner);
            }

            // OpeningMax, PurchaseOpen and TotalSupply stay at their
            // defaults (0 / closed / 0): a fresh ledger issues nothing
            // until the owner configures it.
        }
    }
}
