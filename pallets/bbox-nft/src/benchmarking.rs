//! Benchmarking setup for pallet-bbox-nft

use super::*;

#[allow(unused)]
use crate::Pallet as BboxNft;
use frame_benchmarking::v2::*;
use frame_system::RawOrigin;

fn setup_owner<T: Config>() -> T::AccountId {
    let owner: T::AccountId = whitelisted_caller();
    Owner::<T>::put(&owner);
    owner
}

#[benchmarks]
mod benchmarks {
    use super::*;

    #[benchmark]
    fn set_opening_max() {
        let owner = setup_owner::<T>();

        #[extrinsic_call]
        _(RawOrigin::Signed(owner), 1_000u128);

        assert_eq!(OpeningMax::<T>::get(), 1_000);
    }

    #[benchmark]
    fn set_purchase_status() {
        let owner = setup_owner::<T>();

        #[extrinsic_call]
        _(RawOrigin::Signed(owner), true);

        assert_eq!(PurchaseOpen::<T>::get(), true);
    }

    #[benchmark]
    fn mint_nft() {
        let caller: T::AccountId = whitelisted_caller();
        OpeningMax::<T>::put(1_000u128);
        PurchaseOpen::<T>::put(true);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller.clone()));

        assert_eq!(Balances::<T>::get(&caller), 1);
    }

    #[benchmark]
    fn airdrop() {
        let owner = setup_owner::<T>();
        let recipient: T::AccountId = account("recipient", 0, 0);
        let recipient_lookup = T::Lookup::unlookup(recipient.clone());
        OpeningMax::<T>::put(1_000_000u128);

        #[extrinsic_call]
        _(RawOrigin::Signed(owner), recipient_lookup, 1_000u128);

        assert_eq!(Balances::<T>::get(&recipient), 1_000);
    }

    impl_benchmark_test_suite!(BboxNft, crate::mock::new_test_ext(), crate::mock::Test);
}
