use crate as pallet_bbox_nft;
use frame_support::{
    derive_impl,
    traits::{ConstU32, ConstU64},
};
use sp_core::H256;
use sp_runtime::{
    traits::{BlakeTwo256, LookupError, StaticLookup},
    BuildStorage,
};

type Block = frame_system::mocking::MockBlock<Test>;

// Configure a mock runtime to test the pallet.
frame_support::construct_runtime!(
    pub enum Test {
        System: frame_system,
        BboxNft: pallet_bbox_nft,
    }
);

#[derive_impl(frame_system::config_preludes::TestDefaultConfig)]
impl frame_system::Config for Test {
    type BaseCallFilter = frame_support::traits::Everything;
    type BlockWeights = ();
    type BlockLength = ();
    type DbWeight = ();
    type RuntimeOrigin = RuntimeOrigin;
    type RuntimeCall = RuntimeCall;
    type Nonce = u64;
    type Hash = H256;
    type Hashing = BlakeTwo256;
    type AccountId = u64;
    type Lookup = TestLookup;
    type Block = Block;
    type RuntimeEvent = RuntimeEvent;
    type BlockHashCount = ConstU64<250>;
    type Version = ();
    type PalletInfo = PalletInfo;
    type AccountData = ();
    type OnNewAccount = ();
    type OnKilledAccount = ();
    type SystemWeightInfo = ();
    type SS58Prefix = ();
    type OnSetCode = ();
    type MaxConsumers = ConstU32<16>;
}

/// The owner account configured at genesis.
pub const OWNER: u64 = 1;

/// Sentinel account id that `TestLookup` refuses to resolve.
pub const BAD_RECIPIENT: u64 = u64::MAX;

/// Identity lookup that fails for `BAD_RECIPIENT`, so tests can exercise
/// recipient resolution failure.
pub struct TestLookup;
impl StaticLookup for TestLookup {
    type Source = u64;
    type Target = u64;

    fn lookup(s: u64) -> Result<u64, LookupError> {
        if s == BAD_RECIPIENT {
            Err(LookupError)
        } else {
            Ok(s)
        }
    }

    fn unlookup(t: u64) -> u64 {
        t
    }
}

impl pallet_bbox_nft::Config for Test {
    type RuntimeEvent = RuntimeEvent;
}

// Build genesis storage according to the mock runtime.
pub fn new_test_ext() -> sp_io::TestExternalities {
    let mut t = frame_system::GenesisConfig::<Test>::default().build_storage().unwrap();

    pallet_bbox_nft::GenesisConfig::<Test> {
        owner: Some(OWNER),
        token_name: b"BBOX".to_vec(),
        token_symbol: b"BOX".to_vec(),
    }
    .assimilate_storage(&mut t)
    .unwrap();

    t.into()
}
