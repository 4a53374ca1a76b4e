//! Storage migrations for pallet-bbox-nft.
//!
//! Each migration is versioned against the pallet's `STORAGE_VERSION` and
//! runs exactly once, guarded by the on-chain version check.
//!
//! # Migration Pattern
//!
//! When the storage schema changes:
//!
//! 1. **Increment `STORAGE_VERSION`** in `lib.rs` (e.g., from 1 to 2)
//! 2. **Create a new migration module** (e.g., `v2::MigrateToV2`)
//! 3. **Implement the migration logic** using `OnRuntimeUpgrade`
//! 4. **Add tests** to verify the migration works correctly
//! 5. **Wire up in runtime** via the `Executive` type's migration tuple
//!
//! # Example: Adding a New Storage Item
//!
//! ```ignore
//! // In lib.rs, change:
//! const STORAGE_VERSION: StorageVersion = StorageVersion::new(2);
//!
//! // Add new storage, e.g. a per-holder mint allowance:
//! #[pallet::storage]
//! pub type MaxPerHolder<T> = StorageValue<_, u128, ValueQuery>;
//!
//! // In migrations.rs, add:
//! pub mod v2 {
//!     use super::*;
//!
//!     pub struct MigrateToV2<T>(PhantomData<T>);
//!
//!     impl<T: Config> OnRuntimeUpgrade for MigrateToV2<T> {
//!         fn on_runtime_upgrade() -> Weight {
//!             let current = Pallet::<T>::on_chain_storage_version();
//!             if current < 2 {
//!                 // Zero keeps the pre-v2 behavior of no per-holder limit
//!                 MaxPerHolder::<T>::put(0);
//!                 StorageVersion::new(2).put::<Pallet<T>>();
//!                 log::info!("Migrated pallet-bbox-nft storage to v2");
//!                 T::DbWeight::get().reads_writes(1, 2)
//!             } else {
//!                 log::info!("pallet-bbox-nft already at v2+, skipping migration");
//!                 T::DbWeight::get().reads(1)
//!             }
//!         }
//!     }
//! }
//! ```
//!
//! # Important Guidelines
//!
//! - **Never skip versions**: Always migrate sequentially (v1 → v2 → v3)
//! - **Idempotent migrations**: Check version before migrating to handle re-runs
//! - **Accurate weights**: Return correct `Weight` for actual DB operations
//! - **Logging**: Use `log::info!` to track migration progress

use frame_support::{pallet_prelude::*, traits::OnRuntimeUpgrade};
use sp_std::marker::PhantomData;

use crate::{Config, Pallet};

/// Migration to version 1 (initial release).
///
/// This is a no-op migration that serves as a template. Since v1 is the
/// initial storage version, there's nothing to migrate from v0. This module
/// exists to document the migration pattern and establish the framework for
/// subsequent migrations.
pub mod v1 {
    use super::*;

    /// Migration struct for upgrading storage to version 1.
    pub struct MigrateToV1<T>(PhantomData<T>);

    impl<T: Config> OnRuntimeUpgrade for MigrateToV1<T> {
        /// Execute the migration.
        ///
        /// Checks the current on-chain storage version and only runs the
        /// migration if needed. The version check ensures idempotency.
        fn on_runtime_upgrade() -> Weight {
            let on_chain_version = Pallet::<T>::on_chain_storage_version();

            if on_chain_version < 1 {
                // Version 0 → 1: Initial release, no storage changes needed.
                log::info!(
                    target: "pallet-bbox-nft",
                    "Running migration v0 → v1 (no-op for initial release)"
                );

                StorageVersion::new(1).put::<Pallet<T>>();

                // 1 read (version check) + 1 write (version update)
                T::DbWeight::get().reads_writes(1, 1)
            } else {
                log::info!(
                    target: "pallet-bbox-nft",
                    "Storage already at v{on_chain_version:?}, skipping v1 migration"
                );

                T::DbWeight::get().reads(1)
            }
        }

        /// Pre-upgrade check (requires `try-runtime` feature).
        #[cfg(feature = "try-runtime")]
        fn pre_upgrade() -> Result<sp_std::vec::Vec<u8>, sp_runtime::TryRuntimeError> {
            let on_chain_version = Pallet::<T>::on_chain_storage_version();
            log::info!(
                target: "pallet-bbox-nft",
                "Pre-upgrade: on-chain storage version is {:?}",
                on_chain_version
            );

            Ok(on_chain_version.encode())
        }

        /// Post-upgrade check (requires `try-runtime` feature).
        #[cfg(feature = "try-runtime")]
        fn post_upgrade(state: sp_std::vec::Vec<u8>) -> Result<(), sp_runtime::TryRuntimeError> {
            let pre_version: u16 = Decode::decode(&mut &state[..])
                .map_err(|_| sp_runtime::TryRuntimeError::Other("Failed to decode pre-state"))?;

            let post_version = Pallet::<T>::on_chain_storage_version();

            log::info!(
                target: "pallet-bbox-nft",
                "Post-upgrade: version changed from {} to {:?}",
                pre_version,
                post_version
            );

            if pre_version < 1 {
                frame_support::ensure!(
                    post_version >= 1,
                    sp_runtime::TryRuntimeError::Other("Migration to v1 did not complete")
                );
            }

            Ok(())
        }
    }
}
