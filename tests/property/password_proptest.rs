//! Property-based tests for password hashing
//!
//! bcrypt is slow even at the lowest cost, so the case count is kept small.

use proptest::prelude::*;
use reportdesk::backend::auth::password::{PasswordHasher, MIN_COST};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn test_hash_verifies_own_password(password in "[ -~]{1,64}") {
        let hasher = PasswordHasher::new(MIN_COST).unwrap();
        let hash = hasher.hash(&password).unwrap();

        prop_assert!(hasher.verify(&password, &hash));
    }

    #[test]
    fn test_hash_rejects_other_password(
        password in "[a-z]{1,32}",
        other in "[a-z]{1,32}",
    ) {
        prop_assume!(password != other);
        let hasher = PasswordHasher::new(MIN_COST).unwrap();
        let hash = hasher.hash(&password).unwrap();

        prop_assert!(!hasher.verify(&other, &hash));
    }

    #[test]
    fn test_hashes_are_salted(password in "[a-z]{1,32}") {
        let hasher = PasswordHasher::new(MIN_COST).unwrap();
        let first = hasher.hash(&password).unwrap();
        let second = hasher.hash(&password).unwrap();

        prop_assert_ne!(&first, &second);
        prop_assert!(hasher.verify(&password, &first));
        prop_assert!(hasher.verify(&password, &second));
    }
}
