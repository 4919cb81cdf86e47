//! User Service Tests
//!
//! # Test Organization
//!
//! - `login` - credential checks against stored hashes
//! - `creation` - validation and name uniqueness
//! - `deletion` - removal by name
//! - `properties` - create-then-login over generated users

use core_kernel::BcryptHasher;
use domain_user::{InMemoryUserRepository, Profile, UserError, UserService};
use proptest::prelude::*;

fn new_service() -> UserService {
    UserService::new(
        Box::new(InMemoryUserRepository::new()),
        Box::new(BcryptHasher::new(BcryptHasher::MIN_COST).unwrap()),
    )
}

mod login {
    use super::*;

    #[test]
    fn test_correct_password_returns_profile() {
        let mut service = new_service();
        service.create("pablo", "pablo", Profile::Admin).unwrap();

        assert_eq!(service.login("pablo", "pablo"), Some(Profile::Admin));
    }

    #[test]
    fn test_wrong_password_returns_none() {
        let mut service = new_service();
        service.create("pablo", "pablo", Profile::Admin).unwrap();

        assert_eq!(service.login("pablo", "malaclave"), None);
    }

    #[test]
    fn test_name_is_case_sensitive() {
        let mut service = new_service();
        service.create("pablo", "pablo", Profile::Admin).unwrap();

        assert_eq!(service.login("PABLO", "pablo"), None);
    }

    #[test]
    fn test_password_is_hashed_once() {
        let mut service = new_service();
        service.create("ana", "1234", Profile::Management).unwrap();

        let stored = service.find("ana").unwrap().password_hash().to_string();
        assert!(stored.starts_with("$2"));
        assert_eq!(service.login("ana", "1234"), Some(Profile::Management));
        assert_eq!(service.login("ana", &stored), None);
    }
}

mod creation {
    use super::*;

    #[test]
    fn test_duplicate_name_leaves_store_unchanged() {
        let mut service = new_service();
        service.create("ana", "1234", Profile::Management).unwrap();
        let original_hash = service.find("ana").unwrap().password_hash().to_string();

        let result = service.create("ana", "other", Profile::Admin);

        assert!(matches!(result, Err(UserError::Duplicate(_))));
        assert_eq!(service.list_all().len(), 1);
        let kept = service.find("ana").unwrap();
        assert_eq!(kept.profile(), Profile::Management);
        assert_eq!(kept.password_hash(), original_hash);
    }

    #[test]
    fn test_blank_name_is_validation_error() {
        let mut service = new_service();
        assert!(matches!(
            service.create("", "1234", Profile::Consult),
            Err(UserError::Validation(_))
        ));
        assert!(service.list_all().is_empty());
    }

    #[test]
    fn test_list_by_profile() {
        let mut service = new_service();
        service.create("root", "r", Profile::Admin).unwrap();
        service.create("ana", "a", Profile::Management).unwrap();

        assert_eq!(service.list_by_profile(Profile::Admin).len(), 1);
        assert!(service.list_by_profile(Profile::Consult).is_empty());
    }
}

mod deletion {
    use super::*;

    #[test]
    fn test_delete_existing() {
        let mut service = new_service();
        service.create("pablo", "pablo", Profile::Admin).unwrap();

        service.delete("pablo").unwrap();

        assert!(service.find("pablo").is_none());
        assert_eq!(service.login("pablo", "pablo"), None);
    }

    #[test]
    fn test_delete_missing() {
        let mut service = new_service();
        assert!(matches!(service.delete("pablo"), Err(UserError::NotFound(_))));
    }
}

mod properties {
    use super::*;

    fn profile_strategy() -> impl Strategy<Value = Profile> {
        prop_oneof![
            Just(Profile::Admin),
            Just(Profile::Management),
            Just(Profile::Consult),
        ]
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(24))]

        #[test]
        fn created_user_logs_in_with_its_profile(
            name in "[a-z][a-z0-9]{0,11}",
            password in "[A-Za-z0-9]{1,16}",
            other in "[A-Za-z0-9]{1,16}",
            profile in profile_strategy(),
        ) {
            let mut service = new_service();
            service.create(&name, &password, profile).unwrap();

            prop_assert_eq!(service.find(&name).map(|u| u.profile()), Some(profile));
            prop_assert_eq!(service.login(&name, &password), Some(profile));
            if other != password {
                prop_assert_eq!(service.login(&name, &other), None);
            }
        }
    }
}
