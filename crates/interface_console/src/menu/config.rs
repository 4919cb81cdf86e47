//! Menu tables per profile
//!
//! Each profile gets a list of levels; level 0 is the main menu. An option
//! either opens another level or names an action. `Exit` leaves the current
//! level (it is the "Back" of every sub-menu).

use domain_policy::PolicyKind;
use domain_user::Profile;

/// What choosing a menu option does
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    /// Enter the level at this index
    Open(usize),
    /// Leave the current level
    Exit,
    NewUser,
    DeleteUser,
    ChangePassword,
    ListUsers,
    ContractHome,
    ContractAuto,
    ContractLife,
    DeletePolicy,
    ListPolicies,
    ListPoliciesOf(PolicyKind),
}

/// One numbered entry of a menu level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuOption {
    pub label: &'static str,
    pub action: MenuAction,
}

/// A screen of options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuLevel {
    pub title: &'static str,
    pub options: &'static [MenuOption],
}

const fn option(label: &'static str, action: MenuAction) -> MenuOption {
    MenuOption { label, action }
}

const CONTRACT_LEVEL: MenuLevel = MenuLevel {
    title: "Contract policy",
    options: &[
        option("Home", MenuAction::ContractHome),
        option("Auto", MenuAction::ContractAuto),
        option("Life", MenuAction::ContractLife),
        option("Back", MenuAction::Exit),
    ],
};

const QUERY_LEVEL: MenuLevel = MenuLevel {
    title: "Query policies",
    options: &[
        option("All", MenuAction::ListPolicies),
        option("Home", MenuAction::ListPoliciesOf(PolicyKind::Home)),
        option("Auto", MenuAction::ListPoliciesOf(PolicyKind::Auto)),
        option("Life", MenuAction::ListPoliciesOf(PolicyKind::Life)),
        option("Back", MenuAction::Exit),
    ],
};

static ADMIN_MENU: [MenuLevel; 5] = [
    MenuLevel {
        title: "Main menu",
        options: &[
            option("Users", MenuAction::Open(1)),
            option("Policies", MenuAction::Open(2)),
            option("Exit", MenuAction::Exit),
        ],
    },
    MenuLevel {
        title: "Users",
        options: &[
            option("New", MenuAction::NewUser),
            option("Delete", MenuAction::DeleteUser),
            option("Change password", MenuAction::ChangePassword),
            option("Query", MenuAction::ListUsers),
            option("Back", MenuAction::Exit),
        ],
    },
    MenuLevel {
        title: "Policies",
        options: &[
            option("Contract", MenuAction::Open(3)),
            option("Delete", MenuAction::DeletePolicy),
            option("Query", MenuAction::Open(4)),
            option("Back", MenuAction::Exit),
        ],
    },
    CONTRACT_LEVEL,
    QUERY_LEVEL,
];

static MANAGEMENT_MENU: [MenuLevel; 4] = [
    MenuLevel {
        title: "Main menu",
        options: &[
            option("Policies", MenuAction::Open(1)),
            option("Exit", MenuAction::Exit),
        ],
    },
    MenuLevel {
        title: "Policies",
        options: &[
            option("Contract", MenuAction::Open(2)),
            option("Delete", MenuAction::DeletePolicy),
            option("Query", MenuAction::Open(3)),
            option("Back", MenuAction::Exit),
        ],
    },
    CONTRACT_LEVEL,
    QUERY_LEVEL,
];

static CONSULT_MENU: [MenuLevel; 3] = [
    MenuLevel {
        title: "Main menu",
        options: &[
            option("Policies", MenuAction::Open(1)),
            option("Exit", MenuAction::Exit),
        ],
    },
    MenuLevel {
        title: "Policies",
        options: &[
            option("Query", MenuAction::Open(2)),
            option("Back", MenuAction::Exit),
        ],
    },
    QUERY_LEVEL,
];

/// Returns the menu levels available to `profile`
pub fn menu_for(profile: Profile) -> &'static [MenuLevel] {
    match profile {
        Profile::Admin => &ADMIN_MENU,
        Profile::Management => &MANAGEMENT_MENU,
        Profile::Consult => &CONSULT_MENU,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn actions(profile: Profile) -> Vec<MenuAction> {
        menu_for(profile)
            .iter()
            .flat_map(|level| level.options.iter().map(|option| option.action))
            .collect()
    }

    #[test]
    fn test_open_targets_exist() {
        for profile in Profile::ALL {
            let levels = menu_for(profile);
            for action in actions(profile) {
                if let MenuAction::Open(index) = action {
                    assert!(index > 0 && index < levels.len(), "{:?} opens {}", profile, index);
                }
            }
        }
    }

    #[test]
    fn test_every_level_can_be_left() {
        for profile in Profile::ALL {
            for level in menu_for(profile) {
                assert!(level.options.iter().any(|o| o.action == MenuAction::Exit));
            }
        }
    }

    #[test]
    fn test_role_tables() {
        let consult = actions(Profile::Consult);
        assert!(!consult.contains(&MenuAction::ContractHome));
        assert!(!consult.contains(&MenuAction::DeletePolicy));
        assert!(consult.contains(&MenuAction::ListPolicies));

        let management = actions(Profile::Management);
        assert!(management.contains(&MenuAction::ContractLife));
        assert!(!management.contains(&MenuAction::NewUser));

        let admin = actions(Profile::Admin);
        assert!(admin.contains(&MenuAction::ChangePassword));
        assert!(admin.contains(&MenuAction::ListPoliciesOf(PolicyKind::Auto)));
    }

    #[test]
    fn test_admin_labels() {
        let labels: Vec<&str> = menu_for(Profile::Admin)[1].options.iter().map(|o| o.label).collect();
        assert_eq!(labels, vec!["New", "Delete", "Change password", "Query", "Back"]);
    }
}
