//! User actions

use domain_user::Profile;

use crate::console::Console;
use crate::error::ActionError;
use crate::{AppState, Session};

/// Creates a user with a strictly parsed profile
pub fn new_user(state: &mut AppState, console: &mut dyn Console) -> Result<(), ActionError> {
    let name = console.ask("Name: ")?;
    let password = console.ask_hidden("Password: ")?;
    let profile: Profile = console.ask("Profile (ADMIN, GESTION, CONSULTA): ")?.parse()?;

    state.users.create(&name, &password, profile)?;
    console.show(&format!("User '{}' created with profile {}.", name, profile));
    Ok(())
}

/// Deletes a user by name
pub fn delete_user(state: &mut AppState, console: &mut dyn Console) -> Result<(), ActionError> {
    let name = console.ask("Name of the user to delete: ")?;
    state.users.delete(&name)?;
    console.show(&format!("User '{}' deleted.", name));
    Ok(())
}

/// Changes the password of the logged-in user
pub fn change_password(
    state: &mut AppState,
    session: &Session,
    console: &mut dyn Console,
) -> Result<(), ActionError> {
    let password = console.ask_hidden("New password: ")?;
    state.users.change_password(&session.name, &password)?;
    console.show("Password changed.");
    Ok(())
}

/// Lists every user, or those of one strictly parsed profile
pub fn list_users(state: &mut AppState, console: &mut dyn Console) -> Result<(), ActionError> {
    let users: Vec<String> = if console.confirm("List every user?")? {
        state.users.list_all().iter().map(ToString::to_string).collect()
    } else {
        let profile: Profile = console.ask("Profile (ADMIN, GESTION, CONSULTA): ")?.parse()?;
        state
            .users
            .list_by_profile(profile)
            .into_iter()
            .map(ToString::to_string)
            .collect()
    };

    if users.is_empty() {
        console.show("No users found.");
    }
    for user in &users {
        console.show(user);
    }
    Ok(())
}
