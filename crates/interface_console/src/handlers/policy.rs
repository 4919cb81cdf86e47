//! Policy actions

use core_kernel::PolicyNumber;
use domain_policy::{
    parse_flag, AutoDetails, Coverage, HomeDetails, LifeDetails, PolicyKind, Risk, VehicleType,
};

use crate::console::Console;
use crate::error::ActionError;
use crate::handlers::input::{ask_amount, ask_count, ask_date, ask_national_id, ask_premium};
use crate::AppState;

/// Contracts a home policy
pub fn contract_home(state: &mut AppState, console: &mut dyn Console) -> Result<(), ActionError> {
    let holder = ask_national_id(console)?;
    let premium = ask_premium(console)?;
    let details = HomeDetails {
        floor_area: ask_count(console, "Floor area (m2): ", "floor area")?,
        contents_value: ask_amount(console, "Contents value: ", "contents value")?,
        address: console.ask("Address: ")?,
        construction_date: ask_date(console, "Construction date (dd/MM/yyyy): ")?,
    };

    let number = state.policies.contract_home(&holder, premium, details)?;
    console.show(&format!("Home policy {} contracted.", number));
    Ok(())
}

/// Contracts an auto policy
pub fn contract_auto(state: &mut AppState, console: &mut dyn Console) -> Result<(), ActionError> {
    let holder = ask_national_id(console)?;
    let premium = ask_premium(console)?;
    let details = AutoDetails {
        description: console.ask("Vehicle description: ")?,
        fuel: console.ask("Fuel: ")?,
        vehicle_type: VehicleType::parse_lenient(&console.ask("Vehicle type (COCHE, MOTO, CAMION): ")?),
        coverage: Coverage::parse_lenient(&console.ask(
            "Coverage (TERCEROS, TERCEROS_AMPLIADO, FRANQUICIA_200..500, TODO_RIESGO): ",
        )?),
        roadside_assistance: parse_flag(&console.ask("Roadside assistance (true/false): ")?),
        claims: ask_count(console, "Claims filed: ", "claim count")?,
    };

    let number = state.policies.contract_auto(&holder, premium, details)?;
    console.show(&format!("Auto policy {} contracted.", number));
    Ok(())
}

/// Contracts a life policy
pub fn contract_life(state: &mut AppState, console: &mut dyn Console) -> Result<(), ActionError> {
    let holder = ask_national_id(console)?;
    let premium = ask_premium(console)?;
    let details = LifeDetails {
        birth_date: ask_date(console, "Birth date (dd/MM/yyyy): ")?,
        risk: Risk::parse_lenient(&console.ask("Risk (BAJO, MEDIO, ALTO): ")?),
        indemnity: ask_amount(console, "Indemnity: ", "indemnity")?,
    };

    let number = state.policies.contract_life(&holder, premium, details)?;
    console.show(&format!("Life policy {} contracted.", number));
    Ok(())
}

/// Deletes a policy by number
pub fn delete_policy(state: &mut AppState, console: &mut dyn Console) -> Result<(), ActionError> {
    let answer = console.ask("Policy number: ")?;
    let number: PolicyNumber = answer
        .parse()
        .map_err(|_| ActionError::parse("policy number", &answer))?;

    state.policies.delete(number)?;
    console.show(&format!("Policy {} deleted.", number));
    Ok(())
}

/// Lists every policy, or those of one variant
pub fn list_policies(
    state: &mut AppState,
    kind: Option<PolicyKind>,
    console: &mut dyn Console,
) -> Result<(), ActionError> {
    let policies: Vec<String> = match kind {
        Some(kind) => state
            .policies
            .list_by_kind(kind)
            .into_iter()
            .map(ToString::to_string)
            .collect(),
        None => state.policies.list_all().iter().map(ToString::to_string).collect(),
    };

    if policies.is_empty() {
        console.show("No policies found.");
    }
    for policy in &policies {
        console.show(policy);
    }
    Ok(())
}
