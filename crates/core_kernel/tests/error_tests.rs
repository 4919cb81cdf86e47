//! Tests for core_kernel error types

use core_kernel::error::CoreError;
use core_kernel::security::SecurityError;
use core_kernel::temporal::parse_date;

#[test]
fn test_core_error_from_security_error() {
    let core_error: CoreError = SecurityError::InvalidCost(2).into();
    assert!(matches!(core_error, CoreError::Security(_)));
    assert!(core_error.to_string().contains("Invalid hash cost 2"));
}

#[test]
fn test_invalid_date_display_names_input_and_format() {
    let error = parse_date("31-12-1999").unwrap_err();
    let display = error.to_string();

    assert!(display.contains("31-12-1999"));
    assert!(display.contains("dd/MM/yyyy"));
}
