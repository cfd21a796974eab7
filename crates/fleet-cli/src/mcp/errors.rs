//! Error handling utilities for MCP server

use fleet_core::FleetError;
use rmcp::ErrorData;

/// Converts a fleet error into an MCP error.
///
/// Caller mistakes (bad input, unknown ids, conflicts, illegal transitions)
/// become `invalid_params` so the client can correct the call; storage and
/// configuration failures become `internal_error`.
pub fn to_mcp_error(message: &str, error: &FleetError) -> ErrorData {
    let text = format!("{message}: {error}");
    if error.is_client_error() {
        ErrorData::invalid_params(text, None)
    } else {
        ErrorData::internal_error(text, None)
    }
}
