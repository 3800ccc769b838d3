//! JSON emission for compliance decisions

use anyhow::Context;
use marketgate_utils::canonicalization::emit_jcs;

use crate::types::ComplianceDecision;

/// Emit a compliance decision as canonical JSON using JCS (RFC 8785)
pub fn emit_compliance_json(decision: &ComplianceDecision) -> anyhow::Result<String> {
    emit_jcs(decision).context("Failed to emit compliance JSON")
}
