//! # Translators
//!
//! Pure mappings from [`crate::wire`] shapes to the [`crate::api`] model.
//! One function per entity kind; none of them performs I/O.
//!
//! Every failure here is a [`ProtocolViolation`]: the server answered with
//! structurally valid JSON that breaks a documented invariant of the API
//! contract. Violations are never downgraded to a default value; they
//! propagate untouched to the original caller. The single documented
//! exception is entity completeness, where a missing required field is a
//! legitimate "still being generated" state and degrades to
//! [`crate::api::Entity::Generated`] instead of failing.

mod account;
mod account_entity_link;
mod entity;
mod event;
mod event_response;
mod investigation;
mod rule_output;
mod transaction;

pub use account::translate_account;
pub use account_entity_link::translate_account_entity_link;
pub use entity::translate_entity;
pub use event::translate_event;
pub use event_response::translate_event_response;
pub use investigation::{translate_alert, translate_investigation};
pub use rule_output::translate_rule_output;
pub use transaction::translate_transaction;

use crate::api;
use crate::wire;

/// A decoded response that violates the API contract between client and
/// server.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProtocolViolation {
    #[error("Server returned an account with no account identifier")]
    AccountMissingIdentifier,

    #[error("Server returned a transaction with no account identifier")]
    TransactionMissingIdentifier,

    #[error("Server returned an account entity link with no account id")]
    LinkMissingAccountId,

    #[error("Server returned an account entity link with no entity id")]
    LinkMissingEntityId,

    #[error("Server returned no event where one was required")]
    MissingEvent,

    #[error("Server returned an event with no payload")]
    EmptyEventPayload,

    #[error("Server returned a complete event with an unspecified operation type")]
    UnspecifiedEventType,

    #[error("Server returned a complete event whose entity payload is missing required fields")]
    IncompleteEntityPayload,

    #[error("Server returned an event response with an unspecified type")]
    UnspecifiedEventResponseType,

    #[error("Server returned an account source id without a '|' separator: '{0}'")]
    MalformedAccountSourceId(String),

    #[error("Server returned a response without an investigation target")]
    MissingInvestigationTarget,

    #[error("Server returned an investigation target with an empty id")]
    EmptyInvestigationTargetId,

    #[error("Server response omitted the expected '{0}' sub-response")]
    MissingSubResponse(&'static str),
}

/// Shared by the investigation and rule-output translators: the target must
/// be present and its id non-empty after trimming.
fn translate_target(
    target: Option<wire::InvestigationTarget>,
) -> Result<api::InvestigationTarget, ProtocolViolation> {
    let target = target.ok_or(ProtocolViolation::MissingInvestigationTarget)?;
    if target.sandbar_target_id.trim().is_empty() {
        return Err(ProtocolViolation::EmptyInvestigationTargetId);
    }
    Ok(api::InvestigationTarget {
        sandbar_target_id: target.sandbar_target_id,
    })
}
