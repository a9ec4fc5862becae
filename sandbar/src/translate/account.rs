use super::ProtocolViolation;
use crate::api;
use crate::wire;

/// The account identifier is mandatory on output; an account without one is
/// not a valid API object.
pub fn translate_account(account: wire::Account) -> Result<api::Account, ProtocolViolation> {
    let wire::Account {
        account_identifier,
        account_type,
    } = account;
    let account_identifier =
        account_identifier.ok_or(ProtocolViolation::AccountMissingIdentifier)?;
    Ok(api::Account {
        account_identifier,
        account_type,
    })
}
