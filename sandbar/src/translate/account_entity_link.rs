use super::ProtocolViolation;
use crate::api;
use crate::wire;

/// Both embedded references of a link are mandatory on output; an unset
/// oneof tag on either side is a contract break.
pub fn translate_account_entity_link(
    link: wire::AccountEntityLink,
) -> Result<api::AccountEntityLink, ProtocolViolation> {
    let wire::AccountEntityLink {
        account_id,
        entity_id,
        start_date,
        end_date,
    } = link;
    let account_id = account_id.ok_or(ProtocolViolation::LinkMissingAccountId)?;
    let entity_id = entity_id
        .and_then(|param| param.entity_id)
        .ok_or(ProtocolViolation::LinkMissingEntityId)?;
    Ok(api::AccountEntityLink {
        account_id,
        entity_id,
        start_date,
        end_date,
    })
}
