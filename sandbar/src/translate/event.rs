use super::entity::{complete, create_complete};
use super::{
    ProtocolViolation, translate_account, translate_account_entity_link, translate_transaction,
};
use crate::api;
use crate::wire;

/// Lifts a wire event back into the typed [`api::Event`] shape.
///
/// Fails when the event is absent, when its payload oneof is unset, and when
/// a complete (`incomplete = false`) event does not satisfy the completeness
/// class its operation type demands.
pub fn translate_event(event: Option<wire::Event>) -> Result<api::Event, ProtocolViolation> {
    let event = event.ok_or(ProtocolViolation::MissingEvent)?;
    let wire::Event {
        event_type,
        incomplete,
        payload,
    } = event;
    let payload = payload.ok_or(ProtocolViolation::EmptyEventPayload)?;

    if incomplete {
        let payload = translate_payload(payload, Ok)?;
        return Ok(api::Event::Incomplete {
            event_type,
            payload,
        });
    }

    match event_type {
        wire::EventType::Create => {
            let payload = translate_payload(payload, |entity| {
                create_complete(entity).map_err(|_| ProtocolViolation::IncompleteEntityPayload)
            })?;
            Ok(api::Event::Create(payload))
        }
        wire::EventType::Update => {
            let payload = translate_payload(payload, |entity| {
                complete(entity).map_err(|_| ProtocolViolation::IncompleteEntityPayload)
            })?;
            Ok(api::Event::Update(payload))
        }
        wire::EventType::Unspecified => Err(ProtocolViolation::UnspecifiedEventType),
    }
}

// The account, link and transaction arms are the same for every operation
// type; only the entity completeness check varies.
fn translate_payload<E>(
    payload: wire::EventPayload,
    entity: impl FnOnce(wire::Entity) -> Result<E, ProtocolViolation>,
) -> Result<api::EventPayload<E>, ProtocolViolation> {
    match payload {
        wire::EventPayload::Entity(wire_entity) => Ok(api::EventPayload::Entity(entity(
            wire_entity,
        )?)),
        wire::EventPayload::Account(account) => {
            Ok(api::EventPayload::Account(translate_account(account)?))
        }
        wire::EventPayload::AccountEntityLink(link) => Ok(api::EventPayload::AccountEntityLink(
            translate_account_entity_link(link)?,
        )),
        wire::EventPayload::Transaction(transaction) => Ok(api::EventPayload::Transaction(
            translate_transaction(transaction)?,
        )),
    }
}
