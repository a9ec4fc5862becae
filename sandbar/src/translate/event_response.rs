use super::ProtocolViolation;
use crate::api;
use crate::wire;

/// Dispatches on the response type and lifts the overloaded `sourceId` field
/// into its per-kind meaning.
///
/// For account responses the server packs the identifier into a single
/// `"<bankName>|<accountNumber>"` string; a missing separator is a contract
/// break, and the first separator wins when several occur.
pub fn translate_event_response(
    response: wire::EventResponse,
) -> Result<api::EventResponse, ProtocolViolation> {
    let wire::EventResponse {
        event_response_type,
        sandbar_id,
        source_id,
        generated_id,
        is_successful,
        message,
    } = response;

    let kind = match event_response_type {
        wire::EventResponseType::Entity => api::EventResponseKind::Entity {
            source_entity_id: non_empty(source_id),
            generated_id: non_empty(generated_id),
        },
        wire::EventResponseType::Account => {
            let Some((bank_name, account_number)) = source_id.split_once('|') else {
                return Err(ProtocolViolation::MalformedAccountSourceId(source_id));
            };
            api::EventResponseKind::Account {
                source_account_id: wire::AccountIdentifier {
                    bank_name: bank_name.to_string(),
                    account_number: account_number.to_string(),
                },
            }
        }
        wire::EventResponseType::AccountEntityLink => api::EventResponseKind::AccountEntityLink,
        wire::EventResponseType::Transaction => api::EventResponseKind::Transaction {
            source_transaction_id: source_id,
        },
        wire::EventResponseType::Unspecified => {
            return Err(ProtocolViolation::UnspecifiedEventResponseType);
        }
    };

    Ok(api::EventResponse {
        sandbar_id,
        is_successful,
        message,
        kind,
    })
}

// Proto3 leaves absent string fields as "", which here means "not assigned".
fn non_empty(value: String) -> Option<String> {
    if value.is_empty() { None } else { Some(value) }
}
