use super::ProtocolViolation;
use crate::api;
use crate::wire;

/// Like accounts, transactions must come back with their account identifier
/// resolved.
pub fn translate_transaction(
    transaction: wire::Transaction,
) -> Result<api::Transaction, ProtocolViolation> {
    let wire::Transaction {
        account_identifier,
        source_transaction_id,
        transaction_amount,
        transaction_currency,
        transaction_source_entity_id,
        transaction_type,
        transaction_status,
        is_credit,
        execute_transaction_date_time,
        product_type,
    } = transaction;
    let account_identifier =
        account_identifier.ok_or(ProtocolViolation::TransactionMissingIdentifier)?;
    Ok(api::Transaction {
        account_identifier,
        source_transaction_id,
        transaction_amount,
        transaction_currency,
        transaction_source_entity_id,
        transaction_type,
        transaction_status,
        is_credit,
        execute_transaction_date_time,
        product_type,
    })
}
