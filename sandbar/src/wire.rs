//! # Wire schema
//!
//! Serde mirror of the sandbar gRPC-gateway JSON contract. These types follow
//! the protobuf JSON mapping exactly:
//!
//! * field names are camelCase,
//! * unset proto3 scalars may be omitted on the wire (`#[serde(default)]`),
//! * oneofs are flattened into the parent message, keyed by the name of the
//!   member that is set.
//!
//! Oneof-carrying messages ([`Event`], [`AccountEntityLink`],
//! [`EntityQueryIdParam`], [`AccountQueryIdParam`]) round-trip through a
//! private repr struct so that the unset-tag case decodes to `None` instead of
//! failing, while a response that sets more than one member of a oneof is
//! rejected as a decode error.
//!
//! Everything here is a plain value type; no invariant beyond JSON shape is
//! enforced at this layer. The [`crate::translate`] functions lift these
//! shapes into the public model and enforce the API contract proper.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Raised while decoding when a response sets more than one member of a oneof.
#[derive(Debug)]
pub struct OneofConflict(&'static str);

impl fmt::Display for OneofConflict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "more than one member of the '{}' oneof is set", self.0)
    }
}

// ---------------------------------------------------------------------------
// Enumerations
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EventType {
    #[default]
    Unspecified,
    Create,
    Update,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EventResponseType {
    #[default]
    Unspecified,
    Entity,
    Account,
    AccountEntityLink,
    Transaction,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AccountType {
    #[default]
    Unspecified,
    Checking,
    Savings,
    CreditCard,
    Loan,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionType {
    #[default]
    Unspecified,
    Deposit,
    Withdrawal,
    Transfer,
    Payment,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionStatus {
    #[default]
    Unspecified,
    Pending,
    Completed,
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProductType {
    #[default]
    Unspecified,
    DebitCard,
    CreditCard,
    Ach,
    Wire,
    Check,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AddressType {
    #[default]
    Unspecified,
    Residential,
    Business,
    Mailing,
}

// ---------------------------------------------------------------------------
// Core messages
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Address {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub street_address_line1: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub street_address_line2: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state_or_province: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zip: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_type: Option<AddressType>,
}

/// An entity as the gateway reports it: every field optional, completeness
/// only checkable at runtime.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Entity {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sandbar_entity_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_entity_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birth_incorporation_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relationship_begin_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_address: Option<Address>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
}

/// The bank name / account number pair that identifies an account at its
/// source bank.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AccountIdentifier {
    pub bank_name: String,
    pub account_number: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Account {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_identifier: Option<AccountIdentifier>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_type: Option<AccountType>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Transaction {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_identifier: Option<AccountIdentifier>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_transaction_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_amount: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_source_entity_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_type: Option<TransactionType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_status: Option<TransactionStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_credit: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub execute_transaction_date_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_type: Option<ProductType>,
}

// ---------------------------------------------------------------------------
// Oneofs and the messages that carry them
// ---------------------------------------------------------------------------

/// The `accountId` oneof: either the sandbar-assigned id or the
/// source-bank pair.
#[derive(Debug, Clone, PartialEq)]
pub enum AccountId {
    SandbarAccountId(String),
    SourceAccountIdentifier(AccountIdentifier),
}

/// The `entityId` oneof: either the sandbar-assigned id or the id the source
/// system supplied at creation.
#[derive(Debug, Clone, PartialEq)]
pub enum EntityId {
    SandbarEntityId(String),
    SourceEntityId(String),
}

/// The `payload` oneof of an [`Event`].
#[derive(Debug, Clone, PartialEq)]
pub enum EventPayload {
    Entity(Entity),
    Account(Account),
    AccountEntityLink(AccountEntityLink),
    Transaction(Transaction),
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(try_from = "EntityQueryIdParamRepr", into = "EntityQueryIdParamRepr")]
pub struct EntityQueryIdParam {
    pub entity_id: Option<EntityId>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct EntityQueryIdParamRepr {
    #[serde(skip_serializing_if = "Option::is_none")]
    sandbar_entity_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    source_entity_id: Option<String>,
}

impl TryFrom<EntityQueryIdParamRepr> for EntityQueryIdParam {
    type Error = OneofConflict;

    fn try_from(repr: EntityQueryIdParamRepr) -> Result<Self, Self::Error> {
        let entity_id = match (repr.sandbar_entity_id, repr.source_entity_id) {
            (Some(id), None) => Some(EntityId::SandbarEntityId(id)),
            (None, Some(id)) => Some(EntityId::SourceEntityId(id)),
            (None, None) => None,
            (Some(_), Some(_)) => return Err(OneofConflict("entityId")),
        };
        Ok(Self { entity_id })
    }
}

impl From<EntityQueryIdParam> for EntityQueryIdParamRepr {
    fn from(param: EntityQueryIdParam) -> Self {
        let mut repr = Self::default();
        match param.entity_id {
            Some(EntityId::SandbarEntityId(id)) => repr.sandbar_entity_id = Some(id),
            Some(EntityId::SourceEntityId(id)) => repr.source_entity_id = Some(id),
            None => {}
        }
        repr
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(try_from = "AccountQueryIdParamRepr", into = "AccountQueryIdParamRepr")]
pub struct AccountQueryIdParam {
    pub id: Option<AccountId>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct AccountQueryIdParamRepr {
    #[serde(skip_serializing_if = "Option::is_none")]
    sandbar_account_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    source_account_identifier: Option<AccountIdentifier>,
}

impl TryFrom<AccountQueryIdParamRepr> for AccountQueryIdParam {
    type Error = OneofConflict;

    fn try_from(repr: AccountQueryIdParamRepr) -> Result<Self, Self::Error> {
        let id = match (repr.sandbar_account_id, repr.source_account_identifier) {
            (Some(id), None) => Some(AccountId::SandbarAccountId(id)),
            (None, Some(identifier)) => Some(AccountId::SourceAccountIdentifier(identifier)),
            (None, None) => None,
            (Some(_), Some(_)) => return Err(OneofConflict("id")),
        };
        Ok(Self { id })
    }
}

impl From<AccountQueryIdParam> for AccountQueryIdParamRepr {
    fn from(param: AccountQueryIdParam) -> Self {
        let mut repr = Self::default();
        match param.id {
            Some(AccountId::SandbarAccountId(id)) => repr.sandbar_account_id = Some(id),
            Some(AccountId::SourceAccountIdentifier(identifier)) => {
                repr.source_account_identifier = Some(identifier)
            }
            None => {}
        }
        repr
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(try_from = "AccountEntityLinkRepr", into = "AccountEntityLinkRepr")]
pub struct AccountEntityLink {
    pub account_id: Option<AccountId>,
    pub entity_id: Option<EntityQueryIdParam>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct AccountEntityLinkRepr {
    #[serde(skip_serializing_if = "Option::is_none")]
    sandbar_account_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    source_account_identifier: Option<AccountIdentifier>,
    #[serde(skip_serializing_if = "Option::is_none")]
    entity_id: Option<EntityQueryIdParam>,
    #[serde(skip_serializing_if = "Option::is_none")]
    start_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    end_date: Option<String>,
}

impl TryFrom<AccountEntityLinkRepr> for AccountEntityLink {
    type Error = OneofConflict;

    fn try_from(repr: AccountEntityLinkRepr) -> Result<Self, Self::Error> {
        let account_id = match (repr.sandbar_account_id, repr.source_account_identifier) {
            (Some(id), None) => Some(AccountId::SandbarAccountId(id)),
            (None, Some(identifier)) => Some(AccountId::SourceAccountIdentifier(identifier)),
            (None, None) => None,
            (Some(_), Some(_)) => return Err(OneofConflict("accountId")),
        };
        Ok(Self {
            account_id,
            entity_id: repr.entity_id,
            start_date: repr.start_date,
            end_date: repr.end_date,
        })
    }
}

impl From<AccountEntityLink> for AccountEntityLinkRepr {
    fn from(link: AccountEntityLink) -> Self {
        let mut repr = Self {
            entity_id: link.entity_id,
            start_date: link.start_date,
            end_date: link.end_date,
            ..Self::default()
        };
        match link.account_id {
            Some(AccountId::SandbarAccountId(id)) => repr.sandbar_account_id = Some(id),
            Some(AccountId::SourceAccountIdentifier(identifier)) => {
                repr.source_account_identifier = Some(identifier)
            }
            None => {}
        }
        repr
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(try_from = "EventRepr", into = "EventRepr")]
pub struct Event {
    pub event_type: EventType,
    pub incomplete: bool,
    pub payload: Option<EventPayload>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct EventRepr {
    #[serde(rename = "type")]
    event_type: EventType,
    incomplete: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    entity: Option<Entity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    account: Option<Account>,
    #[serde(skip_serializing_if = "Option::is_none")]
    account_entity_link: Option<AccountEntityLink>,
    #[serde(skip_serializing_if = "Option::is_none")]
    transaction: Option<Transaction>,
}

impl TryFrom<EventRepr> for Event {
    type Error = OneofConflict;

    fn try_from(repr: EventRepr) -> Result<Self, Self::Error> {
        let payload = match (
            repr.entity,
            repr.account,
            repr.account_entity_link,
            repr.transaction,
        ) {
            (Some(entity), None, None, None) => Some(EventPayload::Entity(entity)),
            (None, Some(account), None, None) => Some(EventPayload::Account(account)),
            (None, None, Some(link), None) => Some(EventPayload::AccountEntityLink(link)),
            (None, None, None, Some(transaction)) => Some(EventPayload::Transaction(transaction)),
            (None, None, None, None) => None,
            _ => return Err(OneofConflict("payload")),
        };
        Ok(Self {
            event_type: repr.event_type,
            incomplete: repr.incomplete,
            payload,
        })
    }
}

impl From<Event> for EventRepr {
    fn from(event: Event) -> Self {
        let mut repr = Self {
            event_type: event.event_type,
            incomplete: event.incomplete,
            ..Self::default()
        };
        match event.payload {
            Some(EventPayload::Entity(entity)) => repr.entity = Some(entity),
            Some(EventPayload::Account(account)) => repr.account = Some(account),
            Some(EventPayload::AccountEntityLink(link)) => repr.account_entity_link = Some(link),
            Some(EventPayload::Transaction(transaction)) => repr.transaction = Some(transaction),
            None => {}
        }
        repr
    }
}

// ---------------------------------------------------------------------------
// Event responses
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EventResponse {
    pub event_response_type: EventResponseType,
    pub sandbar_id: String,
    pub source_id: String,
    pub generated_id: String,
    pub is_successful: bool,
    pub message: String,
}

// ---------------------------------------------------------------------------
// Investigations
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InvestigationTarget {
    pub sandbar_target_id: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RuleOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub investigation_target: Option<InvestigationTarget>,
    pub rule_id: String,
    pub triggered: bool,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Alert {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub investigation_target: Option<InvestigationTarget>,
    pub outputs: Vec<RuleOutput>,
    pub alert_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Investigation {
    pub sandbar_investigation_id: String,
    pub target: Vec<InvestigationTarget>,
    pub alerts: Vec<Alert>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

// ---------------------------------------------------------------------------
// Request / response envelopes
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SubmitEventsRequest {
    pub events: Vec<Event>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SubmitEventsResponse {
    pub message: String,
    pub responses: Vec<EventResponse>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SubmitEventSyncRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event: Option<Event>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SubmitEventSyncResponse {
    pub message: String,
    pub rule_outputs: Vec<RuleOutput>,
    /// Echo of the submitted event, as processed by the server.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request: Option<Event>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EntityQuery {
    pub ids: Vec<EntityQueryIdParam>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GetEntityRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request: Option<EntityQuery>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GetEntityResponse {
    pub message: String,
    pub entity: Vec<Entity>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GetAccountRequest {
    pub id: Vec<AccountQueryIdParam>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GetAccountResponse {
    pub message: String,
    pub accounts: Vec<Account>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GetTransactionsForEntityRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<EntityQueryIdParam>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GetTransactionsForEntityResponse {
    pub message: String,
    pub transactions: Vec<Transaction>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GetAllInvestigationsOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_closed: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GetAllInvestigationsRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<GetAllInvestigationsOptions>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GetAllInvestigationsResponse {
    pub message: String,
    pub investigations: Vec<Investigation>,
}

// ---------------------------------------------------------------------------
// Unit banking-partner passthrough
// ---------------------------------------------------------------------------

/// A JSON:API style resource as the Unit platform models them. `attributes`
/// and `relationships` are passed through opaquely.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UnitResource {
    #[serde(rename = "type")]
    pub resource_type: String,
    pub id: String,
    #[serde(skip_serializing_if = "serde_json::Value::is_null")]
    pub attributes: serde_json::Value,
    #[serde(skip_serializing_if = "serde_json::Value::is_null")]
    pub relationships: serde_json::Value,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UnitCustomerRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer: Option<UnitResource>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UnitCustomerResponse {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer: Option<UnitResource>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UnitDepositAccountRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deposit_account: Option<UnitResource>,
}

/// Creating a deposit account atomically produces both an account and the
/// link between that account and its owning entity, so the response carries
/// one sub-response for each.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateUnitDepositAccountResponse {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_response: Option<EventResponse>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_entity_link_response: Option<EventResponse>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UnitDepositAccountResponse {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deposit_account: Option<UnitResource>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UnitPaymentRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment: Option<UnitResource>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UnitPaymentResponse {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment: Option<UnitResource>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UnitTransactionRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction: Option<UnitResource>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UnitTransactionResponse {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction: Option<UnitResource>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UnitCheckDepositRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub check_deposit: Option<UnitResource>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UnitCheckDepositResponse {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub check_deposit: Option<UnitResource>,
}
