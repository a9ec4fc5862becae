//! # Public data model
//!
//! The shapes this crate hands to callers, with the API contract expressed in
//! the type system instead of left to runtime checks:
//!
//! * Mandatory-on-output fields are plain values, never `Option`.
//! * Oneofs are real sum types; the unset-tag case does not exist here.
//! * Event completeness is encoded per operation: [`Event::Create`] carries
//!   [`EntityCreate`] payloads, [`Event::Update`] carries [`CompleteEntity`]
//!   payloads, and only [`Event::Incomplete`] admits an arbitrary
//!   [`wire::Entity`].
//!
//! Values of these types are produced per call by [`crate::translate`] and by
//! callers building requests. They are never shared or mutated after
//! construction.

use crate::wire;
use crate::wire::{AccountId, AccountIdentifier, EntityId, EventType};

// ---------------------------------------------------------------------------
// Entities
// ---------------------------------------------------------------------------

/// An entity as returned by the API.
///
/// A partial entity is not an error: the server keeps enriching entities it
/// generated itself, and reports them with required fields still missing.
#[derive(Debug, Clone, PartialEq)]
pub enum Entity {
    /// Fully identified and validated.
    Complete(CompleteEntity),
    /// Still being generated server-side; required fields may be missing.
    Generated(wire::Entity),
}

impl Entity {
    pub fn is_generated(&self) -> bool {
        matches!(self, Entity::Generated(_))
    }
}

/// An entity carrying every field required outside of creation, including the
/// sandbar-assigned id.
#[derive(Debug, Clone, PartialEq)]
pub struct CompleteEntity {
    pub sandbar_entity_id: String,
    pub source_entity_id: String,
    pub name: String,
    pub birth_incorporation_date: String,
    pub relationship_begin_date: Option<String>,
    pub primary_address: Option<wire::Address>,
    pub email: Option<String>,
    pub website_url: Option<String>,
    pub phone_number: Option<String>,
}

/// An entity carrying every field required to create it. The sandbar id does
/// not exist yet at this point.
#[derive(Debug, Clone, PartialEq)]
pub struct EntityCreate {
    pub source_entity_id: String,
    pub name: String,
    pub birth_incorporation_date: String,
    pub relationship_begin_date: Option<String>,
    pub primary_address: Option<wire::Address>,
    pub email: Option<String>,
    pub website_url: Option<String>,
    pub phone_number: Option<String>,
}

impl EntityCreate {
    /// A create payload with only the required fields set.
    pub fn new(
        source_entity_id: impl Into<String>,
        name: impl Into<String>,
        birth_incorporation_date: impl Into<String>,
    ) -> Self {
        Self {
            source_entity_id: source_entity_id.into(),
            name: name.into(),
            birth_incorporation_date: birth_incorporation_date.into(),
            relationship_begin_date: None,
            primary_address: None,
            email: None,
            website_url: None,
            phone_number: None,
        }
    }
}

impl From<CompleteEntity> for wire::Entity {
    fn from(entity: CompleteEntity) -> Self {
        Self {
            sandbar_entity_id: Some(entity.sandbar_entity_id),
            source_entity_id: Some(entity.source_entity_id),
            name: Some(entity.name),
            birth_incorporation_date: Some(entity.birth_incorporation_date),
            relationship_begin_date: entity.relationship_begin_date,
            primary_address: entity.primary_address,
            email: entity.email,
            website_url: entity.website_url,
            phone_number: entity.phone_number,
        }
    }
}

impl From<EntityCreate> for wire::Entity {
    fn from(entity: EntityCreate) -> Self {
        Self {
            sandbar_entity_id: None,
            source_entity_id: Some(entity.source_entity_id),
            name: Some(entity.name),
            birth_incorporation_date: Some(entity.birth_incorporation_date),
            relationship_begin_date: entity.relationship_begin_date,
            primary_address: entity.primary_address,
            email: entity.email,
            website_url: entity.website_url,
            phone_number: entity.phone_number,
        }
    }
}

impl From<Entity> for wire::Entity {
    fn from(entity: Entity) -> Self {
        match entity {
            Entity::Complete(complete) => complete.into(),
            Entity::Generated(partial) => partial,
        }
    }
}

// ---------------------------------------------------------------------------
// Accounts, links, transactions
// ---------------------------------------------------------------------------

/// An account with its mandatory identifier resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    pub account_identifier: AccountIdentifier,
    pub account_type: Option<wire::AccountType>,
}

impl From<Account> for wire::Account {
    fn from(account: Account) -> Self {
        Self {
            account_identifier: Some(account.account_identifier),
            account_type: account.account_type,
        }
    }
}

/// A link between an account and an entity; both references are mandatory.
#[derive(Debug, Clone, PartialEq)]
pub struct AccountEntityLink {
    pub account_id: AccountId,
    pub entity_id: EntityId,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

impl From<AccountEntityLink> for wire::AccountEntityLink {
    fn from(link: AccountEntityLink) -> Self {
        Self {
            account_id: Some(link.account_id),
            entity_id: Some(wire::EntityQueryIdParam {
                entity_id: Some(link.entity_id),
            }),
            start_date: link.start_date,
            end_date: link.end_date,
        }
    }
}

/// A transaction with its mandatory account identifier resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    pub account_identifier: AccountIdentifier,
    pub source_transaction_id: Option<String>,
    pub transaction_amount: Option<f64>,
    pub transaction_currency: Option<String>,
    pub transaction_source_entity_id: Option<String>,
    pub transaction_type: Option<wire::TransactionType>,
    pub transaction_status: Option<wire::TransactionStatus>,
    pub is_credit: Option<bool>,
    pub execute_transaction_date_time: Option<String>,
    pub product_type: Option<wire::ProductType>,
}

impl From<Transaction> for wire::Transaction {
    fn from(transaction: Transaction) -> Self {
        Self {
            account_identifier: Some(transaction.account_identifier),
            source_transaction_id: transaction.source_transaction_id,
            transaction_amount: transaction.transaction_amount,
            transaction_currency: transaction.transaction_currency,
            transaction_source_entity_id: transaction.transaction_source_entity_id,
            transaction_type: transaction.transaction_type,
            transaction_status: transaction.transaction_status,
            is_credit: transaction.is_credit,
            execute_transaction_date_time: transaction.execute_transaction_date_time,
            product_type: transaction.product_type,
        }
    }
}

// ---------------------------------------------------------------------------
// Events
// ---------------------------------------------------------------------------

/// The payload of an [`Event`], generic over the entity shape the operation
/// demands.
#[derive(Debug, Clone, PartialEq)]
pub enum EventPayload<E> {
    Entity(E),
    Account(Account),
    AccountEntityLink(AccountEntityLink),
    Transaction(Transaction),
}

impl<E: Into<wire::Entity>> From<EventPayload<E>> for wire::EventPayload {
    fn from(payload: EventPayload<E>) -> Self {
        match payload {
            EventPayload::Entity(entity) => wire::EventPayload::Entity(entity.into()),
            EventPayload::Account(account) => wire::EventPayload::Account(account.into()),
            EventPayload::AccountEntityLink(link) => {
                wire::EventPayload::AccountEntityLink(link.into())
            }
            EventPayload::Transaction(transaction) => {
                wire::EventPayload::Transaction(transaction.into())
            }
        }
    }
}

/// An ingestion event.
///
/// The completeness invariant is part of the shape: a complete create event
/// can only carry an [`EntityCreate`], a complete non-create event can only
/// carry a [`CompleteEntity`], and an incomplete event carries whatever the
/// source system has so far.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// A complete `CREATE` event.
    Create(EventPayload<EntityCreate>),
    /// A complete `UPDATE` event.
    Update(EventPayload<CompleteEntity>),
    /// An event flagged `incomplete`; no completeness constraint applies.
    Incomplete {
        event_type: EventType,
        payload: EventPayload<wire::Entity>,
    },
}

impl From<Event> for wire::Event {
    fn from(event: Event) -> Self {
        match event {
            Event::Create(payload) => Self {
                event_type: EventType::Create,
                incomplete: false,
                payload: Some(payload.into()),
            },
            Event::Update(payload) => Self {
                event_type: EventType::Update,
                incomplete: false,
                payload: Some(payload.into()),
            },
            Event::Incomplete {
                event_type,
                payload,
            } => Self {
                event_type,
                incomplete: true,
                payload: Some(payload.into()),
            },
        }
    }
}

// ---------------------------------------------------------------------------
// Event responses
// ---------------------------------------------------------------------------

/// The per-kind part of an [`EventResponse`].
#[derive(Debug, Clone, PartialEq)]
pub enum EventResponseKind {
    /// Ids vary independently: a client-supplied entity echoes its source id,
    /// a server-generated one carries the generated id.
    Entity {
        source_entity_id: Option<String>,
        generated_id: Option<String>,
    },
    Account {
        source_account_id: AccountIdentifier,
    },
    AccountEntityLink,
    Transaction {
        source_transaction_id: String,
    },
}

/// The server's answer to a single submitted event.
#[derive(Debug, Clone, PartialEq)]
pub struct EventResponse {
    pub sandbar_id: String,
    pub is_successful: bool,
    pub message: String,
    pub kind: EventResponseKind,
}

// ---------------------------------------------------------------------------
// Investigations
// ---------------------------------------------------------------------------

/// A non-empty opaque reference to the object an investigation or rule output
/// is about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvestigationTarget {
    pub sandbar_target_id: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RuleOutput {
    pub investigation_target: InvestigationTarget,
    pub rule_id: String,
    pub triggered: bool,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Alert {
    pub investigation_target: InvestigationTarget,
    pub outputs: Vec<RuleOutput>,
    pub alert_id: String,
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Investigation {
    pub sandbar_investigation_id: String,
    pub target: Vec<InvestigationTarget>,
    pub alerts: Vec<Alert>,
    pub created_at: Option<String>,
}

// ---------------------------------------------------------------------------
// Call results
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct SubmitEventsResponse {
    pub message: String,
    /// One response per submitted event, in submission order.
    pub responses: Vec<EventResponse>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SubmitEventSyncResponse {
    pub message: String,
    /// Rule outputs produced while processing the submitted event.
    pub rule_outputs: Vec<RuleOutput>,
    /// The submitted event as the server echoed it back.
    pub request: Event,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GetEntitiesResponse {
    pub message: String,
    pub entities: Vec<Entity>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GetAccountsResponse {
    pub message: String,
    pub accounts: Vec<Account>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GetTransactionsForEntityResponse {
    pub message: String,
    pub transactions: Vec<Transaction>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GetAllInvestigationsResponse {
    pub message: String,
    pub investigations: Vec<Investigation>,
}

/// Result of [`crate::Client::create_unit_deposit_account`]: the operation
/// atomically creates the account and its entity link, so both sub-responses
/// are mandatory.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateUnitDepositAccountResponse {
    pub message: String,
    pub account_response: EventResponse,
    pub account_entity_link_response: EventResponse,
}
