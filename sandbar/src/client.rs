//! # Client facade
//!
//! One async method per RPC, each following the same shape: build the wire
//! input, encode it through the method's input codec, POST it, decode the
//! response through the output codec, and run the relevant translators on the
//! result before handing it back.
//!
//! The client holds no per-call state; the base URL, credentials and method
//! table are immutable after construction, so a single client can serve
//! concurrent calls without locking.

use crate::api::{
    Account, CreateUnitDepositAccountResponse, Event, GetAccountsResponse,
    GetAllInvestigationsResponse, GetEntitiesResponse, GetTransactionsForEntityResponse,
    SubmitEventSyncResponse, SubmitEventsResponse,
};
use crate::method::{Method, MethodTable};
use crate::translate::{
    ProtocolViolation, translate_account, translate_entity, translate_event,
    translate_event_response, translate_investigation, translate_rule_output,
    translate_transaction,
};
use crate::transport::{BasicAuth, HttpTransport, TransportError};
use crate::wire;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

/// Invalid construction arguments. Raised synchronously, before any network
/// I/O.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("Exactly one of `subdomain` or `url` must be set, found both")]
    AmbiguousHost,

    #[error("Exactly one of `subdomain` or `url` must be set, found neither")]
    MissingHost,

    #[error("`username` and `password` must be set together")]
    PartialCredentials,

    #[error("Invalid base URL '{url}': '{source}'")]
    InvalidBaseUrl {
        url: String,
        source: url::ParseError,
    },
}

/// Errors a call can surface: transport failures, codec failures, and
/// protocol violations. Translator failures are never intercepted or
/// wrapped beyond this enum; they reach the original caller as raised.
#[derive(Debug, thiserror::Error)]
pub enum CallError {
    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error("Failed to encode the request body: '{0}'")]
    Encode(#[source] serde_json::Error),

    #[error("Failed to decode the response body: '{0}'")]
    Decode(#[source] serde_json::Error),

    #[error(transparent)]
    Protocol(#[from] ProtocolViolation),
}

/// Where the API lives: a sandbar-hosted subdomain or a verbatim base URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostSpecifier {
    /// Resolves to `https://<subdomain>.sandbar.ai`.
    Subdomain(String),
    /// Used verbatim as the base URL.
    Url(String),
}

/// Construction options. Exactly one of `subdomain`/`url` must be set, and
/// `username`/`password` go together or not at all.
#[derive(Debug, Clone, Default)]
pub struct ClientOptions {
    pub subdomain: Option<String>,
    pub url: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
}

/// Client for the sandbar financial-compliance data API.
#[derive(Debug, Clone)]
pub struct Client {
    transport: HttpTransport,
    methods: MethodTable,
}

impl Client {
    /// Builds a client from loose options, validating the host/credential
    /// combinations.
    pub fn new(options: ClientOptions) -> Result<Self, BuildError> {
        let host = match (options.subdomain, options.url) {
            (Some(subdomain), None) => HostSpecifier::Subdomain(subdomain),
            (None, Some(url)) => HostSpecifier::Url(url),
            (Some(_), Some(_)) => return Err(BuildError::AmbiguousHost),
            (None, None) => return Err(BuildError::MissingHost),
        };
        let auth = match (options.username, options.password) {
            (Some(username), Some(password)) => Some(BasicAuth { username, password }),
            (None, None) => None,
            _ => return Err(BuildError::PartialCredentials),
        };
        Self::with_host(host, auth)
    }

    /// Builds a client from an already-resolved host specifier.
    pub fn with_host(host: HostSpecifier, auth: Option<BasicAuth>) -> Result<Self, BuildError> {
        let raw = match host {
            HostSpecifier::Subdomain(subdomain) => format!("https://{subdomain}.sandbar.ai"),
            HostSpecifier::Url(url) => url,
        };
        let base = Url::parse(&raw).map_err(|source| BuildError::InvalidBaseUrl {
            url: raw,
            source,
        })?;
        Ok(Self {
            transport: HttpTransport::new(base, auth),
            methods: MethodTable::new(),
        })
    }

    /// The resolved base URL all paths are joined against.
    pub fn base_url(&self) -> &Url {
        self.transport.base()
    }

    /// Submits a batch of events. The response carries one
    /// [`crate::api::EventResponse`] per event, in submission order; order
    /// preservation is the server's contract and is not re-verified here.
    pub async fn submit_events(
        &self,
        events: Vec<Event>,
    ) -> Result<SubmitEventsResponse, CallError> {
        let request = wire::SubmitEventsRequest {
            events: events.into_iter().map(Into::into).collect(),
        };
        let response = self.call(&self.methods.submit_events, &request).await?;
        let responses = response
            .responses
            .into_iter()
            .map(translate_event_response)
            .collect::<Result<_, _>>()?;
        Ok(SubmitEventsResponse {
            message: response.message,
            responses,
        })
    }

    /// Submits a single event and waits for the rules it triggers. The
    /// response echoes the processed event back along with the rule outputs.
    pub async fn submit_event_sync(
        &self,
        event: Event,
    ) -> Result<SubmitEventSyncResponse, CallError> {
        let request = wire::SubmitEventSyncRequest {
            event: Some(event.into()),
        };
        let response = self.call(&self.methods.submit_event_sync, &request).await?;
        let rule_outputs = response
            .rule_outputs
            .into_iter()
            .map(translate_rule_output)
            .collect::<Result<_, _>>()?;
        let request = translate_event(response.request)?;
        Ok(SubmitEventSyncResponse {
            message: response.message,
            rule_outputs,
            request,
        })
    }

    /// Fetches entities by id. Entities the server is still generating come
    /// back as [`crate::api::Entity::Generated`].
    pub async fn get_entities(
        &self,
        entity_ids: Vec<wire::EntityId>,
    ) -> Result<GetEntitiesResponse, CallError> {
        let request = wire::GetEntityRequest {
            request: Some(wire::EntityQuery {
                ids: entity_ids
                    .into_iter()
                    .map(|entity_id| wire::EntityQueryIdParam {
                        entity_id: Some(entity_id),
                    })
                    .collect(),
            }),
        };
        let response = self.call(&self.methods.get_entity, &request).await?;
        let entities = response.entity.into_iter().map(translate_entity).collect();
        Ok(GetEntitiesResponse {
            message: response.message,
            entities,
        })
    }

    /// Fetches accounts by id.
    pub async fn get_accounts(
        &self,
        account_ids: Vec<wire::AccountId>,
    ) -> Result<GetAccountsResponse, CallError> {
        let request = wire::GetAccountRequest {
            id: account_ids
                .into_iter()
                .map(|id| wire::AccountQueryIdParam { id: Some(id) })
                .collect(),
        };
        let response = self.call(&self.methods.get_account, &request).await?;
        let accounts = response
            .accounts
            .into_iter()
            .map(translate_account)
            .collect::<Result<Vec<Account>, _>>()?;
        Ok(GetAccountsResponse {
            message: response.message,
            accounts,
        })
    }

    /// Fetches every transaction recorded against an entity.
    pub async fn get_transactions_for_entity(
        &self,
        entity_id: wire::EntityId,
    ) -> Result<GetTransactionsForEntityResponse, CallError> {
        let request = wire::GetTransactionsForEntityRequest {
            id: Some(wire::EntityQueryIdParam {
                entity_id: Some(entity_id),
            }),
        };
        let response = self
            .call(&self.methods.get_transactions_for_entity, &request)
            .await?;
        let transactions = response
            .transactions
            .into_iter()
            .map(translate_transaction)
            .collect::<Result<_, _>>()?;
        Ok(GetTransactionsForEntityResponse {
            message: response.message,
            transactions,
        })
    }

    /// Fetches all investigations visible to the caller.
    pub async fn get_all_investigations(
        &self,
        options: Option<wire::GetAllInvestigationsOptions>,
    ) -> Result<GetAllInvestigationsResponse, CallError> {
        let request = wire::GetAllInvestigationsRequest { options };
        let response = self
            .call(&self.methods.get_all_investigations, &request)
            .await?;
        let investigations = response
            .investigations
            .into_iter()
            .map(translate_investigation)
            .collect::<Result<_, _>>()?;
        Ok(GetAllInvestigationsResponse {
            message: response.message,
            investigations,
        })
    }

    // ── Unit banking-partner passthrough ───────────────────────────────

    pub async fn create_unit_customer(
        &self,
        customer: wire::UnitResource,
    ) -> Result<wire::UnitCustomerResponse, CallError> {
        let request = wire::UnitCustomerRequest {
            customer: Some(customer),
        };
        self.call(&self.methods.create_unit_customer, &request).await
    }

    pub async fn update_unit_customer(
        &self,
        customer: wire::UnitResource,
    ) -> Result<wire::UnitCustomerResponse, CallError> {
        let request = wire::UnitCustomerRequest {
            customer: Some(customer),
        };
        self.call(&self.methods.update_unit_customer, &request).await
    }

    /// Creates a deposit account. The operation atomically produces both the
    /// account and its entity link; a response missing either sub-response is
    /// a protocol violation.
    pub async fn create_unit_deposit_account(
        &self,
        deposit_account: wire::UnitResource,
    ) -> Result<CreateUnitDepositAccountResponse, CallError> {
        let request = wire::UnitDepositAccountRequest {
            deposit_account: Some(deposit_account),
        };
        let response = self
            .call(&self.methods.create_unit_deposit_account, &request)
            .await?;
        let account_response = translate_event_response(
            response
                .account_response
                .ok_or(ProtocolViolation::MissingSubResponse("accountResponse"))?,
        )?;
        let account_entity_link_response =
            translate_event_response(response.account_entity_link_response.ok_or(
                ProtocolViolation::MissingSubResponse("accountEntityLinkResponse"),
            )?)?;
        Ok(CreateUnitDepositAccountResponse {
            message: response.message,
            account_response,
            account_entity_link_response,
        })
    }

    pub async fn update_unit_deposit_account(
        &self,
        deposit_account: wire::UnitResource,
    ) -> Result<wire::UnitDepositAccountResponse, CallError> {
        let request = wire::UnitDepositAccountRequest {
            deposit_account: Some(deposit_account),
        };
        self.call(&self.methods.update_unit_deposit_account, &request)
            .await
    }

    pub async fn create_unit_payment(
        &self,
        payment: wire::UnitResource,
    ) -> Result<wire::UnitPaymentResponse, CallError> {
        let request = wire::UnitPaymentRequest {
            payment: Some(payment),
        };
        self.call(&self.methods.create_unit_payment, &request).await
    }

    pub async fn update_unit_payment(
        &self,
        payment: wire::UnitResource,
    ) -> Result<wire::UnitPaymentResponse, CallError> {
        let request = wire::UnitPaymentRequest {
            payment: Some(payment),
        };
        self.call(&self.methods.update_unit_payment, &request).await
    }

    pub async fn create_unit_transaction(
        &self,
        transaction: wire::UnitResource,
    ) -> Result<wire::UnitTransactionResponse, CallError> {
        let request = wire::UnitTransactionRequest {
            transaction: Some(transaction),
        };
        self.call(&self.methods.create_unit_transaction, &request)
            .await
    }

    pub async fn update_unit_transaction(
        &self,
        transaction: wire::UnitResource,
    ) -> Result<wire::UnitTransactionResponse, CallError> {
        let request = wire::UnitTransactionRequest {
            transaction: Some(transaction),
        };
        self.call(&self.methods.update_unit_transaction, &request)
            .await
    }

    pub async fn create_unit_check_deposit(
        &self,
        check_deposit: wire::UnitResource,
    ) -> Result<wire::UnitCheckDepositResponse, CallError> {
        let request = wire::UnitCheckDepositRequest {
            check_deposit: Some(check_deposit),
        };
        self.call(&self.methods.create_unit_check_deposit, &request)
            .await
    }

    pub async fn update_unit_check_deposit(
        &self,
        check_deposit: wire::UnitResource,
    ) -> Result<wire::UnitCheckDepositResponse, CallError> {
        let request = wire::UnitCheckDepositRequest {
            check_deposit: Some(check_deposit),
        };
        self.call(&self.methods.update_unit_check_deposit, &request)
            .await
    }

    /// Encode through the input codec, round-trip over the transport, decode
    /// through the output codec.
    async fn call<I, O>(&self, method: &Method<I, O>, request: &I) -> Result<O, CallError>
    where
        I: Serialize,
        O: DeserializeOwned,
    {
        debug!(path = method.path, "dispatching request");
        let body = serde_json::to_string(request).map_err(CallError::Encode)?;
        let response = self.transport.post(method.path, body).await?;
        serde_json::from_str(&response).map_err(CallError::Decode)
    }
}
