//! # Method registry
//!
//! Binds each RPC to its HTTP path and its input/output wire codec pair.
//! [`MethodTable`] is an immutable lookup table built once at client
//! construction and held by the facade; an unregistered operation is not
//! representable, so registry misuse is a compile error rather than a
//! runtime condition.

use crate::wire;
use std::fmt;
use std::marker::PhantomData;

/// One RPC: a fixed path plus its request/response message types. The types
/// are the codec; encoding and decoding go through their serde impls.
pub struct Method<I, O> {
    pub path: &'static str,
    codec: PhantomData<fn(I) -> O>,
}

impl<I, O> Method<I, O> {
    const fn new(path: &'static str) -> Self {
        Self {
            path,
            codec: PhantomData,
        }
    }
}

impl<I, O> Clone for Method<I, O> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<I, O> Copy for Method<I, O> {}

impl<I, O> fmt::Debug for Method<I, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Method").field("path", &self.path).finish()
    }
}

/// Every RPC the sandbar gateway exposes, keyed by operation.
#[derive(Debug, Clone)]
pub struct MethodTable {
    pub submit_events: Method<wire::SubmitEventsRequest, wire::SubmitEventsResponse>,
    pub submit_event_sync: Method<wire::SubmitEventSyncRequest, wire::SubmitEventSyncResponse>,
    pub get_entity: Method<wire::GetEntityRequest, wire::GetEntityResponse>,
    pub get_account: Method<wire::GetAccountRequest, wire::GetAccountResponse>,
    pub get_transactions_for_entity:
        Method<wire::GetTransactionsForEntityRequest, wire::GetTransactionsForEntityResponse>,
    pub get_all_investigations:
        Method<wire::GetAllInvestigationsRequest, wire::GetAllInvestigationsResponse>,
    pub create_unit_customer: Method<wire::UnitCustomerRequest, wire::UnitCustomerResponse>,
    pub update_unit_customer: Method<wire::UnitCustomerRequest, wire::UnitCustomerResponse>,
    pub create_unit_deposit_account:
        Method<wire::UnitDepositAccountRequest, wire::CreateUnitDepositAccountResponse>,
    pub update_unit_deposit_account:
        Method<wire::UnitDepositAccountRequest, wire::UnitDepositAccountResponse>,
    pub create_unit_payment: Method<wire::UnitPaymentRequest, wire::UnitPaymentResponse>,
    pub update_unit_payment: Method<wire::UnitPaymentRequest, wire::UnitPaymentResponse>,
    pub create_unit_transaction:
        Method<wire::UnitTransactionRequest, wire::UnitTransactionResponse>,
    pub update_unit_transaction:
        Method<wire::UnitTransactionRequest, wire::UnitTransactionResponse>,
    pub create_unit_check_deposit:
        Method<wire::UnitCheckDepositRequest, wire::UnitCheckDepositResponse>,
    pub update_unit_check_deposit:
        Method<wire::UnitCheckDepositRequest, wire::UnitCheckDepositResponse>,
}

impl MethodTable {
    pub const fn new() -> Self {
        Self {
            submit_events: Method::new("/v0/submit_event"),
            submit_event_sync: Method::new("/v0/submit_event_sync"),
            get_entity: Method::new("/v0/get_entity"),
            get_account: Method::new("/v0/get_account"),
            get_transactions_for_entity: Method::new("/v0/get_transactions_for_entity"),
            get_all_investigations: Method::new("/v0/get_all_investigations"),
            create_unit_customer: Method::new("/v0/create_unit_customer"),
            update_unit_customer: Method::new("/v0/update_unit_customer"),
            create_unit_deposit_account: Method::new("/v0/create_unit_deposit_account"),
            update_unit_deposit_account: Method::new("/v0/update_unit_deposit_account"),
            create_unit_payment: Method::new("/v0/create_unit_payment"),
            update_unit_payment: Method::new("/v0/update_unit_payment"),
            create_unit_transaction: Method::new("/v0/create_unit_transaction"),
            update_unit_transaction: Method::new("/v0/update_unit_transaction"),
            create_unit_check_deposit: Method::new("/v0/create_unit_check_deposit"),
            update_unit_check_deposit: Method::new("/v0/update_unit_check_deposit"),
        }
    }
}

impl Default for MethodTable {
    fn default() -> Self {
        Self::new()
    }
}
