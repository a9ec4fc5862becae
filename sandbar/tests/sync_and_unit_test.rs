use mock_service::MockApi;
use sandbar::api::{CompleteEntity, EntityCreate, Event, EventPayload, EventResponseKind};
use sandbar::wire;
use sandbar::{CallError, Client, ClientOptions, ProtocolViolation};
use serde_json::json;

fn local_client(base_url: &str) -> Client {
    Client::new(ClientOptions {
        url: Some(base_url.to_string()),
        ..ClientOptions::default()
    })
    .expect("client should build against the mock")
}

#[tokio::test]
async fn test_submit_event_sync_echoes_the_event_back() {
    let server = MockApi::new()
        .on(
            "/v0/submit_event_sync",
            json!({
                "message": "ok",
                "ruleOutputs": [
                    {
                        "investigationTarget": { "sandbarTargetId": "t-1" },
                        "ruleId": "structuring-v2",
                        "triggered": true,
                        "message": "amounts just under the reporting threshold",
                    },
                ],
                "request": {
                    "type": "UPDATE",
                    "incomplete": false,
                    "entity": {
                        "sandbarEntityId": "e-42",
                        "sourceEntityId": "src-1",
                        "name": "Jane Doe",
                        "birthIncorporationDate": "1980-01-01",
                    },
                },
            }),
        )
        .serve()
        .await;
    let client = local_client(&server.base_url);

    let event = Event::Update(EventPayload::Entity(CompleteEntity {
        sandbar_entity_id: "e-42".to_string(),
        source_entity_id: "src-1".to_string(),
        name: "Jane Doe".to_string(),
        birth_incorporation_date: "1980-01-01".to_string(),
        relationship_begin_date: None,
        primary_address: None,
        email: None,
        website_url: None,
        phone_number: None,
    }));
    let response = client
        .submit_event_sync(event.clone())
        .await
        .expect("submit_event_sync should succeed");

    assert_eq!(response.rule_outputs.len(), 1);
    assert_eq!(
        response.rule_outputs[0].investigation_target.sandbar_target_id,
        "t-1"
    );
    assert!(response.rule_outputs[0].triggered);
    // The echoed event lifts back into the exact typed shape we sent.
    assert_eq!(response.request, event);

    let body = &server.requests()[0].body;
    assert_eq!(body["event"]["type"], "UPDATE");
    assert_eq!(body["event"]["incomplete"], false);
    assert_eq!(body["event"]["entity"]["sandbarEntityId"], "e-42");
}

#[tokio::test]
async fn test_submit_event_sync_rejects_a_missing_echo() {
    let server = MockApi::new()
        .on(
            "/v0/submit_event_sync",
            json!({ "message": "ok", "ruleOutputs": [] }),
        )
        .serve()
        .await;
    let client = local_client(&server.base_url);

    let event = Event::Create(EventPayload::Entity(EntityCreate::new(
        "src-1",
        "Jane Doe",
        "1980-01-01",
    )));
    let err = client
        .submit_event_sync(event)
        .await
        .expect_err("a response without the echoed event should fail");
    assert!(matches!(
        err,
        CallError::Protocol(ProtocolViolation::MissingEvent)
    ));
}

#[tokio::test]
async fn test_get_all_investigations_posts_options_and_translates() {
    let server = MockApi::new()
        .on(
            "/v0/get_all_investigations",
            json!({
                "message": "ok",
                "investigations": [
                    {
                        "sandbarInvestigationId": "inv-1",
                        "target": [{ "sandbarTargetId": "t-1" }],
                        "alerts": [
                            {
                                "investigationTarget": { "sandbarTargetId": "t-1" },
                                "outputs": [],
                                "alertId": "alert-1",
                                "createdAt": "2026-01-05T10:00:00Z",
                            },
                        ],
                        "createdAt": "2026-01-05T09:59:00Z",
                    },
                ],
            }),
        )
        .serve()
        .await;
    let client = local_client(&server.base_url);

    let response = client
        .get_all_investigations(Some(wire::GetAllInvestigationsOptions {
            limit: Some(10),
            include_closed: Some(false),
        }))
        .await
        .expect("get_all_investigations should succeed");

    assert_eq!(response.investigations.len(), 1);
    assert_eq!(response.investigations[0].sandbar_investigation_id, "inv-1");
    assert_eq!(response.investigations[0].alerts[0].alert_id, "alert-1");
    assert_eq!(
        server.requests()[0].body,
        json!({ "options": { "limit": 10, "includeClosed": false } })
    );
}

#[tokio::test]
async fn test_get_all_investigations_rejects_blank_target_ids() {
    let server = MockApi::new()
        .on(
            "/v0/get_all_investigations",
            json!({
                "message": "ok",
                "investigations": [
                    {
                        "sandbarInvestigationId": "inv-1",
                        "target": [{ "sandbarTargetId": "   " }],
                    },
                ],
            }),
        )
        .serve()
        .await;
    let client = local_client(&server.base_url);

    let err = client
        .get_all_investigations(None)
        .await
        .expect_err("a blank target id should fail the call");
    assert!(matches!(
        err,
        CallError::Protocol(ProtocolViolation::EmptyInvestigationTargetId)
    ));
}

fn deposit_account() -> wire::UnitResource {
    wire::UnitResource {
        resource_type: "depositAccount".to_string(),
        id: "900".to_string(),
        attributes: json!({
            "depositProduct": "checking",
            "tags": { "sourceEntityId": "src-1" },
        }),
        relationships: json!({
            "customer": { "data": { "type": "businessCustomer", "id": "8" } },
        }),
    }
}

#[tokio::test]
async fn test_create_unit_deposit_account_translates_both_sub_responses() {
    let server = MockApi::new()
        .on(
            "/v0/create_unit_deposit_account",
            json!({
                "message": "ok",
                "accountResponse": {
                    "eventResponseType": "ACCOUNT",
                    "sandbarId": "1",
                    "sourceId": "Chemical Bank|123456789",
                    "isSuccessful": true,
                },
                "accountEntityLinkResponse": {
                    "eventResponseType": "ACCOUNT_ENTITY_LINK",
                    "sandbarId": "2",
                    "isSuccessful": true,
                },
            }),
        )
        .serve()
        .await;
    let client = local_client(&server.base_url);

    let response = client
        .create_unit_deposit_account(deposit_account())
        .await
        .expect("create_unit_deposit_account should succeed");

    assert_eq!(
        response.account_response.kind,
        EventResponseKind::Account {
            source_account_id: wire::AccountIdentifier {
                bank_name: "Chemical Bank".to_string(),
                account_number: "123456789".to_string(),
            },
        }
    );
    assert_eq!(
        response.account_entity_link_response.kind,
        EventResponseKind::AccountEntityLink
    );

    let body = &server.requests()[0].body;
    assert_eq!(body["depositAccount"]["type"], "depositAccount");
    assert_eq!(body["depositAccount"]["attributes"]["depositProduct"], "checking");
}

#[tokio::test]
async fn test_create_unit_deposit_account_requires_both_sub_responses() {
    let server = MockApi::new()
        .on(
            "/v0/create_unit_deposit_account",
            json!({
                "message": "ok",
                "accountResponse": {
                    "eventResponseType": "ACCOUNT",
                    "sandbarId": "1",
                    "sourceId": "Chemical Bank|123456789",
                    "isSuccessful": true,
                },
            }),
        )
        .serve()
        .await;
    let client = local_client(&server.base_url);

    let err = client
        .create_unit_deposit_account(deposit_account())
        .await
        .expect_err("a response missing the link sub-response should fail");
    assert!(matches!(
        err,
        CallError::Protocol(ProtocolViolation::MissingSubResponse(
            "accountEntityLinkResponse"
        ))
    ));
}

#[tokio::test]
async fn test_unit_customer_passes_through_opaquely() {
    let server = MockApi::new()
        .on(
            "/v0/create_unit_customer",
            json!({
                "message": "ok",
                "customer": {
                    "type": "businessCustomer",
                    "id": "8",
                    "attributes": { "name": "Acme Corp" },
                },
            }),
        )
        .serve()
        .await;
    let client = local_client(&server.base_url);

    let customer = wire::UnitResource {
        resource_type: "businessCustomer".to_string(),
        id: "8".to_string(),
        attributes: json!({ "name": "Acme Corp" }),
        relationships: serde_json::Value::Null,
    };
    let response = client
        .create_unit_customer(customer)
        .await
        .expect("create_unit_customer should succeed");

    let echoed = response.customer.expect("the mock echoes the customer");
    assert_eq!(echoed.id, "8");
    assert_eq!(echoed.attributes["name"], "Acme Corp");

    // Attributes pass through untouched; null relationships are omitted.
    let body = &server.requests()[0].body;
    assert_eq!(body["customer"]["type"], "businessCustomer");
    assert_eq!(body["customer"]["attributes"]["name"], "Acme Corp");
    assert!(body["customer"].get("relationships").is_none());
}

#[tokio::test]
async fn test_update_unit_payment_passes_through_opaquely() {
    let server = MockApi::new()
        .on(
            "/v0/update_unit_payment",
            json!({
                "message": "ok",
                "payment": { "type": "achPayment", "id": "77" },
            }),
        )
        .serve()
        .await;
    let client = local_client(&server.base_url);

    let payment = wire::UnitResource {
        resource_type: "achPayment".to_string(),
        id: "77".to_string(),
        attributes: json!({ "amount": 2500, "direction": "Credit" }),
        relationships: serde_json::Value::Null,
    };
    let response = client
        .update_unit_payment(payment)
        .await
        .expect("update_unit_payment should succeed");

    assert_eq!(
        response.payment.expect("the mock echoes the payment").id,
        "77"
    );
    assert_eq!(server.requests()[0].path, "/v0/update_unit_payment");
}
