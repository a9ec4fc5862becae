use sandbar::ProtocolViolation;
use sandbar::api;
use sandbar::translate::{
    translate_account, translate_account_entity_link, translate_entity, translate_event,
    translate_event_response, translate_investigation, translate_rule_output,
    translate_transaction,
};
use sandbar::wire;

fn complete_entity() -> wire::Entity {
    wire::Entity {
        sandbar_entity_id: Some("e-1".to_string()),
        source_entity_id: Some("src-1".to_string()),
        name: Some("Jane Doe".to_string()),
        birth_incorporation_date: Some("1980-01-01".to_string()),
        email: Some("jane@example.com".to_string()),
        ..wire::Entity::default()
    }
}

#[test]
fn test_entity_with_all_required_fields_is_complete() {
    match translate_entity(complete_entity()) {
        api::Entity::Complete(complete) => {
            assert_eq!(complete.sandbar_entity_id, "e-1");
            assert_eq!(complete.name, "Jane Doe");
            assert_eq!(complete.email.as_deref(), Some("jane@example.com"));
        }
        api::Entity::Generated(partial) => panic!("expected a complete entity, got {partial:?}"),
    }
}

#[test]
fn test_entity_missing_any_required_field_is_generated() {
    let without = [
        wire::Entity {
            sandbar_entity_id: None,
            ..complete_entity()
        },
        wire::Entity {
            source_entity_id: None,
            ..complete_entity()
        },
        wire::Entity {
            name: None,
            ..complete_entity()
        },
        wire::Entity {
            birth_incorporation_date: None,
            ..complete_entity()
        },
    ];
    for partial in without {
        let entity = translate_entity(partial.clone());
        assert!(entity.is_generated(), "expected generated for {partial:?}");
        // The wire shape survives untouched for the caller to inspect.
        assert_eq!(entity, api::Entity::Generated(partial));
    }
}

#[test]
fn test_entity_missing_optional_fields_is_still_complete() {
    let entity = wire::Entity {
        relationship_begin_date: None,
        email: None,
        ..complete_entity()
    };
    assert!(!translate_entity(entity).is_generated());
}

#[test]
fn test_account_with_identifier_translates() {
    let account = wire::Account {
        account_identifier: Some(wire::AccountIdentifier {
            bank_name: "Chemical Bank".to_string(),
            account_number: "123456789".to_string(),
        }),
        account_type: Some(wire::AccountType::Savings),
    };
    let account = translate_account(account).expect("account should translate");
    assert_eq!(account.account_identifier.bank_name, "Chemical Bank");
    assert_eq!(account.account_type, Some(wire::AccountType::Savings));
}

#[test]
fn test_account_without_identifier_is_a_violation() {
    let account = wire::Account {
        account_identifier: None,
        account_type: Some(wire::AccountType::Checking),
    };
    assert_eq!(
        translate_account(account),
        Err(ProtocolViolation::AccountMissingIdentifier)
    );
}

#[test]
fn test_transaction_without_identifier_is_a_violation() {
    let transaction = wire::Transaction {
        transaction_amount: Some(250.0),
        ..wire::Transaction::default()
    };
    assert_eq!(
        translate_transaction(transaction),
        Err(ProtocolViolation::TransactionMissingIdentifier)
    );
}

fn link() -> wire::AccountEntityLink {
    wire::AccountEntityLink {
        account_id: Some(wire::AccountId::SandbarAccountId("a-1".to_string())),
        entity_id: Some(wire::EntityQueryIdParam {
            entity_id: Some(wire::EntityId::SandbarEntityId("e-1".to_string())),
        }),
        start_date: Some("2020-01-01".to_string()),
        end_date: None,
    }
}

#[test]
fn test_link_translates_with_both_references() {
    let link = translate_account_entity_link(link()).expect("link should translate");
    assert_eq!(
        link.account_id,
        wire::AccountId::SandbarAccountId("a-1".to_string())
    );
    assert_eq!(
        link.entity_id,
        wire::EntityId::SandbarEntityId("e-1".to_string())
    );
    assert_eq!(link.start_date.as_deref(), Some("2020-01-01"));
}

#[test]
fn test_link_without_account_id_is_a_violation() {
    let link = wire::AccountEntityLink {
        account_id: None,
        ..link()
    };
    assert_eq!(
        translate_account_entity_link(link),
        Err(ProtocolViolation::LinkMissingAccountId)
    );
}

#[test]
fn test_link_without_entity_id_is_a_violation() {
    let missing = wire::AccountEntityLink {
        entity_id: None,
        ..link()
    };
    assert_eq!(
        translate_account_entity_link(missing),
        Err(ProtocolViolation::LinkMissingEntityId)
    );

    // A present wrapper whose oneof tag is unset is just as broken.
    let unset_tag = wire::AccountEntityLink {
        entity_id: Some(wire::EntityQueryIdParam { entity_id: None }),
        ..link()
    };
    assert_eq!(
        translate_account_entity_link(unset_tag),
        Err(ProtocolViolation::LinkMissingEntityId)
    );
}

fn event_response(kind: wire::EventResponseType, source_id: &str) -> wire::EventResponse {
    wire::EventResponse {
        event_response_type: kind,
        sandbar_id: "s-1".to_string(),
        source_id: source_id.to_string(),
        generated_id: String::new(),
        is_successful: true,
        message: "ok".to_string(),
    }
}

#[test]
fn test_account_response_splits_the_packed_source_id() {
    let response =
        translate_event_response(event_response(
            wire::EventResponseType::Account,
            "Chemical Bank|123456789",
        ))
        .expect("account response should translate");
    assert_eq!(
        response.kind,
        api::EventResponseKind::Account {
            source_account_id: wire::AccountIdentifier {
                bank_name: "Chemical Bank".to_string(),
                account_number: "123456789".to_string(),
            },
        }
    );
}

#[test]
fn test_account_response_first_separator_wins() {
    let response = translate_event_response(event_response(
        wire::EventResponseType::Account,
        "First National|12|34",
    ))
    .expect("account response should translate");
    assert_eq!(
        response.kind,
        api::EventResponseKind::Account {
            source_account_id: wire::AccountIdentifier {
                bank_name: "First National".to_string(),
                account_number: "12|34".to_string(),
            },
        }
    );
}

#[test]
fn test_account_response_without_separator_is_a_violation() {
    let result = translate_event_response(event_response(
        wire::EventResponseType::Account,
        "Chemical Bank",
    ));
    assert_eq!(
        result,
        Err(ProtocolViolation::MalformedAccountSourceId(
            "Chemical Bank".to_string()
        ))
    );
}

#[test]
fn test_entity_response_maps_empty_ids_to_none() {
    let response = wire::EventResponse {
        generated_id: "gen-1".to_string(),
        ..event_response(wire::EventResponseType::Entity, "")
    };
    let response = translate_event_response(response).expect("entity response should translate");
    assert_eq!(
        response.kind,
        api::EventResponseKind::Entity {
            source_entity_id: None,
            generated_id: Some("gen-1".to_string()),
        }
    );
}

#[test]
fn test_transaction_response_carries_the_source_id() {
    let response =
        translate_event_response(event_response(wire::EventResponseType::Transaction, "txn-9"))
            .expect("transaction response should translate");
    assert_eq!(
        response.kind,
        api::EventResponseKind::Transaction {
            source_transaction_id: "txn-9".to_string(),
        }
    );
}

#[test]
fn test_unspecified_response_type_is_a_violation() {
    let result =
        translate_event_response(event_response(wire::EventResponseType::Unspecified, "src-1"));
    assert_eq!(result, Err(ProtocolViolation::UnspecifiedEventResponseType));
}

#[test]
fn test_missing_event_is_a_violation() {
    assert_eq!(translate_event(None), Err(ProtocolViolation::MissingEvent));
}

#[test]
fn test_event_without_payload_is_a_violation() {
    let event = wire::Event {
        event_type: wire::EventType::Create,
        incomplete: false,
        payload: None,
    };
    assert_eq!(
        translate_event(Some(event)),
        Err(ProtocolViolation::EmptyEventPayload)
    );
}

#[test]
fn test_complete_create_event_does_not_require_a_sandbar_id() {
    let entity = wire::Entity {
        sandbar_entity_id: None,
        ..complete_entity()
    };
    let event = wire::Event {
        event_type: wire::EventType::Create,
        incomplete: false,
        payload: Some(wire::EventPayload::Entity(entity)),
    };
    let event = translate_event(Some(event)).expect("create event should translate");
    assert!(matches!(
        event,
        api::Event::Create(api::EventPayload::Entity(_))
    ));
}

#[test]
fn test_complete_update_event_requires_the_sandbar_id() {
    let entity = wire::Entity {
        sandbar_entity_id: None,
        ..complete_entity()
    };
    let event = wire::Event {
        event_type: wire::EventType::Update,
        incomplete: false,
        payload: Some(wire::EventPayload::Entity(entity)),
    };
    assert_eq!(
        translate_event(Some(event)),
        Err(ProtocolViolation::IncompleteEntityPayload)
    );
}

#[test]
fn test_incomplete_event_admits_partial_entities() {
    let entity = wire::Entity {
        name: Some("Acme Corp".to_string()),
        ..wire::Entity::default()
    };
    let event = wire::Event {
        event_type: wire::EventType::Update,
        incomplete: true,
        payload: Some(wire::EventPayload::Entity(entity)),
    };
    let event = translate_event(Some(event)).expect("incomplete event should translate");
    assert!(matches!(
        event,
        api::Event::Incomplete {
            event_type: wire::EventType::Update,
            payload: api::EventPayload::Entity(_),
        }
    ));
}

#[test]
fn test_complete_event_with_unspecified_type_is_a_violation() {
    let event = wire::Event {
        event_type: wire::EventType::Unspecified,
        incomplete: false,
        payload: Some(wire::EventPayload::Entity(complete_entity())),
    };
    assert_eq!(
        translate_event(Some(event)),
        Err(ProtocolViolation::UnspecifiedEventType)
    );
}

#[test]
fn test_rule_output_requires_a_target() {
    let output = wire::RuleOutput {
        investigation_target: None,
        rule_id: "structuring-v2".to_string(),
        triggered: true,
        message: String::new(),
    };
    assert_eq!(
        translate_rule_output(output),
        Err(ProtocolViolation::MissingInvestigationTarget)
    );
}

#[test]
fn test_blank_target_id_is_a_violation() {
    let output = wire::RuleOutput {
        investigation_target: Some(wire::InvestigationTarget {
            sandbar_target_id: "   ".to_string(),
        }),
        rule_id: "structuring-v2".to_string(),
        triggered: true,
        message: String::new(),
    };
    assert_eq!(
        translate_rule_output(output),
        Err(ProtocolViolation::EmptyInvestigationTargetId)
    );
}

#[test]
fn test_investigation_translates_targets_and_alerts() {
    let investigation = wire::Investigation {
        sandbar_investigation_id: "inv-1".to_string(),
        target: vec![wire::InvestigationTarget {
            sandbar_target_id: "t-1".to_string(),
        }],
        alerts: vec![wire::Alert {
            investigation_target: Some(wire::InvestigationTarget {
                sandbar_target_id: "t-1".to_string(),
            }),
            outputs: vec![wire::RuleOutput {
                investigation_target: Some(wire::InvestigationTarget {
                    sandbar_target_id: "t-1".to_string(),
                }),
                rule_id: "structuring-v2".to_string(),
                triggered: true,
                message: "amounts just under the reporting threshold".to_string(),
            }],
            alert_id: "alert-1".to_string(),
            created_at: Some("2026-01-05T10:00:00Z".to_string()),
        }],
        created_at: Some("2026-01-05T09:59:00Z".to_string()),
    };
    let investigation =
        translate_investigation(investigation).expect("investigation should translate");
    assert_eq!(investigation.sandbar_investigation_id, "inv-1");
    assert_eq!(investigation.target[0].sandbar_target_id, "t-1");
    assert_eq!(investigation.alerts[0].alert_id, "alert-1");
    assert_eq!(investigation.alerts[0].outputs[0].rule_id, "structuring-v2");
}
