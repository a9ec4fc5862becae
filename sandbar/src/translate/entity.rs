use crate::api;
use crate::wire;

/// Classifies an entity by completeness.
///
/// This translator never fails: an entity missing required fields is still
/// being generated server-side and comes back as
/// [`api::Entity::Generated`].
pub fn translate_entity(entity: wire::Entity) -> api::Entity {
    match complete(entity) {
        Ok(entity) => api::Entity::Complete(entity),
        Err(partial) => api::Entity::Generated(partial),
    }
}

/// Checks the full completeness class: the create fields plus the
/// sandbar-assigned id. Returns the untouched entity when any is missing.
pub(crate) fn complete(entity: wire::Entity) -> Result<api::CompleteEntity, wire::Entity> {
    match entity {
        wire::Entity {
            sandbar_entity_id: Some(sandbar_entity_id),
            source_entity_id: Some(source_entity_id),
            name: Some(name),
            birth_incorporation_date: Some(birth_incorporation_date),
            relationship_begin_date,
            primary_address,
            email,
            website_url,
            phone_number,
        } => Ok(api::CompleteEntity {
            sandbar_entity_id,
            source_entity_id,
            name,
            birth_incorporation_date,
            relationship_begin_date,
            primary_address,
            email,
            website_url,
            phone_number,
        }),
        partial => Err(partial),
    }
}

/// Checks the create completeness class: source id, name and
/// birth/incorporation date. A sandbar id may not have been assigned yet, so
/// it is not required here.
pub(crate) fn create_complete(entity: wire::Entity) -> Result<api::EntityCreate, wire::Entity> {
    match entity {
        wire::Entity {
            sandbar_entity_id: _,
            source_entity_id: Some(source_entity_id),
            name: Some(name),
            birth_incorporation_date: Some(birth_incorporation_date),
            relationship_begin_date,
            primary_address,
            email,
            website_url,
            phone_number,
        } => Ok(api::EntityCreate {
            source_entity_id,
            name,
            birth_incorporation_date,
            relationship_begin_date,
            primary_address,
            email,
            website_url,
            phone_number,
        }),
        partial => Err(partial),
    }
}
