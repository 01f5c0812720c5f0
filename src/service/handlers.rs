//! Handlers for the five person operations.
//!
//! Each handler reads what it needs from the context, validates, calls the
//! repository and builds the success response. Failures are returned as
//! [`ServiceError`] and mapped to a status code by the dispatcher.

use crate::context::RequestContext;
use crate::error::{ServiceError, ServiceResult};
use crate::person::PersonId;
use crate::repository::PersonRepository;
use crate::service::core::PersonService;
use crate::service::response::ServiceResponse;
use crate::validation::PayloadValidator;
use log::{debug, trace};
use serde_json::Value;

/// Handle list operations.
pub async fn handle_list<R: PersonRepository>(
    _service: &PersonService,
    context: &RequestContext<R>,
) -> ServiceResult<ServiceResponse> {
    let persons = context
        .repository()
        .get_persons()
        .await
        .map_err(ServiceError::repository)?;

    trace!(
        "Listed {} persons (request: '{}')",
        persons.len(),
        context.request_id()
    );

    let result = persons.iter().map(|p| p.to_value()).collect();
    Ok(ServiceResponse::ok(Value::Array(result)))
}

/// Handle get operations.
pub async fn handle_get<R: PersonRepository>(
    _service: &PersonService,
    context: &RequestContext<R>,
    id: PersonId,
) -> ServiceResult<ServiceResponse> {
    let person = context
        .repository()
        .get_person(id)
        .await
        .map_err(ServiceError::repository)?
        .ok_or_else(|| ServiceError::not_found(id))?;

    Ok(ServiceResponse::ok(person.to_value()))
}

/// Handle create operations.
pub async fn handle_create<R: PersonRepository>(
    service: &PersonService,
    context: &RequestContext<R>,
) -> ServiceResult<ServiceResponse> {
    let data = PayloadValidator::payload_from_body(context.body())?;
    service.validator.validate_create(&data)?;

    let id = context
        .repository()
        .create_person(&data)
        .await
        .map_err(ServiceError::repository)?
        .ok_or_else(|| {
            ServiceError::invalid_request(format!(
                "Repository rejected payload with {} attributes",
                data.len()
            ))
        })?;

    let location = service.config.location_for(id);
    debug!(
        "Created person {} at {} (request: '{}')",
        id,
        location,
        context.request_id()
    );

    Ok(ServiceResponse::created(Value::from(id.value()), location))
}

/// Handle update operations.
///
/// The response carries the record re-fetched after the merge.
pub async fn handle_update<R: PersonRepository>(
    service: &PersonService,
    context: &RequestContext<R>,
    id: PersonId,
) -> ServiceResult<ServiceResponse> {
    let data = PayloadValidator::payload_from_body(context.body())?;
    service.validator.validate_update(&data)?;

    let repository = context.repository();
    let updated = repository
        .update_person(id, &data)
        .await
        .map_err(ServiceError::repository)?;
    if !updated {
        return Err(ServiceError::not_found(id));
    }

    // A concurrent delete can land between the merge and this read.
    let person = repository
        .get_person(id)
        .await
        .map_err(ServiceError::repository)?
        .ok_or_else(|| ServiceError::not_found(id))?;

    Ok(ServiceResponse::ok(person.to_value()))
}

/// Handle delete operations.
pub async fn handle_delete<R: PersonRepository>(
    _service: &PersonService,
    context: &RequestContext<R>,
    id: PersonId,
) -> ServiceResult<ServiceResponse> {
    let deleted = context
        .repository()
        .delete_person(id)
        .await
        .map_err(ServiceError::repository)?;

    if deleted {
        Ok(ServiceResponse::no_content())
    } else {
        Err(ServiceError::not_found(id))
    }
}
