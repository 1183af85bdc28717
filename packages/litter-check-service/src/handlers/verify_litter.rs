use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use std::sync::Arc;
use tracing::{debug, error, info, warn};

use crate::{
    app::AppState,
    models::{RejectionResponse, Submission, VerifyLitterRequest},
};

/// Handle a litter photo submission
///
/// This endpoint:
/// 1. Checks the submitter is within range of the claimed beach
/// 2. Sends the photo to the model with a fixed prompt
/// 3. Returns the model's JSON verdict as-is
pub async fn verify_litter(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<VerifyLitterRequest>, JsonRejection>,
) -> Response {
    let Json(request) = match payload {
        Ok(payload) => payload,
        Err(rejection) => {
            warn!("Rejected malformed submission: {}", rejection.body_text());
            return (
                rejection.status(),
                Json(RejectionResponse::invalid_request(rejection.body_text())),
            )
                .into_response();
        }
    };

    let submission = Submission::from(request);

    debug!(
        "Verifying litter photo at '{}' from '{}' ({:?})",
        submission.location_name, submission.submitter_name, submission.coordinates
    );

    let outcome = state
        .geofence
        .validate_submission(&submission.location_name, submission.coordinates.as_ref());

    if let Some(reason) = outcome.rejection_reason() {
        info!(
            "Submission from '{}' rejected by geofence: {}",
            submission.submitter_name, reason
        );
        return Json(RejectionResponse::new(reason)).into_response();
    }

    match state.relay.relay(&submission).await {
        Ok(verdict) => {
            info!(
                "Verdict for '{}' at '{}': approved={:?}, trash_visible={:?}, name_on_bag={:?}",
                submission.submitter_name,
                submission.location_name,
                verdict.approved(),
                verdict.trash_visible(),
                verdict.name_on_bag()
            );
            Json(verdict).into_response()
        }
        Err(e) => {
            error!("Failed to get verdict for '{}': {}", submission.submitter_name, e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(RejectionResponse::inference_failure(e)),
            )
                .into_response()
        }
    }
}
