use serde::{Deserialize, Serialize};

use super::location::LocationPoint;

/// Body of `POST /verificar-lixo`. Field names are the ones the mobile client sends.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifyLitterRequest {
    #[serde(rename = "imagemBase64")]
    pub image_base64: String,
    #[serde(rename = "praia")]
    pub location_name: String,
    #[serde(rename = "utilizador")]
    pub submitter_name: String,
    // Clients only send coordinates when location access was granted
    pub lat: Option<f64>,
    pub lon: Option<f64>,
}

/// A single photo submission, alive for the duration of one request.
#[derive(Debug, Clone)]
pub struct Submission {
    pub image_data: String, // base64, forwarded untouched
    pub location_name: String,
    pub submitter_name: String,
    pub coordinates: Option<LocationPoint>,
}

impl From<VerifyLitterRequest> for Submission {
    fn from(request: VerifyLitterRequest) -> Self {
        Self {
            image_data: request.image_base64,
            location_name: request.location_name,
            submitter_name: request.submitter_name,
            coordinates: match (request.lat, request.lon) {
                (Some(lat), Some(lon)) => Some(LocationPoint::new(lat, lon)),
                _ => None,
            },
        }
    }
}

/// Negative outcome shape: geofence rejections, bad requests and failures.
///
/// Only carries `aprovado` and `motivo`; the model's other keys are absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RejectionResponse {
    #[serde(rename = "aprovado")]
    pub approved: bool,
    #[serde(rename = "motivo")]
    pub reason: String,
}

impl RejectionResponse {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            approved: false,
            reason: reason.into(),
        }
    }

    pub fn inference_failure(message: impl std::fmt::Display) -> Self {
        Self::new(format!("Erro na IA: {}", message))
    }

    pub fn invalid_request(message: impl std::fmt::Display) -> Self {
        Self::new(format!("Pedido inválido: {}", message))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_field_names() {
        let request: VerifyLitterRequest = serde_json::from_value(json!({
            "imagemBase64": "aGVsbG8=",
            "praia": "Praia Norte",
            "utilizador": "Ana",
            "lat": 41.69,
            "lon": -8.85
        }))
        .unwrap();

        let submission = Submission::from(request);
        assert_eq!(submission.image_data, "aGVsbG8=");
        assert_eq!(submission.location_name, "Praia Norte");
        assert_eq!(submission.submitter_name, "Ana");
        assert_eq!(submission.coordinates, Some(LocationPoint::new(41.69, -8.85)));
    }

    #[test]
    fn test_coordinates_optional() {
        let request: VerifyLitterRequest = serde_json::from_value(json!({
            "imagemBase64": "aGVsbG8=",
            "praia": "Outra",
            "utilizador": "Ana",
            "lat": 41.69
        }))
        .unwrap();

        assert_eq!(Submission::from(request).coordinates, None);
    }

    #[test]
    fn test_rejection_shape() {
        let value = serde_json::to_value(RejectionResponse::inference_failure("boom")).unwrap();
        assert_eq!(value, json!({ "aprovado": false, "motivo": "Erro na IA: boom" }));
    }
}
