use std::sync::Arc;
use tracing::debug;

use crate::{
    libraries::model_output::{parse_verdict, ParseError},
    models::{Submission, Verdict},
    services::inference::{InferenceClient, InferenceError, InlineImage},
};

/// Why a verdict could not be produced
#[derive(Debug, thiserror::Error)]
pub enum VerdictError {
    #[error(transparent)]
    Inference(#[from] InferenceError),

    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// Build the instruction sent with the photo.
///
/// Names are embedded verbatim; the prompt is plain instruction text.
pub fn build_prompt(location_name: &str, submitter_name: &str) -> String {
    format!(
        r#"
Analisa esta foto da praia {location_name}. Responde APENAS em formato JSON válido.
Verifica se há lixo visível e se existe um papel/sinal na saca com o nome "{submitter_name}".
TENS DE RESPONDER ASSIM
Formato de resposta:
{{
  "aprovado": true,
  "lixo_visivel": true,
  "nome_na_saca": true,
  "motivo": "Explicação breve aqui"
}}"#
    )
}

/// Forwards submissions to the inference service and decodes its answer
pub struct VerdictRelay {
    client: Arc<dyn InferenceClient>,
}

impl VerdictRelay {
    pub fn new(client: Arc<dyn InferenceClient>) -> Self {
        Self { client }
    }

    pub async fn relay(&self, submission: &Submission) -> Result<Verdict, VerdictError> {
        let prompt = build_prompt(&submission.location_name, &submission.submitter_name);

        let text = self
            .client
            .generate(&prompt, InlineImage::jpeg(&submission.image_data))
            .await?;

        debug!("Model answered with {} chars", text.len());

        Ok(parse_verdict(&text)?)
    }
}
