use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The model's verdict on a photo.
///
/// Expected keys are `aprovado`, `lixo_visivel`, `nome_na_saca` and `motivo`,
/// but the object is returned to the caller exactly as the model produced it,
/// key order included, so the accessors return `None` for keys the model
/// left out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Verdict(Map<String, Value>);

impl Verdict {
    pub fn approved(&self) -> Option<bool> {
        self.0.get("aprovado").and_then(Value::as_bool)
    }

    pub fn trash_visible(&self) -> Option<bool> {
        self.0.get("lixo_visivel").and_then(Value::as_bool)
    }

    pub fn name_on_bag(&self) -> Option<bool> {
        self.0.get("nome_na_saca").and_then(Value::as_bool)
    }

    pub fn reason(&self) -> Option<&str> {
        self.0.get("motivo").and_then(Value::as_str)
    }
}
