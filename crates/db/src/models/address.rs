//! Structured postal address embedded in stores and clients.

use serde::{Deserialize, Serialize};

/// Stored as a JSONB document; every part is optional free text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Address {
    pub cep: String,
    pub logradouro: String,
    pub numero: String,
    pub complemento: String,
    pub bairro: String,
    pub cidade: String,
    pub estado: String,
}

impl Address {
    /// Trim every part.
    pub fn normalized(self) -> Self {
        Self {
            cep: self.cep.trim().to_string(),
            logradouro: self.logradouro.trim().to_string(),
            numero: self.numero.trim().to_string(),
            complemento: self.complemento.trim().to_string(),
            bairro: self.bairro.trim().to_string(),
            cidade: self.cidade.trim().to_string(),
            estado: self.estado.trim().to_string(),
        }
    }
}
