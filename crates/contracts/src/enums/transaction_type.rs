use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionType {
    Import,
    Export,
    Sale,
}

impl TransactionType {
    pub fn code(&self) -> &'static str {
        match self {
            TransactionType::Import => "IMPORT",
            TransactionType::Export => "EXPORT",
            TransactionType::Sale => "SALE",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            TransactionType::Import => "Import",
            TransactionType::Export => "Export",
            TransactionType::Sale => "Sale",
        }
    }

    /// Endpoint segment for stock movements; sales go through their own endpoint.
    pub fn movement_path(&self) -> Option<&'static str> {
        match self {
            TransactionType::Import => Some("import"),
            TransactionType::Export => Some("export"),
            TransactionType::Sale => None,
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_uppercase().as_str() {
            "IMPORT" => Some(TransactionType::Import),
            "EXPORT" => Some(TransactionType::Export),
            "SALE" => Some(TransactionType::Sale),
            _ => None,
        }
    }
}
