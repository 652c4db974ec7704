use serde::{Deserialize, Serialize};

/// Reference row naming a city a cafe can be located in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct City {
    pub code: String,
    pub name: String,
    pub state: String,
}
