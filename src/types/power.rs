use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PowerRes {
    pub id: i32,
    pub name: String,
    pub description: String,
}

impl From<entity::power::Model> for PowerRes {
    fn from(m: entity::power::Model) -> Self {
        PowerRes {
            id: m.id,
            name: m.name,
            description: m.description,
        }
    }
}

/// PATCH body. `description` is optional here so a missing key reaches the
/// handler and is rejected there, after the 404 check.
#[derive(Serialize, Deserialize, Debug, Default)]
pub struct RPowerUpdate {
    pub description: Option<String>,
}
