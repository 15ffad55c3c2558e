use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct User {
    #[serde(rename = "_id", default = "super::new_record_id")]
    pub id: String,
    pub name: String,
    pub age: i32,
    pub alive: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl User {
    pub fn new(name: &str, age: i32, alive: bool, email: Option<&str>) -> Self {
        Self {
            id: super::new_record_id(),
            name: name.to_string(),
            age,
            alive,
            email: email.map(str::to_string),
        }
    }
}
