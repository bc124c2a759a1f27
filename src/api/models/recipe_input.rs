use uuid::Uuid;
use rocket::serde::Deserialize;

// All fields optional so missing keys surface as validation errors
// instead of a deserialization failure.
#[derive(Deserialize)]
#[serde(crate = "rocket::serde")]
pub struct RecipeInput {
    pub id: Option<Uuid>,
    pub name: Option<String>,
    pub ingredients: Option<Vec<String>>
}
