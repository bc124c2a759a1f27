use rocket::serde::Deserialize;

#[derive(Deserialize)]
#[serde(crate = "rocket::serde")]
pub struct RecipeSeed {
    pub name: String,
    pub ingredients: Vec<String>
}
