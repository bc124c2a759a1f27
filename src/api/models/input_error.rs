use rocket::serde::Serialize;

/// JSON body carried by 400 and 404 responses.
#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
pub struct InputError {
    pub message: String
}