mod api;

#[macro_use] extern crate rocket;
extern crate env_logger;
use rocket::{ Build, Rocket, State };
use rocket::http::Status;
use rocket::response::status;
use rocket::serde::json::Json;
use rocket::serde::uuid::Uuid;
use crate::api::models::{ Recipe, RecipeInput, InputError };
use crate::api::{ RecipeService, RecipeServiceFactory };

#[get("/recipes")]
fn recipes_get(recipe_service: &State<RecipeService>) -> Json<Vec<Recipe>> {
    Json(recipe_service.get_recipes())
}

#[post("/recipes", data = "<recipe_input>")]
fn recipes_post(recipe_service: &State<RecipeService>, recipe_input: Json<RecipeInput>) -> Result<status::Created<Json<Recipe>>, status::BadRequest<Json<InputError>>> {
    let recipe_input = recipe_input.into_inner();
    // Any id in the body is ignored; the service always assigns its own.
    let name = match recipe_input.name {
        Some(name) => name,
        None => return Err(status::BadRequest(Json(InputError { message: String::from("Expected a recipe name") })))
    };
    let ingredients = match recipe_input.ingredients {
        Some(ingredients) => ingredients,
        None => return Err(status::BadRequest(Json(InputError { message: String::from("Expected a list of ingredients") })))
    };
    let recipe = recipe_service.add_recipe(name, ingredients);
    Ok(status::Created::new(format!("/recipes/{}", recipe.id)).body(Json(recipe)))
}

#[put("/recipes/<id>", data = "<recipe_input>")]
fn recipes_put(recipe_service: &State<RecipeService>, id: Uuid, recipe_input: Json<RecipeInput>) -> Result<status::NoContent, status::Custom<Json<InputError>>> {
    let recipe_input = recipe_input.into_inner();
    if recipe_input.id.is_some() && recipe_input.id != Some(id) {
        return Err(status::Custom(Status::BadRequest, Json(InputError { message: String::from("Recipe id in body doesn't match the path") })));
    }
    let name = match recipe_input.name {
        Some(name) => name,
        None => return Err(status::Custom(Status::BadRequest, Json(InputError { message: String::from("Expected a recipe name") })))
    };
    let ingredients = match recipe_input.ingredients {
        Some(ingredients) => ingredients,
        None => return Err(status::Custom(Status::BadRequest, Json(InputError { message: String::from("Expected a list of ingredients") })))
    };
    match recipe_service.update_recipe(id, name, ingredients) {
        Ok(_) => Ok(status::NoContent),
        Err(error) => Err(status::Custom(Status::NotFound, Json(InputError { message: error })))
    }
}

#[delete("/recipes/<id>")]
fn recipes_delete(recipe_service: &State<RecipeService>, id: Uuid) -> Result<status::NoContent, status::NotFound<Json<InputError>>> {
    match recipe_service.remove_recipe(id) {
        Ok(_) => Ok(status::NoContent),
        Err(error) => Err(status::NotFound(Json(InputError { message: error })))
    }
}

fn build_rocket(recipe_service: RecipeService) -> Rocket<Build> {
    rocket::build()
        .mount("/", routes![recipes_get, recipes_post, recipes_put, recipes_delete])
        .manage(recipe_service)
}

#[launch]
fn rocket() -> _ {
    dotenv::dotenv().ok();
    env_logger::init();
    build_rocket(RecipeServiceFactory::create_or_panic())
}
