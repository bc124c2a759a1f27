use std::fs;
use std::sync::{ Arc, Mutex };
use rocket::serde::json::serde_json;
use crate::api::{ IdGenerator, RecipeService, UuidGenerator };
use crate::api::models::{ Recipe, RecipeSeed };

pub struct RecipeServiceFactory {}

impl RecipeServiceFactory {
    pub fn create_or_panic() -> RecipeService {
        let id_generator: Box<dyn IdGenerator> = Box::new(UuidGenerator {});
        let seeds = match dotenv::var("SEED_RECIPES_FILE_PATH") {
            Ok(seed_file_path) => {
                log::info!("Loading seed recipes from \"{}\"", seed_file_path);
                let seed_json = fs::read_to_string(seed_file_path).unwrap();
                Self::parse_seeds(&seed_json)
            },
            Err(_) => Self::get_default_seeds()
        };
        let initial_recipes = Self::recipes_from_seeds(seeds, id_generator.as_ref());
        log::info!("Starting with {} seed recipes", initial_recipes.len());

        RecipeService::new(id_generator, Arc::new(Mutex::new(initial_recipes)))
    }

    fn parse_seeds(seed_json: &str) -> Vec<RecipeSeed> {
        serde_json::from_str::<Vec<RecipeSeed>>(seed_json).unwrap()
    }

    fn recipes_from_seeds(seeds: Vec<RecipeSeed>, id_generator: &dyn IdGenerator) -> Vec<Recipe> {
        seeds.into_iter().map(|seed| Recipe {
            id: id_generator.next_id(),
            name: seed.name,
            ingredients: seed.ingredients
        }).collect()
    }

    fn get_default_seeds() -> Vec<RecipeSeed> {
        vec![
            RecipeSeed {
                name: String::from("boiled white rice"),
                ingredients: vec![
                    String::from("1 cup white rice"),
                    String::from("2 cups water"),
                    String::from("pinch of salt")
                ]
            },
            RecipeSeed {
                name: String::from("milkshake"),
                ingredients: vec![
                    String::from("2 tbsp cocoa"),
                    String::from("2 cups vanilla ice cream"),
                    String::from("1 cup milk")
                ]
            }
        ]
    }
}
