use std::sync::{ Mutex, Arc };
use uuid::Uuid;
use crate::api::IdGenerator;
use crate::api::models::Recipe;

const RECIPE_NOT_FOUND_ERROR: &str = "No recipe with that id";

pub struct RecipeService {
    id_generator: Box<dyn IdGenerator>,
    recipes: Arc<Mutex<Vec<Recipe>>>
}

impl RecipeService {
    pub fn new(id_generator: Box<dyn IdGenerator>, recipes: Arc<Mutex<Vec<Recipe>>>) -> RecipeService {
        RecipeService {
            id_generator,
            recipes
        }
    }

    pub fn get_recipes(&self) -> Vec<Recipe> {
        self.recipes.lock().unwrap().clone()
    }

    pub fn add_recipe(&self, name: String, ingredients: Vec<String>) -> Recipe {
        let recipe = Recipe {
            id: self.id_generator.next_id(),
            name,
            ingredients
        };
        log::info!("Adding recipe \"{}\" ({})", recipe.name, recipe.id);
        self.recipes.lock().unwrap().push(recipe.clone());
        recipe
    }

    pub fn update_recipe(&self, id: Uuid, name: String, ingredients: Vec<String>) -> Result<(), String> {
        let mut recipes = self.recipes.lock().unwrap();
        match recipes.iter_mut().find(|recipe| recipe.id == id) {
            Some(recipe) => {
                log::info!("Updating recipe \"{}\" ({})", name, id);
                recipe.name = name;
                recipe.ingredients = ingredients;
                Ok(())
            },
            None => Err(RECIPE_NOT_FOUND_ERROR.to_string())
        }
    }

    pub fn remove_recipe(&self, id: Uuid) -> Result<(), String> {
        let mut recipes = self.recipes.lock().unwrap();
        match recipes.iter().position(|recipe| recipe.id == id) {
            Some(index) => {
                let removed = recipes.remove(index);
                log::info!("Removed recipe \"{}\" ({})", removed.name, removed.id);
                Ok(())
            },
            None => Err(RECIPE_NOT_FOUND_ERROR.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{ AtomicU64, Ordering };
    use super::*;

    struct SequentialIdGenerator {
        next: AtomicU64
    }

    impl IdGenerator for SequentialIdGenerator {
        fn next_id(&self) -> Uuid {
            Uuid::from_u128(self.next.fetch_add(1, Ordering::SeqCst) as u128)
        }
    }

    fn service_with_recipes(recipes: Vec<Recipe>) -> RecipeService {
        let id_generator = SequentialIdGenerator { next: AtomicU64::new(100) };
        RecipeService::new(Box::new(id_generator), Arc::new(Mutex::new(recipes)))
    }

    #[test]
    fn add_recipe_assigns_unique_sequential_ids() {
        let service = service_with_recipes(vec![]);
        let first = service.add_recipe(String::from("toast"), vec![String::from("bread")]);
        let second = service.add_recipe(String::from("cereal"), vec![String::from("milk"), String::from("cereal")]);
        assert_eq!(first.id, Uuid::from_u128(100));
        assert_eq!(second.id, Uuid::from_u128(101));
        assert_ne!(first.id, second.id);
    }

    #[test]
    fn add_recipe_appends_in_insertion_order() {
        let service = service_with_recipes(vec![]);
        let first = service.add_recipe(String::from("toast"), vec![String::from("bread")]);
        let second = service.add_recipe(String::from("cereal"), vec![String::from("milk")]);
        let recipes = service.get_recipes();
        assert_eq!(recipes, vec![first, second]);
    }

    #[test]
    fn update_recipe_overwrites_fields_but_not_id() {
        let service = service_with_recipes(vec![]);
        let original = service.add_recipe(String::from("cake"), vec![String::from("sugar"), String::from("flour")]);
        service.update_recipe(original.id, String::from("orange-juice"), vec![String::from("oranges")]).unwrap();
        let recipes = service.get_recipes();
        assert_eq!(recipes.len(), 1);
        assert_eq!(recipes[0].id, original.id);
        assert_eq!(recipes[0].name, "orange-juice");
        assert_eq!(recipes[0].ingredients, vec![String::from("oranges")]);
    }

    #[test]
    fn update_recipe_with_unknown_id_is_an_error() {
        let service = service_with_recipes(vec![]);
        let result = service.update_recipe(Uuid::from_u128(999), String::from("ghost"), vec![]);
        assert!(result.is_err());
        assert!(service.get_recipes().is_empty());
    }

    #[test]
    fn remove_recipe_deletes_only_the_matching_recipe() {
        let service = service_with_recipes(vec![]);
        let first = service.add_recipe(String::from("toast"), vec![String::from("bread")]);
        let second = service.add_recipe(String::from("cereal"), vec![String::from("milk")]);
        service.remove_recipe(first.id).unwrap();
        assert_eq!(service.get_recipes(), vec![second]);
    }

    #[test]
    fn remove_recipe_twice_is_an_error_the_second_time() {
        let service = service_with_recipes(vec![]);
        let recipe = service.add_recipe(String::from("toast"), vec![String::from("bread")]);
        assert!(service.remove_recipe(recipe.id).is_ok());
        assert!(service.remove_recipe(recipe.id).is_err());
        assert!(service.get_recipes().is_empty());
    }
}
