mod recipe;
mod recipe_input;
mod recipe_seed;
mod input_error;

pub use recipe::*;
pub use recipe_input::*;
pub use recipe_seed::*;
pub use input_error::*;
