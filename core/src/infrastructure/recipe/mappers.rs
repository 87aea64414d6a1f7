use crate::{
    domain::{
        food::entities::QuantifiedFood,
        recipe::entities::{InUseRecipe, Ingredient, Rating, Recipe},
    },
    entity::{in_use_recipes, ingredients, ratings, recipes},
};

impl From<&recipes::Model> for Recipe {
    fn from(model: &recipes::Model) -> Self {
        Self {
            id: model.id,
            user_id: model.user_id,
            name: model.name.clone(),
            method: model.method.clone(),
            serves: model.serves,
            calories: model.calories,
            rating: model.rating,
            created_at: model.created_at.to_utc(),
            updated_at: model.updated_at.to_utc(),
        }
    }
}

impl From<recipes::Model> for Recipe {
    fn from(model: recipes::Model) -> Self {
        Self::from(&model)
    }
}

pub fn map_ingredient(model: &ingredients::Model, qfood: QuantifiedFood) -> Ingredient {
    Ingredient {
        id: model.id,
        recipe_id: model.recipe_id,
        qfood,
    }
}

impl From<&in_use_recipes::Model> for InUseRecipe {
    fn from(model: &in_use_recipes::Model) -> Self {
        Self {
            id: model.id,
            user_id: model.user_id,
            recipe_id: model.recipe_id,
            started_at: model.started_at.to_utc(),
        }
    }
}

impl From<in_use_recipes::Model> for InUseRecipe {
    fn from(model: in_use_recipes::Model) -> Self {
        Self::from(&model)
    }
}

impl From<&ratings::Model> for Rating {
    fn from(model: &ratings::Model) -> Self {
        Self {
            id: model.id,
            user_id: model.user_id,
            recipe_id: model.recipe_id,
            value: model.value,
            created_at: model.created_at.to_utc(),
            updated_at: model.updated_at.to_utc(),
        }
    }
}

impl From<ratings::Model> for Rating {
    fn from(model: ratings::Model) -> Self {
        Self::from(&model)
    }
}
