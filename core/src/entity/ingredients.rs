use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "ingredients")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub recipe_id: Uuid,
    pub quantified_food_id: Uuid,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::recipes::Entity",
        from = "Column::RecipeId",
        to = "super::recipes::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Recipes,
    #[sea_orm(
        belongs_to = "super::quantified_food_items::Entity",
        from = "Column::QuantifiedFoodId",
        to = "super::quantified_food_items::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    QuantifiedFoodItems,
}

impl Related<super::recipes::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Recipes.def()
    }
}

impl Related<super::quantified_food_items::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::QuantifiedFoodItems.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
