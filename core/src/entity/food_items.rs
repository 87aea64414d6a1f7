use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "food_items")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub name: String,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::quantified_food_items::Entity")]
    QuantifiedFoodItems,
}

impl Related<super::quantified_food_items::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::QuantifiedFoodItems.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
