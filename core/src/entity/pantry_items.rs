use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "pantry_items")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub user_id: Uuid,
    #[sea_orm(unique)]
    pub quantified_food_id: Uuid,
    pub expiry: Option<String>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::UserId",
        to = "super::users::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Users,
    #[sea_orm(
        belongs_to = "super::quantified_food_items::Entity",
        from = "Column::QuantifiedFoodId",
        to = "super::quantified_food_items::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    QuantifiedFoodItems,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Users.def()
    }
}

impl Related<super::quantified_food_items::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::QuantifiedFoodItems.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
