use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "barcodes")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub barcode: String,
    pub quantified_food_id: Uuid,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::quantified_food_items::Entity",
        from = "Column::QuantifiedFoodId",
        to = "super::quantified_food_items::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    QuantifiedFoodItems,
}

impl Related<super::quantified_food_items::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::QuantifiedFoodItems.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
