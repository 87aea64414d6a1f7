use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: String,
    pub role: String,
    pub registered_on: DateTimeWithTimeZone,
    pub current_login: Option<DateTimeWithTimeZone>,
    pub last_login: Option<DateTimeWithTimeZone>,
    pub current_login_ip: Option<String>,
    pub last_login_ip: Option<String>,
    pub total_logins: i32,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::credentials::Entity")]
    Credentials,
    #[sea_orm(has_many = "super::auth_sessions::Entity")]
    AuthSessions,
    #[sea_orm(has_many = "super::pantry_items::Entity")]
    PantryItems,
    #[sea_orm(has_many = "super::recipes::Entity")]
    Recipes,
    #[sea_orm(has_many = "super::shopping_lists::Entity")]
    ShoppingLists,
    #[sea_orm(has_many = "super::wasted_food::Entity")]
    WastedFood,
}

impl Related<super::credentials::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Credentials.def()
    }
}

impl Related<super::auth_sessions::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AuthSessions.def()
    }
}

impl Related<super::pantry_items::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PantryItems.def()
    }
}

impl Related<super::recipes::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Recipes.def()
    }
}

impl Related<super::shopping_lists::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ShoppingLists.def()
    }
}

impl Related<super::wasted_food::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::WastedFood.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
