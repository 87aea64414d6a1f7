use crate::{
    domain::{food::entities::QuantifiedFood, waste::entities::WastedFood},
    entity::wasted_food,
};

pub fn map_wasted(model: &wasted_food::Model, qfood: QuantifiedFood) -> WastedFood {
    WastedFood {
        id: model.id,
        user_id: model.user_id,
        qfood,
        expired: model.expired.clone(),
        recorded_at: model.recorded_at.to_utc(),
    }
}
