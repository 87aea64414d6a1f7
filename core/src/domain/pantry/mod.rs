pub mod entities;
pub mod ports;
pub mod services;
pub mod shelf_life;
pub mod value_objects;
