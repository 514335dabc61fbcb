pub mod dashboard;
pub mod health;
pub mod meta;
pub mod objects;
pub mod schema;
