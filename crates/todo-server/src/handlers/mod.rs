pub mod health;
pub mod items;
pub mod lists;
pub mod users;
