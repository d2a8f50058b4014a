//! This file serves as the root for all SeaORM entity modules.
//! The data models for the exercise tracking application live here:
//! a user owns an ordered log of exercise entries, modelled relationally
//! as a foreign key from `exercises` to `users`.

pub mod exercise;
pub mod user;

pub mod prelude {
    //! A prelude module for easy importing of all entities.
    pub use super::exercise::Entity as Exercise;
    pub use super::user::Entity as User;
}
