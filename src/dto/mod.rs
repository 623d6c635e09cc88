pub mod characters;
pub mod favorites;
pub mod planets;
