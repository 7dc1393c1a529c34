pub mod layers;
pub mod rules;
pub mod score;
