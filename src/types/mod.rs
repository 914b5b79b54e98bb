pub mod condition;
pub mod feature;
pub mod forecast;
pub mod location;
