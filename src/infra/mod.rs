pub mod factory;
pub mod identity;
pub mod repositories;
