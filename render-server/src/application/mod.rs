pub mod post_service;
pub mod regeneration;
pub mod strategy;
