pub mod bounding_box_resolver;
pub mod entity;
pub mod jwt_token_issuer;
pub mod user_repository;
