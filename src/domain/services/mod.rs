pub mod city_resolver;
pub mod token_service;
