pub mod get_profile_usecase;
pub mod register_user_usecase;
