pub use super::camp::Entity as Camp;
pub use super::feedback::Entity as Feedback;
pub use super::registration::Entity as Registration;
pub use super::user::Entity as User;
