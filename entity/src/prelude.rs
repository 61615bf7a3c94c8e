pub use super::level::Entity as Level;
pub use super::member::Entity as Member;
pub use super::player::Entity as Player;
pub use super::server::Entity as Server;
