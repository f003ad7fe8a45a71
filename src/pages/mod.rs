//! Pages
//!
//! Top-level page components for each route.

pub mod contact;
pub mod events;
pub mod home;
pub mod life_groups;
pub mod ministries;

pub use contact::Contact;
pub use events::Events;
pub use home::Home;
pub use life_groups::LifeGroups;
pub use ministries::Ministries;
