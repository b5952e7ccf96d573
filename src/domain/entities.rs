pub mod project;
pub mod quote;
pub mod skill;
pub mod user;
