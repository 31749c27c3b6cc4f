pub mod contact;
pub mod lenient;
pub mod project;
pub mod record;
pub mod skill;
