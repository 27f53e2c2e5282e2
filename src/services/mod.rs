pub mod boarding;
pub mod export;
pub mod layout;
