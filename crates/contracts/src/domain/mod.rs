pub mod crm;
pub mod inventory;
pub mod production;
pub mod purchasing;
