pub mod announcements;
pub mod bills;
pub mod complaints;
pub mod dashboard;
pub mod documents;
pub mod health;
pub mod prediction;
pub mod properties;
pub mod rent_payments;
pub mod tenants;
