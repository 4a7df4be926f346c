pub mod checkout;
pub mod pricing;
pub mod session;
