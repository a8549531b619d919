pub mod gate;
pub mod geo;
pub mod ledger;
pub mod session;
pub mod shifts;
