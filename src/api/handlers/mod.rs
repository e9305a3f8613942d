// HTTP handlers, one self-contained request -> query -> response mapping each

pub mod health;
pub mod stats;
pub mod teams;
