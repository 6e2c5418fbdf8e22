/// Module containing the portfolio service interface
pub mod portfolio;
