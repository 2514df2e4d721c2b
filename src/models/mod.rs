//! Core data models for salesdash
//!
//! This module contains the dataset built from an upload and the money
//! type used by every aggregate.

pub mod dataset;
pub mod money;

pub use dataset::{
    Column, ColumnKind, ColumnValues, Dataset, CATEGORY, ORDER_DATE, PROFIT, REQUIRED_COLUMNS,
    SALES,
};
pub use money::{Money, MoneyParseError};
