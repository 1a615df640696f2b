//! 급탕 히트펌프 사이징/투자 회수 계산 모듈 모음.

pub mod catalog;
pub mod constants;
pub mod economics;
pub mod fx;
pub mod input;
pub mod result;
pub mod sizing;

pub use catalog::{CandidateProduct, CatalogError, CatalogProvider, FileCatalog, StaticCatalog};
pub use input::*;
pub use result::*;
pub use sizing::{calculate_heat_pump, calculate_heat_pump_with_fx};
