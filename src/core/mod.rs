pub mod analyser;
pub mod engine;
pub mod generator;
pub mod validator;

pub use crate::domain::model::{Combination, Draw, HitDetail, HitReport, NumberSet};
pub use crate::domain::ports::{ConfigProvider, RequestSource};
pub use crate::utils::error::Result;
