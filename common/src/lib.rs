//! Trash Sort Common Library
//!
//! 垃圾分类对照表与查询解析（CLI 与其他前端共用）

pub mod category;
pub mod error;
pub mod resolver;
pub mod similarity;
pub mod table;

pub use category::Category;
pub use error::{Error, Result};
pub use resolver::{
    resolve, Classification, MatchResult, Resolution, Resolver, ResolverOptions,
};
pub use similarity::Scorer;
pub use table::{CategoryGroup, ClassificationTable, DuplicateItem};
