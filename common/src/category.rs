//! 垃圾分类类别
//!
//! 上海市生活垃圾四分类：可回收物、有害垃圾、湿垃圾、干垃圾。

use crate::error::Error;
use serde::{Deserialize, Serialize};

/// 垃圾类别
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    /// 可回收物
    #[serde(rename = "可回收物")]
    Recyclable,
    /// 有害垃圾
    #[serde(rename = "有害垃圾")]
    Hazardous,
    /// 湿垃圾（厨余垃圾）
    #[serde(rename = "湿垃圾")]
    Wet,
    /// 干垃圾（其他垃圾）
    #[serde(rename = "干垃圾")]
    Dry,
}

impl Category {
    /// 全部类别（指南中的显示顺序）
    pub const ALL: [Category; 4] = [
        Category::Recyclable,
        Category::Hazardous,
        Category::Wet,
        Category::Dry,
    ];

    /// 中文名称
    pub fn label(&self) -> &'static str {
        match self {
            Category::Recyclable => "可回收物",
            Category::Hazardous => "有害垃圾",
            Category::Wet => "湿垃圾",
            Category::Dry => "干垃圾",
        }
    }

    /// 英文名称
    pub fn english_name(&self) -> &'static str {
        match self {
            Category::Recyclable => "recyclable",
            Category::Hazardous => "hazardous",
            Category::Wet => "wet",
            Category::Dry => "dry",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl std::str::FromStr for Category {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "可回收物" | "可回收" | "recyclable" => Ok(Category::Recyclable),
            "有害垃圾" | "有害" | "hazardous" => Ok(Category::Hazardous),
            "湿垃圾" | "湿" | "厨余垃圾" | "wet" | "food" | "kitchen" => Ok(Category::Wet),
            "干垃圾" | "干" | "其他垃圾" | "dry" | "residual" => Ok(Category::Dry),
            _ => Err(Error::UnknownCategory(s.to_string())),
        }
    }
}
