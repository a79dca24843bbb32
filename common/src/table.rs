//! 垃圾分类对照表
//!
//! 类别 → 物品列表的固定映射。进程启动后只读，不提供任何修改接口。
//! 物品名称按类别顺序、再按登记顺序保存，模糊匹配的并列排序依赖这一顺序。

use crate::category::Category;
use crate::error::Result;
use serde::Serialize;
use std::collections::HashMap;

/// 上海市生活垃圾分类数据（2023 修订版）
const SHANGHAI_ENTRIES: &[(Category, &[&str])] = &[
    (
        Category::Recyclable,
        &[
            "报纸", "书本", "纸箱", "包装纸盒", "广告单", "快递纸箱", "打印纸",
            "塑料瓶", "塑料玩具", "塑料桶", "塑料衣架", "塑料包装盒", "泡沫塑料",
            "玻璃瓶", "玻璃杯", "窗户玻璃", "镜子", "酒瓶",
            "金属罐", "金属餐具", "金属文具", "金属厨具", "金属工具", "钥匙",
            "旧衣服", "旧鞋子", "旧包包", "床单", "窗帘", "毛绒玩具",
            "牛奶盒", "饮料盒", "纸杯", "纸餐盒",
        ],
    ),
    (
        Category::Hazardous,
        &[
            "电池", "充电电池", "纽扣电池", "蓄电池", "荧光灯管", "节能灯",
            "药品", "药瓶", "药片", "胶囊", "温度计", "血压计",
            "化妆品", "指甲油", "染发剂", "消毒剂", "杀虫剂", "老鼠药",
            "油漆桶", "油漆", "油漆刷", "溶剂", "胶水", "强力胶",
            "X光片", "CT片", "相片底片", "废胶片",
        ],
    ),
    (
        Category::Wet,
        &[
            "剩菜剩饭", "菜叶", "果皮", "果核", "果壳", "瓜子壳",
            "茶叶渣", "咖啡渣", "中药渣", "宠物饲料", "鱼骨头", "虾壳",
            "蛋壳", "面包", "饼干", "蛋糕", "糖果", "坚果",
            "花卉", "绿植", "落叶", "树枝", "盆栽", "花盆土",
            "过期食品", "腐烂水果", "发霉食物", "剩饭", "剩面", "剩粥",
        ],
    ),
    (
        Category::Dry,
        &[
            "餐巾纸", "卫生纸", "湿纸巾", "尿不湿", "卫生巾", "纸尿裤",
            "塑料袋", "食品包装袋", "保鲜膜", "保鲜袋", "快递包装", "气泡膜",
            "一次性餐具", "一次性杯子", "一次性餐盒", "牙签", "吸管", "筷子",
            "烟蒂", "烟灰", "打火机", "创可贴", "棉签", "化妆棉",
            "笔", "橡皮", "胶带", "橡皮泥", "干燥剂", "防潮剂",
            "大骨头", "贝壳", "硬果壳", "毛发", "宠物粪便", "猫砂",
            "脏抹布", "旧毛巾", "破碗", "陶瓷", "雨伞", "打火机",
            "口罩", "手套", "袜子", "内衣", "旧袜子", "旧内衣",
        ],
    ),
];

lazy_static::lazy_static! {
    static ref SHANGHAI: ClassificationTable = ClassificationTable::from_entries(SHANGHAI_ENTRIES);
}

/// 一个类别及其物品
#[derive(Debug, Clone, Serialize)]
pub struct CategoryGroup {
    pub category: Category,
    pub items: Vec<String>,
}

/// 重复登记的物品
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DuplicateItem {
    pub item: String,
    /// 首次登记的类别（查询时采用）
    pub first: Category,
    /// 再次出现时所在的类别
    pub repeated: Category,
}

impl DuplicateItem {
    /// 是否被登记在两个不同的类别下
    pub fn is_conflict(&self) -> bool {
        self.first != self.repeated
    }
}

/// 分类对照表
#[derive(Debug, Clone, Default)]
pub struct ClassificationTable {
    groups: Vec<CategoryGroup>,
    index: HashMap<String, Category>,
    duplicates: Vec<DuplicateItem>,
}

impl ClassificationTable {
    /// 内置的上海市分类表
    pub fn shanghai() -> &'static ClassificationTable {
        &SHANGHAI
    }

    /// 从字面量构建。重复物品只保留首次出现的位置。
    pub fn from_entries(entries: &[(Category, &[&str])]) -> Self {
        let mut groups: Vec<CategoryGroup> = Vec::new();
        let mut index: HashMap<String, Category> = HashMap::new();
        let mut duplicates = Vec::new();

        for &(category, items) in entries {
            let group_pos = match groups.iter().position(|g| g.category == category) {
                Some(pos) => pos,
                None => {
                    groups.push(CategoryGroup { category, items: Vec::new() });
                    groups.len() - 1
                }
            };

            for &item in items {
                if let Some(&first) = index.get(item) {
                    duplicates.push(DuplicateItem {
                        item: item.to_string(),
                        first,
                        repeated: category,
                    });
                    continue;
                }
                index.insert(item.to_string(), category);
                groups[group_pos].items.push(item.to_string());
            }
        }

        Self { groups, index, duplicates }
    }

    /// 完全一致查询（区分大小写）
    pub fn lookup_category(&self, item: &str) -> Option<Category> {
        self.index.get(item).copied()
    }

    /// 全部物品（类别顺序 → 登记顺序）
    pub fn all_items(&self) -> impl Iterator<Item = (&str, Category)> + '_ {
        self.groups
            .iter()
            .flat_map(|g| g.items.iter().map(move |item| (item.as_str(), g.category)))
    }

    /// 某类别的物品列表
    pub fn items(&self, category: Category) -> &[String] {
        self.groups
            .iter()
            .find(|g| g.category == category)
            .map(|g| g.items.as_slice())
            .unwrap_or(&[])
    }

    pub fn groups(&self) -> &[CategoryGroup] {
        &self.groups
    }

    /// 构建时发现的重复物品
    pub fn duplicates(&self) -> &[DuplicateItem] {
        &self.duplicates
    }

    /// 跨类别的重复（数据冲突）
    pub fn conflicts(&self) -> impl Iterator<Item = &DuplicateItem> {
        self.duplicates.iter().filter(|d| d.is_conflict())
    }

    /// 物品总数（去重后）
    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// JSON 导出（保持类别顺序）
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.groups)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shanghai_has_all_categories() {
        let table = ClassificationTable::shanghai();
        let categories: Vec<Category> = table.groups().iter().map(|g| g.category).collect();
        assert_eq!(categories, Category::ALL.to_vec());
        for category in Category::ALL {
            assert!(!table.items(category).is_empty());
        }
    }

    #[test]
    fn test_lookup_category() {
        let table = ClassificationTable::shanghai();
        assert_eq!(table.lookup_category("电池"), Some(Category::Hazardous));
        assert_eq!(table.lookup_category("塑料瓶"), Some(Category::Recyclable));
        assert_eq!(table.lookup_category("果皮"), Some(Category::Wet));
        assert_eq!(table.lookup_category("猫砂"), Some(Category::Dry));
        assert_eq!(table.lookup_category("塑料"), None);
        assert_eq!(table.lookup_category("x光片"), None);
    }

    #[test]
    fn test_all_items_order() {
        let table = ClassificationTable::shanghai();
        let items: Vec<(&str, Category)> = table.all_items().collect();
        assert_eq!(items.first(), Some(&("报纸", Category::Recyclable)));
        assert_eq!(items.last(), Some(&("旧内衣", Category::Dry)));
        assert_eq!(items.len(), table.len());
    }

    #[test]
    fn test_repeated_item_is_recorded() {
        // 干垃圾中“打火机”登记了两次
        let table = ClassificationTable::shanghai();
        let duplicates = table.duplicates();
        assert_eq!(duplicates.len(), 1);
        assert_eq!(duplicates[0].item, "打火机");
        assert!(!duplicates[0].is_conflict());
        assert_eq!(table.items(Category::Dry).iter().filter(|i| *i == "打火机").count(), 1);
    }

    #[test]
    fn test_no_cross_category_conflicts() {
        let table = ClassificationTable::shanghai();
        let conflicts: Vec<_> = table.conflicts().collect();
        assert!(conflicts.is_empty(), "跨类别重复: {:?}", conflicts);
    }

    #[test]
    fn test_conflict_keeps_first_category() {
        let entries: &[(Category, &[&str])] = &[
            (Category::Recyclable, &["纸杯", "报纸"]),
            (Category::Dry, &["纸杯"]),
        ];
        let table = ClassificationTable::from_entries(entries);
        assert_eq!(table.lookup_category("纸杯"), Some(Category::Recyclable));
        assert_eq!(table.conflicts().count(), 1);
        assert!(table.items(Category::Dry).is_empty());
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_to_json_keeps_order() {
        let json = ClassificationTable::shanghai().to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value[0]["category"], "可回收物");
        assert_eq!(value[3]["category"], "干垃圾");
        assert_eq!(value[1]["items"][0], "电池");
    }
}
