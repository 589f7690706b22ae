//! 客户端视图模型
//!
//! 地区与分类是客户端静态数据，会话期间不可变；
//! 其余类型均为画面之间传递的瞬态上下文，不在客户端长期持有。

use leptos::prelude::*;

/// 行政区划单位（市/区），用于限定排放规则查询范围
#[derive(Debug, Clone, PartialEq)]
pub struct Region {
    /// UI 稳定键
    pub id: &'static str,
    /// 后端地区表主键，发起地区相关查询前必须存在
    pub db_id: i64,
    pub city: &'static str,
    pub district: &'static str,
}

/// 客户端定义的废弃物分类
#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    pub id: &'static str,
    pub name: &'static str,
    pub icon: &'static str,
    pub color: &'static str,
    pub description: &'static str,
}

/// 反馈登记对象。仅在"打开反馈"与提交/取消之间存在。
#[derive(Debug, Clone, PartialEq)]
pub struct FeedbackTarget {
    pub trash_detail_id: i64,
    /// 仅用于展示
    pub item_name: String,
}

/// 修改回路中的反馈
#[derive(Debug, Clone, PartialEq)]
pub struct EditingFeedback {
    pub id: i64,
    pub content: String,
    /// 后端更新契约要求回传的外键（@NotNull），本身不可单独编辑
    pub trash_detail_id: i64,
}

pub const CITIES: [&str; 2] = ["수원시", "서울특별시"];

pub const REGIONS: [Region; 9] = [
    Region { id: "suwon-jangan", db_id: 4, city: "수원시", district: "장안구" },
    Region { id: "suwon-paldal", db_id: 1, city: "수원시", district: "팔달구" },
    Region { id: "suwon-gwonseon", db_id: 2, city: "수원시", district: "권선구" },
    Region { id: "suwon-yeongtong", db_id: 3, city: "수원시", district: "영통구" },
    Region { id: "seoul-gangnam", db_id: 5, city: "서울특별시", district: "강남구" },
    Region { id: "seoul-seocho", db_id: 6, city: "서울특별시", district: "서초구" },
    Region { id: "seoul-songpa", db_id: 7, city: "서울특별시", district: "송파구" },
    Region { id: "seoul-mapo", db_id: 8, city: "서울특별시", district: "마포구" },
    Region { id: "seoul-yongsan", db_id: 9, city: "서울특별시", district: "용산구" },
];

impl Region {
    /// 按 UI 键查找地区
    pub fn find(id: &str) -> Option<&'static Region> {
        REGIONS.iter().find(|r| r.id == id)
    }

    /// 会话默认地区（수원시 팔달구）
    pub fn default_region() -> &'static Region {
        &REGIONS[1]
    }

    /// 所属城市的地区列表
    pub fn in_city(city: &str) -> impl Iterator<Item = &'static Region> {
        REGIONS.iter().filter(move |r| r.city == city)
    }

    pub fn label(&self) -> String {
        format!("{} {}", self.city, self.district)
    }
}

pub const CATEGORIES: [Category; 8] = [
    Category { id: "plastic", name: "플라스틱", icon: "♻️", color: "bg-blue-100", description: "페트병, 용기류" },
    Category { id: "paper", name: "종이", icon: "📄", color: "bg-yellow-100", description: "박스, 신문, 책" },
    Category { id: "can", name: "캔/고철", icon: "🥫", color: "bg-gray-100", description: "음료수캔, 철재" },
    Category { id: "glass", name: "유리", icon: "🍾", color: "bg-green-100", description: "병, 유리용기" },
    Category { id: "vinyl", name: "비닐", icon: "🛍️", color: "bg-purple-100", description: "비닐봉투, 랩" },
    Category { id: "styrofoam", name: "스티로폼", icon: "📦", color: "bg-pink-100", description: "포장재, 완충재" },
    Category { id: "food", name: "음식물", icon: "🍎", color: "bg-orange-100", description: "생선류 제외" },
    Category { id: "general", name: "일반쓰레기", icon: "🗑️", color: "bg-red-100", description: "종량제봉투 사용" },
];

/// 搜索框下方的快捷品目
pub const POPULAR_ITEMS: [&str; 8] = [
    "페트병", "스티로폼", "테이크아웃컵", "과자봉지", "택배박스", "종이컵", "배달용기", "우유팩",
];

impl Category {
    pub fn find_by_id(id: &str) -> Option<&'static Category> {
        CATEGORIES.iter().find(|c| c.id == id)
    }

    /// 后端品目记录里的分类是韩文名称，反查客户端键
    pub fn find_by_name(name: &str) -> Option<&'static Category> {
        CATEGORIES.iter().find(|c| c.name == name)
    }
}

/// 会话级选中地区。重新选择时整体替换，不做部分更新。
#[derive(Clone, Copy)]
pub struct SelectedRegion(pub RwSignal<Region>);

pub fn provide_selected_region() -> SelectedRegion {
    let region = SelectedRegion(RwSignal::new(Region::default_region().clone()));
    provide_context(region);
    region
}

pub fn use_selected_region() -> SelectedRegion {
    use_context::<SelectedRegion>().expect("SelectedRegion should be provided")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn region_lookup_by_symbolic_id() {
        let region = Region::find("suwon-yeongtong").unwrap();
        assert_eq!(region.db_id, 3);
        assert_eq!(region.label(), "수원시 영통구");
        assert!(Region::find("busan-haeundae").is_none());
    }

    #[test]
    fn default_region_is_paldal() {
        let region = Region::default_region();
        assert_eq!(region.id, "suwon-paldal");
        assert_eq!(region.db_id, 1);
    }

    #[test]
    fn region_ids_are_unique() {
        let mut ids: Vec<&str> = REGIONS.iter().map(|r| r.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), REGIONS.len());
    }

    #[test]
    fn every_region_belongs_to_a_listed_city() {
        for region in &REGIONS {
            assert!(CITIES.contains(&region.city), "{}", region.id);
        }
        assert_eq!(Region::in_city("수원시").count(), 4);
        assert_eq!(Region::in_city("서울특별시").count(), 5);
    }

    #[test]
    fn category_reverse_lookup_by_korean_name() {
        assert_eq!(Category::find_by_name("플라스틱").unwrap().id, "plastic");
        assert!(Category::find_by_name("건전지").is_none());
    }
}
