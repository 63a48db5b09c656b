//! Static keyword catalog: the 20 subcategories and 3 categories.

use std::collections::BTreeMap;

/// One of the 20 fixed partitions of the keyword matrix.
///
/// Subcategory order matters: keyword ids are assigned by walking
/// [`SUBCATEGORIES`] front to back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Subcategory {
    /// Code such as "A-1". The letter before the dash names the category.
    pub code: &'static str,
    /// Display name, used as the keyword label prefix.
    pub display_name: &'static str,
    /// Number of keywords in this subcategory.
    pub count: u32,
    /// Hex color (#RRGGBB) shared by every keyword in the subcategory.
    pub color: &'static str,
}

impl Subcategory {
    const fn new(
        code: &'static str,
        display_name: &'static str,
        count: u32,
        color: &'static str,
    ) -> Self {
        Self {
            code,
            display_name,
            count,
            color,
        }
    }

    /// Returns the code of the category this subcategory belongs to ("A-1" -> "A").
    pub fn category_code(&self) -> &'static str {
        self.code
            .split_once('-')
            .map_or(self.code, |(category, _)| category)
    }
}

/// Top-level grouping used for summary statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Category {
    /// Category code ("A", "B" or "C").
    pub code: &'static str,
    /// Display name.
    pub name: &'static str,
    /// Declared keyword count; equals the sum of its subcategories.
    pub count: u32,
}

/// The 20 subcategories in id-assignment order.
pub const SUBCATEGORIES: [Subcategory; 20] = [
    // A: psychological
    Subcategory::new("A-1", "인지차원", 44, "#3B82F6"),
    Subcategory::new("A-2", "개방성차원", 29, "#06B6D4"),
    Subcategory::new("A-3", "에너지차원", 27, "#10B981"),
    Subcategory::new("A-4", "관계차원", 45, "#8B5CF6"),
    Subcategory::new("A-5", "정서차원", 31, "#F59E0B"),
    // B: neuroscientific
    Subcategory::new("B-1", "전전두엽계", 11, "#EF4444"),
    Subcategory::new("B-2", "측두두정계", 14, "#EC4899"),
    Subcategory::new("B-3", "변연계", 44, "#6366F1"),
    Subcategory::new("B-4", "기저핵계", 13, "#84CC16"),
    Subcategory::new("B-5", "뇌간계", 22, "#F97316"),
    Subcategory::new("B-6", "신경화학계", 23, "#14B8A6"),
    // C: improvement areas
    Subcategory::new("C-1", "불안스트레스", 19, "#DC2626"),
    Subcategory::new("C-2", "우울무기력", 16, "#7C2D12"),
    Subcategory::new("C-3", "분노공격성", 15, "#991B1B"),
    Subcategory::new("C-4", "중독의존", 9, "#92400E"),
    Subcategory::new("C-5", "사회부적응", 14, "#BE123C"),
    Subcategory::new("C-6", "강박완벽주의", 12, "#A21CAF"),
    Subcategory::new("C-7", "자기파괴", 9, "#581C87"),
    Subcategory::new("C-8", "인지왜곡", 22, "#1E1B4B"),
    Subcategory::new("C-9", "성격장애", 23, "#450A0A"),
];

/// The 3 top-level categories.
pub const CATEGORIES: [Category; 3] = [
    Category {
        code: "A",
        name: "심리학적",
        count: 176,
    },
    Category {
        code: "B",
        name: "신경과학적",
        count: 127,
    },
    Category {
        code: "C",
        name: "개선영역",
        count: 139,
    },
];

/// Looks up a subcategory by code.
pub fn find_subcategory(code: &str) -> Option<&'static Subcategory> {
    SUBCATEGORIES.iter().find(|sub| sub.code == code)
}

/// Sum of all subcategory counts.
pub fn total_keyword_count() -> u32 {
    SUBCATEGORIES.iter().map(|sub| sub.count).sum()
}

/// Per-category keyword counts computed from the subcategory table.
pub fn category_counts() -> BTreeMap<&'static str, u32> {
    let mut counts = BTreeMap::new();
    for sub in &SUBCATEGORIES {
        *counts.entry(sub.category_code()).or_insert(0) += sub.count;
    }
    counts
}
