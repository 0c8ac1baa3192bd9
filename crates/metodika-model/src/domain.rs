use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;

/// Subject category of a teaching material.
///
/// The catalog works over a fixed set of categories; the filter bar and the
/// author specialization badge both draw from this enum, so an out-of-set
/// category cannot be selected or stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Математика")]
    Mathematics,
    #[serde(rename = "Литература")]
    Literature,
    #[serde(rename = "Педагогика")]
    Pedagogy,
    #[serde(rename = "ИКТ")]
    Ict,
    #[serde(rename = "История")]
    History,
    #[serde(rename = "Биология")]
    Biology,
}

impl Category {
    /// Returns the display label as it appears in the filter bar.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Mathematics => "Математика",
            Category::Literature => "Литература",
            Category::Pedagogy => "Педагогика",
            Category::Ict => "ИКТ",
            Category::History => "История",
            Category::Biology => "Биология",
        }
    }

    /// All categories in filter-bar order.
    pub fn all() -> &'static [Category] {
        &[
            Category::Mathematics,
            Category::Literature,
            Category::Pedagogy,
            Category::Ict,
            Category::History,
            Category::Biology,
        ]
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Category {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Математика" => Ok(Category::Mathematics),
            "Литература" => Ok(Category::Literature),
            "Педагогика" => Ok(Category::Pedagogy),
            "ИКТ" => Ok(Category::Ict),
            "История" => Ok(Category::History),
            "Биология" => Ok(Category::Biology),
            _ => Err(ModelError::UnknownCategory(s.to_string())),
        }
    }
}

/// Category selector for the catalog filter.
///
/// `All` is the "Все" sentinel: it matches every material. `Only` matches by
/// strict equality against `Material::category`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    /// Returns true if a material in `category` passes this filter.
    pub fn matches(&self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(selected) => *selected == category,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CategoryFilter::All => "Все",
            CategoryFilter::Only(category) => category.as_str(),
        }
    }

    /// All filter options in filter-bar order ("Все" first).
    pub fn all() -> Vec<CategoryFilter> {
        let mut options = vec![CategoryFilter::All];
        options.extend(Category::all().iter().map(|c| CategoryFilter::Only(*c)));
        options
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for CategoryFilter {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim() == "Все" {
            Ok(CategoryFilter::All)
        } else {
            s.parse().map(CategoryFilter::Only)
        }
    }
}

/// Metric the catalog list is ordered by. Always descending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    /// Publication date, newest first.
    #[default]
    Date,
    /// Like count.
    Likes,
    /// Download count.
    Downloads,
    /// Denormalized comment count carried on the material.
    Comments,
}

impl SortKey {
    /// Display label for the sort dropdown.
    pub fn label(&self) -> &'static str {
        match self {
            SortKey::Date => "По дате публикации",
            SortKey::Likes => "По популярности",
            SortKey::Downloads => "По загрузкам",
            SortKey::Comments => "По обсуждаемости",
        }
    }

    /// All sort keys in dropdown order.
    pub fn all() -> &'static [SortKey] {
        &[
            SortKey::Date,
            SortKey::Likes,
            SortKey::Downloads,
            SortKey::Comments,
        ]
    }
}
