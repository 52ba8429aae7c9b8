use crate::config::FIRST_YEAR;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Language {
    #[default]
    All,
    English,
    Hindi,
}

impl Language {
    pub fn display_name(&self) -> &'static str {
        match self {
            Language::All => "All",
            Language::English => "English",
            Language::Hindi => "Hindi",
        }
    }

    pub fn all_variants() -> Vec<Self> {
        vec![Language::All, Language::English, Language::Hindi]
    }

    /// Value of the `language` query parameter; `None` means the parameter is omitted.
    pub fn api_code(&self) -> Option<u8> {
        match self {
            Language::All => None,
            Language::Hindi => Some(1),
            Language::English => Some(2),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CategoryFilter {
    #[default]
    All,
    Id(String),
}

impl CategoryFilter {
    pub fn api_id(&self) -> Option<&str> {
        match self {
            CategoryFilter::All => None,
            CategoryFilter::Id(id) => Some(id),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum YearFilter {
    #[default]
    All,
    Year(i32),
}

impl YearFilter {
    /// Label shown on the dropdown toggle.
    pub fn button_label(&self) -> String {
        match self {
            YearFilter::All => "Year".to_string(),
            YearFilter::Year(y) => y.to_string(),
        }
    }

    /// Label shown inside the dropdown menu.
    pub fn menu_label(&self) -> String {
        match self {
            YearFilter::All => "All".to_string(),
            YearFilter::Year(y) => y.to_string(),
        }
    }

    /// "ALL" followed by `current_year` down to the first catalogued year.
    pub fn choices(current_year: i32) -> Vec<Self> {
        std::iter::once(YearFilter::All)
            .chain((FIRST_YEAR..=current_year.max(FIRST_YEAR)).rev().map(YearFilter::Year))
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortOrder {
    #[default]
    Latest,
    Views,
    Oldest,
}

impl SortOrder {
    pub fn display_name(&self) -> &'static str {
        match self {
            SortOrder::Latest => "Latest",
            SortOrder::Views => "Most viewed",
            SortOrder::Oldest => "Oldest",
        }
    }

    pub fn all_variants() -> Vec<Self> {
        vec![SortOrder::Latest, SortOrder::Views, SortOrder::Oldest]
    }
}
