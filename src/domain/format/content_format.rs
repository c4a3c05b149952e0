//! Format Context - Value Objects

use std::str::FromStr;

use crate::domain::DomainError;

/// 内容格式
///
/// 封闭集合，成员固定为四个
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ContentFormat {
    #[default]
    Article,
    SocialMedia,
    ClassOutline,
    ShortReflection,
}

impl ContentFormat {
    /// 全部格式，按展示顺序排列
    pub const ALL: [ContentFormat; 4] = [
        ContentFormat::Article,
        ContentFormat::SocialMedia,
        ContentFormat::ClassOutline,
        ContentFormat::ShortReflection,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Article => "article",
            Self::SocialMedia => "social_media",
            Self::ClassOutline => "class_outline",
            Self::ShortReflection => "short_reflection",
        }
    }

    /// 交互式菜单中的编号（1-4）
    pub fn from_menu_choice(choice: &str) -> Option<Self> {
        match choice.trim() {
            "1" => Some(Self::Article),
            "2" => Some(Self::SocialMedia),
            "3" => Some(Self::ClassOutline),
            "4" => Some(Self::ShortReflection),
            _ => None,
        }
    }
}

impl FromStr for ContentFormat {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|format| format.as_str() == s)
            .ok_or_else(|| DomainError::UnknownFormat(s.to_string()))
    }
}

impl std::fmt::Display for ContentFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
