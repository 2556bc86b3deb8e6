use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use url::Url;

/// Wire and display format of a remember date.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parses a `YYYY-MM-DD` date. Input chrono would otherwise normalize, such as
/// `2024-3-5`, is rejected.
pub fn parse_remember_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, DATE_FORMAT)
        .ok()
        .filter(|d| d.format(DATE_FORMAT).to_string() == s)
}

mod remember_date_format {
    use chrono::NaiveDate;
    use serde::{de, Deserialize, Deserializer, Serializer};

    use super::{parse_remember_date, DATE_FORMAT};

    pub fn serialize<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&date.format(DATE_FORMAT))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse_remember_date(&raw)
            .ok_or_else(|| de::Error::custom(format!("remember_date is not YYYY-MM-DD: {}", raw)))
    }
}

/// A saved bookmark as returned by the remote store.
///
/// The title doubles as the record key for deletes; the store assigns no id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bookmark {
    pub title: String,
    pub url: String,
    #[serde(with = "remember_date_format")]
    pub remember_date: NaiveDate,
}

impl Bookmark {
    /// Hostname of the bookmarked URL, used for favicons and list rendering.
    pub fn host(&self) -> Option<String> {
        Url::parse(&self.url)
            .ok()
            .and_then(|u| u.host_str().map(str::to_string))
    }

    /// Remember date formatted `DD/MM/YYYY`.
    pub fn display_date(&self) -> String {
        self.remember_date.format("%d/%m/%Y").to_string()
    }
}

/// The form contents while a bookmark is being edited.
///
/// Fields hold raw user input; nothing here is validated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookmarkDraft {
    pub title: String,
    pub url: String,
    pub remember_date: String,
}

impl BookmarkDraft {
    pub fn new(title: &str, url: &str, remember_date: &str) -> Self {
        Self {
            title: title.to_string(),
            url: url.to_string(),
            remember_date: remember_date.to_string(),
        }
    }

    /// Resets every field to the empty string.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Updates one field by its form name. Returns `false` for unknown names.
    pub fn set_field(&mut self, field: &str, value: &str) -> bool {
        let slot = match field {
            "title" => &mut self.title,
            "url" => &mut self.url,
            "remember_date" => &mut self.remember_date,
            _ => return false,
        };
        *slot = value.to_string();
        true
    }
}

/// Which subset of bookmarks the list view shows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    #[default]
    All,
    Today,
}

impl Tab {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tab::All => "all",
            Tab::Today => "today",
        }
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tab {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(Tab::All),
            "today" => Ok(Tab::Today),
            other => Err(format!("unknown tab: {}", other)),
        }
    }
}
