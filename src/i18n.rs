//! User-facing messages
//!
//! Confirmation and generic error texts in the operator's chosen language.

use std::fmt;
use std::str::FromStr;

/// Language of the messages returned to clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    /// Traditional Chinese (Taiwan)
    #[default]
    ZhTw,
    /// English
    En,
}

/// Message catalogue for one locale.
#[derive(Debug)]
pub struct Messages {
    pub read_failed: &'static str,
    pub created: &'static str,
    pub updated: &'static str,
    pub deleted: &'static str,
    pub render_failed: &'static str,
    pub landing_title: &'static str,
}

static ZH_TW: Messages = Messages {
    read_failed: "尋找資料時發生錯誤！",
    created: "資料已新增成功！",
    updated: "資料已更新成功！",
    deleted: "您已將這筆資料刪除！",
    render_failed: "無法載入首頁！",
    landing_title: "學生資料管理系統",
};

static EN: Messages = Messages {
    read_failed: "An error occurred while finding data!",
    created: "Data has been added successfully!",
    updated: "Data has been updated successfully!",
    deleted: "You have deleted this record!",
    render_failed: "Unable to render the landing page!",
    landing_title: "Student Records",
};

impl Locale {
    pub fn messages(self) -> &'static Messages {
        match self {
            Locale::ZhTw => &ZH_TW,
            Locale::En => &EN,
        }
    }

    /// BCP 47 language tag, used for the landing page `lang` attribute.
    pub fn tag(self) -> &'static str {
        match self {
            Locale::ZhTw => "zh-TW",
            Locale::En => "en",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "zh-tw" | "zh-hant" | "zh" => Ok(Locale::ZhTw),
            "en" | "en-us" | "en-gb" => Ok(Locale::En),
            other => Err(format!("unsupported locale: {other}")),
        }
    }
}
