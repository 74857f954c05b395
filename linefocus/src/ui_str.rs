// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Every user visible string, per locale.

use strum_macros::{Display, EnumString};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Display, EnumString)]
pub enum Locale {
    #[default]
    #[strum(to_string = "en")]
    English,
    #[strum(to_string = "zh-tw", serialize = "zh_tw")]
    TraditionalChinese,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UiStrings {
    pub placeholder: &'static str,
    pub copied_all: &'static str,
    pub copy_failed: &'static str,
    pub show_all: &'static str,
    pub focus_mode: &'static str,
    pub copy_all: &'static str,
    pub ok: &'static str,
    pub too_small: &'static str,
}

const ENGLISH: UiStrings = UiStrings {
    placeholder: "start typing…",
    copied_all: "Copied all content!",
    copy_failed: "Copy failed",
    show_all: "Show all",
    focus_mode: "Focus mode",
    copy_all: "Copy all",
    ok: "OK",
    too_small: "Window too small",
};

const TRADITIONAL_CHINESE: UiStrings = UiStrings {
    placeholder: "開始輸入...",
    copied_all: "已複製全部內容！",
    copy_failed: "複製失敗",
    show_all: "顯示全部",
    focus_mode: "專注模式",
    copy_all: "複製全部",
    ok: "確定",
    too_small: "視窗太小",
};

impl Locale {
    #[must_use]
    pub fn strings(self) -> &'static UiStrings {
        match self {
            Locale::English => &ENGLISH,
            Locale::TraditionalChinese => &TRADITIONAL_CHINESE,
        }
    }
}

impl UiStrings {
    /// Label of the mode toggle button. It names the mode the button switches to.
    #[must_use]
    pub fn toggle_label(&self, show_all: bool) -> &'static str {
        if show_all { self.focus_mode } else { self.show_all }
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use test_case::test_case;

    use super::*;

    #[test_case("en" => Ok(Locale::English))]
    #[test_case("zh-tw" => Ok(Locale::TraditionalChinese))]
    #[test_case("zh_tw" => Ok(Locale::TraditionalChinese))]
    fn test_parse_locale(input: &str) -> Result<Locale, strum::ParseError> {
        Locale::from_str(input)
    }

    #[test]
    fn test_unknown_locale() { assert!(Locale::from_str("fr").is_err()); }

    #[test]
    fn test_toggle_label_names_next_mode() {
        let strings = Locale::English.strings();
        assert_eq!(strings.toggle_label(false), "Show all");
        assert_eq!(strings.toggle_label(true), "Focus mode");
    }

    #[test]
    fn test_display_round_trips() {
        assert_eq!(Locale::TraditionalChinese.to_string(), "zh-tw");
        assert_eq!(Locale::TraditionalChinese.strings().copied_all, "已複製全部內容！");
    }
}
