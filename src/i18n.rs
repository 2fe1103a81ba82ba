//! Localization tables.
//!
//! Every label shown on screen comes from one of the bundled language packs.
//! The set of languages is closed: a [`Language`] can only be one of the
//! bundled packs, so there is no lookup failure to handle.

use chrono::Weekday;
use serde::{Deserialize, Serialize};

/// Supported interface languages.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    En,
    Vi,
}

impl Default for Language {
    fn default() -> Self {
        Language::En
    }
}

impl Language {
    pub const ALL: [Language; 2] = [Language::En, Language::Vi];

    /// Return the short code used in configuration and on the selector.
    ///
    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Vi => "vi",
        }
    }

    /// Resolve a language from its code, ignoring case.
    ///
    pub fn from_code(code: &str) -> Option<Language> {
        Language::ALL
            .into_iter()
            .find(|language| language.code().eq_ignore_ascii_case(code.trim()))
    }

    /// Return the next language on the selector, wrapping around.
    ///
    pub fn next(&self) -> Language {
        match self {
            Language::En => Language::Vi,
            Language::Vi => Language::En,
        }
    }
}

/// Set of user-facing strings for one language.
///
#[derive(Debug, PartialEq, Eq)]
pub struct Labels {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub language: &'static str,
    pub current_time: &'static str,
    pub weather: &'static str,
    pub countdown_timer: &'static str,
    pub search_city: &'static str,
    pub temperature: &'static str,
    pub humidity: &'static str,
    pub wind_speed: &'static str,
    pub loading: &'static str,
    pub lookup_failed: &'static str,
    pub set_timer: &'static str,
    pub start: &'static str,
    pub pause: &'static str,
    pub reset: &'static str,
    pub hours: &'static str,
    pub minutes: &'static str,
    pub seconds: &'static str,
    pub time_up: &'static str,
    pub dismiss: &'static str,
    pub made_with: &'static str,
    pub by: &'static str,
    pub log_title: &'static str,
    pub mode_normal: &'static str,
    pub mode_search: &'static str,
    pub mode_edit: &'static str,
    pub mode_alert: &'static str,
    pub type_city: &'static str,
    pub type_digits: &'static str,
    pub hint_dismiss: &'static str,
    pub hint_quit: &'static str,
    pub hint_look_up: &'static str,
    pub hint_cancel: &'static str,
    pub hint_field: &'static str,
    pub hint_done: &'static str,
    pub hint_panel: &'static str,
    pub hint_language: &'static str,
    pub hint_timezone: &'static str,
    pub hint_search: &'static str,
    pub hint_set_timer: &'static str,
    pub hint_start_pause: &'static str,
    pub hint_reset: &'static str,
    pub hint_log: &'static str,
}

impl Labels {
    /// Return every label as a `(key, text)` pair.
    ///
    #[cfg(test)]
    pub fn entries(&self) -> Vec<(&'static str, &'static str)> {
        vec![
            ("title", self.title),
            ("subtitle", self.subtitle),
            ("language", self.language),
            ("currentTime", self.current_time),
            ("weather", self.weather),
            ("countdownTimer", self.countdown_timer),
            ("searchCity", self.search_city),
            ("temperature", self.temperature),
            ("humidity", self.humidity),
            ("windSpeed", self.wind_speed),
            ("loading", self.loading),
            ("lookupFailed", self.lookup_failed),
            ("setTimer", self.set_timer),
            ("start", self.start),
            ("pause", self.pause),
            ("reset", self.reset),
            ("hours", self.hours),
            ("minutes", self.minutes),
            ("seconds", self.seconds),
            ("timeUp", self.time_up),
            ("dismiss", self.dismiss),
            ("madeWith", self.made_with),
            ("by", self.by),
            ("logTitle", self.log_title),
            ("modeNormal", self.mode_normal),
            ("modeSearch", self.mode_search),
            ("modeEdit", self.mode_edit),
            ("modeAlert", self.mode_alert),
            ("typeCity", self.type_city),
            ("typeDigits", self.type_digits),
            ("hintDismiss", self.hint_dismiss),
            ("hintQuit", self.hint_quit),
            ("hintLookUp", self.hint_look_up),
            ("hintCancel", self.hint_cancel),
            ("hintField", self.hint_field),
            ("hintDone", self.hint_done),
            ("hintPanel", self.hint_panel),
            ("hintLanguage", self.hint_language),
            ("hintTimezone", self.hint_timezone),
            ("hintSearch", self.hint_search),
            ("hintSetTimer", self.hint_set_timer),
            ("hintStartPause", self.hint_start_pause),
            ("hintReset", self.hint_reset),
            ("hintLog", self.hint_log),
        ]
    }
}

static EN: Labels = Labels {
    title: "Multi-Function Timer",
    subtitle: "Clock • Weather • Countdown",
    language: "Language",
    current_time: "Current Time",
    weather: "Weather",
    countdown_timer: "Countdown Timer",
    search_city: "Search city...",
    temperature: "Temperature",
    humidity: "Humidity",
    wind_speed: "Wind Speed",
    loading: "Loading...",
    lookup_failed: "City lookup failed",
    set_timer: "Set Timer",
    start: "Start",
    pause: "Pause",
    reset: "Reset",
    hours: "Hours",
    minutes: "Minutes",
    seconds: "Seconds",
    time_up: "Time's Up!",
    dismiss: "Press Enter to dismiss",
    made_with: "Made with",
    by: "by Lovable and ChatGPT",
    log_title: "Log",
    mode_normal: "NORMAL:",
    mode_search: "SEARCH:",
    mode_edit: "EDIT:",
    mode_alert: "ALERT:",
    type_city: "Type a city,",
    type_digits: "Type digits,",
    hint_dismiss: "dismiss",
    hint_quit: "quit",
    hint_look_up: "look up",
    hint_cancel: "cancel",
    hint_field: "field",
    hint_done: "done",
    hint_panel: "panel",
    hint_language: "language",
    hint_timezone: "timezone",
    hint_search: "search",
    hint_set_timer: "set timer",
    hint_start_pause: "start/pause",
    hint_reset: "reset",
    hint_log: "log",
};

static VI: Labels = Labels {
    title: "Đồng Hồ Đa Năng",
    subtitle: "Đồng hồ • Thời tiết • Đếm ngược",
    language: "Ngôn ngữ",
    current_time: "Thời Gian Hiện Tại",
    weather: "Thời Tiết",
    countdown_timer: "Đếm Ngược",
    search_city: "Tìm thành phố...",
    temperature: "Nhiệt Độ",
    humidity: "Độ Ẩm",
    wind_speed: "Tốc Độ Gió",
    loading: "Đang tải...",
    lookup_failed: "Không tìm được thành phố",
    set_timer: "Đặt Giờ",
    start: "Bắt Đầu",
    pause: "Tạm Dừng",
    reset: "Đặt Lại",
    hours: "Giờ",
    minutes: "Phút",
    seconds: "Giây",
    time_up: "Hết Giờ!",
    dismiss: "Nhấn Enter để đóng",
    made_with: "Được tạo với",
    by: "bởi Lovable và ChatGPT",
    log_title: "Nhật Ký",
    mode_normal: "THƯỜNG:",
    mode_search: "TÌM:",
    mode_edit: "SỬA:",
    mode_alert: "BÁO:",
    type_city: "Nhập thành phố,",
    type_digits: "Nhập số,",
    hint_dismiss: "đóng",
    hint_quit: "thoát",
    hint_look_up: "tra cứu",
    hint_cancel: "hủy",
    hint_field: "ô",
    hint_done: "xong",
    hint_panel: "bảng",
    hint_language: "ngôn ngữ",
    hint_timezone: "múi giờ",
    hint_search: "tìm",
    hint_set_timer: "đặt giờ",
    hint_start_pause: "chạy/dừng",
    hint_reset: "đặt lại",
    hint_log: "nhật ký",
};

/// Return the label set for the language.
///
pub fn translate(language: Language) -> &'static Labels {
    match language {
        Language::En => &EN,
        Language::Vi => &VI,
    }
}

/// Return the full weekday name in the language.
///
pub fn weekday_name(language: Language, weekday: Weekday) -> &'static str {
    let index = weekday.num_days_from_monday() as usize;
    match language {
        Language::En => [
            "Monday",
            "Tuesday",
            "Wednesday",
            "Thursday",
            "Friday",
            "Saturday",
            "Sunday",
        ][index],
        Language::Vi => [
            "Thứ Hai",
            "Thứ Ba",
            "Thứ Tư",
            "Thứ Năm",
            "Thứ Sáu",
            "Thứ Bảy",
            "Chủ Nhật",
        ][index],
    }
}

/// Return the full month name for a 1-based month in the language.
///
pub fn month_name(language: Language, month: u32) -> String {
    let index = (month.clamp(1, 12) - 1) as usize;
    match language {
        Language::En => [
            "January",
            "February",
            "March",
            "April",
            "May",
            "June",
            "July",
            "August",
            "September",
            "October",
            "November",
            "December",
        ][index]
            .to_string(),
        Language::Vi => format!("tháng {}", index + 1),
    }
}
