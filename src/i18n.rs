/// UI string tables for Korean, English, and Japanese.
///
/// Each language gets one static `Strings` table; lookups are plain field
/// access plus a few helpers keyed on `Grade` and `ErrorKind`. Unknown
/// language codes fall back to Korean, the default.

use crate::grade::Grade;
use crate::model::ErrorKind;

// ---------------------------------------------------------------------------
// Languages
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    Ko,
    En,
    Ja,
}

impl Language {
    /// Parses a stored or user-supplied language code ("ko" / "en" / "ja").
    pub fn from_code(code: &str) -> Option<Language> {
        match code {
            "ko" => Some(Language::Ko),
            "en" => Some(Language::En),
            "ja" => Some(Language::Ja),
            _ => None,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Language::Ko => "ko",
            Language::En => "en",
            Language::Ja => "ja",
        }
    }

    pub fn strings(&self) -> &'static Strings {
        match self {
            Language::Ko => &KO,
            Language::En => &EN,
            Language::Ja => &JA,
        }
    }
}

// ---------------------------------------------------------------------------
// String table
// ---------------------------------------------------------------------------

/// All user-visible strings for one language.
pub struct Strings {
    pub app_name: &'static str,
    pub loading_data: &'static str,
    pub air_quality: &'static str,
    pub index_label: &'static str,
    pub pm10: &'static str,
    pub pm25: &'static str,
    pub unit: &'static str,

    pub grade_good: &'static str,
    pub grade_moderate: &'static str,
    pub grade_bad: &'static str,
    pub grade_very_bad: &'static str,
    pub grade_unknown: &'static str,

    pub rec_good: &'static str,
    pub rec_moderate: &'static str,
    pub rec_bad: &'static str,
    pub rec_very_bad: &'static str,
    pub rec_unknown: &'static str,

    pub last_update: &'static str,
    pub refresh: &'static str,
    pub measurement_time: &'static str,

    pub network_error: &'static str,
    pub data_load_error: &'static str,
    pub api_key_error: &'static str,

    pub data_update_success: &'static str,
    pub data_update_success_message: &'static str,
    pub data_load_fail: &'static str,

    pub language_label: &'static str,
}

impl Strings {
    /// Localized label for a grade level; `None` renders as a dash.
    pub fn grade_label(&self, grade: Option<Grade>) -> &'static str {
        match grade {
            Some(Grade::Good) => self.grade_good,
            Some(Grade::Moderate) => self.grade_moderate,
            Some(Grade::Bad) => self.grade_bad,
            Some(Grade::VeryBad) => self.grade_very_bad,
            None => self.grade_unknown,
        }
    }

    /// Outdoor-activity recommendation for the aggregate index grade.
    pub fn recommendation(&self, grade: Option<Grade>) -> &'static str {
        match grade {
            Some(Grade::Good) => self.rec_good,
            Some(Grade::Moderate) => self.rec_moderate,
            Some(Grade::Bad) => self.rec_bad,
            Some(Grade::VeryBad) => self.rec_very_bad,
            None => self.rec_unknown,
        }
    }

    /// Human-readable text for a stored error classification.
    pub fn error_text(&self, kind: ErrorKind) -> &'static str {
        match kind {
            ErrorKind::MissingCredential => self.api_key_error,
            ErrorKind::Network => self.network_error,
            ErrorKind::Application | ErrorKind::General => self.data_load_error,
        }
    }
}

// ---------------------------------------------------------------------------
// Tables
// ---------------------------------------------------------------------------

static KO: Strings = Strings {
    app_name: "AirCheck",
    loading_data: "데이터를 불러오는 중...",
    air_quality: "공기질",
    index_label: "지수",
    pm10: "PM10",
    pm25: "PM2.5",
    unit: "μg/m³",

    grade_good: "좋음",
    grade_moderate: "보통",
    grade_bad: "나쁨",
    grade_very_bad: "매우나쁨",
    grade_unknown: "-",

    rec_good: "야외 활동하기 좋은 날이에요!",
    rec_moderate: "야외 활동 무난한 날이에요.",
    rec_bad: "야외 활동 자제가 필요해요.",
    rec_very_bad: "외출을 삼가세요!",
    rec_unknown: "데이터를 확인 중이에요.",

    last_update: "마지막 업데이트",
    refresh: "새로고침",
    measurement_time: "측정시간",

    network_error: "네트워크가 불안정합니다. 잠시 후 다시 시도해주세요.",
    data_load_error: "데이터를 불러오는데 실패했습니다.",
    api_key_error: "API 키가 설정되지 않았습니다.",

    data_update_success: "데이터 업데이트 완료",
    data_update_success_message: "측정소 데이터를 불러왔습니다.",
    data_load_fail: "데이터 로드 실패",

    language_label: "언어",
};

static EN: Strings = Strings {
    app_name: "AirCheck",
    loading_data: "Loading data...",
    air_quality: "Air Quality",
    index_label: "Index",
    pm10: "PM10",
    pm25: "PM2.5",
    unit: "μg/m³",

    grade_good: "Good",
    grade_moderate: "Moderate",
    grade_bad: "Bad",
    grade_very_bad: "Very Bad",
    grade_unknown: "-",

    rec_good: "It's a great day for outdoor activities!",
    rec_moderate: "It's a decent day for outdoor activities.",
    rec_bad: "Please limit outdoor activities.",
    rec_very_bad: "Please avoid going outside!",
    rec_unknown: "Checking data...",

    last_update: "Last update",
    refresh: "Refresh",
    measurement_time: "Measured at",

    network_error: "Network is unstable. Please try again later.",
    data_load_error: "Failed to load data.",
    api_key_error: "API key is not configured.",

    data_update_success: "Data Updated",
    data_update_success_message: "Station data has been loaded.",
    data_load_fail: "Data Load Failed",

    language_label: "Language",
};

static JA: Strings = Strings {
    app_name: "AirCheck",
    loading_data: "データを読み込み中...",
    air_quality: "大気質",
    index_label: "指数",
    pm10: "PM10",
    pm25: "PM2.5",
    unit: "μg/m³",

    grade_good: "良い",
    grade_moderate: "普通",
    grade_bad: "悪い",
    grade_very_bad: "非常に悪い",
    grade_unknown: "-",

    rec_good: "外出に最適な日です!",
    rec_moderate: "外出には無難な日です。",
    rec_bad: "外出は控えめにしましょう。",
    rec_very_bad: "外出を避けてください!",
    rec_unknown: "データを確認中です...",

    last_update: "最終更新",
    refresh: "更新",
    measurement_time: "測定時刻",

    network_error: "ネットワークが不安定です。しばらくしてからもう一度お試しください。",
    data_load_error: "データの読み込みに失敗しました。",
    api_key_error: "APIキーが設定されていません。",

    data_update_success: "データ更新完了",
    data_update_success_message: "測定所データを読み込みました。",
    data_load_fail: "データ読み込み失敗",

    language_label: "言語",
};

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_code_round_trip() {
        for lang in [Language::Ko, Language::En, Language::Ja] {
            assert_eq!(Language::from_code(lang.code()), Some(lang));
        }
        assert_eq!(Language::from_code("fr"), None);
    }

    #[test]
    fn test_default_language_is_korean() {
        assert_eq!(Language::default(), Language::Ko);
    }

    #[test]
    fn test_korean_grade_labels() {
        let ko = Language::Ko.strings();
        assert_eq!(ko.grade_label(Some(Grade::Good)), "좋음");
        assert_eq!(ko.grade_label(Some(Grade::VeryBad)), "매우나쁨");
        assert_eq!(ko.grade_label(None), "-");
    }

    #[test]
    fn test_every_language_has_a_recommendation_for_every_grade() {
        let grades = [
            None,
            Some(Grade::Good),
            Some(Grade::Moderate),
            Some(Grade::Bad),
            Some(Grade::VeryBad),
        ];
        for lang in [Language::Ko, Language::En, Language::Ja] {
            for grade in grades {
                assert!(
                    !lang.strings().recommendation(grade).is_empty(),
                    "{:?} missing recommendation for {:?}",
                    lang,
                    grade
                );
            }
        }
    }

    #[test]
    fn test_error_text_covers_every_classification() {
        let kinds = [
            ErrorKind::MissingCredential,
            ErrorKind::Network,
            ErrorKind::Application,
            ErrorKind::General,
        ];
        for lang in [Language::Ko, Language::En, Language::Ja] {
            for kind in kinds {
                assert!(!lang.strings().error_text(kind).is_empty());
            }
        }
    }

    #[test]
    fn test_missing_credential_text_names_the_api_key() {
        assert_eq!(
            Language::En.strings().error_text(ErrorKind::MissingCredential),
            "API key is not configured."
        );
    }
}
