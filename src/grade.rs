/// Grade code mapping: ordinal air-quality severity → display color.
///
/// The API attaches a grade code of "1" (좋음) through "4" (매우나쁨) to the
/// aggregate 통합대기환경지수 and to each pollutant. This mapping is pure and
/// total: any unknown or absent code maps to the neutral "unknown" info
/// rather than failing, and it is used identically for the aggregate index
/// and for individual pollutants. Localized labels live in `i18n`.

// ---------------------------------------------------------------------------
// Grade levels
// ---------------------------------------------------------------------------

/// The four ordinal grade levels the API can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grade {
    Good,
    Moderate,
    Bad,
    VeryBad,
}

impl Grade {
    /// Parses an API grade code. Anything other than "1".."4" is `None`.
    pub fn from_code(code: &str) -> Option<Grade> {
        match code {
            "1" => Some(Grade::Good),
            "2" => Some(Grade::Moderate),
            "3" => Some(Grade::Bad),
            "4" => Some(Grade::VeryBad),
            _ => None,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Grade::Good => "1",
            Grade::Moderate => "2",
            Grade::Bad => "3",
            Grade::VeryBad => "4",
        }
    }
}

// ---------------------------------------------------------------------------
// Display info
// ---------------------------------------------------------------------------

/// Display information derived from a grade code. `grade` is `None` for
/// absent or unrecognized codes, which render as a gray dash.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GradeInfo {
    pub grade: Option<Grade>,
    /// Hex display color, e.g. "#4ade80".
    pub color: &'static str,
}

const COLOR_GOOD: &str = "#4ade80";
const COLOR_MODERATE: &str = "#60a5fa";
const COLOR_BAD: &str = "#fbbf24";
const COLOR_VERY_BAD: &str = "#ef4444";
const COLOR_UNKNOWN: &str = "#9ca3af";

/// Maps a raw grade code to its display info. Total: never fails.
pub fn grade_info(code: Option<&str>) -> GradeInfo {
    let grade = code.and_then(Grade::from_code);
    let color = match grade {
        Some(Grade::Good) => COLOR_GOOD,
        Some(Grade::Moderate) => COLOR_MODERATE,
        Some(Grade::Bad) => COLOR_BAD,
        Some(Grade::VeryBad) => COLOR_VERY_BAD,
        None => COLOR_UNKNOWN,
    };
    GradeInfo { grade, color }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
