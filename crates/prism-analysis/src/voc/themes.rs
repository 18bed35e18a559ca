//! Feedback themes and the bilingual keyword matcher.

use aho_corasick::AhoCorasick;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// The fixed feedback themes. `Other` catches entries no keyword reaches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Theme {
    SearchAndFilter,
    PricingTransparency,
    Communication,
    UserExperience,
    VsAgency,
    FeatureRequests,
    ModelSelection,
    BookingProcess,
    Other,
}

impl Theme {
    /// All matchable themes, in definition order (excludes `Other`).
    pub fn all() -> &'static [Theme] {
        &[
            Theme::SearchAndFilter,
            Theme::PricingTransparency,
            Theme::Communication,
            Theme::UserExperience,
            Theme::VsAgency,
            Theme::FeatureRequests,
            Theme::ModelSelection,
            Theme::BookingProcess,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Theme::SearchAndFilter => "Search & Filter",
            Theme::PricingTransparency => "Pricing & Transparency",
            Theme::Communication => "Communication",
            Theme::UserExperience => "User Experience",
            Theme::VsAgency => "vs Agency",
            Theme::FeatureRequests => "Feature Requests",
            Theme::ModelSelection => "Model Selection",
            Theme::BookingProcess => "Booking Process",
            Theme::Other => "Other",
        }
    }

    pub fn from_name(name: &str) -> Option<Theme> {
        Theme::all()
            .iter()
            .copied()
            .chain(std::iter::once(Theme::Other))
            .find(|t| t.name() == name)
    }

    /// Bilingual keyword list for the theme.
    fn keywords(&self) -> &'static [&'static str] {
        match self {
            Theme::SearchAndFilter => &[
                "search", "filter", "finding", "discovery", "browse", "looking for",
                "search function", "filter option", "find model",
                "검색", "필터", "찾기", "탐색", "발견", "검색 기능", "필터 옵션",
                "모델 찾기", "인종 필터", "국적 필터",
            ],
            Theme::PricingTransparency => &[
                "price", "pricing", "cost", "fee", "transparent", "clarity",
                "clear pricing", "pricing transparency", "cost breakdown",
                "가격", "금액", "비용", "투명", "명확",
            ],
            Theme::Communication => &[
                "chat", "message", "communication", "response", "reply",
                "conversation", "messaging", "auto translation", "language barrier",
                "채팅", "메시지", "소통", "의사소통", "응답", "대화", "자동 번역",
                "번역 기능", "언어 장벽",
            ],
            Theme::UserExperience => &[
                "easy", "convenient", "simple", "user friendly", "smooth",
                "comfortable", "ease of use",
                "편함", "편리", "쉬움", "간편", "사용하기 쉬움",
            ],
            Theme::VsAgency => &[
                "agency", "traditional", "compared to", "better than", "easier than",
                "에이전시", "기존", "비교", "대행사", "에이전시 대비",
            ],
            Theme::FeatureRequests => &[
                "would be good", "wish", "hope", "suggest", "recommendation",
                "feature request", "want to see", "missing feature",
                "있으면 좋겠", "필요", "바람", "제안", "기능 추가", "없어서 아쉬움",
            ],
            Theme::ModelSelection => &[
                "model", "talent", "portfolio", "profile", "selection", "choosing",
                "model selection", "talent pool",
                "모델", "프로필", "포트폴리오", "선택", "모델 선택",
            ],
            Theme::BookingProcess => &[
                "booking", "request", "confirmation", "scheduling", "process",
                "booking process", "request flow",
                "예약", "요청", "확인", "스케줄", "진행", "예약 과정", "섭외 과정",
            ],
            Theme::Other => &[],
        }
    }
}

/// Multi-theme keyword matcher over combined Korean + English text.
pub struct ThemeMatcher {
    automaton: AhoCorasick,
    /// Parallel to the automaton patterns: which theme each keyword belongs to.
    pattern_themes: Vec<Theme>,
}

static SHARED: Lazy<ThemeMatcher> = Lazy::new(ThemeMatcher::new);

impl ThemeMatcher {
    fn new() -> Self {
        let mut patterns: Vec<&'static str> = Vec::new();
        let mut pattern_themes = Vec::new();
        for &theme in Theme::all() {
            for &keyword in theme.keywords() {
                patterns.push(keyword);
                pattern_themes.push(theme);
            }
        }

        let automaton = AhoCorasick::builder()
            .ascii_case_insensitive(true)
            .build(patterns)
            .expect("theme automaton builds from fixed keyword lists");

        Self {
            automaton,
            pattern_themes,
        }
    }

    /// The process-wide matcher instance.
    pub fn shared() -> &'static ThemeMatcher {
        &SHARED
    }

    /// Assign themes to a feedback entry by scanning the combined text.
    /// One keyword hit per theme suffices; no hits at all yields `[Other]`.
    /// Themes come back in definition order.
    pub fn assign(&self, korean: &str, english: &str) -> Vec<Theme> {
        let combined = format!("{korean} {english}");
        let mut hit = [false; 8];

        for m in self.automaton.find_overlapping_iter(&combined) {
            let theme = self.pattern_themes[m.pattern().as_usize()];
            hit[theme_index(theme)] = true;
        }

        let themes: Vec<Theme> = Theme::all()
            .iter()
            .copied()
            .filter(|t| hit[theme_index(*t)])
            .collect();

        if themes.is_empty() {
            vec![Theme::Other]
        } else {
            themes
        }
    }
}

fn theme_index(theme: Theme) -> usize {
    match theme {
        Theme::SearchAndFilter => 0,
        Theme::PricingTransparency => 1,
        Theme::Communication => 2,
        Theme::UserExperience => 3,
        Theme::VsAgency => 4,
        Theme::FeatureRequests => 5,
        Theme::ModelSelection => 6,
        Theme::BookingProcess => 7,
        Theme::Other => usize::MAX,
    }
}
