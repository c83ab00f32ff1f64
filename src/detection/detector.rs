//! 휴리스틱 기반 한국어/영어 스크립트 감지기
//!
//! 통계 모델 없이 문자 클래스 비율, 조사/키워드 어휘, 문장 종결 신호를
//! 조합하여 텍스트가 어느 스크립트에 속하는지 판별합니다.

use std::collections::HashSet;

use rayon::prelude::*;
use serde_json::Value;

use super::patterns::{ENGLISH_KEYWORDS, ENGLISH_PARTICLES, KOREAN_KEYWORDS, KOREAN_PARTICLES};
use crate::config::DetectorConfig;
use crate::core::script::{
    choseong_ratio, is_all_digits, is_english_char, is_korean_char, strip_digits, strip_non_word,
};
use crate::error::{DetectError, Result};

/// 초성 낱자음 밀도가 이 값 이상이면 어휘 가중치 없이 비율로만 판정
const CHOSEONG_FALLBACK_THRESHOLD: f64 = 0.65;
/// 비율 단독 판정에서 압도적 우세로 보는 기준
const DOMINANT_RATIO: f64 = 0.8;
/// 조사 일치당 가중치
const PARTICLE_WEIGHT: f64 = 1.5;
/// 키워드 일치당 가중치
const KEYWORD_WEIGHT: f64 = 0.5;
/// 마지막 문자가 해당 스크립트일 때의 종결 가중치
const ENDING_WEIGHT: f64 = 2.0;
/// 이 개수 이상의 배치는 rayon으로 병렬 처리
const PARALLEL_MIN_ITEMS: usize = 64;

/// 라벨과 무관한 판별 결과 스크립트
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Script {
    Korean,
    English,
    /// 판별 근거 없음 또는 가중치 동률
    Unknown,
}

/// 입력 형태(단일/배치)에 대응하는 판별 결과
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Detection {
    /// 단일 텍스트 입력의 결과 라벨
    Single(Option<String>),
    /// 텍스트 배열 입력의 결과 라벨 (입력 순서 유지)
    Batch(Vec<Option<String>>),
}

/// 한국어/영어 스크립트 감지기
///
/// 생성 이후 내부 상태가 변하지 않으므로 여러 스레드에서
/// 동기화 없이 공유할 수 있습니다.
#[derive(Debug, Clone)]
pub struct LanguageDetector {
    config: DetectorConfig,
}

impl LanguageDetector {
    /// 설정으로 감지기 생성
    pub fn new(config: DetectorConfig) -> Self {
        Self { config }
    }

    /// 기본 라벨("ko"/"en"/None)로 생성
    pub fn with_defaults() -> Self {
        Self::new(DetectorConfig::default())
    }

    /// 세 라벨을 직접 지정하여 생성
    pub fn with_labels(
        korean: impl Into<String>,
        english: impl Into<String>,
        unknown: Option<impl Into<String>>,
    ) -> Self {
        let mut config = DetectorConfig::new()
            .with_korean_label(korean)
            .with_english_label(english);
        config.unknown_label = unknown.map(Into::into);
        Self::new(config)
    }

    /// 현재 라벨 설정
    pub fn config(&self) -> &DetectorConfig {
        &self.config
    }

    /// 단일 텍스트를 판별하여 설정된 라벨 반환
    ///
    /// 판별 불가이고 unknown 라벨이 설정되지 않았으면 None
    pub fn detect_one(&self, text: &str) -> Option<&str> {
        self.label_for(self.classify(text))
    }

    /// 여러 텍스트를 각각 독립적으로 판별 (입력 순서 유지)
    ///
    /// 항목 간 공유 상태가 없으므로 큰 배치는 병렬로 평가
    pub fn detect_many<S>(&self, texts: &[S]) -> Vec<Option<&str>>
    where
        S: AsRef<str> + Sync,
    {
        if texts.len() >= PARALLEL_MIN_ITEMS {
            texts
                .par_iter()
                .map(|text| self.detect_one(text.as_ref()))
                .collect()
        } else {
            texts
                .iter()
                .map(|text| self.detect_one(text.as_ref()))
                .collect()
        }
    }

    /// 느슨한 타입의 JSON 값 엔트리 포인트
    ///
    /// 문자열이면 단일 판별, 문자열 배열이면 배치 판별.
    /// 그 외 타입(배열 안의 비문자열 포함)은 [`DetectError::InvalidInputType`]
    pub fn detect_value(&self, value: &Value) -> Result<Detection> {
        match value {
            Value::String(text) => {
                Ok(Detection::Single(self.detect_one(text).map(str::to_owned)))
            }
            Value::Array(items) => {
                let mut texts = Vec::with_capacity(items.len());
                for item in items {
                    match item {
                        Value::String(text) => texts.push(text.as_str()),
                        other => {
                            return Err(DetectError::InvalidInputType {
                                found: json_type_name(other),
                            })
                        }
                    }
                }
                let labels = self
                    .detect_many(&texts)
                    .into_iter()
                    .map(|label| label.map(str::to_owned))
                    .collect();
                Ok(Detection::Batch(labels))
            }
            other => Err(DetectError::InvalidInputType {
                found: json_type_name(other),
            }),
        }
    }

    /// 라벨과 무관한 스크립트 판별
    pub fn classify(&self, text: &str) -> Script {
        let cleaned = strip_non_word(text);

        // 숫자만 남은 토큰은 관례상 한국어 스트림으로 취급
        if is_all_digits(&cleaned) {
            return Script::Korean;
        }

        let core = strip_digits(&cleaned);

        let korean_count = core.chars().filter(|&c| is_korean_char(c)).count();
        let english_count = core.chars().filter(|&c| is_english_char(c)).count();

        let total = korean_count + english_count;
        if total == 0 {
            return Script::Unknown;
        }

        let korean_ratio = korean_count as f64 / total as f64;
        let english_ratio = english_count as f64 / total as f64;

        // 한국어 문자가 대부분 초성 낱자음(ㅋㅋㅋ 등)이면 비율만으로 판정
        if let Some(ratio) = choseong_ratio(&core) {
            if ratio >= CHOSEONG_FALLBACK_THRESHOLD {
                log::trace!("초성 밀도 {:.2}, 비율 단독 판정", ratio);
                return resolve_by_ratio(korean_ratio, english_ratio);
            }
        }

        let korean_weight =
            evidence_weight(&core, &KOREAN_PARTICLES, &KOREAN_KEYWORDS, korean_ratio)
                + ending_bonus(&core, is_korean_char);
        let english_weight =
            evidence_weight(&core, &ENGLISH_PARTICLES, &ENGLISH_KEYWORDS, english_ratio)
                + ending_bonus(&core, is_english_char);

        log::trace!(
            "가중치 비교: korean={:.2}, english={:.2}",
            korean_weight,
            english_weight
        );

        if korean_weight > english_weight {
            Script::Korean
        } else if english_weight > korean_weight {
            Script::English
        } else {
            Script::Unknown
        }
    }

    fn label_for(&self, script: Script) -> Option<&str> {
        match script {
            Script::Korean => Some(self.config.korean_label.as_str()),
            Script::English => Some(self.config.english_label.as_str()),
            Script::Unknown => self.config.unknown_label.as_deref(),
        }
    }
}

/// 비율만으로 스크립트 판정 (초성 폴백 경로)
fn resolve_by_ratio(korean_ratio: f64, english_ratio: f64) -> Script {
    if english_ratio >= DOMINANT_RATIO {
        Script::English
    } else if korean_ratio >= DOMINANT_RATIO {
        Script::Korean
    } else if korean_ratio > english_ratio {
        Script::Korean
    } else if english_ratio > korean_ratio {
        Script::English
    } else {
        Script::Unknown
    }
}

/// 비율에 조사/키워드 부분 문자열 일치 가중치를 합산
///
/// 토큰화 없이 원시 부분 문자열 포함으로 검사하므로 짧은 조사가
/// 무관한 단어 안에서 일치할 수 있음
fn evidence_weight(
    core: &str,
    particles: &HashSet<&'static str>,
    keywords: &HashSet<&'static str>,
    ratio: f64,
) -> f64 {
    let mut weight = ratio;
    for &particle in particles.iter() {
        if core.contains(particle) {
            weight += PARTICLE_WEIGHT;
        }
    }
    for &keyword in keywords.iter() {
        if core.contains(keyword) {
            weight += KEYWORD_WEIGHT;
        }
    }
    weight
}

/// 마지막 문자가 해당 스크립트 클래스이면 종결 가중치 반환
fn ending_bonus(core: &str, class: fn(char) -> bool) -> f64 {
    match core.chars().last() {
        Some(ch) if class(ch) => ENDING_WEIGHT,
        _ => 0.0,
    }
}

/// JSON 값의 타입 이름 (오류 메시지용)
fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_all_digit_input_is_korean() {
        let detector = LanguageDetector::with_defaults();
        assert_eq!(detector.classify("12345"), Script::Korean);
        // 구두점/공백을 제거한 결과가 숫자만이어도 동일
        assert_eq!(detector.classify(" 12,345! "), Script::Korean);
    }

    #[test]
    fn test_no_signal_is_unknown() {
        let detector = LanguageDetector::with_defaults();
        assert_eq!(detector.classify(""), Script::Unknown);
        assert_eq!(detector.classify("   "), Script::Unknown);
        assert_eq!(detector.classify("!!!"), Script::Unknown);
        assert_eq!(detector.classify("___"), Script::Unknown);
        assert_eq!(detector.classify("テスト"), Script::Unknown); // 가나 문자
    }

    #[test]
    fn test_pure_scripts() {
        let detector = LanguageDetector::with_defaults();
        assert_eq!(detector.classify("hello world"), Script::English);
        assert_eq!(detector.classify("안녕하세요"), Script::Korean);
    }

    #[test]
    fn test_choseong_fallback_korean() {
        let detector = LanguageDetector::with_defaults();
        // 초성 낱자음만
        assert_eq!(detector.classify("ㅋㅋㅋㅋ"), Script::Korean);
        // 영문 소수 혼합 - 한국어 비율이 더 높음
        assert_eq!(detector.classify("bbㅋㅋㅋㅋㅋㅋ"), Script::Korean);
    }

    #[test]
    fn test_choseong_fallback_english_dominant() {
        let detector = LanguageDetector::with_defaults();
        // 한국어 문자는 낱자음 하나뿐이고 영문 비율 >= 0.8
        assert_eq!(detector.classify("helloworldㅋ"), Script::English);
    }

    #[test]
    fn test_choseong_fallback_tie_is_unknown() {
        let detector = LanguageDetector::with_defaults();
        // ㅋ 1자 + 영문 1자 -> 비율 동률
        assert_eq!(detector.classify("ㅋa"), Script::Unknown);
    }

    #[test]
    fn test_weighted_mixed_sentence() {
        let detector = LanguageDetector::with_defaults();
        let text = "san francisco에 가서 meat ball 스파게티를 eat하고 korea로 복귀했어요";
        assert_eq!(detector.classify(text), Script::Korean);
    }

    #[test]
    fn test_resolve_by_ratio() {
        assert_eq!(resolve_by_ratio(0.1, 0.9), Script::English);
        assert_eq!(resolve_by_ratio(0.9, 0.1), Script::Korean);
        assert_eq!(resolve_by_ratio(0.6, 0.4), Script::Korean);
        assert_eq!(resolve_by_ratio(0.4, 0.6), Script::English);
        assert_eq!(resolve_by_ratio(0.5, 0.5), Script::Unknown);
        // 양쪽 모두 0.8 이상은 불가능하지만 영어 우선 분기 확인
        assert_eq!(resolve_by_ratio(0.8, 0.8), Script::English);
    }

    #[test]
    fn test_evidence_weight() {
        let particles: HashSet<&'static str> = ["에", "요"].into_iter().collect();
        let keywords: HashSet<&'static str> = ["안녕"].into_iter().collect();

        // 조사 2개 + 키워드 1개
        let weight = evidence_weight("안녕하세요에", &particles, &keywords, 0.5);
        assert!((weight - (0.5 + 1.5 * 2.0 + 0.5)).abs() < 1e-9);

        // 일치 없음 -> 비율 그대로
        let weight = evidence_weight("hello", &particles, &keywords, 0.25);
        assert!((weight - 0.25).abs() < 1e-9);
    }

    #[test]
    fn test_ending_bonus() {
        assert_eq!(ending_bonus("안녕", is_korean_char), 2.0);
        assert_eq!(ending_bonus("hello", is_english_char), 2.0);
        assert_eq!(ending_bonus("안녕", is_english_char), 0.0);
        assert_eq!(ending_bonus("hello", is_korean_char), 0.0);
        assert_eq!(ending_bonus("", is_korean_char), 0.0);
    }

    #[test]
    fn test_detect_one_maps_labels() {
        let detector = LanguageDetector::with_labels("한국어", "영어", None::<String>);
        assert_eq!(detector.detect_one("안녕하세요"), Some("한국어"));
        assert_eq!(detector.detect_one("Hello"), Some("영어"));
        assert_eq!(detector.detect_one("テスト"), None);

        let detector = LanguageDetector::with_labels("ko", "en", Some("unknown"));
        assert_eq!(detector.detect_one("テスト"), Some("unknown"));
    }

    #[test]
    fn test_detect_many_preserves_order() {
        let detector = LanguageDetector::with_defaults();
        let results = detector.detect_many(&["Hello", "안녕하세요", "12345"]);
        assert_eq!(results, vec![Some("en"), Some("ko"), Some("ko")]);
    }

    #[test]
    fn test_detect_many_large_batch() {
        // 병렬 경로에서도 입력 순서가 유지되어야 함
        let detector = LanguageDetector::with_defaults();
        let texts: Vec<&str> = (0..200)
            .map(|i| if i % 2 == 0 { "Hello" } else { "안녕하세요" })
            .collect();
        let results = detector.detect_many(&texts);
        assert_eq!(results.len(), 200);
        for (i, label) in results.iter().enumerate() {
            let expected = if i % 2 == 0 { Some("en") } else { Some("ko") };
            assert_eq!(*label, expected, "index {}", i);
        }
    }

    #[test]
    fn test_detect_value_single() {
        let detector = LanguageDetector::with_defaults();
        let result = detector.detect_value(&json!("Hello")).unwrap();
        assert_eq!(result, Detection::Single(Some("en".to_string())));
    }

    #[test]
    fn test_detect_value_batch() {
        let detector = LanguageDetector::with_defaults();
        let result = detector
            .detect_value(&json!(["Hello", "안녕하세요", "12345"]))
            .unwrap();
        assert_eq!(
            result,
            Detection::Batch(vec![
                Some("en".to_string()),
                Some("ko".to_string()),
                Some("ko".to_string()),
            ])
        );
    }

    #[test]
    fn test_detect_value_invalid_type() {
        let detector = LanguageDetector::with_defaults();
        assert_eq!(
            detector.detect_value(&json!(42)),
            Err(DetectError::InvalidInputType { found: "number" })
        );
        assert_eq!(
            detector.detect_value(&json!(null)),
            Err(DetectError::InvalidInputType { found: "null" })
        );
        assert_eq!(
            detector.detect_value(&json!({"text": "Hello"})),
            Err(DetectError::InvalidInputType { found: "object" })
        );
        // 배열 안의 비문자열 항목도 계약 위반
        assert_eq!(
            detector.detect_value(&json!(["Hello", 1])),
            Err(DetectError::InvalidInputType { found: "number" })
        );
    }

    #[test]
    fn test_classify_is_idempotent() {
        let detector = LanguageDetector::with_defaults();
        let text = "san francisco에 가서 meat ball 스파게티를 eat하고 korea로 복귀했어요";
        let first = detector.classify(text);
        for _ in 0..3 {
            assert_eq!(detector.classify(text), first);
        }
    }
}
