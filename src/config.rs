//! 감지기 라벨 설정

use serde::{Deserialize, Serialize};

/// 판별 결과로 반환할 세 가지 라벨
///
/// 생성 이후 변경되지 않으며, 감지기 호출 간 읽기 전용으로 공유됩니다.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct DetectorConfig {
    /// 한국어 판정 시 반환할 라벨
    #[serde(default = "default_korean_label")]
    pub korean_label: String,
    /// 영어 판정 시 반환할 라벨
    #[serde(default = "default_english_label")]
    pub english_label: String,
    /// 판별 불가 시 반환할 라벨 (None이면 라벨 없이 None 반환)
    #[serde(default)]
    pub unknown_label: Option<String>,
}

fn default_korean_label() -> String {
    "ko".to_string()
}

fn default_english_label() -> String {
    "en".to_string()
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            korean_label: default_korean_label(),
            english_label: default_english_label(),
            unknown_label: None,
        }
    }
}

impl DetectorConfig {
    /// 기본 라벨("ko"/"en"/None)로 생성
    pub fn new() -> Self {
        Self::default()
    }

    /// 한국어 라벨 설정
    pub fn with_korean_label(mut self, label: impl Into<String>) -> Self {
        self.korean_label = label.into();
        self
    }

    /// 영어 라벨 설정
    pub fn with_english_label(mut self, label: impl Into<String>) -> Self {
        self.english_label = label.into();
        self
    }

    /// 판별 불가 라벨 설정
    pub fn with_unknown_label(mut self, label: impl Into<String>) -> Self {
        self.unknown_label = Some(label.into());
        self
    }
}
