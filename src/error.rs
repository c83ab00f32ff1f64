//! 감지 API 오류 타입

use thiserror::Error;

/// 감지 API 오류
///
/// 항목별 판별 알고리즘 자체는 어떤 문자열 입력에도 항상 라벨을 반환하므로,
/// 오류는 느슨한 타입 엔트리 포인트의 입력 타입 위반뿐입니다.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DetectError {
    /// 입력이 문자열도, 문자열 배열도 아님
    #[error("invalid input type: expected a string or an array of strings, got {found}")]
    InvalidInputType {
        /// 실제 입력된 JSON 값의 타입 이름
        found: &'static str,
    },
}

/// 감지 API 결과 타입
pub type Result<T> = std::result::Result<T, DetectError>;
