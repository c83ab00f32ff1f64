//! 문자 클래스 및 텍스트 정규화 유틸리티

pub mod script;
