//! 한글/영문 문자 클래스 판별 및 정규화
//!
//! 완성형 한글 음절 영역: U+AC00 ~ U+D7A3
//! 호환용 자음 자모 영역 (ㄱ-ㅎ): U+3131 ~ U+314E
//!
//! 모음 자모(ㅏ 이후, U+314F~)는 스크립트 신호로 세지 않습니다.

/// 완성형 한글 음절(가-힣)인지 확인
pub fn is_hangul_syllable(ch: char) -> bool {
    let cp = ch as u32;
    (0xAC00..=0xD7A3).contains(&cp)
}

/// 호환용 자음 자모(ㄱ-ㅎ)인지 확인
pub fn is_consonant_jamo(ch: char) -> bool {
    let cp = ch as u32;
    (0x3131..=0x314E).contains(&cp)
}

/// 한국어 스크립트 문자인지 확인 (완성형 음절 + 낱자음)
pub fn is_korean_char(ch: char) -> bool {
    is_hangul_syllable(ch) || is_consonant_jamo(ch)
}

/// 영어 스크립트 문자인지 확인 (ASCII 알파벳)
pub fn is_english_char(ch: char) -> bool {
    ch.is_ascii_alphabetic()
}

/// 초성으로 쓰이는 19개 낱자음인지 확인
///
/// ㄳ, ㄵ 같은 겹받침 전용 자모는 제외
pub fn is_choseong_jamo(ch: char) -> bool {
    matches!(
        ch,
        'ㄱ' | 'ㄲ' | 'ㄴ' | 'ㄷ' | 'ㄸ' | 'ㄹ' | 'ㅁ' | 'ㅂ' | 'ㅃ' | 'ㅅ'
            | 'ㅆ' | 'ㅇ' | 'ㅈ' | 'ㅉ' | 'ㅊ' | 'ㅋ' | 'ㅌ' | 'ㅍ' | 'ㅎ'
    )
}

/// 단어 문자(문자/숫자/밑줄)만 남기고 모두 제거
pub fn strip_non_word(text: &str) -> String {
    text.chars()
        .filter(|&c| c.is_alphanumeric() || c == '_')
        .collect()
}

/// 십진 숫자를 모두 제거
pub fn strip_digits(text: &str) -> String {
    text.chars().filter(|c| !c.is_ascii_digit()).collect()
}

/// 비어있지 않고 전부 십진 숫자인지 확인
pub fn is_all_digits(text: &str) -> bool {
    !text.is_empty() && text.chars().all(|c| c.is_ascii_digit())
}

/// 한국어 문자 중 초성 낱자음의 비율 계산 (0.0 ~ 1.0)
///
/// 한국어 문자가 하나도 없으면 비율이 정의되지 않으므로 None
pub fn choseong_ratio(text: &str) -> Option<f64> {
    let mut korean_count = 0u32;
    let mut choseong_count = 0u32;

    for ch in text.chars() {
        if is_korean_char(ch) {
            korean_count += 1;
            if is_choseong_jamo(ch) {
                choseong_count += 1;
            }
        }
    }

    if korean_count == 0 {
        return None;
    }
    Some(f64::from(choseong_count) / f64::from(korean_count))
}
