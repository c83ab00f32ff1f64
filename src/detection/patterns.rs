//! 조사/키워드 패턴 데이터
//!
//! 스크립트 판별의 가중치 근거로 쓰이는 정적 어휘 집합을 정의합니다.
//! 원시 부분 문자열 포함으로 검사되므로 토큰 경계는 고려하지 않습니다.

use std::collections::HashSet;
use std::sync::LazyLock;

/// 한국어 조사/어미 목록 - 일치당 조사 가중치 부여
pub static KOREAN_PARTICLES: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    let mut set = HashSet::new();
    // 격조사/보조사
    for p in ["이", "가", "을", "를", "에", "에서", "으로", "로", "와", "과",
              "하고", "의", "도", "만", "은", "는", "까지", "조차", "밖에"] {
        set.insert(p);
    }
    // 어미/종결
    for p in ["다", "입니다", "요", "죠", "지요", "네요", "십시오", "고", "서",
              "며", "면서", "지만", "는데", "ㄴ", "ㄹ", "던", "했어요", "어"] {
        set.insert(p);
    }
    // 접속 부사
    for p in ["그리고", "그러나", "그래서", "그러므로"] {
        set.insert(p);
    }
    set
});

/// 영어 기능어 목록 - 일치당 조사 가중치 부여
pub static ENGLISH_PARTICLES: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    let mut set = HashSet::new();
    // 전치사
    for p in ["in", "on", "at", "by", "with", "about", "for", "from", "to", "of",
              "into", "onto", "up", "down", "across", "over", "under", "through",
              "between", "among"] {
        set.insert(p);
    }
    // 관사/접속사
    for p in ["a", "an", "the", "and", "or", "but", "so", "as", "if", "when",
              "than", "because"] {
        set.insert(p);
    }
    // be 동사
    for p in ["am", "are", "is", "was", "were", "be", "been", "being"] {
        set.insert(p);
    }
    set
});

/// 한국어 상용 키워드 목록 - 일치당 키워드 가중치 부여
pub static KOREAN_KEYWORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    let mut set = HashSet::new();
    // 인사/감정
    for w in ["안녕", "안녕하세요", "감사", "감사합니다", "죄송", "미안",
              "반가워", "환영", "축하", "좋아", "싫어", "사랑", "행복", "진짜"] {
        set.insert(w);
    }
    // 시간/장소
    for w in ["오늘", "내일", "어제", "지금", "아침", "점심", "저녁", "주말",
              "시간", "학교", "회사", "한국", "서울", "우리"] {
        set.insert(w);
    }
    // 일상
    for w in ["사람", "친구", "가족", "이름", "생일", "날씨", "여행", "사진",
              "영화", "음악", "노래", "게임", "공부", "운동", "커피", "맛있"] {
        set.insert(w);
    }
    // 개발/채팅
    for w in ["컴퓨터", "인터넷", "프로그램", "코드", "개발", "버그", "서버",
              "채널", "메시지", "질문", "대답", "확인", "설정", "시작"] {
        set.insert(w);
    }
    set
});

/// 영어 상용 키워드 목록 - 일치당 키워드 가중치 부여
pub static ENGLISH_KEYWORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    let mut set = HashSet::new();
    // 인사/감정
    for w in ["hello", "thanks", "thank", "sorry", "welcome", "please", "good",
              "nice", "love", "happy", "great", "really"] {
        set.insert(w);
    }
    // 시간/장소
    for w in ["today", "tomorrow", "yesterday", "morning", "night", "weekend",
              "time", "school", "office", "house", "world", "city"] {
        set.insert(w);
    }
    // 일상
    for w in ["people", "friend", "family", "name", "birthday", "weather",
              "travel", "photo", "movie", "music", "song", "game", "study",
              "coffee", "food", "eat"] {
        set.insert(w);
    }
    // 개발/채팅
    for w in ["computer", "internet", "program", "code", "develop", "bug",
              "server", "channel", "message", "question", "answer", "check",
              "config", "test"] {
        set.insert(w);
    }
    set
});
