//! Bilingual display strings
//!
//! The engine reports language-agnostic values (hints, messages, points); every
//! user-facing sentence is chosen here from the game language.

use crate::core::{Difficulty, Language};
use crate::engine::{GameMode, Hint, RoundMessage};

/// Fixed labels for one language
#[derive(Debug, Clone, Copy)]
pub struct Strings {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub choose_language: &'static str,
    pub choose_mode: &'static str,
    pub single: &'static str,
    pub single_about: &'static str,
    pub competitive: &'static str,
    pub competitive_about: &'static str,
    pub team_setup: &'static str,
    pub team_setup_about: &'static str,
    pub team_name: &'static str,
    pub teams_added: &'static str,
    pub max_teams: &'static str,
    pub need_two_teams: &'static str,
    pub need_one_more: &'static str,
    pub duplicate_team: &'static str,
    pub no_hints: &'static str,
    pub level: &'static str,
    pub difficulty: &'static str,
    pub team_turn: &'static str,
    pub clue: &'static str,
    pub letters: &'static str,
    pub your_answer: &'static str,
    pub hint: &'static str,
    pub check: &'static str,
    pub clear: &'static str,
    pub reveal: &'static str,
    pub next: &'static str,
    pub finish: &'static str,
    pub score: &'static str,
    pub incorrect: &'static str,
    pub revealed: &'static str,
    pub complete: &'static str,
    pub play_again: &'static str,
    pub quit: &'static str,
}

pub const ENGLISH: Strings = Strings {
    title: "Clue Game",
    subtitle: "Find the word using the given clues",
    choose_language: "Choose your language",
    choose_mode: "Choose game mode",
    single: "Single player",
    single_about: "Personal challenge with progressive difficulty",
    competitive: "Competitive",
    competitive_about: "Team play with points and turns",
    team_setup: "Team setup",
    team_setup_about: "Add 2 to 8 teams for competitive play",
    team_name: "Team name",
    teams_added: "Teams added",
    max_teams: "Maximum 8 teams",
    need_two_teams: "Add at least two teams to start",
    need_one_more: "Add at least one more team",
    duplicate_team: "That team name is already used",
    no_hints: "No hints left",
    level: "Level",
    difficulty: "Difficulty",
    team_turn: "Team turn",
    clue: "Clue",
    letters: "Available letters",
    your_answer: "Your answer",
    hint: "Hint",
    check: "Check",
    clear: "Clear",
    reveal: "Solution",
    next: "Next",
    finish: "Finish",
    score: "Score",
    incorrect: "Wrong answer, try again",
    revealed: "Solution revealed",
    complete: "Congratulations! You completed all levels",
    play_again: "Play again",
    quit: "Quit",
};

pub const ARABIC: Strings = Strings {
    title: "لعبة الدلائل",
    subtitle: "اعثر على الكلمة باستخدام الدلائل المعطاة",
    choose_language: "اختر اللغة",
    choose_mode: "اختر نمط اللعب",
    single: "لاعب واحد",
    single_about: "تحدي شخصي مع صعوبة متدرجة",
    competitive: "تنافسي",
    competitive_about: "لعب جماعي مع نظام النقاط والفرق",
    team_setup: "إعداد الفرق",
    team_setup_about: "أضف من 2 إلى 8 فرق للعب التنافسي",
    team_name: "اسم الفريق",
    teams_added: "الفرق المضافة",
    max_teams: "الحد الأقصى 8 فرق",
    need_two_teams: "أضف فريقين على الأقل للبدء",
    need_one_more: "أضف فريق واحد آخر على الأقل",
    duplicate_team: "اسم الفريق مستخدم بالفعل",
    no_hints: "لا توجد تلميحات متبقية",
    level: "المستوى",
    difficulty: "الصعوبة",
    team_turn: "دور الفريق",
    clue: "الدليل",
    letters: "الحروف المتاحة",
    your_answer: "إجابتك",
    hint: "تلميح",
    check: "تحقق",
    clear: "مسح",
    reveal: "الحل",
    next: "التالي",
    finish: "إنهاء",
    score: "النقاط",
    incorrect: "إجابة خاطئة، حاول مرة أخرى",
    revealed: "تم عرض الحل",
    complete: "تهانينا! أكملت جميع المستويات",
    play_again: "العب مرة أخرى",
    quit: "خروج",
};

#[inline]
#[must_use]
pub const fn strings(language: Language) -> &'static Strings {
    match language {
        Language::English => &ENGLISH,
        Language::Arabic => &ARABIC,
    }
}

#[must_use]
pub const fn difficulty_name(language: Language, difficulty: Difficulty) -> &'static str {
    match (language, difficulty) {
        (Language::English, Difficulty::Easy) => "Easy",
        (Language::English, Difficulty::Medium) => "Medium",
        (Language::English, Difficulty::Hard) => "Hard",
        (Language::Arabic, Difficulty::Easy) => "سهل",
        (Language::Arabic, Difficulty::Medium) => "متوسط",
        (Language::Arabic, Difficulty::Hard) => "صعب",
    }
}

#[must_use]
pub const fn mode_name(language: Language, mode: GameMode) -> &'static str {
    let strings = strings(language);
    match mode {
        GameMode::Single => strings.single,
        GameMode::Competitive => strings.competitive,
    }
}

/// Hint sentence in the game language
#[must_use]
pub fn hint_message(language: Language, hint: Hint) -> String {
    match language {
        Language::English => hint.to_string(),
        Language::Arabic => match hint {
            Hint::Length(len) => format!("الكلمة تتكون من {len} حروف"),
            Hint::FirstLetter(ch) => format!("الكلمة تبدأ بحرف {ch}"),
            Hint::LastLetter(ch) => format!("الكلمة تنتهي بحرف {ch}"),
        },
    }
}

/// Outcome sentence for a check or reveal
///
/// `team` names the team credited in competitive play.
#[must_use]
pub fn round_message(language: Language, message: RoundMessage, team: Option<&str>) -> String {
    let strings = strings(language);
    match (message, language, team) {
        (RoundMessage::Incorrect, ..) => strings.incorrect.to_string(),
        (RoundMessage::Revealed, ..) => strings.revealed.to_string(),
        (RoundMessage::Correct { points }, Language::English, Some(team)) => {
            format!("Correct! {team} earned {points} points")
        }
        (RoundMessage::Correct { points }, Language::English, None) => {
            format!("Correct! You earned {points} points")
        }
        (RoundMessage::Correct { points }, Language::Arabic, Some(team)) => {
            format!("إجابة صحيحة! {team} حصل على {points} نقطة")
        }
        (RoundMessage::Correct { points }, Language::Arabic, None) => {
            format!("إجابة صحيحة! حصلت على {points} نقطة")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn english_hints_match_engine_text() {
        assert_eq!(
            hint_message(Language::English, Hint::Length(3)),
            "The word has 3 letters"
        );
    }

    #[test]
    fn arabic_hints_are_translated() {
        let text = hint_message(Language::Arabic, Hint::FirstLetter('ش'));
        assert!(text.contains('ش'));
        assert!(text.starts_with("الكلمة"));
    }

    #[test]
    fn correct_message_names_team() {
        let text = round_message(
            Language::English,
            RoundMessage::Correct { points: 16 },
            Some("Owls"),
        );
        assert_eq!(text, "Correct! Owls earned 16 points");
        assert_eq!(
            round_message(Language::English, RoundMessage::Correct { points: 10 }, None),
            "Correct! You earned 10 points"
        );
    }

    #[test]
    fn failure_messages_ignore_team() {
        assert_eq!(
            round_message(Language::Arabic, RoundMessage::Incorrect, Some("x")),
            ARABIC.incorrect
        );
        assert_eq!(
            round_message(Language::English, RoundMessage::Revealed, None),
            "Solution revealed"
        );
    }

    #[test]
    fn names_per_language() {
        assert_eq!(difficulty_name(Language::Arabic, Difficulty::Hard), "صعب");
        assert_eq!(mode_name(Language::English, GameMode::Competitive), "Competitive");
    }
}
