use quiz_core::model::{Question, QuestionKind};
use services::{NavKey, QuizAction};

/// One parsed line of terminal input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Action(QuizAction),
    Help,
    Quit,
}

/// Parse an input line against the current question.
///
/// Choice and definition numbers are 1-based positions in the displayed lists.
/// Returns `None` for lines that mean nothing.
pub fn parse_line(line: &str, current: Option<&Question>) -> Option<Command> {
    let mut words = line.split_whitespace();
    let head = words.next()?;
    let rest: Vec<&str> = words.collect();

    let action = match (head, rest.as_slice()) {
        ("q" | "quit" | "exit", []) => return Some(Command::Quit),
        ("h" | "help" | "?", []) => return Some(Command::Help),
        ("n" | "next", []) => QuizAction::Next,
        ("p" | "prev" | "previous", []) => QuizAction::Previous,
        ("right", []) => QuizAction::Key(NavKey::ArrowRight),
        ("left", []) => QuizAction::Key(NavKey::ArrowLeft),
        ("a" | "answers", []) => QuizAction::ToggleAnswers,
        // The raw text goes through unparsed; the navigator validates it.
        ("j" | "jump", [target]) => QuizAction::JumpTo((*target).to_string()),
        ("j" | "jump", []) => QuizAction::JumpTo(String::new()),
        ("s" | "select", [number]) => {
            let question = current?;
            let choice = question.choices().get(one_based(number)?)?;
            QuizAction::SelectChoice(choice.text.clone())
        }
        ("m" | "match", [term, definition]) => {
            let question = current.filter(|q| q.kind() == QuestionKind::Match)?;
            let term_index = one_based(term)?;
            let definition = match definition.parse::<usize>().ok()? {
                0 => String::new(),
                n => question.definition_options().nth(n - 1)?.to_string(),
            };
            QuizAction::ChooseDefinition {
                term_index,
                definition,
            }
        }
        _ => return None,
    };
    Some(Command::Action(action))
}

fn one_based(raw: &str) -> Option<usize> {
    raw.parse::<usize>().ok()?.checked_sub(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use quiz_core::model::{Choice, MatchPair, QuestionDraft, QuestionId};

    fn single() -> Question {
        QuestionDraft::choices(
            QuestionId::new(1),
            QuestionKind::Single,
            "Pick",
            vec![Choice::new("A", false), Choice::new("B", true)],
        )
        .validate()
        .unwrap()
    }

    fn matching() -> Question {
        QuestionDraft::matching(
            QuestionId::new(2),
            "Match",
            vec![MatchPair::new("T1", "D1"), MatchPair::new("T2", "D2")],
        )
        .validate()
        .unwrap()
    }

    #[test]
    fn navigation_words() {
        assert_eq!(parse_line("n", None), Some(Command::Action(QuizAction::Next)));
        assert_eq!(parse_line(" prev ", None), Some(Command::Action(QuizAction::Previous)));
        assert_eq!(
            parse_line("right", None),
            Some(Command::Action(QuizAction::Key(NavKey::ArrowRight)))
        );
        assert_eq!(
            parse_line("j 5", None),
            Some(Command::Action(QuizAction::JumpTo("5".into())))
        );
        assert_eq!(
            parse_line("jump abc", None),
            Some(Command::Action(QuizAction::JumpTo("abc".into())))
        );
        assert_eq!(parse_line("q", None), Some(Command::Quit));
        assert_eq!(parse_line("", None), None);
        assert_eq!(parse_line("dance", None), None);
    }

    #[test]
    fn select_resolves_choice_text() {
        let q = single();
        assert_eq!(
            parse_line("s 2", Some(&q)),
            Some(Command::Action(QuizAction::SelectChoice("B".into())))
        );
        assert_eq!(parse_line("s 3", Some(&q)), None);
        assert_eq!(parse_line("s 0", Some(&q)), None);
        assert_eq!(parse_line("s 1", None), None);
    }

    #[test]
    fn match_resolves_definition_text() {
        let q = matching();
        assert_eq!(
            parse_line("m 1 2", Some(&q)),
            Some(Command::Action(QuizAction::ChooseDefinition {
                term_index: 0,
                definition: "D2".into(),
            }))
        );
        assert_eq!(
            parse_line("m 2 0", Some(&q)),
            Some(Command::Action(QuizAction::ChooseDefinition {
                term_index: 1,
                definition: String::new(),
            }))
        );
        assert_eq!(parse_line("m 1 3", Some(&q)), None);
        assert_eq!(parse_line("m 1 1", Some(&single())), None);
    }
}
