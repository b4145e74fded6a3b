//! Answer-key comparison.

use crate::types::AnswerMap;
use serde::Serialize;

/// Per-question outcome of comparing a student's answers with the key
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Grade {
    /// Questions answered with the expected value
    pub correct: Vec<String>,
    /// Questions answered with a different value
    pub incorrect: Vec<String>,
    /// Questions in the key the student did not answer
    pub unanswered: Vec<String>,
    /// Answers to questions that are not in the key
    pub unexpected: Vec<String>,
}

impl Grade {
    /// True when the answers match the key exactly
    pub fn is_perfect(&self) -> bool {
        self.incorrect.is_empty() && self.unanswered.is_empty() && self.unexpected.is_empty()
    }

    /// Number of correctly answered questions
    pub fn score(&self) -> usize {
        self.correct.len()
    }

    /// Number of questions in the key
    pub fn total(&self) -> usize {
        self.correct.len() + self.incorrect.len() + self.unanswered.len()
    }
}

/// Check that `student` answered exactly the questions in `correct`, each
/// with a strictly equal value.
///
/// Key order does not matter. `Null` and `Undefined` answers are distinct,
/// as are values of different kinds (`"1"` vs `1`).
pub fn check_student_knowledge(student: &AnswerMap, correct: &AnswerMap) -> bool {
    student.len() == correct.len()
        && correct
            .iter()
            .all(|(question, expected)| student.get(question) == Some(expected))
}

/// Grade `student` against `correct`, question by question.
///
/// Questions are listed in the key's order; unexpected answers follow the
/// student's order.
pub fn grade_answers(student: &AnswerMap, correct: &AnswerMap) -> Grade {
    let mut grade = Grade::default();

    for (question, expected) in correct {
        match student.get(question) {
            Some(given) if given == expected => grade.correct.push(question.clone()),
            Some(_) => grade.incorrect.push(question.clone()),
            None => grade.unanswered.push(question.clone()),
        }
    }

    grade.unexpected = student
        .keys()
        .filter(|question| !correct.contains_key(*question))
        .cloned()
        .collect();

    grade
}


#[cfg(test)]
mod property_tests {
    use super::*;
    use crate::types::Value;
    use proptest::prelude::*;

    fn arb_answer() -> impl Strategy<Value = Value> {
        prop_oneof![
            Just(Value::Null),
            Just(Value::Undefined),
            any::<bool>().prop_map(Value::from),
            any::<f64>().prop_map(Value::from),
            "[a-d]{1,3}".prop_map(Value::from),
        ]
    }

    fn arb_sheet() -> impl Strategy<Value = AnswerMap> {
        prop::collection::vec(("q[0-9]{1,2}", arb_answer()), 1..20)
            .prop_map(|pairs| pairs.into_iter().collect())
    }

    proptest! {
        #[test]
        fn every_sheet_matches_itself(sheet in arb_sheet()) {
            prop_assert!(check_student_knowledge(&sheet, &sheet));
            prop_assert!(grade_answers(&sheet, &sheet).is_perfect());
        }

        #[test]
        fn changing_one_answer_fails(sheet in arb_sheet(), pick in any::<prop::sample::Index>()) {
            let mut student = sheet.clone();
            let i = pick.index(student.len());
            if let Some((_, answer)) = student.get_index_mut(i) {
                // a marker no generated answer can hold
                *answer = Value::from("changed!");
            }
            prop_assert!(!check_student_knowledge(&student, &sheet));
        }

        #[test]
        fn adding_or_removing_a_key_fails(sheet in arb_sheet(), pick in any::<prop::sample::Index>()) {
            let mut extra = sheet.clone();
            extra.insert("extra".to_string(), Value::Null);
            prop_assert!(!check_student_knowledge(&extra, &sheet));

            let mut fewer = sheet.clone();
            let i = pick.index(fewer.len());
            fewer.shift_remove_index(i);
            prop_assert!(!check_student_knowledge(&fewer, &sheet));
        }
    }
}
