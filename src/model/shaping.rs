//! Pure shaping over already-fetched rows. Everything here is independent of
//! the database so the ordering and mark-resolution rules stay unit testable.

use crate::model::entity::{QuestionRevisionRow, QuizSlotRow};

/// A slot's mark override wins over the question's own default.
pub fn effective_mark(max_mark: Option<f64>, default_mark: f64) -> f64 {
    max_mark.unwrap_or(default_mark)
}

/// Distinct question ids across the given quizzes, first-seen order: quizzes
/// in input order, slots in slot order within a quiz. Repeated quiz ids in
/// the input do not re-emit questions.
pub fn distinct_questions_in_first_seen_order(quiz_ids: &[i64], slots: &[QuizSlotRow]) -> Vec<i64> {
    let mut seen = Vec::new();
    for quiz_id in quiz_ids {
        for slot in slots.iter().filter(|s| s.quiz_id == *quiz_id) {
            if !seen.contains(&slot.question_id) {
                seen.push(slot.question_id);
            }
        }
    }
    seen
}

/// All quiz ids referencing a question, distinct, ascending.
pub fn referencing_quizzes(question_id: i64, slots: &[QuizSlotRow]) -> Vec<i64> {
    let mut quiz_ids: Vec<i64> = slots
        .iter()
        .filter(|s| s.question_id == question_id)
        .map(|s| s.quiz_id)
        .collect();
    quiz_ids.sort_unstable();
    quiz_ids.dedup();
    quiz_ids
}

/// Question ids sharing a bank entry, ordered by version ascending.
pub fn revisions_of(bank_entry_id: i64, revisions: &[QuestionRevisionRow]) -> Vec<i64> {
    let mut rows: Vec<&QuestionRevisionRow> = revisions
        .iter()
        .filter(|r| r.bank_entry_id == bank_entry_id)
        .collect();
    rows.sort_by_key(|r| r.version);
    rows.into_iter().map(|r| r.question_id).collect()
}

#[cfg(test)]
mod test {
    use super::*;

    fn slot(quiz_id: i64, question_id: i64, slot: i32, max_mark: Option<f64>) -> QuizSlotRow {
        QuizSlotRow {
            quiz_id,
            question_id,
            slot,
            max_mark,
            default_mark: 1.0,
        }
    }

    #[test]
    fn effective_mark_prefers_override() {
        assert_eq!(effective_mark(Some(0.67), 1.0), 0.67);
        assert_eq!(effective_mark(None, 1.0), 1.0);
    }

    #[test]
    fn first_seen_order_follows_input_quizzes_then_slots() {
        let slots = vec![
            slot(1, 10, 1, None),
            slot(1, 11, 2, None),
            slot(2, 10, 1, None),
            slot(2, 12, 2, None),
        ];
        // quiz 2 first: its slots win the first-seen race.
        assert_eq!(
            distinct_questions_in_first_seen_order(&[2, 1], &slots),
            vec![10, 12, 11]
        );
        assert_eq!(
            distinct_questions_in_first_seen_order(&[1, 2], &slots),
            vec![10, 11, 12]
        );
    }

    #[test]
    fn first_seen_order_ignores_repeated_quiz_ids() {
        let slots = vec![slot(1, 10, 1, None), slot(1, 11, 2, None)];
        assert_eq!(
            distinct_questions_in_first_seen_order(&[1, 1, 1], &slots),
            vec![10, 11]
        );
    }

    #[test]
    fn referencing_quizzes_distinct_ascending() {
        let slots = vec![
            slot(7, 10, 1, None),
            slot(3, 10, 4, None),
            slot(3, 10, 9, None),
            slot(5, 11, 1, None),
        ];
        assert_eq!(referencing_quizzes(10, &slots), vec![3, 7]);
        assert_eq!(referencing_quizzes(11, &slots), vec![5]);
        assert!(referencing_quizzes(12, &slots).is_empty());
    }

    #[test]
    fn revisions_ordered_by_version() {
        let revisions = vec![
            QuestionRevisionRow {
                question_id: 31,
                bank_entry_id: 4,
                version: 2,
            },
            QuestionRevisionRow {
                question_id: 30,
                bank_entry_id: 4,
                version: 1,
            },
            QuestionRevisionRow {
                question_id: 40,
                bank_entry_id: 5,
                version: 1,
            },
        ];
        assert_eq!(revisions_of(4, &revisions), vec![30, 31]);
        assert_eq!(revisions_of(5, &revisions), vec![40]);
    }
}
