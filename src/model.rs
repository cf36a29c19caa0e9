use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Question difficulty, labelled as in the lesson material.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Difficulty {
    #[serde(rename = "Dễ")]
    Easy,
    #[serde(rename = "TB")]
    Medium,
    #[serde(rename = "Khó")]
    Hard,
}

impl Difficulty {
    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Dễ",
            Difficulty::Medium => "TB",
            Difficulty::Hard => "Khó",
        }
    }
}

/// One multiple-choice question. Always four options, one correct index.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct QuizItem {
    pub id: u32,
    pub prompt: String,
    pub options: Vec<String>,
    pub correct: usize,
    pub explanation: String,
    pub difficulty: Difficulty,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ExerciseItem {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub hint: String,
}

/// The four sections of the lesson page, in scroll order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Section {
    Theory,
    Types,
    Quiz,
    Practice,
}

/// The selected option per question id. The only mutable domain state.
///
/// Stored form is a JSON object keyed by decimal question id; a `null`
/// entry counts as unanswered. A recorded answer is final until a full
/// reset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerRecord {
    entries: BTreeMap<u32, Option<usize>>,
}

impl AnswerRecord {
    /// The chosen option index, if the question has been answered.
    pub fn selected(&self, question_id: u32) -> Option<usize> {
        self.entries.get(&question_id).copied().flatten()
    }

    pub fn is_answered(&self, question_id: u32) -> bool {
        self.selected(question_id).is_some()
    }

    /// Records the first answer for a question. Returns `false` (and leaves
    /// the record untouched) if an answer is already stored.
    pub fn record(&mut self, question_id: u32, option_idx: usize) -> bool {
        if self.is_answered(question_id) {
            return false;
        }
        self.entries.insert(question_id, Some(option_idx));
        true
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.answered_count() == 0
    }

    pub fn answered_count(&self) -> usize {
        self.entries.values().filter(|v| v.is_some()).count()
    }

    /// Derived score: how many stored answers match the item's correct
    /// index. Recomputed from scratch every time, never cached.
    pub fn score(&self, items: &[QuizItem]) -> usize {
        items
            .iter()
            .filter(|q| self.selected(q.id) == Some(q.correct))
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: u32, correct: usize) -> QuizItem {
        QuizItem {
            id,
            prompt: format!("Câu {id}?"),
            options: vec!["A".into(), "B".into(), "C".into(), "D".into()],
            correct,
            explanation: String::new(),
            difficulty: Difficulty::Easy,
        }
    }

    #[test]
    fn record_keeps_the_first_answer() {
        let mut record = AnswerRecord::default();
        assert!(record.record(1, 1));
        assert!(!record.record(1, 0));
        assert_eq!(record.selected(1), Some(1));
    }

    #[test]
    fn score_counts_only_matching_answers() {
        let items = vec![item(1, 1), item(2, 0), item(3, 3)];
        let mut record = AnswerRecord::default();
        assert_eq!(record.score(&items), 0);

        record.record(1, 1); // correct
        record.record(2, 2); // wrong
        record.record(3, 3); // correct
        assert_eq!(record.score(&items), 2);
    }

    #[test]
    fn serializes_with_decimal_string_keys() {
        let mut record = AnswerRecord::default();
        record.record(1, 1);
        record.record(10, 0);
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(json, r#"{"1":1,"10":0}"#);
    }

    #[test]
    fn explicit_null_counts_as_unanswered() {
        let record: AnswerRecord = serde_json::from_str(r#"{"2":null,"3":1}"#).unwrap();
        assert!(!record.is_answered(2));
        assert!(record.is_answered(3));
        assert_eq!(record.answered_count(), 1);

        // A null slot can still take a first answer.
        let mut record = record;
        assert!(record.record(2, 0));
        assert_eq!(record.selected(2), Some(0));
    }
}
