// src/data.rs

use crate::model::{ExerciseItem, QuizItem};

/// Loads the quiz bank from the embedded YAML.
pub fn read_quiz_embedded() -> Vec<QuizItem> {
    let file_content = include_str!("data/quiz_questions.yaml");
    serde_yaml::from_str(file_content).expect("quiz bank YAML failed to parse")
}

/// Loads the practice exercises from the embedded YAML.
pub fn read_exercises_embedded() -> Vec<ExerciseItem> {
    let file_content = include_str!("data/exercises.yaml");
    serde_yaml::from_str(file_content).expect("exercise list YAML failed to parse")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn quiz_bank_is_well_formed() {
        let quiz = read_quiz_embedded();
        assert_eq!(quiz.len(), 10);

        let ids: HashSet<u32> = quiz.iter().map(|q| q.id).collect();
        assert_eq!(ids.len(), quiz.len(), "question ids must be unique");

        for q in &quiz {
            assert!(q.id > 0);
            assert_eq!(q.options.len(), 4, "question {} must have 4 options", q.id);
            assert!(q.correct < q.options.len());
            assert!(!q.prompt.is_empty());
            assert!(!q.explanation.is_empty());
        }
    }

    #[test]
    fn first_question_is_about_input() {
        let quiz = read_quiz_embedded();
        let q1 = quiz.iter().find(|q| q.id == 1).unwrap();
        assert_eq!(q1.correct, 1);
        assert_eq!(q1.options[1], "Nhập dữ liệu");
    }

    #[test]
    fn exercise_list_is_well_formed() {
        let exercises = read_exercises_embedded();
        assert_eq!(exercises.len(), 5);
        for ex in &exercises {
            assert!(!ex.title.is_empty());
            assert!(!ex.description.is_empty());
            assert!(!ex.hint.is_empty());
        }
    }
}
