use super::*;

impl LessonApp {
    /// Derived score, recomputed from the record and the quiz bank.
    pub fn score(&self) -> usize {
        self.answers.score(&self.quiz)
    }

    pub fn total_questions(&self) -> usize {
        self.quiz.len()
    }

    pub fn answered_count(&self) -> usize {
        self.answers.answered_count()
    }

    /// `(selected option, was it correct)` for an answered question.
    pub fn question_status(&self, question_id: u32) -> Option<(usize, bool)> {
        let selected = self.answers.selected(question_id)?;
        let correct = self
            .quiz
            .iter()
            .find(|q| q.id == question_id)
            .map(|q| q.correct == selected)
            .unwrap_or(false);
        Some((selected, correct))
    }
}
