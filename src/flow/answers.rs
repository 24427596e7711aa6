//! Selected option per question.

use std::collections::BTreeMap;

#[derive(Clone, Debug, Default)]
pub struct AnswerStore {
    /// question index -> option index
    answers: BTreeMap<usize, usize>,
}

impl AnswerStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record (or overwrite) the answer to `question`.
    pub fn answer(&mut self, question: usize, option: usize) {
        self.answers.insert(question, option);
    }

    pub fn get(&self, question: usize) -> Option<usize> {
        self.answers.get(&question).copied()
    }

    pub fn is_answered(&self, question: usize) -> bool {
        self.answers.contains_key(&question)
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }

    /// Answers in question order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.answers.iter().map(|(q, o)| (*q, *o))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unanswered_by_default() {
        let store = AnswerStore::new();
        assert_eq!(store.len(), 0);
        assert!(!store.is_answered(0));
        assert_eq!(store.get(0), None);
    }

    #[test]
    fn reanswer_overwrites() {
        let mut store = AnswerStore::new();
        store.answer(0, 2);
        store.answer(0, 3);
        assert_eq!(store.get(0), Some(3));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn iter_in_question_order() {
        let mut store = AnswerStore::new();
        store.answer(4, 1);
        store.answer(0, 2);
        store.answer(2, 0);
        let all: Vec<_> = store.iter().collect();
        assert_eq!(all, vec![(0, 2), (2, 0), (4, 1)]);
    }
}
