//! Assessment questions and answer state.

use crate::flow::answers::AnswerStore;
use crate::flow::steps::StepNavigator;

pub struct Question {
    pub id: u32,
    pub prompt: &'static str,
    pub options: [&'static str; 4],
}

pub static QUESTIONS: [Question; 8] = [
    Question {
        id: 1,
        prompt: "How much do you enjoy working with data and analytics?",
        options: [
            "Not at all - I prefer creative or people-focused work",
            "Somewhat - I can work with data when needed",
            "Quite a bit - I find patterns and insights interesting",
            "Very much - I love diving deep into data analysis",
        ],
    },
    Question {
        id: 2,
        prompt: "How comfortable are you with public speaking and presentations?",
        options: [
            "Very uncomfortable - I avoid it whenever possible",
            "Somewhat uncomfortable - I can do it but don't enjoy it",
            "Comfortable - I can present well when needed",
            "Very comfortable - I enjoy presenting and speaking publicly",
        ],
    },
    Question {
        id: 3,
        prompt: "How important is work-life balance to you?",
        options: [
            "Not very important - I'm willing to work long hours for career growth",
            "Somewhat important - I want balance but can be flexible",
            "Very important - I need clear boundaries between work and personal time",
            "Extremely important - Work-life balance is my top priority",
        ],
    },
    Question {
        id: 4,
        prompt: "What type of work environment energizes you most?",
        options: [
            "Fast-paced, dynamic environments with constant change",
            "Collaborative team settings with regular interaction",
            "Quiet, focused environments where I can work independently",
            "Structured environments with clear processes and procedures",
        ],
    },
    Question {
        id: 5,
        prompt: "How do you prefer to solve problems?",
        options: [
            "Through creative brainstorming and innovative approaches",
            "By analyzing data and using logical reasoning",
            "Through collaboration and gathering diverse perspectives",
            "By following proven methods and best practices",
        ],
    },
    Question {
        id: 6,
        prompt: "What motivates you most in your career?",
        options: [
            "Financial success and earning potential",
            "Making a positive impact on others or society",
            "Personal growth and continuous learning",
            "Recognition and professional achievement",
        ],
    },
    Question {
        id: 7,
        prompt: "How do you handle stress and pressure?",
        options: [
            "I thrive under pressure and perform my best",
            "I handle it well but prefer manageable stress levels",
            "I can manage it but need good support systems",
            "I prefer low-stress environments to do my best work",
        ],
    },
    Question {
        id: 8,
        prompt: "What's your preferred learning style?",
        options: [
            "Hands-on experience and learning by doing",
            "Reading, research, and theoretical study",
            "Visual learning through diagrams and demonstrations",
            "Discussion and learning from others' experiences",
        ],
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DotStatus {
    Done,
    Current,
    Upcoming,
}

pub struct AssessmentState {
    pub answers: AnswerStore,
    pub steps: StepNavigator,
    /// Shown after a blocked "next".
    pub notice: Option<&'static str>,
}

impl AssessmentState {
    pub fn new() -> Self {
        Self {
            answers: AnswerStore::new(),
            steps: StepNavigator::new(QUESTIONS.len()),
            notice: None,
        }
    }

    pub fn question(&self) -> &'static Question {
        &QUESTIONS[self.steps.current()]
    }

    pub fn selected(&self) -> Option<usize> {
        self.answers.get(self.steps.current())
    }

    pub fn dot(&self, index: usize) -> DotStatus {
        let current = self.steps.current();
        if index < current {
            DotStatus::Done
        } else if index == current {
            DotStatus::Current
        } else {
            DotStatus::Upcoming
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn question_bank_is_well_formed() {
        let ids: Vec<u32> = QUESTIONS.iter().map(|q| q.id).collect();
        assert_eq!(ids, (1..=8).collect::<Vec<_>>());
        assert!(QUESTIONS
            .iter()
            .all(|q| !q.prompt.is_empty() && q.options.iter().all(|o| !o.is_empty())));
    }
}
