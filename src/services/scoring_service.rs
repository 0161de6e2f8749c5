use crate::models::domain::{QuizQuestion, QuizResult, ScoreSummary, SubmittedAnswer};
use crate::services::answer_normalizer::AnswerNormalizer;

pub struct ScoringService;

impl ScoringService {
    /// Grade one question against an optional submitted answer. A skipped
    /// question is recorded as unanswered and incorrect.
    pub fn grade_question(question: &QuizQuestion, selected: Option<SubmittedAnswer>) -> QuizResult {
        let is_correct =
            AnswerNormalizer::is_match(&question.options, &question.correct_answer, selected.as_ref());

        QuizResult {
            question_id: question.id.clone(),
            question: question.question.clone(),
            options: question.options.clone(),
            correct_answer: question.correct_answer.clone(),
            answered: selected.is_some(),
            selected_answer: selected,
            is_correct,
        }
    }

    /// Re-derive `answered` and `is_correct` on stored results so per-question
    /// flags always agree with the summary computed from them.
    pub fn regrade(results: &mut [QuizResult]) {
        for result in results.iter_mut() {
            result.answered = result.selected_answer.is_some();
            result.is_correct = AnswerNormalizer::is_match(
                &result.options,
                &result.correct_answer,
                result.selected_answer.as_ref(),
            );
        }
    }

    /// Score a result set. Correctness is re-derived from each result's options,
    /// stored answer and selected answer; the `is_correct` flag is not read.
    pub fn score(results: &[QuizResult]) -> ScoreSummary {
        let correct = results
            .iter()
            .filter(|r| {
                AnswerNormalizer::is_match(&r.options, &r.correct_answer, r.selected_answer.as_ref())
            })
            .count();

        let total_questions = saturating_count(results.len());
        let correct_count = saturating_count(correct);

        ScoreSummary {
            total_questions,
            correct_count,
            incorrect_count: total_questions - correct_count,
            percentage: Self::percentage(correct_count, total_questions),
        }
    }

    /// `round(correct / total * 100)` with halves rounded up; 0 when there are
    /// no questions.
    pub fn percentage(correct: u32, total: u32) -> u8 {
        if total == 0 {
            return 0;
        }
        let correct = u64::from(correct.min(total));
        let total = u64::from(total);
        ((correct * 200 + total) / (2 * total)) as u8
    }
}

fn saturating_count(count: usize) -> u32 {
    u32::try_from(count).unwrap_or(u32::MAX)
}
