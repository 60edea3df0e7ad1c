use std::collections::BTreeMap;

use crate::types::summary_bundle::{ScoredSentence, SelectedSentence};

pub struct AssemblyResult {
    pub text: String,
    pub selected: Vec<SelectedSentence>,
}

/// Keep the first `sentence_count` ranked sentences and emit them in
/// document order, joined by a single space.
///
/// `surface[i]` must be the text of the sentence with index `i`.
pub fn assemble(surface: &[&str], ranked: &[ScoredSentence], sentence_count: usize) -> AssemblyResult {
    // index -> (rank, score); floored sentences carry no score
    let chosen: BTreeMap<usize, (usize, Option<f64>)> = ranked
        .iter()
        .take(sentence_count)
        .enumerate()
        .map(|(rank, s)| (s.index, (rank, (!s.degenerate).then_some(s.score))))
        .collect();

    let selected: Vec<SelectedSentence> = surface
        .iter()
        .enumerate()
        .filter_map(|(index, text)| {
            chosen.get(&index).map(|&(rank, score)| SelectedSentence {
                index,
                text: (*text).to_string(),
                score,
                rank,
            })
        })
        .collect();

    let text = selected
        .iter()
        .map(|s| s.text.as_str())
        .collect::<Vec<_>>()
        .join(" ");

    AssemblyResult { text, selected }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scored(index: usize, score: f64) -> ScoredSentence {
        ScoredSentence {
            index,
            score,
            degenerate: false,
        }
    }

    #[test]
    fn emits_in_document_order_not_rank_order() {
        let surface = ["One.", "Two.", "Three.", "Four."];
        let ranked = [scored(3, 0.9), scored(0, 0.5), scored(2, 0.4), scored(1, 0.1)];

        let result = assemble(&surface, &ranked, 2);

        assert_eq!(result.text, "One. Four.");
        assert_eq!(result.selected[0].rank, 1);
        assert_eq!(result.selected[1].rank, 0);
    }

    #[test]
    fn degenerate_pick_has_no_score() {
        let surface = ["Real one.", "Empty."];
        let floored = ScoredSentence {
            index: 1,
            score: f64::NEG_INFINITY,
            degenerate: true,
        };

        let result = assemble(&surface, &[scored(0, 0.3), floored], 2);

        assert_eq!(result.selected[0].score, Some(0.3));
        assert_eq!(result.selected[1].score, None);
    }

    #[test]
    fn zero_count_selects_nothing() {
        let surface = ["One."];
        let result = assemble(&surface, &[scored(0, 1.0)], 0);

        assert!(result.text.is_empty());
        assert!(result.selected.is_empty());
    }
}
