use unicode_segmentation::UnicodeSegmentation;

pub trait SentenceSegmenter {
    /// Split text into sentences, keeping each sentence's surface text.
    fn segment_sentences<'t>(&self, text: &'t str) -> Vec<&'t str>;
}

/// Titles and name parts that are followed by a period mid-sentence.
const ABBREVIATIONS: &[&str] = &[
    "mr", "mrs", "ms", "dr", "prof", "sr", "jr", "st", "mt", "gen", "gov", "sen", "rep", "lt",
    "col", "sgt", "capt", "rev", "hon", "vs",
];

/// UAX #29 sentence boundaries.
/// Surrounding whitespace is trimmed; whitespace-only segments are dropped.
/// A boundary right after an initial ("Robert S. Mueller"), an initialism
/// ("U.S.") or a title ("Dr.") is not a sentence break.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnicodeSentenceSegmenter;

impl SentenceSegmenter for UnicodeSentenceSegmenter {
    fn segment_sentences<'t>(&self, text: &'t str) -> Vec<&'t str> {
        // (start, end) byte spans into `text`
        let mut spans: Vec<(usize, usize)> = Vec::new();
        let mut glue_next = false;

        for (offset, piece) in text.split_sentence_bound_indices() {
            let trimmed = piece.trim();
            if trimmed.is_empty() {
                continue;
            }
            let start = offset + (piece.len() - piece.trim_start().len());
            let end = start + trimmed.len();

            match spans.last_mut() {
                Some(last) if glue_next => last.1 = end,
                _ => spans.push((start, end)),
            }
            glue_next = ends_with_abbreviation(trimmed);
        }

        spans.into_iter().map(|(start, end)| &text[start..end]).collect()
    }
}

fn ends_with_abbreviation(segment: &str) -> bool {
    let Some(body) = segment.strip_suffix('.') else {
        return false;
    };
    let word = body
        .rsplit(char::is_whitespace)
        .next()
        .unwrap_or(body)
        .trim_start_matches(|c: char| !c.is_alphanumeric());
    if word.is_empty() {
        return false;
    }

    // "S", "U.S", "D.C"
    let initials = word.split('.').all(|part| {
        let mut chars = part.chars();
        matches!((chars.next(), chars.next()), (Some(c), None) if c.is_uppercase())
    });

    initials || ABBREVIATIONS.contains(&word.to_lowercase().as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_surface_text_verbatim() {
        let text = "First sentence here. Is this the SECOND one? Yes, it is!";
        let sentences = UnicodeSentenceSegmenter.segment_sentences(text);

        assert_eq!(
            sentences,
            vec!["First sentence here.", "Is this the SECOND one?", "Yes, it is!"]
        );
    }

    #[test]
    fn newlines_separate_sentences() {
        let text = "A line without a stop\nAnother line.\n\n   ";
        let sentences = UnicodeSentenceSegmenter.segment_sentences(text);

        assert_eq!(sentences, vec!["A line without a stop", "Another line."]);
    }

    #[test]
    fn middle_initial_does_not_end_a_sentence() {
        let text = "President Trump lashed out Tuesday at the publication of questions that \
special counsel Robert S. Mueller III was said to be interested in asking him as part of the \
Russia probe and possible attempts to obstruct the inquiry.
In a morning tweet, Trump said it was “disgraceful” that the 49 questions were provided to \
the New York Times, which published them Monday night.";
        let sentences = UnicodeSentenceSegmenter.segment_sentences(text);

        assert_eq!(sentences.len(), 2);
        assert!(sentences[0].contains("Robert S. Mueller III was said"));
        assert!(sentences[0].ends_with("obstruct the inquiry."));
        assert!(sentences[1].starts_with("In a morning tweet"));
    }

    #[test]
    fn titles_and_initialisms_stay_inside_the_sentence() {
        let text = "Dr. Jones flew to the U.S. Capitol on Friday. Mr. Lee stayed home.";
        let sentences = UnicodeSentenceSegmenter.segment_sentences(text);

        assert_eq!(
            sentences,
            vec!["Dr. Jones flew to the U.S. Capitol on Friday.", "Mr. Lee stayed home."]
        );
    }

    #[test]
    fn ordinary_words_still_end_sentences() {
        let text = "It was. The vote passed. Plan A failed.";
        let sentences = UnicodeSentenceSegmenter.segment_sentences(text);

        assert_eq!(sentences, vec!["It was.", "The vote passed.", "Plan A failed."]);
    }

    #[test]
    fn empty_text_has_no_sentences() {
        assert!(UnicodeSentenceSegmenter.segment_sentences("   \n").is_empty());
    }
}
