//! Keyword sentiment for short social posts.
//!
//! Each snippet is lower-cased and checked against two keyword lists by plain substring
//! containment ("winning" also hits "win"). More positive hits than negative → positive,
//! the reverse → negative, anything else (including no hits) → neutral. No negation
//! handling, no stemming.
//!
//! The result is display-only; it never feeds the prediction.

use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use tracing::debug;

static BUILTIN_LEXICON: Lazy<Lexicon> = Lazy::new(|| {
    let raw = include_str!("../sentiment_lexicon.json");
    serde_json::from_str::<Lexicon>(raw)
        .expect("valid sentiment lexicon")
        .normalized()
});

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lexicon {
    pub positive: Vec<String>,
    pub negative: Vec<String>,
}

impl Lexicon {
    pub fn builtin() -> &'static Lexicon {
        &BUILTIN_LEXICON
    }

    /// Lower-case, trim, drop empties and duplicates.
    pub fn normalized(self) -> Self {
        fn clean(list: Vec<String>) -> Vec<String> {
            let mut out: Vec<String> = Vec::with_capacity(list.len());
            for w in list {
                let w = w.trim().to_lowercase();
                if !w.is_empty() && !out.contains(&w) {
                    out.push(w);
                }
            }
            out
        }
        Self {
            positive: clean(self.positive),
            negative: clean(self.negative),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Engagement {
    #[serde(default)]
    pub likes: u32,
    #[serde(default)]
    pub retweets: u32,
    #[serde(default)]
    pub replies: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextSnippet {
    pub id: String,
    pub text: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub engagement: Engagement,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifiedSnippet {
    #[serde(flatten)]
    pub snippet: TextSnippet,
    pub sentiment: Sentiment,
}

/// Counts over one batch; `positive + negative + neutral == total`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SentimentSummary {
    pub positive: usize,
    pub negative: usize,
    pub neutral: usize,
    pub total: usize,
    /// Share of positive snippets, rounded; 0 for an empty batch.
    pub positive_pct: u8,
}

impl SentimentSummary {
    fn record(&mut self, s: Sentiment) {
        match s {
            Sentiment::Positive => self.positive += 1,
            Sentiment::Negative => self.negative += 1,
            Sentiment::Neutral => self.neutral += 1,
        }
        self.total += 1;
    }

    fn finish(mut self) -> Self {
        self.positive_pct = if self.total == 0 {
            0
        } else {
            ((self.positive * 200 + self.total) / (self.total * 2)) as u8
        };
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentimentBatch {
    pub items: Vec<ClassifiedSnippet>,
    pub summary: SentimentSummary,
}

#[derive(Debug, Clone)]
pub struct SentimentClassifier {
    lexicon: Lexicon,
}

impl Default for SentimentClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl SentimentClassifier {
    pub fn new() -> Self {
        Self {
            lexicon: Lexicon::builtin().clone(),
        }
    }

    pub fn with_lexicon(lexicon: Lexicon) -> Self {
        Self {
            lexicon: lexicon.normalized(),
        }
    }

    /// Number of distinct positive and negative keywords contained in `text`.
    pub fn hits(&self, text: &str) -> (usize, usize) {
        let lower = text.to_lowercase();
        let count = |words: &[String]| words.iter().filter(|w| lower.contains(w.as_str())).count();
        (count(&self.lexicon.positive), count(&self.lexicon.negative))
    }

    pub fn classify_text(&self, text: &str) -> Sentiment {
        let (pos, neg) = self.hits(text);
        match pos.cmp(&neg) {
            std::cmp::Ordering::Greater => Sentiment::Positive,
            std::cmp::Ordering::Less => Sentiment::Negative,
            std::cmp::Ordering::Equal => Sentiment::Neutral,
        }
    }

    /// Label every snippet and count the labels. Input order is preserved.
    pub fn classify(&self, snippets: Vec<TextSnippet>) -> SentimentBatch {
        let mut summary = SentimentSummary::default();
        let items: Vec<ClassifiedSnippet> = snippets
            .into_iter()
            .map(|snippet| {
                let sentiment = self.classify_text(&snippet.text);
                summary.record(sentiment);
                ClassifiedSnippet { snippet, sentiment }
            })
            .collect();
        let summary = summary.finish();
        debug!(
            target: "sentiment",
            total = summary.total,
            positive = summary.positive,
            negative = summary.negative,
            "classified batch"
        );
        SentimentBatch { items, summary }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snip(id: &str, text: &str) -> TextSnippet {
        TextSnippet {
            id: id.into(),
            text: text.into(),
            author: "@PremierLeagueFan".into(),
            created_at: None,
            engagement: Engagement::default(),
        }
    }

    #[test]
    fn excellent_form_heading_for_victory_is_positive() {
        let c = SentimentClassifier::new();
        let text = "Team A are in excellent form and heading for victory";
        assert_eq!(c.hits(text), (2, 0));
        assert_eq!(c.classify_text(text), Sentiment::Positive);
    }

    #[test]
    fn substring_matching_is_permissive() {
        let c = SentimentClassifier::new();
        // "winning" hits both "win" and "winning"
        assert_eq!(c.hits("WINNING streak"), (2, 0));
        assert_eq!(c.classify_text("a weak, poor display"), Sentiment::Negative);
    }

    #[test]
    fn ties_and_no_hits_are_neutral() {
        let c = SentimentClassifier::new();
        assert_eq!(c.classify_text("kick-off at three"), Sentiment::Neutral);
        assert_eq!(c.classify_text("strong side but a bad injury"), Sentiment::Negative);
        assert_eq!(c.classify_text("great win, bad luck"), Sentiment::Positive);
        assert_eq!(c.classify_text("strong but weak"), Sentiment::Neutral);
    }

    #[test]
    fn no_negation_handling() {
        let c = SentimentClassifier::new();
        assert_eq!(c.classify_text("they will not win"), Sentiment::Positive);
    }

    #[test]
    fn summary_counts_sum_to_total() {
        let c = SentimentClassifier::new();
        let batch = c.classify(vec![
            snip("1", "What a victory"),
            snip("2", "Terrible defeat"),
            snip("3", "Lineups are out"),
            snip("4", "Best team in the league"),
        ]);
        let s = batch.summary;
        assert_eq!((s.positive, s.negative, s.neutral, s.total), (2, 1, 1, 4));
        assert_eq!(s.positive + s.negative + s.neutral, batch.items.len());
        assert_eq!(s.positive_pct, 50);
        assert_eq!(batch.items[1].sentiment, Sentiment::Negative);
        assert_eq!(batch.items[3].snippet.id, "4");
    }

    #[test]
    fn empty_batch() {
        let batch = SentimentClassifier::new().classify(Vec::new());
        assert_eq!(batch.summary, SentimentSummary::default());
        assert!(batch.items.is_empty());
    }

    #[test]
    fn custom_lexicon_is_normalized() {
        let c = SentimentClassifier::with_lexicon(Lexicon {
            positive: vec![" Clinical ".into(), "clinical".into(), "".into()],
            negative: vec!["Sloppy".into()],
        });
        assert_eq!(c.hits("CLINICAL finishing, sloppy defending"), (1, 1));
    }

    #[test]
    fn snippet_json_shape() {
        let c = SentimentClassifier::new();
        let batch = c.classify(vec![snip("9", "great")]);
        let v = serde_json::to_value(&batch).unwrap();
        assert_eq!(v["items"][0]["id"], "9");
        assert_eq!(v["items"][0]["sentiment"], "positive");
        assert_eq!(v["summary"]["positivePct"], 100);
    }
}
