//! Offline evaluation against a labelled message collection
//!
//! Runs every message through the loaded service and scores the labels.
//! Nothing is refit.

use smartcore::metrics::accuracy::Accuracy;
use smartcore::metrics::Metrics;
use sms_preprocess::{Label, RawDataset};
use spam_classifier::SpamClassifierService;
use tracing::warn;

/// Confusion counts and accuracy over the rows that could be classified.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Evaluation {
    pub true_spam: usize,
    pub false_spam: usize,
    pub true_ham: usize,
    pub false_ham: usize,
    /// Rows that produced an error instead of a label
    pub failed: usize,
    pub accuracy: Option<f64>,
}

impl Evaluation {
    pub fn scored(&self) -> usize {
        self.true_spam + self.false_spam + self.true_ham + self.false_ham
    }
}

pub fn evaluate(service: &dyn SpamClassifierService, dataset: &RawDataset) -> Evaluation {
    let mut evaluation = Evaluation::default();
    let mut y_true: Vec<usize> = Vec::with_capacity(dataset.len());
    let mut y_pred: Vec<usize> = Vec::with_capacity(dataset.len());

    for (row, data) in dataset.data.iter().enumerate() {
        let predicted = match service.predict(&data.sms) {
            Ok(prediction) => prediction.label,
            Err(err) => {
                warn!(row, error = %err, "Skipping row");
                evaluation.failed += 1;
                continue;
            }
        };

        match (data.label, predicted) {
            (Label::Spam, Label::Spam) => evaluation.true_spam += 1,
            (Label::Ham, Label::Spam) => evaluation.false_spam += 1,
            (Label::Ham, Label::Ham) => evaluation.true_ham += 1,
            (Label::Spam, Label::Ham) => evaluation.false_ham += 1,
        }
        y_true.push(data.label.class() as usize);
        y_pred.push(predicted.class() as usize);
    }

    if !y_true.is_empty() {
        evaluation.accuracy = Some(Accuracy::new().get_score(&y_true, &y_pred));
    }
    evaluation
}

#[cfg(test)]
mod tests {
    use super::*;
    use spam_classifier::{Prediction, ServiceError};

    /// Calls anything mentioning "prize" spam.
    struct KeywordService;

    impl SpamClassifierService for KeywordService {
        fn predict(&self, message: &str) -> Result<Prediction, ServiceError> {
            if message.is_empty() {
                return Err(ServiceError::Input);
            }
            let label = if message.to_lowercase().contains("prize") {
                Label::Spam
            } else {
                Label::Ham
            };
            Ok(Prediction {
                label,
                message: message.to_string(),
            })
        }
    }

    #[test]
    fn test_confusion_counts() {
        let dataset = RawDataset::from_reader(
            "spam\tWin a PRIZE now\nham\tSee you at lunch\nspam\tCall for cash\nham\tYou won the prize of my heart\nham\t\n"
                .as_bytes(),
        )
        .unwrap();

        let evaluation = evaluate(&KeywordService, &dataset);
        assert_eq!(evaluation.true_spam, 1);
        assert_eq!(evaluation.false_ham, 1);
        assert_eq!(evaluation.true_ham, 1);
        assert_eq!(evaluation.false_spam, 1);
        assert_eq!(evaluation.failed, 1);
        assert_eq!(evaluation.scored(), 4);
        assert_eq!(evaluation.accuracy, Some(0.5));
    }

    #[test]
    fn test_empty_dataset() {
        let dataset = RawDataset::from_reader("".as_bytes()).unwrap();
        let evaluation = evaluate(&KeywordService, &dataset);
        assert_eq!(evaluation.scored(), 0);
        assert_eq!(evaluation.accuracy, None);
    }
}
