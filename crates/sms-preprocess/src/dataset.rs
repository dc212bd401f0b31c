//! Labelled message collections
//!
//! Reads the SMS Spam Collection layout: one message per line, a `ham` or
//! `spam` label, a tab, then the raw text.

use std::fmt;
use std::{io::BufRead, path::Path, str::FromStr};

use crate::error::{DatasetError, ParseLabelError};

/// Binary classification outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Label {
    Ham,
    Spam,
}

impl Label {
    /// Map a classifier class (`1` spam, `0` ham) to a label.
    pub fn from_class(class: u32) -> Option<Self> {
        match class {
            0 => Some(Label::Ham),
            1 => Some(Label::Spam),
            _ => None,
        }
    }

    pub fn class(self) -> u32 {
        match self {
            Label::Ham => 0,
            Label::Spam => 1,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Label::Ham => "ham",
            Label::Spam => "spam",
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Label {
    type Err = ParseLabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ham" => Ok(Label::Ham),
            "spam" => Ok(Label::Spam),
            other => Err(ParseLabelError(other.to_string())),
        }
    }
}

#[derive(Debug)]
pub struct RawData {
    pub label: Label,
    pub sms: String,
}

#[derive(Debug)]
pub struct RawDataset {
    pub data: Vec<RawData>,
}

impl RawDataset {
    pub fn from_file<P>(path: P) -> Result<Self, DatasetError>
    where
        P: AsRef<Path>,
    {
        let file_data = std::fs::read(path)?;
        Self::from_reader(file_data.as_slice())
    }

    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, DatasetError> {
        let mut data = Vec::new();
        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            let line = line.trim_end_matches('\r');
            if line.trim().is_empty() {
                continue;
            }
            let number = index + 1;
            let (label, sms) = line
                .split_once('\t')
                .ok_or(DatasetError::MissingDelimiter { line: number })?;
            let label = Label::from_str(label.trim()).map_err(|ParseLabelError(label)| {
                DatasetError::InvalidLabel {
                    line: number,
                    label,
                }
            })?;
            data.push(RawData {
                label,
                sms: sms.to_string(),
            });
        }
        Ok(Self { data })
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn labels(&self) -> Vec<Label> {
        self.data.iter().map(|row| row.label).collect()
    }
}

#[cfg(test)]
mod test {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_file_load() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            "ham\tGo until jurong point, crazy..\r\nspam\tFree entry in 2 a wkly comp\n\nham\tOk lar...\n"
        )
        .unwrap();

        let dataset = RawDataset::from_file(file.path()).expect("creation failed");
        assert_eq!(dataset.len(), 3);
        assert_eq!(dataset.labels(), vec![Label::Ham, Label::Spam, Label::Ham]);
        assert_eq!(dataset.data[0].sms, "Go until jurong point, crazy..");
        assert_eq!(dataset.data[1].sms.split_ascii_whitespace().count(), 7);
    }

    #[test]
    fn test_malformed_lines() {
        let err = RawDataset::from_reader("ham\tok\nno delimiter here\n".as_bytes()).unwrap_err();
        assert!(matches!(err, DatasetError::MissingDelimiter { line: 2 }));

        let err = RawDataset::from_reader("ham\tok\nmaybe\thello\n".as_bytes()).unwrap_err();
        assert!(matches!(err, DatasetError::InvalidLabel { line: 2, ref label } if label == "maybe"));
    }

    #[test]
    fn test_label_classes() {
        assert_eq!(Label::from_class(1), Some(Label::Spam));
        assert_eq!(Label::from_class(0), Some(Label::Ham));
        assert_eq!(Label::from_class(2), None);
        assert_eq!(Label::Spam.class(), 1);
        assert_eq!(Label::Ham.to_string(), "ham");
        assert_eq!("spam".parse::<Label>(), Ok(Label::Spam));
        assert_eq!(
            "Spam".parse::<Label>(),
            Err(ParseLabelError("Spam".to_string()))
        );
        assert_eq!(
            ParseLabelError("junk".to_string()).to_string(),
            "Unknown label 'junk', expected 'ham' or 'spam'"
        );
    }
}
