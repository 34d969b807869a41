//! The closed label set the classifier maps into.

use std::fmt;

/// Output categories, in classifier index order. The trained artifact emits
/// an index into this table; the order is part of the model contract and
/// must not be reordered without retraining.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Label {
    Safe,
    Defacement,
    Phishing,
    Malware,
}

/// Number of labels the classifier can emit.
pub const LABEL_COUNT: usize = 4;

impl Label {
    /// Maps a classifier output index to a label. Out-of-range indices are a
    /// service-level error; callers must not coerce or wrap them.
    pub fn from_index(index: usize) -> Option<Label> {
        match index {
            0 => Some(Label::Safe),
            1 => Some(Label::Defacement),
            2 => Some(Label::Phishing),
            3 => Some(Label::Malware),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Label::Safe => "Safe",
            Label::Defacement => "Defacement",
            Label::Phishing => "Phishing",
            Label::Malware => "Malware",
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_mapping_covers_label_count() {
        for i in 0..LABEL_COUNT {
            assert!(Label::from_index(i).is_some(), "index {i} should map");
        }
        assert_eq!(Label::from_index(LABEL_COUNT), None);
        assert_eq!(Label::from_index(99), None);
    }

    #[test]
    fn names_match_index_order() {
        assert_eq!(Label::from_index(0).unwrap().as_str(), "Safe");
        assert_eq!(Label::from_index(1).unwrap().as_str(), "Defacement");
        assert_eq!(Label::from_index(2).unwrap().as_str(), "Phishing");
        assert_eq!(Label::from_index(3).unwrap().as_str(), "Malware");
    }
}
