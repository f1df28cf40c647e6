use indexmap::IndexMap;
use indexmap::map::Entry;
use serde::{Deserialize, Serialize};

/// A submitted value: scalar for keys seen once, a list once a key
/// repeats. The JSON form is the bare string or array, no tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnswerValue {
    One(String),
    Many(Vec<String>),
}

impl AnswerValue {
    /// Folds another value for the same key into this one, promoting a
    /// scalar to a list on the first repeat.
    pub fn push(&mut self, value: impl Into<String>) {
        match self {
            AnswerValue::One(first) => {
                let first = std::mem::take(first);
                *self = AnswerValue::Many(vec![first, value.into()]);
            }
            AnswerValue::Many(values) => values.push(value.into()),
        }
    }

    pub fn as_one(&self) -> Option<&str> {
        match self {
            AnswerValue::One(value) => Some(value),
            AnswerValue::Many(_) => None,
        }
    }

    pub fn as_many(&self) -> Option<&[String]> {
        match self {
            AnswerValue::One(_) => None,
            AnswerValue::Many(values) => Some(values),
        }
    }
}

/// Answers keyed by field id, in first-seen order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SubmissionPayload {
    answers: IndexMap<String, AnswerValue>,
}

impl SubmissionPayload {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a payload from raw `(key, value)` entries. Values sharing
    /// a key coalesce into one list entry, ordered as encountered.
    pub fn collect<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut answers: IndexMap<String, AnswerValue> = IndexMap::new();
        for (key, value) in entries {
            match answers.entry(key.into()) {
                Entry::Vacant(slot) => {
                    slot.insert(AnswerValue::One(value.into()));
                }
                Entry::Occupied(mut slot) => slot.get_mut().push(value),
            }
        }
        SubmissionPayload { answers }
    }

    pub fn get(&self, key: &str) -> Option<&AnswerValue> {
        self.answers.get(key)
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &AnswerValue)> {
        self.answers.iter().map(|(key, value)| (key.as_str(), value))
    }
}

impl<K, V> FromIterator<(K, V)> for SubmissionPayload
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(entries: I) -> Self {
        Self::collect(entries)
    }
}
