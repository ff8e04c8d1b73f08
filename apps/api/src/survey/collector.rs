//! Response collection: the gate between a partially answered form and a
//! submission.

use std::collections::BTreeMap;

use thiserror::Error;

use crate::survey::schema::Question;

/// Question id → answer for one submission. Has no mutating API: once built
/// it is only read, cloned and handed over by value.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
pub struct ResponseSet(BTreeMap<String, String>);

impl ResponseSet {
    pub fn get(&self, id: &str) -> Option<&str> {
        self.0.get(id).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl FromIterator<(String, String)> for ResponseSet {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        ResponseSet(iter.into_iter().collect())
    }
}

/// Caller mistakes. Distinct from `Collection::Incomplete`, which is a normal
/// state of a form still being filled in.
#[derive(Debug, Error, PartialEq)]
pub enum AnswerError {
    #[error("unknown question '{0}'")]
    UnknownQuestion(String),

    #[error("'{value}' is not one of the choices for question '{question}'")]
    InvalidChoice { question: String, value: String },
}

#[derive(Debug, Clone, PartialEq)]
pub enum Collection {
    Complete(ResponseSet),
    Incomplete { missing: Vec<String> },
}

/// Accumulates answers for one schema.
pub struct ResponseCollector<'a> {
    questions: &'a [Question],
    answers: BTreeMap<String, String>,
}

impl<'a> ResponseCollector<'a> {
    pub fn new(questions: &'a [Question]) -> Self {
        Self {
            questions,
            answers: BTreeMap::new(),
        }
    }

    /// Records (or replaces) the answer to one question. A blank value clears it.
    pub fn answer(&mut self, id: &str, value: &str) -> Result<(), AnswerError> {
        let question = self
            .questions
            .iter()
            .find(|q| q.id == id)
            .ok_or_else(|| AnswerError::UnknownQuestion(id.to_string()))?;

        let value = if question.is_free_text() {
            value.trim()
        } else {
            value
        };

        if value.trim().is_empty() {
            self.answers.remove(id);
            return Ok(());
        }

        if !question.accepts(value) {
            return Err(AnswerError::InvalidChoice {
                question: id.to_string(),
                value: value.to_string(),
            });
        }

        self.answers.insert(id.to_string(), value.to_string());
        Ok(())
    }

    /// Required question ids still unanswered, in schema order.
    pub fn missing(&self) -> Vec<String> {
        self.questions
            .iter()
            .filter(|q| q.required && !self.answers.contains_key(&q.id))
            .map(|q| q.id.clone())
            .collect()
    }

    /// Freezes the answers. Unanswered optional questions are recorded as
    /// empty strings so the set always carries every schema id.
    pub fn finish(mut self) -> Collection {
        let missing = self.missing();
        if !missing.is_empty() {
            return Collection::Incomplete { missing };
        }
        for question in self.questions {
            self.answers.entry(question.id.clone()).or_default();
        }
        Collection::Complete(ResponseSet(self.answers))
    }
}

/// Runs a whole batch of answers through a collector.
pub fn collect<'v, I>(questions: &[Question], answers: I) -> Result<Collection, AnswerError>
where
    I: IntoIterator<Item = (&'v str, &'v str)>,
{
    let mut collector = ResponseCollector::new(questions);
    for (id, value) in answers {
        collector.answer(id, value)?;
    }
    Ok(collector.finish())
}
