use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Seed file contents: the category catalog plus its questions.
#[derive(Debug, Deserialize)]
pub struct Catalog {
    pub categories: Vec<CatalogCategory>,
    #[serde(default)]
    pub questions: Vec<CatalogQuestion>,
}

#[derive(Debug, Deserialize)]
pub struct CatalogCategory {
    pub id: i64,
    #[serde(alias = "type")]
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct CatalogQuestion {
    #[serde(default)]
    pub id: Option<i64>,
    pub question: String,
    pub answer: String,
    pub category: i64,
    pub difficulty: i64,
}

impl Catalog {
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// The catalog bundled with the binary.
    pub fn sample() -> serde_json::Result<Self> {
        Self::from_json(crate::db::SAMPLE_CATALOG)
    }
}

/// A question as submitted by a client, before validation.
/// Every field is kept raw so that a badly typed value is a validation
/// failure rather than a decoding one.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct QuestionDraft {
    #[serde(default)]
    pub question: Value,
    #[serde(default)]
    pub answer: Value,
    #[serde(default)]
    pub category: Value,
    #[serde(default)]
    pub difficulty: Value,
}

/// A validated question ready for insertion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewQuestion {
    pub question: String,
    pub answer: String,
    pub category: i64,
    pub difficulty: i64,
}

impl QuestionDraft {
    pub fn validate(self) -> Result<NewQuestion, &'static str> {
        let question = text(self.question).ok_or("question text is required")?;
        let answer = text(self.answer).ok_or("answer is required")?;
        let category = integer(&self.category).ok_or("category must be an integer")?;
        let difficulty = integer(&self.difficulty).ok_or("difficulty must be an integer")?;

        Ok(NewQuestion {
            question,
            answer,
            category,
            difficulty,
        })
    }
}

fn text(value: Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s),
        _ => None,
    }
}

/// Interpret a JSON number or numeric string as an integer.
pub fn integer(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Deserialize a value that may be either a JSON number or a string containing a number.
/// The quiz frontend sends category ids as strings.
pub fn deserialize_string_or_i64<'de, D: Deserializer<'de>>(d: D) -> Result<i64, D::Error> {
    struct Vis;
    impl<'de> serde::de::Visitor<'de> for Vis {
        type Value = i64;
        fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
            f.write_str("number or numeric string")
        }
        fn visit_i64<E: serde::de::Error>(self, v: i64) -> Result<i64, E> {
            Ok(v)
        }
        fn visit_u64<E: serde::de::Error>(self, v: u64) -> Result<i64, E> {
            i64::try_from(v).map_err(E::custom)
        }
        fn visit_str<E: serde::de::Error>(self, v: &str) -> Result<i64, E> {
            v.trim().parse().map_err(E::custom)
        }
    }
    d.deserialize_any(Vis)
}
