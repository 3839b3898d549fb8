//! Ordered photo reference list carried as one comma-joined string.
//!
//! Storage and wire format stay `"uri1,uri2,..."`; code works on the list.

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

pub const SEPARATOR: char = ',';

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PhotoUrls(Vec<String>);

impl PhotoUrls {
    pub fn new(urls: Vec<String>) -> Self {
        Self(urls)
    }

    /// Split a stored value. The empty string means no photo at all.
    pub fn parse(joined: &str) -> Self {
        if joined.is_empty() {
            return Self::default();
        }
        Self(joined.split(SEPARATOR).map(str::to_string).collect())
    }

    pub fn encode(&self) -> String {
        self.0.join(&SEPARATOR.to_string())
    }

    /// First photo, shown as the listing thumbnail.
    pub fn thumbnail(&self) -> Option<&str> {
        self.0.first().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Serialize for PhotoUrls {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.encode())
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Repr {
    Joined(String),
    List(Vec<String>),
}

// Older clients send the joined string, newer ones may send a JSON array.
impl<'de> Deserialize<'de> for PhotoUrls {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Repr::deserialize(deserializer)? {
            Repr::Joined(s) => Self::parse(&s),
            Repr::List(v) => {
                if let Some(bad) = v.iter().find(|u| u.is_empty() || u.contains(SEPARATOR)) {
                    return Err(de::Error::custom(format!(
                        "photo_urls entries must be non-empty and free of '{SEPARATOR}': {bad:?}"
                    )));
                }
                Self(v)
            }
        })
    }
}
