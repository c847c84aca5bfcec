use serde::{Deserialize, Serialize};

/// One answered field of an experience-sampling response.
///
/// The payload is held in `value` but travels under the key `"answer"`;
/// consumers of the interchange format depend on that name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Output {
    #[serde(default)]
    name: Option<String>,
    #[serde(rename = "answer", default)]
    value: Option<String>,
}

impl Output {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            value: Some(value.into()),
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn set_name(&mut self, name: impl Into<Option<String>>) {
        self.name = name.into();
    }

    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    pub fn set_value(&mut self, value: impl Into<Option<String>>) {
        self.value = value.into();
    }
}
