use std::fmt;

use kube::api::ListParams;
use serde::{
    Deserialize,
    Serialize,
};

// A label/field filter pair identifying which pods to look at.  Empty strings mean "no filter";
// the values are passed through to the apiserver untouched, so any syntax error in them shows
// up as an error from the list call.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Selector {
    #[serde(default)]
    pub label_selector: String,

    #[serde(default)]
    pub field_selector: String,
}

impl Selector {
    pub fn new(label_selector: &str, field_selector: &str) -> Selector {
        Selector {
            label_selector: label_selector.into(),
            field_selector: field_selector.into(),
        }
    }

    pub fn labels(label_selector: &str) -> Selector {
        Selector::new(label_selector, "")
    }

    pub fn list_params(&self) -> ListParams {
        ListParams {
            label_selector: non_empty(&self.label_selector),
            field_selector: non_empty(&self.field_selector),
            ..Default::default()
        }
    }
}

// Both values are always quoted (even when empty) so the exact filter shows up in test logs
impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LabelSelector: {:?}, FieldSelector: {:?}", self.label_selector, self.field_selector)
    }
}

fn non_empty(s: &str) -> Option<String> {
    (!s.is_empty()).then(|| s.into())
}
