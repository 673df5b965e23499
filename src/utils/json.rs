//! Pretty-printed JSON rendering for model types.
//!
//! Every model object's `Display` goes through one shared serializer so
//! debug output is uniform across the crate, the way the upstream services
//! render their payloads.

use serde::Serialize;

/// Render a serializable value as pretty-printed JSON.
///
/// Serialization of a plain model struct cannot fail in practice; if it
/// ever does, an empty object is returned rather than panicking inside a
/// `Display` impl.
pub fn to_pretty_json<T: Serialize>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
}

/// Implement `Display` as pretty-printed JSON for one or more model types.
macro_rules! display_as_json {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl ::std::fmt::Display for $ty {
                fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                    f.write_str(&$crate::utils::json::to_pretty_json(self))
                }
            }
        )+
    };
}

pub(crate) use display_as_json;

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;

    #[derive(Serialize)]
    struct Sample {
        name: String,
        value: u32,
    }

    #[test]
    fn test_pretty_json_output() {
        let sample = Sample {
            name: "session".into(),
            value: 3,
        };
        let text = to_pretty_json(&sample);
        assert!(text.contains("\"name\": \"session\""));
        assert!(text.contains("\"value\": 3"));
        // Pretty printing spans multiple lines.
        assert!(text.contains('\n'));
    }
}
