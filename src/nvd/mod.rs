//! Vulnerability database records.
//!
//! The upstream API serves camel case keys while the typed records here
//! declare snake case fields, matching the convention of the rest of the
//! crate. [`convert_camel_case`] renames the keys of a decoded payload
//! before it is materialized:
//!
//! ```
//! use octomodels::nvd::convert_camel_case;
//! use serde_json::json;
//!
//! let payload = convert_camel_case(json!({
//!     "sourceIdentifier": "cve@mitre.org",
//!     "cvssMetricV31": [],
//! }));
//!
//! assert!(payload.get("source_identifier").is_some());
//! assert!(payload.get("cvss_metric_v31").is_some());
//! ```

pub mod models;

use serde_json::{Map, Value};

/// Converts a camel case name into the snake case naming scheme.
///
/// An uppercase letter gets an underscore inserted before it when it
/// follows a lowercase letter or digit, or when it starts a new lowercase
/// word after an acronym (`CVSSData` becomes `cvss_data`).
pub fn snake_case(value: &str) -> String {
    let chars: Vec<char> = value.chars().collect();
    let mut out = String::with_capacity(value.len() + 4);
    for (i, &c) in chars.iter().enumerate() {
        if i > 0 && c.is_ascii_uppercase() {
            let prev = chars[i - 1];
            let next_is_lower = chars
                .get(i + 1)
                .is_some_and(|next| next.is_ascii_lowercase());
            if prev.is_ascii_lowercase()
                || prev.is_ascii_digit()
                || (prev.is_ascii_uppercase() && next_is_lower)
            {
                out.push('_');
            }
        }
        out.push(c.to_ascii_lowercase());
    }
    out
}

/// Renames every object key in `value` to snake case, recursively.
///
/// Array elements and non-object values pass through unchanged. Key order
/// within each object is preserved.
pub fn convert_camel_case(value: Value) -> Value {
    match value {
        Value::Object(map) => {
            let converted: Map<String, Value> = map
                .into_iter()
                .map(|(key, value)| (snake_case(&key), convert_camel_case(value)))
                .collect();
            Value::Object(converted)
        }
        Value::Array(items) => Value::Array(items.into_iter().map(convert_camel_case).collect()),
        value => value,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn snake_case_conversion() {
        assert_eq!(snake_case("sourceIdentifier"), "source_identifier");
        assert_eq!(snake_case("cvssMetricV31"), "cvss_metric_v31");
        assert_eq!(snake_case("CVSSData"), "cvss_data");
        assert_eq!(snake_case("ID"), "id");
        assert_eq!(snake_case("lastModified"), "last_modified");
        assert_eq!(snake_case("already_snake"), "already_snake");
    }

    #[test]
    fn convert_camel_case_recurses_through_objects_and_arrays() {
        let converted = convert_camel_case(json!({
            "vulnStatus": "Analyzed",
            "metrics": {
                "cvssMetricV31": [
                    {"exploitabilityScore": 1.2, "cvssData": {"baseScore": 7.2}},
                ],
            },
        }));

        assert_eq!(converted["vuln_status"], json!("Analyzed"));
        let metric = &converted["metrics"]["cvss_metric_v31"][0];
        assert_eq!(metric["exploitability_score"], json!(1.2));
        assert_eq!(metric["cvss_data"]["base_score"], json!(7.2));
    }

    #[test]
    fn converted_payload_materializes_a_cve() {
        let payload = convert_camel_case(json!({
            "id": "CVE-2020-1234",
            "sourceIdentifier": "cve@mitre.org",
            "published": "2020-01-10T14:59:22.103",
            "lastModified": "2020-01-12T09:00:00.000",
            "descriptions": [{"lang": "en", "value": "An example flaw."}],
            "references": [],
        }));

        let cve = models::Cve::from_value(payload).unwrap();

        assert_eq!(cve.id, "CVE-2020-1234");
        assert_eq!(cve.source_identifier.as_deref(), Some("cve@mitre.org"));
        assert!(cve.references.is_empty());
    }
}
