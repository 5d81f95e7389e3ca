use serde_json::Value;
use sha2::{Digest, Sha512};

/// Compute the GA4GH sha512t24u digest: SHA-512 truncated to 24 bytes, base64url encoded.
///
/// # Arguments
///
/// * `input` - string slice or byte slice to digest
pub fn sha512t24u<T: AsRef<[u8]>>(input: T) -> String {
    let mut hasher = Sha512::new();
    for chunk in input.as_ref().chunks(1024) {
        hasher.update(chunk);
    }
    base64_url::encode(&hasher.finalize()[0..24])
}

fn quote(s: &str) -> String {
    // Display on a JSON string value is infallible and applies JSON escaping
    Value::String(s.to_string()).to_string()
}

/// Serialize a JSON value the RFC-8785 (JCS) way: no whitespace, keys sorted
/// lexicographically, integers without exponent or fraction.
///
/// VRS objects only ever hold strings, integers and nested objects, so floats are written
/// in their shortest form without trailing zeros.
pub fn canonicalize_json(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                i.to_string()
            } else if let Some(u) = n.as_u64() {
                u.to_string()
            } else if let Some(f) = n.as_f64() {
                if f.fract() == 0.0 {
                    format!("{:.0}", f)
                } else {
                    let formatted = format!("{}", f);
                    formatted
                        .trim_end_matches('0')
                        .trim_end_matches('.')
                        .to_string()
                }
            } else {
                n.to_string()
            }
        }
        Value::String(s) => quote(s),
        Value::Array(arr) => {
            let elements: Vec<String> = arr.iter().map(canonicalize_json).collect();
            format!("[{}]", elements.join(","))
        }
        Value::Object(obj) => {
            let mut sorted_keys: Vec<&String> = obj.keys().collect();
            sorted_keys.sort();

            let pairs: Vec<String> = sorted_keys
                .iter()
                .map(|key| format!("{}:{}", quote(key), canonicalize_json(&obj[*key])))
                .collect();

            format!("{{{}}}", pairs.join(","))
        }
    }
}
