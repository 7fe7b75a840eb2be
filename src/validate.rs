use serde_json::Value;
use thiserror::Error;

/// One string field of a request body, with its allowed length in UTF-16 code units.
#[derive(Debug, Clone, Copy)]
pub struct FieldRule {
    pub name: &'static str,
    pub min_len: usize,
    pub max_len: usize,
}

#[derive(Debug, Clone, Copy)]
pub struct Schema {
    pub fields: &'static [FieldRule],
}

pub const PAGE_SCHEMA: Schema = Schema {
    fields: &[FieldRule { name: "handle", min_len: 1, max_len: 64 }],
};

pub const COMMENT_SCHEMA: Schema = Schema {
    fields: &[
        FieldRule { name: "page", min_len: 1, max_len: 64 },
        FieldRule { name: "comment", min_len: 1, max_len: 256 },
    ],
};

#[derive(Debug, Error)]
#[error("invalid body: {}", .problems.join("; "))]
pub struct ValidationError {
    pub problems: Vec<String>,
}

impl Schema {
    /// Checks every field and reports all violations at once.
    pub fn check(&self, body: &Value) -> Result<(), ValidationError> {
        let Some(object) = body.as_object() else {
            return Err(ValidationError {
                problems: vec![format!("expected an object, got {body}")],
            });
        };

        let mut problems = Vec::new();
        for rule in self.fields {
            match object.get(rule.name) {
                None => problems.push(format!("{} is required", rule.name)),
                Some(Value::String(s)) => {
                    let len = s.encode_utf16().count();
                    if len < rule.min_len || len > rule.max_len {
                        problems.push(format!(
                            "{} must be {}..={} UTF-16 units long, got {len}",
                            rule.name, rule.min_len, rule.max_len
                        ));
                    }
                }
                Some(other) => problems.push(format!("{} must be a string, got {other}", rule.name)),
            }
        }

        if problems.is_empty() {
            Ok(())
        } else {
            Err(ValidationError { problems })
        }
    }
}

/// Parses a raw request body and checks it against `schema`.
pub fn parse_body(bytes: &[u8], schema: &Schema) -> anyhow::Result<Value> {
    let body: Value = serde_json::from_slice(bytes)?;
    schema.check(&body)?;
    Ok(body)
}

pub trait GetField {
    fn get_str_field(&self, field: &str) -> anyhow::Result<String>;
}

impl GetField for Value {
    fn get_str_field(&self, field: &str) -> anyhow::Result<String> {
        Ok(
            self.get(field)
            .ok_or_else(|| anyhow::anyhow!("expected {field} in {self}"))?
            .as_str()
            .ok_or_else(|| anyhow::anyhow!("expected {field} in {self} to be string"))?
            .to_owned()
        )
    }
}
