use serde::Deserialize;

use crate::error::{Error, Result};
use crate::types::{QueryLocation, QueryResult, RuleRecord};

/// One `Target` message of `--output=streamed_jsonproto`
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Target {
    #[serde(rename = "type")]
    kind: String,
    rule: Option<Rule>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Rule {
    name: String,
    rule_class: String,
    #[serde(default)]
    location: String,
}

/// Parse newline-delimited JSON targets, keeping rules in output order
pub fn parse_streamed_jsonproto(output: &str) -> Result<QueryResult> {
    let mut rules = Vec::new();

    for (index, line) in output.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let target: Target = serde_json::from_str(line).map_err(|source| Error::QueryOutput {
            line: index + 1,
            source,
        })?;

        match (target.kind.as_str(), target.rule) {
            ("RULE", Some(rule)) => {
                let Ok(location) = rule.location.parse::<QueryLocation>();
                rules.push(RuleRecord::new(rule.name, rule.rule_class, location));
            }
            (kind, _) => tracing::debug!("Skipping non-rule query target of type {}", kind),
        }
    }

    Ok(QueryResult { rules })
}
