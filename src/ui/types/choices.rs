use crate::evaluation::ReportFormat;
use crate::learners::SplitRule;
use anyhow::{Context, Result, anyhow, bail};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::str::FromStr;
use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DumpFormat {
    Csv,
    Tsv,
    Json,
}

impl Default for DumpFormat {
    fn default() -> Self {
        DumpFormat::Csv
    }
}

impl From<DumpFormat> for ReportFormat {
    fn from(value: DumpFormat) -> Self {
        match value {
            DumpFormat::Csv => ReportFormat::Csv,
            DumpFormat::Tsv => ReportFormat::Tsv,
            DumpFormat::Json => ReportFormat::Json,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter, EnumString, IntoStaticStr)]
#[strum(serialize_all = "kebab-case")]
pub enum LearnerKind {
    MajorityClass,
    DecisionTree,
}

/// Hyperparameters for the CART adapter, overridable per learner spec.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct CartParams {
    pub max_depth: Option<usize>,
    pub min_weight_split: f32,
    pub min_weight_leaf: f32,
    pub split_rule: SplitRule,
}

impl Default for CartParams {
    fn default() -> Self {
        Self {
            max_depth: None,
            min_weight_split: 2.0,
            min_weight_leaf: 1.0,
            split_rule: SplitRule::Gini,
        }
    }
}

/// A fully parameterized learner selection, parsed from a CLI spec of the
/// form `name` or `name:key=value,key=value`.
#[derive(Debug, Clone, PartialEq)]
pub enum LearnerChoice {
    MajorityClass,
    DecisionTree(CartParams),
}

impl LearnerChoice {
    pub fn kind(&self) -> LearnerKind {
        match self {
            LearnerChoice::MajorityClass => LearnerKind::MajorityClass,
            LearnerChoice::DecisionTree(_) => LearnerKind::DecisionTree,
        }
    }
}

impl FromStr for LearnerChoice {
    type Err = anyhow::Error;

    fn from_str(spec: &str) -> Result<Self> {
        let (name, params) = match spec.split_once(':') {
            Some((name, params)) => (name, Some(params)),
            None => (spec, None),
        };

        let kind = parse_kind(name)?;
        let overrides = parse_overrides(params)?;

        match kind {
            LearnerKind::MajorityClass => {
                if !overrides.is_empty() {
                    bail!("majority-class takes no parameters");
                }
                Ok(LearnerChoice::MajorityClass)
            }
            LearnerKind::DecisionTree => {
                let params: CartParams = serde_json::from_value(Value::Object(overrides))
                    .context("invalid decision-tree parameters")?;
                Ok(LearnerChoice::DecisionTree(params))
            }
        }
    }
}

fn parse_kind(raw: &str) -> Result<LearnerKind> {
    for cand in candidate_spellings(raw) {
        if let Ok(kind) = cand.parse::<LearnerKind>() {
            return Ok(kind);
        }
    }
    Err(anyhow!("unknown learner '{raw}'"))
}

fn candidate_spellings(input: &str) -> Vec<String> {
    let trimmed = input.trim();
    let mut out = vec![
        trimmed.to_string(),
        trimmed.to_lowercase(),
        trimmed.to_lowercase().replace('_', "-"),
        kebab_from_token(trimmed),
    ];
    out.sort();
    out.dedup();
    out
}

fn kebab_from_token(token: &str) -> String {
    let mut buf = String::new();
    let mut prev_lower = false;
    for ch in token.chars() {
        if ch.is_uppercase() {
            if prev_lower {
                buf.push('-');
            }
            for low in ch.to_lowercase() {
                buf.push(low);
            }
            prev_lower = false;
        } else if ch == '_' {
            buf.push('-');
            prev_lower = false;
        } else {
            buf.push(ch);
            prev_lower = ch.is_lowercase();
        }
    }
    buf
}

fn parse_overrides(raw: Option<&str>) -> Result<Map<String, Value>> {
    let mut overrides = Map::new();
    let Some(raw) = raw else {
        return Ok(overrides);
    };

    for pair in raw.split(',').filter(|p| !p.trim().is_empty()) {
        let (key, value) = pair
            .split_once('=')
            .ok_or_else(|| anyhow!("expected KEY=VALUE, got '{pair}'"))?;
        let key = key.trim();
        if key.is_empty() {
            bail!("empty key in '{pair}'");
        }
        overrides.insert(key.to_string(), parse_literal(value.trim()));
    }
    Ok(overrides)
}

/// A value parses as json where possible, otherwise stays a string, so
/// `max-depth=20` and `split-rule=entropy` both work unquoted.
fn parse_literal(raw: &str) -> Value {
    if raw.is_empty() {
        return Value::String(String::new());
    }
    serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()))
}
