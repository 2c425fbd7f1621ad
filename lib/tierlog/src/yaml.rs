/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2023-2025 ByteDance and/or its affiliates.
 */

use std::str::FromStr;

use anyhow::{Context, anyhow};
use yaml_rust::{Yaml, yaml};

use crate::backend::LogBackendBuilder;
use crate::{LogConfig, LoggingLevel, Priority};

fn foreach_kv<F>(table: &yaml::Hash, mut f: F) -> anyhow::Result<()>
where
    F: FnMut(&str, &Yaml) -> anyhow::Result<()>,
{
    for (k, v) in table.iter() {
        if let Yaml::String(key) = k {
            f(key, v).context(format!("failed to parse value of key {key}"))?;
        } else {
            return Err(anyhow!("key in hash should be string"));
        }
    }
    Ok(())
}

fn normalize_key(raw: &str) -> String {
    raw.to_lowercase().replace('-', "_")
}

fn as_bool(v: &Yaml) -> anyhow::Result<bool> {
    match v {
        Yaml::String(s) => match s.to_lowercase().as_str() {
            "on" | "true" | "yes" | "1" => Ok(true),
            "off" | "false" | "no" | "0" => Ok(false),
            _ => Err(anyhow!("invalid yaml string value for 'bool': {s}")),
        },
        Yaml::Boolean(value) => Ok(*value),
        Yaml::Integer(i) => Ok(*i != 0),
        _ => Err(anyhow!(
            "yaml value type for 'bool' should be 'boolean' / 'string' / 'integer'"
        )),
    }
}

impl Priority {
    pub fn parse_yaml(v: &Yaml) -> anyhow::Result<Self> {
        match v {
            Yaml::String(s) => Ok(Priority::from_str(s)?),
            Yaml::Integer(i) => {
                let v = u8::try_from(*i)?;
                Priority::from_u8(v).ok_or_else(|| anyhow!("out of range priority value {v}"))
            }
            _ => Err(anyhow!(
                "yaml value type for 'priority' should be 'string' or 'integer'"
            )),
        }
    }
}

impl LoggingLevel {
    pub fn parse_yaml(v: &Yaml) -> anyhow::Result<Self> {
        if let Yaml::String(s) = v {
            Ok(LoggingLevel::from_str(s)?)
        } else {
            Err(anyhow!("yaml value type for 'logging level' should be 'string'"))
        }
    }
}

impl LogBackendBuilder {
    /// Parse a backend designator, `None` for null or an empty string.
    pub fn parse_yaml(v: &Yaml) -> anyhow::Result<Option<Self>> {
        match v {
            Yaml::String(s) => Ok(LogBackendBuilder::from_name(s)),
            Yaml::Null => Ok(None),
            _ => Err(anyhow!("yaml value type for 'log backend' should be 'string'")),
        }
    }

    fn parse_required_yaml(v: &Yaml) -> anyhow::Result<Self> {
        LogBackendBuilder::parse_yaml(v)?.ok_or_else(|| anyhow!("empty log backend name"))
    }
}

impl LogConfig {
    pub fn parse_yaml(value: &Yaml) -> anyhow::Result<Self> {
        match value {
            Yaml::String(_) => {
                let level = LoggingLevel::parse_yaml(value)?;
                Ok(LogConfig::with_level(level))
            }
            Yaml::Hash(map) => {
                let mut config = LogConfig::default();
                foreach_kv(map, |k, v| match normalize_key(k).as_str() {
                    "level" | "logging_level" => {
                        let level = LoggingLevel::parse_yaml(v)
                            .context(format!("invalid logging level value for key {k}"))?;
                        config.set_level(level);
                        Ok(())
                    }
                    "priority" | "threshold" => {
                        let priority = Priority::parse_yaml(v)
                            .context(format!("invalid priority value for key {k}"))?;
                        config.set_priority(priority);
                        Ok(())
                    }
                    "extended_info" => {
                        let enable = as_bool(v)
                            .context(format!("invalid boolean value for key {k}"))?;
                        config.set_extended_info(enable);
                        Ok(())
                    }
                    "low_priority" | "stdout" => {
                        let builder = LogBackendBuilder::parse_required_yaml(v)
                            .context(format!("invalid log backend value for key {k}"))?;
                        config.set_low_priority_backend(builder);
                        Ok(())
                    }
                    "high_priority" | "stderr" => {
                        let builder = LogBackendBuilder::parse_required_yaml(v)
                            .context(format!("invalid log backend value for key {k}"))?;
                        config.set_high_priority_backend(builder);
                        Ok(())
                    }
                    "trace" | "trace_backend" => {
                        let builder = LogBackendBuilder::parse_yaml(v)
                            .context(format!("invalid log backend value for key {k}"))?;
                        config.set_trace_backend(builder);
                        Ok(())
                    }
                    _ => Err(anyhow!("invalid key {k}")),
                })?;
                Ok(config)
            }
            Yaml::Null => Ok(LogConfig::default()),
            _ => Err(anyhow!(
                "yaml value type for 'LogConfig' should be 'string' or 'map'"
            )),
        }
    }
}
