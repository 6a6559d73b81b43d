// ─────────────────────────────────────────────────────────────────────
// Agoge Gravity — Config
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use crate::error::{AgogeError, AgogeResult};
use crate::state::{BoundingBox, Grid3D};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// String-keyed run parameters.
///
/// Keys are namespaced by their owner, e.g. `"GravityCollapse.r_jeans"` or
/// `"grid.nx"`. Values are stored as strings and parsed on lookup.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParameterSystem {
    values: BTreeMap<String, String>,
}

/// Join a namespace prefix and a parameter name.
pub fn param_key(prefix: &str, name: &str) -> String {
    format!("{prefix}.{name}")
}

impl ParameterSystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a default. Never overwrites an existing entry.
    ///
    /// Returns `true` if the key was newly inserted.
    pub fn add_default(&mut self, key: impl Into<String>, value: impl Into<String>) -> bool {
        let key = key.into();
        if self.values.contains_key(&key) {
            return false;
        }
        self.values.insert(key, value.into());
        true
    }

    /// Set or override a value.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    fn raw(&self, key: &str) -> AgogeResult<&str> {
        self.values
            .get(key)
            .map(String::as_str)
            .ok_or_else(|| AgogeError::MissingParameter {
                key: key.to_string(),
            })
    }

    pub fn get_string(&self, key: &str) -> AgogeResult<String> {
        self.raw(key).map(str::to_string)
    }

    pub fn get_f64(&self, key: &str) -> AgogeResult<f64> {
        let raw = self.raw(key)?;
        raw.trim()
            .parse::<f64>()
            .map_err(|_| AgogeError::InvalidParameter {
                key: key.to_string(),
                value: raw.to_string(),
                expected: "floating-point number",
            })
    }

    pub fn get_usize(&self, key: &str) -> AgogeResult<usize> {
        let raw = self.raw(key)?;
        raw.trim()
            .parse::<usize>()
            .map_err(|_| AgogeError::InvalidParameter {
                key: key.to_string(),
                value: raw.to_string(),
                expected: "non-negative integer",
            })
    }

    /// Parse a flat JSON object. Values may be strings, numbers or booleans.
    pub fn from_json_str(json: &str) -> AgogeResult<Self> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        let object = value.as_object().ok_or_else(|| {
            AgogeError::ConfigError("parameter file must hold a JSON object".to_string())
        })?;

        let mut params = Self::new();
        for (key, v) in object {
            let text = match v {
                serde_json::Value::String(s) => s.clone(),
                serde_json::Value::Number(n) => n.to_string(),
                serde_json::Value::Bool(b) => b.to_string(),
                other => {
                    return Err(AgogeError::ConfigError(format!(
                        "parameter '{key}' must be a string, number or boolean, got {other}"
                    )))
                }
            };
            params.set(key.clone(), text);
        }
        Ok(params)
    }

    /// Load from a JSON parameter file.
    pub fn from_file(path: impl AsRef<Path>) -> AgogeResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    /// Apply `key=value` overrides in order.
    ///
    /// Every item is parsed before any is applied: on error the registry is
    /// left untouched.
    pub fn apply_overrides<I, S>(&mut self, overrides: I) -> AgogeResult<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let parsed = overrides
            .into_iter()
            .map(|item| parse_override(item.as_ref()))
            .collect::<AgogeResult<Vec<_>>>()?;
        for (key, value) in parsed {
            self.set(key, value);
        }
        Ok(())
    }
}

fn parse_override(item: &str) -> AgogeResult<(String, String)> {
    let (key, value) = item.split_once('=').ok_or_else(|| {
        AgogeError::ConfigError(format!("override '{item}' is not of the form key=value"))
    })?;
    let key = key.trim();
    if key.is_empty() {
        return Err(AgogeError::ConfigError(format!(
            "override '{item}' has an empty key"
        )));
    }
    Ok((key.to_string(), value.trim().to_string()))
}

/// Typed view over a namespace of the parameter registry.
///
/// `register_defaults` must add every key that `from_parameters` reads, so
/// binding after registration cannot hit a missing key.
pub trait FromParameters: Sized {
    fn register_defaults(prefix: &str, params: &mut ParameterSystem);

    fn from_parameters(prefix: &str, params: &ParameterSystem) -> AgogeResult<Self>;
}

/// Grid resolution and domain bounds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridConfig {
    #[serde(default = "default_cells")]
    pub nx: usize,
    #[serde(default = "default_cells")]
    pub ny: usize,
    #[serde(default = "default_cells")]
    pub nz: usize,
    #[serde(default = "default_bbox")]
    pub bbox: BoundingBox,
}

fn default_cells() -> usize {
    8
}
fn default_bbox() -> BoundingBox {
    BoundingBox::cube(-2.0, 2.0)
}

impl Default for GridConfig {
    fn default() -> Self {
        GridConfig {
            nx: default_cells(),
            ny: default_cells(),
            nz: default_cells(),
            bbox: default_bbox(),
        }
    }
}

impl GridConfig {
    /// Create a Grid3D from this config's resolution and bounds.
    pub fn create_grid(&self) -> AgogeResult<Grid3D> {
        if self.nx == 0 || self.ny == 0 || self.nz == 0 {
            return Err(AgogeError::ConfigError(format!(
                "grid must have nx,ny,nz >= 1, got ({}, {}, {})",
                self.nx, self.ny, self.nz
            )));
        }
        let b = &self.bbox;
        let bounds = [
            ("x", b.xmin, b.xmax),
            ("y", b.ymin, b.ymax),
            ("z", b.zmin, b.zmax),
        ];
        for (axis, lo, hi) in bounds {
            if !lo.is_finite() || !hi.is_finite() || hi <= lo {
                return Err(AgogeError::ConfigError(format!(
                    "{axis} bounds must be finite with min < max, got [{lo}, {hi}]"
                )));
            }
        }
        Ok(Grid3D::new(self.nx, self.ny, self.nz, self.bbox))
    }
}

impl FromParameters for GridConfig {
    fn register_defaults(prefix: &str, params: &mut ParameterSystem) {
        let d = GridConfig::default();
        params.add_default(param_key(prefix, "nx"), d.nx.to_string());
        params.add_default(param_key(prefix, "ny"), d.ny.to_string());
        params.add_default(param_key(prefix, "nz"), d.nz.to_string());
        params.add_default(param_key(prefix, "xmin"), d.bbox.xmin.to_string());
        params.add_default(param_key(prefix, "xmax"), d.bbox.xmax.to_string());
        params.add_default(param_key(prefix, "ymin"), d.bbox.ymin.to_string());
        params.add_default(param_key(prefix, "ymax"), d.bbox.ymax.to_string());
        params.add_default(param_key(prefix, "zmin"), d.bbox.zmin.to_string());
        params.add_default(param_key(prefix, "zmax"), d.bbox.zmax.to_string());
    }

    fn from_parameters(prefix: &str, params: &ParameterSystem) -> AgogeResult<Self> {
        let f = |name: &str| params.get_f64(&param_key(prefix, name));
        Ok(GridConfig {
            nx: params.get_usize(&param_key(prefix, "nx"))?,
            ny: params.get_usize(&param_key(prefix, "ny"))?,
            nz: params.get_usize(&param_key(prefix, "nz"))?,
            bbox: BoundingBox::new(
                f("xmin")?,
                f("xmax")?,
                f("ymin")?,
                f("ymax")?,
                f("zmin")?,
                f("zmax")?,
            ),
        })
    }
}
