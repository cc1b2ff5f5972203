//! Assessment templates
//!
//! A template groups exercises into body-part charts and lists the normal
//! range, in degrees, of each movement it reports on. The built-in set ships
//! as `assets/assessment_templates.json`.

use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

const BUILTIN_TEMPLATES: &str = include_str!("../../assets/assessment_templates.json");

/// One bar of a chart: a label over one or more exercise ids
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BodyPart {
    pub part: String,
    pub movements: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChartSpec {
    pub chart_title: String,
    pub chart_type: String,
    pub body_parts: Vec<BodyPart>,
}

/// Expected full range of one movement
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NormalRange {
    pub movement: String,
    pub degrees: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AssessmentTemplate {
    pub name: String,
    pub charts: Vec<ChartSpec>,
    pub table: Vec<NormalRange>,
}

impl AssessmentTemplate {
    /// Configured normal range of `movement`, if the table lists it
    pub fn normal_for(&self, movement: &str) -> Option<f64> {
        self.table
            .iter()
            .find(|row| row.movement == movement)
            .map(|row| row.degrees)
    }

    fn validate(&self) -> EngineResult<()> {
        let name = self.name.as_str();
        if name.is_empty() {
            return Err(EngineError::config("assessment template with empty name"));
        }
        for chart in &self.charts {
            if chart.body_parts.is_empty() {
                return Err(EngineError::config(format!(
                    "assessment '{name}': chart '{}' has no body parts",
                    chart.chart_title
                )));
            }
            if let Some(part) = chart.body_parts.iter().find(|p| p.movements.is_empty()) {
                return Err(EngineError::config(format!(
                    "assessment '{name}': body part '{}' lists no movements",
                    part.part
                )));
            }
        }
        // A zero normal would divide by zero in the ratio
        if let Some(row) = self
            .table
            .iter()
            .find(|row| !(row.degrees.is_finite() && row.degrees > 0.0))
        {
            return Err(EngineError::config(format!(
                "assessment '{name}': normal range of '{}' must be positive, got {}",
                row.movement, row.degrees
            )));
        }
        Ok(())
    }
}

#[derive(Deserialize)]
struct CatalogFile {
    templates: Vec<AssessmentTemplate>,
}

/// Named assessment templates
#[derive(Clone, Debug)]
pub struct TemplateCatalog {
    templates: Vec<AssessmentTemplate>,
}

static BUILTIN: OnceLock<TemplateCatalog> = OnceLock::new();

impl TemplateCatalog {
    pub fn new(templates: Vec<AssessmentTemplate>) -> EngineResult<Self> {
        for (i, template) in templates.iter().enumerate() {
            template.validate()?;
            if templates[..i].iter().any(|t| t.name == template.name) {
                return Err(EngineError::config(format!(
                    "assessment '{}' defined twice",
                    template.name
                )));
            }
        }
        Ok(Self { templates })
    }

    /// Parse `{"templates": [...]}`
    pub fn from_json(json: &str) -> EngineResult<Self> {
        let file: CatalogFile = serde_json::from_str(json)
            .map_err(|e| EngineError::config(format!("assessment templates: {e}")))?;
        Self::new(file.templates)
    }

    pub fn builtin() -> &'static TemplateCatalog {
        BUILTIN.get_or_init(|| match Self::from_json(BUILTIN_TEMPLATES) {
            Ok(catalog) => catalog,
            Err(err) => panic!("built-in assessment templates are invalid: {err}"),
        })
    }

    pub fn get(&self, name: &str) -> EngineResult<&AssessmentTemplate> {
        self.templates
            .iter()
            .find(|t| t.name == name)
            .ok_or_else(|| EngineError::unknown_template(name))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.templates.iter().map(|t| t.name.as_str())
    }
}
