//! Assessment aggregation
//!
//! Best angles are compared with the template's normal ranges. Each body part
//! gets a status from the ratio of the user's average over the movements
//! they performed to the average normal range of every configured movement
//! in the group, each table row a colour at the same thresholds, and the
//! overall status is the most frequent body-part status.

use std::collections::BTreeMap;

use log::debug;
use serde::{Serialize, Serializer};

use crate::scoring::{mean, most_common};
use super::template::{AssessmentTemplate, BodyPart};

/// Ratio at or above which a movement is "good"
pub const GOOD_RATIO: f64 = 0.75;
/// Ratio at or above which a movement is "fair"
pub const FAIR_RATIO: f64 = 0.5;
/// Normal range used when none of a group's movements has one configured
pub const UNMATCHED_NORMAL_RANGE: f64 = 1.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Good,
    Fair,
    Poor,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Green,
    Orange,
    Red,
}

impl Status {
    pub fn from_ratio(ratio: f64) -> Self {
        if ratio >= GOOD_RATIO {
            Status::Good
        } else if ratio >= FAIR_RATIO {
            Status::Fair
        } else {
            Status::Poor
        }
    }

    pub fn color(&self) -> Color {
        match self {
            Status::Good => Color::Green,
            Status::Fair => Color::Orange,
            Status::Poor => Color::Red,
        }
    }
}

/// Per-chart statuses, body parts in template order
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ChartSummary {
    pub chart_title: String,
    pub chart_type: String,
    #[serde(serialize_with = "ordered_map")]
    pub body_detail: Vec<(String, Status)>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TableRow {
    #[serde(rename = "movment")]
    pub movement: String,
    /// Best angle, one decimal
    pub result: f64,
    pub normal_range: f64,
    pub color: Color,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AssessmentSummary {
    pub overall: Status,
    pub charts: Vec<ChartSummary>,
    pub table: Vec<TableRow>,
}

/// Writes pairs as a JSON object keeping their order
fn ordered_map<S>(pairs: &[(String, Status)], serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_map(pairs.iter().map(|(k, v)| (k, v)))
}

fn body_part_status(
    part: &BodyPart,
    best_angles: &BTreeMap<String, f64>,
    template: &AssessmentTemplate,
) -> Status {
    let Some(average) = mean(part.movements.iter().filter_map(|m| best_angles.get(m).copied())) else {
        return Status::Poor;
    };
    let normal = mean(part.movements.iter().filter_map(|m| template.normal_for(m)))
        .unwrap_or(UNMATCHED_NORMAL_RANGE);

    Status::from_ratio(average / normal)
}

/// Summarise `best_angles` (template ids, aliases already applied)
pub fn assess(best_angles: &BTreeMap<String, f64>, template: &AssessmentTemplate) -> AssessmentSummary {
    let charts: Vec<ChartSummary> = template
        .charts
        .iter()
        .map(|chart| ChartSummary {
            chart_title: chart.chart_title.clone(),
            chart_type: chart.chart_type.clone(),
            body_detail: chart
                .body_parts
                .iter()
                .map(|part| (part.part.clone(), body_part_status(part, best_angles, template)))
                .collect(),
        })
        .collect();

    let table: Vec<TableRow> = template
        .table
        .iter()
        .filter_map(|row| {
            let &value = best_angles.get(&row.movement)?;
            Some(TableRow {
                movement: row.movement.clone(),
                result: (value * 10.0).round() / 10.0,
                normal_range: row.degrees,
                color: Status::from_ratio(value / row.degrees).color(),
            })
        })
        .collect();

    let statuses = charts.iter().flat_map(|c| c.body_detail.iter().map(|&(_, s)| s));
    let overall = most_common(statuses).unwrap_or(Status::Poor);

    debug!(
        "assessment '{}': {} movements with data, {} table rows, overall {:?}",
        template.name,
        best_angles.len(),
        table.len(),
        overall
    );

    AssessmentSummary { overall, charts, table }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assessment::{ChartSpec, NormalRange, TemplateCatalog};

    fn angles(pairs: &[(&str, f64)]) -> BTreeMap<String, f64> {
        pairs.iter().map(|&(k, v)| (k.to_string(), v)).collect()
    }

    fn part(name: &str, movements: &[&str]) -> BodyPart {
        BodyPart {
            part: name.to_string(),
            movements: movements.iter().map(|m| m.to_string()).collect(),
        }
    }

    #[test]
    fn test_status_thresholds() {
        assert_eq!(Status::from_ratio(0.75), Status::Good);
        assert_eq!(Status::from_ratio(0.7499), Status::Fair);
        assert_eq!(Status::from_ratio(0.5), Status::Fair);
        assert_eq!(Status::from_ratio(0.49), Status::Poor);
        assert_eq!(Status::Fair.color(), Color::Orange);
    }

    #[test]
    fn test_back_template() {
        let template = TemplateCatalog::builtin().get("back").unwrap();
        let best = angles(&[
            ("back_flexion", 72.0),         // 0.8 good
            ("back_extension", 16.0),       // 0.53 fair
            ("back_left_rotation", 20.0),   // rotation group 25 / 60 poor
            ("back_right_rotation", 30.0),
            ("knee_raise_left", 110.04),    // knee group 110.04 / 130 good
        ]);
        let summary = assess(&best, template);

        let back = &summary.charts[0];
        assert_eq!(back.chart_title, "back analysis");
        let detail: Vec<(&str, Status)> = back.body_detail.iter().map(|(k, s)| (k.as_str(), *s)).collect();
        assert_eq!(
            detail,
            vec![
                ("flexion", Status::Good),
                ("extension", Status::Fair),
                ("lateral_flexion", Status::Poor),
                ("rotation", Status::Poor),
            ]
        );
        let hip = &summary.charts[1];
        assert_eq!(hip.body_detail[2], ("knee_flexion".to_string(), Status::Good));

        // poor: lateral, rotation, hip internal, hip external = 4 of 7
        assert_eq!(summary.overall, Status::Poor);

        let movements: Vec<&str> = summary.table.iter().map(|r| r.movement.as_str()).collect();
        assert_eq!(
            movements,
            vec!["back_flexion", "back_extension", "back_left_rotation", "back_right_rotation", "knee_raise_left"]
        );
        let knee = &summary.table[4];
        assert_eq!(knee.result, 110.0);
        assert_eq!(knee.normal_range, 130.0);
        assert_eq!(knee.color, Color::Green);
        assert_eq!(summary.table[2].color, Color::Red);
    }

    #[test]
    fn test_overall_tie_first_seen_wins() {
        let template = AssessmentTemplate {
            name: "t".into(),
            charts: vec![ChartSpec {
                chart_title: "c".into(),
                chart_type: "bar".into(),
                body_parts: vec![part("a", &["x"]), part("b", &["y"])],
            }],
            table: vec![
                NormalRange { movement: "x".into(), degrees: 100.0 },
                NormalRange { movement: "y".into(), degrees: 100.0 },
            ],
        };
        let summary = assess(&angles(&[("x", 60.0), ("y", 90.0)]), &template);
        assert_eq!(summary.overall, Status::Fair);
    }

    #[test]
    fn test_unmatched_normal_range() {
        let template = AssessmentTemplate {
            name: "t".into(),
            charts: vec![ChartSpec {
                chart_title: "c".into(),
                chart_type: "bar".into(),
                body_parts: vec![part("a", &["x"])],
            }],
            table: vec![],
        };
        let summary = assess(&angles(&[("x", 0.9)]), &template);
        // 0.9 / 1.0
        assert_eq!(summary.charts[0].body_detail[0].1, Status::Good);
        assert!(summary.table.is_empty());
    }

    #[test]
    fn test_group_normal_ignores_missing_data() {
        let template = AssessmentTemplate {
            name: "t".into(),
            charts: vec![ChartSpec {
                chart_title: "c".into(),
                chart_type: "bar".into(),
                body_parts: vec![part("p", &["a", "b"])],
            }],
            table: vec![NormalRange { movement: "b".into(), degrees: 100.0 }],
        };
        // 30 / 100, b sets the group normal without data of its own
        let summary = assess(&angles(&[("a", 30.0)]), &template);
        assert_eq!(summary.charts[0].body_detail[0].1, Status::Poor);
        assert!(summary.table.is_empty());

        // 80 / 100
        let summary = assess(&angles(&[("a", 30.0), ("b", 130.0)]), &template);
        assert_eq!(summary.charts[0].body_detail[0].1, Status::Good);
    }

    #[test]
    fn test_no_data_is_poor() {
        let template = TemplateCatalog::builtin().get("neck_shoulder").unwrap();
        let summary = assess(&BTreeMap::new(), template);
        assert_eq!(summary.overall, Status::Poor);
        assert!(summary.table.is_empty());
        assert!(summary
            .charts
            .iter()
            .all(|c| c.body_detail.iter().all(|(_, s)| *s == Status::Poor)));
    }

    #[test]
    fn test_wire_shape() {
        let template = TemplateCatalog::builtin().get("full_body").unwrap();
        let summary = assess(&angles(&[("back_flexion", 80.26)]), template);
        let json = serde_json::to_string(&summary).unwrap();
        assert!(json.starts_with(r#"{"overall":"poor","charts":[{"chart_title":"back analysis","chart_type":"bar","body_detail":{"flexion":"good","extension":"poor","lateral_flexion":"poor"}}"#));
        assert!(json.contains(r#"{"movment":"back_flexion","result":80.3,"normal_range":90.0,"color":"green"}"#));
    }
}
