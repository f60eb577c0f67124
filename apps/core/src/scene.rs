use std::rc::Rc;

use serde::Serialize;

use crate::config::ChartConfig;
use crate::domain::Record;
use crate::hover::{HoverInfo, HoverSink};
use crate::layout::{CanvasSize, ChartLayout, GridCell};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegionLabel {
    pub x: f64,
    pub y: f64,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bubble {
    /// Position of the source record in the input slice.
    pub record_index: usize,
    pub region_index: usize,
    pub cell: GridCell,
    pub cx: f64,
    pub cy: f64,
    pub radius: f64,
    pub fill: String,
    pub area_label: String,
    pub party_label: String,
    pub title: String,
    pub hover: HoverInfo,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DrawCommand {
    RegionLabel(RegionLabel),
    Bubble(Bubble),
}

/// A record that rendered with a substituted value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub record_index: usize,
    pub area: String,
    pub message: String,
}

/// Everything a surface needs to draw one chart, in paint order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scene {
    pub canvas: CanvasSize,
    pub layout: ChartLayout,
    pub commands: Vec<DrawCommand>,
    pub diagnostics: Vec<Diagnostic>,
}

/// Consumer of a finished scene.
pub trait Surface {
    type Error;

    fn submit(&mut self, scene: &Scene, hover: Rc<dyn HoverSink>) -> Result<(), Self::Error>;
}

impl Scene {
    pub fn build(records: &[Record], config: &ChartConfig) -> Self {
        let layout = ChartLayout::compute(records, config);
        let mut commands = Vec::with_capacity(records.len() + layout.regions.len());
        let mut diagnostics = Vec::new();

        for (region_index, region) in layout.regions.iter().enumerate() {
            commands.push(DrawCommand::RegionLabel(RegionLabel {
                x: layout.center_x,
                y: region.label_y,
                text: region.name.clone(),
            }));

            let members = records
                .iter()
                .enumerate()
                .filter(|(_, record)| record.region == region.name);

            for (slot, (record_index, record)) in members.enumerate() {
                let margin = match record.margin_value() {
                    Ok(margin) => margin,
                    Err(error) => {
                        diagnostics.push(Diagnostic {
                            record_index,
                            area: record.area.clone(),
                            message: format!("{error}; drawn at zero margin"),
                        });
                        0.0
                    }
                };

                let radius = config.radius.radius(margin);
                let (cx, cy) = layout.position(region, slot);

                commands.push(DrawCommand::Bubble(Bubble {
                    record_index,
                    region_index,
                    cell: layout.cell(slot),
                    cx,
                    cy,
                    radius,
                    fill: config.palette.color_for(&record.winner).to_string(),
                    area_label: truncate_label(&record.area, radius),
                    party_label: record.winner.clone(),
                    title: format!("{}: {}", record.area, record.winner),
                    hover: HoverInfo {
                        area: record.area.clone(),
                        winner: record.winner.clone(),
                        margin: record.margin.clone(),
                    },
                }));
            }
        }

        Self {
            canvas: layout.canvas,
            layout,
            commands,
            diagnostics,
        }
    }

    pub fn bubbles(&self) -> impl Iterator<Item = &Bubble> {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::Bubble(bubble) => Some(bubble),
            DrawCommand::RegionLabel(_) => None,
        })
    }

    pub fn region_labels(&self) -> impl Iterator<Item = &RegionLabel> {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::RegionLabel(label) => Some(label),
            DrawCommand::Bubble(_) => None,
        })
    }
}

/// Keeps the area name inside its circle: at most `radius / 3` characters.
pub fn truncate_label(area: &str, radius: f64) -> String {
    let limit = radius / 3.0;
    if area.chars().count() as f64 > limit {
        area.chars().take(limit.max(0.0).floor() as usize).collect()
    } else {
        area.to_string()
    }
}

/// Builds the scene, reports per-record problems and hands the scene to `surface` once.
pub fn render_chart<S: Surface>(
    records: &[Record],
    config: &ChartConfig,
    surface: &mut S,
    hover: Rc<dyn HoverSink>,
) -> Result<Scene, S::Error> {
    let scene = Scene::build(records, config);

    for diagnostic in &scene.diagnostics {
        tracing::warn!(
            record = diagnostic.record_index,
            area = %diagnostic.area,
            "{}",
            diagnostic.message
        );
    }
    tracing::debug!(
        bubbles = records.len(),
        regions = scene.layout.regions.len(),
        height = scene.canvas.height,
        "scene built"
    );

    surface.submit(&scene, hover)?;
    Ok(scene)
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::{render_chart, truncate_label, DrawCommand, Scene, Surface};
    use crate::config::ChartConfig;
    use crate::domain::Record;
    use crate::hover::{HoverSink, NoHover};
    use crate::layout::GridCell;

    fn assert_close(actual: f64, expected: f64) {
        let diff = (actual - expected).abs();
        assert!(
            diff < 1e-9,
            "expected {expected}, got {actual}, diff {diff}"
        );
    }

    fn record(region: &str, area: &str, winner: &str, margin: &str) -> Record {
        Record {
            area: area.to_string(),
            region: region.to_string(),
            winner: winner.to_string(),
            margin: margin.to_string(),
        }
    }

    #[derive(Default)]
    struct CountingSurface {
        submits: Cell<usize>,
    }

    impl Surface for CountingSurface {
        type Error = std::convert::Infallible;

        fn submit(
            &mut self,
            _scene: &Scene,
            _hover: Rc<dyn HoverSink>,
        ) -> Result<(), Self::Error> {
            self.submits.set(self.submits.get() + 1);
            Ok(())
        }
    }

    #[test]
    fn leeds_and_york_share_one_row() {
        let records = vec![
            record("North", "Leeds", "Labour", "10%"),
            record("North", "York", "Conservatives", "60%"),
        ];
        let scene = Scene::build(&records, &ChartConfig::default());
        let bubbles = scene.bubbles().collect::<Vec<_>>();

        assert_eq!(bubbles.len(), 2);
        assert_eq!(bubbles[0].cell, GridCell { column: 0, row: 0 });
        assert_eq!(bubbles[1].cell, GridCell { column: 1, row: 0 });
        assert_close(bubbles[0].cx, 62.5);
        assert_close(bubbles[1].cx, 62.5 + 105.0);
        assert_close(bubbles[0].cy, 170.0);
        assert_close(bubbles[0].cy, bubbles[1].cy);

        assert_close(bubbles[0].radius, 36.0);
        assert_close(bubbles[1].radius, 60.0);
        assert_eq!(bubbles[0].fill, "#E4003B");
        assert_eq!(bubbles[1].fill, "#0072CE");
        assert_eq!(bubbles[0].title, "Leeds: Labour");
        assert_eq!(bubbles[1].hover.margin, "60%");
        assert!(scene.diagnostics.is_empty());
    }

    #[test]
    fn unknown_party_is_grey() {
        let records = vec![record("North", "Bradford", "Independent", "3%")];
        let scene = Scene::build(&records, &ChartConfig::default());

        assert_eq!(scene.bubbles().next().map(|b| b.fill.as_str()), Some("grey"));
        assert_eq!(
            scene.bubbles().next().map(|b| b.party_label.as_str()),
            Some("Independent")
        );
    }

    #[test]
    fn empty_input_draws_nothing() {
        let scene = Scene::build(&[], &ChartConfig::default());

        assert!(scene.commands.is_empty());
        assert_close(scene.canvas.height, 150.0);
    }

    #[test]
    fn every_record_drawn_exactly_once() {
        let regions = ["Wales", "North", "London", "Scotland"];
        let records = (0..57)
            .map(|i| {
                record(
                    regions[(i * 7) % regions.len()],
                    &format!("Area {i}"),
                    "Green",
                    &format!("{}%", i % 40),
                )
            })
            .collect::<Vec<_>>();
        let scene = Scene::build(&records, &ChartConfig::default());

        let mut seen = scene.bubbles().map(|b| b.record_index).collect::<Vec<_>>();
        seen.sort_unstable();
        assert_eq!(seen, (0..records.len()).collect::<Vec<_>>());
    }

    #[test]
    fn labels_precede_their_bubbles_in_first_seen_order() {
        let records = vec![
            record("South", "Dover", "Reform", "4%"),
            record("North", "Leeds", "Labour", "10%"),
            record("South", "Hove", "Labour", "20%"),
        ];
        let scene = Scene::build(&records, &ChartConfig::default());

        let order = scene
            .commands
            .iter()
            .map(|command| match command {
                DrawCommand::RegionLabel(label) => format!("#{}", label.text),
                DrawCommand::Bubble(bubble) => bubble.hover.area.clone(),
            })
            .collect::<Vec<_>>();

        assert_eq!(order, vec!["#South", "Dover", "Hove", "#North", "Leeds"]);
    }

    #[test]
    fn grid_cells_match_index_within_region() {
        let config = ChartConfig::default();
        let records = (0..26)
            .map(|i| record(if i % 2 == 0 { "A" } else { "B" }, &format!("{i}"), "SNP", "1%"))
            .collect::<Vec<_>>();
        let scene = Scene::build(&records, &config);
        let columns = scene.layout.columns;

        for region_index in 0..2 {
            let cells = scene
                .bubbles()
                .filter(|b| b.region_index == region_index)
                .map(|b| b.cell)
                .collect::<Vec<_>>();
            for (i, cell) in cells.iter().enumerate() {
                assert_eq!(
                    *cell,
                    GridCell {
                        column: i % columns,
                        row: i / columns
                    }
                );
            }
        }
    }

    #[test]
    fn bad_margin_renders_at_minimum_radius() {
        let records = vec![
            record("North", "Leeds", "Labour", "n/a"),
            record("North", "York", "Labour", "20%"),
        ];
        let scene = Scene::build(&records, &ChartConfig::default());

        assert_eq!(scene.bubbles().count(), 2);
        assert_close(scene.bubbles().next().map_or(0.0, |b| b.radius), 30.0);
        assert_eq!(scene.diagnostics.len(), 1);
        assert_eq!(scene.diagnostics[0].record_index, 0);
        assert_eq!(scene.diagnostics[0].area, "Leeds");
    }

    #[test]
    fn area_label_truncated_by_radius() {
        assert_eq!(truncate_label("Leeds", 30.0), "Leeds");
        assert_eq!(truncate_label("Kingston upon Hull East", 30.0), "Kingston u");
        assert_eq!(truncate_label("Kingston upon Hull East", 60.0), "Kingston upon Hull E");
        // 12-character limit at radius 36
        assert_eq!(truncate_label("Ynys Môn and Beyond", 36.0), "Ynys Môn and");
        assert_eq!(truncate_label("Exactly15Chars!", 45.0), "Exactly15Chars!");
    }

    #[test]
    fn render_submits_once() {
        let records = vec![record("North", "Leeds", "Labour", "10%")];
        let mut surface = CountingSurface::default();

        let scene = render_chart(
            &records,
            &ChartConfig::default(),
            &mut surface,
            Rc::new(NoHover),
        )
        .unwrap();

        assert_eq!(surface.submits.get(), 1);
        assert_eq!(scene.bubbles().count(), 1);
    }
}
