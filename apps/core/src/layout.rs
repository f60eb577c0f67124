//! Region-bucketed grid layout.
//!
//! Regions stack top to bottom in first-seen order. Inside a region, bubbles fill a grid
//! whose column count is shared by every region, so columns line up down the whole chart.

use serde::Serialize;

use crate::config::ChartConfig;
use crate::domain::{distinct_regions, Record};

/// Extra lift of a region label above its band, on top of the label padding.
const LABEL_GAP: f64 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GridCell {
    pub column: usize,
    pub row: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CanvasSize {
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegionLayout {
    pub name: String,
    pub count: usize,
    pub rows: usize,
    /// Reserved vertical space: rows plus the label padding.
    pub height: f64,
    /// Y of the first bubble row.
    pub grid_top: f64,
    /// Y of the region label.
    pub label_y: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartLayout {
    pub canvas: CanvasSize,
    pub columns: usize,
    /// X of the first column's bubble centers.
    pub grid_left: f64,
    /// Horizontal center of the drawable area, absolute.
    pub center_x: f64,
    pub cell_size: f64,
    pub regions: Vec<RegionLayout>,
}

/// `floor(drawable / cell)`, never less than one column.
pub fn columns_per_row(config: &ChartConfig) -> usize {
    let cell = config.cell_size();
    if cell <= 0.0 {
        return 1;
    }
    let columns = (config.drawable_width() / cell).floor();
    if columns.is_finite() && columns >= 1.0 {
        columns as usize
    } else {
        1
    }
}

impl ChartLayout {
    pub fn compute(records: &[Record], config: &ChartConfig) -> Self {
        let columns = columns_per_row(config);
        let cell_size = config.cell_size();
        let drawable = config.drawable_width();

        let padding = config.region_label_padding;
        let mut grid_top = config.margin.top + padding;
        let regions = distinct_regions(records)
            .into_iter()
            .map(|name| {
                let count = records.iter().filter(|r| r.region == name).count();
                let rows = count.div_ceil(columns);
                let height = (rows as f64).mul_add(cell_size, padding);
                let region = RegionLayout {
                    name: name.to_string(),
                    count,
                    rows,
                    height,
                    grid_top,
                    label_y: grid_top - padding - LABEL_GAP,
                };
                grid_top += height;
                region
            })
            .collect::<Vec<_>>();

        let height = regions.iter().map(|region| region.height).sum::<f64>()
            + config.margin.top
            + config.margin.bottom;

        let region_width = (columns as f64).mul_add(cell_size, -config.bubble_margin);
        let grid_left = (drawable - region_width) / 2.0;

        Self {
            canvas: CanvasSize {
                width: drawable + config.margin.left + config.margin.right,
                height,
            },
            columns,
            grid_left,
            center_x: drawable / 2.0 + config.margin.left,
            cell_size,
            regions,
        }
    }

    pub const fn cell(&self, index: usize) -> GridCell {
        GridCell {
            column: index % self.columns,
            row: index / self.columns,
        }
    }

    /// Absolute bubble center for the `index`-th record of `region`.
    pub fn position(&self, region: &RegionLayout, index: usize) -> (f64, f64) {
        let cell = self.cell(index);
        (
            (cell.column as f64).mul_add(self.cell_size, self.grid_left),
            (cell.row as f64).mul_add(self.cell_size, region.grid_top),
        )
    }

    pub fn region(&self, name: &str) -> Option<&RegionLayout> {
        self.regions.iter().find(|region| region.name == name)
    }
}
