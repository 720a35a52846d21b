//! Radar chart output
//!
//! Turns a recipe summary into the three-axis radar series consumed by the
//! chart (min target, max target, current recipe, each normalized to a fixed
//! axis scale) and renders it to a PNG.

use std::path::Path;

use plotters::prelude::*;

use crate::nutrition::summary::{
    RecipeSummary, CARB_RATIO_RANGE, FAT_RATIO_RANGE, PROTEIN_RATIO_RANGE,
};

/// Fixed axis scales: each ratio is divided by these before plotting
pub const PROTEIN_AXIS_MAX: f64 = 35.0;
pub const FAT_AXIS_MAX: f64 = 25.0;
pub const CARB_AXIS_MAX: f64 = 70.0;

/// Recipe polygon color when every ratio is in range
pub const IN_RANGE_COLOR: RGBColor = RGBColor(0x0F, 0x9D, 0x58);
/// Recipe polygon color when any ratio is out of range
pub const OUT_OF_RANGE_COLOR: RGBColor = RGBColor(0xF4, 0xB4, 0x00);
/// Min/max target outline color
const TARGET_COLOR: RGBColor = RGBColor(0xDB, 0x44, 0x37);

/// One radar axis with normalized values in roughly 0..1
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadarAxis {
    pub subject: &'static str,
    pub min_target: f64,
    pub max_target: f64,
    pub recipe: f64,
}

/// Build the three radar axes from a summary
///
/// Undefined ratios plot as zero; the verdict already marks them out of
/// range, so the polygon collapses to the center in the warning color.
pub fn radar_series(summary: &RecipeSummary) -> [RadarAxis; 3] {
    let (protein, fat, carb) = match summary.ratios {
        Some(r) => (r.protein, r.fat, r.carb),
        None => (0.0, 0.0, 0.0),
    };

    [
        RadarAxis {
            subject: "タンパク質",
            min_target: PROTEIN_RATIO_RANGE.0 / PROTEIN_AXIS_MAX,
            max_target: PROTEIN_RATIO_RANGE.1 / PROTEIN_AXIS_MAX,
            recipe: protein / PROTEIN_AXIS_MAX,
        },
        RadarAxis {
            subject: "脂質",
            min_target: FAT_RATIO_RANGE.0 / FAT_AXIS_MAX,
            max_target: FAT_RATIO_RANGE.1 / FAT_AXIS_MAX,
            recipe: fat / FAT_AXIS_MAX,
        },
        RadarAxis {
            subject: "炭水化物",
            min_target: CARB_RATIO_RANGE.0 / CARB_AXIS_MAX,
            max_target: CARB_RATIO_RANGE.1 / CARB_AXIS_MAX,
            recipe: carb / CARB_AXIS_MAX,
        },
    ]
}

/// Color for the recipe polygon, selected by the range verdict
pub fn recipe_color(summary: &RecipeSummary) -> RGBColor {
    if summary.is_within_recommended_range() {
        IN_RANGE_COLOR
    } else {
        OUT_OF_RANGE_COLOR
    }
}

/// Render the radar chart as raw RGB pixels (width * height * 3 bytes)
pub fn generate_radar_chart(
    summary: &RecipeSummary,
    width: u32,
    height: u32,
) -> Result<Vec<u8>, String> {
    let axes = radar_series(summary);
    let color = recipe_color(summary);

    let mut buffer = vec![0u8; (width * height * 3) as usize];

    {
        let root = BitMapBackend::with_buffer(&mut buffer, (width, height)).into_drawing_area();
        root.fill(&WHITE).map_err(|e| e.to_string())?;

        let mut chart = ChartBuilder::on(&root)
            .margin(20)
            .build_cartesian_2d(-1.4f64..1.4f64, -1.4f64..1.4f64)
            .map_err(|e| e.to_string())?;

        // Axis directions: protein up, fat lower-left, carb lower-right
        let angles: [f64; 3] = [
            90.0_f64.to_radians(),
            210.0_f64.to_radians(),
            330.0_f64.to_radians(),
        ];
        let point = |axis: usize, value: f64| -> (f64, f64) {
            (value * angles[axis].cos(), value * angles[axis].sin())
        };
        let closed = |values: [f64; 3]| -> Vec<(f64, f64)> {
            vec![
                point(0, values[0]),
                point(1, values[1]),
                point(2, values[2]),
                point(0, values[0]),
            ]
        };

        // Grid: rings at quarter steps plus the spokes
        let grid_style = ShapeStyle::from(&BLACK.mix(0.2)).stroke_width(1);
        for step in 1..=4 {
            let r = f64::from(step) * 0.25;
            chart
                .draw_series(std::iter::once(PathElement::new(
                    closed([r, r, r]),
                    grid_style,
                )))
                .map_err(|e| e.to_string())?;
        }
        for axis in 0..3 {
            chart
                .draw_series(std::iter::once(PathElement::new(
                    vec![(0.0, 0.0), point(axis, 1.0)],
                    grid_style,
                )))
                .map_err(|e| e.to_string())?;
        }

        // Min and max target outlines
        let target_style = ShapeStyle::from(&TARGET_COLOR.mix(0.8)).stroke_width(1);
        chart
            .draw_series(std::iter::once(PathElement::new(
                closed([axes[0].min_target, axes[1].min_target, axes[2].min_target]),
                target_style,
            )))
            .map_err(|e| e.to_string())?;
        chart
            .draw_series(std::iter::once(PathElement::new(
                closed([axes[0].max_target, axes[1].max_target, axes[2].max_target]),
                target_style,
            )))
            .map_err(|e| e.to_string())?;

        // Recipe polygon, filled, colored by the verdict
        let recipe_values = [axes[0].recipe, axes[1].recipe, axes[2].recipe];
        chart
            .draw_series(std::iter::once(Polygon::new(
                closed(recipe_values),
                color.mix(0.6),
            )))
            .map_err(|e| e.to_string())?;
        chart
            .draw_series(std::iter::once(PathElement::new(
                closed(recipe_values),
                ShapeStyle::from(&color).stroke_width(2),
            )))
            .map_err(|e| e.to_string())?;

        // Axis labels just beyond the outer ring
        chart
            .draw_series(axes.iter().enumerate().map(|(axis, a)| {
                Text::new(a.subject, point(axis, 1.15), ("sans-serif", 16).into_font())
            }))
            .map_err(|e| e.to_string())?;

        root.present().map_err(|e| e.to_string())?;
    }

    Ok(buffer)
}

/// Render the radar chart and write it to a PNG file
pub fn write_radar_png(
    path: &Path,
    summary: &RecipeSummary,
    width: u32,
    height: u32,
) -> Result<(), String> {
    let buffer = generate_radar_chart(summary, width, height)?;
    let img = image::RgbImage::from_raw(width, height, buffer)
        .ok_or_else(|| "chart buffer size mismatch".to_string())?;
    img.save(path).map_err(|e| e.to_string())
}
