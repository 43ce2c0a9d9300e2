use std::path::{Path, PathBuf};

use log::debug;
use plotters::{
    coord::{ranged1d::SegmentValue, Shift},
    prelude::*,
    style::text_anchor::{HPos, Pos, VPos},
};

use super::{axis_max, BAR_COLORS, COMPARISON_OUTPUT, COMPARISON_SIZE, REPORT_LOOKUP_ITERATIONS};
use crate::{Algorithm, ComparisonResult, Result};

/// Distance between the top of a bar and its value label, in pixels.
const LABEL_OFFSET: i32 = 5;

/// Draws the build time and lookup time bar charts side by side into `output`.
pub fn draw_comparison<P>(result: &ComparisonResult, output: P) -> Result<()>
where
    P: AsRef<Path>,
{
    let drawing_area = BitMapBackend::new(&output, COMPARISON_SIZE).into_drawing_area();
    drawing_area.fill(&WHITE)?;

    let panels = drawing_area.split_evenly((1, 2));
    let lookup_caption = format!("Lookup Time (ms, {REPORT_LOOKUP_ITERATIONS} iterations)");
    draw_bars(&panels[0], "Build Time Comparison (ms)", result.build_times())?;
    draw_bars(&panels[1], &lookup_caption, result.lookup_times())?;

    drawing_area.present()?;
    debug!("comparison chart written to {}", output.as_ref().display());
    Ok(())
}

/// Draws the comparison chart into [`COMPARISON_OUTPUT`] in the current directory.
pub fn render_comparison(result: &ComparisonResult) -> Result<PathBuf> {
    let output = PathBuf::from(COMPARISON_OUTPUT);
    draw_comparison(result, &output)?;
    Ok(output)
}

fn draw_bars(
    area: &DrawingArea<BitMapBackend<'_>, Shift>,
    caption: &str,
    values: [u64; Algorithm::COUNT],
) -> Result<()> {
    let mut chart = ChartBuilder::on(area)
        .margin(10)
        .set_label_area_size(LabelAreaPosition::Left, 70)
        .set_label_area_size(LabelAreaPosition::Bottom, 40)
        .caption(caption, ("sans-serif", 24))
        .build_cartesian_2d(
            (0u32..Algorithm::COUNT as u32).into_segmented(),
            0u64..axis_max(values),
        )?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(Algorithm::COUNT)
        .x_label_formatter(&|x| match x {
            SegmentValue::CenterOf(i) => Algorithm::from_index(*i as usize)
                .map(|algorithm| algorithm.name().to_owned())
                .unwrap_or_default(),
            _ => String::new(),
        })
        .y_desc("Time (milliseconds)")
        .draw()?;

    chart.draw_series(
        Histogram::vertical(&chart)
            .style_func(|x, _| match x {
                SegmentValue::Exact(i) | SegmentValue::CenterOf(i) => {
                    BAR_COLORS[*i as usize % BAR_COLORS.len()].filled()
                }
                SegmentValue::Last => BLACK.filled(),
            })
            .margin(20)
            .data(values.iter().enumerate().map(|(i, value)| (i as u32, *value))),
    )?;

    let label_style = TextStyle::from(("sans-serif", 16).into_font())
        .pos(Pos::new(HPos::Center, VPos::Bottom));
    chart.draw_series(values.iter().enumerate().map(|(i, value)| {
        EmptyElement::at((SegmentValue::CenterOf(i as u32), *value))
            + Text::new(value.to_string(), (0, -LABEL_OFFSET), label_style.clone())
    }))?;

    Ok(())
}
