use std::path::{Path, PathBuf};

use log::debug;
use plotters::prelude::*;

use super::{axis_max, LINE_COLORS, LOAD_LOOKUP_ITERATIONS, LOAD_OUTPUT, LOAD_SIZE, MARKERS};
use crate::{Algorithm, Error, LoadSeries, Result};

/// Draws one lookup time line per algorithm against the load size into `output`.
///
/// Fails with [`Error::EmptySeries`] if `series` has no points.
pub fn draw_load<P>(series: &LoadSeries, output: P) -> Result<()>
where
    P: AsRef<Path>,
{
    let (Some(&x_min), Some(&x_max)) = (series.sizes().iter().min(), series.sizes().iter().max())
    else {
        return Err(Error::EmptySeries);
    };
    // A single size still needs a non-empty axis.
    let x_range = if x_min == x_max {
        x_min.saturating_sub(1)..x_max.saturating_add(1)
    } else {
        x_min..x_max
    };
    let y_max = axis_max(
        Algorithm::variants()
            .iter()
            .flat_map(|algorithm| series.times(*algorithm).iter().copied()),
    );

    let drawing_area = BitMapBackend::new(&output, LOAD_SIZE).into_drawing_area();
    drawing_area.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&drawing_area)
        .margin(15)
        .set_label_area_size(LabelAreaPosition::Left, 70)
        .set_label_area_size(LabelAreaPosition::Bottom, 50)
        .caption(
            "Different Hash Algorithms Performance Under Various Loads",
            ("sans-serif", 28),
        )
        .build_cartesian_2d(x_range, 0u64..y_max)?;

    chart
        .configure_mesh()
        .x_desc("Load Size (Number of Keys)")
        .y_desc(format!(
            "Lookup Time for {LOAD_LOOKUP_ITERATIONS} iterations (ms)"
        ))
        .draw()?;

    for algorithm in Algorithm::variants().iter().copied() {
        let color = LINE_COLORS[algorithm.index()];
        let marker = MARKERS[algorithm.index()];

        chart
            .draw_series(LineSeries::new(series.points(algorithm), color.stroke_width(2)))?
            .label(algorithm.name())
            .legend(move |(x, y)| {
                EmptyElement::at((x + 10, y))
                    + PathElement::new(vec![(-10, 0), (10, 0)], color.stroke_width(2))
                    + Polygon::new(marker.outline(), color.filled())
            });
        chart.draw_series(
            series
                .points(algorithm)
                .map(|point| EmptyElement::at(point) + Polygon::new(marker.outline(), color.filled())),
        )?;
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperLeft)
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    drawing_area.present()?;
    debug!(
        "load chart with {} points written to {}",
        series.len(),
        output.as_ref().display()
    );
    Ok(())
}

/// Draws the load chart into [`LOAD_OUTPUT`] in the current directory.
pub fn render_load(series: &LoadSeries) -> Result<PathBuf> {
    let output = PathBuf::from(LOAD_OUTPUT);
    draw_load(series, &output)?;
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::pixels;

    #[test]
    fn writes_png() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("load.png");
        let mut series = LoadSeries::new();
        series.push(1000, [5, 10, 3, 7]);
        series.push(2000, [8, 15, 4, 9]);
        series.push(3000, [12, 20, 6, 11]);

        draw_load(&series, &output).unwrap();

        let bytes = std::fs::read(&output).unwrap();
        assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
    }

    #[test]
    fn title_and_legend_are_drawn() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("load.png");
        let mut series = LoadSeries::new();
        series.push(1000, [2, 3, 1, 2]);
        series.push(2000, [3, 4, 2, 3]);
        series.push(3000, [4, 20, 3, 5]);
        draw_load(&series, &output).unwrap();

        let image = pixels::open(&output);
        assert_eq!(image.dimensions(), LOAD_SIZE);
        assert!(pixels::count(&image, 0..LOAD_SIZE.0, 0..50, pixels::is_ink) > 0);

        // Left of the middle size every line stays near the x axis, so the upper-left corner only holds
        // the legend: one marker per algorithm, each followed by its name.
        for color in LINE_COLORS {
            let (xs, ys) =
                pixels::bounds(&image, 85..450, 50..250, pixels::is_color(color)).unwrap();
            let name_xs = xs.end..xs.end + 200;
            let name_ys = ys.start.saturating_sub(8)..ys.end + 8;
            assert!(pixels::count(&image, name_xs, name_ys, pixels::is_ink) > 0);
        }
    }

    #[test]
    fn single_point() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("single.png");
        let mut series = LoadSeries::new();
        series.push(500, [1, 1, 1, 1]);
        draw_load(&series, &output).unwrap();
        assert!(output.exists());
    }

    #[test]
    fn empty_series() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("empty.png");
        assert!(matches!(
            draw_load(&LoadSeries::new(), &output),
            Err(Error::EmptySeries)
        ));
        assert!(!output.exists());
    }
}
