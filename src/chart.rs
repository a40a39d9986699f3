use crate::error::ChartError;
use crate::symlog::SymLogCoord;
use crate::table::{ResultsTable, Series};
use plotters::prelude::*;
use std::path::{Path, PathBuf};

// Figure geometry: 10x6 inches at 300 DPI.
const FIGURE_WIDTH: u32 = 3000;
const FIGURE_HEIGHT: u32 = 1800;

// Font sizes, sized for the 300 DPI raster.
const TITLE_FONT_SIZE: u32 = 64;
const AXIS_LABEL_FONT_SIZE: u32 = 42;
const TICK_LABEL_FONT_SIZE: u32 = 32;
const LEGEND_FONT_SIZE: u32 = 36;

// Layout tuning. Label areas are generous so tick labels and axis
// titles never clip at this resolution.
const MARGIN: u32 = 40;
const X_LABEL_AREA_SIZE: u32 = 120;
const Y_LABEL_AREA_SIZE: u32 = 160;

const LINE_STROKE_WIDTH: u32 = 4;
const MARKER_SIZE: i32 = 9;

const CHART_TITLE: &str = "Sorting Algorithm Performance Comparison";
const X_AXIS_TITLE: &str = "Input size (n)";
const Y_AXIS_TITLE: &str = "Execution time (s)";

/// Color palette, one entry per series in first-seen order (cycled when
/// there are more algorithms than colors).
const COLORS: &[RGBColor] = &[
    RGBColor(66, 133, 244),  // Blue
    RGBColor(234, 67, 53),   // Red
    RGBColor(52, 168, 83),   // Green
    RGBColor(251, 188, 5),   // Yellow
    RGBColor(170, 100, 255), // Purple
    RGBColor(255, 128, 0),   // Orange
];

fn series_color(index: usize) -> RGBColor {
    COLORS[index % COLORS.len()]
}

/// Where to read the results from and where to put the chart.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    /// Open the rendered image in the system viewer afterwards.
    pub show: bool,
}

/// Read the results table, render the comparison chart, and write it as a
/// PNG. The image is rendered into a temporary file in the destination
/// directory and renamed into place, so the output path either holds a
/// complete image or nothing.
pub fn render(config: &RenderConfig) -> Result<(), ChartError> {
    let table = ResultsTable::from_csv(&config.input)?;
    let series = table.series();

    write_chart(&series, &config.output)?;
    println!("Generated: {}", config.output.display());

    if config.show {
        if let Err(err) = opener::open(&config.output) {
            eprintln!("Warning: could not open image viewer: {}", err);
        }
    }

    Ok(())
}

fn write_chart(series: &[Series], output: &Path) -> Result<(), ChartError> {
    let parent = match output.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(parent).map_err(|e| ChartError::write_failure(output, e))?;

    let tmp = tempfile::Builder::new()
        .prefix(".chart-")
        .suffix(".png")
        .tempfile_in(parent)
        .map_err(|e| ChartError::write_failure(output, e))?;

    draw_chart(series, tmp.path())?;

    tmp.persist(output)
        .map_err(|e| ChartError::write_failure(output, e.error))?;
    Ok(())
}

fn draw_chart(series: &[Series], path: &Path) -> Result<(), ChartError> {
    let root = BitMapBackend::new(path, (FIGURE_WIDTH, FIGURE_HEIGHT)).into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| ChartError::write_failure(path, e))?;

    let max_size = series
        .iter()
        .flat_map(|s| s.points.iter())
        .map(|&(size, _)| size as f64)
        .fold(0.0_f64, f64::max);
    let max_time = series
        .iter()
        .flat_map(|s| s.points.iter())
        .map(|&(_, time)| time)
        .fold(0.0_f64, f64::max);

    // Headroom above the extremes; guard against an all-zero column.
    let x_end = (max_size * 1.1).max(1.0);
    let y_end = (max_time * 1.05).max(1e-9);

    let mut chart = ChartBuilder::on(&root)
        .caption(CHART_TITLE, ("sans-serif", TITLE_FONT_SIZE))
        .margin(MARGIN)
        .x_label_area_size(X_LABEL_AREA_SIZE)
        .y_label_area_size(Y_LABEL_AREA_SIZE)
        .build_cartesian_2d(SymLogCoord::new(0.0..x_end), 0.0..y_end)
        .map_err(|e| ChartError::write_failure(path, e))?;

    chart
        .configure_mesh()
        .x_desc(X_AXIS_TITLE)
        .y_desc(Y_AXIS_TITLE)
        .bold_line_style(BLACK.mix(0.25))
        .light_line_style(BLACK.mix(0.1))
        .label_style(("sans-serif", TICK_LABEL_FONT_SIZE))
        .axis_desc_style(("sans-serif", AXIS_LABEL_FONT_SIZE))
        .draw()
        .map_err(|e| ChartError::write_failure(path, e))?;

    for (idx, s) in series.iter().enumerate() {
        let color = series_color(idx);
        let points: Vec<(f64, f64)> = s
            .points
            .iter()
            .map(|&(size, time)| (size as f64, time))
            .collect();

        chart
            .draw_series(LineSeries::new(
                points.clone(),
                color.stroke_width(LINE_STROKE_WIDTH),
            ))
            .map_err(|e| ChartError::write_failure(path, e))?
            .label(s.label.as_str())
            .legend(move |(x, y)| {
                PathElement::new(
                    vec![(x, y), (x + 40, y)],
                    color.stroke_width(LINE_STROKE_WIDTH),
                )
            });

        chart
            .draw_series(PointSeries::of_element(
                points,
                MARKER_SIZE,
                color.filled(),
                &|coord, size, style| EmptyElement::at(coord) + Circle::new((0, 0), size, style),
            ))
            .map_err(|e| ChartError::write_failure(path, e))?;
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperLeft)
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .label_font(("sans-serif", LEGEND_FONT_SIZE))
        .draw()
        .map_err(|e| ChartError::write_failure(path, e))?;

    root.present()
        .map_err(|e| ChartError::write_failure(path, e))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    const PNG_MAGIC: &[u8] = &[0x89, b'P', b'N', b'G'];

    fn write_input(dir: &TempDir, contents: &str) -> PathBuf {
        let path = dir.path().join("tempos.csv");
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        path
    }

    fn config(input: PathBuf, output: PathBuf) -> RenderConfig {
        RenderConfig {
            input,
            output,
            show: false,
        }
    }

    #[test]
    fn test_render_end_to_end() {
        let dir = TempDir::new().unwrap();
        let input = write_input(
            &dir,
            "Algoritmo,Tamanho,Tempo\n\
             BubbleSort,10,0.0001\n\
             BubbleSort,100,0.01\n\
             QuickSort,10,0.00005\n\
             QuickSort,100,0.0008\n",
        );
        let output = dir.path().join("grafico_comparacao.png");

        render(&config(input, output.clone())).unwrap();

        let bytes = std::fs::read(&output).unwrap();
        assert!(bytes.starts_with(PNG_MAGIC));
    }

    #[test]
    fn test_render_creates_output_directory() {
        let dir = TempDir::new().unwrap();
        let input = write_input(&dir, "Algoritmo,Tamanho,Tempo\nMergeSort,1000,0.002\n");
        let output = dir.path().join("results").join("chart.png");

        render(&config(input, output.clone())).unwrap();
        assert!(output.exists());
    }

    #[test]
    fn test_render_single_row() {
        let dir = TempDir::new().unwrap();
        let input = write_input(&dir, "Algoritmo,Tamanho,Tempo\nRadixSort,0,0.0\n");
        let output = dir.path().join("chart.png");

        render(&config(input, output.clone())).unwrap();
        assert!(output.exists());
    }

    #[test]
    fn test_render_is_deterministic() {
        let dir = TempDir::new().unwrap();
        let input = write_input(
            &dir,
            "Algoritmo,Tamanho,Tempo\n\
             BubbleSort,10,0.0001\n\
             QuickSort,10,0.00005\n",
        );
        let first = dir.path().join("first.png");
        let second = dir.path().join("second.png");

        render(&config(input.clone(), first.clone())).unwrap();
        render(&config(input, second.clone())).unwrap();

        let a = std::fs::read(&first).unwrap();
        let b = std::fs::read(&second).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_render_missing_input() {
        let dir = TempDir::new().unwrap();
        let err = render(&config(
            dir.path().join("missing.csv"),
            dir.path().join("chart.png"),
        ))
        .unwrap_err();
        assert!(matches!(err, ChartError::FileNotFound(_)));
    }

    #[test]
    fn test_failed_render_leaves_no_output() {
        let dir = TempDir::new().unwrap();
        let input = write_input(&dir, "Algoritmo,Tamanho,Tempo\n");
        let output = dir.path().join("chart.png");

        let err = render(&config(input, output.clone())).unwrap_err();
        assert!(matches!(err, ChartError::MalformedTable { .. }));
        assert!(!output.exists());
    }

    #[test]
    fn test_series_color_cycles() {
        assert_eq!(series_color(0), series_color(COLORS.len()));
    }
}
