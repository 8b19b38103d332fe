//! Age comparison chart.
//!
//! Takes the `(id, age)` series of one nationality from the person service
//! and rasterises it as a PNG line chart: ids on the x axis, ages on the y axis.

use std::io::Cursor;

use plotters::prelude::*;
use thiserror::Error;
use tracing::{debug, instrument};

use crate::errors::ServiceError;
use crate::persona::{AgeReport, PersonaRepository, PersonaService};

pub const CHART_WIDTH: u32 = 1600;
pub const CHART_HEIGHT: u32 = 900;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("no ages recorded for nationality {0:?}")]
    EmptySeries(String),
    #[error("drawing failed: {0}")]
    Draw(String),
    #[error("png encoding failed: {0}")]
    Encode(String),
}

fn draw_err<E: std::fmt::Display>(e: E) -> ChartError {
    ChartError::Draw(e.to_string())
}

/// Input series of the chart for one nationality.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgeSeries {
    pub nationality: String,
    pub ids: Vec<i32>,
    pub ages: Vec<i32>,
}

impl AgeSeries {
    pub fn new(nationality: &str, report: AgeReport) -> Self {
        Self { nationality: nationality.to_string(), ids: report.ids, ages: report.ages }
    }

    pub async fn load<R: PersonaRepository>(
        svc: &PersonaService<R>,
        nationality: &str,
    ) -> Result<Self, ServiceError> {
        let report = svc.age_report(nationality).await?;
        Ok(Self::new(nationality, report))
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn points(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        self.ids.iter().copied().zip(self.ages.iter().copied())
    }

    pub fn title(&self) -> String {
        format!("Age by person ID, nationality {}", self.nationality)
    }

    /// Render the series as a PNG image.
    pub fn render_png(&self) -> Result<Vec<u8>, ChartError> {
        let (Some(&x_min), Some(&x_max)) = (self.ids.iter().min(), self.ids.iter().max()) else {
            return Err(ChartError::EmptySeries(self.nationality.clone()));
        };
        // axes run over i64 so ages at the i32 limits keep a valid range
        let age_min = i64::from(self.ages.iter().copied().min().unwrap_or(0));
        let age_max = i64::from(self.ages.iter().copied().max().unwrap_or(0));
        let x_range = (i64::from(x_min) - 1)..(i64::from(x_max) + 1);
        let y_range = age_min.min(0)..(age_max + 5);
        let points = || self.points().map(|(id, age)| (i64::from(id), i64::from(age)));

        let mut buf = vec![0u8; (CHART_WIDTH * CHART_HEIGHT * 3) as usize];
        {
            let root = BitMapBackend::with_buffer(&mut buf, (CHART_WIDTH, CHART_HEIGHT))
                .into_drawing_area();
            root.fill(&WHITE).map_err(draw_err)?;

            let mut chart = ChartBuilder::on(&root)
                .caption(self.title(), ("sans-serif", 36))
                .margin(20)
                .x_label_area_size(50)
                .y_label_area_size(60)
                .build_cartesian_2d(x_range, y_range)
                .map_err(draw_err)?;

            chart
                .configure_mesh()
                .x_desc("ID")
                .y_desc("Age")
                .draw()
                .map_err(draw_err)?;

            chart.draw_series(LineSeries::new(points(), &BLUE)).map_err(draw_err)?;
            chart
                .draw_series(points().map(|p| Circle::new(p, 5, BLUE.filled())))
                .map_err(draw_err)?;

            root.present().map_err(draw_err)?;
        }

        let img = image::RgbImage::from_raw(CHART_WIDTH, CHART_HEIGHT, buf)
            .ok_or_else(|| ChartError::Encode("pixel buffer size mismatch".into()))?;
        let mut out = Cursor::new(Vec::new());
        image::DynamicImage::ImageRgb8(img)
            .write_to(&mut out, image::ImageFormat::Png)
            .map_err(|e| ChartError::Encode(e.to_string()))?;
        Ok(out.into_inner())
    }
}

/// Load the series for `nationality` and render it off the async executor.
#[instrument(skip(svc))]
pub async fn age_comparison_png<R: PersonaRepository>(
    svc: &PersonaService<R>,
    nationality: &str,
) -> Result<Vec<u8>, ServiceError> {
    let series = AgeSeries::load(svc, nationality).await?;
    if series.is_empty() {
        return Err(ChartError::EmptySeries(series.nationality).into());
    }
    let points = series.ids.len();
    let png = tokio::task::spawn_blocking(move || series.render_png())
        .await
        .map_err(|e| ChartError::Draw(format!("render task failed: {e}")))??;
    debug!(points, bytes = png.len(), "age chart rendered");
    Ok(png)
}
