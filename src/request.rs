//! Request URLs for server-rendered plots and data.
//!
//! Two route layouts exist. Repository datasets nest everything under
//! `/repositories/<repository>/datasets/<dataset>/` and address a series by
//! grid index (`x`, `y`). Flat datasets put the endpoint first
//! (`/<endpoint>/<dataset>`) and address a series by its physical axes
//! (`feedback`, `injection`).

use crate::error::{Result, SweepmapError};
use crate::selection::Selection;
use url::Url;

/// Time-series derived artifacts the server can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    /// Raw samples of the selected window.
    TimeSeriesData,
    /// Plot of the selected window.
    TimeSeriesPlot,
    /// Phase diagram with the given delay in samples.
    PhasePlot {
        /// Delay between the plotted coordinates.
        delay: u32,
    },
    /// FFT of the selected window.
    FftData,
    /// Plot of the FFT.
    FftPlot,
}

impl Endpoint {
    /// Path segment naming the endpoint.
    pub fn name(self) -> &'static str {
        match self {
            Self::TimeSeriesData => "time_series_data",
            Self::TimeSeriesPlot => "time_series_plots",
            Self::PhasePlot { .. } => "phase_plots",
            Self::FftData => "fft_data",
            Self::FftPlot => "fft_plots",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Routes {
    Nested { repository: String, dataset: String },
    Flat { dataset: String },
}

/// Builds request URLs for one dataset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestBuilder {
    base: Url,
    routes: Routes,
}

impl RequestBuilder {
    /// Routes under `/repositories/<repository>/datasets/<dataset>/`.
    pub fn nested(base: &str, repository: &str, dataset: &str) -> Result<Self> {
        Self::with_routes(
            base,
            Routes::Nested {
                repository: repository.to_string(),
                dataset: dataset.to_string(),
            },
        )
    }

    /// Routes of the form `/<endpoint>/<dataset>`.
    pub fn flat(base: &str, dataset: &str) -> Result<Self> {
        Self::with_routes(
            base,
            Routes::Flat {
                dataset: dataset.to_string(),
            },
        )
    }

    fn with_routes(base: &str, routes: Routes) -> Result<Self> {
        let base = Url::parse(base)?;
        if base.cannot_be_a_base() {
            return Err(SweepmapError::Url(
                url::ParseError::RelativeUrlWithCannotBeABaseBase,
            ));
        }
        Ok(Self { base, routes })
    }

    /// List of map names in the dataset.
    pub fn map_names_url(&self) -> Url {
        self.resource("map_names", &[])
    }

    /// Samples of one map.
    pub fn map_data_url(&self, map_name: &str) -> Url {
        self.resource("map_data", &[map_name])
    }

    /// The dataset's README.
    pub fn readme_url(&self) -> Url {
        self.resource("readme", &[])
    }

    /// A time-series artifact for the selected point and window.
    pub fn time_series_url(&self, endpoint: Endpoint, selection: &Selection) -> Url {
        let mut url = self.resource(endpoint.name(), &[]);
        {
            let mut query = url.query_pairs_mut();
            match self.routes {
                Routes::Nested { .. } => {
                    query
                        .append_pair("x", &selection.x_index.to_string())
                        .append_pair("y", &selection.y_index.to_string());
                },
                Routes::Flat { .. } => {
                    query
                        .append_pair("feedback", &selection.y_index.to_string())
                        .append_pair("injection", &selection.x_index.to_string());
                },
            }
            query
                .append_pair("from", &selection.from_time().to_string())
                .append_pair("to", &selection.to_time().to_string());
            if let Endpoint::PhasePlot { delay } = endpoint {
                query.append_pair("delay", &delay.to_string());
            }
        }
        url
    }

    fn resource(&self, name: &str, tail: &[&str]) -> Url {
        let mut url = self.base.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty();
            match &self.routes {
                Routes::Nested {
                    repository,
                    dataset,
                } => {
                    segments
                        .push("repositories")
                        .push(repository)
                        .push("datasets")
                        .extend(dataset.split('/'))
                        .push(name);
                },
                Routes::Flat { dataset } => {
                    segments.push(name).extend(dataset.split('/'));
                },
            }
            segments.extend(tail);
        }
        url
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::SeriesInfo;
    use crate::selection::TimeWindow;

    fn selection() -> Selection {
        let series = SeriesInfo::new(20_000, 50).unwrap();
        Selection::at(12, 34, &series).with_window(TimeWindow::new(1_000, 4_999).unwrap())
    }

    #[test]
    fn nested_time_series_urls() {
        let builder = RequestBuilder::nested("http://localhost:5000", "laser", "run1").unwrap();
        let url = builder.time_series_url(Endpoint::TimeSeriesPlot, &selection());
        assert_eq!(
            url.as_str(),
            "http://localhost:5000/repositories/laser/datasets/run1/time_series_plots?x=12&y=34&from=1000&to=4999"
        );

        let phase = builder.time_series_url(Endpoint::PhasePlot { delay: 3 }, &selection());
        assert!(phase.as_str().ends_with("/phase_plots?x=12&y=34&from=1000&to=4999&delay=3"));
    }

    #[test]
    fn flat_urls_use_physical_axes() {
        let builder = RequestBuilder::flat("http://example.org/", "datasets/Sample dataset").unwrap();
        let url = builder.time_series_url(Endpoint::TimeSeriesData, &selection());
        assert_eq!(
            url.as_str(),
            "http://example.org/time_series_data/datasets/Sample%20dataset?feedback=34&injection=12&from=1000&to=4999"
        );
        assert_eq!(
            builder.map_data_url("FBT_map.csv").as_str(),
            "http://example.org/map_data/datasets/Sample%20dataset/FBT_map.csv"
        );
    }

    #[test]
    fn dataset_resource_urls() {
        let builder = RequestBuilder::nested("http://host/app/", "repo", "set").unwrap();
        assert_eq!(
            builder.map_names_url().as_str(),
            "http://host/app/repositories/repo/datasets/set/map_names"
        );
        assert_eq!(
            builder.map_data_url("gain").as_str(),
            "http://host/app/repositories/repo/datasets/set/map_data/gain"
        );
        assert_eq!(
            builder.readme_url().as_str(),
            "http://host/app/repositories/repo/datasets/set/readme"
        );
    }

    #[test]
    fn rejects_unusable_base() {
        assert!(RequestBuilder::flat("not a url", "d").is_err());
        assert!(RequestBuilder::flat("mailto:someone@example.org", "d").is_err());
    }
}
