use serde::{Deserialize, Serialize};

pub const DEFAULT_QUERY_FILE: &str = "query_x.txt";
pub const DEFAULT_ACTUAL_FILE: &str = "actual_data.txt";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlotDef {
    pub id: String,
    pub title: String,
    /// Interpolated data file, relative to the input directory.
    pub input: String,
    /// Image file, relative to the output directory.
    pub output: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlotSet {
    #[serde(default = "default_query")]
    pub query: String,
    #[serde(default = "default_actual")]
    pub actual: String,
    #[serde(default, rename = "plot")]
    pub plots: Vec<PlotDef>,
}

fn default_query() -> String {
    DEFAULT_QUERY_FILE.to_string()
}

fn default_actual() -> String {
    DEFAULT_ACTUAL_FILE.to_string()
}

impl PlotDef {
    pub fn new(id: &str, title: &str, input: &str, output: &str) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            input: input.to_string(),
            output: output.to_string(),
        }
    }
}

impl PlotSet {
    pub fn builtin() -> Self {
        Self {
            query: default_query(),
            actual: default_actual(),
            plots: vec![
                PlotDef::new(
                    "lagrange",
                    "Lagrange Interpolation",
                    "lagrange_data.txt",
                    "lagrange.png",
                ),
                PlotDef::new(
                    "newton_dd",
                    "Newton Divided Difference",
                    "newton_dd_data.txt",
                    "newton_dd.png",
                ),
                PlotDef::new(
                    "newton_forward",
                    "Newton Forward Interpolation",
                    "newton_forward_data.txt",
                    "newton_forward.png",
                ),
            ],
        }
    }
}
