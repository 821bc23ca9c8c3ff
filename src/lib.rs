pub mod cli;
pub mod input;
pub mod model;
pub mod pipeline;
pub mod plots;
pub mod render;
pub mod report;

pub mod prelude {
    pub use crate::model::dataset::{Dataset, Marker};
    pub use crate::pipeline::stage1_load::PlotCtx;
    pub use crate::plots::defs::{PlotDef, PlotSet};
}
