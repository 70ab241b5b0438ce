pub mod driver;
pub mod fetch;
pub mod pipeline;
pub mod site;

pub use driver::WebDriverSession;
pub use fetch::HttpFetcher;
pub use pipeline::{Credentials, FeedPipeline, PipelineOptions, RunOutcome};
pub use site::SiteConfig;

pub mod prelude {
    pub use super::{
        Credentials, FeedPipeline, HttpFetcher, PipelineOptions, RunOutcome, SiteConfig,
        WebDriverSession,
    };
    pub use sw_core::prelude::*;
}
