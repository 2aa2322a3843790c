pub mod consumer;
pub mod plugins;
pub mod response;
pub mod route;
pub mod upstream;

pub use consumer::Consumer;
pub use plugins::{ConsumerPlugins, RoutePlugins};
pub use response::AdminResponse;
pub use route::{HttpMethod, Route};
pub use upstream::{LbType, Upstream};
