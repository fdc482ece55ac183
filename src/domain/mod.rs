// Domain layer: run models and ports. Nothing here touches threads or the filesystem.

pub mod model;
pub mod ports;
